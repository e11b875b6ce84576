pub mod defaults;
pub mod restriction;
pub mod time;

pub use defaults::FileDefaultsStore;
pub use restriction::{DirectoryAppCatalog, JsonRestrictionRepository};
pub use time::SystemClock;
