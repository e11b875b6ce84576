mod login_item;

pub use login_item::{LoginItemAutostart, DEFAULT_APP_NAME};
