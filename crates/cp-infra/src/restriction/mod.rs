mod catalog;
mod json_repository;

pub use catalog::DirectoryAppCatalog;
pub use json_repository::{JsonRestrictionRepository, RESTRICTIONS_KEY};
