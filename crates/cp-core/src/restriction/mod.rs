//! Per-application capture restrictions.

mod app;
mod set;

pub use app::InstalledApp;
pub use set::RestrictionSet;
