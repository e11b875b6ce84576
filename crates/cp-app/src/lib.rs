//! CopyPad application layer
//!
//! Use cases driving the pasteboard history, and the [`CopyPad`] service
//! that owns the history for the lifetime of the process.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use app::CopyPad;
pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use usecases::{PasteboardPoller, PollOutcome, RestrictionsController};
