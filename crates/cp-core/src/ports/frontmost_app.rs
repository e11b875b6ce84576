use std::path::PathBuf;

/// Location of the application currently in front.
pub trait FrontmostAppPort: Send + Sync {
    /// Bundle location of the frontmost application, `None` when unknown.
    fn frontmost_location(&self) -> Option<PathBuf>;
}
