#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::WorkspaceFrontmostApp as SystemFrontmostApp;

#[cfg(not(target_os = "macos"))]
pub use unsupported::UnknownFrontmostApp as SystemFrontmostApp;

#[cfg(not(target_os = "macos"))]
mod unsupported {
    use cp_core::ports::FrontmostAppPort;
    use std::path::PathBuf;

    /// Frontmost application lookup for platforms without bundle locations.
    /// Restrictions never match.
    #[derive(Debug, Default)]
    pub struct UnknownFrontmostApp;

    impl UnknownFrontmostApp {
        pub fn new() -> Self {
            Self
        }
    }

    impl FrontmostAppPort for UnknownFrontmostApp {
        fn frontmost_location(&self) -> Option<PathBuf> {
            None
        }
    }
}
