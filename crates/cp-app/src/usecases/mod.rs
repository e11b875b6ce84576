//! Use cases driving the pasteboard history.
//!
//! [PasteboardPoller]       → captures new pasteboard content
//! [WriteBackUseCase]       → re-pastes an entry without re-capturing it
//! [ClearHistoryUseCase]    → empties pasteboard and unpinned history
//! [RestrictionsController] → per-application capture opt-out
//! [SyncLaunchAtLogin]      → keeps the login item in line with config

pub mod clear_history;
pub mod launch_at_login;
pub mod poll_pasteboard;
pub mod restrictions;
pub mod write_back;

pub use clear_history::ClearHistoryUseCase;
pub use launch_at_login::SyncLaunchAtLogin;
pub use poll_pasteboard::{PasteboardPoller, PollOutcome};
pub use restrictions::RestrictionsController;
pub use write_back::WriteBackUseCase;
