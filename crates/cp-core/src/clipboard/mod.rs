mod alias;
mod change_count;
mod content_map;
mod entry;
mod history;
mod kind;

pub use alias::{decode_file_reference, media_label, AliasClassifier, ALIAS_MAX_CHARS};
pub use change_count::ChangeCount;
pub use content_map::ContentMap;
pub use entry::{DisplayKind, Entry};
pub use history::{History, HistoryError};
pub use kind::ContentKind;
