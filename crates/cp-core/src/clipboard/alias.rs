//! Alias derivation for freshly captured entries.
//!
//! Every representation of a capture is shown to an [`AliasClassifier`] in
//! [`ContentKind`] order. The first rule producing a usable alias wins:
//!
//! - `FileUrl`: last path component of the decoded path
//! - `PlainText`: the text itself, compacted
//! - image and audio kinds: a generic media label
//!
//! A file reference whose last component is empty leaves the *empty
//! sentinel* behind. Plain text arriving after the sentinel does not get a
//! text alias; it gets the media label instead. This mirrors how captures
//! have always been labelled and is kept on purpose, see DESIGN.md.

use chrono::{DateTime, Utc};
use std::borrow::Cow;

use super::ContentKind;

/// Longest alias derived from content, in characters.
pub const ALIAS_MAX_CHARS: usize = 50;

const FILE_SCHEME: &str = "file://";

#[derive(Debug, Clone, PartialEq, Eq)]
enum AliasState {
    Unclassified,
    Classified(String),
}

/// Accumulates the alias of one capture.
#[derive(Debug, Clone)]
pub struct AliasClassifier {
    state: AliasState,
    captured_at: DateTime<Utc>,
}

impl AliasClassifier {
    pub fn new(captured_at: DateTime<Utc>) -> Self {
        Self {
            state: AliasState::Unclassified,
            captured_at,
        }
    }

    pub fn observe(&mut self, kind: ContentKind, bytes: &[u8]) {
        match kind {
            ContentKind::FileUrl => {
                if self.state == AliasState::Unclassified {
                    self.state = AliasState::Classified(file_reference_alias(bytes));
                }
            }
            ContentKind::PlainText => match &self.state {
                AliasState::Unclassified => {
                    self.state = AliasState::Classified(text_alias(bytes));
                }
                AliasState::Classified(alias) if alias.is_empty() => {
                    self.state = AliasState::Classified(media_label(self.captured_at));
                }
                AliasState::Classified(_) => {}
            },
            kind if kind.is_media() => {
                if !self.has_alias() {
                    self.state = AliasState::Classified(media_label(self.captured_at));
                }
            }
            _ => {}
        }
    }

    /// Whether a non-empty alias has been derived so far.
    pub fn has_alias(&self) -> bool {
        matches!(&self.state, AliasState::Classified(alias) if !alias.is_empty())
    }

    /// Final alias. Captures that never produced a usable alias fall back to
    /// the media label so that live entries are never unnamed.
    pub fn finish(self) -> String {
        match self.state {
            AliasState::Classified(alias) if !alias.is_empty() => alias,
            _ => media_label(self.captured_at),
        }
    }
}

/// `Media copied on <timestamp>`.
pub fn media_label(at: DateTime<Utc>) -> String {
    format!("Media copied on {}", at.format("%Y-%m-%d %H:%M:%S %z"))
}

/// Decoded filesystem path of a `public.file-url` payload.
///
/// Strips the `file://` scheme and percent-decoding. Payloads that are not
/// valid percent-encoded UTF-8 are returned as-is.
pub fn decode_file_reference(bytes: &[u8]) -> String {
    let raw = String::from_utf8_lossy(bytes);
    let raw = raw.trim_end_matches('\0');
    let without_scheme = raw.strip_prefix(FILE_SCHEME).unwrap_or(raw);
    match urlencoding::decode(without_scheme) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => without_scheme.to_string(),
    }
}

fn file_reference_alias(bytes: &[u8]) -> String {
    let path = decode_file_reference(bytes);
    let name = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    truncate_chars(name, ALIAS_MAX_CHARS).into_owned()
}

fn text_alias(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    truncate_chars(&text, ALIAS_MAX_CHARS)
        .trim_matches(is_newline)
        .chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\t'))
        .collect()
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn truncate_chars(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Borrowed(&s[..byte_idx]),
        None => Cow::Borrowed(s),
    }
}
