use chrono::{DateTime, Utc};

use super::alias::{decode_file_reference, AliasClassifier};
use super::{ContentKind, ContentMap};
use crate::ids::EntryId;

/// UI-facing category of an entry, derived from its strongest representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    Document,
    Link,
    Audio,
    RichText,
    Photo,
    Text,
}

/// One captured pasteboard snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub alias: String,
    pub content: ContentMap,
    pub pinned: bool,
}

impl Entry {
    /// Build an entry with an explicit alias. Used for restored or synthetic
    /// entries; captures go through [`Entry::capture`].
    pub fn new(alias: impl Into<String>, content: ContentMap) -> Self {
        Self {
            id: EntryId::new(),
            alias: alias.into(),
            content,
            pinned: false,
        }
    }

    /// Classify a freshly read set of representations.
    ///
    /// Returns `None` for an empty capture.
    pub fn capture(content: ContentMap, captured_at: DateTime<Utc>) -> Option<Self> {
        if content.is_empty() {
            return None;
        }

        let mut classifier = AliasClassifier::new(captured_at);
        for (kind, bytes) in content.iter() {
            classifier.observe(kind, bytes);
        }

        Some(Self::new(classifier.finish(), content))
    }

    pub fn display_kind(&self) -> DisplayKind {
        let has = |kind| self.content.contains(kind);
        if has(ContentKind::FileUrl) {
            DisplayKind::Document
        } else if has(ContentKind::Url) {
            DisplayKind::Link
        } else if has(ContentKind::Sound) {
            DisplayKind::Audio
        } else if has(ContentKind::Rtf) {
            DisplayKind::RichText
        } else if has(ContentKind::Tiff) || has(ContentKind::Png) {
            DisplayKind::Photo
        } else {
            DisplayKind::Text
        }
    }

    /// Decoded filesystem path of the entry's file reference, if any.
    pub fn absolute_path(&self) -> Option<String> {
        self.content
            .get(ContentKind::FileUrl)
            .map(decode_file_reference)
    }

    /// Write-back override that pastes the file path as plain text.
    pub fn absolute_path_override(&self) -> Option<ContentMap> {
        self.absolute_path()
            .map(|path| ContentMap::single(ContentKind::PlainText, path.into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn empty_capture_is_rejected() {
        assert!(Entry::capture(ContentMap::new(), at()).is_none());
    }

    #[test]
    fn capture_starts_unpinned_with_alias() {
        let entry = Entry::capture(ContentMap::single(ContentKind::PlainText, "hello"), at()).unwrap();
        assert_eq!(entry.alias, "hello");
        assert!(!entry.pinned);
        assert_eq!(entry.display_kind(), DisplayKind::Text);
    }

    #[test]
    fn capture_classifies_in_kind_order() {
        let content: ContentMap = [
            (ContentKind::PlainText, b"doc.pdf".to_vec()),
            (ContentKind::FileUrl, b"file:///Users/a/report.pdf".to_vec()),
        ]
        .into_iter()
        .collect();

        let entry = Entry::capture(content, at()).unwrap();
        assert_eq!(entry.alias, "report.pdf");
        assert_eq!(entry.display_kind(), DisplayKind::Document);
    }

    #[test]
    fn display_kind_priority() {
        let photo: ContentMap = [
            (ContentKind::Tiff, vec![1]),
            (ContentKind::PlainText, b"x".to_vec()),
        ]
        .into_iter()
        .collect();
        assert_eq!(Entry::new("p", photo).display_kind(), DisplayKind::Photo);

        let link: ContentMap = [
            (ContentKind::Url, b"https://example.com".to_vec()),
            (ContentKind::Rtf, b"{\\rtf1}".to_vec()),
        ]
        .into_iter()
        .collect();
        assert_eq!(Entry::new("l", link).display_kind(), DisplayKind::Link);

        let audio = ContentMap::single(ContentKind::Sound, vec![0]);
        assert_eq!(Entry::new("a", audio).display_kind(), DisplayKind::Audio);

        let rich = ContentMap::single(ContentKind::Rtf, b"{\\rtf1}".to_vec());
        assert_eq!(Entry::new("r", rich).display_kind(), DisplayKind::RichText);
    }

    #[test]
    fn absolute_path_override_uses_decoded_path() {
        let entry = Entry::new(
            "My Report.txt",
            ContentMap::single(ContentKind::FileUrl, "file:///Users/a/My%20Report.txt"),
        );

        let override_map = entry.absolute_path_override().unwrap();
        assert_eq!(override_map.len(), 1);
        assert_eq!(
            override_map.get(ContentKind::PlainText),
            Some("/Users/a/My Report.txt".as_bytes())
        );
    }

    #[test]
    fn absolute_path_override_requires_file_reference() {
        let entry = Entry::new("hello", ContentMap::single(ContentKind::PlainText, "hello"));
        assert!(entry.absolute_path().is_none());
        assert!(entry.absolute_path_override().is_none());
    }
}
