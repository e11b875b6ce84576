use serde::{Deserialize, Serialize};
use std::fmt;

/// Pasteboard representations the history engine understands.
///
/// The declaration order is significant: the poller reads kinds in this
/// order and alias classification is evaluated in the same order, so
/// `FileUrl` is always seen before `PlainText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentKind {
    Url,
    FileContents,
    FileUrl,
    Html,
    Pdf,
    Png,
    Rtf,
    Rtfd,
    Sound,
    PlainText,
    TabularText,
    Tiff,
    Color,
    FindPanelSearchOptions,
    MultipleTextSelection,
    Ruler,
    TextFinderOptions,
}

impl ContentKind {
    pub const COUNT: usize = 17;

    pub const ALL: [ContentKind; Self::COUNT] = [
        ContentKind::Url,
        ContentKind::FileContents,
        ContentKind::FileUrl,
        ContentKind::Html,
        ContentKind::Pdf,
        ContentKind::Png,
        ContentKind::Rtf,
        ContentKind::Rtfd,
        ContentKind::Sound,
        ContentKind::PlainText,
        ContentKind::TabularText,
        ContentKind::Tiff,
        ContentKind::Color,
        ContentKind::FindPanelSearchOptions,
        ContentKind::MultipleTextSelection,
        ContentKind::Ruler,
        ContentKind::TextFinderOptions,
    ];

    /// Slot of this kind inside a [`ContentMap`](super::ContentMap).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Uniform type identifier used by the macOS pasteboard.
    pub fn type_identifier(self) -> &'static str {
        match self {
            ContentKind::Url => "public.url",
            ContentKind::FileContents => "com.apple.cocoa.pasteboard.file-contents",
            ContentKind::FileUrl => "public.file-url",
            ContentKind::Html => "public.html",
            ContentKind::Pdf => "com.adobe.pdf",
            ContentKind::Png => "public.png",
            ContentKind::Rtf => "public.rtf",
            ContentKind::Rtfd => "com.apple.flat-rtfd",
            ContentKind::Sound => "com.apple.cocoa.pasteboard.sound",
            ContentKind::PlainText => "public.utf8-plain-text",
            ContentKind::TabularText => "public.utf8-tab-separated-values-text",
            ContentKind::Tiff => "public.tiff",
            ContentKind::Color => "com.apple.cocoa.pasteboard.color",
            ContentKind::FindPanelSearchOptions => {
                "com.apple.cocoa.pasteboard.find-panel-search-options"
            }
            ContentKind::MultipleTextSelection => {
                "com.apple.cocoa.pasteboard.multiple-text-selection"
            }
            ContentKind::Ruler => "com.apple.cocoa.pasteboard.paragraph-formatting",
            ContentKind::TextFinderOptions => "com.apple.cocoa.pasteboard.text-finder-options",
        }
    }

    pub fn from_type_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_identifier() == identifier)
    }

    /// Image and audio kinds, labelled generically instead of by content.
    pub fn is_media(self) -> bool {
        matches!(self, ContentKind::Png | ContentKind::Tiff | ContentKind::Sound)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, kind) in ContentKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }

    #[test]
    fn file_url_is_classified_before_plain_text() {
        assert!(ContentKind::FileUrl.index() < ContentKind::PlainText.index());
    }

    #[test]
    fn type_identifier_lookup_is_inverse() {
        for kind in ContentKind::ALL {
            assert_eq!(ContentKind::from_type_identifier(kind.type_identifier()), Some(kind));
        }
        assert_eq!(ContentKind::from_type_identifier("dyn.unknown"), None);
    }

    #[test]
    fn only_image_and_audio_kinds_are_media() {
        let media: Vec<_> = ContentKind::ALL.into_iter().filter(|k| k.is_media()).collect();
        assert_eq!(media, vec![ContentKind::Png, ContentKind::Sound, ContentKind::Tiff]);
    }
}
