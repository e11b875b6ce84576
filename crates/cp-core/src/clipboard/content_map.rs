use super::ContentKind;

/// Raw representations of one clipboard snapshot, one optional buffer per
/// [`ContentKind`].
///
/// Several representations may coexist (plain text next to a file URL, for
/// instance). Iteration always follows the declaration order of
/// [`ContentKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMap {
    slots: [Option<Vec<u8>>; ContentKind::COUNT],
}

impl ContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding a single representation.
    pub fn single(kind: ContentKind, bytes: impl Into<Vec<u8>>) -> Self {
        let mut map = Self::new();
        map.insert(kind, bytes);
        map
    }

    /// Store `bytes` for `kind`, returning the previous buffer if any.
    pub fn insert(&mut self, kind: ContentKind, bytes: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.slots[kind.index()].replace(bytes.into())
    }

    pub fn remove(&mut self, kind: ContentKind) -> Option<Vec<u8>> {
        self.slots[kind.index()].take()
    }

    pub fn get(&self, kind: ContentKind) -> Option<&[u8]> {
        self.slots[kind.index()].as_deref()
    }

    pub fn contains(&self, kind: ContentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ContentKind> + '_ {
        self.iter().map(|(kind, _)| kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContentKind, &[u8])> + '_ {
        ContentKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|bytes| (kind, bytes)))
    }

    /// Sum of all buffer sizes in bytes.
    pub fn total_size_bytes(&self) -> usize {
        self.iter().map(|(_, bytes)| bytes.len()).sum()
    }
}

impl FromIterator<(ContentKind, Vec<u8>)> for ContentMap {
    fn from_iter<I: IntoIterator<Item = (ContentKind, Vec<u8>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (kind, bytes) in iter {
            map.insert(kind, bytes);
        }
        map
    }
}
