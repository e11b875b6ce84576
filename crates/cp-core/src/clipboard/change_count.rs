use std::fmt;

/// Value of the OS pasteboard change counter.
///
/// The counter only ever moves forward while the process is alive; the
/// poller compares observed values against its baseline for equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ChangeCount(pub i64);

impl ChangeCount {
    pub fn value(self) -> i64 {
        self.0
    }

    /// Counter value after one more pasteboard write.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for ChangeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChangeCount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
