use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, trace};

use cp_core::clipboard::{ChangeCount, ContentKind, ContentMap, Entry, History};
use cp_core::ids::EntryId;
use cp_core::ports::{ClockPort, FrontmostAppPort, PasteboardPort};
use cp_core::restriction::RestrictionSet;

/// Result of one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Change counter matches the baseline.
    Unchanged,
    /// Changed while a restricted application was frontmost; nothing captured.
    Restricted,
    /// Changed, but no supported representation could be read.
    Empty,
    /// A new entry was inserted into the history.
    Captured(EntryId),
}

/// Samples the pasteboard change counter and turns new content into
/// history entries.
///
/// The baseline is the last counter value accounted for. Any observed value
/// different from it counts as a change; self-writes are hidden by moving
/// the baseline ahead of them (see [`PasteboardPoller::expect_self_write`]).
pub struct PasteboardPoller {
    pasteboard: Arc<dyn PasteboardPort>,
    frontmost_app: Arc<dyn FrontmostAppPort>,
    clock: Arc<dyn ClockPort>,
    baseline: ChangeCount,
}

impl PasteboardPoller {
    /// Poller whose baseline is the current counter, so content already on
    /// the pasteboard at startup is not captured.
    pub fn new(
        pasteboard: Arc<dyn PasteboardPort>,
        frontmost_app: Arc<dyn FrontmostAppPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self> {
        let baseline = pasteboard
            .change_count()
            .context("read initial pasteboard change count")?;
        Ok(Self::with_baseline(pasteboard, frontmost_app, clock, baseline))
    }

    pub fn with_baseline(
        pasteboard: Arc<dyn PasteboardPort>,
        frontmost_app: Arc<dyn FrontmostAppPort>,
        clock: Arc<dyn ClockPort>,
        baseline: ChangeCount,
    ) -> Self {
        Self {
            pasteboard,
            frontmost_app,
            clock,
            baseline,
        }
    }

    pub fn baseline(&self) -> ChangeCount {
        self.baseline
    }

    /// Account for one upcoming pasteboard clear made by this process.
    pub fn expect_self_write(&mut self) {
        self.baseline = self.baseline.next();
    }

    /// Adopt the current counter as the baseline.
    pub fn resync(&mut self) -> Result<()> {
        self.baseline = self
            .pasteboard
            .change_count()
            .context("read pasteboard change count")?;
        Ok(())
    }

    pub fn poll_once(
        &mut self,
        history: &mut History,
        restrictions: &RestrictionSet,
    ) -> Result<PollOutcome> {
        let observed = self
            .pasteboard
            .change_count()
            .context("read pasteboard change count")?;
        if observed == self.baseline {
            return Ok(PollOutcome::Unchanged);
        }

        let previous = self.baseline;
        self.baseline = observed;

        if let Some(location) = self.frontmost_app.frontmost_location() {
            if restrictions.is_restricted(&location) {
                info!(
                    source = %location.display(),
                    change_count = %observed,
                    "pasteboard change from restricted application ignored"
                );
                return Ok(PollOutcome::Restricted);
            }
        }

        let content = self.snapshot();
        let Some(entry) = Entry::capture(content, self.clock.now_utc()) else {
            debug!(change_count = %observed, "pasteboard change held no readable representation");
            return Ok(PollOutcome::Empty);
        };

        debug!(
            previous = %previous,
            change_count = %observed,
            alias = %entry.alias,
            kinds = entry.content.len(),
            total_size_bytes = entry.content.total_size_bytes(),
            "captured pasteboard change"
        );
        let id = history.insert(entry);
        Ok(PollOutcome::Captured(id))
    }

    fn snapshot(&self) -> ContentMap {
        let mut content = ContentMap::new();
        for kind in ContentKind::ALL {
            match self.pasteboard.read(kind) {
                Ok(Some(bytes)) => {
                    content.insert(kind, bytes);
                }
                Ok(None) => {}
                Err(err) => {
                    trace!(%kind, error = %err, "skipping unreadable representation");
                }
            }
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cp_core::ports::PasteboardError;
    use cp_core::restriction::InstalledApp;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct MockPasteboard {
        count: Mutex<i64>,
        content: Mutex<ContentMap>,
        unreadable: Vec<ContentKind>,
    }

    impl MockPasteboard {
        fn holding(count: i64, content: ContentMap) -> Self {
            Self {
                count: Mutex::new(count),
                content: Mutex::new(content),
                unreadable: Vec::new(),
            }
        }
    }

    impl PasteboardPort for MockPasteboard {
        fn change_count(&self) -> Result<ChangeCount, PasteboardError> {
            Ok(ChangeCount(*self.count.lock().unwrap()))
        }

        fn read(&self, kind: ContentKind) -> Result<Option<Vec<u8>>, PasteboardError> {
            if self.unreadable.contains(&kind) {
                return Err(PasteboardError::Read {
                    kind,
                    message: "boom".to_string(),
                });
            }
            Ok(self.content.lock().unwrap().get(kind).map(<[u8]>::to_vec))
        }

        fn clear_contents(&self) -> Result<(), PasteboardError> {
            *self.content.lock().unwrap() = ContentMap::new();
            *self.count.lock().unwrap() += 1;
            Ok(())
        }

        fn write(&self, kind: ContentKind, bytes: &[u8]) -> Result<(), PasteboardError> {
            self.content.lock().unwrap().insert(kind, bytes.to_vec());
            Ok(())
        }
    }

    struct MockFrontmost(Option<PathBuf>);

    impl FrontmostAppPort for MockFrontmost {
        fn frontmost_location(&self) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    struct MockClock;

    impl ClockPort for MockClock {
        fn now_ms(&self) -> i64 {
            1_700_000_000_000
        }
    }

    fn poller(pasteboard: MockPasteboard, frontmost: Option<&str>) -> PasteboardPoller {
        PasteboardPoller::with_baseline(
            Arc::new(pasteboard),
            Arc::new(MockFrontmost(frontmost.map(PathBuf::from))),
            Arc::new(MockClock),
            ChangeCount(1),
        )
    }

    #[test]
    fn unchanged_counter_is_a_no_op() {
        let mut poller = poller(
            MockPasteboard::holding(1, ContentMap::single(ContentKind::PlainText, "x")),
            None,
        );
        let mut history = History::new();

        let outcome = poller.poll_once(&mut history, &RestrictionSet::default()).unwrap();

        assert_eq!(outcome, PollOutcome::Unchanged);
        assert!(history.is_empty());
    }

    #[test]
    fn change_is_captured_and_baseline_advances() {
        let mut poller = poller(
            MockPasteboard::holding(4, ContentMap::single(ContentKind::PlainText, "hello")),
            None,
        );
        let mut history = History::new();

        let outcome = poller.poll_once(&mut history, &RestrictionSet::default()).unwrap();

        let PollOutcome::Captured(id) = outcome else {
            panic!("expected capture, got {outcome:?}");
        };
        assert_eq!(history.get(&id).unwrap().alias, "hello");
        assert_eq!(poller.baseline(), ChangeCount(4));
        assert_eq!(
            poller.poll_once(&mut history, &RestrictionSet::default()).unwrap(),
            PollOutcome::Unchanged
        );
    }

    #[test]
    fn restricted_source_skips_capture_but_advances_baseline() {
        let mut restrictions = RestrictionSet::new(vec![InstalledApp::discovered(
            "Passwords",
            "/Applications/Passwords.app",
        )]);
        restrictions.set_enabled("Passwords", true);
        let mut poller = poller(
            MockPasteboard::holding(2, ContentMap::single(ContentKind::PlainText, "secret")),
            Some("/Applications/Passwords.app"),
        );
        let mut history = History::new();

        let outcome = poller.poll_once(&mut history, &restrictions).unwrap();

        assert_eq!(outcome, PollOutcome::Restricted);
        assert!(history.is_empty());
        assert_eq!(poller.baseline(), ChangeCount(2));
    }

    #[test]
    fn unreadable_kinds_are_skipped() {
        let content: ContentMap = [
            (ContentKind::Html, b"<b>hi</b>".to_vec()),
            (ContentKind::PlainText, b"hi".to_vec()),
        ]
        .into_iter()
        .collect();
        let mut pasteboard = MockPasteboard::holding(2, content);
        pasteboard.unreadable = vec![ContentKind::Html];
        let mut poller = poller(pasteboard, None);
        let mut history = History::new();

        let outcome = poller.poll_once(&mut history, &RestrictionSet::default()).unwrap();

        let PollOutcome::Captured(id) = outcome else {
            panic!("expected capture, got {outcome:?}");
        };
        let entry = history.get(&id).unwrap();
        assert!(!entry.content.contains(ContentKind::Html));
        assert!(entry.content.contains(ContentKind::PlainText));
    }

    #[test]
    fn change_without_content_is_empty() {
        let mut poller = poller(MockPasteboard::holding(3, ContentMap::new()), None);
        let mut history = History::new();

        let outcome = poller.poll_once(&mut history, &RestrictionSet::default()).unwrap();

        assert_eq!(outcome, PollOutcome::Empty);
        assert!(history.is_empty());
        assert_eq!(poller.baseline(), ChangeCount(3));
    }

    #[test]
    fn new_starts_from_current_counter() {
        let pasteboard = Arc::new(MockPasteboard::holding(
            9,
            ContentMap::single(ContentKind::PlainText, "already there"),
        ));
        let mut poller =
            PasteboardPoller::new(pasteboard, Arc::new(MockFrontmost(None)), Arc::new(MockClock))
                .unwrap();

        assert_eq!(poller.baseline(), ChangeCount(9));
        let mut history = History::new();
        assert_eq!(
            poller.poll_once(&mut history, &RestrictionSet::default()).unwrap(),
            PollOutcome::Unchanged
        );
    }
}
