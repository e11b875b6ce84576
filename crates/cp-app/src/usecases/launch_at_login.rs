use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use cp_core::ports::AutostartPort;

/// Bring the login item in line with the desired state.
///
/// 同步开机自启动状态。
pub struct SyncLaunchAtLogin {
    autostart: Arc<dyn AutostartPort>,
}

impl SyncLaunchAtLogin {
    pub fn new(autostart: Arc<dyn AutostartPort>) -> Self {
        Self { autostart }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        self.autostart
            .is_enabled()
            .context("query launch-at-login state")
    }

    /// Returns whether anything had to change.
    pub fn execute(&self, enabled: bool) -> Result<bool> {
        if self.is_enabled()? == enabled {
            return Ok(false);
        }

        if enabled {
            self.autostart.enable().context("enable launch at login")?;
        } else {
            self.autostart.disable().context("disable launch at login")?;
        }
        info!(enabled, "launch at login updated");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::SyncLaunchAtLogin;
    use cp_core::ports::{AutostartError, AutostartPort};
    use std::sync::{Arc, Mutex};

    struct MockAutostart {
        enabled: Mutex<bool>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl MockAutostart {
        fn new(enabled: bool) -> Self {
            Self {
                enabled: Mutex::new(enabled),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl AutostartPort for MockAutostart {
        fn is_enabled(&self) -> Result<bool, AutostartError> {
            Ok(*self.enabled.lock().unwrap())
        }

        fn enable(&self) -> Result<(), AutostartError> {
            self.calls.lock().unwrap().push("enable");
            *self.enabled.lock().unwrap() = true;
            Ok(())
        }

        fn disable(&self) -> Result<(), AutostartError> {
            self.calls.lock().unwrap().push("disable");
            *self.enabled.lock().unwrap() = false;
            Ok(())
        }
    }

    #[test]
    fn enables_when_requested() {
        let autostart = Arc::new(MockAutostart::new(false));
        let uc = SyncLaunchAtLogin::new(autostart.clone());

        assert!(uc.execute(true).unwrap());
        assert_eq!(*autostart.calls.lock().unwrap(), vec!["enable"]);
        assert!(uc.is_enabled().unwrap());
    }

    #[test]
    fn matching_state_is_left_alone() {
        let autostart = Arc::new(MockAutostart::new(true));
        let uc = SyncLaunchAtLogin::new(autostart.clone());

        assert!(!uc.execute(true).unwrap());
        assert!(autostart.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn disables_when_requested() {
        let autostart = Arc::new(MockAutostart::new(true));
        let uc = SyncLaunchAtLogin::new(autostart.clone());

        assert!(uc.execute(false).unwrap());
        assert_eq!(*autostart.calls.lock().unwrap(), vec!["disable"]);
    }

    struct RefusingAutostart;

    impl AutostartPort for RefusingAutostart {
        fn is_enabled(&self) -> Result<bool, AutostartError> {
            Ok(false)
        }

        fn enable(&self) -> Result<(), AutostartError> {
            Err(AutostartError::Backend("launchctl refused".into()))
        }

        fn disable(&self) -> Result<(), AutostartError> {
            Ok(())
        }
    }

    #[test]
    fn backend_failure_is_reported_with_context() {
        let uc = SyncLaunchAtLogin::new(Arc::new(RefusingAutostart));

        let err = uc.execute(true).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("enable launch at login"));
        assert!(message.contains("launchctl refused"));
    }
}
