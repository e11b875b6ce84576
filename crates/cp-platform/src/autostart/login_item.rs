//! Login item registration through `auto-launch`.
//!
//! macOS uses a per-user LaunchAgent, Linux an XDG autostart entry and
//! Windows the `Run` registry key.

use auto_launch::{AutoLaunch, AutoLaunchBuilder, MacOSLaunchMode};
use cp_core::ports::{AutostartError, AutostartPort};
use std::path::Path;
use tracing::{debug_span, info};

pub const DEFAULT_APP_NAME: &str = "app.copypad.daemon";

pub struct LoginItemAutostart {
    app_name: String,
    launcher: AutoLaunch,
}

fn backend(err: auto_launch::Error) -> AutostartError {
    AutostartError::Backend(err.to_string())
}

impl LoginItemAutostart {
    /// Login item starting `program` under `app_name`.
    pub fn new(app_name: &str, program: &Path) -> Result<Self, AutostartError> {
        let program = program
            .to_str()
            .ok_or_else(|| AutostartError::InvalidProgramPath(program.display().to_string()))?;

        let launcher = AutoLaunchBuilder::new()
            .set_app_name(app_name)
            .set_app_path(program)
            .set_macos_launch_mode(MacOSLaunchMode::LaunchAgent)
            .build()
            .map_err(backend)?;

        Ok(Self {
            app_name: app_name.to_string(),
            launcher,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl AutostartPort for LoginItemAutostart {
    fn is_enabled(&self) -> Result<bool, AutostartError> {
        let _span = debug_span!("platform.autostart.is_enabled").entered();
        self.launcher.is_enabled().map_err(backend)
    }

    fn enable(&self) -> Result<(), AutostartError> {
        let _span = debug_span!("platform.autostart.enable").entered();
        self.launcher.enable().map_err(backend)?;
        info!(app_name = %self.app_name, "login item registered");
        Ok(())
    }

    fn disable(&self) -> Result<(), AutostartError> {
        let _span = debug_span!("platform.autostart.disable").entered();
        self.launcher.disable().map_err(backend)?;
        info!(app_name = %self.app_name, "login item removed");
        Ok(())
    }
}
