use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cp_app::{AppPaths, CopyPad};
use cp_core::ports::AppDirsPort;
use cp_platform::DirsAppDirsAdapter;
use tracing::{info, warn};

use copypad_lib::bootstrap::{
    self, load_config_or_empty, resolve_data_root, resolve_poll_interval, wire_dependencies,
};

#[derive(Parser)]
#[command(name = "copypad")]
#[command(about = "Menu-bar clipboard history daemon", long_about = None)]
struct Cli {
    /// Config file (default: <data dir>/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("resolve app data directory")?;
    let config_path = cli
        .config
        .unwrap_or_else(|| AppPaths::from_app_dirs(&app_dirs).config_path);
    let config = load_config_or_empty(&config_path)?;
    let data_root = resolve_data_root(&config, &app_dirs);
    let paths = AppPaths::from_data_root(data_root.clone());

    bootstrap::tracing::init_tracing_subscriber(&paths.logs_dir)
        .context("initialize tracing")?;
    info!(
        config = %config_path.display(),
        data_dir = %data_root.display(),
        "copypad starting"
    );

    let deps = wire_dependencies(&config, &paths)?;
    let mut app = CopyPad::new(deps).context("start copypad service")?;

    if let Err(err) = app.set_launch_at_login(config.launch_at_login) {
        warn!(error = %format!("{err:#}"), "could not sync launch at login");
    }
    if !app.is_accessibility_trusted() {
        warn!("accessibility access not granted; paste keystrokes will be unavailable");
    }

    let period = resolve_poll_interval(&config);
    info!(period_ms = period.as_millis() as u64, "polling pasteboard");
    bootstrap::run_until_ctrl_c(&mut app, period).await;

    info!(entries = app.history().len(), "copypad stopped");
    Ok(())
}
