use anyhow::Result;
use clap::{Parser, Subcommand};
use cp_app::{PasteboardPoller, PollOutcome};
use cp_core::clipboard::{ContentKind, ContentMap, Entry, History};
use cp_core::ports::{AppCatalogPort, FrontmostAppPort, PasteboardPort, PermissionPort};
use cp_core::restriction::RestrictionSet;
use cp_infra::{DirectoryAppCatalog, SystemClock};
use cp_platform::{system_pasteboard, AccessibilityPermission, SystemFrontmostApp};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const PREVIEW_CHARS: usize = 60;

#[derive(Parser)]
#[command(name = "pasteboard-probe")]
#[command(about = "Pasteboard probing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every representation currently on the pasteboard
    Snapshot,
    /// Poll the pasteboard and print each capture
    Watch {
        /// Stop after N captures
        #[arg(short, long)]
        max_events: Option<usize>,
        /// Poll period in milliseconds
        #[arg(short, long, default_value_t = 300)]
        interval_ms: u64,
    },
    /// List restriction candidates
    Apps {
        /// Directory to scan
        #[arg(short, long, default_value = "/Applications")]
        dir: PathBuf,
    },
    /// Print the frontmost application and accessibility trust
    Frontmost,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot => run_snapshot(),
        Commands::Watch {
            max_events,
            interval_ms,
        } => run_watch(max_events, interval_ms),
        Commands::Apps { dir } => run_apps(dir),
        Commands::Frontmost => run_frontmost(),
    }
}

fn run_snapshot() -> Result<()> {
    let pasteboard = system_pasteboard()?;
    println!("pasteboard-probe: snapshot");
    println!("- change_count: {}", pasteboard.change_count()?);

    let mut content = ContentMap::new();
    for kind in ContentKind::ALL {
        match pasteboard.read(kind) {
            Ok(Some(bytes)) => {
                content.insert(kind, bytes);
            }
            Ok(None) => {}
            Err(err) => println!("- {kind}: read error: {err}"),
        }
    }

    match Entry::capture(content, chrono::Utc::now()) {
        Some(entry) => print_entry(&entry),
        None => println!("\n(empty pasteboard)"),
    }
    Ok(())
}

fn run_watch(max_events: Option<usize>, interval_ms: u64) -> Result<()> {
    println!("pasteboard-probe: watch mode");
    println!(
        "- max_events: {}",
        max_events.map_or("none".into(), |v| v.to_string())
    );
    println!("- interval_ms: {interval_ms}");
    println!("- stop: Ctrl+C");

    let mut poller = PasteboardPoller::new(
        system_pasteboard()?,
        Arc::new(SystemFrontmostApp::new()),
        Arc::new(SystemClock),
    )?;
    let mut history = History::new();
    let restrictions = RestrictionSet::default();
    let mut event_count = 0usize;

    loop {
        std::thread::sleep(Duration::from_millis(interval_ms));

        match poller.poll_once(&mut history, &restrictions)? {
            PollOutcome::Unchanged => continue,
            PollOutcome::Captured(id) => {
                event_count += 1;
                println!("\nevent #{event_count} (change_count {})", poller.baseline());
                if let Some(entry) = history.get(&id) {
                    print_entry(entry);
                }
            }
            other => {
                event_count += 1;
                println!("\nevent #{event_count}: {other:?}");
            }
        }

        if let Some(limit) = max_events {
            if event_count >= limit {
                println!("\nmax_events reached, exiting");
                return Ok(());
            }
        }
    }
}

fn run_apps(dir: PathBuf) -> Result<()> {
    let apps = DirectoryAppCatalog::new(dir.clone()).installed_apps()?;
    println!("pasteboard-probe: {} applications in {}", apps.len(), dir.display());
    for app in apps {
        println!("- {:<32} {}", app.name, app.location.display());
    }
    Ok(())
}

fn run_frontmost() -> Result<()> {
    let location = SystemFrontmostApp::new().frontmost_location();
    println!(
        "- frontmost: {}",
        location.map_or("unknown".into(), |p| p.display().to_string())
    );
    println!(
        "- accessibility_trusted: {}",
        AccessibilityPermission::new().is_accessibility_trusted()
    );
    Ok(())
}

fn print_entry(entry: &Entry) {
    println!("- alias: {}", entry.alias);
    println!("- display_kind: {:?}", entry.display_kind());
    println!("- total_size_bytes: {}", entry.content.total_size_bytes());
    for (kind, bytes) in entry.content.iter() {
        println!("  - {kind} ({} bytes) {}", bytes.len(), preview(bytes));
    }
}

fn preview(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let head: String = text.chars().take(PREVIEW_CHARS).collect();
            format!("{:?}", head)
        }
        Err(_) => "<binary>".to_string(),
    }
}
