pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{
    load_config, load_config_or_empty, resolve_applications_dir, resolve_data_root,
    resolve_poll_interval,
};
pub use run::{run_until, run_until_ctrl_c};
pub use wiring::{wire_dependencies, WiringError, WiringResult};
