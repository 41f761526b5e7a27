//! Logging Infrastructure
//!
//! tracing events go to the in-app log pane (tui-logger); stdout belongs
//! to the terminal UI.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Initialize the logger
///
/// `RUST_LOG` wins over `default_filter` when set. tui-logger owns the
/// `log` facade, so the subscriber is installed with `set_global_default`
/// rather than `init` (which would also claim it).
pub fn init_logger(default_filter: &str) -> anyhow::Result<()> {
    tui_logger::init_logger(log::LevelFilter::Trace)
        .map_err(|e| anyhow::anyhow!("failed to install tui logger: {e}"))?;
    tui_logger::set_default_level(log::LevelFilter::Trace);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tui_logger::tracing_subscriber_layer());
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
