//! Command line flags
//!
//! Each flag falls back to its environment variable, then to the
//! `ClientConfig` default.

use clap::Parser;
use member_client::{ClientConfig, UpdatePolicy};

#[derive(Debug, Parser)]
#[command(
    name = "member-console",
    version,
    about = "Terminal forms for the /miembros member resource"
)]
pub struct Args {
    /// Resource base URL, e.g. http://localhost:8080/miembros
    #[arg(long, env = "MEMBERS_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "MEMBERS_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    /// Update form validation: full or partial
    #[arg(long, env = "MEMBERS_UPDATE_POLICY")]
    pub update_policy: Option<UpdatePolicy>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "member_client=debug,member_console=info")]
    pub log_filter: String,
}

impl Args {
    pub fn to_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(policy) = self.update_policy {
            config = config.with_update_policy(policy);
        }
        config
    }
}
