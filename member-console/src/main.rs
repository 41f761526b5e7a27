//! Member Console - terminal forms for the `/miembros` resource

mod app;
mod cli;
mod logger;
mod ui;

use std::sync::Arc;

use clap::Parser;
use member_client::{ChannelView, MemberFormController};

use crate::app::App;
use crate::cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    logger::init_logger(&args.log_filter)?;
    let config = args.to_config();
    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout,
        update_policy = %config.update_policy,
        "Starting member console"
    );

    let http = config.build_http_client()?;
    let (view, events) = ChannelView::channel();
    let controller = MemberFormController::new(http, Arc::new(view), &config);

    let mut terminal = ratatui::init();
    let app = App::new(config.base_url.clone(), config.update_policy);
    let result = app.run(&mut terminal, controller, events);
    ratatui::restore();

    result
}
