//! GitHub PR widget
//!
//! Polls GitHub for the user's open pull requests, enriches each with CI
//! status, review status and an optional Graphite deep link, and renders the
//! list whenever it actually changes. Background polling is silent; manual
//! refreshes and credential updates arrive as commands.

mod events;
mod poller;
mod render;

use crate::events::WidgetEvent;
use crate::render::TextRenderer;
use gh_widget_client::OctocrabClient;
use gh_widget_config::{token_looks_valid, Settings};
use gh_widget_core::Aggregator;
use std::time::Duration;
use tokio::sync::mpsc;

/// Lower bound on the poll interval to keep misconfigurations from hammering
/// the API
const MIN_POLL_INTERVAL_SECS: u64 = 30;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut settings = Settings::load();

    // Environment token wins over an unconfigured settings file
    if !settings.has_token() {
        if let Ok(token) = std::env::var("GITHUB_TOKEN").or_else(|_| std::env::var("GH_TOKEN")) {
            log::info!("Using token from environment");
            settings.github_token = token;
        }
    }

    if settings.has_token() && !token_looks_valid(&settings.github_token) {
        log::warn!("Configured token does not look like a GitHub personal access token");
    }

    let mut renderer = TextRenderer::new(&settings.theme);
    let mut aggregator = Aggregator::new(OctocrabClient::new());
    aggregator.set_credential(settings.github_token.clone());

    if !aggregator.credential_configured() {
        renderer.show_notice("No GitHub token configured. Set one with: token <ghp_...>");
    } else if let Err(e) = aggregator.refresh(false, &mut renderer).await {
        log::error!("Initial refresh failed: {}", e);
    }

    // Poll ticks on their own bounded(1) channel so overlapping refreshes
    // are dropped, not queued up.
    let (tick_tx, mut tick_rx) = mpsc::channel(1);
    let interval = Duration::from_secs(settings.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS));
    let _poller = poller::spawn(tick_tx, interval);

    let (cmd_tx, mut cmd_rx) = mpsc::channel(16);
    let _stdin_reader = events::spawn_stdin_reader(cmd_tx);

    loop {
        tokio::select! {
            Some(event) = cmd_rx.recv() => match event {
                WidgetEvent::Refresh => {
                    if let Err(e) = aggregator.refresh(false, &mut renderer).await {
                        log::error!("Refresh failed: {}", e);
                    }
                }
                WidgetEvent::TokenUpdated(token) => {
                    if !token_looks_valid(&token) {
                        renderer.show_notice(
                            "Warning: token does not look like a GitHub personal access token",
                        );
                    }
                    settings.github_token = token.clone();
                    if let Err(e) = settings.save() {
                        log::warn!("Failed to persist settings: {}", e);
                    }
                    aggregator.set_credential(token);
                    if let Err(e) = aggregator.refresh(false, &mut renderer).await {
                        log::error!("Refresh failed: {}", e);
                    }
                }
                WidgetEvent::Quit => {
                    log::info!("Shutting down");
                    break;
                }
                WidgetEvent::Poll => {}
            },
            Some(_) = tick_rx.recv() => {
                if let Err(e) = aggregator.refresh(true, &mut renderer).await {
                    log::debug!("Silent refresh failed: {}", e);
                }
            }
            else => break,
        }
    }

    Ok(())
}
