//! slircc - Straylight IRC client.
//!
//! Connects to one server, joins the configured channels and keeps
//! rosters for the tracked ones until the server closes the link.

use anyhow::Context as _;
use slirc_client::proto::{Command, numeric};
use slirc_client::{AutoJoinHandler, ChannelTracker, Config, Connection};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;
    config.validate()?;

    info!(
        server = %config.server.host,
        port = config.server.port,
        nick = %config.identity.nick,
        "Starting slircc"
    );

    let mut conn = Connection::from_config(&config);

    let tracker = ChannelTracker::new();
    for channel in &config.channels.track {
        tracker.track(channel);
    }
    tracker
        .attach(conn.registry_mut())
        .context("registering channel tracker")?;

    conn.register(
        Command::Numeric(numeric::RPL_WELCOME),
        Box::new(AutoJoinHandler::new(config.channels.autojoin_list())),
    )
    .context("registering auto-join")?;

    conn.connect().await?;
    let result = conn.run().await;

    for channel in tracker.channels() {
        if let Some(roster) = tracker.roster(&channel) {
            info!(channel = %channel, members = roster.len(), state = ?roster.state(), "final roster");
        }
    }

    result?;
    info!("Shutdown complete");
    Ok(())
}
