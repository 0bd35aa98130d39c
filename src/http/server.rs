//! Listener setup for the HTTP server.

use tokio::net::TcpListener;

use crate::core::ConfigProvider;
use crate::utils::error::Result;

/// Bind the configured host and port.
///
/// The host may be an IPv4 or IPv6 literal (`0.0.0.0`, `::`) or a hostname
/// such as `localhost`; every resolved address is tried in turn.
pub async fn bind_listener(config: &dyn ConfigProvider) -> Result<TcpListener> {
    let listener = TcpListener::bind((config.host(), config.port())).await?;
    tracing::debug!(host = config.host(), port = config.port(), "listener bound");
    Ok(listener)
}
