use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tracing::error;

pub mod email;
pub mod recaptcha;
pub mod storage;

/// Serves the given router on a random local port in the background and
/// returns the address it is listening on.
pub async fn spawn_server(router: Router) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to a local port")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            error!("testing server failed: {err}");
        }
    });
    Ok(addr)
}
