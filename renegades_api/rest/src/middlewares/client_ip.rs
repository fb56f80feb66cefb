use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{from_fn, Next},
    Router,
};
use tracing::{debug, error, warn};

use crate::RealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    real_ip_config: Option<Arc<RealIpConfig>>,
) -> Router<S> {
    router.layer(from_fn(move |mut request: Request, next: Next| {
        let client_ip = ClientIp::from_request(&request, real_ip_config.as_deref());
        request.extensions_mut().insert(client_ip);
        next.run(request)
    }))
}

/// The address a request was sent from. Taken from the connection itself, or
/// from the configured header for connections made by the trusted reverse
/// proxy.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub IpAddr);

impl ClientIp {
    fn from_request(request: &Request, real_ip_config: Option<&RealIpConfig>) -> Self {
        let peer_ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .unwrap()
            .ip();
        let real_ip = real_ip_config.and_then(|config| reported_ip(request, config, peer_ip));
        Self(real_ip.unwrap_or(peer_ip))
    }
}

fn reported_ip(request: &Request, config: &RealIpConfig, peer_ip: IpAddr) -> Option<IpAddr> {
    let header_value = request.headers().get(&config.header);

    if peer_ip != config.set_from {
        if let Some(header_value) = header_value {
            debug!(%peer_ip, ?header_value, "ignoring real ip header value from untrusted source");
        }
        return None;
    }

    let Some(header_value) = header_value else {
        warn!(%peer_ip, "real ip header not found");
        return None;
    };

    match header_value.to_str().ok().and_then(|value| value.parse().ok()) {
        Some(real_ip) => Some(real_ip),
        None => {
            error!(%peer_ip, ?header_value, "failed to parse real ip header value");
            None
        }
    }
}
