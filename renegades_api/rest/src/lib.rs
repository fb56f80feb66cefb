use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::Router;
use renegades_core_forms_contracts::FormsFeatureService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Forms> {
    forms: Forms,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct RestServerConfig {
    pub real_ip_config: Option<Arc<RealIpConfig>>,
}

/// Trust the client ip reported in `header` for connections originating from
/// `set_from` (the reverse proxy in front of this server).
#[derive(Debug)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Forms> RestServer<Forms>
where
    Forms: FormsFeatureService,
{
    pub fn new(forms: Forms, config: RestServerConfig) -> Self {
        Self { forms, config }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::forms::router(self.forms.into()));

        let router = middlewares::trace::add(router);
        let router = middlewares::client_ip::add(router, self.config.real_ip_config);
        let router = middlewares::request_id::add(router);
        let router = middlewares::panic_handler::add(router);
        middlewares::cors::add(router)
    }
}
