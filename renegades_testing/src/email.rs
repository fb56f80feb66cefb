use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use uuid::Uuid;

const SEND_ROUTE: &str = "/emails";

/// Every email to this recipient is rejected, like an address on a
/// suppression list would be.
pub const REJECTED_RECIPIENT: &str = "reject@example.com";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting email testing server on {host}:{port}");
    info!("Send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("API key: {api_key:?}");
    info!("Accepted emails can be fetched via GET from the send endpoint");
    info!("Emails to {REJECTED_RECIPIENT:?} are rejected");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(api_key: String) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send).get(mailbox))
        .with_state(Arc::new(StateInner {
            api_key,
            mailbox: Default::default(),
        }))
}

type State = axum::extract::State<Arc<StateInner>>;
struct StateInner {
    api_key: String,
    mailbox: Mutex<Vec<SentEmail>>,
}

/// One email accepted by the testing server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<SentAttachment>,
}

/// An attachment of a [`SentEmail`], with its content still base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentAttachment {
    pub filename: String,
    pub content: String,
    pub content_type: String,
}

#[derive(Deserialize)]
struct SendRequest {
    from: String,
    to: String,
    subject: String,
    html: String,
    #[serde(default)]
    attachments: Vec<SentAttachment>,
}

#[derive(Serialize)]
struct SendResponse {
    id: Uuid,
}

async fn send(
    state: State,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Json(request): Json<SendRequest>,
) -> Response {
    if auth.token() != state.api_key {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }
    if request.to == REJECTED_RECIPIENT {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "recipient address has been rejected",
        )
            .into_response();
    }

    let email = SentEmail {
        id: Uuid::new_v4(),
        from: request.from,
        to: request.to,
        subject: request.subject,
        html: request.html,
        attachments: request.attachments,
    };
    let id = email.id;
    state.mailbox.lock().await.push(email);

    Json(SendResponse { id }).into_response()
}

async fn mailbox(state: State) -> Json<Vec<SentEmail>> {
    Json(state.mailbox.lock().await.clone())
}
