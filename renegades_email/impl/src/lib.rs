use std::sync::Arc;

use base64::prelude::{Engine, BASE64_STANDARD};
use email_address::EmailAddress;
use renegades_email_contracts::{Email, EmailService};
use renegades_extern_impl::http::HttpClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

pub mod dispatch;

const SEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    config: EmailServiceConfig,
    client: HttpClient,
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    endpoint: Arc<Url>,
    api_key: Arc<str>,
    from: Arc<EmailAddress>,
}

impl EmailServiceConfig {
    pub fn new(api_key: &str, from: EmailAddress, endpoint_override: Option<Url>) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            api_key: api_key.into(),
            from: from.into(),
        }
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let request = SendRequest {
            from: self.config.from.as_str(),
            to: email.recipient.as_str(),
            subject: &email.subject,
            html: &email.html,
            attachments: email.attachment.as_ref().map(|attachment| {
                vec![SendAttachment {
                    filename: &attachment.filename,
                    content: BASE64_STANDARD.encode(&attachment.content),
                    content_type: &attachment.content_type,
                }]
            }),
        };

        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, recipient = %email.recipient, "email api rejected the request");
            return Ok(false);
        }

        let SendResponse { id } = response.json().await?;
        debug!(%id, recipient = %email.recipient, "email accepted for delivery");
        Ok(true)
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments: Option<Vec<SendAttachment<'a>>>,
}

#[derive(Serialize)]
struct SendAttachment<'a> {
    filename: &'a str,
    content: String,
    content_type: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}
