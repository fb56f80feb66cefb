use std::sync::Arc;

use renegades_api_rest::{RealIpConfig, RestServerConfig};
use renegades_config::Config;
use renegades_email_impl::{dispatch::EmailDispatchServiceConfig, EmailServiceConfig};
use renegades_extern_impl::{
    http::HttpClient, recaptcha::RecaptchaApiServiceConfig, storage::StorageApiServiceConfig,
};
use renegades_shared_impl::captcha::CaptchaServiceConfig;
use types::{
    Captcha, Email, EmailDispatch, Forms, Pdf, RecaptchaApi, RestServer, Storage, Template,
};

pub mod types;

/// Builds the http server with the full form submission stack behind it.
pub fn rest_server(config: &Config) -> RestServer {
    let rest_config = RestServerConfig {
        real_ip_config: config.http.real_ip.as_ref().map(|real_ip| {
            Arc::new(RealIpConfig {
                header: real_ip.header.clone(),
                set_from: real_ip.set_from,
            })
        }),
    };
    RestServer::new(forms(config), rest_config)
}

/// Builds the form submission pipeline. All outbound requests share one http
/// client.
pub fn forms(config: &Config) -> Forms {
    let client = HttpClient::default();

    let recaptcha_api = RecaptchaApi::new(
        RecaptchaApiServiceConfig::new(config.recaptcha.siteverify_endpoint_override.clone()),
        client.clone(),
    );
    let captcha = Captcha::new(
        recaptcha_api,
        CaptchaServiceConfig {
            secret: config.recaptcha.secret.as_str().into(),
        },
    );
    let email_dispatch = EmailDispatch::new(
        email_service_with(config, client.clone()),
        EmailDispatchServiceConfig {
            recipients: config.notifications.recipients.to_vec().into(),
        },
    );
    let storage = Storage::new(
        StorageApiServiceConfig::new(config.forms.membership_form_url.clone()),
        client,
    );

    Forms::new(
        captcha,
        Template::default(),
        email_dispatch,
        storage,
        Pdf::default(),
    )
}

/// Builds the email service on a client of its own, for the deliverability
/// test command.
pub fn email_service(config: &Config) -> Email {
    email_service_with(config, HttpClient::default())
}

fn email_service_with(config: &Config, client: HttpClient) -> Email {
    Email::new(
        EmailServiceConfig::new(
            &config.email.api_key,
            config.email.from.clone(),
            config.email.endpoint_override.clone(),
        ),
        client,
    )
}
