use anyhow::ensure;
use clap::Subcommand;
use email_address::EmailAddress;
use renegades_config::Config;
use renegades_email_contracts::{Email, EmailService};

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = environment::email_service(&config);

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
            attachment: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
