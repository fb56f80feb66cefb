use std::sync::Arc;

use email_address::EmailAddress;
use futures::future::join_all;
use renegades_email_contracts::{
    dispatch::{EmailDispatchError, EmailDispatchService, Notification},
    Email, EmailService,
};

#[derive(Debug, Clone)]
pub struct EmailDispatchServiceImpl<EmailS> {
    email: EmailS,
    config: EmailDispatchServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EmailDispatchServiceConfig {
    pub recipients: Arc<[EmailAddress]>,
}

impl<EmailS> EmailDispatchServiceImpl<EmailS> {
    pub fn new(email: EmailS, config: EmailDispatchServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> EmailDispatchService for EmailDispatchServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn dispatch(&self, notification: Notification) -> Result<(), EmailDispatchError> {
        let results = join_all(self.config.recipients.iter().map(|recipient| {
            self.email.send(Email {
                recipient: recipient.clone(),
                subject: notification.subject.clone(),
                html: notification.html.clone(),
                attachment: notification.attachment.clone(),
            })
        }))
        .await;

        let mut ok = true;
        for result in results {
            ok &= result?;
        }
        ok.then_some(()).ok_or(EmailDispatchError::Send)
    }
}
