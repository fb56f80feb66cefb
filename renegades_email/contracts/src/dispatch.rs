use std::future::Future;

use thiserror::Error;

use crate::Attachment;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailDispatchService: Send + Sync + 'static {
    /// Sends the given notification to every configured recipient. All
    /// recipients are attempted even if some sends fail, so an error can
    /// still leave the notification in parts of the mailboxes.
    fn dispatch(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), EmailDispatchError>> + Send;
}

/// An email without a recipient. The dispatch service addresses it to each
/// configured recipient individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html: String,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Error)]
pub enum EmailDispatchError {
    #[error("Failed to send the notification to all recipients.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailDispatchService {
    pub fn with_dispatch(
        mut self,
        notification: Notification,
        result: Result<(), EmailDispatchError>,
    ) -> Self {
        self.expect_dispatch()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
