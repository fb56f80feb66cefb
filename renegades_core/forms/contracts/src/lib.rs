use std::future::Future;

use renegades_models::{
    submission::{ContactMessage, MembershipApplication, TryoutRequest},
    validation::ValidationErrors,
    VerificationToken,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormsFeatureService: Send + Sync + 'static {
    /// Accepts a contact form submission and notifies the club inbox.
    fn submit_contact(
        &self,
        submission: ContactMessage,
        token: Option<VerificationToken>,
    ) -> impl Future<Output = Result<(), FormSubmitError>> + Send;

    /// Accepts a try-out request and notifies the club inbox.
    fn submit_tryout(
        &self,
        submission: TryoutRequest,
        token: Option<VerificationToken>,
    ) -> impl Future<Output = Result<(), FormSubmitError>> + Send;

    /// Accepts a membership application and notifies the club inbox. The
    /// notification carries the filled membership form as a pdf attachment.
    fn submit_membership(
        &self,
        submission: MembershipApplication,
        token: Option<VerificationToken>,
    ) -> impl Future<Output = Result<(), FormSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum FormSubmitError {
    #[error("The submission does not carry a verification token.")]
    MissingToken,
    #[error("The verification token was rejected.")]
    VerificationFailed,
    #[error("The submission contains invalid fields.")]
    Validation(ValidationErrors),
    #[error("Failed to deliver the notification emails.")]
    Dispatch,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockFormsFeatureService {
    pub fn with_submit_contact(
        mut self,
        submission: ContactMessage,
        token: Option<VerificationToken>,
        result: Result<(), FormSubmitError>,
    ) -> Self {
        self.expect_submit_contact()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(token),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_submit_tryout(
        mut self,
        submission: TryoutRequest,
        token: Option<VerificationToken>,
        result: Result<(), FormSubmitError>,
    ) -> Self {
        self.expect_submit_tryout()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(token),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_submit_membership(
        mut self,
        submission: MembershipApplication,
        token: Option<VerificationToken>,
        result: Result<(), FormSubmitError>,
    ) -> Self {
        self.expect_submit_membership()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(token),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
