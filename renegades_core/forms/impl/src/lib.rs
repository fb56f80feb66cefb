use anyhow::Context;
use renegades_core_forms_contracts::{FormSubmitError, FormsFeatureService};
use renegades_email_contracts::{
    dispatch::{EmailDispatchError, EmailDispatchService, Notification},
    Attachment,
};
use renegades_extern_contracts::storage::StorageApiService;
use renegades_models::{
    submission::{ContactMessage, MembershipApplication, TryoutRequest},
    VerificationToken,
};
use renegades_pdf_contracts::MembershipPdfService;
use renegades_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};
use renegades_templates_contracts::TemplateService;

mod content;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Default))]
pub struct FormsFeatureServiceImpl<Captcha, Templates, EmailDispatch, Storage, Pdf> {
    captcha: Captcha,
    templates: Templates,
    email_dispatch: EmailDispatch,
    storage: Storage,
    pdf: Pdf,
}

impl<Captcha, Templates, EmailDispatch, Storage, Pdf>
    FormsFeatureServiceImpl<Captcha, Templates, EmailDispatch, Storage, Pdf>
{
    pub fn new(
        captcha: Captcha,
        templates: Templates,
        email_dispatch: EmailDispatch,
        storage: Storage,
        pdf: Pdf,
    ) -> Self {
        Self {
            captcha,
            templates,
            email_dispatch,
            storage,
            pdf,
        }
    }
}

impl<Captcha, Templates, EmailDispatch, Storage, Pdf> FormsFeatureService
    for FormsFeatureServiceImpl<Captcha, Templates, EmailDispatch, Storage, Pdf>
where
    Captcha: CaptchaService,
    Templates: TemplateService,
    EmailDispatch: EmailDispatchService,
    Storage: StorageApiService,
    Pdf: MembershipPdfService,
{
    async fn submit_contact(
        &self,
        submission: ContactMessage,
        token: Option<VerificationToken>,
    ) -> Result<(), FormSubmitError> {
        self.verify_sender(token).await?;

        let errors = submission.validate();
        if !errors.is_empty() {
            return Err(FormSubmitError::Validation(errors));
        }

        let notification = Notification {
            subject: content::contact_subject(&submission),
            html: self
                .templates
                .render(&content::contact_email(&submission))
                .context("Failed to render the notification email")?,
            attachment: None,
        };

        self.dispatch(notification).await
    }

    async fn submit_tryout(
        &self,
        submission: TryoutRequest,
        token: Option<VerificationToken>,
    ) -> Result<(), FormSubmitError> {
        self.verify_sender(token).await?;

        let errors = submission.validate();
        if !errors.is_empty() {
            return Err(FormSubmitError::Validation(errors));
        }

        let notification = Notification {
            subject: content::TRYOUT_SUBJECT.into(),
            html: self
                .templates
                .render(&content::tryout_email(&submission))
                .context("Failed to render the notification email")?,
            attachment: None,
        };

        self.dispatch(notification).await
    }

    async fn submit_membership(
        &self,
        submission: MembershipApplication,
        token: Option<VerificationToken>,
    ) -> Result<(), FormSubmitError> {
        self.verify_sender(token).await?;

        let errors = submission.validate();
        if !errors.is_empty() {
            return Err(FormSubmitError::Validation(errors));
        }

        let template = self
            .storage
            .download_membership_form()
            .await
            .context("Failed to download the membership form template")?;
        let filled = self
            .pdf
            .fill(&template, &submission)
            .context("Failed to fill the membership form")?;

        let notification = Notification {
            subject: content::membership_subject(&submission),
            html: self
                .templates
                .render(&content::membership_email(&submission))
                .context("Failed to render the notification email")?,
            attachment: Some(Attachment {
                filename: content::membership_attachment_filename(&submission),
                content: filled,
                content_type: "application/pdf".into(),
            }),
        };

        self.dispatch(notification).await
    }
}

impl<Captcha, Templates, EmailDispatch, Storage, Pdf>
    FormsFeatureServiceImpl<Captcha, Templates, EmailDispatch, Storage, Pdf>
where
    Captcha: CaptchaService,
    EmailDispatch: EmailDispatchService,
{
    /// Rejects the submission unless it carries a token the captcha service
    /// accepts.
    async fn verify_sender(
        &self,
        token: Option<VerificationToken>,
    ) -> Result<(), FormSubmitError> {
        let token = token.ok_or(FormSubmitError::MissingToken)?;
        self.captcha.check(&token).await.map_err(|err| match err {
            CaptchaCheckError::Failed => FormSubmitError::VerificationFailed,
            CaptchaCheckError::Other(err) => err.context("Failed to check captcha").into(),
        })
    }

    async fn dispatch(&self, notification: Notification) -> Result<(), FormSubmitError> {
        self.email_dispatch
            .dispatch(notification)
            .await
            .map_err(|err| match err {
                EmailDispatchError::Send => FormSubmitError::Dispatch,
                EmailDispatchError::Other(err) => {
                    err.context("Failed to dispatch the notification").into()
                }
            })
    }
}
