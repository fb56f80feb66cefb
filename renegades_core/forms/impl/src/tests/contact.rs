use renegades_core_forms_contracts::{FormSubmitError, FormsFeatureService};
use renegades_email_contracts::dispatch::{
    EmailDispatchError, MockEmailDispatchService, Notification,
};
use renegades_models::{submission::ContactMessage, validation::ValidationError};
use renegades_shared_contracts::captcha::{CaptchaCheckError, MockCaptchaService};
use renegades_templates_contracts::{ContactEmailTemplate, MockTemplateService};
use renegades_utils::assert_matches;

use crate::{
    tests::{token, Sut, TOKEN},
    FormsFeatureServiceImpl,
};

#[tokio::test]
async fn ok() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(TOKEN, Ok(()));

    let templates = MockTemplateService::new().with_render(
        ContactEmailTemplate {
            name: "Max Mustermann".into(),
            email: "max@example.de".into(),
            subject: "Training &amp; Fees".into(),
            message: "First line<br>Second line".into(),
        },
        "<html>rendered</html>".into(),
    );

    let email_dispatch = MockEmailDispatchService::new().with_dispatch(
        Notification {
            subject: "New Contact Form Submission: Training &amp; Fees".into(),
            html: "<html>rendered</html>".into(),
            attachment: None,
        },
        Ok(()),
    );

    let sut = FormsFeatureServiceImpl {
        captcha,
        templates,
        email_dispatch,
        ..Sut::default()
    };

    // Act
    let result = sut.submit_contact(submission(), token()).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn missing_token() {
    // Arrange
    let sut = Sut::default();

    // Act
    let result = sut.submit_contact(submission(), None).await;

    // Assert
    assert_matches!(result, Err(FormSubmitError::MissingToken));
}

#[tokio::test]
async fn verification_failed() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(TOKEN, Err(CaptchaCheckError::Failed));

    let sut = FormsFeatureServiceImpl {
        captcha,
        ..Sut::default()
    };

    // Act
    let result = sut.submit_contact(submission(), token()).await;

    // Assert
    assert_matches!(result, Err(FormSubmitError::VerificationFailed));
}

#[tokio::test]
async fn captcha_error() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(
        TOKEN,
        Err(CaptchaCheckError::Other(anyhow::anyhow!(
            "siteverify is unreachable"
        ))),
    );

    let sut = FormsFeatureServiceImpl {
        captcha,
        ..Sut::default()
    };

    // Act
    let result = sut.submit_contact(submission(), token()).await;

    // Assert
    assert_matches!(result, Err(FormSubmitError::Other(_)));
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(TOKEN, Ok(()));

    let sut = FormsFeatureServiceImpl {
        captcha,
        ..Sut::default()
    };

    let submission = ContactMessage {
        name: "   ".into(),
        email: "not-an-email".into(),
        ..submission()
    };

    // Act
    let result = sut.submit_contact(submission, token()).await;

    // Assert
    assert_matches!(
        result,
        Err(FormSubmitError::Validation(errors))
        if *errors == [
            ValidationError {
                field: "name",
                message: "Name must be between 1 and 100 characters",
            },
            ValidationError {
                field: "email",
                message: "Invalid email address",
            },
        ]
    );
}

#[tokio::test]
async fn dispatch_failed() {
    // Arrange
    let captcha = MockCaptchaService::new().with_check(TOKEN, Ok(()));

    let templates = MockTemplateService::new().with_render(
        ContactEmailTemplate {
            name: "Max Mustermann".into(),
            email: "max@example.de".into(),
            subject: "Training &amp; Fees".into(),
            message: "First line<br>Second line".into(),
        },
        "<html>rendered</html>".into(),
    );

    let email_dispatch = MockEmailDispatchService::new().with_dispatch(
        Notification {
            subject: "New Contact Form Submission: Training &amp; Fees".into(),
            html: "<html>rendered</html>".into(),
            attachment: None,
        },
        Err(EmailDispatchError::Send),
    );

    let sut = FormsFeatureServiceImpl {
        captcha,
        templates,
        email_dispatch,
        ..Sut::default()
    };

    // Act
    let result = sut.submit_contact(submission(), token()).await;

    // Assert
    assert_matches!(result, Err(FormSubmitError::Dispatch));
}

fn submission() -> ContactMessage {
    ContactMessage {
        name: "Max Mustermann".into(),
        email: "max@example.de".into(),
        subject: " Training & Fees ".into(),
        message: "First line\nSecond line".into(),
    }
}
