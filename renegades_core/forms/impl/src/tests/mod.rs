use renegades_email_contracts::dispatch::MockEmailDispatchService;
use renegades_extern_contracts::storage::MockStorageApiService;
use renegades_models::VerificationToken;
use renegades_pdf_contracts::MockMembershipPdfService;
use renegades_shared_contracts::captcha::MockCaptchaService;
use renegades_templates_contracts::MockTemplateService;

use crate::FormsFeatureServiceImpl;

mod contact;

type Sut = FormsFeatureServiceImpl<
    MockCaptchaService,
    MockTemplateService,
    MockEmailDispatchService,
    MockStorageApiService,
    MockMembershipPdfService,
>;

const TOKEN: &str = "valid-recaptcha-token";

fn token() -> Option<VerificationToken> {
    Some(TOKEN.to_owned().try_into().unwrap())
}
