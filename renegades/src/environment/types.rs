use renegades_core_forms_impl::FormsFeatureServiceImpl;
use renegades_email_impl::{dispatch::EmailDispatchServiceImpl, EmailServiceImpl};
use renegades_extern_impl::{recaptcha::RecaptchaApiServiceImpl, storage::StorageApiServiceImpl};
use renegades_pdf_impl::MembershipPdfServiceImpl;
use renegades_shared_impl::captcha::CaptchaServiceImpl;
use renegades_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = renegades_api_rest::RestServer<Forms>;

// Extern
pub type RecaptchaApi = RecaptchaApiServiceImpl;
pub type Storage = StorageApiServiceImpl;

// Shared
pub type Captcha = CaptchaServiceImpl<RecaptchaApi>;

// Templates
pub type Template = TemplateServiceImpl;

// Email
pub type Email = EmailServiceImpl;
pub type EmailDispatch = EmailDispatchServiceImpl<Email>;

// Pdf
pub type Pdf = MembershipPdfServiceImpl;

// Core
pub type Forms = FormsFeatureServiceImpl<Captcha, Template, EmailDispatch, Storage, Pdf>;
