pub mod recaptcha;
pub mod storage;
