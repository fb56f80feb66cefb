pub mod http;
pub mod recaptcha;
pub mod storage;
