use std::future::Future;

use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait CaptchaService: Send + Sync + 'static {
    /// Verifies a captcha response and decides whether the sender is to be
    /// treated as human.
    fn check<'a>(
        &self,
        response: &'a str,
    ) -> impl Future<Output = Result<(), CaptchaCheckError>> + Send;
}

#[derive(Debug, Error)]
pub enum CaptchaCheckError {
    #[error("The response is invalid or the user is probably not human.")]
    Failed,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockCaptchaService {
    pub fn with_check(
        mut self,
        response: &'static str,
        result: Result<(), CaptchaCheckError>,
    ) -> Self {
        self.expect_check()
            .once()
            .withf(move |x| x == response)
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
