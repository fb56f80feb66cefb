use std::sync::Arc;

use renegades_extern_contracts::recaptcha::RecaptchaApiService;
use renegades_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};

#[derive(Debug, Clone)]
pub struct CaptchaServiceImpl<RecaptchaApi> {
    recaptcha_api: RecaptchaApi,
    config: CaptchaServiceConfig,
}

#[derive(Debug, Clone)]
pub struct CaptchaServiceConfig {
    pub secret: Arc<str>,
}

impl<RecaptchaApi> CaptchaServiceImpl<RecaptchaApi> {
    /// Minimum score a successful siteverify response must reach for the
    /// sender to be treated as human.
    pub const MIN_SCORE: f64 = 0.5;

    pub fn new(recaptcha_api: RecaptchaApi, config: CaptchaServiceConfig) -> Self {
        Self {
            recaptcha_api,
            config,
        }
    }
}

impl<RecaptchaApi> CaptchaService for CaptchaServiceImpl<RecaptchaApi>
where
    RecaptchaApi: RecaptchaApiService,
{
    async fn check(&self, response: &str) -> Result<(), CaptchaCheckError> {
        let response = self
            .recaptcha_api
            .siteverify(response, &self.config.secret)
            .await?;
        let ok = response.success && response.score.unwrap_or(0.0) >= Self::MIN_SCORE;
        ok.then_some(()).ok_or(CaptchaCheckError::Failed)
    }
}
