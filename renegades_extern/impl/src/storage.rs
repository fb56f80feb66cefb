use std::sync::Arc;

use renegades_extern_contracts::storage::StorageApiService;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct StorageApiServiceImpl {
    config: StorageApiServiceConfig,
    client: HttpClient,
}

impl StorageApiServiceImpl {
    pub fn new(config: StorageApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Clone)]
pub struct StorageApiServiceConfig {
    membership_form_url: Arc<Url>,
}

impl StorageApiServiceConfig {
    pub fn new(membership_form_url: Url) -> Self {
        Self {
            membership_form_url: membership_form_url.into(),
        }
    }
}

impl StorageApiService for StorageApiServiceImpl {
    async fn download_membership_form(&self) -> anyhow::Result<Vec<u8>> {
        self.client
            .get((*self.config.membership_form_url).clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(Into::into)
    }
}
