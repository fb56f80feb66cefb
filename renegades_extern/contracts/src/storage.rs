use std::future::Future;

/// Client for the public file storage bucket the website serves its static
/// assets from.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait StorageApiService: Send + Sync + 'static {
    /// Downloads the current membership application form.
    fn download_membership_form(&self) -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;
}

#[cfg(feature = "mock")]
impl MockStorageApiService {
    pub fn with_download_membership_form(mut self, result: Vec<u8>) -> Self {
        self.expect_download_membership_form()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }
}
