use renegades_models::submission::MembershipApplication;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MembershipPdfService: Send + Sync + 'static {
    /// Fills the application into the blank form template and flattens the
    /// result into a regular, read-only document.
    fn fill(&self, template: &[u8], application: &MembershipApplication)
        -> anyhow::Result<Vec<u8>>;
}

#[cfg(feature = "mock")]
impl MockMembershipPdfService {
    pub fn with_fill(
        mut self,
        template: Vec<u8>,
        application: MembershipApplication,
        result: Vec<u8>,
    ) -> Self {
        self.expect_fill()
            .once()
            .withf(move |t, a| t == template && *a == application)
            .return_once(|_, _| Ok(result));
        self
    }
}
