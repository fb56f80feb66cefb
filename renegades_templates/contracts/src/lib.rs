use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactEmailTemplate("contact_email.html"),
    TryoutEmailTemplate("tryout_email.html"),
    MembershipEmailTemplate("membership_email.html"),
}

/// Variables are expected to be HTML encoded already, the templates insert
/// them as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmailTemplate {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TryoutEmailTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub experience: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipEmailTemplate {
    pub membership_type: String,
    pub name: String,
    pub firstname: String,
    pub birthday: String,
    pub birthplace: String,
    pub profession: String,
    pub nationality: String,
    pub street: String,
    pub plz_town: String,
    pub tel: String,
    pub fax: String,
    pub mobile: String,
    pub email: String,
    pub joindate: String,
    pub sepa_account_holder_name: String,
    pub sepa_account_holder_firstname: String,
    pub sepa_iban: String,
    pub sepa_bic: String,
    pub sepa_bank: String,
}
