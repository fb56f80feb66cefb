use renegades_models::{
    submission::{ContactMessage, MembershipApplication, TryoutRequest},
    VerificationToken,
};
use serde::Deserialize;

/// The browser submits each form as a wrapper object around the actual
/// payload. Missing fields deserialize to empty values, the validators treat
/// them like blank input.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    pub message: Option<ApiContactMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "verificationToken")]
    pub verification_token: Option<VerificationToken>,
}

impl ApiContactMessage {
    pub fn into_parts(self) -> (ContactMessage, Option<VerificationToken>) {
        let token = self.verification_token.filter(|token| !token.is_empty());
        (
            ContactMessage {
                name: self.name,
                email: self.email,
                subject: self.subject,
                message: self.message,
            },
            token,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTryoutSubmission {
    pub request: Option<ApiTryoutRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTryoutRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "verificationToken")]
    pub verification_token: Option<VerificationToken>,
}

impl ApiTryoutRequest {
    pub fn into_parts(self) -> (TryoutRequest, Option<VerificationToken>) {
        let token = self.verification_token.filter(|token| !token.is_empty());
        (
            TryoutRequest {
                name: self.name,
                email: self.email,
                phone: self.phone,
                age: self.age,
                experience: self.experience,
                message: self.message,
            },
            token,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMembershipSubmission {
    pub application: Option<ApiMembershipApplication>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMembershipApplication {
    #[serde(default)]
    pub membership_active: bool,
    #[serde(default)]
    pub membership_support: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub birthplace: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub plz_town: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub joindate_month: String,
    #[serde(default)]
    pub joindate_year: String,
    #[serde(default)]
    pub sepa_account_holder_name: String,
    #[serde(default)]
    pub sepa_account_holder_firstname: String,
    #[serde(default)]
    pub sepa_iban: String,
    #[serde(default)]
    pub sepa_bic: String,
    #[serde(default)]
    pub sepa_bank: String,
    #[serde(default, rename = "verificationToken")]
    pub verification_token: Option<VerificationToken>,
}

impl ApiMembershipApplication {
    pub fn into_parts(self) -> (MembershipApplication, Option<VerificationToken>) {
        let token = self.verification_token.filter(|token| !token.is_empty());
        (
            MembershipApplication {
                membership_active: self.membership_active,
                membership_support: self.membership_support,
                name: self.name,
                firstname: self.firstname,
                birthday: self.birthday,
                birthplace: self.birthplace,
                profession: self.profession,
                nationality: self.nationality,
                street: self.street,
                plz_town: self.plz_town,
                tel: self.tel,
                fax: self.fax,
                mobile: self.mobile,
                email: self.email,
                joindate_month: self.joindate_month,
                joindate_year: self.joindate_year,
                sepa_account_holder_name: self.sepa_account_holder_name,
                sepa_account_holder_firstname: self.sepa_account_holder_firstname,
                sepa_iban: self.sepa_iban,
                sepa_bic: self.sepa_bic,
                sepa_bank: self.sepa_bank,
            },
            token,
        )
    }
}
