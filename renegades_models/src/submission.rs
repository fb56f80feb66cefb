//! The three kinds of form submissions the website accepts. Every record
//! carries the field values as sent by the browser and knows how to validate
//! itself. Validation collects all failures instead of stopping at the first
//! one, so the frontend can highlight every offending field at once.

use crate::validation::{self, ValidationError, ValidationErrors};

/// A message sent via the general contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let mut check = |ok: bool, field: &'static str, message: &'static str| {
            if !ok {
                errors.push(ValidationError { field, message });
            }
        };

        check(
            validation::string_length(&self.name, 1, 100),
            "name",
            "Name must be between 1 and 100 characters",
        );
        check(validation::email(&self.email), "email", "Invalid email address");
        check(
            validation::string_length(&self.subject, 1, 200),
            "subject",
            "Subject must be between 1 and 200 characters",
        );
        check(
            validation::string_length(&self.message, 1, 5000),
            "message",
            "Message must be between 1 and 5000 characters",
        );

        errors
    }
}

/// A request for a try-out training session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TryoutRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub experience: String,
    pub message: String,
}

impl TryoutRequest {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let mut check = |ok: bool, field: &'static str, message: &'static str| {
            if !ok {
                errors.push(ValidationError { field, message });
            }
        };

        check(
            validation::string_length(&self.name, 1, 100),
            "name",
            "Name must be between 1 and 100 characters",
        );
        check(validation::email(&self.email), "email", "Invalid email address");
        check(validation::phone(&self.phone), "phone", "Invalid phone number format");
        check(
            validation::string_length(&self.age, 1, 10),
            "age",
            "Age is required and must be valid",
        );
        check(
            validation::string_length(&self.experience, 0, 500),
            "experience",
            "Experience must be less than 500 characters",
        );
        check(
            validation::string_length(&self.message, 0, 2000),
            "message",
            "Message must be less than 2000 characters",
        );

        errors
    }
}

/// A filled-in membership application. Field names mirror the paper form the
/// values are stamped into, including the `sepa_*` direct debit block and the
/// requested join date split into month and year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MembershipApplication {
    pub membership_active: bool,
    pub membership_support: bool,
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
    pub joindate_month: String,
    pub joindate_year: String,
    pub sepa_account_holder_name: String,
    pub sepa_account_holder_firstname: String,
    pub sepa_iban: String,
    pub sepa_bic: String,
    pub sepa_bank: String,
}

impl MembershipApplication {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let mut check = |ok: bool, field: &'static str, message: &'static str| {
            if !ok {
                errors.push(ValidationError { field, message });
            }
        };

        check(
            validation::string_length(&self.name, 1, 100),
            "name",
            "Last name must be between 1 and 100 characters",
        );
        check(
            validation::string_length(&self.firstname, 1, 100),
            "firstname",
            "First name must be between 1 and 100 characters",
        );
        check(validation::date(&self.birthday), "birthday", "Invalid date of birth format");
        check(
            validation::string_length(&self.birthplace, 0, 100),
            "birthplace",
            "Birthplace must be less than 100 characters",
        );
        check(
            validation::string_length(&self.profession, 0, 100),
            "profession",
            "Profession must be less than 100 characters",
        );
        check(
            validation::string_length(&self.nationality, 0, 100),
            "nationality",
            "Nationality must be less than 100 characters",
        );
        check(
            validation::string_length(&self.street, 1, 200),
            "street",
            "Street address must be between 1 and 200 characters",
        );
        check(
            validation::string_length(&self.plz_town, 1, 100),
            "plz_town",
            "ZIP/City must be between 1 and 100 characters",
        );
        check(validation::phone(&self.tel), "tel", "Invalid telephone number format");
        check(validation::phone(&self.mobile), "mobile", "Invalid mobile number format");
        check(validation::email(&self.email), "email", "Invalid email address");
        check(validation::iban(&self.sepa_iban), "sepa_iban", "Invalid IBAN format");
        check(validation::bic(&self.sepa_bic), "sepa_bic", "Invalid BIC format");
        check(
            validation::string_length(&self.sepa_bank, 0, 100),
            "sepa_bank",
            "Bank name must be less than 100 characters",
        );

        errors
    }
}
