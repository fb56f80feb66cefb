use renegades_models::submission::{ContactMessage, MembershipApplication, TryoutRequest};
use renegades_templates_contracts::{
    ContactEmailTemplate, MembershipEmailTemplate, TryoutEmailTemplate,
};
use renegades_utils::html::escape_html;

pub const TRYOUT_SUBJECT: &str = "New Tryout Request";

pub fn contact_subject(submission: &ContactMessage) -> String {
    format!(
        "New Contact Form Submission: {}",
        sanitize(&submission.subject)
    )
}

pub fn contact_email(submission: &ContactMessage) -> ContactEmailTemplate {
    ContactEmailTemplate {
        name: sanitize(&submission.name),
        email: sanitize(&submission.email),
        subject: sanitize(&submission.subject),
        message: sanitize_multiline(&submission.message),
    }
}

pub fn tryout_email(submission: &TryoutRequest) -> TryoutEmailTemplate {
    TryoutEmailTemplate {
        name: sanitize(&submission.name),
        email: sanitize(&submission.email),
        phone: sanitize(&submission.phone),
        age: sanitize(&submission.age),
        experience: sanitize(&submission.experience),
        message: sanitize_multiline(&submission.message),
    }
}

pub fn membership_subject(submission: &MembershipApplication) -> String {
    format!(
        "New Membership Application - {} {}",
        sanitize(&submission.name),
        sanitize(&submission.firstname)
    )
}

pub fn membership_email(submission: &MembershipApplication) -> MembershipEmailTemplate {
    MembershipEmailTemplate {
        membership_type: membership_type(submission),
        name: sanitize(&submission.name),
        firstname: sanitize(&submission.firstname),
        birthday: sanitize(&submission.birthday),
        birthplace: sanitize(&submission.birthplace),
        profession: sanitize(&submission.profession),
        nationality: sanitize(&submission.nationality),
        street: sanitize(&submission.street),
        plz_town: sanitize(&submission.plz_town),
        tel: sanitize(&submission.tel),
        fax: sanitize(&submission.fax),
        mobile: sanitize(&submission.mobile),
        email: sanitize(&submission.email),
        joindate: format!(
            "{}/{}",
            sanitize(&submission.joindate_month),
            sanitize(&submission.joindate_year)
        ),
        sepa_account_holder_name: sanitize(&submission.sepa_account_holder_name),
        sepa_account_holder_firstname: sanitize(&submission.sepa_account_holder_firstname),
        sepa_iban: sanitize(&submission.sepa_iban),
        sepa_bic: sanitize(&submission.sepa_bic),
        sepa_bank: sanitize(&submission.sepa_bank),
    }
}

pub fn membership_attachment_filename(submission: &MembershipApplication) -> String {
    format!(
        "membership-application-{}-{}.pdf",
        sanitize(&submission.name),
        sanitize(&submission.firstname)
    )
}

fn membership_type(submission: &MembershipApplication) -> String {
    format!(
        "{} {}",
        if submission.membership_active {
            "Active"
        } else {
            ""
        },
        if submission.membership_support {
            "Supporting"
        } else {
            ""
        },
    )
}

/// Trims a submitted value and HTML encodes it for insertion into a
/// notification email.
fn sanitize(value: &str) -> String {
    escape_html(value.trim())
}

/// Free text fields keep their line breaks in the rendered email.
fn sanitize_multiline(value: &str) -> String {
    sanitize(value).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_trims_and_encodes() {
        assert_eq!(sanitize("  Max Mustermann  "), "Max Mustermann");
        assert_eq!(sanitize("<b>Hi</b> & bye"), "&lt;b&gt;Hi&lt;/b&gt; &amp; bye");
        assert_eq!(sanitize("\"quoted\" 'text'"), "&quot;quoted&quot; &#x27;text&#x27;");
    }

    #[test]
    fn multiline_values_keep_line_breaks() {
        assert_eq!(
            sanitize_multiline("first line\nsecond <line>"),
            "first line<br>second &lt;line&gt;"
        );
    }

    #[test]
    fn contact_subject_is_encoded() {
        let submission = ContactMessage {
            subject: " Training <heute> ".into(),
            ..Default::default()
        };
        assert_eq!(
            contact_subject(&submission),
            "New Contact Form Submission: Training &lt;heute&gt;"
        );
    }

    #[test]
    fn membership_types() {
        let mut submission = MembershipApplication {
            membership_active: true,
            membership_support: true,
            ..Default::default()
        };
        assert_eq!(membership_type(&submission), "Active Supporting");

        submission.membership_support = false;
        assert_eq!(membership_type(&submission), "Active ");

        submission.membership_active = false;
        submission.membership_support = true;
        assert_eq!(membership_type(&submission), " Supporting");

        submission.membership_support = false;
        assert_eq!(membership_type(&submission), " ");
    }

    #[test]
    fn membership_joindate() {
        let submission = MembershipApplication {
            joindate_month: " 03 ".into(),
            joindate_year: "2025".into(),
            ..Default::default()
        };
        assert_eq!(membership_email(&submission).joindate, "03/2025");
    }

    #[test]
    fn attachment_filename() {
        let submission = MembershipApplication {
            name: " Mustermann ".into(),
            firstname: "Max".into(),
            ..Default::default()
        };
        assert_eq!(
            membership_attachment_filename(&submission),
            "membership-application-Mustermann-Max.pdf"
        );
    }
}
