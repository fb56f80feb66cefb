use std::sync::Arc;

use renegades_templates_contracts::{Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceImpl {
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use renegades_templates_contracts::{
        ContactEmailTemplate, MembershipEmailTemplate, TryoutEmailTemplate,
    };

    use super::*;

    #[test]
    fn contact_email() {
        test_template(ContactEmailTemplate {
            name: "Max Mustermann".into(),
            email: "max@example.de".into(),
            subject: "Training".into(),
            message: "Hello World!".into(),
        });
    }

    #[test]
    fn tryout_email() {
        test_template(TryoutEmailTemplate {
            name: "Max Mustermann".into(),
            email: "max@example.de".into(),
            phone: "+49 911 1234567".into(),
            age: "17".into(),
            experience: "Flag Football".into(),
            message: "Hello World!".into(),
        });
    }

    #[test]
    fn membership_email() {
        test_template(MembershipEmailTemplate {
            membership_type: "Active ".into(),
            name: "Mustermann".into(),
            firstname: "Max".into(),
            birthday: "1990-05-17".into(),
            birthplace: "Nürnberg".into(),
            profession: "Student".into(),
            nationality: "deutsch".into(),
            street: "Beispielstraße 1".into(),
            plz_town: "90402 Nürnberg".into(),
            tel: "0911 1234567".into(),
            fax: String::new(),
            mobile: "+49 170 1234567".into(),
            email: "max@example.de".into(),
            joindate: "03/2025".into(),
            sepa_account_holder_name: "Mustermann".into(),
            sepa_account_holder_firstname: "Max".into(),
            sepa_iban: "DE89370400440532013000".into(),
            sepa_bic: "MARKDEF1100".into(),
            sepa_bank: "Sparkasse Nürnberg".into(),
        });
    }

    #[test]
    fn variables_are_inserted_verbatim() {
        // Arrange
        let sut = TemplateServiceImpl::default();

        let template = ContactEmailTemplate {
            name: "Max Mustermann".into(),
            email: "max@example.de".into(),
            subject: "&lt;b&gt;Training&lt;/b&gt;".into(),
            message: "line one<br>line two".into(),
        };

        // Act
        let result = sut.render(&template).unwrap();

        // Assert
        assert!(result.contains("<p><strong>From:</strong> Max Mustermann (max@example.de)</p>"));
        assert!(result.contains("<p><strong>Subject:</strong> &lt;b&gt;Training&lt;/b&gt;</p>"));
        assert!(result.contains("<p>line one<br>line two</p>"));
    }

    fn test_template<T: Template + 'static>(template: T) {
        // Arrange
        let sut = TemplateServiceImpl::default();

        // Act
        let result = sut.render(&template);

        // Assert
        result.unwrap();
    }
}
