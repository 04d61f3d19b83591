use crate::enums::OpportunityType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local-storage key of the drafted form
pub const CONTACT_FORM_STORAGE_KEY: &str = "hire-me-contact-form";

const FALLBACK_ROLE: &str = "Software Engineering";
const FALLBACK_MESSAGE: &str =
    "We are exploring an opportunity that looks aligned with your background.";

/// Editable fields of the hire-me form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    RoleTitle,
    ContactLink,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role_title: String,
    pub contact_link: String,
    pub message: String,
}

/// Per-field validation messages. Only required fields can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.messages().join(" "))]
pub struct ContactFormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
            ContactField::Company | ContactField::RoleTitle | ContactField::ContactLink => None,
        }
    }

    /// Drop the error of a field the visitor just edited
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
            ContactField::Company | ContactField::RoleTitle | ContactField::ContactLink => {}
        }
    }

    pub fn messages(&self) -> Vec<&'static str> {
        [self.name, self.email, self.message]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Shape check equivalent to `\S+@\S+\.\S+`
pub fn looks_like_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    // Some '@' with a non-empty local part, followed by a '.' that has
    // something on both sides.
    value
        .char_indices()
        .filter(|&(at, c)| c == '@' && at > 0)
        .any(|(at, _)| {
            let domain = &value[at + 1..];
            domain
                .char_indices()
                .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        })
}

/// Template parameters understood by the EmailJS template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailTemplateParams {
    pub subject: String,
    pub to_name: String,
    pub from_name: String,
    pub from_email: String,
    pub phone_number: String,
    pub role_context: String,
    pub company: String,
    pub role_title: String,
    pub opportunity_type: String,
    pub role_link: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::RoleTitle => &self.role_title,
            ContactField::ContactLink => &self.contact_link,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::RoleTitle => &mut self.role_title,
            ContactField::ContactLink => &mut self.contact_link,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), ContactFormErrors> {
        let mut errors = ContactFormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required.");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Work email is required.");
        } else if !looks_like_email(email) {
            errors.email = Some("Enter a valid email address.");
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required.");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn subject(&self, opportunity: OpportunityType) -> String {
        let role = if self.role_title.is_empty() {
            FALLBACK_ROLE
        } else {
            self.role_title.as_str()
        };
        format!("Opportunity for {} ({})", opportunity.label(), role)
    }

    fn main_message(&self) -> &str {
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            FALLBACK_MESSAGE
        } else {
            trimmed
        }
    }

    /// Plain-text draft used for the preview and the clipboard fallback
    pub fn email_body(
        &self,
        opportunity: OpportunityType,
        owner_email: &str,
        owner_first_name: &str,
    ) -> String {
        let mut lines: Vec<String> = vec![
            format!("To: {}", owner_email),
            String::new(),
            format!("Subject: {}", self.subject(opportunity)),
            String::new(),
            format!("Hi {},", owner_first_name),
            String::new(),
            self.main_message().to_string(),
            String::new(),
        ];

        if !self.company.is_empty() || !self.role_title.is_empty() || !self.contact_link.is_empty() {
            lines.push("Role context:".to_string());
            if !self.company.is_empty() {
                lines.push(format!("• Company / team: {}", self.company));
            }
            if !self.role_title.is_empty() {
                lines.push(format!("• Role title: {}", self.role_title));
            }
            if !self.contact_link.is_empty() {
                lines.push(format!("• Link / reference: {}", self.contact_link));
            }
            lines.push(String::new());
        }

        lines.push("Best,".to_string());
        lines.push(if self.name.is_empty() {
            "Hiring manager".to_string()
        } else {
            self.name.clone()
        });
        if !self.email.is_empty() {
            lines.push(self.email.clone());
        }

        lines.join("\n")
    }

    pub fn template_params(
        &self,
        opportunity: OpportunityType,
        owner_first_name: &str,
    ) -> EmailTemplateParams {
        EmailTemplateParams {
            subject: self.subject(opportunity),
            to_name: owner_first_name.to_string(),
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            phone_number: String::new(),
            role_context: String::new(),
            company: self.company.clone(),
            role_title: self.role_title.clone(),
            opportunity_type: opportunity.label().to_string(),
            role_link: self.contact_link.clone(),
            message: self.main_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            message: "Let's talk.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.name, Some("Name is required."));
        assert_eq!(errors.email, Some("Work email is required."));
        assert_eq!(errors.message, Some("Message is required."));
        assert_eq!(
            errors.to_string(),
            "Name is required. Work email is required. Message is required."
        );
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let form = ContactForm {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err().name, Some("Name is required."));
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a b@c.d"));
        assert!(looks_like_email("a@b@c.d"));

        let form = ContactForm {
            email: "not-an-email".into(),
            ..filled()
        };
        assert_eq!(
            form.validate().unwrap_err().email,
            Some("Enter a valid email address.")
        );
    }

    #[test]
    fn test_clear_error() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(ContactField::Email);
        errors.clear(ContactField::Company);
        assert_eq!(errors.get(ContactField::Email), None);
        assert_eq!(errors.get(ContactField::Name), Some("Name is required."));
    }

    #[test]
    fn test_subject_fallback() {
        let form = filled();
        assert_eq!(
            form.subject(OpportunityType::Contract),
            "Opportunity for Contract (Software Engineering)"
        );
        let form = ContactForm {
            role_title: "Staff Engineer".into(),
            ..filled()
        };
        assert_eq!(
            form.subject(OpportunityType::FullTime),
            "Opportunity for Full-time (Staff Engineer)"
        );
    }

    #[test]
    fn test_email_body_minimal() {
        let body = filled().email_body(OpportunityType::Open, "me@example.com", "Ashwin");
        assert_eq!(
            body,
            "To: me@example.com\n\
             \n\
             Subject: Opportunity for Open to discuss (Software Engineering)\n\
             \n\
             Hi Ashwin,\n\
             \n\
             Let's talk.\n\
             \n\
             Best,\n\
             Dana\n\
             dana@example.com"
        );
    }

    #[test]
    fn test_email_body_role_context() {
        let form = ContactForm {
            company: "Acme".into(),
            contact_link: "https://acme.dev/jobs/1".into(),
            ..filled()
        };
        let body = form.email_body(OpportunityType::FullTime, "me@example.com", "Ashwin");
        assert!(body.contains(
            "Role context:\n• Company / team: Acme\n• Link / reference: https://acme.dev/jobs/1\n\nBest,"
        ));
        assert!(!body.contains("Role title"));
    }

    #[test]
    fn test_email_body_blank_sender() {
        let body = ContactForm::default().email_body(OpportunityType::FullTime, "me@example.com", "Ashwin");
        assert!(body.contains(FALLBACK_MESSAGE));
        assert!(body.ends_with("Best,\nHiring manager"));
    }

    #[test]
    fn test_template_params() {
        let params = filled().template_params(OpportunityType::Internship, "Ashwin");
        assert_eq!(params.to_name, "Ashwin");
        assert_eq!(params.opportunity_type, "Internships");
        assert_eq!(params.message, "Let's talk.");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["from_email"], "dana@example.com");
    }

    #[test]
    fn test_draft_survives_storage() {
        let form = ContactForm {
            role_title: "SRE".into(),
            ..filled()
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("\"roleTitle\":\"SRE\""));
        let back: ContactForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);

        let partial: ContactForm = serde_json::from_str(r#"{"name":"Lee"}"#).unwrap();
        assert_eq!(partial.name, "Lee");
        assert!(partial.message.is_empty());
    }
}
