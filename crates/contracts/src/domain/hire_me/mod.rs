pub mod contact_form;

pub use contact_form::{
    looks_like_email, ContactField, ContactForm, ContactFormErrors, EmailTemplateParams,
    CONTACT_FORM_STORAGE_KEY,
};

/// Local-storage key of the selected opportunity type
pub const OPPORTUNITY_STORAGE_KEY: &str = "portfolio-opportunity-focus";

/// Booking link offered to visitors who want to skip the form
pub const BOOK_CALL_URL: &str = "https://www.linkedin.com/in/ashwinpulipati/";
pub const BOOK_CALL_HEADING: &str = "Ready to chat?";
pub const BOOK_CALL_TEXT: &str =
    "If you already know this is a serious fit, you can book a short call directly.";
pub const BOOK_CALL_LABEL: &str = "Book a 20-minute intro call";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFactIcon {
    MapPin,
    Clock,
    Users,
    Briefcase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFact {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: QuickFactIcon,
}

pub const QUICK_FACTS: &[QuickFact] = &[
    QuickFact {
        label: "Location",
        value: "USA · Open to relocation and remote",
        icon: QuickFactIcon::MapPin,
    },
    QuickFact {
        label: "Time zone",
        value: "US Eastern · Flexible overlap",
        icon: QuickFactIcon::Clock,
    },
    QuickFact {
        label: "Collaboration",
        value: "Engineering teams, design-driven orgs",
        icon: QuickFactIcon::Users,
    },
    QuickFact {
        label: "Focus",
        value: "Web, data, and cloud engineering",
        icon: QuickFactIcon::Briefcase,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_call_link_is_external_https() {
        assert!(BOOK_CALL_URL.starts_with("https://"));
        assert!(!BOOK_CALL_LABEL.is_empty());
        assert!(BOOK_CALL_TEXT.ends_with('.'));
    }

    #[test]
    fn test_quick_facts_have_distinct_labels() {
        let mut labels: Vec<_> = QUICK_FACTS.iter().map(|f| f.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), QUICK_FACTS.len());
    }
}
