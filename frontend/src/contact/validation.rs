use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// `local@domain.tld`-like: one `@`, a dot inside the domain part, no whitespace.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Seven or more digits, spaces, `+`, `-` or parentheses. Loose on purpose:
// "-------" passes.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s+()\-]{7,}$").expect("phone pattern compiles"));

/// The fields of the contact form. Edits coming from the DOM are mapped onto
/// this enum through the input's `name` attribute; nothing else is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Contact,
    Service,
    Message,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown contact form field `{0}`")]
pub struct UnknownField(pub String);

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Contact, Field::Service, Field::Message];

    /// Value of the `name` attribute on the rendered control.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Contact => "contact",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Contact => "contact-detail",
            Field::Service => "contact-service",
            Field::Message => "contact-message",
        }
    }

    /// Id of the inline error paragraph, referenced by `aria-describedby`.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Contact => "contact-error",
            Field::Service => "service-error",
            Field::Message => "message-error",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceOption {
    WebsiteDesign,
    GoogleAds,
    Seo,
    SocialMedia,
    Branding,
    NotSure,
}

impl ServiceOption {
    /// Display order of the select.
    pub const ALL: [ServiceOption; 6] = [
        ServiceOption::WebsiteDesign,
        ServiceOption::GoogleAds,
        ServiceOption::Seo,
        ServiceOption::SocialMedia,
        ServiceOption::Branding,
        ServiceOption::NotSure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceOption::WebsiteDesign => "Website design",
            ServiceOption::GoogleAds => "Google Ads",
            ServiceOption::Seo => "SEO",
            ServiceOption::SocialMedia => "Social media",
            ServiceOption::Branding => "Branding",
            ServiceOption::NotSure => "Not sure yet",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

/// Raw values of the contact form. Empty strings mean "not filled in".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub contact: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Contact => self.contact = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }

    /// First word of the name, used to greet the sender.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter an email or phone number.")]
    MissingContact,
    #[error("Please enter a valid email or phone number.")]
    InvalidContact,
    #[error("Please pick a service.")]
    MissingService,
}

/// Sparse field -> error mapping. A missing key means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<Field, FieldError>);

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Drops the entry for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

pub fn validate(form: &ContactForm) -> ErrorMap {
    let mut errors = ErrorMap::default();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::MissingName);
    }

    if form.contact.trim().is_empty() {
        errors.insert(Field::Contact, FieldError::MissingContact);
    } else if !is_email_shape(&form.contact) && !is_phone_shape(&form.contact) {
        errors.insert(Field::Contact, FieldError::InvalidContact);
    }

    // Membership in ServiceOption is left to the select element.
    if form.service.is_empty() {
        errors.insert(Field::Service, FieldError::MissingService);
    }

    errors
}

pub fn is_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn is_phone_shape(value: &str) -> bool {
    PHONE_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, contact: &str, service: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            contact: contact.to_string(),
            service: service.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        for name in ["", " ", "\t\n  "] {
            let errors = validate(&form(name, "dan@example.com", "SEO"));
            assert_eq!(errors.get(Field::Name), Some(FieldError::MissingName), "name {name:?}");
        }
    }

    #[test]
    fn contact_must_look_like_email_or_phone() {
        for bad in ["dan", "dan@", "dan@example", "@example.com", "dan@@example.com", "dan @example.com", "12345", "0770abc900"] {
            let errors = validate(&form("Dan", bad, "SEO"));
            assert_eq!(errors.get(Field::Contact), Some(FieldError::InvalidContact), "contact {bad:?}");
        }
        for good in ["dan@example.com", "a@b.co", "07700 900123", "+44 (0)1234-567890", "1234567"] {
            let errors = validate(&form("Dan", good, "SEO"));
            assert!(!errors.contains(Field::Contact), "contact {good:?}");
        }
    }

    #[test]
    fn blank_contact_gets_its_own_message() {
        let errors = validate(&form("Dan", "   ", "SEO"));
        assert_eq!(errors.get(Field::Contact), Some(FieldError::MissingContact));
        assert_eq!(
            FieldError::MissingContact.to_string(),
            "Please enter an email or phone number."
        );
    }

    #[test]
    fn email_dot_must_have_text_on_both_sides() {
        assert!(!is_email_shape("dan@.com"));
        assert!(!is_email_shape("dan@example."));
        assert!(is_email_shape("dan@mail.example.co.uk"));
    }

    #[test]
    fn phone_heuristic_stays_loose() {
        assert!(is_phone_shape("-------"));
        assert!(is_phone_shape("(  )  +"));
        assert!(!is_phone_shape("123456"));
        assert!(!is_phone_shape("0770O900123"));
        // Only ASCII digits count.
        assert!(!is_phone_shape("٠٧٧٠٠٩٠٠١٢٣"));
        assert!(is_phone_shape("07700\u{a0}900123"));
    }

    #[test]
    fn service_only_needs_to_be_non_empty() {
        assert_eq!(
            validate(&form("Dan", "dan@example.com", "")).get(Field::Service),
            Some(FieldError::MissingService)
        );
        assert!(validate(&form("Dan", "dan@example.com", "Branding")).is_empty());
        assert!(validate(&form("Dan", "dan@example.com", "Something else")).is_empty());
    }

    #[test]
    fn message_never_fails() {
        let mut f = form("Dan", "dan@example.com", "SEO");
        f.message = "   ".to_string();
        assert!(validate(&f).is_empty());
    }

    #[test]
    fn validation_is_deterministic() {
        let f = form(" ", "nope", "");
        assert_eq!(validate(&f), validate(&f));
        assert_eq!(validate(&f).len(), 3);
    }

    #[test]
    fn field_names_round_trip_through_the_dom_attribute() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!("email".parse::<Field>(), Err(UnknownField("email".to_string())));
    }

    #[test]
    fn service_labels_are_stable() {
        for option in ServiceOption::ALL {
            assert_eq!(ServiceOption::from_label(option.label()), Some(option));
        }
        assert_eq!(ServiceOption::from_label(""), None);
    }

    #[test]
    fn first_name_is_the_first_word() {
        assert_eq!(form("Dan Mitchell", "", "").first_name(), "Dan");
        assert_eq!(form("Jo", "", "").first_name(), "Jo");
        assert_eq!(form("  Sarah  Kelley", "", "").first_name(), "Sarah");
    }
}
