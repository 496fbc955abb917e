use serde::Serialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Message,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
    #[error("the form was already sent")]
    AlreadySubmitted,
    #[error("could not encode the form: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for FormError {
    fn from(e: serde_json::Error) -> Self {
        FormError::Encode(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Editing,
    Submitted { reset_at_ms: f64 },
}

/// Contact form state. Submitting never leaves the page: the payload is
/// handed back for logging and the form clears itself after a delay.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: Phase,
    reset_after_ms: f64,
    rejection: Option<FormError>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(config::FORM_RESET_MS as f64)
    }
}

impl ContactForm {
    pub fn new(reset_after_ms: f64) -> Self {
        Self {
            fields: ContactFields::default(),
            phase: Phase::Editing,
            reset_after_ms,
            rejection: None,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted { .. })
    }

    /// Why the last submit was refused. Cleared by the next edit.
    pub fn rejection(&self) -> Option<&FormError> {
        self.rejection.as_ref()
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.rejection = None;
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in Field::ALL {
            if field.is_required() && self.fields.get(field).trim().is_empty() {
                return Err(FormError::Missing(field.key()));
            }
        }
        let email = self.fields.email.trim();
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// Accepts the form at `now_ms` and returns the JSON payload that would
    /// have been sent.
    pub fn submit(&mut self, now_ms: f64) -> Result<String, FormError> {
        let result = self.accept(now_ms);
        self.rejection = result.as_ref().err().cloned();
        result
    }

    fn accept(&mut self, now_ms: f64) -> Result<String, FormError> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        self.validate()?;
        let payload = serde_json::to_string(&self.fields)?;
        self.phase = Phase::Submitted {
            reset_at_ms: now_ms + self.reset_after_ms,
        };
        Ok(payload)
    }

    /// Clears the form once the acknowledgment has been shown long enough.
    /// Returns `true` on the tick that performed the reset.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.phase {
            Phase::Submitted { reset_at_ms } if now_ms >= reset_at_ms => {
                self.fields = ContactFields::default();
                self.phase = Phase::Editing;
                self.rejection = None;
                true
            }
            _ => false,
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, rest)| {
                !host.is_empty() && !rest.is_empty() && !rest.ends_with('.')
            })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(3000.0);
        form.update(Field::Name, "A");
        form.update(Field::Email, "a@b.com");
        form.update(Field::Message, "hi");
        form
    }

    #[test]
    fn submit_then_reset_after_delay() {
        let mut form = filled();
        form.submit(1000.0).unwrap();
        assert!(form.is_submitted());
        assert_eq!(form.fields().name, "A");

        assert!(!form.tick(3999.0));
        assert!(form.is_submitted());

        assert!(form.tick(4000.0));
        assert!(!form.is_submitted());
        assert!(form.fields().is_empty());
        assert_eq!(form.fields(), &ContactFields::default());

        // reset happens once
        assert!(!form.tick(9000.0));
    }

    #[test]
    fn payload_is_json() {
        let mut form = filled();
        form.update(Field::Company, "Acme");
        let payload = form.submit(0.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["name"], "A");
        assert_eq!(value["company"], "Acme");
        assert_eq!(value["phone"], "");
    }

    #[test]
    fn required_fields_are_enforced() {
        let mut form = ContactForm::new(3000.0);
        form.update(Field::Email, "a@b.com");
        form.update(Field::Message, "hi");
        assert_eq!(form.submit(0.0), Err(FormError::Missing("name")));

        form.update(Field::Name, "   ");
        assert_eq!(form.submit(0.0), Err(FormError::Missing("name")));
        assert!(!form.is_submitted());
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let form = filled();
        assert!(!Field::Phone.is_required());
        assert!(!Field::Company.is_required());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_email() {
        let mut form = filled();
        for bad in ["ab.com", "a@", "@b.com", "a@b", "a@@b.com", "a b@c.com", "a@b."] {
            form.update(Field::Email, bad);
            assert_eq!(form.validate(), Err(FormError::InvalidEmail(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn second_submit_while_acknowledging_is_rejected() {
        let mut form = filled();
        form.submit(0.0).unwrap();
        assert_eq!(form.submit(10.0), Err(FormError::AlreadySubmitted));
    }

    #[test]
    fn edits_during_acknowledgment_are_cleared_too() {
        let mut form = filled();
        form.submit(0.0).unwrap();
        form.update(Field::Phone, "+7 700");
        assert!(form.tick(3000.0));
        assert!(form.fields().phone.is_empty());
    }

    #[test]
    fn encoding_failures_become_form_errors() {
        let err = serde_json::from_str::<u8>("not json").unwrap_err();
        let form_err = FormError::from(err);
        assert!(matches!(&form_err, FormError::Encode(msg) if !msg.is_empty()));
        assert!(form_err.to_string().starts_with("could not encode the form"));
    }

    #[test]
    fn editing_clears_the_last_rejection() {
        let mut form = filled();
        form.update(Field::Email, "nope");
        assert_eq!(form.submit(0.0), Err(FormError::InvalidEmail("nope".into())));
        assert_eq!(form.rejection(), Some(&FormError::InvalidEmail("nope".into())));

        form.update(Field::Email, "a@b.com");
        assert_eq!(form.rejection(), None);
        assert!(form.submit(10.0).is_ok());
        assert_eq!(form.rejection(), None);
    }

}
