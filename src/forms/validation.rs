//! One validator for every form on the site. A form is described by a
//! [`FormSchema`]; field values come from any [`FieldSource`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Field lookup strategy. `None` and an empty string both mean "missing".
pub trait FieldSource {
    fn value(&self, key: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<&str, &str> {
    fn value(&self, key: &str) -> Option<&str> {
        self.get(key).copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub required: &'static [&'static str],
    pub email_field: Option<&'static str>,
}

pub const CONTACT_FORM: FormSchema = FormSchema {
    required: &["firstName", "lastName", "email", "message"],
    email_field: Some("email"),
};

pub const NEWSLETTER_FORM: FormSchema = FormSchema {
    required: &["email"],
    email_field: Some("email"),
};

impl FormSchema {
    pub fn is_required(&self, key: &str) -> bool {
        self.required.contains(&key)
    }

    pub fn is_email(&self, key: &str) -> bool {
        self.email_field == Some(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("This field is required"),
            FieldError::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

/// Failing fields keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    pub fn get(&self, key: &str) -> Option<FieldError> {
        self.0.get(key).copied()
    }

    pub fn set(&mut self, key: &str, error: FieldError) {
        self.0.insert(key.to_string(), error);
    }

    /// Returns whether there was an error to clear.
    pub fn clear(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn summary(&self) -> String {
        match self.0.len() {
            1 => "Please fix the highlighted field before sending.".to_string(),
            n => format!("Please fix the {} highlighted fields before sending.", n),
        }
    }
}

/// Blur-time check of a single field.
pub fn validate_field(schema: &FormSchema, key: &str, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if schema.is_required(key) && value.is_empty() {
        return Some(FieldError::Required);
    }
    if schema.is_email(key) && !value.is_empty() && !is_valid_email(value) {
        return Some(FieldError::InvalidEmail);
    }
    None
}

/// Submit-time check of the whole form.
pub fn validate<S: FieldSource + ?Sized>(schema: &FormSchema, source: &S) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for key in schema.required {
        let missing = source.value(key).map_or(true, |v| v.trim().is_empty());
        if missing {
            errors.set(key, FieldError::Required);
        }
    }

    if let Some(key) = schema.email_field {
        if let Some(email) = source.value(key).map(str::trim).filter(|v| !v.is_empty()) {
            if !is_valid_email(email) {
                errors.set(key, FieldError::InvalidEmail);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
