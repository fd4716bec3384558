//! Input validation for the sign-up form

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::date;
use crate::models::{Field, RegistrationDraft};

pub const NAME_MAX_LENGTH: usize = 32;
pub const EMAIL_MAX_LENGTH: usize = 64;
pub const PASSWORD_MAX_LENGTH: usize = 128;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(field: Field) -> String {
    format!("{} is required", field.display_name())
}

fn too_long(field: Field, maximum: usize) -> String {
    format!(
        "{} is too long (maximum is {} characters)",
        field.display_name(),
        maximum
    )
}

fn collect(messages: Vec<String>) -> Result<(), Vec<String>> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(messages)
    }
}

/// Validate name
pub fn validate_name(name: &str) -> Result<(), Vec<String>> {
    let mut messages = Vec::new();

    if is_blank(name) {
        messages.push(required(Field::Name));
    }

    if name.chars().count() > NAME_MAX_LENGTH {
        messages.push(too_long(Field::Name, NAME_MAX_LENGTH));
    }

    collect(messages)
}

/// Validate CPF
///
/// The CPF is an opaque identifier here; only presence is checked.
pub fn validate_cpf(cpf: &str) -> Result<(), Vec<String>> {
    if is_blank(cpf) {
        return Err(vec![required(Field::Cpf)]);
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), Vec<String>> {
    if is_blank(email) {
        return Err(vec![required(Field::Email)]);
    }

    let mut messages = Vec::new();

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        messages.push(format!("{} is not a valid email", Field::Email.display_name()));
    }

    if email.chars().count() > EMAIL_MAX_LENGTH {
        messages.push(too_long(Field::Email, EMAIL_MAX_LENGTH));
    }

    collect(messages)
}

/// Validate password
pub fn validate_password(password: &str) -> Result<(), Vec<String>> {
    let mut messages = Vec::new();

    if is_blank(password) {
        messages.push(required(Field::Password));
    }

    if password.chars().count() > PASSWORD_MAX_LENGTH {
        messages.push(too_long(Field::Password, PASSWORD_MAX_LENGTH));
    }

    collect(messages)
}

/// Validate birth date
///
/// With `strict` set, a present value must also be a real `DD/MM/YYYY` date.
pub fn validate_birth_date(birth_date: &str, strict: bool) -> Result<(), Vec<String>> {
    if is_blank(birth_date) {
        return Err(vec![required(Field::BirthDate)]);
    }

    if strict && date::parse_birth_date(birth_date).is_err() {
        return Err(vec![format!(
            "{} must be a valid date (DD/MM/YYYY)",
            Field::BirthDate.display_name()
        )]);
    }

    Ok(())
}

/// Violations found in a draft, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: BTreeMap<Field, Vec<String>>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages for a field; empty when the field is valid
    pub fn get(&self, field: Field) -> &[String] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }

    fn record(&mut self, field: Field, result: Result<(), Vec<String>>) {
        if let Err(messages) = result {
            self.errors.entry(field).or_default().extend(messages);
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .errors
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        f.write_str(&messages.join("; "))
    }
}

/// Acceptance rules applied to a draft before it is submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSchema {
    /// Reject birth dates that are not real `DD/MM/YYYY` dates
    pub strict_birth_date: bool,
}

impl ValidationSchema {
    /// Schema that also checks the birth date format
    pub fn strict() -> Self {
        Self {
            strict_birth_date: true,
        }
    }

    pub fn from_config(config: &common::config::SignupConfig) -> Self {
        Self {
            strict_birth_date: config.strict_birth_date,
        }
    }

    /// Validate every field of the draft
    pub fn validate(&self, draft: &RegistrationDraft) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        errors.record(Field::Name, validate_name(&draft.name));
        errors.record(Field::Cpf, validate_cpf(&draft.cpf));
        errors.record(Field::Email, validate_email(&draft.email));
        errors.record(Field::Password, validate_password(&draft.password));
        errors.record(
            Field::BirthDate,
            validate_birth_date(&draft.birth_date, self.strict_birth_date),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
