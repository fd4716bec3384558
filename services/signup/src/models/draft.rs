//! Registration draft and form field definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editable fields of the sign-up form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Cpf,
    Email,
    Password,
    BirthDate,
}

impl Field {
    /// All fields, in the order the form renders them
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Cpf,
        Field::Email,
        Field::Password,
        Field::BirthDate,
    ];

    /// Key used by input events and by the registration API
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Cpf => "cpf",
            Field::Email => "email",
            Field::Password => "password",
            Field::BirthDate => "birthDate",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Cpf => "CPF",
            Field::Email => "E-mail",
            Field::Password => "Senha",
            Field::BirthDate => "Data de Nascimento",
        }
    }

    /// Name used at the start of validation messages
    pub fn display_name(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Cpf => "CPF",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::BirthDate => "Birth date",
        }
    }

    /// Whether the value must be masked on input and kept out of logs
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Input event named a field the form does not have
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// In-progress registration held by the sign-up form
///
/// Serializes to the payload expected by the registration API:
/// `{name, cpf, email, password, birthDate, removed}`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub birth_date: String,
    /// Passed through to the API untouched; always 0 for new registrations
    pub removed: i32,
}

impl RegistrationDraft {
    /// Replace the value of a single field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Cpf => self.cpf = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::BirthDate => self.birth_date = value,
        }
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Cpf => &self.cpf,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::BirthDate => &self.birth_date,
        }
    }
}

impl fmt::Debug for RegistrationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDraft")
            .field("name", &self.name)
            .field("cpf", &self.cpf)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("birth_date", &self.birth_date)
            .field("removed", &self.removed)
            .finish()
    }
}
