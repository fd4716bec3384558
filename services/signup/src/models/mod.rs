//! Sign-up form models

pub mod draft;

// Re-export for convenience
pub use draft::{Field, RegistrationDraft, UnknownField};
