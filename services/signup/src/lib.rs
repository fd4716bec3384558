//! Sign-up form for the WebContas front-end
//!
//! The form collects name, CPF, email, password and birth date, validates
//! them, converts the birth date to the API format and registers the user
//! through the registration API before navigating home.

pub mod api;
pub mod date;
pub mod error;
pub mod form;
pub mod models;
pub mod navigation;
pub mod validation;

pub use api::{EndpointError, HttpRegistrationEndpoint, RegistrationEndpoint};
pub use error::{SignupError, SignupResult};
pub use form::{SignUpForm, SubmitEvent};
pub use models::{Field, RegistrationDraft};
pub use navigation::{HistoryNavigator, Navigator};
pub use validation::{FormErrors, ValidationSchema};
