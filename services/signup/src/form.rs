//! Sign-up form view model
//!
//! Holds the draft being typed, applies the validation schema and runs the
//! submit sequence: validate, rewrite the birth date, call the registration
//! API, then navigate home. Rendering is left to the caller; everything it
//! needs to draw the form (values, field errors, submit error, whether the
//! submit button is disabled) is exposed here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::api::RegistrationEndpoint;
use crate::date;
use crate::error::{SignupError, SignupResult};
use crate::models::{Field, RegistrationDraft};
use crate::navigation::{HOME_ROUTE, Navigator};
use crate::validation::{FormErrors, ValidationSchema};

pub const WELCOME_TITLE: &str = "Seja bem-vindo(a) ao WebContas!";
pub const WELCOME_TEXT: &str =
    "Se já possui cadastro, clique no botão abaixo para acessar sua conta.";
pub const TITLE: &str = "Criar uma conta";
pub const SUBTITLE: &str = "Preencha seus dados abaixo";
pub const SUBMIT_LABEL: &str = "Cadastrar-se";
pub const SIGN_IN_PROMPT: &str = "Já tem uma conta?";
pub const SIGN_IN_LABEL: &str = "Fazer Login";

/// Form submission event
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the host from performing its own submit action
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Marks a submission as in flight until dropped
struct SubmitGuard<'a>(&'a AtomicBool);

impl<'a> SubmitGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sign-up form state and handlers
pub struct SignUpForm<E, N> {
    endpoint: E,
    navigator: N,
    schema: ValidationSchema,
    draft: Mutex<RegistrationDraft>,
    errors: Mutex<FormErrors>,
    submit_error: Mutex<Option<String>>,
    submitting: AtomicBool,
}

impl<E, N> SignUpForm<E, N>
where
    E: RegistrationEndpoint,
    N: Navigator,
{
    /// Create a form with an empty draft
    pub fn new(endpoint: E, navigator: N, schema: ValidationSchema) -> Self {
        Self {
            endpoint,
            navigator,
            schema,
            draft: Mutex::new(RegistrationDraft::default()),
            errors: Mutex::new(FormErrors::default()),
            submit_error: Mutex::new(None),
            submitting: AtomicBool::new(false),
        }
    }

    /// Update one field from an input event
    pub fn handle_change(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if field.is_secret() {
            debug!("Field {} changed", field);
        } else {
            debug!("Field {} changed to {:?}", field, value);
        }
        lock(&self.draft).set(field, value);
    }

    /// Update a field identified by its input name
    pub fn handle_change_by_name(&self, name: &str, value: impl Into<String>) -> SignupResult<()> {
        let field = name.parse::<Field>()?;
        self.handle_change(field, value);
        Ok(())
    }

    /// Return to the previous view
    pub fn handle_back(&self) {
        self.navigator.go_back();
    }

    /// Validate and submit the draft
    ///
    /// On success the user is sent to the home route. On failure the form
    /// stays where it is and the reason is kept for display.
    pub async fn handle_submit(&self, event: &mut SubmitEvent) -> SignupResult<()> {
        event.prevent_default();

        let Some(_guard) = SubmitGuard::acquire(&self.submitting) else {
            warn!("Ignoring submit while a previous submission is in flight");
            return Err(SignupError::SubmissionInProgress);
        };

        *lock(&self.submit_error) = None;
        let mut payload = self.draft();

        if let Err(errors) = self.schema.validate(&payload) {
            info!("Sign-up form has {} invalid field(s)", errors.len());
            *lock(&self.errors) = errors.clone();
            return Err(SignupError::Validation(errors));
        }
        *lock(&self.errors) = FormErrors::default();

        payload.birth_date = date::reformat_birth_date(&payload.birth_date);

        info!("Submitting registration for {}", payload.email);
        if let Err(e) = self.endpoint.add_user(&payload).await {
            error!("Registration failed: {}", e);
            *lock(&self.submit_error) = Some(e.user_message());
            return Err(e.into());
        }

        // The draft keeps the typed format until the API accepts it
        lock(&self.draft).birth_date = payload.birth_date;

        info!("Registration succeeded, navigating to {}", HOME_ROUTE);
        self.navigator.replace(HOME_ROUTE);

        Ok(())
    }

    /// Snapshot of the current draft
    pub fn draft(&self) -> RegistrationDraft {
        lock(&self.draft).clone()
    }

    /// Field errors from the last submit attempt
    pub fn errors(&self) -> FormErrors {
        lock(&self.errors).clone()
    }

    /// Message from the last failed API call, if any
    pub fn submit_error(&self) -> Option<String> {
        lock(&self.submit_error).clone()
    }

    /// True while a submission is in flight; the submit control is disabled
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
