//! Sign-in / sign-up form controller
//!
//! One controller backs both auth screens; `mode` picks which. On sign-up
//! the selected role decides whether the personal name or the organization
//! name is required, and that is the name sent to the server.

use regex::Regex;
use std::sync::LazyLock;

use super::{FieldErrors, FormPhase, Navigation};
use crate::api::PetApi;
use paws_types::{SignupRequest, UserRole};

/// Shape check only (`local@domain.tld`); the server remains the authority
/// on deliverability.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Default)]
pub struct AuthForm {
    mode: AuthMode,
    role: UserRole,
    email: String,
    password: String,
    confirm_password: String,
    name: String,
    organization_name: String,
    errors: FieldErrors,
    submit_error: Option<String>,
    phase: FormPhase,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            role: UserRole::Adopter,
            ..Self::default()
        }
    }

    // ── read side ──────────────────────────────────────────────

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message from a server rejection or transport failure, for display
    /// above the submit button.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    // ── edits ──────────────────────────────────────────────────

    /// Switching between sign-in and sign-up starts from a blank slate,
    /// exactly as the tab toggle does.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode != mode {
            *self = Self::new(mode);
        }
    }

    /// Switching role keeps whatever was typed; the next validation pass
    /// re-judges which name field matters.
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.phase = FormPhase::Idle;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.edited("email");
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.edited("password");
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        self.edited("confirm_password");
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.edited("name");
    }

    pub fn set_organization_name(&mut self, value: impl Into<String>) {
        self.organization_name = value.into();
        self.edited("organization_name");
    }

    /// An edit clears that field's message and re-arms the form.
    fn edited(&mut self, field: &'static str) {
        self.errors.clear_field(field);
        self.submit_error = None;
        self.phase = FormPhase::Idle;
    }

    // ── submit ─────────────────────────────────────────────────

    /// Validate, then call the API. Returns the navigation target on
    /// success; on any failure the details are readable off the form and
    /// no navigation happens.
    pub async fn submit(&mut self, api: &dyn PetApi) -> Option<Navigation> {
        self.phase = FormPhase::Validating;
        if !self.validate() {
            self.phase = FormPhase::Failed;
            return None;
        }

        self.submit_error = None;
        self.phase = FormPhase::Submitting;

        let result = match self.mode {
            AuthMode::SignIn => api.login(&self.email, &self.password).await,
            AuthMode::SignUp => {
                let name = match self.role {
                    UserRole::Adopter => self.name.clone(),
                    UserRole::Ngo => self.organization_name.clone(),
                };
                api.signup(SignupRequest {
                    email: self.email.clone(),
                    password: self.password.clone(),
                    name,
                    role: self.role,
                })
                .await
            }
        };

        match result {
            Ok(auth) => {
                self.phase = FormPhase::Success;
                Some(Navigation::To(auth.redirect_url))
            }
            Err(e) => {
                self.submit_error = Some(e.message().to_string());
                self.phase = FormPhase::Failed;
                None
            }
        }
    }

    /// Client-side shape checks. Rebuilds the error map from scratch so a
    /// fixed field never keeps a stale message.
    fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();

        if self.email.is_empty() {
            errors.insert("email", "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert("email", "Please enter a valid email");
        }

        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.insert("password", "Password must be at least 6 characters");
        }

        if self.mode == AuthMode::SignUp {
            if self.role == UserRole::Adopter && self.name.is_empty() {
                errors.insert("name", "Full name is required");
            }
            if self.role == UserRole::Ngo && self.organization_name.is_empty() {
                errors.insert("organization_name", "Organization name is required");
            }
            if self.confirm_password.is_empty() {
                errors.insert("confirm_password", "Please confirm your password");
            } else if self.password != self.confirm_password {
                errors.insert("confirm_password", "Passwords do not match");
            }
        }

        let ok = errors.is_empty();
        self.errors = errors;
        ok
    }
}
