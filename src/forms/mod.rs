//! Headless form controllers
//!
//! Each form owns its draft fields, a field-keyed error map and a submit
//! phase. Controllers hold no rendering concerns; a front-end reads state
//! and forwards edits/submits. The lifecycle is the same for every form:
//!
//! ```text
//! Idle → Validating → Submitting → (Success | Failed)
//!   ▲                                          │
//!   └───────────── field edit ────────────────┘
//! ```
//!
//! Validation runs synchronously, entirely client-side, before any network
//! call. It never substitutes for server-side validation: whenever the
//! server rejects a request the client judged valid, the server's message
//! wins and is surfaced as the submit error.

pub mod add_pet;
pub mod auth;

pub use add_pet::{AddPetForm, PetSubmission};
pub use auth::{AuthForm, AuthMode};

use std::collections::BTreeMap;

/// Submit lifecycle of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// Where the front-end should navigate after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The home listing.
    Home,
    /// A server-supplied route, e.g. `/ngo/dashboard`.
    To(String),
}

/// Field-keyed validation messages. Keys are the form's own field names;
/// messages are ready for inline display next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Drop the message for one field, as an edit to that field does.
    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_field_leaves_other_fields_alone() {
        let mut errors = FieldErrors::default();
        errors.insert("email", "Email is required");
        errors.insert("password", "Password is required");

        errors.clear_field("email");
        assert!(errors.get("email").is_none());
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn iteration_is_ordered_by_field() {
        let mut errors = FieldErrors::default();
        errors.insert("password", "Password is required");
        errors.insert("email", "Email is required");

        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }
}
