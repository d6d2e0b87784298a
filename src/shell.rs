//! Session-aware navigation shell
//!
//! The shell is the one place that decides which top-level actions exist
//! for the current session: guests get the auth entries, signed-in users
//! get logout, NGO accounts additionally get the listing tools. It owns no
//! rendering; front-ends ask for [`NavShell::actions`] and draw them.

use std::fmt;

use crate::api::PetApi;
use crate::error::Result;
use crate::forms::Navigation;
use crate::session::SessionStore;
use paws_types::{User, UserRole};

/// Top-level navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The home listing, available to everyone.
    Browse,
    SignIn,
    SignUp,
    /// NGO only: the add-pet form.
    AddPet,
    /// NGO only: the listing statistics page.
    Dashboard,
    Logout,
}

impl NavAction {
    /// Display label, as the navigation renders it.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::Browse => "Browse",
            NavAction::SignIn => "Sign In",
            NavAction::SignUp => "Sign Up",
            NavAction::AddPet => "Add a Pet",
            NavAction::Dashboard => "Dashboard",
            NavAction::Logout => "Logout",
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct NavShell {
    store: SessionStore,
}

impl NavShell {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// The signed-in user, read fresh from the store on every call so a
    /// login or logout elsewhere is picked up immediately.
    pub fn user(&self) -> Option<User> {
        self.store.load().map(|session| session.user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.store.load().is_some()
    }

    /// Actions available right now, in display order.
    pub fn actions(&self) -> Vec<NavAction> {
        let mut actions = vec![NavAction::Browse];
        match self.user() {
            None => {
                actions.push(NavAction::SignIn);
                actions.push(NavAction::SignUp);
            }
            Some(user) => {
                if user.role == UserRole::Ngo {
                    actions.push(NavAction::AddPet);
                    actions.push(NavAction::Dashboard);
                }
                actions.push(NavAction::Logout);
            }
        }
        actions
    }

    pub fn allows(&self, action: NavAction) -> bool {
        self.actions().contains(&action)
    }

    /// Sign out and land on the home listing. The session store is
    /// cleared by the API client whether or not the server call worked.
    pub async fn logout(&self, api: &dyn PetApi) -> Result<Navigation> {
        api.logout().await?;
        Ok(Navigation::Home)
    }
}
