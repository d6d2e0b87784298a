//! Pets & Paws adoption client
//!
//! Headless client for a pet-adoption listing service: typed HTTP API,
//! persistent session, form controllers with client-side validation, and
//! the two-stage listing filter (species/location server-side, age bucket
//! client-side). Front-ends (the bundled CLI or anything else) render
//! state owned by these types and forward user actions to them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paws_client::api::{PawsClient, PetApi};
//! use paws_client::listing::ListingView;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = PawsClient::from_env()?;
//! let mut listing = ListingView::new();
//! listing.refresh_if_stale(&client).await?;
//! for pet in listing.visible() {
//!     println!("{} ({} yrs) - {}", pet.name, pet.age, pet.location);
//! }
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Environment-driven configuration
pub mod config;

// Persistent token + profile storage
pub mod session;

// The API boundary and its HTTP implementation
pub mod api;

// Headless form controllers
pub mod forms;

// Listing view-model with the two-stage filter
pub mod listing;

// Session-aware navigation
pub mod shell;

pub use api::{ImageUpload, PawsClient, PetApi};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use session::{Session, SessionStore};

// Wire types are re-exported so callers need only this crate.
pub use paws_types::{
    AgeBucket, AuthResponse, HealthStatus, NewPet, Pet, PetFilter, PetPage, SignupRequest,
    Species, SpeciesFilter, User, UserRole,
};
