//! Shared API Types for Pets & Paws
//!
//! This crate is the SINGLE SOURCE OF TRUTH for all types crossing the HTTP
//! boundary between the adoption client and the listing server.
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐         ┌──────────────────┐
//! │  Adoption Server │  JSON   │  paws-client     │
//! │  (REST)          │ ◄─────► │  (this repo)     │
//! └──────────────────┘         └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. All wire types live here - no inline struct definitions in the client
//! 2. Field renames (`type`, `_id`, `user_type`) are declared once, on the type
//! 3. Server-optional fields carry `#[serde(default)]` so older payloads parse

pub mod auth;
pub mod filter;
pub mod pet;
pub mod user;

pub use auth::{AuthResponse, HealthStatus, LoginRequest, SignupRequest};
pub use filter::{AgeBucket, PetFilter, SpeciesFilter};
pub use pet::{NewPet, Pet, PetPage, Species};
pub use user::{User, UserRole};
