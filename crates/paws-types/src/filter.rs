//! Listing filter types
//!
//! Filtering is a two-stage affair. Species and location narrowing happen
//! server-side through query parameters; age narrowing happens client-side
//! because the backend exposes no age-range parameter. [`PetFilter`] carries
//! both stages but only [`PetFilter::server_query`] reaches the wire; the
//! [`AgeBucket`] is applied afterwards to whatever page came back.

use crate::pet::Species;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// SERVER-SIDE STAGE
// ============================================================================

/// Species selector. `All` sends no `type` parameter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeciesFilter {
    #[default]
    All,
    Dog,
    Cat,
}

impl SpeciesFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeciesFilter::All => "All",
            SpeciesFilter::Dog => "Dog",
            SpeciesFilter::Cat => "Cat",
        }
    }

    /// Value for the `type` query parameter, or `None` when unfiltered.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            SpeciesFilter::All => None,
            SpeciesFilter::Dog => Some("Dog"),
            SpeciesFilter::Cat => Some("Cat"),
        }
    }
}

impl From<Species> for SpeciesFilter {
    fn from(species: Species) -> Self {
        match species {
            Species::Dog => SpeciesFilter::Dog,
            Species::Cat => SpeciesFilter::Cat,
        }
    }
}

impl fmt::Display for SpeciesFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpeciesFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(SpeciesFilter::All),
            "dog" => Ok(SpeciesFilter::Dog),
            "cat" => Ok(SpeciesFilter::Cat),
            other => Err(format!(
                "unknown species filter '{other}' (expected All, Dog or Cat)"
            )),
        }
    }
}

// ============================================================================
// CLIENT-SIDE STAGE
// ============================================================================

/// Age range applied locally after the server page comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgeBucket {
    #[default]
    All,
    ZeroToTwo,
    ThreeToFive,
    SixPlus,
}

impl AgeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::All => "All",
            AgeBucket::ZeroToTwo => "0-2",
            AgeBucket::ThreeToFive => "3-5",
            AgeBucket::SixPlus => "6+",
        }
    }

    /// Whether a pet of `age` years falls inside this bucket.
    pub fn matches(&self, age: u32) -> bool {
        match self {
            AgeBucket::All => true,
            AgeBucket::ZeroToTwo => age <= 2,
            AgeBucket::ThreeToFive => (3..=5).contains(&age),
            AgeBucket::SixPlus => age >= 6,
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(AgeBucket::All),
            "0-2" => Ok(AgeBucket::ZeroToTwo),
            "3-5" => Ok(AgeBucket::ThreeToFive),
            "6+" => Ok(AgeBucket::SixPlus),
            other => Err(format!(
                "unknown age bucket '{other}' (expected All, 0-2, 3-5 or 6+)"
            )),
        }
    }
}

// ============================================================================
// COMBINED FILTER
// ============================================================================

/// Transient listing criteria. Never persisted; every view starts from
/// [`PetFilter::default`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetFilter {
    pub species: SpeciesFilter,
    pub age: AgeBucket,
    pub location: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub skip: Option<u32>,
}

impl PetFilter {
    /// Query parameters for `GET /api/pets`.
    ///
    /// Only the server-side stage appears here: `type` when a species is
    /// selected, `location` when non-empty, `limit`/`skip` when positive.
    /// The age bucket never reaches the wire.
    pub fn server_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(species) = self.species.as_query() {
            params.push(("type", species.to_string()));
        }
        if !self.location.is_empty() {
            params.push(("location", self.location.clone()));
        }
        if let Some(limit) = self.limit.filter(|v| *v > 0) {
            params.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip.filter(|v| *v > 0) {
            params.push(("skip", skip.to_string()));
        }
        params
    }
}
