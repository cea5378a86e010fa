//! PawMatch - dog breed matching service
//!
//! This library scores every breed in a catalog against a user's
//! preferences, blends in shelter availability, and returns a short,
//! deterministically ordered list of matches with human-readable reasons.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_breed_score, Matcher, MatchOutcome};
pub use crate::models::{
    default_preferences, BreedRecord, FindMatchesRequest, FindMatchesResponse, MatchResult, Preference,
    PreferenceVector, RankingPolicy, ScoringWeights,
};
pub use crate::services::{Catalog, CatalogError};
