// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod ranking;
pub mod scoring;
pub mod shelter;
pub mod tiers;

pub use filters::{filter_by_size, matches_query};
pub use matcher::{assemble, Matcher, MatchOutcome, ScoreDistribution};
pub use ranking::{compare, rank};
pub use scoring::{calculate_breed_score, BreedScore, MatchTier};
pub use shelter::{blend, filter_shelter_eligible, shelter_boost};
pub use tiers::{tier_distance, Tiered};
