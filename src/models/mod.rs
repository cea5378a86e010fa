// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    default_preferences, BreedQuery, BreedRecord, EnergyLevel, FlagWeights, GroomingNeeds, MatchResult,
    ParseCategoryError, Preference, PreferenceVector, RankingPolicy, Role, ScoredBreed, ScoringWeights, Size,
    TierWeights, Trainability,
};
pub use requests::FindMatchesRequest;
pub use responses::{
    ErrorResponse, FavoriteResponse, FindMatchesResponse, HealthResponse, MaintenanceResponse,
};
