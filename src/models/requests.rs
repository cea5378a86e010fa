use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::PreferenceVector;

/// Request to find matching breeds
///
/// The preference fields sit at the top level of the body next to `limit`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(flatten)]
    pub preferences: PreferenceVector,
    #[validate(range(min = 1, max = 10))]
    #[serde(default = "default_limit")]
    pub limit: u8,
}

fn default_limit() -> u8 {
    10
}
