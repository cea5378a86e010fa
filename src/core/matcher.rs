use crate::core::{
    filters::filter_by_size,
    ranking::rank,
    scoring::calculate_breed_score,
    shelter::{blend, filter_shelter_eligible},
};
use crate::models::{BreedRecord, MatchResult, PreferenceVector, RankingPolicy, ScoredBreed, ScoringWeights};
use serde::Serialize;

/// Raw-score histogram of the shelter-eligible candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    pub ninety_plus: usize,
    pub eighties: usize,
    pub seventies: usize,
    pub sixties: usize,
    pub below_sixty: usize,
}

impl ScoreDistribution {
    pub fn from_matches(matches: &[ScoredBreed<'_>]) -> Self {
        let mut dist = Self::default();
        for m in matches {
            match m.raw_score {
                90.. => dist.ninety_plus += 1,
                80..=89 => dist.eighties += 1,
                70..=79 => dist.seventies += 1,
                60..=69 => dist.sixties += 1,
                _ => dist.below_sixty += 1,
            }
        }
        dist
    }
}

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome<'a> {
    pub matches: Vec<MatchResult<'a>>,
    pub total_candidates: usize,
    /// Candidates left after the shelter-availability filter
    pub shelter_eligible: usize,
    /// Candidates left after the exact-size filter
    pub size_eligible: usize,
    pub distribution: ScoreDistribution,
}

/// Main matching orchestrator - implements the ranking pipeline
///
/// # Pipeline Stages
/// 1. Score every breed against the preferences
/// 2. Blend in shelter availability (when adoptability is prioritized)
/// 3. Drop breeds rarely found in shelters
/// 4. Rank with the multi-key tie-break order
/// 5. Keep only the requested size
/// 6. Apply the quality floor and truncate
///
/// The catalog is only borrowed, so one matcher can serve concurrent
/// requests against a shared snapshot.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    weights: ScoringWeights,
    policy: RankingPolicy,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, policy: RankingPolicy) -> Self {
        Self { weights, policy }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Score every breed without filtering or ranking
    pub fn score_catalog<'a>(
        &self,
        preferences: &PreferenceVector,
        catalog: &'a [BreedRecord],
    ) -> Vec<ScoredBreed<'a>> {
        catalog
            .iter()
            .map(|breed| {
                let score = calculate_breed_score(breed, preferences, &self.weights);
                ScoredBreed {
                    breed,
                    raw_score: score.raw_score,
                    combined_score: score.raw_score as f64,
                    reasons: score.reasons,
                }
            })
            .collect()
    }

    /// Find the best-fit breeds for a set of preferences
    ///
    /// # Arguments
    /// * `preferences` - The user's matching preferences
    /// * `catalog` - Snapshot of every breed in the catalog
    /// * `limit` - Maximum number of matches to return, capped by the policy
    pub fn find_matches<'a>(
        &self,
        preferences: &PreferenceVector,
        catalog: &'a [BreedRecord],
        limit: usize,
    ) -> MatchOutcome<'a> {
        let total_candidates = catalog.len();

        let scored = self.score_catalog(preferences, catalog);
        let blended = blend(scored, preferences.prioritize_adoptable, &self.policy);

        let eligible = filter_shelter_eligible(blended, &self.policy);
        let shelter_eligible = eligible.len();
        tracing::debug!(
            "Shelter filtering: {} total breeds -> {} shelter breeds",
            total_candidates,
            shelter_eligible
        );

        let ranked = rank(eligible);
        let distribution = ScoreDistribution::from_matches(&ranked);
        tracing::debug!("Raw score distribution: {:?}", distribution);

        let sized = filter_by_size(ranked, preferences);
        let size_eligible = sized.len();

        let mut matches = assemble(sized, &self.policy);
        matches.truncate(limit);

        tracing::debug!(
            "Returning {} matches from {} {}-size candidates (quality floor {})",
            matches.len(),
            size_eligible,
            preferences.size,
            self.policy.quality_floor
        );

        MatchOutcome {
            matches,
            total_candidates,
            shelter_eligible,
            size_eligible,
            distribution,
        }
    }
}

/// Turn ranked matches into the user-facing result list
///
/// Drops matches below the quality floor and keeps at most
/// `policy.max_results`. The displayed score is the raw score; shelter
/// blending only affects order.
pub fn assemble<'a>(ranked: Vec<ScoredBreed<'a>>, policy: &RankingPolicy) -> Vec<MatchResult<'a>> {
    ranked
        .into_iter()
        .filter(|m| m.raw_score >= policy.quality_floor)
        .take(policy.max_results)
        .map(|m| MatchResult {
            breed: m.breed,
            score: m.raw_score,
            match_reasons: m.reasons,
        })
        .collect()
}
