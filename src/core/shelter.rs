use crate::models::{RankingPolicy, ScoredBreed};

/// Small score boost for commonly adoptable breeds
///
/// Capped at `policy.shelter_boost_cap`.
#[inline]
pub fn shelter_boost(shelter_score: u8, policy: &RankingPolicy) -> f64 {
    (shelter_score as f64 * policy.shelter_boost_per_point).min(policy.shelter_boost_cap)
}

/// Blend shelter availability into each match's combined score
///
/// With `prioritize` off the combined score is the raw score. With it on,
/// the capped boost is added and breeds that are common or frequent in
/// shelters get an extra reason appended after their scoring reasons.
pub fn blend<'a>(
    mut matches: Vec<ScoredBreed<'a>>,
    prioritize: bool,
    policy: &RankingPolicy,
) -> Vec<ScoredBreed<'a>> {
    for m in &mut matches {
        m.combined_score = m.raw_score as f64;
        if !prioritize {
            continue;
        }

        let shelter_score = m.breed.shelter_score();
        m.combined_score = (m.raw_score as f64 + shelter_boost(shelter_score, policy)).min(100.0);

        if shelter_score >= policy.common_shelter_score {
            m.reasons.push("Commonly available in shelters".to_string());
        } else if shelter_score >= policy.frequent_shelter_score {
            m.reasons.push("Often found in shelters".to_string());
        }
    }

    matches
}

/// Whether a breed turns up in shelters often enough to recommend
#[inline]
pub fn is_shelter_eligible(shelter_score: Option<u8>, policy: &RankingPolicy) -> bool {
    matches!(shelter_score, Some(score) if score >= policy.shelter_floor)
}

/// Drop breeds that are essentially never seen in shelters or rescues
///
/// Applied to every request, whether or not adoptability is prioritized.
pub fn filter_shelter_eligible<'a>(
    matches: Vec<ScoredBreed<'a>>,
    policy: &RankingPolicy,
) -> Vec<ScoredBreed<'a>> {
    matches
        .into_iter()
        .filter(|m| {
            let eligible = is_shelter_eligible(m.breed.shelter_availability_score, policy);
            if !eligible {
                tracing::trace!(
                    "Filtered out rare breed: {} (shelter score: {:?})",
                    m.breed.name,
                    m.breed.shelter_availability_score
                );
            }
            eligible
        })
        .collect()
}
