use crate::models::{BreedQuery, BreedRecord, PreferenceVector, ScoredBreed};

/// Keep only breeds whose size exactly equals the requested size
///
/// A user who asks for "Small" never sees Medium or Large results, even
/// though the scorer gives adjacent sizes partial credit. `Any` keeps all.
pub fn filter_by_size<'a>(
    matches: Vec<ScoredBreed<'a>>,
    preferences: &PreferenceVector,
) -> Vec<ScoredBreed<'a>> {
    let Some(size) = preferences.size.value() else {
        return matches;
    };

    let before = matches.len();
    let kept: Vec<ScoredBreed<'a>> = matches
        .into_iter()
        .filter(|m| m.breed.size == size)
        .collect();

    tracing::debug!("Size filtering: {} breeds -> {} {} breeds", before, kept.len(), size);

    kept
}

/// Check if a breed satisfies a catalog search query
#[inline]
pub fn matches_query(breed: &BreedRecord, query: &BreedQuery) -> bool {
    if !query.sizes.is_empty() && !query.sizes.contains(&breed.size) {
        return false;
    }

    if !query.energy_levels.is_empty() && !query.energy_levels.contains(&breed.energy_level) {
        return false;
    }

    if !query.trainability.is_empty() && !query.trainability.contains(&breed.trainability) {
        return false;
    }

    if !query.grooming_needs.is_empty() && !query.grooming_needs.contains(&breed.grooming_needs) {
        return false;
    }

    if query.good_with_kids.is_some_and(|kids| kids != breed.good_with_kids) {
        return false;
    }

    if query.good_with_pets.is_some_and(|pets| pets != breed.good_with_pets) {
        return false;
    }

    if query.role.is_some_and(|role| role != breed.role) {
        return false;
    }

    if query.senior_friendly.is_some_and(|senior| senior != breed.senior_friendly) {
        return false;
    }

    if query
        .special_needs_possible
        .is_some_and(|special| special != breed.special_needs_possible)
    {
        return false;
    }

    true
}
