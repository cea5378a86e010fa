use crate::models::ScoredBreed;
use std::cmp::Ordering;

/// Total order over scored breeds, best first
///
/// Keys, each consulted only on a tie of the previous one:
/// 1. shelter availability, descending
/// 2. combined score rounded to an integer, descending
/// 3. raw score, descending
/// 4. versatility (good with kids + good with pets), descending
/// 5. dual role (`Both`) before single role
/// 6. breed name, ascending
pub fn compare(a: &ScoredBreed<'_>, b: &ScoredBreed<'_>) -> Ordering {
    b.breed
        .shelter_score()
        .cmp(&a.breed.shelter_score())
        .then_with(|| rounded(b.combined_score).cmp(&rounded(a.combined_score)))
        .then_with(|| b.raw_score.cmp(&a.raw_score))
        .then_with(|| b.breed.versatility().cmp(&a.breed.versatility()))
        .then_with(|| b.breed.is_dual_role().cmp(&a.breed.is_dual_role()))
        .then_with(|| a.breed.name.cmp(&b.breed.name))
}

/// Sort matches into presentation order
pub fn rank<'a>(mut matches: Vec<ScoredBreed<'a>>) -> Vec<ScoredBreed<'a>> {
    matches.sort_by(compare);
    matches
}

#[inline]
fn rounded(score: f64) -> i64 {
    score.round() as i64
}
