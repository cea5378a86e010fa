use crate::core::tiers::{tier_distance, Tiered};
use crate::models::{
    BreedRecord, FlagWeights, Preference, PreferenceVector, Role, ScoringWeights, TierWeights,
};
use std::fmt::Display;

/// Share of perfect criteria needed for each match tier
pub const EXCEPTIONAL_RATIO: f64 = 0.8;
pub const EXCELLENT_RATIO: f64 = 0.6;
pub const GREAT_RATIO: f64 = 0.4;

/// Summary badge earned by a high share of perfect criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exceptional,
    Excellent,
    Great,
}

impl MatchTier {
    /// Tier for a perfect-match ratio, or `None` below the lowest threshold
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        if ratio >= EXCEPTIONAL_RATIO {
            Some(MatchTier::Exceptional)
        } else if ratio >= EXCELLENT_RATIO {
            Some(MatchTier::Excellent)
        } else if ratio >= GREAT_RATIO {
            Some(MatchTier::Great)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Exceptional => "EXCEPTIONAL MATCH!",
            MatchTier::Excellent => "EXCELLENT MATCH!",
            MatchTier::Great => "GREAT MATCH!",
        }
    }

    pub fn bonus(self, weights: &ScoringWeights) -> i32 {
        match self {
            MatchTier::Exceptional => weights.exceptional_bonus,
            MatchTier::Excellent => weights.excellent_bonus,
            MatchTier::Great => weights.great_bonus,
        }
    }
}

/// Outcome of scoring one breed against one preference vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedScore {
    /// 0-100
    pub raw_score: u8,
    /// Tier badge first, then one reason per criterion in evaluation order
    pub reasons: Vec<String>,
    pub perfect_matches: u32,
    pub criteria_count: u32,
}

impl BreedScore {
    pub fn perfect_match_ratio(&self) -> f64 {
        if self.criteria_count == 0 {
            return 0.0;
        }
        self.perfect_matches as f64 / self.criteria_count as f64
    }
}

/// Running totals for a single scoring pass
#[derive(Debug, Default)]
struct Tally {
    bonus: i32,
    penalty: i32,
    perfect: u32,
    criteria: u32,
    reasons: Vec<String>,
}

enum FlagOutcome {
    NoPreference,
    Match,
    Mismatch,
}

/// Score a breed (0-100) against a user's preferences
///
/// Criteria are evaluated in a fixed order: size, energy, kids, pets,
/// trainability, grooming, role, senior friendliness, special needs.
/// Size and grooming are critical criteria and subtract points on far
/// mismatches. The share of perfect criteria earns a tier bonus and badge.
pub fn calculate_breed_score(
    breed: &BreedRecord,
    preferences: &PreferenceVector,
    weights: &ScoringWeights,
) -> BreedScore {
    let mut tally = Tally::default();

    score_tiered(&mut tally, "Size", "size", preferences.size, breed.size, &weights.size);

    score_tiered(
        &mut tally,
        "Energy",
        "energy",
        preferences.energy_level,
        breed.energy_level,
        &weights.energy_level,
    );

    let kids = score_flag(
        &mut tally,
        preferences.good_with_kids,
        breed.good_with_kids,
        &weights.good_with_kids,
    );
    match kids {
        FlagOutcome::NoPreference => tally
            .reasons
            .push(format!("Kid-friendly: {}", yes_no(breed.good_with_kids))),
        FlagOutcome::Match => tally
            .reasons
            .push(format!("Perfect kid match: {}", kids_label(breed.good_with_kids))),
        FlagOutcome::Mismatch => tally
            .reasons
            .push(format!("Kid mismatch: {}", kids_label(breed.good_with_kids))),
    }

    let pets = score_flag(
        &mut tally,
        preferences.good_with_pets,
        breed.good_with_pets,
        &weights.good_with_pets,
    );
    match pets {
        FlagOutcome::NoPreference => tally
            .reasons
            .push(format!("Pet-friendly: {}", yes_no(breed.good_with_pets))),
        FlagOutcome::Match => tally
            .reasons
            .push(format!("Perfect pet match: {}", pets_label(breed.good_with_pets))),
        FlagOutcome::Mismatch => tally
            .reasons
            .push(format!("Pet mismatch: {}", pets_label(breed.good_with_pets))),
    }

    score_tiered(
        &mut tally,
        "Trainability",
        "trainability",
        preferences.trainability,
        breed.trainability,
        &weights.trainability,
    );

    score_tiered(
        &mut tally,
        "Grooming",
        "grooming",
        preferences.grooming_needs,
        breed.grooming_needs,
        &weights.grooming_needs,
    );

    score_role(&mut tally, breed, preferences.role, &weights.role);

    score_minor(
        &mut tally,
        "Senior friendly",
        preferences.senior_friendly,
        breed.senior_friendly,
        weights.senior_friendly,
    );

    score_minor(
        &mut tally,
        "Special needs possible",
        preferences.special_needs_ok,
        breed.special_needs_possible,
        weights.special_needs,
    );

    let ratio = tally.perfect as f64 / tally.criteria as f64;
    let tier = MatchTier::from_ratio(ratio);
    let tier_bonus = tier.map_or(0, |t| t.bonus(weights));
    if let Some(tier) = tier {
        tally.reasons.insert(0, tier.label().to_string());
    }

    let mut score = (weights.base + tally.bonus + tier_bonus - tally.penalty).clamp(0, 100);
    if score >= weights.decent_min && score < weights.decent_max {
        score = (score + weights.decent_nudge).clamp(0, 100);
    }

    BreedScore {
        raw_score: score as u8,
        reasons: tally.reasons,
        perfect_matches: tally.perfect,
        criteria_count: tally.criteria,
    }
}

/// Ordered criterion: full credit on exact match, partial credit by tier distance
fn score_tiered<T: Tiered + Display>(
    tally: &mut Tally,
    title: &str,
    noun: &str,
    preference: Preference<T>,
    value: T,
    weights: &TierWeights,
) {
    tally.criteria += 1;

    let wanted = match preference {
        Preference::Any => {
            tally.bonus += weights.any;
            tally.reasons.push(format!("{} flexible: {}", title, value));
            return;
        }
        Preference::Only(wanted) => wanted,
    };

    let distance = tier_distance(wanted, value);
    match distance {
        0 => {
            tally.bonus += weights.exact;
            tally.perfect += 1;
            tally.reasons.push(format!("Perfect {} match: {}", noun, value));
        }
        1 => {
            tally.bonus += weights.near;
            tally.reasons.push(format!("Similar {}: {}", noun, value));
        }
        _ => {
            let (bonus, penalty) = if distance == 2 {
                (weights.far, weights.far_penalty)
            } else {
                (weights.opposite, weights.opposite_penalty)
            };
            tally.bonus += bonus;
            tally.penalty += penalty;

            if penalty > 0 && distance == T::MAX_DISTANCE {
                tally
                    .reasons
                    .push(format!("Major {} mismatch: {} vs {}", noun, value, wanted));
            } else {
                tally
                    .reasons
                    .push(format!("{} mismatch: {} vs {}", title, value, wanted));
            }
        }
    }
}

/// Yes/no criterion with a "don't care" option
fn score_flag(
    tally: &mut Tally,
    preference: Option<bool>,
    value: bool,
    weights: &FlagWeights,
) -> FlagOutcome {
    tally.criteria += 1;

    match preference {
        None => {
            tally.bonus += weights.any;
            FlagOutcome::NoPreference
        }
        Some(wanted) if wanted == value => {
            tally.bonus += weights.exact;
            tally.perfect += 1;
            FlagOutcome::Match
        }
        Some(_) => FlagOutcome::Mismatch,
    }
}

/// Role: a dual-role breed satisfies any specific role but never counts as perfect
fn score_role(
    tally: &mut Tally,
    breed: &BreedRecord,
    preference: Preference<Role>,
    weights: &FlagWeights,
) {
    tally.criteria += 1;

    match preference {
        Preference::Any => {
            tally.bonus += weights.any;
            tally.reasons.push(format!("Role: {}", breed.role));
        }
        Preference::Only(_) if breed.is_dual_role() => {
            tally.bonus += weights.exact;
            tally.reasons.push(format!("Versatile role: {}", breed.role));
        }
        Preference::Only(wanted) if wanted == breed.role => {
            tally.bonus += weights.exact;
            tally.perfect += 1;
            tally.reasons.push(format!("Perfect role match: {}", breed.role));
        }
        Preference::Only(wanted) => {
            tally
                .reasons
                .push(format!("Role mismatch: {} vs {}", breed.role, wanted));
        }
    }
}

/// Low-weight criterion: flat credit whatever the outcome
fn score_minor(tally: &mut Tally, title: &str, preference: Option<bool>, value: bool, points: i32) {
    tally.criteria += 1;
    tally.bonus += points;

    let reason = match preference {
        None => format!("{}: {}", title, yes_no(value)),
        Some(wanted) if wanted == value => format!("{} match: {}", title, yes_no(value)),
        Some(_) => format!("{} mismatch: {}", title, yes_no(value)),
    };
    tally.reasons.push(reason);
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn kids_label(good_with_kids: bool) -> &'static str {
    if good_with_kids {
        "Great with kids"
    } else {
        "Adult-focused"
    }
}

fn pets_label(good_with_pets: bool) -> &'static str {
    if good_with_pets {
        "Great with pets"
    } else {
        "Single-pet focused"
    }
}
