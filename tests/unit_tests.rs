// Property tests for the PawMatch scoring and ranking pipeline

use pawmatch::core::{calculate_breed_score, rank, tier_distance, Matcher};
use pawmatch::models::{
    BreedRecord, EnergyLevel, GroomingNeeds, Preference, PreferenceVector, Role, ScoringWeights, Size,
    Trainability,
};
use pawmatch::services::Catalog;

fn load_fixture() -> Catalog {
    Catalog::from_seed_json(include_str!("fixtures/breeds.json")).expect("fixture catalog is valid")
}

fn with_any<T: Copy>(values: &[T]) -> Vec<Preference<T>> {
    std::iter::once(Preference::Any)
        .chain(values.iter().copied().map(Preference::Only))
        .collect()
}

/// A spread of preference vectors covering every size and grooming level
fn preference_grid() -> Vec<PreferenceVector> {
    let mut grid = Vec::new();
    for size in with_any(Size::ALL) {
        for energy_level in with_any(EnergyLevel::ALL) {
            for grooming_needs in with_any(GroomingNeeds::ALL) {
                for good_with_kids in [None, Some(true), Some(false)] {
                    for prioritize_adoptable in [true, false] {
                        grid.push(PreferenceVector {
                            size,
                            energy_level,
                            grooming_needs,
                            good_with_kids,
                            trainability: Trainability::High.into(),
                            role: if good_with_kids == Some(false) {
                                Role::Guardian.into()
                            } else {
                                Preference::Any
                            },
                            prioritize_adoptable,
                            ..PreferenceVector::default()
                        });
                    }
                }
            }
        }
    }
    grid
}

#[test]
fn test_score_is_deterministic() {
    let catalog = load_fixture();
    let weights = ScoringWeights::default();

    for prefs in preference_grid().iter().step_by(7) {
        for breed in catalog.breeds() {
            let first = calculate_breed_score(breed, prefs, &weights);
            let second = calculate_breed_score(breed, prefs, &weights);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_scores_stay_in_range() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();

    for prefs in preference_grid() {
        for scored in matcher.score_catalog(&prefs, catalog.breeds()) {
            assert!(scored.raw_score <= 100);
        }

        let blended = pawmatch::core::blend(
            matcher.score_catalog(&prefs, catalog.breeds()),
            prefs.prioritize_adoptable,
            matcher.policy(),
        );
        for scored in blended {
            assert!((0.0..=100.0).contains(&scored.combined_score));
        }
    }
}

#[test]
fn test_any_preference_never_scores_below_a_mismatch() {
    // Adjacent tiers earn partial credit above the Any credit, so only
    // values two or more tiers away count as a mismatch here
    let catalog = load_fixture();
    let weights = ScoringWeights::default();
    let base = PreferenceVector::default();

    for breed in catalog.breeds() {
        let any_score = calculate_breed_score(breed, &base, &weights).raw_score;

        for &size in Size::ALL.iter().filter(|&&s| tier_distance(s, breed.size) >= 2) {
            let prefs = PreferenceVector { size: size.into(), ..base };
            assert!(any_score >= calculate_breed_score(breed, &prefs, &weights).raw_score);
        }
        for &energy in EnergyLevel::ALL.iter().filter(|&&e| tier_distance(e, breed.energy_level) >= 2) {
            let prefs = PreferenceVector { energy_level: energy.into(), ..base };
            assert!(any_score >= calculate_breed_score(breed, &prefs, &weights).raw_score);
        }
        for &level in Trainability::ALL.iter().filter(|&&t| tier_distance(t, breed.trainability) >= 2) {
            let prefs = PreferenceVector { trainability: level.into(), ..base };
            assert!(any_score >= calculate_breed_score(breed, &prefs, &weights).raw_score);
        }
        for &needs in GroomingNeeds::ALL.iter().filter(|&&g| tier_distance(g, breed.grooming_needs) >= 2) {
            let prefs = PreferenceVector { grooming_needs: needs.into(), ..base };
            assert!(any_score >= calculate_breed_score(breed, &prefs, &weights).raw_score);
        }

        let mismatched_kids = PreferenceVector { good_with_kids: Some(!breed.good_with_kids), ..base };
        assert!(any_score >= calculate_breed_score(breed, &mismatched_kids, &weights).raw_score);

        let mismatched_pets = PreferenceVector { good_with_pets: Some(!breed.good_with_pets), ..base };
        assert!(any_score >= calculate_breed_score(breed, &mismatched_pets, &weights).raw_score);
    }
}

#[test]
fn test_exact_size_earns_perfect_credit() {
    let catalog = load_fixture();
    let weights = ScoringWeights::default();

    for breed in catalog.breeds() {
        let any = calculate_breed_score(breed, &PreferenceVector::default(), &weights);
        let exact = calculate_breed_score(
            breed,
            &PreferenceVector {
                size: breed.size.into(),
                ..PreferenceVector::default()
            },
            &weights,
        );

        assert_eq!(exact.perfect_matches, any.perfect_matches + 1);
        assert!(exact
            .reasons
            .iter()
            .any(|r| r == &format!("Perfect size match: {}", breed.size)));
    }
}

#[test]
fn test_size_is_a_hard_filter() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();

    for prefs in preference_grid() {
        let Some(size) = prefs.size.value() else {
            continue;
        };
        let result = matcher.find_matches(&prefs, catalog.breeds(), 10);
        assert!(result.matches.iter().all(|m| m.breed.size == size));
    }
}

#[test]
fn test_rarely_sheltered_breeds_never_appear() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();

    for prefs in preference_grid() {
        let result = matcher.find_matches(&prefs, catalog.breeds(), 10);
        for m in &result.matches {
            assert!(m.breed.shelter_availability_score.is_some_and(|s| s >= 3));
        }
    }
}

#[test]
fn test_quality_floor_and_bounded_output() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();

    for prefs in preference_grid() {
        for limit in [1, 5, 10, 50] {
            let result = matcher.find_matches(&prefs, catalog.breeds(), limit);
            assert!(result.matches.len() <= 10);
            assert!(result.matches.len() <= limit);
            assert!(result.matches.iter().all(|m| m.score >= 40));
        }
    }
}

#[test]
fn test_ranking_ignores_catalog_order() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();

    let forward: Vec<BreedRecord> = catalog.breeds().to_vec();
    let mut backward = forward.clone();
    backward.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(6);

    for prefs in preference_grid().iter().step_by(5) {
        let expected: Vec<(i64, u8)> = matcher
            .find_matches(prefs, &forward, 10)
            .matches
            .iter()
            .map(|m| (m.breed.id, m.score))
            .collect();

        for shuffled in [&backward, &rotated] {
            let actual: Vec<(i64, u8)> = matcher
                .find_matches(prefs, shuffled, 10)
                .matches
                .iter()
                .map(|m| (m.breed.id, m.score))
                .collect();
            assert_eq!(actual, expected);
        }
    }
}

#[test]
fn test_rank_is_total_over_scored_catalog() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();
    let prefs = PreferenceVector::default();

    let ranked = rank(matcher.score_catalog(&prefs, catalog.breeds()));
    let mut reranked = matcher.score_catalog(&prefs, catalog.breeds());
    reranked.reverse();
    let reranked = rank(reranked);

    let ids = |v: &[pawmatch::models::ScoredBreed<'_>]| v.iter().map(|m| m.breed.id).collect::<Vec<_>>();
    assert_eq!(ids(&ranked), ids(&reranked));
    assert_eq!(ranked.len(), catalog.len());
}

#[test]
fn test_tier_distance_is_symmetric() {
    for &a in Size::ALL {
        for &b in Size::ALL {
            assert_eq!(tier_distance(a, b), tier_distance(b, a));
        }
        assert_eq!(tier_distance(a, a), 0);
    }
    assert_eq!(tier_distance(Size::Toy, Size::Large), 3);
    assert_eq!(tier_distance(GroomingNeeds::Low, GroomingNeeds::High), 2);
}
