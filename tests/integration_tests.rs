// Integration tests for PawMatch

use pawmatch::core::{calculate_breed_score, Matcher};
use pawmatch::models::{
    BreedQuery, EnergyLevel, GroomingNeeds, PreferenceVector, RankingPolicy, Role, ScoringWeights, Size,
    Trainability,
};
use pawmatch::services::Catalog;
use pretty_assertions::assert_eq;

fn load_fixture() -> Catalog {
    Catalog::from_seed_json(include_str!("fixtures/breeds.json")).expect("fixture catalog is valid")
}

fn names<'a>(matches: &'a [pawmatch::models::MatchResult<'a>]) -> Vec<&'a str> {
    matches.iter().map(|m| m.breed.name.as_str()).collect()
}

fn ideal_small_companion() -> PreferenceVector {
    PreferenceVector {
        size: Size::Small.into(),
        energy_level: EnergyLevel::Moderate.into(),
        trainability: Trainability::High.into(),
        grooming_needs: GroomingNeeds::Low.into(),
        good_with_kids: Some(true),
        good_with_pets: Some(true),
        role: Role::Companion.into(),
        senior_friendly: None,
        special_needs_ok: None,
        prioritize_adoptable: true,
    }
}

#[test]
fn test_integration_perfect_match_scenario() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();

    let result = matcher.find_matches(&ideal_small_companion(), catalog.breeds(), 10);

    // Corgi (2), Lundehund (1) and Basenji (no score) are rarely in shelters
    assert_eq!(names(&result.matches), vec!["Miniature Schnauzer", "Beagle", "Shiba Inu"]);
    let scores: Vec<u8> = result.matches.iter().map(|m| m.score).collect();
    assert_eq!(scores, vec![100, 99, 70]);

    let best = &result.matches[0];
    assert_eq!(best.match_reasons[0], "EXCELLENT MATCH!");
    assert_eq!(best.match_reasons[1], "Perfect size match: Small");
    assert_eq!(best.match_reasons.last().unwrap(), "Commonly available in shelters");

    assert_eq!(result.matches[1].match_reasons[0], "GREAT MATCH!");
    assert!(result.matches[2].match_reasons[0].starts_with("Perfect size match"));

    assert_eq!(result.total_candidates, 15);
    assert_eq!(result.shelter_eligible, 12);
    assert_eq!(result.size_eligible, 3);
}

#[test]
fn test_integration_perfect_match_credit() {
    let catalog = load_fixture();
    let schnauzer = catalog.breeds().iter().find(|b| b.name == "Miniature Schnauzer").unwrap();

    let score = calculate_breed_score(schnauzer, &ideal_small_companion(), &ScoringWeights::default());

    // Seven criteria can be perfect; senior/special-needs preferences are unset
    assert_eq!(score.perfect_matches, 7);
    assert_eq!(score.criteria_count, 9);
    assert!((score.perfect_match_ratio() - 7.0 / 9.0).abs() < 1e-9);
    assert_eq!(score.raw_score, 100);
}

#[test]
fn test_integration_major_size_mismatch_scenario() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();
    let prefs = PreferenceVector {
        size: Size::Large.into(),
        ..PreferenceVector::default()
    };

    let chihuahua = catalog.breeds().iter().find(|b| b.name == "Chihuahua").unwrap();
    let score = calculate_breed_score(chihuahua, &prefs, matcher.weights());
    assert_eq!(score.raw_score, 35);
    assert_eq!(score.reasons[0], "Major size mismatch: Toy vs Large");

    let result = matcher.find_matches(&prefs, catalog.breeds(), 10);
    assert_eq!(names(&result.matches), vec!["Labrador Retriever", "Boxer", "Rottweiler"]);
    assert!(result.matches.iter().all(|m| m.breed.size == Size::Large));
    assert!(result.matches.iter().all(|m| m.score == 70));
}

#[test]
fn test_integration_all_any_scenario() {
    let catalog = load_fixture();
    let matcher = Matcher::with_defaults();
    let prefs = PreferenceVector {
        prioritize_adoptable: false,
        ..PreferenceVector::default()
    };

    let result = matcher.find_matches(&prefs, catalog.breeds(), 10);

    assert!(result.matches.iter().all(|m| m.score == 57));
    assert_eq!(
        names(&result.matches),
        vec![
            "Labrador Retriever",
            "Boxer",
            "Chihuahua",
            "Beagle",
            "Miniature Schnauzer",
            "Rottweiler",
            "Border Collie",
            "Poodle",
            "Pug",
            "Siberian Husky",
        ]
    );
    // Shelter filter still applies without blending
    assert_eq!(result.shelter_eligible, 12);
    assert!(result
        .matches
        .iter()
        .all(|m| !m.match_reasons.iter().any(|r| r.contains("shelters"))));
}

#[test]
fn test_integration_all_any_equal_shelter_uses_tie_breaks() {
    let mut records = load_fixture().breeds().to_vec();
    for breed in &mut records {
        breed.shelter_availability_score = Some(5);
    }
    let catalog = Catalog::from_records(records).unwrap();
    let prefs = PreferenceVector {
        prioritize_adoptable: false,
        ..PreferenceVector::default()
    };

    let result = Matcher::with_defaults().find_matches(&prefs, catalog.breeds(), 10);

    // Versatility, then dual role, then name
    assert_eq!(
        names(&result.matches),
        vec![
            "Beagle",
            "Border Collie",
            "Labrador Retriever",
            "Miniature Schnauzer",
            "Pembroke Welsh Corgi",
            "Poodle",
            "Pug",
            "Siberian Husky",
            "Boxer",
            "Rottweiler",
        ]
    );
}

#[test]
fn test_integration_custom_policy() {
    let catalog = load_fixture();
    let policy = RankingPolicy {
        shelter_floor: 9,
        max_results: 2,
        ..RankingPolicy::default()
    };
    let matcher = Matcher::new(ScoringWeights::default(), policy);

    let result = matcher.find_matches(&PreferenceVector::default(), catalog.breeds(), 10);

    assert_eq!(result.matches.len(), 2);
    assert!(result.matches.iter().all(|m| m.breed.shelter_score() >= 9));
}

#[test]
fn test_integration_catalog_search() {
    let catalog = load_fixture();

    let query = BreedQuery {
        sizes: vec![Size::Small, Size::Toy],
        good_with_kids: Some(true),
        prioritize_adoptable: true,
        ..BreedQuery::default()
    };
    let found: Vec<&str> = catalog.search(&query).iter().map(|b| b.name.as_str()).collect();

    assert_eq!(found, vec!["Beagle", "Miniature Schnauzer", "Pug", "Pembroke Welsh Corgi"]);
}

#[test]
fn test_integration_seed_file_is_valid() {
    let catalog = Catalog::from_seed_json(include_str!("../data/breeds.json")).unwrap();

    assert!(catalog.len() >= 20);
    assert!(catalog.breeds().iter().any(|b| b.shelter_availability_score.is_none()));

    let result = Matcher::with_defaults().find_matches(&PreferenceVector::default(), catalog.breeds(), 10);
    assert_eq!(result.matches.len(), 10);
}
