// Criterion benchmarks for PawMatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawmatch::core::{calculate_breed_score, rank, Matcher};
use pawmatch::models::{
    BreedRecord, EnergyLevel, GroomingNeeds, PreferenceVector, Role, ScoringWeights, Size, Trainability,
};

fn create_breed(id: usize) -> BreedRecord {
    BreedRecord {
        id: id as i64,
        name: format!("Breed {:04}", id),
        size: Size::ALL[id % Size::ALL.len()],
        energy_level: EnergyLevel::ALL[id % EnergyLevel::ALL.len()],
        trainability: Trainability::ALL[(id / 3) % Trainability::ALL.len()],
        grooming_needs: GroomingNeeds::ALL[(id / 2) % GroomingNeeds::ALL.len()],
        good_with_kids: id % 2 == 0,
        good_with_pets: id % 3 != 0,
        senior_friendly: id % 4 == 0,
        special_needs_possible: id % 5 == 0,
        role: Role::ALL[id % Role::ALL.len()],
        shelter_availability_score: if id % 11 == 0 { None } else { Some((id % 11) as u8) },
        description: String::new(),
        image_filename: None,
    }
}

fn create_preferences() -> PreferenceVector {
    PreferenceVector {
        size: Size::Medium.into(),
        energy_level: EnergyLevel::Moderate.into(),
        trainability: Trainability::High.into(),
        grooming_needs: GroomingNeeds::Low.into(),
        good_with_kids: Some(true),
        good_with_pets: None,
        role: Role::Companion.into(),
        ..PreferenceVector::default()
    }
}

fn bench_scoring(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let preferences = create_preferences();
    let breed = create_breed(6);

    c.bench_function("calculate_breed_score", |b| {
        b.iter(|| calculate_breed_score(black_box(&breed), black_box(&preferences), black_box(&weights)))
    });

    c.bench_function("calculate_breed_score_all_any", |b| {
        let any = PreferenceVector::default();
        b.iter(|| calculate_breed_score(black_box(&breed), black_box(&any), black_box(&weights)))
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_defaults();
    let preferences = create_preferences();
    let catalog: Vec<BreedRecord> = (0..1000).map(create_breed).collect();

    c.bench_function("rank_1000", |b| {
        b.iter(|| rank(matcher.score_catalog(black_box(&preferences), black_box(&catalog))))
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_matches");
    let matcher = Matcher::with_defaults();
    let preferences = create_preferences();

    for size in [10, 100, 500, 1000].iter() {
        let catalog: Vec<BreedRecord> = (0..*size).map(create_breed).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                matcher.find_matches(black_box(&preferences), black_box(catalog), black_box(10))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scoring, bench_ranking, bench_find_matches);
criterion_main!(benches);
