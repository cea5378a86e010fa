use crate::core::filters::matches_query;
use crate::models::{BreedQuery, BreedRecord, EnergyLevel, GroomingNeeds, Role, Size, Trainability};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Highest legal shelter availability score
pub const MAX_SHELTER_SCORE: u8 = 10;

/// Errors that can occur when loading or validating a breed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Duplicate breed id: {0}")]
    DuplicateId(i64),

    #[error("Duplicate breed name: {0}")]
    DuplicateName(String),

    #[error("Shelter score {score} out of range for {name} (expected 0-10)")]
    ShelterScoreOutOfRange { name: String, score: u8 },
}

/// One breed as it appears in the seed file
///
/// Seed files use snake_case keys, `breed` for the name, and `1`/`0` or
/// booleans for the yes/no attributes.
#[derive(Debug, Clone, Deserialize)]
struct SeedBreed {
    #[serde(default)]
    id: Option<i64>,
    breed: String,
    size: Size,
    energy_level: EnergyLevel,
    #[serde(deserialize_with = "flag")]
    good_with_kids: bool,
    #[serde(deserialize_with = "flag")]
    good_with_pets: bool,
    trainability: Trainability,
    grooming_needs: GroomingNeeds,
    companion_or_guardian: Role,
    #[serde(deserialize_with = "flag")]
    senior_friendly: bool,
    #[serde(deserialize_with = "flag")]
    special_needs_possible: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_filename: Option<String>,
    #[serde(default)]
    shelter_availability_score: Option<u8>,
}

impl SeedBreed {
    fn into_record(self, fallback_id: i64) -> BreedRecord {
        BreedRecord {
            id: self.id.unwrap_or(fallback_id),
            name: self.breed,
            size: self.size,
            energy_level: self.energy_level,
            trainability: self.trainability,
            grooming_needs: self.grooming_needs,
            good_with_kids: self.good_with_kids,
            good_with_pets: self.good_with_pets,
            senior_friendly: self.senior_friendly,
            special_needs_possible: self.special_needs_possible,
            role: self.companion_or_guardian,
            shelter_availability_score: self.shelter_availability_score,
            description: self.description,
            image_filename: self.image_filename,
        }
    }
}

/// Accept `true`/`false` as well as `1`/`0`
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

fn validate(breeds: &[BreedRecord]) -> Result<(), CatalogError> {
    let mut ids = HashSet::with_capacity(breeds.len());
    let mut names = HashSet::with_capacity(breeds.len());

    for breed in breeds {
        if !ids.insert(breed.id) {
            return Err(CatalogError::DuplicateId(breed.id));
        }
        if !names.insert(breed.name.as_str()) {
            return Err(CatalogError::DuplicateName(breed.name.clone()));
        }
        if let Some(score) = breed.shelter_availability_score {
            if score > MAX_SHELTER_SCORE {
                return Err(CatalogError::ShelterScoreOutOfRange {
                    name: breed.name.clone(),
                    score,
                });
            }
        }
    }

    Ok(())
}

/// Read-only snapshot of the breed catalog
///
/// Breeds are kept sorted by name. Matching borrows from the snapshot and
/// never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    breeds: Vec<BreedRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids/names and bad shelter scores
    pub fn from_records(mut breeds: Vec<BreedRecord>) -> Result<Self, CatalogError> {
        validate(&breeds)?;
        breeds.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { breeds })
    }

    /// Parse a seed file's JSON array
    ///
    /// Records without an `id` are numbered from 1 in file order.
    pub fn from_seed_json(json: &str) -> Result<Self, CatalogError> {
        let seeds: Vec<SeedBreed> = serde_json::from_str(json)?;
        let records = seeds
            .into_iter()
            .zip(1..)
            .map(|(seed, fallback_id)| seed.into_record(fallback_id))
            .collect();

        let catalog = Self::from_records(records)?;
        tracing::info!("Parsed {} breeds from seed data", catalog.len());
        Ok(catalog)
    }

    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_seed_json(&json)
    }

    pub fn breeds(&self) -> &[BreedRecord] {
        &self.breeds
    }

    pub fn get(&self, id: i64) -> Option<&BreedRecord> {
        self.breeds.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Breeds matching a search query
    ///
    /// Ordered by shelter availability (then name) when adoptability is
    /// prioritized, by name otherwise.
    pub fn search(&self, query: &BreedQuery) -> Vec<&BreedRecord> {
        let mut found: Vec<&BreedRecord> = self
            .breeds
            .iter()
            .filter(|breed| matches_query(breed, query))
            .collect();

        if query.prioritize_adoptable {
            found.sort_by(|a, b| {
                b.shelter_score()
                    .cmp(&a.shelter_score())
                    .then_with(|| a.name.cmp(&b.name))
            });
        }

        found
    }
}
