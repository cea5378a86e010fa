use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a categorical value is not one of its legal names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} value: {value:?}")]
pub struct ParseCategoryError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    _ => Err(ParseCategoryError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

categorical!(
    /// Breed size, ordered Toy < Small < Medium < Large
    Size, "size", [Toy, Small, Medium, Large]
);

categorical!(
    /// Exercise needs, ordered Low < Moderate < High
    EnergyLevel, "energy level", [Low, Moderate, High]
);

categorical!(
    /// Ease of training, ordered Low < Medium < High
    Trainability, "trainability", [Low, Medium, High]
);

categorical!(
    /// Coat care effort, ordered Low < Medium < High
    GroomingNeeds, "grooming needs", [Low, Medium, High]
);

categorical!(
    /// Primary household role of a breed
    Role, "role", [Companion, Guardian, Both]
);

/// A categorical preference: either a specific value or `Any`
///
/// Serialized as the bare value name, with the literal string `"Any"` for
/// no preference, so `"Small"` and `"Any"` are both valid size preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference<T> {
    Any,
    Only(T),
}

impl<T> Default for Preference<T> {
    fn default() -> Self {
        Preference::Any
    }
}

impl<T: Copy> Preference<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Preference::Any => None,
            Preference::Only(v) => Some(*v),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Preference::Any)
    }
}

impl<T> From<T> for Preference<T> {
    fn from(value: T) -> Self {
        Preference::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Preference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preference::Any => f.write_str("Any"),
            Preference::Only(v) => v.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Preference<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Preference<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "Any" {
            return Ok(Preference::Any);
        }
        raw.parse().map(Preference::Only).map_err(de::Error::custom)
    }
}

/// A dog breed from the catalog
///
/// Records are read-only during matching; the pipeline only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedRecord {
    pub id: i64,
    pub name: String,
    pub size: Size,
    pub energy_level: EnergyLevel,
    pub trainability: Trainability,
    pub grooming_needs: GroomingNeeds,
    pub good_with_kids: bool,
    pub good_with_pets: bool,
    pub senior_friendly: bool,
    pub special_needs_possible: bool,
    pub role: Role,
    /// 0-10, higher means more commonly found in shelters and rescues
    #[serde(default)]
    pub shelter_availability_score: Option<u8>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_filename: Option<String>,
}

impl BreedRecord {
    /// Shelter availability, treating an undefined score as 0
    pub fn shelter_score(&self) -> u8 {
        self.shelter_availability_score.unwrap_or(0)
    }

    /// How many of kids/pets the breed gets along with (0-2)
    pub fn versatility(&self) -> u8 {
        u8::from(self.good_with_kids) + u8::from(self.good_with_pets)
    }

    pub fn is_dual_role(&self) -> bool {
        self.role == Role::Both
    }
}

/// One user's matching preferences
///
/// Omitted fields deserialize to the defaults from [`default_preferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceVector {
    pub size: Preference<Size>,
    pub energy_level: Preference<EnergyLevel>,
    pub trainability: Preference<Trainability>,
    pub grooming_needs: Preference<GroomingNeeds>,
    pub good_with_kids: Option<bool>,
    pub good_with_pets: Option<bool>,
    pub senior_friendly: Option<bool>,
    pub special_needs_ok: Option<bool>,
    pub role: Preference<Role>,
    pub prioritize_adoptable: bool,
}

impl Default for PreferenceVector {
    fn default() -> Self {
        Self {
            size: Preference::Any,
            energy_level: Preference::Any,
            trainability: Preference::Any,
            grooming_needs: Preference::Any,
            good_with_kids: None,
            good_with_pets: None,
            senior_friendly: None,
            special_needs_ok: None,
            role: Preference::Any,
            prioritize_adoptable: true,
        }
    }
}

/// Canonical starting preferences for a new matching form
pub fn default_preferences() -> PreferenceVector {
    PreferenceVector::default()
}

/// Points for an ordered criterion by tier distance between preference and breed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWeights {
    /// Credit when the preference is `Any`
    pub any: i32,
    pub exact: i32,
    /// One tier apart
    pub near: i32,
    /// Two tiers apart
    pub far: i32,
    pub far_penalty: i32,
    /// Three tiers apart (only reachable for size)
    pub opposite: i32,
    pub opposite_penalty: i32,
}

/// Points for a criterion that either matches or does not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagWeights {
    /// Credit when the user has no preference
    pub any: i32,
    pub exact: i32,
}

/// Scoring weights for the per-breed scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub base: i32,
    pub size: TierWeights,
    pub energy_level: TierWeights,
    pub good_with_kids: FlagWeights,
    pub good_with_pets: FlagWeights,
    pub trainability: TierWeights,
    pub grooming_needs: TierWeights,
    pub role: FlagWeights,
    pub senior_friendly: i32,
    pub special_needs: i32,
    pub exceptional_bonus: i32,
    pub excellent_bonus: i32,
    pub great_bonus: i32,
    /// Flat nudge for scores inside `[decent_min, decent_max)`
    pub decent_nudge: i32,
    pub decent_min: i32,
    pub decent_max: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 35,
            size: TierWeights {
                any: 2,
                exact: 15,
                near: 5,
                far: 2,
                far_penalty: 5,
                opposite: 0,
                opposite_penalty: 15,
            },
            energy_level: TierWeights {
                any: 3,
                exact: 10,
                near: 6,
                far: 0,
                far_penalty: 0,
                opposite: 0,
                opposite_penalty: 0,
            },
            good_with_kids: FlagWeights { any: 2, exact: 8 },
            good_with_pets: FlagWeights { any: 2, exact: 8 },
            trainability: TierWeights {
                any: 2,
                exact: 6,
                near: 4,
                far: 0,
                far_penalty: 0,
                opposite: 0,
                opposite_penalty: 0,
            },
            grooming_needs: TierWeights {
                any: 2,
                exact: 15,
                near: 5,
                far: 2,
                far_penalty: 12,
                opposite: 0,
                opposite_penalty: 0,
            },
            role: FlagWeights { any: 2, exact: 3 },
            senior_friendly: 1,
            special_needs: 1,
            exceptional_bonus: 10,
            excellent_bonus: 6,
            great_bonus: 3,
            decent_nudge: 5,
            decent_min: 40,
            decent_max: 70,
        }
    }
}

/// Thresholds for shelter blending, filtering, and result assembly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingPolicy {
    /// Breeds below this shelter score never appear in results
    pub shelter_floor: u8,
    /// Matches with a raw score below this are dropped
    pub quality_floor: u8,
    pub max_results: usize,
    pub shelter_boost_per_point: f64,
    pub shelter_boost_cap: f64,
    pub common_shelter_score: u8,
    pub frequent_shelter_score: u8,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            shelter_floor: 3,
            quality_floor: 40,
            max_results: 10,
            shelter_boost_per_point: 0.15,
            shelter_boost_cap: 1.5,
            common_shelter_score: 8,
            frequent_shelter_score: 6,
        }
    }
}

/// A breed moving through the ranking pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBreed<'a> {
    pub breed: &'a BreedRecord,
    pub raw_score: u8,
    pub combined_score: f64,
    pub reasons: Vec<String>,
}

/// User-facing match: the breed, its displayed percentage, and why
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub breed: &'a BreedRecord,
    pub score: u8,
    pub match_reasons: Vec<String>,
}

/// Catalog search filter
///
/// Empty sets and `None` values place no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreedQuery {
    pub sizes: Vec<Size>,
    pub energy_levels: Vec<EnergyLevel>,
    pub trainability: Vec<Trainability>,
    pub grooming_needs: Vec<GroomingNeeds>,
    pub good_with_kids: Option<bool>,
    pub good_with_pets: Option<bool>,
    pub role: Option<Role>,
    pub senior_friendly: Option<bool>,
    pub special_needs_possible: Option<bool>,
    pub prioritize_adoptable: bool,
}
