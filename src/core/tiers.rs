use crate::models::{EnergyLevel, GroomingNeeds, Size, Trainability};

/// A categorical attribute with a fixed total order
///
/// Shared by the scorer and by anything else that needs to know how far
/// apart two values of the same attribute are.
pub trait Tiered: Copy + Eq {
    /// Largest possible distance between two values
    const MAX_DISTANCE: u8;

    /// Zero-based position in the attribute's order
    fn rank(self) -> u8;
}

impl Tiered for Size {
    const MAX_DISTANCE: u8 = 3;

    #[inline]
    fn rank(self) -> u8 {
        match self {
            Size::Toy => 0,
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 3,
        }
    }
}

impl Tiered for EnergyLevel {
    const MAX_DISTANCE: u8 = 2;

    #[inline]
    fn rank(self) -> u8 {
        match self {
            EnergyLevel::Low => 0,
            EnergyLevel::Moderate => 1,
            EnergyLevel::High => 2,
        }
    }
}

impl Tiered for Trainability {
    const MAX_DISTANCE: u8 = 2;

    #[inline]
    fn rank(self) -> u8 {
        match self {
            Trainability::Low => 0,
            Trainability::Medium => 1,
            Trainability::High => 2,
        }
    }
}

impl Tiered for GroomingNeeds {
    const MAX_DISTANCE: u8 = 2;

    #[inline]
    fn rank(self) -> u8 {
        match self {
            GroomingNeeds::Low => 0,
            GroomingNeeds::Medium => 1,
            GroomingNeeds::High => 2,
        }
    }
}

/// Number of tiers separating two values of the same attribute
#[inline]
pub fn tier_distance<T: Tiered>(a: T, b: T) -> u8 {
    a.rank().abs_diff(b.rank())
}
