use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::types::{Payout, U256};

/// Prize outcome of a single ticket, ordered by payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
pub enum PrizeTier {
    None,
    Fifth,
    Fourth,
    Third,
    Second,
    First,
}

impl PrizeTier {
    pub const ALL: [PrizeTier; 6] = [
        PrizeTier::None,
        PrizeTier::Fifth,
        PrizeTier::Fourth,
        PrizeTier::Third,
        PrizeTier::Second,
        PrizeTier::First,
    ];

    /// Tiers that pay out, lowest prize first.
    pub const WINNING: [PrizeTier; 5] = [
        PrizeTier::Fifth,
        PrizeTier::Fourth,
        PrizeTier::Third,
        PrizeTier::Second,
        PrizeTier::First,
    ];

    /// Maps a match count and bonus match to a tier. Six matches ignore the bonus,
    /// and the bonus only separates the five-match tiers.
    pub fn from_match(match_count: usize, has_bonus: bool) -> PrizeTier {
        match match_count {
            6 => PrizeTier::First,
            5 if has_bonus => PrizeTier::Second,
            5 => PrizeTier::Third,
            4 => PrizeTier::Fourth,
            3 => PrizeTier::Fifth,
            _ => PrizeTier::None,
        }
    }

    pub fn payout(&self) -> Payout {
        match self {
            PrizeTier::None => 0,
            PrizeTier::Fifth => 5_000,
            PrizeTier::Fourth => 50_000,
            PrizeTier::Third => 1_500_000,
            PrizeTier::Second => 30_000_000,
            PrizeTier::First => 2_000_000_000,
        }
    }

    pub fn required_matches(&self) -> usize {
        match self {
            PrizeTier::None => 0,
            PrizeTier::Fifth => 3,
            PrizeTier::Fourth => 4,
            PrizeTier::Third | PrizeTier::Second => 5,
            PrizeTier::First => 6,
        }
    }

    pub fn requires_bonus(&self) -> bool {
        *self == PrizeTier::Second
    }

    /// Position of the tier inside `ALL`.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Unrounded rational total payout / purchase amount. The denominator is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutRate {
    numerator: Payout,
    denominator: Payout,
}

impl PayoutRate {
    pub fn new(numerator: Payout, denominator: Payout) -> Result<Self, ValidationError> {
        if denominator == 0 {
            return Err(ValidationError::DivisionUndefined);
        }

        Ok(Self { numerator, denominator })
    }

    pub fn numerator(&self) -> Payout {
        self.numerator
    }

    pub fn denominator(&self) -> Payout {
        self.denominator
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn percent(&self) -> f64 {
        self.as_f64() * 100.0
    }

    /// Rate in hundredths of a percent, rounded half up and saturated at `u128::MAX`.
    pub fn basis_points(&self) -> Payout {
        let numerator = U256::from(self.numerator) * U256::from(20_000u32) + U256::from(self.denominator);
        let result = numerator / (U256::from(self.denominator) * U256::from(2u32));
        return result.min(U256::from(Payout::MAX)).as_u128();
    }
}
