//! Core type definitions used throughout the codebase

use num_rational::Ratio;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::MeerasError;

/// Exact fraction of the estate.
///
/// Shares are kept as reduced `numerator/denominator` pairs for the whole
/// calculation and only converted to `f64` for display.
pub type Share = Ratio<i64>;

/// Build a share from a numerator and denominator.
pub fn share(numer: i64, denom: i64) -> Share {
    Ratio::new(numer, denom)
}

/// The empty share.
pub fn nothing() -> Share {
    Share::zero()
}

/// The whole estate.
pub fn whole() -> Share {
    Share::one()
}

/// Lossy conversion used for percentages and tolerance checks.
pub fn share_to_f64(value: &Share) -> f64 {
    *value.numer() as f64 / *value.denom() as f64
}

/// Gender of the deceased
///
/// Decides which spouse category can inherit: the husband only when the
/// deceased is female, wives only when the deceased is male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeceasedGender {
    Male,
    Female,
}

impl fmt::Display for DeceasedGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeceasedGender::Male => write!(f, "MALE"),
            DeceasedGender::Female => write!(f, "FEMALE"),
        }
    }
}

impl FromStr for DeceasedGender {
    type Err = MeerasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(DeceasedGender::Male),
            "female" | "f" => Ok(DeceasedGender::Female),
            _ => Err(MeerasError::UnknownGender(s.to_string())),
        }
    }
}
