//! Target word count for a piece of content

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Half-width of the range built around a single target (e.g. 1000 → 800-1200).
pub const TARGET_SPREAD: u32 = 200;
/// Smallest target the form offers.
pub const MIN_TARGET: u32 = 300;
/// Largest target the form offers.
pub const MAX_TARGET: u32 = 3000;
/// Step between form targets.
pub const TARGET_STEP: u32 = 100;

/// Inclusive word count range (Value Object)
///
/// Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WordCount {
    min: u32,
    max: u32,
}

impl WordCount {
    pub fn range(min: u32, max: u32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidWordCount(format!("{}-{}", min, max)));
        }
        Ok(Self { min, max })
    }

    /// Build a range around a single target, as the form slider does.
    pub fn around(target: u32) -> Self {
        Self {
            min: target.saturating_sub(TARGET_SPREAD),
            max: target.saturating_add(TARGET_SPREAD),
        }
    }

    /// Range for a slider value, clamped to the offered targets and snapped to the step
    pub fn from_slider(target: u32) -> Self {
        let clamped = target.clamp(MIN_TARGET, MAX_TARGET);
        let snapped = (clamped + TARGET_STEP / 2) / TARGET_STEP * TARGET_STEP;
        Self::around(snapped)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Midpoint of the range, used for simulated output and output token budgets
    pub fn target(&self) -> u32 {
        self.min + (self.max - self.min) / 2
    }
}

impl Default for WordCount {
    fn default() -> Self {
        Self { min: 800, max: 1000 }
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

impl std::str::FromStr for WordCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidWordCount(s.to_string());
        let trimmed = s.trim();

        match trimmed.split_once('-') {
            Some((lo, hi)) => {
                let min = lo.trim().parse::<u32>().map_err(|_| invalid())?;
                let max = hi.trim().parse::<u32>().map_err(|_| invalid())?;
                WordCount::range(min, max)
            }
            None => {
                let target = trimmed.parse::<u32>().map_err(|_| invalid())?;
                if target == 0 {
                    return Err(invalid());
                }
                Ok(WordCount::around(target))
            }
        }
    }
}

impl TryFrom<String> for WordCount {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WordCount> for String {
    fn from(value: WordCount) -> Self {
        value.to_string()
    }
}
