//! Comparable race scores

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A totally ordered score with an integer value
pub trait Score: Ord {
    fn value(&self) -> i64;
}

/// Score of a race, ordered by its value alone
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RacingScore {
    pub value: i64,
}

impl RacingScore {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// Score for a top speed, rounded to the nearest integer
    ///
    /// Non-finite speeds score zero.
    pub fn from_speed(speed: f64) -> Self {
        if speed.is_finite() {
            Self::new(speed.round() as i64)
        } else {
            Self::new(0)
        }
    }
}

impl Score for RacingScore {
    fn value(&self) -> i64 {
        self.value
    }
}

impl PartialEq for RacingScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RacingScore {}

impl PartialOrd for RacingScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RacingScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl From<i64> for RacingScore {
    fn from(value: i64) -> Self {
        RacingScore::new(value)
    }
}
