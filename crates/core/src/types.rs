//! Core types for lotkeeper
//!
//! - `SpotRequirement`: how much contiguous space a vehicle kind needs
//! - `SpotState`: symbolic state of a single spot

use crate::error::{ReserveError, ReserveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Space requirement of a vehicle kind
///
/// The set of vehicle kinds is closed, so the strategy is an enum rather than
/// a trait object. Everything kind-specific about allocation lives here:
/// how many spots are needed and which start indices are in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotRequirement {
    /// One spot (car)
    Single,
    /// Two adjacent spots `i` and `i + 1` (truck)
    Adjacent,
}

impl SpotRequirement {
    /// All vehicle kinds
    pub const ALL: [SpotRequirement; 2] = [SpotRequirement::Single, SpotRequirement::Adjacent];

    /// Number of contiguous spots occupied by one reservation of this kind
    pub const fn spots_needed(self) -> usize {
        match self {
            SpotRequirement::Single => 1,
            SpotRequirement::Adjacent => 2,
        }
    }

    /// Highest valid start index in a lot of `capacity` spots
    ///
    /// `None` when the lot is too small to ever fit this kind.
    pub const fn max_start(self, capacity: usize) -> Option<usize> {
        capacity.checked_sub(self.spots_needed())
    }

    /// Whether `index` is a valid start for this kind
    pub const fn is_valid_start(self, index: usize, capacity: usize) -> bool {
        match self.max_start(capacity) {
            Some(max) => index <= max,
            None => false,
        }
    }

    /// Validate a start index against the lot capacity
    ///
    /// For `Adjacent` the last spot is never a valid start: the range is
    /// `0..=capacity - 2`.
    pub fn validate_start(self, index: usize, capacity: usize) -> ReserveResult<()> {
        if self.is_valid_start(index, capacity) {
            Ok(())
        } else {
            Err(ReserveError::InvalidIndex {
                index,
                requirement: self,
                capacity,
            })
        }
    }

    /// Spot indices covered by a reservation starting at `start`
    pub const fn span(self, start: usize) -> Range<usize> {
        start..start + self.spots_needed()
    }

    /// Lowercase name used in logs and errors
    pub const fn as_str(self) -> &'static str {
        match self {
            SpotRequirement::Single => "single",
            SpotRequirement::Adjacent => "adjacent",
        }
    }
}

impl fmt::Display for SpotRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic state of one spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotState {
    /// Not held by any reservation
    Free,
    /// Held by some reservation
    Occupied,
}

impl SpotState {
    /// Single-character rendering: `O` for free, `X` for occupied
    pub const fn symbol(self) -> char {
        match self {
            SpotState::Free => 'O',
            SpotState::Occupied => 'X',
        }
    }

    /// Whether the spot is held
    pub const fn is_occupied(self) -> bool {
        matches!(self, SpotState::Occupied)
    }
}

impl From<bool> for SpotState {
    fn from(occupied: bool) -> Self {
        if occupied {
            SpotState::Occupied
        } else {
            SpotState::Free
        }
    }
}

impl fmt::Display for SpotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
