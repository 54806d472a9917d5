//! Point-in-time view of a lot
//!
//! A `LotSnapshot` is copied out of the lot while its lock is held, so the
//! counts and per-spot states always describe the same instant. It owns its
//! data and never observes later mutations.

use crate::spot_map::SpotMap;
use lotkeeper_core::SpotState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability report for one lot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSnapshot {
    /// Total number of spots
    pub capacity: usize,
    /// Number of held spots
    pub occupied: usize,
    /// Number of free spots
    pub free: usize,
    /// State of every spot, in index order
    pub spots: Vec<SpotState>,
}

impl LotSnapshot {
    pub(crate) fn capture(map: &SpotMap) -> Self {
        LotSnapshot {
            capacity: map.capacity(),
            occupied: map.occupied_count(),
            free: map.free_count(),
            spots: map.states(),
        }
    }

    /// State of spot `index`, or `None` when out of range
    pub fn spot(&self, index: usize) -> Option<SpotState> {
        self.spots.get(index).copied()
    }

    /// Indices of held spots, ascending
    pub fn occupied_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.spots
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_occupied())
            .map(|(i, _)| i)
    }

    /// Whether every spot is held
    pub fn is_full(&self) -> bool {
        self.free == 0
    }
}

/// Renders the spot states separated by spaces, e.g. `X O X O O`.
impl fmt::Display for LotSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.spots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}
