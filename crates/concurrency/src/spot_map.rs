//! Occupancy map for a linear lot
//!
//! `SpotMap` is the single source of truth for which spots are held. It is not
//! synchronized on its own: the owning [`Lot`](crate::Lot) keeps it behind a
//! mutex, and the mutating operations are crate-private so that every commit
//! and release goes through the lot's critical section.
//!
//! Searches are first-fit in ascending index order and O(capacity).

use lotkeeper_core::{SpotRequirement, SpotState};

/// Fixed-length occupancy array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotMap {
    spots: Vec<bool>,
    occupied: usize,
}

impl SpotMap {
    /// Create an empty map of `capacity` spots
    pub fn new(capacity: usize) -> Self {
        SpotMap {
            spots: vec![false; capacity],
            occupied: 0,
        }
    }

    /// Number of spots
    pub fn capacity(&self) -> usize {
        self.spots.len()
    }

    /// Number of held spots
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Number of free spots
    pub fn free_count(&self) -> usize {
        self.spots.len() - self.occupied
    }

    /// Whether spot `index` is held; `false` when out of range
    pub fn is_occupied(&self, index: usize) -> bool {
        self.spots.get(index).copied().unwrap_or(false)
    }

    /// Symbolic state of every spot, in index order
    pub fn states(&self) -> Vec<SpotState> {
        self.spots.iter().copied().map(SpotState::from).collect()
    }

    /// First free spot, scanning from index 0
    pub fn find_single(&self) -> Option<usize> {
        self.spots.iter().position(|&held| !held)
    }

    /// First `i` such that spots `i` and `i + 1` are both free
    ///
    /// Always `None` for lots with fewer than two spots.
    pub fn find_adjacent_pair(&self) -> Option<usize> {
        self.spots.windows(2).position(|pair| !pair[0] && !pair[1])
    }

    /// First-fit search for the given requirement
    pub fn find(&self, requirement: SpotRequirement) -> Option<usize> {
        match requirement {
            SpotRequirement::Single => self.find_single(),
            SpotRequirement::Adjacent => self.find_adjacent_pair(),
        }
    }

    /// Whether every spot in the span from `start` is in state `held`
    fn span_is(&self, requirement: SpotRequirement, start: usize, held: bool) -> bool {
        requirement.is_valid_start(start, self.capacity())
            && self.spots[requirement.span(start)]
                .iter()
                .all(|&spot| spot == held)
    }

    /// Mark spot `index` held
    pub(crate) fn commit_single(&mut self, index: usize) -> bool {
        self.commit(SpotRequirement::Single, index)
    }

    /// Mark spots `index` and `index + 1` held as one unit
    pub(crate) fn commit_pair(&mut self, index: usize) -> bool {
        self.commit(SpotRequirement::Adjacent, index)
    }

    /// Clear spot `index`
    pub(crate) fn release_single(&mut self, index: usize) -> bool {
        self.release(SpotRequirement::Single, index)
    }

    /// Clear spots `index` and `index + 1` as one unit
    pub(crate) fn release_pair(&mut self, index: usize) -> bool {
        self.release(SpotRequirement::Adjacent, index)
    }

    /// Mark the span starting at `start` held.
    ///
    /// All-or-nothing: returns `false` and changes nothing if the span is out
    /// of range or any spot in it is already held.
    fn commit(&mut self, requirement: SpotRequirement, start: usize) -> bool {
        if !self.span_is(requirement, start, false) {
            return false;
        }
        self.spots[requirement.span(start)].fill(true);
        self.occupied += requirement.spots_needed();
        true
    }

    /// Clear the span starting at `start`.
    ///
    /// All-or-nothing: returns `false` and changes nothing unless every spot
    /// in the span is currently held.
    fn release(&mut self, requirement: SpotRequirement, start: usize) -> bool {
        if !self.span_is(requirement, start, true) {
            return false;
        }
        self.spots[requirement.span(start)].fill(false);
        self.occupied -= requirement.spots_needed();
        true
    }
}
