//! Reservation handles
//!
//! A `Reservation` is one vehicle's claim on a lot. It records which span, if
//! any, it currently holds and enforces that it never holds two at once.
//!
//! ## Lifecycle
//!
//! ```text
//! Unheld --request_spot()--> Held(start) --yield_spot(start)--> Unheld
//! ```
//!
//! A handle may cycle through this any number of times. Dropping a held handle
//! releases its span.
//!
//! ## Sharing
//!
//! One handle belongs to one caller. Mutating methods take `&mut self`, so
//! sharing a handle across threads requires the caller's own synchronization
//! (for example `parking_lot::Mutex<Reservation>`). The lot itself is safe to
//! share freely.

use crate::lot::Lot;
use lotkeeper_core::{ReserveError, ReserveResult, SpotRequirement};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// One vehicle's claim on a lot
#[derive(Debug)]
pub struct Reservation {
    /// Lot the spots are claimed from
    lot: Arc<Lot>,

    /// Vehicle kind; selects search strategy and index validation
    requirement: SpotRequirement,

    /// Start index of the held span, `None` while unheld
    held: Option<usize>,
}

impl Reservation {
    /// Create an unheld reservation against `lot`
    pub fn new(lot: Arc<Lot>, requirement: SpotRequirement) -> Self {
        Reservation {
            lot,
            requirement,
            held: None,
        }
    }

    /// Vehicle kind of this reservation
    pub fn requirement(&self) -> SpotRequirement {
        self.requirement
    }

    /// Lot this reservation draws from
    pub fn lot(&self) -> &Arc<Lot> {
        &self.lot
    }

    /// Start index of the held span
    pub fn held_index(&self) -> Option<usize> {
        self.held
    }

    /// Every spot index covered by the held span
    pub fn held_spots(&self) -> Option<Range<usize>> {
        self.held.map(|start| self.requirement.span(start))
    }

    /// Whether a span is currently held
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Claim the first span that fits this vehicle kind
    ///
    /// # Errors
    ///
    /// - `AlreadyHeld` if this handle already holds a span; nothing changes
    /// - `NoCapacity` if no span fits right now; the handle stays unheld
    pub fn request_spot(&mut self) -> ReserveResult<usize> {
        if let Some(index) = self.held {
            tracing::debug!(
                lot = self.lot.label(),
                index,
                requirement = %self.requirement,
                "request rejected: already held"
            );
            return Err(ReserveError::AlreadyHeld { index });
        }

        let start = self.lot.try_reserve(self.requirement)?;
        self.held = Some(start);
        Ok(start)
    }

    /// Give back the span starting at `index`
    ///
    /// Checks run in this order and the first failure wins:
    ///
    /// 1. `InvalidIndex` unless `index` is a valid start for this kind
    ///    (`0..capacity` for single, `0..capacity - 1` for adjacent)
    /// 2. `NotHeld` if this handle holds nothing
    /// 3. `IndexMismatch` if `index` is not the held start
    ///
    /// On any of these errors the lot and the handle are unchanged.
    /// `NotOccupied` means the lot no longer shows the held span as
    /// occupied; the handle keeps its hold so the mismatch stays visible.
    pub fn yield_spot(&mut self, index: usize) -> ReserveResult<()> {
        if let Err(err) = self.requirement.validate_start(index, self.lot.capacity()) {
            tracing::debug!(
                lot = self.lot.label(),
                index,
                requirement = %self.requirement,
                capacity = self.lot.capacity(),
                "yield rejected: invalid index"
            );
            return Err(err);
        }

        let Some(held) = self.held else {
            tracing::debug!(
                lot = self.lot.label(),
                index,
                requirement = %self.requirement,
                "yield rejected: not held"
            );
            return Err(ReserveError::NotHeld);
        };

        if held != index {
            tracing::debug!(
                lot = self.lot.label(),
                index,
                held,
                requirement = %self.requirement,
                "yield rejected: index mismatch"
            );
            return Err(ReserveError::IndexMismatch {
                requested: index,
                held,
            });
        }

        if !self.lot.release(self.requirement, index) {
            return Err(ReserveError::NotOccupied { index });
        }
        self.held = None;
        Ok(())
    }

    /// Give back whatever span is held and return its start
    ///
    /// # Errors
    ///
    /// `NotHeld` if this handle holds nothing.
    pub fn yield_held(&mut self) -> ReserveResult<usize> {
        let start = self.held.ok_or(ReserveError::NotHeld)?;
        self.yield_spot(start)?;
        Ok(start)
    }

    /// Current state of this handle
    pub fn describe_state(&self) -> ReservationState {
        ReservationState {
            requirement: self.requirement,
            held: self.held,
        }
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        if let Some(start) = self.held.take() {
            tracing::debug!(
                start,
                requirement = %self.requirement,
                "dropping held reservation"
            );
            self.lot.release(self.requirement, start);
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.describe_state(), f)
    }
}

/// Snapshot of a reservation's hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationState {
    /// Vehicle kind
    pub requirement: SpotRequirement,
    /// Start index of the held span
    pub held: Option<usize>,
}

/// Renders `single(parked at 3)`, `adjacent(parked at 3-4)` or
/// `single(not parked)`.
impl fmt::Display for ReservationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.held {
            None => write!(f, "{}(not parked)", self.requirement),
            Some(start) => {
                let span = self.requirement.span(start);
                if span.len() == 1 {
                    write!(f, "{}(parked at {})", self.requirement, start)
                } else {
                    write!(
                        f,
                        "{}(parked at {}-{})",
                        self.requirement,
                        span.start,
                        span.end - 1
                    )
                }
            }
        }
    }
}
