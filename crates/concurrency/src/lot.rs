//! Lot allocator: the lock-protected find/commit/release engine
//!
//! Every read and write of the occupancy map happens under one mutex per lot.
//!
//! ## Reserve Sequence
//!
//! ```text
//! 1. lock()            - acquire the lot mutex
//! 2. find_*()          - first-fit scan for a free spot / adjacent pair
//! 3. IF none: unlock and return NoCapacity
//! 4. commit_*()        - mark the span held
//! 5. unlock            - span is now visible to every other caller
//! ```
//!
//! Steps 2 and 4 share one critical section. Scanning under one acquisition
//! and committing under another would let two callers observe the same free
//! spot and both claim it.
//!
//! The mutex is not reentrant. No public method calls another public method
//! while holding it, so a caller can never deadlock on itself.
//!
//! Holding the lock across the scan makes each critical section O(capacity).
//! Capacity is bounded by [`MAX_CAPACITY`](lotkeeper_core::MAX_CAPACITY); a
//! free-interval index would be the place to start for much larger lots.

use crate::reservation::Reservation;
use crate::snapshot::LotSnapshot;
use crate::spot_map::SpotMap;
use lotkeeper_core::{LotConfig, LotResult, ReserveError, ReserveResult, SpotRequirement};
use parking_lot::Mutex;
use std::sync::Arc;

/// A fixed-size linear lot shared by concurrent callers
///
/// Share it as `Arc<Lot>`. Reservations are created against the `Arc` and
/// keep the lot alive for as long as they exist.
#[derive(Debug)]
pub struct Lot {
    /// Number of spots, fixed at construction
    capacity: usize,

    /// Optional label attached to log events
    name: Option<String>,

    /// Occupancy map; only touched while this mutex is held
    spots: Mutex<SpotMap>,
}

impl Lot {
    /// Create an empty, unnamed lot of `capacity` spots
    ///
    /// No limit is checked here; use [`Lot::from_config`] to enforce
    /// [`MAX_CAPACITY`](lotkeeper_core::MAX_CAPACITY).
    pub fn new(capacity: usize) -> Self {
        Lot {
            capacity,
            name: None,
            spots: Mutex::new(SpotMap::new(capacity)),
        }
    }

    /// Create an empty lot from validated configuration
    pub fn from_config(config: &LotConfig) -> LotResult<Self> {
        config.validate()?;
        Ok(Lot {
            capacity: config.capacity,
            name: config.name.clone(),
            spots: Mutex::new(SpotMap::new(config.capacity)),
        })
    }

    /// Number of spots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Label from the configuration, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }

    /// Point-in-time availability report
    pub fn snapshot(&self) -> LotSnapshot {
        LotSnapshot::capture(&self.spots.lock())
    }

    /// Lowest free spot at the time of the call
    ///
    /// Read-only probe. The answer may be stale as soon as the lock is
    /// released; use a [`Reservation`] to actually claim a spot.
    pub fn find_single(&self) -> Option<usize> {
        self.spots.lock().find_single()
    }

    /// Lowest start of two adjacent free spots at the time of the call
    ///
    /// Read-only probe, see [`Lot::find_single`].
    pub fn find_adjacent_pair(&self) -> Option<usize> {
        self.spots.lock().find_adjacent_pair()
    }

    /// Create an unheld reservation of the given kind against this lot
    pub fn reservation(self: &Arc<Self>, requirement: SpotRequirement) -> Reservation {
        Reservation::new(Arc::clone(self), requirement)
    }

    /// Create an unheld single-spot reservation (a car)
    pub fn single_reservation(self: &Arc<Self>) -> Reservation {
        self.reservation(SpotRequirement::Single)
    }

    /// Create an unheld adjacent-pair reservation (a truck)
    pub fn adjacent_reservation(self: &Arc<Self>) -> Reservation {
        self.reservation(SpotRequirement::Adjacent)
    }

    /// Find and commit a span in one critical section
    ///
    /// Returns the committed start index, or `NoCapacity` with the lot
    /// unchanged.
    pub(crate) fn try_reserve(&self, requirement: SpotRequirement) -> ReserveResult<usize> {
        let mut spots = self.spots.lock();

        let found = match requirement {
            SpotRequirement::Single => spots.find_single(),
            SpotRequirement::Adjacent => spots.find_adjacent_pair(),
        };

        if let Some(start) = found {
            let committed = match requirement {
                SpotRequirement::Single => spots.commit_single(start),
                SpotRequirement::Adjacent => spots.commit_pair(start),
            };
            if committed {
                tracing::debug!(
                    lot = self.label(),
                    start,
                    requirement = %requirement,
                    occupied = spots.occupied_count(),
                    "reserved spots"
                );
                return Ok(start);
            }
        }

        tracing::debug!(
            lot = self.label(),
            requirement = %requirement,
            free = spots.free_count(),
            "no capacity"
        );
        Err(ReserveError::NoCapacity { requirement })
    }

    /// Release a span previously committed by [`Lot::try_reserve`]
    ///
    /// Returns `false` and leaves the lot unchanged if the span was not
    /// fully held, which means a reservation's bookkeeping disagrees with
    /// the map.
    pub(crate) fn release(&self, requirement: SpotRequirement, start: usize) -> bool {
        let mut spots = self.spots.lock();

        let released = match requirement {
            SpotRequirement::Single => spots.release_single(start),
            SpotRequirement::Adjacent => spots.release_pair(start),
        };

        if released {
            tracing::debug!(
                lot = self.label(),
                start,
                requirement = %requirement,
                occupied = spots.occupied_count(),
                "released spots"
            );
        } else {
            tracing::warn!(
                lot = self.label(),
                start,
                requirement = %requirement,
                "release of spots that are not held; occupancy unchanged"
            );
        }
        released
    }
}
