//! Concurrency layer for lotkeeper
//!
//! This crate implements the thread-safe allocation engine:
//! - SpotMap: Occupancy array, the single source of truth
//! - Lot: One mutex per lot; find + commit and release as single critical sections
//! - Reservation: Per-vehicle handle enforcing one held span at a time
//! - LotSnapshot: Point-in-time availability report
//!
//! Operations on one lot are linearizable. Contention is resolved purely by
//! lock acquisition order; no vehicle kind is favored.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lot;
pub mod reservation;
pub mod snapshot;
pub mod spot_map;

pub use lot::Lot;
pub use reservation::{Reservation, ReservationState};
pub use snapshot::LotSnapshot;
pub use spot_map::SpotMap;
