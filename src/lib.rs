//! Lotkeeper - thread-safe spot allocation for a linear parking lot
//!
//! A lot of fixed capacity is shared by single-spot vehicles and vehicles that
//! need two adjacent spots. Reservations are granted first-fit and revoked
//! with validation, correctly under concurrent access.
//!
//! # Quick Start
//!
//! ```
//! use lotkeeper::{Lot, ReserveError};
//! use std::sync::Arc;
//!
//! let lot = Arc::new(Lot::new(5));
//!
//! let mut car = lot.single_reservation();
//! let mut truck = lot.adjacent_reservation();
//!
//! assert_eq!(car.request_spot(), Ok(0));
//! assert_eq!(truck.request_spot(), Ok(1));
//! assert_eq!(lot.snapshot().to_string(), "X X X O O");
//!
//! assert_eq!(truck.yield_spot(4), Err(ReserveError::InvalidIndex {
//!     index: 4,
//!     requirement: lotkeeper::SpotRequirement::Adjacent,
//!     capacity: 5,
//! }));
//! assert_eq!(truck.yield_spot(1), Ok(()));
//! ```
//!
//! # Architecture
//!
//! Types and configuration live in `lotkeeper-core`; the lock-protected
//! allocator and reservation handles live in `lotkeeper-concurrency`.

pub use lotkeeper_concurrency::*;
pub use lotkeeper_core::*;
