//! Error types for lotkeeper
//!
//! This module defines the two error families used throughout the system:
//! - `ReserveError`: expected, recoverable outcomes of request/yield
//! - `LotError`: configuration and construction failures
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::SpotRequirement;
use thiserror::Error;

/// Result type alias for reservation operations
pub type ReserveResult<T> = std::result::Result<T, ReserveError>;

/// Result type alias for configuration operations
pub type LotResult<T> = std::result::Result<T, LotError>;

/// Outcome of a rejected request or yield
///
/// None of these are fatal. The lot is left exactly as it was before the
/// call, and the caller is expected to branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    /// The reservation already holds spots starting at `index`
    #[error("reservation already holds spot {index}")]
    AlreadyHeld {
        /// Start index currently held
        index: usize,
    },

    /// No free spot (or adjacent pair) existed at scan time
    #[error("no capacity for {requirement} vehicle")]
    NoCapacity {
        /// Requirement that could not be satisfied
        requirement: SpotRequirement,
    },

    /// Yield attempted on a reservation that holds nothing
    #[error("reservation does not hold a spot")]
    NotHeld,

    /// Yield index outside the valid start range for this vehicle kind
    #[error("invalid spot index {index} for {requirement} vehicle in lot of capacity {capacity}")]
    InvalidIndex {
        /// Index supplied by the caller
        index: usize,
        /// Vehicle kind whose range was violated
        requirement: SpotRequirement,
        /// Capacity of the lot
        capacity: usize,
    },

    /// Yield index does not match the start actually held
    #[error("reservation holds spot {held}, not {requested}")]
    IndexMismatch {
        /// Index supplied by the caller
        requested: usize,
        /// Start index actually held
        held: usize,
    },

    /// The lot does not show the held span as occupied; the handle keeps it
    #[error("held span at {index} is not occupied in the lot")]
    NotOccupied {
        /// Start index the reservation believes it holds
        index: usize,
    },
}

/// Configuration and construction errors
#[derive(Debug, Error)]
pub enum LotError {
    /// Config file could not be read, parsed or written
    #[error("Config error: {0}")]
    Config(String),

    /// Requested capacity exceeds the supported maximum
    #[error("Capacity {capacity} exceeds maximum of {max}")]
    CapacityTooLarge {
        /// Requested capacity
        capacity: usize,
        /// Maximum supported capacity
        max: usize,
    },
}

impl From<toml::de::Error> for LotError {
    fn from(e: toml::de::Error) -> Self {
        LotError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_already_held() {
        let err = ReserveError::AlreadyHeld { index: 7 };
        let msg = err.to_string();
        assert!(msg.contains("already holds"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn test_error_display_no_capacity() {
        let err = ReserveError::NoCapacity {
            requirement: SpotRequirement::Adjacent,
        };
        assert_eq!(err.to_string(), "no capacity for adjacent vehicle");
    }

    #[test]
    fn test_error_display_invalid_index() {
        let err = ReserveError::InvalidIndex {
            index: 4,
            requirement: SpotRequirement::Adjacent,
            capacity: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid spot index 4"));
        assert!(msg.contains("capacity 5"));
    }

    #[test]
    fn test_error_display_index_mismatch() {
        let err = ReserveError::IndexMismatch {
            requested: 2,
            held: 3,
        };
        assert_eq!(err.to_string(), "reservation holds spot 3, not 2");
    }

    #[test]
    fn test_error_display_not_occupied() {
        let err = ReserveError::NotOccupied { index: 6 };
        assert_eq!(err.to_string(), "held span at 6 is not occupied in the lot");
    }

    #[test]
    fn test_error_display_capacity_too_large() {
        let err = LotError::CapacityTooLarge {
            capacity: 10,
            max: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains("maximum of 5"));
    }

    #[test]
    fn test_error_from_toml() {
        let result: LotResult<toml::Value> = toml::from_str("capacity = ").map_err(|e| e.into());
        assert!(matches!(result, Err(LotError::Config(_))));
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = ReserveError::IndexMismatch {
            requested: 1,
            held: 0,
        };

        match err {
            ReserveError::IndexMismatch { requested, held } => {
                assert_eq!(requested, 1);
                assert_eq!(held, 0);
            }
            _ => panic!("Wrong error variant"),
        }
    }
}
