//! Capacity limits
//!
//! Allocation scans the lot linearly while holding the lot lock, so the cost
//! of every critical section grows with capacity. Lots larger than
//! `MAX_CAPACITY` are rejected at configuration time.

use crate::error::{LotError, LotResult};

/// Maximum number of spots in one lot (default: 1M)
pub const MAX_CAPACITY: usize = 1 << 20;

/// Validate a lot capacity
///
/// Zero and one are accepted: such lots simply never fit an adjacent vehicle.
pub fn validate_capacity(capacity: usize) -> LotResult<()> {
    if capacity > MAX_CAPACITY {
        return Err(LotError::CapacityTooLarge {
            capacity,
            max: MAX_CAPACITY,
        });
    }
    Ok(())
}
