//! Core types for lotkeeper
//!
//! This crate defines the foundational types used throughout the system:
//! - SpotRequirement: Space needed by a vehicle kind (single or adjacent pair)
//! - SpotState: Symbolic per-spot state
//! - Error: ReserveError (recoverable request/yield outcomes) and LotError
//! - Config: LotConfig loaded from `lotkeeper.toml`
//! - Limits: MAX_CAPACITY

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;
pub mod types;

pub use config::{LotConfig, CONFIG_FILE_NAME, DEFAULT_CAPACITY};
pub use error::{LotError, LotResult, ReserveError, ReserveResult};
pub use limits::{validate_capacity, MAX_CAPACITY};
pub use types::{SpotRequirement, SpotState};
