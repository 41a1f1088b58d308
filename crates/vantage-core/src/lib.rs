//! VANTAGE Core — shared domain models and error types for the
//! access-control settings and dashboard builder engines.

pub mod error;
pub mod models;

pub use error::{VantageError, VantageResult};
