//! Domain models for VANTAGE.
//!
//! These are the core types shared across all crates.

pub mod permission;
pub mod scope;
pub mod widget;
