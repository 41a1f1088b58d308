//! VANTAGE Dashboards — structural normalization and validation for
//! dashboard widget definitions.

pub mod errors;
pub mod fields;
pub mod normalize;
pub mod validate;

pub use errors::flatten_errors;
pub use fields::{FieldMetadata, OutputType};
pub use normalize::normalize_queries;
pub use validate::{WidgetError, validate_widget};
