//! Field-metadata collaborator seam.
//!
//! The builder does not understand field expressions itself; an
//! external field-metadata subsystem answers which expressions are
//! aggregates and what type they evaluate to.

use serde::{Deserialize, Serialize};

/// Output type of an aggregate field expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Number,
    Integer,
    Duration,
    Percentage,
    Date,
    String,
}

impl OutputType {
    /// Whether a series of this type can be drawn on a numeric Y axis.
    pub fn is_plottable(&self) -> bool {
        !matches!(self, OutputType::Date | OutputType::String)
    }
}

/// Answers the field questions the normalizer cannot answer itself.
///
/// Generic over the implementation so the normalizer has no dependency
/// on the field-metadata subsystem.
pub trait FieldMetadata {
    /// Whether `field` is a computed aggregate (`count()`, `avg(x)`)
    /// rather than a raw attribute reference.
    fn is_aggregate(&self, field: &str) -> bool;

    /// Output type of an aggregate expression.
    fn output_type(&self, field: &str) -> OutputType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_numeric_types_are_plottable() {
        for output in [
            OutputType::Number,
            OutputType::Integer,
            OutputType::Duration,
            OutputType::Percentage,
        ] {
            assert!(output.is_plottable());
        }
        assert!(!OutputType::Date.is_plottable());
        assert!(!OutputType::String.is_plottable());
    }
}
