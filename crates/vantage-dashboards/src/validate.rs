//! Pre-submission widget validation.

use thiserror::Error;
use vantage_core::VantageError;
use vantage_core::models::widget::Widget;

/// Widget validation errors, each attached to the form field at fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("title is required")]
    MissingTitle,

    #[error("at least one query is required")]
    NoQueries,

    #[error("query `{name}` has no fields")]
    EmptyFields { name: String },
}

impl WidgetError {
    /// The form field this error attaches to.
    pub fn field(&self) -> &'static str {
        match self {
            WidgetError::MissingTitle => "title",
            WidgetError::NoQueries | WidgetError::EmptyFields { .. } => "queries",
        }
    }
}

impl From<WidgetError> for VantageError {
    fn from(err: WidgetError) -> Self {
        VantageError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Structural checks run at save time.
///
/// Live editing self-heals through normalization instead; this is the
/// one surface that reports rather than repairs, since a save with no
/// title or no queries cannot be repaired silently.
pub fn validate_widget(widget: &Widget) -> Result<(), WidgetError> {
    if widget.title.trim().is_empty() {
        return Err(WidgetError::MissingTitle);
    }
    if widget.queries.is_empty() {
        return Err(WidgetError::NoQueries);
    }
    for query in &widget.queries {
        if query.fields.is_empty() {
            return Err(WidgetError::EmptyFields {
                name: query.name.clone(),
            });
        }
    }
    Ok(())
}
