//! Dashboard widget domain model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// The visualization kind of a widget.
///
/// Governs the structural constraints normalization enforces on the
/// widget's queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Table,
    WorldMap,
    BigNumber,
    Line,
    Area,
    StackedArea,
    Bar,
}

impl DisplayType {
    /// Displays that render a single grid or scalar and take one query.
    pub fn is_single_query(&self) -> bool {
        matches!(
            self,
            DisplayType::Table | DisplayType::WorldMap | DisplayType::BigNumber
        )
    }

    /// Displays that render one series per query × field pair over time.
    pub fn is_timeseries(&self) -> bool {
        matches!(
            self,
            DisplayType::Line | DisplayType::Area | DisplayType::StackedArea | DisplayType::Bar
        )
    }
}

/// A data-fetch specification within a widget.
///
/// `extra` keeps properties this engine does not model (saved-search
/// references, display options added server-side) intact across edit
/// round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetQuery {
    #[serde(default)]
    pub name: String,
    pub fields: Vec<String>,
    #[serde(default)]
    pub conditions: String,
    #[serde(default)]
    pub orderby: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WidgetQuery {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// A dashboard tile specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// `None` until the widget has been persisted; hydrated widgets in
    /// edit mode carry the server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub display_type: DisplayType,
    #[serde(default)]
    pub interval: String,
    pub queries: Vec<WidgetQuery>,
}
