//! Display-type constraint enforcement for widget queries.

use tracing::debug;
use vantage_core::models::widget::{DisplayType, WidgetQuery};

use crate::fields::FieldMetadata;

/// Timeseries displays draw at most this many queries.
pub const MAX_TIMESERIES_QUERIES: usize = 3;
/// Timeseries displays draw at most this many Y-axis fields per query.
pub const MAX_Y_AXIS_FIELDS: usize = 3;
/// Substituted when filtering leaves a query with nothing to plot.
pub const DEFAULT_FIELD: &str = "count()";

/// Force a widget's queries into the shape its display type can render.
///
/// Permissive by design: invalid fields are dropped and defaults
/// substituted instead of erroring, so a half-edited widget always
/// stays renderable.
pub fn normalize_queries<M: FieldMetadata>(
    display: DisplayType,
    mut queries: Vec<WidgetQuery>,
    meta: &M,
) -> Vec<WidgetQuery> {
    // 1. Cap the query count for displays that cannot fan out.
    if display.is_single_query() {
        queries.truncate(1);
    } else if display.is_timeseries() {
        queries.truncate(MAX_TIMESERIES_QUERIES);
    }

    // 2. Tables take any field, aggregate or not.
    if display == DisplayType::Table {
        return queries;
    }

    let needs_numeric_axis = display.is_timeseries() || display == DisplayType::WorldMap;

    for query in &mut queries {
        // 3./4. Keep aggregates only, and where the display plots them
        // on an axis, only aggregates with a numeric output type.
        query.fields.retain(|field| {
            let keep = meta.is_aggregate(field)
                && (!needs_numeric_axis || meta.output_type(field).is_plottable());
            if !keep {
                debug!(field = %field, "dropping field unusable for display");
            }
            keep
        });

        // 5. Cap the series fan-out per query.
        if display.is_timeseries() {
            query.fields.truncate(MAX_Y_AXIS_FIELDS);
        }

        // 6. Every query must plot at least one series.
        if query.fields.is_empty() {
            debug!("query has no plottable fields; substituting {}", DEFAULT_FIELD);
            query.fields.push(DEFAULT_FIELD.to_string());
        }
    }

    // 7. Timeseries charts share one legend and one axis, so every
    // query must carry the same field list.
    if display.is_timeseries() {
        unify_fields(&mut queries);
    }

    // 8. These displays plot exactly one scalar per query.
    if matches!(display, DisplayType::WorldMap | DisplayType::BigNumber) {
        for query in &mut queries {
            query.fields.truncate(1);
        }
    }

    queries
}

/// Merge divergent field lists into one shared reference list, seeded
/// from the first query and capped at [`MAX_Y_AXIS_FIELDS`], then apply
/// it to every query.
fn unify_fields(queries: &mut [WidgetQuery]) {
    let Some(first) = queries.first() else {
        return;
    };
    let mut reference = first.fields.clone();
    for query in queries.iter().skip(1) {
        if query.fields == reference {
            continue;
        }
        for field in &query.fields {
            if reference.len() >= MAX_Y_AXIS_FIELDS {
                break;
            }
            if !reference.contains(field) {
                reference.push(field.clone());
            }
        }
    }
    for query in queries.iter_mut() {
        query.fields = reference.clone();
    }
}
