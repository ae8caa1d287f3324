// Table projection of the fetched sample window
use crate::domain::sample::{Route, Sample};
use crate::domain::time::TimeFormatter;
use serde::Serialize;
use std::collections::HashMap;

/// The table shows at most this many samples, most recent first.
pub const TABLE_WINDOW: usize = 200;

/// Display-ready projection of one sample. Absent optional fields render as
/// blank cells, not errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub ts: String,
    pub label: String,
    pub status: String,
    pub duration: String,
    pub distance: String,
    pub error: String,
}

/// Which field labels a row; depends on the page variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    /// Resolve `route_id` through the lookup, falling back to the raw id.
    RouteName,
    /// Single-route pages label rows by provider instead.
    Provider,
}

/// Projects the last [`TABLE_WINDOW`] samples, reversed. The window is the
/// tail slice of the input in original order, so the first row is always the
/// most recent sample.
pub fn project_rows(
    samples: &[Sample],
    routes_by_id: &HashMap<i64, Route>,
    formatter: &TimeFormatter,
    label: RowLabel,
) -> Vec<TableRow> {
    let start = samples.len().saturating_sub(TABLE_WINDOW);
    samples[start..]
        .iter()
        .rev()
        .map(|sample| TableRow {
            ts: formatter.format(&sample.ts),
            label: row_label(sample, routes_by_id, label),
            status: sample.status.clone(),
            duration: sample.duration_min.map(fmt_number).unwrap_or_default(),
            distance: sample.distance_km.map(fmt_number).unwrap_or_default(),
            error: sample.error.clone().unwrap_or_default(),
        })
        .collect()
}

fn row_label(sample: &Sample, routes_by_id: &HashMap<i64, Route>, label: RowLabel) -> String {
    match label {
        RowLabel::Provider => sample.provider.clone(),
        RowLabel::RouteName => match sample.route_id {
            Some(id) => routes_by_id
                .get(&id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| id.to_string()),
            None => sample.provider.clone(),
        },
    }
}

/// Integer-valued readings print without a trailing ".0".
pub(crate) fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
