// Line-chart configuration in the charting widget's wire shape
use crate::domain::series::Aggregation;
use serde::Serialize;

const Y_AXIS_TITLE: &str = "ETA (minutes)";
const LINE_TENSION: f64 = 0.2;

/// Serializes to the `{type, data, options}` structure the charting widget
/// consumes verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub interaction: Interaction,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
    pub x: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Self {
            title: AxisTitle {
                display: true,
                text: text.to_string(),
            },
        }
    }
}

impl ChartSpec {
    /// One dataset per provider, in the aggregation's first-seen order, value
    /// arrays carried verbatim (gaps and per-provider lengths included). The
    /// X-axis title comes from the time policy so the two never disagree.
    pub fn line(aggregation: &Aggregation, time_axis_title: &str) -> Self {
        let datasets = aggregation
            .series_by_provider
            .iter()
            .map(|(provider, values)| Dataset {
                label: provider.clone(),
                data: values.clone(),
                tension: LINE_TENSION,
            })
            .collect();

        Self {
            kind: "line",
            data: ChartData {
                labels: aggregation.labels.clone(),
                datasets,
            },
            options: ChartOptions {
                responsive: true,
                interaction: Interaction {
                    mode: "index",
                    intersect: false,
                },
                scales: Scales {
                    y: Axis::titled(Y_AXIS_TITLE),
                    x: Axis::titled(time_axis_title),
                },
            },
        }
    }
}
