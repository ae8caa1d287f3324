// Pure reload pipeline: samples in, chart series and table rows out
use crate::domain::sample::{Route, Sample};
use crate::domain::series::{Aggregation, SeriesAlignment, aggregate};
use crate::domain::table::{RowLabel, TableRow, project_rows};
use crate::domain::time::TimeFormatter;
use std::collections::HashMap;

/// Which selectors and dimensions a page variant carries. One parameterized
/// pipeline serves all variants instead of a copy per page.
#[derive(Debug, Clone, Copy)]
pub struct PageCapabilities {
    pub has_route_dimension: bool,
    pub has_provider_filter: bool,
}

impl Default for PageCapabilities {
    fn default() -> Self {
        Self {
            has_route_dimension: true,
            has_provider_filter: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub aggregation: Aggregation,
    pub rows: Vec<TableRow>,
}

/// The shared fetch-independent core of every reload. Holds no state between
/// cycles; each run recomputes everything from the fresh sample list.
#[derive(Debug, Clone)]
pub struct Pipeline {
    formatter: TimeFormatter,
    alignment: SeriesAlignment,
    capabilities: PageCapabilities,
}

impl Pipeline {
    pub fn new(
        formatter: TimeFormatter,
        alignment: SeriesAlignment,
        capabilities: PageCapabilities,
    ) -> Self {
        Self {
            formatter,
            alignment,
            capabilities,
        }
    }

    pub fn formatter(&self) -> &TimeFormatter {
        &self.formatter
    }

    pub fn alignment(&self) -> SeriesAlignment {
        self.alignment
    }

    pub fn capabilities(&self) -> PageCapabilities {
        self.capabilities
    }

    pub fn run(&self, samples: &[Sample], routes_by_id: &HashMap<i64, Route>) -> PipelineOutput {
        let aggregation = aggregate(samples, &self.formatter, self.alignment);
        let label = if self.capabilities.has_route_dimension {
            RowLabel::RouteName
        } else {
            RowLabel::Provider
        };
        let rows = project_rows(samples, routes_by_id, &self.formatter, label);
        PipelineOutput { aggregation, rows }
    }
}
