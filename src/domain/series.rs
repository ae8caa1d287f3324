// Aggregation of flat sample lists into per-provider chart series
use crate::domain::sample::Sample;
use crate::domain::time::TimeFormatter;
use indexmap::IndexMap;

/// Controls whether provider series share the label index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesAlignment {
    /// One value appended per sample from that provider. Series lengths equal
    /// each provider's own sample count, not the total; interleaved input
    /// produces unequal lengths. Matches the deployed charts.
    #[default]
    PerProvider,
    /// Every series is label-length, gap-filled with `None` at indices that
    /// belong to other providers.
    Aligned,
}

/// Chart-ready aggregation: one label per input sample, one series per
/// provider in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub labels: Vec<String>,
    pub series_by_provider: IndexMap<String, Vec<Option<f64>>>,
}

/// Groups samples by provider. Failed readings become `None` (a gap in the
/// line, never a zero), regardless of any numeric duration on the sample.
pub fn aggregate(
    samples: &[Sample],
    formatter: &TimeFormatter,
    alignment: SeriesAlignment,
) -> Aggregation {
    let mut labels = Vec::with_capacity(samples.len());
    let mut series: IndexMap<String, Vec<Option<f64>>> = IndexMap::new();

    for (idx, sample) in samples.iter().enumerate() {
        labels.push(formatter.format(&sample.ts));
        let values = series
            .entry(sample.provider.clone())
            .or_insert_with(Vec::new);
        if alignment == SeriesAlignment::Aligned {
            values.resize(idx, None);
        }
        values.push(sample.eta_minutes());
    }

    if alignment == SeriesAlignment::Aligned {
        let total = labels.len();
        for values in series.values_mut() {
            values.resize(total, None);
        }
    }

    Aggregation {
        labels,
        series_by_provider: series,
    }
}
