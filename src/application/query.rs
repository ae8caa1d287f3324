// Query parameters shared by the samples fetch and the download link
use thiserror::Error;

const DEFAULT_HOURS: i64 = 168;

/// The `{hours, provider?, route_id?}` triple behind every samples fetch.
/// The download link is built from the same triple so an export always
/// matches the window currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleQuery {
    pub hours: i64,
    pub provider: Option<String>,
    pub route_id: Option<i64>,
}

impl Default for SampleQuery {
    fn default() -> Self {
        Self::new(DEFAULT_HOURS)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("invalid {name} value: {value}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("unknown query parameter: {0}")]
    UnknownParameter(String),
    #[error("malformed query segment: {0}")]
    Malformed(String),
}

impl SampleQuery {
    pub fn new(hours: i64) -> Self {
        Self {
            hours,
            provider: None,
            route_id: None,
        }
    }

    /// Encoded pair list; `hours` always present and first, filters only
    /// when set.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("hours={}", self.hours)];
        if let Some(provider) = &self.provider {
            parts.push(format!("provider={}", urlencoding::encode(provider)));
        }
        if let Some(route_id) = self.route_id {
            parts.push(format!("route_id={}", route_id));
        }
        parts.join("&")
    }

    pub fn samples_path(&self) -> String {
        format!("/api/samples?{}", self.to_query_string())
    }

    pub fn download_href(&self) -> String {
        format!("/download?{}", self.to_query_string())
    }

    /// CSV filename the backend serves for this window.
    pub fn download_filename(&self) -> String {
        format!("samples_last_{}h.csv", self.hours)
    }

    /// Inverse of [`to_query_string`](Self::to_query_string); accepts an
    /// optional leading `?`.
    pub fn parse(query: &str) -> Result<Self, QueryParseError> {
        let mut out = SampleQuery::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| QueryParseError::Malformed(segment.to_string()))?;
            let value = urlencoding::decode(value)
                .map_err(|_| QueryParseError::Malformed(segment.to_string()))?;

            match key {
                "hours" => {
                    out.hours = value.parse().map_err(|_| QueryParseError::InvalidNumber {
                        name: "hours",
                        value: value.to_string(),
                    })?;
                }
                "provider" => out.provider = Some(value.into_owned()),
                "route_id" => {
                    out.route_id =
                        Some(value.parse().map_err(|_| QueryParseError::InvalidNumber {
                            name: "route_id",
                            value: value.to_string(),
                        })?);
                }
                other => return Err(QueryParseError::UnknownParameter(other.to_string())),
            }
        }

        Ok(out)
    }
}
