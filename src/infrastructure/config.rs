use crate::application::pipeline::PageCapabilities;
use crate::domain::series::SeriesAlignment;
use crate::domain::time::TimePolicy;
use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub backend: BackendSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub status_refresh: StatusRefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    /// Named timezone for label formatting; absent means the raw backend
    /// timestamp strings are shown unmodified.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub aligned_series: bool,
    #[serde(default = "default_true")]
    pub route_dimension: bool,
    #[serde(default)]
    pub provider_filter: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: None,
            aligned_series: false,
            route_dimension: true,
            provider_filter: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusRefreshSettings {
    #[serde(default = "default_refresh_minutes")]
    pub minutes: u64,
    #[serde(default = "default_refresh_window_hours")]
    pub window_hours: i64,
}

impl Default for StatusRefreshSettings {
    fn default() -> Self {
        Self {
            minutes: default_refresh_minutes(),
            window_hours: default_refresh_window_hours(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8081".to_string()
}

fn default_true() -> bool {
    true
}

fn default_refresh_minutes() -> u64 {
    5
}

fn default_refresh_window_hours() -> i64 {
    1
}

impl DisplaySettings {
    pub fn time_policy(&self) -> anyhow::Result<TimePolicy> {
        match &self.timezone {
            None => Ok(TimePolicy::Raw),
            Some(name) => {
                let tz: Tz = name
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid display.timezone {}: {}", name, e))?;
                Ok(TimePolicy::Zoned(tz))
            }
        }
    }

    pub fn alignment(&self) -> SeriesAlignment {
        if self.aligned_series {
            SeriesAlignment::Aligned
        } else {
            SeriesAlignment::PerProvider
        }
    }

    pub fn capabilities(&self) -> PageCapabilities {
        PageCapabilities {
            has_route_dimension: self.route_dimension,
            has_provider_filter: self.provider_filter,
        }
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_timezone_becomes_a_zoned_policy() {
        let display = DisplaySettings {
            timezone: Some("Asia/Jerusalem".to_string()),
            ..Default::default()
        };
        assert_eq!(
            display.time_policy().unwrap(),
            TimePolicy::Zoned(chrono_tz::Asia::Jerusalem)
        );
    }

    #[test]
    fn absent_timezone_means_raw_timestamps() {
        let display = DisplaySettings::default();
        assert_eq!(display.time_policy().unwrap(), TimePolicy::Raw);
    }

    #[test]
    fn bogus_timezone_is_rejected() {
        let display = DisplaySettings {
            timezone: Some("Mars/Olympus".to_string()),
            ..Default::default()
        };
        assert!(display.time_policy().is_err());
    }
}
