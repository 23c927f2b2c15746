//! Forecast response model and card extraction

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shown in place of a temperature the forecast doesn't provide
pub const TEMP_PLACEHOLDER: &str = "--";

/// Series holding `timeDefines` and the aligned `weathers`
const WEATHER_SERIES: usize = 0;
/// Series holding today's `temps`
const TEMPERATURE_SERIES: usize = 2;
/// `YYYY-MM-DD` prefix of an ISO 8601 date-time
const DATE_LEN: usize = 10;

// ============================================================================
// Wire format
// ============================================================================

/// One publisher entry of `forecast/<code>.json`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ForecastPublisher {
    #[serde(rename = "timeSeries", default)]
    pub time_series: Vec<TimeSeries>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TimeSeries {
    #[serde(rename = "timeDefines", default)]
    pub time_defines: Vec<String>,
    #[serde(default)]
    pub areas: Vec<SeriesArea>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SeriesArea {
    #[serde(default)]
    pub weathers: Option<Vec<String>>,
    #[serde(default)]
    pub temps: Option<Vec<String>>,
}

// ============================================================================
// Cards
// ============================================================================

/// One day of the forecast panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastCard {
    pub date: String,
    pub weather: String,
    pub min_temp: String,
    pub max_temp: String,
}

impl ForecastCard {
    pub fn temperature_label(&self) -> String {
        format!("{}°C / {}°C", self.min_temp, self.max_temp)
    }

    pub fn has_temperature(&self) -> bool {
        self.min_temp != TEMP_PLACEHOLDER || self.max_temp != TEMP_PLACEHOLDER
    }
}

/// Build the cards for a forecast response.
///
/// Only the first publisher is read. Card `i` pairs `timeDefines[i]` with
/// `weathers[i]`; only card 0 gets temperatures, and only when the
/// temperature series carries at least a min and a max.
pub fn build_cards(publishers: &[ForecastPublisher]) -> Vec<ForecastCard> {
    let Some(publisher) = publishers.first() else {
        return Vec::new();
    };
    let Some(series) = publisher.time_series.get(WEATHER_SERIES) else {
        tracing::debug!("forecast has no weather series");
        return Vec::new();
    };

    let weathers = series
        .areas
        .first()
        .and_then(|area| area.weathers.as_deref())
        .unwrap_or_default();
    if weathers.len() != series.time_defines.len() {
        tracing::debug!(
            times = series.time_defines.len(),
            weathers = weathers.len(),
            "weather entries not aligned with time defines"
        );
    }

    let today = match extract_temps(publisher) {
        [min, max, ..] => Some((min.clone(), max.clone())),
        _ => None,
    };

    series
        .time_defines
        .iter()
        .zip(weathers)
        .enumerate()
        .map(|(i, (time, weather))| {
            let (min_temp, max_temp) = match (&today, i) {
                (Some((min, max)), 0) => (min.clone(), max.clone()),
                _ => (TEMP_PLACEHOLDER.to_string(), TEMP_PLACEHOLDER.to_string()),
            };
            ForecastCard {
                date: date_prefix(time),
                weather: weather.clone(),
                min_temp,
                max_temp,
            }
        })
        .collect()
}

/// `temps` of the temperature series' first area; empty when the series, the
/// area or the field is absent.
pub fn extract_temps(publisher: &ForecastPublisher) -> &[String] {
    publisher
        .time_series
        .get(TEMPERATURE_SERIES)
        .and_then(|series| series.areas.first())
        .and_then(|area| area.temps.as_deref())
        .unwrap_or_default()
}

fn date_prefix(time: &str) -> String {
    time.chars().take(DATE_LEN).collect()
}
