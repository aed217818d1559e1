use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::locale;

/// Coordinates and language of a single informer request.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Locale tag forwarded to the provider as-is, e.g. `ru_RU` or `en_US`.
    pub lang: String,
}

/// Root of the informers response.
///
/// The five top-level fields are required, so an error payload from the
/// provider fails to decode. Inside the nested records a missing or `null`
/// field decodes to its zero value, the same way the provider documents
/// "absent" for things like `temp_water`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Server time, Unix seconds.
    pub now: i64,
    /// Server time in UTC, as rendered by the provider.
    pub now_dt: String,
    pub info: Info,
    pub fact: Fact,
    pub forecast: Forecast,
}

impl Weather {
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.now)
    }
}

/// Location the forecast was produced for.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde_as(as = "DefaultOnNull")]
    pub lat: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub lon: f64,
    /// Public page of the location on the provider's site.
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
}

/// Current observation.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fact {
    /// °C
    #[serde_as(as = "DefaultOnNull")]
    pub temp: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub feels_like: i32,
    /// Only reported for places near water; zero otherwise.
    #[serde_as(as = "DefaultOnNull")]
    pub temp_water: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub icon: String,
    #[serde_as(as = "DefaultOnNull")]
    pub condition: String,
    /// m/s
    #[serde_as(as = "DefaultOnNull")]
    pub wind_speed: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub wind_gust: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub wind_dir: String,
    #[serde_as(as = "DefaultOnNull")]
    pub pressure_mm: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub pressure_pa: i32,
    /// Percent.
    #[serde_as(as = "DefaultOnNull")]
    pub humidity: i32,
    /// `d` or `n`.
    #[serde_as(as = "DefaultOnNull")]
    pub daytime: String,
    /// Set when `daytime` reflects polar day or night.
    #[serde_as(as = "DefaultOnNull")]
    pub polar: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub season: String,
    /// Unix seconds.
    #[serde_as(as = "DefaultOnNull")]
    pub obs_time: i64,
}

impl Fact {
    pub fn condition_text(&self) -> Option<&'static str> {
        locale::condition_text(&self.condition)
    }

    pub fn wind_direction_text(&self) -> Option<&'static str> {
        locale::wind_direction_text(&self.wind_dir)
    }

    pub fn season_text(&self) -> Option<&'static str> {
        locale::season_text(&self.season)
    }

    pub fn icon_url(&self) -> String {
        locale::icon_url(&self.icon)
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.obs_time)
    }
}

/// Forecast for one calendar day, split into parts of the day.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    /// `YYYY-MM-DD`
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde_as(as = "DefaultOnNull")]
    pub date_ts: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub week: i32,
    /// Local time; empty in polar regions.
    #[serde_as(as = "DefaultOnNull")]
    pub sunrise: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sunset: String,
    /// Lunar phase in 1/16 steps, 0 being full moon.
    #[serde_as(as = "DefaultOnNull")]
    pub moon_code: i32,
    /// `moon-code-N`
    #[serde_as(as = "DefaultOnNull")]
    pub moon_text: String,
    /// In the order the provider sent them, normally night, morning, day, evening.
    #[serde_as(as = "DefaultOnNull")]
    pub parts: Vec<Part>,
}

impl Forecast {
    pub fn moon_phase_text(&self) -> Option<&'static str> {
        locale::moon_phase_text(self.moon_code)
    }

    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Forecast for one part of the day.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    /// `night`, `morning`, `day` or `evening`.
    #[serde_as(as = "DefaultOnNull")]
    pub part_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub temp_min: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub temp_max: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub temp_avg: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub feels_like: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub temp_water: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub icon: String,
    #[serde_as(as = "DefaultOnNull")]
    pub condition: String,
    #[serde_as(as = "DefaultOnNull")]
    pub daytime: String,
    #[serde_as(as = "DefaultOnNull")]
    pub polar: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub wind_speed: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub wind_gust: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub wind_dir: String,
    #[serde_as(as = "DefaultOnNull")]
    pub pressure_mm: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub pressure_pa: i32,
    #[serde_as(as = "DefaultOnNull")]
    pub humidity: i32,
    /// Expected precipitation, mm.
    #[serde_as(as = "DefaultOnNull")]
    pub prec_mm: f64,
    /// Expected precipitation window, minutes.
    #[serde_as(as = "DefaultOnNull")]
    pub prec_period: i32,
    /// Probability of precipitation, percent.
    #[serde_as(as = "DefaultOnNull")]
    pub prec_prob: i32,
}

impl Part {
    pub fn name_text(&self) -> Option<&'static str> {
        locale::part_name_text(&self.part_name)
    }

    pub fn condition_text(&self) -> Option<&'static str> {
        locale::condition_text(&self.condition)
    }

    pub fn wind_direction_text(&self) -> Option<&'static str> {
        locale::wind_direction_text(&self.wind_dir)
    }

    pub fn icon_url(&self) -> String {
        locale::icon_url(&self.icon)
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
