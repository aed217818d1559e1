use std::fmt;

use chrono::{DateTime, Utc};
use yaweather_core::{Fact, Part, Weather};

/// Human-readable report of one informers response.
pub fn render(weather: &Weather) -> String {
    Report(weather).to_string()
}

struct Report<'a>(&'a Weather);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report(weather) = self;
        let info = &weather.info;

        writeln!(f, "{:.2}, {:.2}  {}", info.lat, info.lon, info.url)?;
        writeln!(f, "Observed {}", format_time(weather.fact.observed_at()))?;
        write_fact(f, &weather.fact)?;

        let forecast = &weather.forecast;
        writeln!(f)?;
        writeln!(f, "Forecast for {} (week {})", forecast.date, forecast.week)?;
        if !forecast.sunrise.is_empty() || !forecast.sunset.is_empty() {
            let (sunrise, sunset) = (or_dash(&forecast.sunrise), or_dash(&forecast.sunset));
            writeln!(f, "  Sunrise {sunrise}, sunset {sunset}")?;
        }
        let moon = describe(forecast.moon_phase_text(), &forecast.moon_text);
        writeln!(f, "  Moon: {moon}")?;

        for part in &forecast.parts {
            write_part(f, part)?;
        }

        Ok(())
    }
}

fn write_fact(f: &mut fmt::Formatter<'_>, fact: &Fact) -> fmt::Result {
    writeln!(
        f,
        "  {} {}°C (feels like {}°C)",
        describe(fact.condition_text(), &fact.condition),
        fact.temp,
        fact.feels_like
    )?;
    if fact.temp_water != 0 {
        writeln!(f, "  Water {}°C", fact.temp_water)?;
    }
    writeln!(
        f,
        "  Wind {} {:.1} m/s, gusts {:.1} m/s",
        describe(fact.wind_direction_text(), &fact.wind_dir),
        fact.wind_speed,
        fact.wind_gust
    )?;
    writeln!(
        f,
        "  Pressure {} mmHg / {} hPa, humidity {}%",
        fact.pressure_mm, fact.pressure_pa, fact.humidity
    )?;
    writeln!(
        f,
        "  Season: {}{}",
        describe(fact.season_text(), &fact.season),
        if fact.polar { " (polar)" } else { "" }
    )
}

fn write_part(f: &mut fmt::Formatter<'_>, part: &Part) -> fmt::Result {
    writeln!(
        f,
        "  {:<8} {}..{}°C  {}, precipitation {} mm ({}%)",
        describe(part.name_text(), &part.part_name),
        part.temp_min,
        part.temp_max,
        describe(part.condition_text(), &part.condition),
        part.prec_mm,
        part.prec_prob
    )
}

/// Localized text if the code is known, the raw code otherwise.
fn describe<'a>(text: Option<&'a str>, code: &'a str) -> &'a str {
    text.unwrap_or(code)
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}

fn format_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string()).unwrap_or_else(|| "-".to_string())
}
