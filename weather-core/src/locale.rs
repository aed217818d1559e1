//! Russian descriptions for the provider's coded fields.
//!
//! Every table is closed: a code the provider does not document maps to `None`.

const ICON_BASE_URL: &str = "https://yastatic.net/weather/i/icons/funky/dark";

/// Condition codes documented for `fact.condition` and `parts[].condition`.
pub const CONDITIONS: &[&str] = &[
    "clear",
    "partly-cloudy",
    "cloudy",
    "overcast",
    "drizzle",
    "light-rain",
    "rain",
    "moderate-rain",
    "heavy-rain",
    "continuous-heavy-rain",
    "showers",
    "wet-snow",
    "light-snow",
    "snow",
    "snow-showers",
    "hail",
    "thunderstorm",
    "thunderstorm-with-rain",
    "thunderstorm-with-hail",
];

pub fn condition_text(code: &str) -> Option<&'static str> {
    let text = match code {
        "clear" => "Ясно",
        "partly-cloudy" => "Малооблачно",
        "cloudy" => "Облачно с прояснениями",
        "overcast" => "Пасмурно",
        "drizzle" => "Морось",
        "light-rain" => "Небольшой дождь",
        "rain" => "Дождь",
        "moderate-rain" => "Умеренно сильный дождь",
        "heavy-rain" => "Сильный дождь",
        "continuous-heavy-rain" => "Длительный сильный дождь",
        "showers" => "Ливень",
        "wet-snow" => "Дождь со снегом",
        "light-snow" => "Небольшой снег",
        "snow" => "Снег",
        "snow-showers" => "Снегопад",
        "hail" => "Град",
        "thunderstorm" => "Гроза",
        "thunderstorm-with-rain" => "Дождь с грозой",
        "thunderstorm-with-hail" => "Гроза с градом",
        _ => return None,
    };
    Some(text)
}

/// Lunar phase name for `forecast.moon_code`.
///
/// Codes 13–15 have no text.
pub fn moon_phase_text(code: i32) -> Option<&'static str> {
    let text = match code {
        0 => "Полнолуние",
        1..=3 | 5..=7 => "Убывающая Луна",
        4 => "Последняя четверть",
        8 => "Новолуние",
        9..=11 => "Растущая Луна",
        12 => "Первая четверть",
        _ => return None,
    };
    Some(text)
}

pub fn wind_direction_text(code: &str) -> Option<&'static str> {
    let text = match code {
        "nw" => "северо-западное",
        "n" => "северное",
        "ne" => "северо-восточное",
        "e" => "восточное",
        "se" => "юго-восточное",
        "s" => "южное",
        "sw" => "юго-западное",
        "w" => "западное",
        "c" => "штиль",
        _ => return None,
    };
    Some(text)
}

pub fn part_name_text(code: &str) -> Option<&'static str> {
    match code {
        "night" => Some("ночь"),
        "morning" => Some("утро"),
        "day" => Some("день"),
        "evening" => Some("вечер"),
        _ => None,
    }
}

pub fn season_text(code: &str) -> Option<&'static str> {
    match code {
        "summer" => Some("лето"),
        "autumn" => Some("осень"),
        "winter" => Some("зима"),
        "spring" => Some("весна"),
        _ => None,
    }
}

pub fn daytime_text(code: &str) -> Option<&'static str> {
    match code {
        "d" => Some("светлое время суток"),
        "n" => Some("темное время суток"),
        _ => None,
    }
}

/// SVG icon for an `icon` code.
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}.svg")
}
