//! Pure display formatters.
//!
//! Every function here is total: unknown levels, impacts and countries map to a
//! neutral fallback, and malformed input never panics.

use crate::domain::{AqiLevel, Impact};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Neutral grey used for anything without a dedicated color.
pub const FALLBACK_COLOR: &str = "#95a5a6";

/// Display text for timestamps that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Width of a source share bar in cells.
pub const SOURCE_BAR_WIDTH: usize = 20;

/// Hex color for an AQI level.
#[must_use]
pub fn level_color(level: Option<&AqiLevel>) -> &'static str {
    match level {
        Some(AqiLevel::Good) => "#2ecc71",
        Some(AqiLevel::Moderate) => "#f39c12",
        Some(AqiLevel::UnhealthyForSensitiveGroups) => "#e74c3c",
        Some(AqiLevel::Unhealthy) => "#c0392b",
        Some(AqiLevel::VeryUnhealthy) => "#8b0000",
        Some(AqiLevel::Hazardous) => "#4b0000",
        Some(AqiLevel::Other(_)) | None => FALLBACK_COLOR,
    }
}

/// One-line advisory for an AQI level.
#[must_use]
pub fn level_description(level: Option<&AqiLevel>) -> &'static str {
    match level {
        Some(AqiLevel::Good) => "Air quality is satisfactory",
        Some(AqiLevel::Moderate) => "Air quality is acceptable",
        Some(AqiLevel::UnhealthyForSensitiveGroups) => "Sensitive groups should take precautions",
        Some(AqiLevel::Unhealthy) => "Air quality is harmful",
        Some(AqiLevel::VeryUnhealthy) => "Air quality is very harmful",
        Some(AqiLevel::Hazardous) => "Air quality is hazardous",
        Some(AqiLevel::Other(_)) | None => "Check air quality",
    }
}

/// Flag emoji for a country name, or a globe when unknown.
#[must_use]
pub fn country_flag(country: Option<&str>) -> &'static str {
    match country.map(str::trim) {
        Some("India") => "🇮🇳",
        Some("United States") => "🇺🇸",
        Some("China") => "🇨🇳",
        Some("United Kingdom") => "🇬🇧",
        Some("France") => "🇫🇷",
        Some("Japan") => "🇯🇵",
        Some("South Korea") => "🇰🇷",
        Some("Germany") => "🇩🇪",
        Some("Italy") => "🇮🇹",
        Some("Spain") => "🇪🇸",
        Some("Australia") => "🇦🇺",
        Some("Canada") => "🇨🇦",
        Some("Brazil") => "🇧🇷",
        Some("Mexico") => "🇲🇽",
        Some("Russia") => "🇷🇺",
        _ => "🌍",
    }
}

/// Hex color for a source impact badge.
#[must_use]
pub const fn impact_color(impact: &Impact) -> &'static str {
    match impact {
        Impact::High => "#e74c3c",
        Impact::Medium => "#f39c12",
        Impact::Low => "#2ecc71",
        Impact::Unknown | Impact::Other(_) => FALLBACK_COLOR,
    }
}

/// Formats a backend timestamp as `"Jan 15, 2024 10:30"` in UTC.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` and bare `YYYY-MM-DD` dates.
/// Anything else yields `"Invalid Date"`.
#[must_use]
pub fn format_timestamp(timestamp: &str) -> String {
    let trimmed = timestamp.trim();

    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)));

    parsed.map_or_else(
        |_| INVALID_DATE.to_string(),
        |dt| dt.format("%b %-d, %Y %H:%M").to_string(),
    )
}

/// Cuts `text` to `max_len` characters and appends `"..."` when it was longer.
///
/// Absent text becomes the empty string.
///
/// ```rust
/// use pollution_tracker::ui::format::truncate;
///
/// assert_eq!(truncate("Delhi", 10), "Delhi");
/// assert_eq!(truncate("Smog season", 4), "Smog...");
/// assert_eq!(truncate(None, 4), "");
/// ```
#[must_use]
pub fn truncate<'a>(text: impl Into<Option<&'a str>>, max_len: usize) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };

    match text.char_indices().nth(max_len) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// AQI as the backend sent it: whole values without a decimal point, fractional
/// values as is. A missing value shows as `0`.
///
/// ```rust
/// use pollution_tracker::ui::format::format_aqi;
///
/// assert_eq!(format_aqi(Some(180.0)), "180");
/// assert_eq!(format_aqi(Some(42.7)), "42.7");
/// assert_eq!(format_aqi(None), "0");
/// ```
#[must_use]
pub fn format_aqi(value: Option<f64>) -> String {
    value.unwrap_or(0.0).to_string()
}

/// `"28.6139°N, 77.2090°E"`, or `None` unless both coordinates are present.
#[must_use]
pub fn format_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Option<String> {
    let (lat, lon) = (latitude?, longitude?);
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lon < 0.0 { 'W' } else { 'E' };
    Some(format!("{:.4}°{ns}, {:.4}°{ew}", lat.abs(), lon.abs()))
}

/// Concentration with two decimals, or `"N/A"` when not measured.
#[must_use]
pub fn format_pollutant(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

/// Number of filled cells in a `width`-cell bar for a source share.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn impact_bar_cells(percentage: f64, width: usize) -> usize {
    if percentage.is_nan() {
        return 0;
    }
    let share = percentage.clamp(0.0, 100.0) / 100.0;
    ((share * width as f64).round() as usize).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_colors() {
        assert_eq!(level_color(Some(&AqiLevel::Good)), "#2ecc71");
        assert_eq!(level_color(Some(&AqiLevel::Unhealthy)), "#c0392b");
        assert_eq!(level_color(Some(&AqiLevel::Hazardous)), "#4b0000");
        assert_eq!(level_color(Some(&AqiLevel::Other("Severe".into()))), FALLBACK_COLOR);
        assert_eq!(level_color(None), FALLBACK_COLOR);
    }

    #[test]
    fn level_descriptions() {
        assert_eq!(
            level_description(Some(&AqiLevel::UnhealthyForSensitiveGroups)),
            "Sensitive groups should take precautions"
        );
        assert_eq!(level_description(None), "Check air quality");
    }

    #[test]
    fn flags() {
        assert_eq!(country_flag(Some("India")), "🇮🇳");
        assert_eq!(country_flag(Some("South Korea")), "🇰🇷");
        assert_eq!(country_flag(Some("Atlantis")), "🌍");
        assert_eq!(country_flag(None), "🌍");
    }

    #[test]
    fn impact_colors() {
        assert_eq!(impact_color(&Impact::High), "#e74c3c");
        assert_eq!(impact_color(&Impact::Low), "#2ecc71");
        assert_eq!(impact_color(&Impact::Other("extreme".into())), FALLBACK_COLOR);
        assert_eq!(impact_color(&Impact::Unknown), FALLBACK_COLOR);
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp("2024-01-15T10:30:00Z"), "Jan 15, 2024 10:30");
        assert_eq!(format_timestamp("2024-01-15T12:30:00+02:00"), "Jan 15, 2024 10:30");
        assert_eq!(format_timestamp("2024-03-05T08:05:09.123456"), "Mar 5, 2024 08:05");
        assert_eq!(format_timestamp("2024-12-01"), "Dec 1, 2024 00:00");
        assert_eq!(format_timestamp("yesterday"), INVALID_DATE);
        assert_eq!(format_timestamp(""), INVALID_DATE);
    }

    #[test]
    fn truncation_is_char_based() {
        let long = "a".repeat(100);
        let out = truncate(long.as_str(), 80);
        assert_eq!(out.chars().count(), 83);
        assert!(out.ends_with("..."));

        assert_eq!(truncate("a".repeat(60).as_str(), 60), "a".repeat(60));
        assert_eq!(truncate("µg/m³ µg/m³", 5), "µg/m³...");
        assert_eq!(truncate(Some("abc"), 0), "...");
    }

    #[test]
    fn pollutants() {
        assert_eq!(format_pollutant(Some(120.4)), "120.40");
        assert_eq!(format_pollutant(Some(0.0)), "0.00");
        assert_eq!(format_pollutant(None), "N/A");
    }

    #[test]
    fn aqi_value() {
        assert_eq!(format_aqi(Some(180.0)), "180");
        assert_eq!(format_aqi(Some(0.0)), "0");
        assert_eq!(format_aqi(Some(42.7)), "42.7");
        assert_eq!(format_aqi(None), "0");
    }

    #[test]
    fn coordinates() {
        assert_eq!(
            format_coordinates(Some(28.6139), Some(77.209)).as_deref(),
            Some("28.6139°N, 77.2090°E")
        );
        assert_eq!(
            format_coordinates(Some(-33.8688), Some(-70.5)).as_deref(),
            Some("33.8688°S, 70.5000°W")
        );
        assert_eq!(format_coordinates(Some(1.0), None), None);
        assert_eq!(format_coordinates(None, None), None);
    }

    #[test]
    fn bar_cells_clamp() {
        assert_eq!(impact_bar_cells(50.0, 20), 10);
        assert_eq!(impact_bar_cells(150.0, 20), 20);
        assert_eq!(impact_bar_cells(-5.0, 20), 0);
        assert_eq!(impact_bar_cells(f64::NAN, 20), 0);
    }
}
