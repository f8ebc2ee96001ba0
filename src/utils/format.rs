//! Display formatting for prices, market caps, percentages and timestamps.
//!
//! Everything here is pure. Missing or non-finite inputs never panic; they
//! render as [`PLACEHOLDER`] (or an empty string for timestamps).

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Rendered in place of any value the backend did not supply.
pub const PLACEHOLDER: &str = "-";

/// Viewer-local timestamp layout used by every table and the KPI panel.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Fixed-point text. Exact halves round away from zero: `104250.5` -> `104251`.
fn fixed(v: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (v * scale).round() / scale;
    // Avoid "-0.00" for tiny negatives
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

/// Formats a price with magnitude-dependent precision.
/// - Large (>1000): 0 decimals (1,500)
/// - Medium (1-1000): 2 decimals (42.50)
/// - Small (<1): 4 decimals (0.1234)
pub fn format_price(value: Option<f64>) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };

    let decimals = if v > 1000.0 {
        0
    } else if v >= 1.0 {
        2
    } else {
        4
    };
    group_thousands(&fixed(v, decimals))
}

/// Market cap, supply and volume: full integer value, no decimals.
pub fn format_market_cap(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => group_thousands(&fixed(v, 0)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Prefixes `$` unless the value is the placeholder.
pub fn dollars(formatted: String) -> String {
    if formatted == PLACEHOLDER {
        formatted
    } else {
        format!("${}", formatted)
    }
}

pub fn format_percent(value: Option<f64>) -> String {
    match finite(value) {
        Some(v) => format!("{}%", fixed(v, 2)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Renders a backend timestamp in the viewer's local time zone.
///
/// Missing input gives an empty string. Input that does not parse is shown
/// verbatim rather than as a bogus date.
pub fn format_local_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match parse_timestamp(raw) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format(LOCAL_TIME_FORMAT)
            .to_string(),
        None => raw.to_string(),
    }
}

/// Accepts RFC 3339 (`2025-06-01T12:00:00.123+00:00`) and offset-less ISO or
/// SQL-style datetimes, which are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Turns a display string such as `"$73,750.00"` or `"-4.2%"` back into a number.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
        .collect();

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Inserts `,` every three digits of the integer part (en-US grouping).
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    grouped.push_str(sign);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_precision_follows_magnitude() {
        assert_eq!(format_price(Some(1500.0)), "1,500");
        assert_eq!(format_price(Some(42.5)), "42.50");
        assert_eq!(format_price(Some(0.1234)), "0.1234");
        assert_eq!(format_price(Some(1000.0)), "1,000.00");
        assert_eq!(format_price(Some(1.0)), "1.00");
        assert_eq!(format_price(Some(104_321.77)), "104,322");
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_price(Some(104_250.5)), "104,251");
        assert_eq!(format_price(Some(1500.5)), "1,501");
        assert_eq!(format_price(Some(0.5)), "0.5000");
        assert_eq!(format_market_cap(Some(2.5)), "3");
        assert_eq!(format_market_cap(Some(-2.5)), "-3");
        assert_eq!(format_percent(Some(0.125)), "0.13%");
        assert_eq!(format_percent(Some(-0.001)), "0.00%");
    }

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(format_price(None), PLACEHOLDER);
        assert_eq!(format_price(Some(f64::NAN)), PLACEHOLDER);
        assert_eq!(format_market_cap(None), PLACEHOLDER);
        assert_eq!(format_percent(None), PLACEHOLDER);
    }

    #[test]
    fn market_cap_is_grouped_integer() {
        assert_eq!(format_market_cap(Some(1_234_567.0)), "1,234,567");
        assert_eq!(format_market_cap(Some(999.4)), "999");
        assert_eq!(format_market_cap(Some(-1_234_567.0)), "-1,234,567");
    }

    #[test]
    fn dollar_prefix_skips_placeholder() {
        assert_eq!(dollars(format_price(Some(42.5))), "$42.50");
        assert_eq!(dollars(format_price(None)), PLACEHOLDER);
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(Some(-3.14159)), "-3.14%");
        assert_eq!(format_percent(Some(57.0)), "57.00%");
    }

    #[test]
    fn timestamps_render_local_or_verbatim() {
        assert_eq!(format_local_timestamp(None), "");
        assert_eq!(format_local_timestamp(Some("   ")), "");
        assert_eq!(format_local_timestamp(Some("yesterday")), "yesterday");

        let raw = "2025-06-01T12:00:00.123456+00:00";
        let expected = parse_timestamp(raw)
            .map(|utc| utc.with_timezone(&Local).format(LOCAL_TIME_FORMAT).to_string());
        assert_eq!(Some(format_local_timestamp(Some(raw))), expected);
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let parsed = parse_timestamp("2025-06-01 12:00:00").map(|dt| dt.to_rfc3339());
        assert_eq!(parsed.as_deref(), Some("2025-06-01T12:00:00+00:00"));
    }

    #[test]
    fn display_strings_coerce_to_numbers() {
        assert_eq!(coerce_number("$73,750.00"), Some(73_750.0));
        assert_eq!(coerce_number(" -4.2% "), Some(-4.2));
        assert_eq!(coerce_number("N/A"), None);
        assert_eq!(coerce_number(""), None);
    }
}
