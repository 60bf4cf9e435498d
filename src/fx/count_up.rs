//! Animated numeric count-up for stat values like `"95%"` or `"$14,000"`.

use leptos::prelude::*;

/// A display string split around its numeric core.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStat {
    pub prefix: String,
    pub target: f64,
    pub suffix: String,
    pub decimals: usize,
}

/// Scans for the first numeric substring: an optional leading sign, digits
/// with thousands separators, and an optional decimal part. Returns `None`
/// when the string carries no digits, in which case the caller shows the raw
/// string unanimated.
pub fn parse_stat(value: &str) -> Option<ParsedStat> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let digit_at = bytes.iter().position(|b| b.is_ascii_digit())?;

    // Include a sign directly before the first digit.
    let start = if digit_at > 0 && bytes[digit_at - 1] == b'-' {
        digit_at - 1
    } else {
        digit_at
    };

    let mut end = digit_at;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b',') {
        end += 1;
    }
    let mut decimals = 0;
    if end < bytes.len() && bytes[end] == b'.' && bytes.get(end + 1).is_some_and(u8::is_ascii_digit)
    {
        end += 1;
        let fraction_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        decimals = end - fraction_start;
    }

    let numeric: String = trimmed[start..end].chars().filter(|c| *c != ',').collect();
    let target = numeric.parse::<f64>().ok()?;

    Some(ParsedStat {
        prefix: trimmed[..start].to_string(),
        target,
        suffix: trimmed[end..].to_string(),
        decimals,
    })
}

/// Formats an intermediate value with the parsed precision, en-US thousands
/// grouping, and the original prefix/suffix reapplied.
pub fn format_stat(parsed: &ParsedStat, value: f64) -> String {
    let rounded = {
        let factor = 10f64.powi(parsed.decimals as i32);
        (value * factor).round() / factor
    };
    let negative = rounded < 0.0;
    let magnitude = rounded.abs();

    let integer_part = magnitude.trunc() as u64;
    let mut grouped = String::new();
    let digits = integer_part.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut number = String::new();
    if negative {
        number.push('-');
    }
    number.push_str(&grouped);
    if parsed.decimals > 0 {
        let fraction = (magnitude.fract() * 10f64.powi(parsed.decimals as i32)).round() as u64;
        number.push('.');
        number.push_str(&format!("{fraction:0width$}", width = parsed.decimals));
    }

    format!("{}{}{}", parsed.prefix, number, parsed.suffix)
}

/// Duration of the 0 → target sweep, milliseconds.
pub const COUNT_UP_MS: f64 = 2200.0;

fn frame_now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Drives `set_display` from 0 to the parsed target on the frame callback,
/// linearly over `duration_ms`. The loop ends at the target, or silently as
/// soon as the receiving signal has been disposed.
pub fn run_count_up(parsed: ParsedStat, duration_ms: f64, set_display: WriteSignal<String>) {
    frame_step(frame_now_ms(), duration_ms, parsed, set_display);
}

fn frame_step(started_at: f64, duration_ms: f64, parsed: ParsedStat, set_display: WriteSignal<String>) {
    request_animation_frame(move || {
        let progress = ((frame_now_ms() - started_at) / duration_ms).min(1.0);
        let text = format_stat(&parsed, parsed.target * progress);
        if set_display.try_set(text).is_some() {
            return;
        }
        if progress < 1.0 {
            frame_step(started_at, duration_ms, parsed, set_display);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage() {
        assert_eq!(
            parse_stat("95%"),
            Some(ParsedStat {
                prefix: String::new(),
                target: 95.0,
                suffix: "%".to_string(),
                decimals: 0,
            })
        );
    }

    #[test]
    fn test_parse_currency_with_separator() {
        assert_eq!(
            parse_stat("$14,000"),
            Some(ParsedStat {
                prefix: "$".to_string(),
                target: 14_000.0,
                suffix: String::new(),
                decimals: 0,
            })
        );
    }

    #[test]
    fn test_parse_decimal() {
        let parsed = parse_stat("4.75x").expect("decimal stat");
        assert_eq!(parsed.target, 4.75);
        assert_eq!(parsed.decimals, 2);
        assert_eq!(parsed.suffix, "x");
    }

    #[test]
    fn test_parse_negative() {
        let parsed = parse_stat("-12%").expect("negative stat");
        assert_eq!(parsed.prefix, "");
        assert_eq!(parsed.target, -12.0);
        assert_eq!(parsed.suffix, "%");
    }

    #[test]
    fn test_parse_no_digits() {
        assert_eq!(parse_stat("Custom"), None);
        assert_eq!(parse_stat(""), None);
    }

    #[test]
    fn test_format_grouping() {
        let parsed = parse_stat("$14,000").expect("stat");
        assert_eq!(format_stat(&parsed, 0.0), "$0");
        assert_eq!(format_stat(&parsed, 1_234.0), "$1,234");
        assert_eq!(format_stat(&parsed, 14_000.0), "$14,000");
        assert_eq!(format_stat(&parsed, 1_234_567.0), "$1,234,567");
    }

    #[test]
    fn test_format_decimals_padded() {
        let parsed = parse_stat("4.75x").expect("stat");
        assert_eq!(format_stat(&parsed, 4.75), "4.75x");
        assert_eq!(format_stat(&parsed, 4.7), "4.70x");
        assert_eq!(format_stat(&parsed, 0.0), "0.00x");
    }

    #[test]
    fn test_format_rounds_intermediate_values() {
        let parsed = parse_stat("95%").expect("stat");
        assert_eq!(format_stat(&parsed, 94.6), "95%");
        assert_eq!(format_stat(&parsed, 94.4), "94%");
    }
}
