//! Display formatting for market numbers.
//!
//! These helpers reproduce the dashboard's number rendering exactly:
//! magnitude suffixes use strict greater-than brackets (so exactly 1e9
//! formats as "1000.00M", not "1.00B"), grouped numbers trim trailing
//! fraction zeros, and missing values render as a dash.

/// Placeholder for values the backend did not report.
pub const DASH: &str = "—";

/// Suffix a large value into T/B/M/K form with two decimals.
///
/// Brackets are strict: a value qualifies for a suffix only when it exceeds
/// the bracket's lower bound. Values of 1000 and below fall through to
/// grouped literal form.
pub fn format_magnitude(value: Option<f64>) -> String {
    let Some(n) = value else {
        return DASH.to_string();
    };

    if n > 1e12 {
        format!("{:.2}T", n / 1e12)
    } else if n > 1e9 {
        format!("{:.2}B", n / 1e9)
    } else if n > 1e6 {
        format!("{:.2}M", n / 1e6)
    } else if n > 1e3 {
        format!("{:.2}K", n / 1e3)
    } else {
        format_grouped(n, 3)
    }
}

/// A price with thousands grouping and up to `max_decimals` fraction
/// digits, or a dash when absent.
pub fn format_price(value: Option<f64>, max_decimals: usize) -> String {
    match value {
        Some(n) => format_grouped(n, max_decimals),
        None => DASH.to_string(),
    }
}

/// A percent change with precision that follows its size: two decimals at
/// or above one percent in magnitude, four below.
pub fn format_change(value: Option<f64>) -> String {
    let Some(n) = value else {
        return DASH.to_string();
    };

    if n.abs() >= 1.0 {
        format!("{:.2}", n)
    } else {
        format!("{:.4}", n)
    }
}

/// A percentage at fixed two decimals with the `%` sign, dash when absent.
pub fn format_percent2(value: Option<f64>) -> String {
    match value {
        Some(n) => format!("{:.2}%", n),
        None => DASH.to_string(),
    }
}

/// Locale-style number: thousands separators, at most `max_decimals`
/// fraction digits, trailing fraction zeros trimmed.
pub fn format_grouped(n: f64, max_decimals: usize) -> String {
    let rounded = format!("{:.*}", max_decimals, n.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let mut out = String::new();
    if n < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
