//! Number formatting helpers for money columns

/// Formats a number with `decimals` places and `separator` between thousands
///
/// # Examples
///
/// ```
/// use merch_frontend::shared::components::table::format_number;
/// assert_eq!(format_number(1234.567, 2, ","), "1,234.57");
/// ```
pub fn format_number(value: f64, decimals: usize, separator: &str) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }

    // -0 after rounding is printed as 0
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a whole-unit money value with a currency prefix
///
/// # Examples
///
/// ```
/// use merch_frontend::shared::components::table::format_currency;
/// assert_eq!(format_currency(1234567.0, "$", ","), "$1,234,567");
/// assert_eq!(format_currency(-30.0, "$", ","), "-$30");
/// ```
pub fn format_currency(value: f64, prefix: &str, separator: &str) -> String {
    let number = format_number(value, 0, separator);
    match number.strip_prefix('-') {
        Some(abs) => format!("-{}{}", prefix, abs),
        None => format!("{}{}", prefix, number),
    }
}

/// "value / expected" with both sides formatted as currency
pub fn format_currency_pair(value: f64, expected: f64, prefix: &str, separator: &str) -> String {
    format!(
        "{} / {}",
        format_currency(value, prefix, separator),
        format_currency(expected, prefix, separator)
    )
}

/// Reduces what the user typed into a currency input to a plain integer string.
/// The prefix and group separators are removed first, then anything after a
/// decimal point is dropped. A `.` only counts as a decimal point when it is
/// not the group separator itself. A leading minus is kept.
pub fn clean_currency_input(raw: &str, prefix: &str, separator: &str) -> String {
    let mut text = raw.trim();
    let negative = text.starts_with('-');
    if negative {
        text = &text[1..];
    }
    if !prefix.is_empty() {
        text = text.strip_prefix(prefix).unwrap_or(text);
    }

    let ungrouped = if separator.is_empty() {
        text.to_string()
    } else {
        text.replace(separator, "")
    };
    let integer_part = if separator == "." {
        ungrouped.as_str()
    } else {
        ungrouped.split('.').next().unwrap_or_default()
    };

    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    if negative && !digits.is_empty() {
        format!("-{}", digits)
    } else {
        digits
    }
}
