//! Number formatting helpers shared by tables, cards and chart axes

/// Formats a number with a comma thousands separator and fixed decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// `12.34` -> `"12.3%"`
pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{:.prec$}%", value, prec = decimals as usize)
}

/// Dollar amount with fixed decimals: `12.5` -> `"$12.50"`
pub fn format_currency(value: f64, decimals: u8) -> String {
    format!("${:.prec$}", value, prec = decimals as usize)
}

/// Thousands of dollars with one decimal: `123456` -> `"$123.5k"`
pub fn format_currency_k(value: f64) -> String {
    format!("${:.1}k", value / 1_000.0)
}

/// Millions of dollars with two decimals: `1234567` -> `"$1.23M"`
pub fn format_currency_m(value: f64) -> String {
    format!("${:.2}M", value / 1_000_000.0)
}

/// Whole dollars with thousands separators, used in chart tooltips
pub fn format_money(value: f64) -> String {
    format!("${}", format_number_with_decimals(value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.34, 1), "12.3%");
        assert_eq!(format_percent(87.0, 0), "87%");
        assert_eq!(format_percent(-1.5, 1), "-1.5%");
    }

    #[test]
    fn test_currency_scaling() {
        assert_eq!(format_currency_k(123_456.0), "$123.5k");
        assert_eq!(format_currency_k(50_000.0), "$50.0k");
        assert_eq!(format_currency_m(1_234_567.0), "$1.23M");
        assert_eq!(format_currency_m(450_000.0), "$0.45M");
        assert_eq!(format_currency(12.5, 2), "$12.50");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(123_456.0), "$123,456");
        assert_eq!(format_money(0.0), "$0");
    }
}
