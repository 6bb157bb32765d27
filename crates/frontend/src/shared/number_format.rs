//! Formatting of prices for display

/// Taka sign used in front of every price
pub const CURRENCY_SIGN: &str = "৳";

/// Formats a number with a comma every three digits and at most two
/// decimals; trailing zero decimals are dropped
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_amount;
/// assert_eq!(format_amount(1234567.5), "1,234,567.5");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Insert a comma every 3 digits from the end of the integer part
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0" after rounding is just zero
    let sign = if grouped == "0" && decimal_part.is_empty() { "" } else { sign };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Price with the currency sign, e.g. "৳15,000"
pub fn format_price(value: f64) -> String {
    format!("{}{}", CURRENCY_SIGN, format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(15000.0), "15,000");
        assert_eq!(format_amount(1234567.89), "1,234,567.89");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(1000.5), "1,000.5");
        assert_eq!(format_amount(-1234.56), "-1,234.56");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(60000.0), "৳60,000");
        assert_eq!(format_price(45000.0), "৳45,000");
    }
}
