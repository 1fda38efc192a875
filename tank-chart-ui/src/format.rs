//! On-screen number formatting.
//!
//! Capacities are shown as whole cubic meters: the value is truncated toward
//! zero and grouped in thousands.

/// Truncate to an integer and group thousands with `separator`.
///
/// ```rust
/// use tank_chart_ui::format::group_thousands;
///
/// assert_eq!(group_thousands(1234567.9, ','), "1,234,567");
/// assert_eq!(group_thousands(1234567.9, '.'), "1.234.567");
/// ```
pub fn group_thousands(value: f64, separator: char) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// State-wide headline style: comma thousands.
pub fn headline(value: f64) -> String {
    group_thousands(value, ',')
}

/// Municipality detail style: period thousands (pt-BR).
pub fn detail(value: f64) -> String {
    group_thousands(value, '.')
}
