//! Deterministic number rendering for monetary display
//!
//! Rendering never consults the process locale: a given input produces the
//! same string on every machine. The two styles here correspond to the two
//! documented currency display styles.

/// Render with exactly two decimal places and no grouping, e.g. `100.00`
pub fn fixed2(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Round to the nearest integer and insert comma thousands separators,
/// e.g. `83000.4` becomes `83,000`
pub fn grouped(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed2() {
        assert_eq!(fixed2(100.0), "100.00");
        assert_eq!(fixed2(85.0), "85.00");
        assert_eq!(fixed2(0.5), "0.50");
        assert_eq!(fixed2(1234.567), "1234.57");
    }

    #[test]
    fn test_grouped_inserts_separators() {
        assert_eq!(grouped(83000.0), "83,000");
        assert_eq!(grouped(1234567.0), "1,234,567");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(0.0), "0");
    }

    #[test]
    fn test_grouped_rounds_to_integer() {
        assert_eq!(grouped(83000.4), "83,000");
        assert_eq!(grouped(999.5), "1,000");
    }

    #[test]
    fn test_grouped_negative() {
        assert_eq!(grouped(-1234.0), "-1,234");
    }
}
