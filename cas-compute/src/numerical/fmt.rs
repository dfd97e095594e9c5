//! Formatting of numbers for display.
//!
//! Numbers are written the way a JavaScript number converts to a string: integers have no
//! fractional part, the shortest digit sequence that round-trips is used, and very large or very
//! small magnitudes switch to exponent notation (`1e+21`, `1e-7`).

/// Formats the given number for display.
///
/// ```
/// use cas_compute::numerical::fmt::fmt_number;
///
/// assert_eq!(fmt_number(4.0), "4");
/// assert_eq!(fmt_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(fmt_number(1e21), "1e+21");
/// ```
pub fn fmt_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // includes negative zero
        return "0".to_string();
    }

    // `{:e}` produces the shortest round-trip digits, e.g. `1.2345e3`
    let scientific = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };

    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;

    // position of the decimal point relative to the start of `digits`
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let sign = if exponent >= 0 { "+" } else { "-" };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    };

    if n < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(fmt_number(4.0), "4");
        assert_eq!(fmt_number(-12.0), "-12");
        assert_eq!(fmt_number(1200.0), "1200");
        assert_eq!(fmt_number(-0.0), "0");
    }

    #[test]
    fn fractions() {
        assert_eq!(fmt_number(0.5), "0.5");
        assert_eq!(fmt_number(-2.25), "-2.25");
        assert_eq!(fmt_number(123.456), "123.456");
        assert_eq!(fmt_number(0.000001), "0.000001");
    }

    #[test]
    fn large_and_small() {
        assert_eq!(fmt_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(fmt_number(1e21), "1e+21");
        assert_eq!(fmt_number(1.5e300), "1.5e+300");
        assert_eq!(fmt_number(1e-7), "1e-7");
        assert_eq!(fmt_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn special_values() {
        assert_eq!(fmt_number(f64::NAN), "NaN");
        assert_eq!(fmt_number(f64::INFINITY), "Infinity");
        assert_eq!(fmt_number(f64::NEG_INFINITY), "-Infinity");
    }
}
