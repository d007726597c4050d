//! Numeric formatting for attribute values and path data.
//!
//! Two rules cover the whole document: ordinary coordinates use C's `%.6g`
//! (six significant digits, trailing zeros trimmed), while the panel's own
//! width, height and viewBox use fixed two-decimal millimeters.

/// Significant digits used for every float attribute and path coordinate.
pub const SIG_FIGS: usize = 6;

/// Format a number like C's `%.6g`.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, SIG_FIGS)
}

/// Format with two fixed decimals, as used for the panel dimensions.
pub fn fmt_fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// Format a number like C's `%.{sig_figs}g`.
///
/// The value is rounded once to `sig_figs` significant digits; the decimal
/// exponent of that rounded value picks between fixed and exponent notation,
/// so `999999.7` becomes `1e+06` exactly as printf would produce.
pub fn fmt_num_precision(value: f64, sig_figs: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let sig_figs = sig_figs.max(1);
    let sci = format!("{:.*e}", sig_figs - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= sig_figs as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (sig_figs as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_printf_g_for_typical_coordinates() {
        let cases = [
            (15.24, "15.24"),
            (128.5, "128.5"),
            (5.08, "5.08"),
            (1.0, "1"),
            (-2.5, "-2.5"),
            (0.1 + 0.2, "0.3"),
            (3.14159265, "3.14159"),
            (123456.7, "123457"),
            (12.3456789, "12.3457"),
            (0.000123456, "0.000123456"),
        ];
        for (value, expected) in cases {
            assert_eq!(fmt_num(value), expected, "formatting {value}");
        }
    }

    #[test]
    fn switches_to_exponent_form_like_printf() {
        assert_eq!(fmt_num(1.5e-5), "1.5e-05");
        assert_eq!(fmt_num(-2.0e-7), "-2e-07");
        assert_eq!(fmt_num(1234567.0), "1.23457e+06");
        assert_eq!(fmt_num(999999.7), "1e+06");
    }

    #[test]
    fn rounding_carry_is_trimmed() {
        assert_eq!(fmt_num(9.9999996), "10");
        assert_eq!(fmt_num(0.99999999), "1");
    }

    #[test]
    fn zero_is_plain() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn fixed_two_decimals_for_panel_dimensions() {
        assert_eq!(fmt_fixed2(5.08 * 3.0), "15.24");
        assert_eq!(fmt_fixed2(128.5), "128.50");
        assert_eq!(fmt_fixed2(5.08 * 12.0), "60.96");
    }
}
