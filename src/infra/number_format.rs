// ============================================================
// Layer 6 — Number Format
// ============================================================
// Converts between text typed at the console and f64, with the
// same rules on every machine: '.' is always the decimal
// separator and ',' is never accepted, whatever the system
// locale says.
//
// Accepted input (after trimming spaces and \t..\r at the ends):
//   12   -3.5   +.25   5.   1e3   2.5E-4
//   Infinity   -Infinity   NaN      (case-insensitive)
//
// Output rules:
//   - shortest text that round-trips to the same f64
//   - fixed notation while the decimal exponent is in -5 < e < 15
//   - scientific otherwise, as 1.5E+20 / 1E-07
//   - NaN, Infinity, -Infinity for the special values

use crate::domain::error::CalcError;

/// Exponents in this open range print without scientific notation
const FIXED_MIN_EXCLUSIVE: i32 = -5;
const FIXED_MAX_EXCLUSIVE: i32 = 15;

/// Parse one operand typed by the user.
pub fn parse_number(input: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidNumericInput {
        input: input.to_string(),
    };

    // Only ASCII blanks and \t..\r count as padding; U+00A0 and other
    // Unicode spaces make the input invalid
    let text = input.trim_matches(|c: char| matches!(c, '\t'..='\r' | ' '));

    // Split off the sign so the named symbols can be matched alone
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if body.eq_ignore_ascii_case("infinity") {
        return Ok(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }
    if body.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }

    // Rust's own parser also takes "inf" and "nan" spellings, so
    // restrict the alphabet before handing the text over
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-');
    if body.is_empty() || !body.chars().all(allowed) {
        return Err(invalid());
    }

    text.parse::<f64>().map_err(|_| invalid())
}

/// Render a result the way the calculator prints it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // LowerExp gives the shortest round-trip digits, e.g. "1.2345e20"
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent > FIXED_MIN_EXCLUSIVE && exponent < FIXED_MAX_EXCLUSIVE {
        // Display never switches to exponent form for f64
        return value.to_string();
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:02}", exponent.abs())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimals() {
        assert_eq!(parse_number("3.5"), Ok(3.5));
        assert_eq!(parse_number("-12"), Ok(-12.0));
        assert_eq!(parse_number("+.25"), Ok(0.25));
        assert_eq!(parse_number("5."), Ok(5.0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_number("  12.5\r\n"), Ok(12.5));
        assert_eq!(parse_number("\t7 "), Ok(7.0));
    }

    #[test]
    fn test_parse_rejects_unicode_spaces() {
        for bad in ["\u{00A0}12.5", "12.5\u{2003}", "\u{FEFF}1"] {
            assert_eq!(
                parse_number(bad),
                Err(CalcError::InvalidNumericInput { input: bad.to_string() }),
                "input {bad:?} should be rejected"
            );
        }
        // Vertical tab and form feed are still padding
        assert_eq!(parse_number("\x0b3\x0c"), Ok(3.0));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_number("1e3"), Ok(1000.0));
        assert_eq!(parse_number("2.5E-4"), Ok(0.00025));
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse_number("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_number("-infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_number("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "abc", "1,5", "1.000,5", "inf", "-inf", "1..2", "e5", "3 4", "0x10", "--1"] {
            assert_eq!(
                parse_number(bad),
                Err(CalcError::InvalidNumericInput { input: bad.to_string() }),
                "input {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_integers_without_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(1024.0), "1024");
        assert_eq!(format_number(100_000_000_000_000.0), "100000000000000");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_number(1e15), "1E+15");
        assert_eq!(format_number(1.5e20), "1.5E+20");
        assert_eq!(format_number(-2e300), "-2E+300");
        assert_eq!(format_number(0.00001), "1E-05");
        assert_eq!(format_number(1.25e-7), "1.25E-07");
    }

    #[test]
    fn test_format_specials() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "-0");
    }
}
