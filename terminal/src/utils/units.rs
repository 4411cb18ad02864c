//! Conversion between human decimal amounts and base-unit integer strings.
//!
//! Pure string arithmetic: amounts never pass through floating point and have
//! no upper bound, so an 18-decimal token amount survives unchanged.

use crate::core::error::{AppError, Result};

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// `"1.5"` with 6 decimals -> `"1500000"`.
///
/// Accepts `.` or `,` as the decimal separator. Fraction digits beyond
/// `decimals` are truncated, not rounded.
pub fn parse_units(amount: &str, decimals: u32) -> Result<String> {
    let normalized = amount.trim().replace(',', ".");
    let (int_part, frac_part) = match normalized.split_once('.') {
        Some((i, f)) => (i, f),
        None => (normalized.as_str(), ""),
    };

    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part) {
        return Err(AppError::InvalidAmount(amount.to_string()));
    }

    let decimals = decimals as usize;
    let mut digits = String::with_capacity(int_part.len() + decimals);
    digits.push_str(int_part);
    let kept = &frac_part[..frac_part.len().min(decimals)];
    digits.push_str(kept);
    digits.extend(std::iter::repeat('0').take(decimals - kept.len()));

    let trimmed = digits.trim_start_matches('0');
    Ok(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
}

/// `"1000000000000000000"` with 18 decimals -> `"1"`.
///
/// Trailing fractional zeros are dropped, as is a bare decimal point.
pub fn format_units(base_units: &str, decimals: u32) -> Result<String> {
    let raw = base_units.trim();
    if raw.is_empty() || !is_digits(raw) {
        return Err(AppError::InvalidAmount(base_units.to_string()));
    }

    let digits = raw.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let decimals = decimals as usize;
    if decimals == 0 {
        return Ok(digits.to_string());
    }

    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        Ok(int_part.to_string())
    } else {
        Ok(format!("{}.{}", int_part, frac_part))
    }
}

/// True when the base-unit string is a well-formed zero.
pub fn is_zero(base_units: &str) -> bool {
    !base_units.is_empty() && base_units.bytes().all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1.5", 6).unwrap(), "1500000");
        assert_eq!(parse_units("1", 18).unwrap(), "1000000000000000000");
        assert_eq!(parse_units(".25", 6).unwrap(), "250000");
        assert_eq!(parse_units("2.", 6).unwrap(), "2000000");
        assert_eq!(parse_units("0", 18).unwrap(), "0");
        assert_eq!(parse_units("007.10", 2).unwrap(), "710");
    }

    #[test]
    fn test_parse_units_comma_separator() {
        assert_eq!(parse_units("1,5", 6).unwrap(), "1500000");
    }

    #[test]
    fn test_parse_units_truncates_excess_precision() {
        assert_eq!(parse_units("1.1234567", 6).unwrap(), "1123456");
        assert_eq!(parse_units("0.0000001", 6).unwrap(), "0");
    }

    #[test]
    fn test_parse_units_rejects_garbage() {
        assert!(parse_units("", 6).is_err());
        assert!(parse_units(".", 6).is_err());
        assert!(parse_units("1.2.3", 6).is_err());
        assert!(parse_units("-1", 6).is_err());
        assert!(parse_units("1e5", 6).is_err());
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units("1000000000000000000", 18).unwrap(), "1");
        assert_eq!(format_units("1500000", 6).unwrap(), "1.5");
        assert_eq!(format_units("1212884990", 6).unwrap(), "1212.88499");
        assert_eq!(format_units("1", 18).unwrap(), "0.000000000000000001");
        assert_eq!(format_units("0", 6).unwrap(), "0");
        assert_eq!(format_units("42", 0).unwrap(), "42");
    }

    #[test]
    fn test_format_units_keeps_large_values_exact() {
        assert_eq!(
            format_units("123456789012345678901234567890", 18).unwrap(),
            "123456789012.34567890123456789"
        );
    }

    #[test]
    fn test_format_units_rejects_non_digits() {
        assert!(format_units("", 6).is_err());
        assert!(format_units("1.5", 6).is_err());
        assert!(format_units("0x10", 6).is_err());
    }

    #[test]
    fn test_human_amount_survives_conversion() {
        for (amount, decimals) in [("1.5", 6), ("0.000001", 6), ("1234.5678", 18), ("3", 8)] {
            let base = parse_units(amount, decimals).unwrap();
            assert_eq!(format_units(&base, decimals).unwrap(), amount);
        }
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero("0"));
        assert!(is_zero("000"));
        assert!(!is_zero("10"));
        assert!(!is_zero(""));
    }
}
