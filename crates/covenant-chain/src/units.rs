//! Decimal string <-> base-unit conversion for CVT amounts.
//!
//! CVT carries 18 decimals, so base-unit values overflow `u64` as soon as
//! a user types "19". Everything here runs on `U256` with checked math.
//! No f64 anywhere in the pipeline.

use alloy::primitives::U256;

use crate::error::CovenantError;

/// Parse a human-readable decimal amount ("25", "12.5") into base units.
///
/// Integer-only parsing: split on the decimal point and compute from the
/// parts. Fractional digits beyond `decimals` are truncated. Signs,
/// exponents, and anything else non-digit are rejected.
pub fn parse_amount(input: &str, decimals: u32) -> Result<U256, CovenantError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CovenantError::InvalidAmount("no numeric content".to_string()));
    }

    let (integer_part, fractional_part) = match trimmed.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (trimmed, ""),
    };

    if integer_part.is_empty() && fractional_part.is_empty() {
        return Err(CovenantError::InvalidAmount(format!(
            "'{trimmed}': no numeric content"
        )));
    }
    if !integer_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(CovenantError::InvalidAmount(format!(
            "'{trimmed}': integer part must be digits"
        )));
    }
    if !fractional_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(CovenantError::InvalidAmount(format!(
            "'{trimmed}': fractional part must be digits"
        )));
    }

    let integer = if integer_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(integer_part, 10).map_err(|e| {
            CovenantError::InvalidAmount(format!("'{trimmed}': integer part: {e}"))
        })?
    };

    // Truncate the fraction to `decimals` digits, then scale what is left
    // up to a full base-unit value.
    let frac_str = if fractional_part.len() > decimals as usize {
        &fractional_part[..decimals as usize]
    } else {
        fractional_part
    };
    let fractional = if frac_str.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(frac_str, 10).map_err(|e| {
            CovenantError::InvalidAmount(format!("'{trimmed}': fractional part: {e}"))
        })?
    };

    let scale = pow10(decimals);
    let frac_scale = pow10(decimals - frac_str.len() as u32);

    integer
        .checked_mul(scale)
        .and_then(|base| fractional.checked_mul(frac_scale).and_then(|f| base.checked_add(f)))
        .ok_or_else(|| CovenantError::InvalidAmount(format!("'{trimmed}': amount overflows")))
}

/// Render base units as a decimal string with trailing zeros trimmed.
///
/// The output is canonical: `parse_amount(format_units(v, d), d) == v`,
/// and whole amounts come back without a decimal point.
pub fn format_units(value: U256, decimals: u32) -> String {
    let scale = pow10(decimals);
    let whole = value / scale;
    let frac = value % scale;

    if frac.is_zero() {
        return whole.to_string();
    }

    let mut frac_str = frac.to_string();
    while frac_str.len() < decimals as usize {
        frac_str.insert(0, '0');
    }
    let trimmed = frac_str.trim_end_matches('0');
    format!("{whole}.{trimmed}")
}

fn pow10(exp: u32) -> U256 {
    // 10^77 < 2^256, and decimals never exceed 18 here.
    U256::from(10).pow(U256::from(exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOKEN_DECIMALS;

    fn base(s: &str) -> U256 {
        U256::from_str_radix(s, 10).unwrap()
    }

    #[test]
    fn test_parse_whole_amount() {
        let amount = parse_amount("25", TOKEN_DECIMALS).unwrap();
        assert_eq!(amount, base("25000000000000000000"));
    }

    #[test]
    fn test_parse_fractional_amount() {
        let amount = parse_amount("12.5", TOKEN_DECIMALS).unwrap();
        assert_eq!(amount, base("12500000000000000000"));
    }

    #[test]
    fn test_parse_exceeds_u64() {
        // 19 CVT in base units is bigger than u64::MAX.
        let amount = parse_amount("19", TOKEN_DECIMALS).unwrap();
        assert!(amount > U256::from(u64::MAX));
    }

    #[test]
    fn test_parse_smallest_unit() {
        let amount = parse_amount("0.000000000000000001", TOKEN_DECIMALS).unwrap();
        assert_eq!(amount, U256::from(1));
    }

    #[test]
    fn test_parse_truncates_beyond_decimals() {
        // 19th fractional digit is dropped, not rounded.
        let amount = parse_amount("0.0000000000000000019", TOKEN_DECIMALS).unwrap();
        assert_eq!(amount, U256::from(1));
    }

    #[test]
    fn test_parse_bare_point_forms() {
        assert_eq!(parse_amount("5.", TOKEN_DECIMALS).unwrap(), base("5000000000000000000"));
        assert_eq!(parse_amount(".5", TOKEN_DECIMALS).unwrap(), base("500000000000000000"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let amount = parse_amount("  3.25  ", TOKEN_DECIMALS).unwrap();
        assert_eq!(amount, base("3250000000000000000"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_amount("", TOKEN_DECIMALS).is_err());
        assert!(parse_amount("   ", TOKEN_DECIMALS).is_err());
        assert!(parse_amount(".", TOKEN_DECIMALS).is_err());
        assert!(parse_amount("abc", TOKEN_DECIMALS).is_err());
        assert!(parse_amount("1.2.3", TOKEN_DECIMALS).is_err());
        assert!(parse_amount("-5", TOKEN_DECIMALS).is_err());
        assert!(parse_amount("1e18", TOKEN_DECIMALS).is_err());
        assert!(parse_amount("12 5", TOKEN_DECIMALS).is_err());
    }

    #[test]
    fn test_parse_overflow_fails() {
        // 10^78 overflows U256 once scaled by 10^18.
        let huge = "9".repeat(78);
        assert!(parse_amount(&huge, TOKEN_DECIMALS).is_err());
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_units(base("12500000000000000000"), TOKEN_DECIMALS), "12.5");
        assert_eq!(format_units(base("25000000000000000000"), TOKEN_DECIMALS), "25");
        assert_eq!(format_units(U256::from(1), TOKEN_DECIMALS), "0.000000000000000001");
        assert_eq!(format_units(U256::ZERO, TOKEN_DECIMALS), "0");
    }

    #[test]
    fn test_round_trip_canonical() {
        for s in ["1", "0.1", "123456.789", "0.000000000000000042", "99999999"] {
            let parsed = parse_amount(s, TOKEN_DECIMALS).unwrap();
            assert_eq!(format_units(parsed, TOKEN_DECIMALS), s);
            assert_eq!(parse_amount(&format_units(parsed, TOKEN_DECIMALS), TOKEN_DECIMALS).unwrap(), parsed);
        }
    }
}
