//! Rounding policy shared by every derived value.
//!
//! Integer fields round half away from zero (`f64::round`). Currency rounds
//! to cents with the same rule.

/// Round to the nearest integer, halves away from zero.
pub fn round_int(value: f64) -> i32 {
    value.round() as i32
}

/// Round a currency amount to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_int_halves_away_from_zero() {
        assert_eq!(round_int(2.5), 3);
        assert_eq!(round_int(-2.5), -3);
        assert_eq!(round_int(467.75), 468);
        assert_eq!(round_int(91.39), 91);
    }

    #[test]
    fn test_round2() {
        assert!((round2(50.0 / 7.0) - 7.14).abs() < 1e-9);
        assert!((round2(1.005 * 1000.0) - 1005.0).abs() < 1e-9);
        assert_eq!(round2(0.0), 0.0);
    }
}
