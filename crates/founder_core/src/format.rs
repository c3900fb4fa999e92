//! Display formatting for currency amounts.

const RUPEE: char = '₹';

/// Rounds to the nearest integer with halves going toward positive infinity.
///
/// `-12.5` becomes `-12` and `12.5` becomes `13`; every displayed figure and
/// percentage uses this rule.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Renders an amount as whole rupees with comma grouping by thousands.
///
/// `1960300.4` becomes `₹1,960,300`; negatives keep the sign after the
/// symbol (`₹-1,000`).
pub fn format_inr(value: f64) -> String {
    let rounded = round_half_up(value);
    let digits = format!("{}", rounded.abs() as u64);
    let negative = rounded < 0.0;

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    grouped.push(RUPEE);
    if negative {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_inr, round_half_up};

    #[test]
    fn groups_every_three_digits() {
        assert_eq!(format_inr(1_960_300.0), "₹1,960,300");
        assert_eq!(format_inr(45_560_000.0), "₹45,560,000");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(0.0), "₹0");
    }

    #[test]
    fn rounds_to_whole_rupees() {
        assert_eq!(format_inr(1499.5), "₹1,500");
        assert_eq!(format_inr(12.4), "₹12");
    }

    #[test]
    fn negatives_keep_sign_after_symbol() {
        assert_eq!(format_inr(-1000.0), "₹-1,000");
        assert_eq!(format_inr(-0.2), "₹0");
    }

    #[test]
    fn negative_halves_round_toward_zero() {
        assert_eq!(format_inr(-1000.5), "₹-1,000");
        assert_eq!(format_inr(-0.5), "₹0");
        assert_eq!(format_inr(-1000.6), "₹-1,001");
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }
}
