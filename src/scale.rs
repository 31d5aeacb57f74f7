use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::model::Ingredient;

/// Multipliers offered by the scale selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    Half,
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl Scale {
    pub const ALL: [Scale; 5] = [Scale::Half, Scale::One, Scale::Two, Scale::Three, Scale::Four];

    pub fn factor(&self) -> f64 {
        self.halves() as f64 / 2.0
    }

    /// Multiplier expressed in halves, so every scale is an exact integer
    fn halves(&self) -> i128 {
        match self {
            Scale::Half => 1,
            Scale::One => 2,
            Scale::Two => 4,
            Scale::Three => 6,
            Scale::Four => 8,
        }
    }
}

impl TryFrom<f64> for Scale {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Scale::ALL
            .into_iter()
            .find(|scale| scale.factor() == value)
            .ok_or(CatalogError::InvalidScale(value))
    }
}

impl FromStr for Scale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .trim_end_matches('x')
            .parse()
            .map_err(|_| CatalogError::InvalidScale(f64::NAN))?;
        Scale::try_from(value)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Half => f.write_str("0.5"),
            other => write!(f, "{}", other.halves() / 2),
        }
    }
}

/// A quantity rounded to one decimal place, stored as a whole number of tenths.
///
/// Displays without a trailing `.0`, so 7.0 prints as `7` and 133.3 as `133.3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tenths(i128);

impl Tenths {
    /// Rounds `value × scale` half away from zero using decimal arithmetic.
    pub fn scaled(value: f64, scale: Scale) -> Self {
        match decimal_parts(value) {
            Some((mantissa, exponent)) => {
                // value × halves / 2 × 10, over 10^exponent
                let numerator = mantissa
                    .checked_mul(scale.halves() * 10)
                    .and_then(|n| Some((n, 10i128.checked_pow(exponent)?.checked_mul(2)?)));
                match numerator {
                    Some((n, d)) => Tenths(div_round_half_away(n, d)),
                    None => Tenths::from_float(value * scale.factor()),
                }
            }
            None => Tenths::from_float(value * scale.factor()),
        }
    }

    pub fn round(value: f64) -> Self {
        Tenths::scaled(value, Scale::One)
    }

    /// Only reached when the exact path overflows; saturates at the i128 range.
    fn from_float(value: f64) -> Self {
        Tenths((value * 10.0).round() as i128)
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        if abs % 10 == 0 {
            write!(f, "{}{}", sign, abs / 10)
        } else {
            write!(f, "{}{}.{}", sign, abs / 10, abs % 10)
        }
    }
}

/// Splits the shortest decimal representation of `value` into an integer
/// mantissa and a power-of-ten exponent: `1.25` becomes `(125, 2)`.
fn decimal_parts(value: f64) -> Option<(i128, u32)> {
    if !value.is_finite() {
        return None;
    }
    let text = value.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let mantissa: i128 = format!("{}{}", whole, fraction).parse().ok()?;
    let mantissa = if negative { -mantissa } else { mantissa };
    Some((mantissa, fraction.len() as u32))
}

/// `denominator` must be positive.
fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.abs() * 2 >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

/// Formats a scaled ingredient amount such as `200g (7oz)`.
///
/// Returns an empty string when the gram amount is unknown; the
/// ingredient is then shown by name only.
pub fn scale_amount(amount_g: Option<f64>, amount_oz: Option<f64>, scale: Scale) -> String {
    let Some(grams) = amount_g else {
        return String::new();
    };
    let mut amount = format!("{}g", Tenths::scaled(grams, scale));
    if let Some(ounces) = amount_oz {
        amount.push_str(&format!(" ({}oz)", Tenths::scaled(ounces, scale)));
    }
    amount
}

pub fn scale_servings(yield_servings: Option<f64>, scale: Scale) -> Option<Tenths> {
    yield_servings.map(|servings| Tenths::scaled(servings, scale))
}

impl Ingredient {
    pub fn scaled_amount(&self, scale: Scale) -> String {
        scale_amount(self.amount_g, self.amount_oz, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_amount_with_ounces() {
        assert_eq!(scale_amount(Some(100.0), Some(3.5), Scale::Two), "200g (7oz)");
    }

    #[test]
    fn test_scale_amount_without_grams_is_empty() {
        assert_eq!(scale_amount(None, None, Scale::Two), "");
        assert_eq!(scale_amount(None, Some(4.0), Scale::Three), "");
    }

    #[test]
    fn test_scale_amount_grams_only() {
        assert_eq!(scale_amount(Some(250.0), None, Scale::Half), "125g");
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        assert_eq!(scale_amount(Some(66.666), None, Scale::Two), "133.3g");
        assert_eq!(Tenths::scaled(0.1, Scale::Three).to_string(), "0.3");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(Tenths::round(1.45).to_string(), "1.5");
        assert_eq!(Tenths::round(0.05).to_string(), "0.1");
        assert_eq!(Tenths::round(-0.05).to_string(), "-0.1");
        assert_eq!(Tenths::scaled(2.25, Scale::Half).to_string(), "1.1");
    }

    #[test]
    fn test_large_amounts_keep_every_digit() {
        assert_eq!(scale_amount(Some(1e19), None, Scale::One), "10000000000000000000g");
        assert_eq!(
            scale_amount(Some(1e30), None, Scale::Four),
            format!("4{}g", "0".repeat(30))
        );
        assert_eq!(Tenths::scaled(-1e19, Scale::Half).to_string(), "-5000000000000000000");
    }

    #[test]
    fn test_scale_servings() {
        assert_eq!(scale_servings(Some(4.0), Scale::Half).map(|s| s.to_string()), Some("2".to_string()));
        assert_eq!(scale_servings(Some(3.0), Scale::Half).map(|s| s.to_string()), Some("1.5".to_string()));
        assert_eq!(scale_servings(None, Scale::Four), None);
    }

    #[test]
    fn test_scale_rejects_values_outside_set() {
        assert_eq!(Scale::try_from(2.0).unwrap(), Scale::Two);
        assert_eq!(Scale::try_from(0.5).unwrap(), Scale::Half);
        assert!(matches!(Scale::try_from(1.5), Err(CatalogError::InvalidScale(_))));
        assert!("5".parse::<Scale>().is_err());
        assert_eq!("3x".parse::<Scale>().unwrap(), Scale::Three);
    }

    #[test]
    fn test_scale_display() {
        let labels: Vec<String> = Scale::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["0.5", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_ingredient_scaled_amount() {
        let ingredient = Ingredient {
            name: "Flour".to_string(),
            amount_g: Some(120.0),
            amount_oz: Some(4.2),
        };
        assert_eq!(ingredient.scaled_amount(Scale::Three), "360g (12.6oz)");
    }
}
