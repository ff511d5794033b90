//! Carpentry fractions: whole inches plus a power-of-two fraction.
//!
//! Values are non-negative. Conversions from decimals snap to the simplest
//! denominator in [`CARPENTRY_DENOMINATORS`] that lands within
//! [`SNAP_TOLERANCE`] of the input; this favors readable tape-measure
//! fractions over exactness.
//!
//! # Arithmetic
//!
//! [`Fraction::add`], [`Fraction::subtract`], [`Fraction::multiply`] and
//! [`Fraction::divide`] go through `f64` and re-snap the result, so chained
//! operations accumulate float error and get re-rounded at every step:
//!
//! ```rust
//! use u_cutlist_core::Fraction;
//!
//! let half = Fraction::new(0, 1, 2).unwrap();
//! let quarter = Fraction::new(0, 1, 4).unwrap();
//! assert_eq!(half.add(quarter).unwrap().to_string(), "3/4");
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scan::{parse_digits, parse_loose_decimal, split_leading_int};
use crate::{Error, Result};

/// Denominators tried, in order, when snapping a decimal to a fraction.
pub const CARPENTRY_DENOMINATORS: [u64; 6] = [2, 4, 8, 16, 32, 64];

/// Finest denominator used when snapping.
pub const MAX_DENOMINATOR: u64 = 64;

/// Maximum distance between a decimal and its snapped fraction.
pub const SNAP_TOLERANCE: f64 = 0.001;

/// Reference fractions shown next to the converter.
pub const COMMON_FRACTIONS: [Fraction; 8] = [
    Fraction::proper(1, 2),
    Fraction::proper(1, 4),
    Fraction::proper(3, 4),
    Fraction::proper(1, 8),
    Fraction::proper(3, 8),
    Fraction::proper(5, 8),
    Fraction::proper(7, 8),
    Fraction::proper(1, 16),
];

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Reduces `numerator/denominator` to lowest terms.
pub fn reduce(numerator: u64, denominator: u64) -> Result<(u64, u64)> {
    if denominator == 0 {
        return Err(Error::InvalidFraction(format!("{}/0", numerator)));
    }
    let divisor = gcd(numerator, denominator);
    Ok((numerator / divisor, denominator / divisor))
}

/// A non-negative measurement `whole numerator/denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    whole: u64,
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// Creates a fraction as written. Fails on a zero denominator.
    ///
    /// The value is not reduced; call [`Fraction::normalized`] for that.
    pub fn new(whole: u64, numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::InvalidFraction(format!(
                "{}-{}/0",
                whole, numerator
            )));
        }
        Ok(Self {
            whole,
            numerator,
            denominator,
        })
    }

    /// A whole number of inches.
    pub const fn whole_number(whole: u64) -> Self {
        Self {
            whole,
            numerator: 0,
            denominator: 1,
        }
    }

    const fn proper(numerator: u64, denominator: u64) -> Self {
        Self {
            whole: 0,
            numerator,
            denominator,
        }
    }

    /// Whole part.
    pub fn whole(&self) -> u64 {
        self.whole
    }

    /// Numerator of the fractional part.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Denominator of the fractional part (never zero).
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.whole == 0 && self.numerator == 0
    }

    /// Carries an improper numerator into the whole part and reduces.
    ///
    /// Fails if the carried whole part does not fit in a `u64`.
    pub fn normalized(&self) -> Result<Self> {
        let whole = self
            .whole
            .checked_add(self.numerator / self.denominator)
            .ok_or_else(|| Error::InvalidFraction(self.to_string()))?;
        let (numerator, denominator) =
            reduce_nonzero(self.numerator % self.denominator, self.denominator);
        Ok(Self {
            whole,
            numerator,
            denominator,
        })
    }

    /// Snaps a decimal to the nearest carpentry fraction (up to 64ths).
    pub fn from_decimal(value: f64) -> Result<Self> {
        Self::from_decimal_with_precision(value, MAX_DENOMINATOR)
    }

    /// Snaps a decimal using denominators no finer than `max_denominator`.
    ///
    /// Tries each power-of-two denominator in ascending order and keeps the
    /// first within [`SNAP_TOLERANCE`]. If none qualifies, rounds to
    /// `max_denominator` unconditionally.
    pub fn from_decimal_with_precision(value: f64, max_denominator: u64) -> Result<Self> {
        if !CARPENTRY_DENOMINATORS.contains(&max_denominator) {
            return Err(Error::InvalidPrecision(max_denominator));
        }
        // `u64::MAX as f64` rounds up to 2^64, the first value a cast saturates on.
        if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
            return Err(Error::InvalidDecimal(value));
        }

        let floor = value.floor();
        let remainder = value - floor;
        let whole = floor as u64;

        if remainder == 0.0 {
            return Ok(Self::whole_number(whole));
        }

        for &denominator in CARPENTRY_DENOMINATORS
            .iter()
            .take_while(|&&d| d <= max_denominator)
        {
            let numerator = (remainder * denominator as f64).round();
            if (numerator / denominator as f64 - remainder).abs() < SNAP_TOLERANCE {
                return Self::snapped(whole, numerator as u64, denominator);
            }
        }

        let numerator = (remainder * max_denominator as f64).round() as u64;
        Self::snapped(whole, numerator, max_denominator)
    }

    fn snapped(whole: u64, numerator: u64, denominator: u64) -> Result<Self> {
        Self {
            whole,
            numerator,
            denominator,
        }
        .normalized()
    }

    /// Decimal value: `whole + numerator / denominator`.
    pub fn to_decimal(&self) -> f64 {
        self.whole as f64 + self.numerator as f64 / self.denominator as f64
    }

    /// Sum, re-snapped to a carpentry fraction.
    pub fn add(self, other: Fraction) -> Result<Fraction> {
        Self::from_decimal(self.to_decimal() + other.to_decimal())
    }

    /// Difference, re-snapped. Fails if `other` is larger than `self`.
    pub fn subtract(self, other: Fraction) -> Result<Fraction> {
        let difference = self.to_decimal() - other.to_decimal();
        if difference < 0.0 {
            return Err(Error::NegativeResult(difference));
        }
        Self::from_decimal(difference)
    }

    /// Product, re-snapped.
    pub fn multiply(self, other: Fraction) -> Result<Fraction> {
        Self::from_decimal(self.to_decimal() * other.to_decimal())
    }

    /// Quotient, re-snapped. Fails if `other` is zero.
    pub fn divide(self, other: Fraction) -> Result<Fraction> {
        let divisor = other.to_decimal();
        if divisor == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Self::from_decimal(self.to_decimal() / divisor)
    }
}

fn reduce_nonzero(numerator: u64, denominator: u64) -> (u64, u64) {
    let divisor = gcd(numerator, denominator);
    (numerator / divisor, denominator / divisor)
}

impl Default for Fraction {
    fn default() -> Self {
        Self::whole_number(0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numerator == 0 {
            write!(f, "{}", self.whole)
        } else if self.whole == 0 {
            write!(f, "{}/{}", self.numerator, self.denominator)
        } else {
            write!(f, "{}-{}/{}", self.whole, self.numerator, self.denominator)
        }
    }
}

impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_fraction(s).ok_or_else(|| Error::InvalidFraction(s.to_string()))
    }
}

/// Parses `"3.625"`, `"3-5/8"`, `"3 5/8"`, `"5/8"` or `"3"`.
///
/// Returns `None` for anything else, including zero denominators and
/// negative numbers. Fractions are returned as written, not reduced.
pub fn parse_fraction(input: &str) -> Option<Fraction> {
    let input = input.trim();

    if input.contains('.') {
        let decimal = parse_loose_decimal(input)?;
        return Fraction::from_decimal(decimal).ok();
    }

    if let Some((whole, rest)) = split_leading_int(input) {
        let (numerator, denominator) = parse_simple(rest)?;
        return Fraction::new(whole, numerator, denominator).ok();
    }

    if let Some((numerator, denominator)) = parse_simple(input) {
        return Fraction::new(0, numerator, denominator).ok();
    }

    parse_digits(input).map(Fraction::whole_number)
}

fn parse_simple(s: &str) -> Option<(u64, u64)> {
    let (numerator, denominator) = s.split_once('/')?;
    Some((parse_digits(numerator)?, parse_digits(denominator)?))
}

/// Formats as `"3-5/8"`, `"5/8"` or `"3"`.
pub fn format_fraction(fraction: &Fraction) -> String {
    fraction.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(w: u64, n: u64, d: u64) -> Fraction {
        Fraction::new(w, n, d).unwrap()
    }

    #[test]
    fn test_gcd_and_reduce() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(0, 8), 8);
        assert_eq!(reduce(4, 8).unwrap(), (1, 2));
        assert_eq!(reduce(0, 16).unwrap(), (0, 1));
        assert!(matches!(reduce(3, 0), Err(Error::InvalidFraction(_))));
    }

    #[test]
    fn test_new_rejects_zero_denominator() {
        assert!(Fraction::new(1, 1, 0).is_err());
    }

    #[test]
    fn test_normalized_carries_and_reduces() {
        assert_eq!(frac(1, 12, 8).normalized().unwrap(), frac(2, 1, 2));
        assert_eq!(frac(0, 8, 8).normalized().unwrap(), frac(1, 0, 1));
    }

    #[test]
    fn test_normalized_whole_overflow() {
        let f = parse_fraction("18446744073709551615-5/4").unwrap();
        assert!(matches!(f.normalized(), Err(Error::InvalidFraction(_))));
        // A proper fraction on the largest whole part has nothing to carry.
        let f = frac(u64::MAX, 3, 4);
        assert_eq!(f.normalized().unwrap(), f);
    }

    #[test]
    fn test_from_decimal_simple() {
        assert_eq!(Fraction::from_decimal(3.625).unwrap(), frac(3, 5, 8));
        assert_eq!(Fraction::from_decimal(0.5).unwrap(), frac(0, 1, 2));
        assert_eq!(Fraction::from_decimal(7.0).unwrap(), frac(7, 0, 1));
        assert_eq!(Fraction::from_decimal(0.0625).unwrap(), frac(0, 1, 16));
    }

    #[test]
    fn test_from_decimal_prefers_smallest_denominator() {
        // 0.2505 is within tolerance of 1/4, so 1/4 wins over finer fits.
        assert_eq!(Fraction::from_decimal(0.2505).unwrap(), frac(0, 1, 4));
    }

    #[test]
    fn test_from_decimal_falls_back_to_max_denominator() {
        // No denominator lands within 0.001 of 1/3.
        let f = Fraction::from_decimal(1.0 / 3.0).unwrap();
        assert_eq!(f, frac(0, 21, 64));
    }

    #[test]
    fn test_from_decimal_with_precision() {
        let f = Fraction::from_decimal_with_precision(0.3333, 16).unwrap();
        assert_eq!(f, frac(0, 5, 16));
        assert!(matches!(
            Fraction::from_decimal_with_precision(0.5, 10),
            Err(Error::InvalidPrecision(10))
        ));
    }

    #[test]
    fn test_from_decimal_carries_rounded_up_remainder() {
        let f = Fraction::from_decimal(2.9999).unwrap();
        assert_eq!(f, frac(3, 0, 1));
    }

    #[test]
    fn test_from_decimal_rejects_negative_and_nan() {
        assert!(matches!(
            Fraction::from_decimal(-0.5),
            Err(Error::InvalidDecimal(_))
        ));
        assert!(Fraction::from_decimal(f64::NAN).is_err());
        assert!(Fraction::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_from_decimal_rejects_values_beyond_u64() {
        assert!(matches!(
            Fraction::from_decimal(1e20),
            Err(Error::InvalidDecimal(_))
        ));
        let big = Fraction::whole_number(10_000_000_000);
        assert!(matches!(big.multiply(big), Err(Error::InvalidDecimal(_))));
        assert_eq!(
            big.add(big).unwrap(),
            Fraction::whole_number(20_000_000_000)
        );
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(frac(3, 5, 8).to_decimal(), 3.625);
        assert_eq!(frac(0, 0, 1).to_decimal(), 0.0);
    }

    #[test]
    fn test_decimal_consistency_two_places() {
        for cents in 0..=2400u32 {
            let x = cents as f64 / 100.0;
            let snapped = Fraction::from_decimal(x).unwrap().to_decimal();
            // Values like x.01 fall back to 64ths, which are at most 1/128 away.
            assert!(
                (snapped - x).abs() <= 1.0 / 128.0 + 1e-9,
                "{} snapped to {}",
                x,
                snapped
            );
        }
    }

    #[test]
    fn test_arithmetic() {
        let half = frac(0, 1, 2);
        let quarter = frac(0, 1, 4);
        assert_eq!(half.add(quarter).unwrap(), frac(0, 3, 4));
        assert_eq!(half.subtract(quarter).unwrap(), frac(0, 1, 4));
        assert_eq!(half.multiply(quarter).unwrap(), frac(0, 1, 8));
        assert_eq!(half.divide(quarter).unwrap(), frac(2, 0, 1));
        assert_eq!(
            frac(3, 5, 8).add(frac(1, 3, 8)).unwrap(),
            frac(5, 0, 1)
        );
    }

    #[test]
    fn test_divide_by_zero() {
        let zero = Fraction::whole_number(0);
        assert_eq!(frac(1, 0, 1).divide(zero), Err(Error::DivisionByZero));
        assert_eq!(frac(1, 0, 2).divide(zero), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_subtract_negative() {
        let result = frac(0, 1, 4).subtract(frac(0, 1, 2));
        assert!(matches!(result, Err(Error::NegativeResult(_))));
    }

    #[test]
    fn test_parse_fraction_forms() {
        assert_eq!(parse_fraction("3-5/8"), Some(frac(3, 5, 8)));
        assert_eq!(parse_fraction("3 5/8"), Some(frac(3, 5, 8)));
        assert_eq!(parse_fraction("5/8"), Some(frac(0, 5, 8)));
        assert_eq!(parse_fraction("12"), Some(frac(12, 0, 1)));
        assert_eq!(parse_fraction("  3.625 "), Some(frac(3, 5, 8)));
        assert_eq!(parse_fraction(".75"), Some(frac(0, 3, 4)));
        // Written form is preserved.
        assert_eq!(parse_fraction("4/8"), Some(frac(0, 4, 8)));
    }

    #[test]
    fn test_parse_fraction_rejects() {
        assert_eq!(parse_fraction(""), None);
        assert_eq!(parse_fraction("abc"), None);
        assert_eq!(parse_fraction("5/0"), None);
        assert_eq!(parse_fraction("3-5/0"), None);
        assert_eq!(parse_fraction("-3"), None);
        assert_eq!(parse_fraction("-0.5"), None);
        assert_eq!(parse_fraction("3--5/8"), None);
        assert_eq!(parse_fraction("3-5"), None);
    }

    #[test]
    fn test_from_str() {
        let f: Fraction = "1-1/2".parse().unwrap();
        assert_eq!(f, frac(1, 1, 2));
        assert!("x/2".parse::<Fraction>().is_err());
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_fraction(&frac(3, 5, 8)), "3-5/8");
        assert_eq!(format_fraction(&frac(0, 5, 8)), "5/8");
        assert_eq!(format_fraction(&frac(3, 0, 1)), "3");
        assert_eq!(format_fraction(&Fraction::default()), "0");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for whole in [0u64, 1, 7, 96] {
            for &d in CARPENTRY_DENOMINATORS.iter() {
                for n in 1..d {
                    let f = frac(whole, n, d).normalized().unwrap();
                    let parsed = parse_fraction(&format_fraction(&f))
                        .unwrap()
                        .normalized()
                        .unwrap();
                    assert_eq!(parsed, f);
                }
            }
        }
    }

    #[test]
    fn test_common_fractions() {
        let decimals: Vec<f64> = COMMON_FRACTIONS.iter().map(|f| f.to_decimal()).collect();
        assert_eq!(
            decimals,
            vec![0.5, 0.25, 0.75, 0.125, 0.375, 0.625, 0.875, 0.0625]
        );
    }
}
