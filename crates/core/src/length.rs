//! Length parsing and display in feet and inches.
//!
//! All lengths are carried as `f64` inches. Accepted input forms:
//!
//! | Input | Inches |
//! |-------|--------|
//! | `98` / `98.5` | 98 / 98.5 |
//! | `8-2` / `8 2` | 98 |
//! | `8'2"` / `8'-2.00"` / `8' 2"` | 98 |
//! | `8'` | 96 |
//!
//! Fraction notation (`3-5/8`) is not a length here; use
//! [`parse_fraction`](crate::fraction::parse_fraction) for that.

use crate::scan::{parse_digits, parse_strict_decimal, split_leading_int};

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Default saw kerf (1/8").
pub const DEFAULT_KERF: f64 = 0.125;

/// Default stock board length (12').
pub const DEFAULT_BOARD_LENGTH: f64 = 144.0;

/// A named stock board length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPreset {
    /// Nominal length in feet.
    pub feet: u32,
    /// Length in inches.
    pub inches: f64,
}

/// A named saw blade kerf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KerfPreset {
    /// Display name.
    pub name: &'static str,
    /// Blade width in inches.
    pub inches: f64,
}

/// Stock lengths commonly sold at lumber yards.
pub const COMMON_BOARD_LENGTHS: [BoardPreset; 6] = [
    BoardPreset { feet: 8, inches: 96.0 },
    BoardPreset { feet: 10, inches: 120.0 },
    BoardPreset { feet: 12, inches: 144.0 },
    BoardPreset { feet: 14, inches: 168.0 },
    BoardPreset { feet: 16, inches: 192.0 },
    BoardPreset { feet: 20, inches: 240.0 },
];

/// Typical circular and table saw blade widths.
pub const COMMON_SAW_KERFS: [KerfPreset; 3] = [
    KerfPreset { name: "Thin Kerf (1/16\")", inches: 0.0625 },
    KerfPreset { name: "Standard (1/8\")", inches: 0.125 },
    KerfPreset { name: "Thick Blade (3/16\")", inches: 0.1875 },
];

/// Parses a length into inches. Returns `None` if the text is not a length.
pub fn parse_length(input: &str) -> Option<f64> {
    let input = input.trim().replace('"', "");
    let input = input.trim();

    if let Some((feet, rest)) = input.split_once('\'') {
        let feet = parse_digits(feet.trim_end())? as f64;
        let rest = rest.trim();
        let rest = rest.strip_prefix('-').map(str::trim_start).unwrap_or(rest);
        if rest.is_empty() {
            return Some(feet * INCHES_PER_FOOT);
        }
        let inches = parse_strict_decimal(rest)?;
        return Some(feet * INCHES_PER_FOOT + inches);
    }

    if let Some((feet, rest)) = split_leading_int(input) {
        let inches = parse_strict_decimal(rest)?;
        return Some(feet as f64 * INCHES_PER_FOOT + inches);
    }

    parse_strict_decimal(input)
}

/// Formats inches as `8'-2.00"`, `8'` or `11.50"`.
///
/// Negative lengths (raw over-subtracted waste) are rendered with a leading
/// minus sign in front of the formatted magnitude.
pub fn format_length(inches: f64) -> String {
    if inches < 0.0 {
        return format!("-{}", format_length(-inches));
    }

    let feet = (inches / INCHES_PER_FOOT).floor();
    let remaining = inches % INCHES_PER_FOOT;

    if feet == 0.0 {
        format!("{:.2}\"", remaining)
    } else if remaining == 0.0 {
        format!("{}'", feet)
    } else {
        format!("{}'-{:.2}\"", feet, remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_inches() {
        assert_eq!(parse_length("98"), Some(98.0));
        assert_eq!(parse_length(" 30.5 "), Some(30.5));
        assert_eq!(parse_length("30.5\""), Some(30.5));
    }

    #[test]
    fn test_parse_long_decimal() {
        let inches = parse_length("1.987654321987654321987").unwrap();
        assert!((inches - 1.987654321987654).abs() < 1e-12);
        let inches = parse_length("8-2.000000000000000000001").unwrap();
        assert!((inches - 98.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_feet_inches() {
        assert_eq!(parse_length("8-2"), Some(98.0));
        assert_eq!(parse_length("8 2"), Some(98.0));
        assert_eq!(parse_length("8-2.5"), Some(98.5));
        assert_eq!(parse_length("8'2\""), Some(98.0));
        assert_eq!(parse_length("8' 2\""), Some(98.0));
        assert_eq!(parse_length("8'-2.00\""), Some(98.0));
        assert_eq!(parse_length("8'"), Some(96.0));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("abc"), None);
        assert_eq!(parse_length("3-5/8"), None);
        assert_eq!(parse_length("5/8"), None);
        assert_eq!(parse_length("-4"), None);
        assert_eq!(parse_length("8'x"), None);
        assert_eq!(parse_length("'2"), None);
        assert_eq!(parse_length("8--2"), None);
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(98.0), "8'-2.00\"");
        assert_eq!(format_length(96.0), "8'");
        assert_eq!(format_length(11.5), "11.50\"");
        assert_eq!(format_length(0.0), "0.00\"");
        assert_eq!(format_length(47.75), "3'-11.75\"");
        assert_eq!(format_length(-0.25), "-0.25\"");
    }

    #[test]
    fn test_length_roundtrip() {
        for hundredths in 1..=30_000u32 {
            let inches = hundredths as f64 / 100.0;
            let parsed = parse_length(&format_length(inches)).unwrap();
            assert!(
                (parsed - inches).abs() < 0.0051,
                "{} -> {} -> {}",
                inches,
                format_length(inches),
                parsed
            );
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(COMMON_BOARD_LENGTHS.len(), 6);
        for preset in COMMON_BOARD_LENGTHS {
            assert_eq!(preset.feet as f64 * INCHES_PER_FOOT, preset.inches);
        }
        assert!(COMMON_SAW_KERFS.iter().any(|k| k.inches == DEFAULT_KERF));
    }
}
