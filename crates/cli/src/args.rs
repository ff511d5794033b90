//! Parsing of command-line measurement arguments.

use anyhow::{anyhow, bail, Result};
use u_cutlist_core::{parse_fraction, parse_length};

/// A `--cut` argument: `LEN[xQTY][:LABEL]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CutArg {
    pub length: f64,
    pub quantity: u32,
    pub label: String,
}

/// Parses `30`, `2-6x4`, `8'2"x2:Rail` and similar.
pub fn parse_cut_arg(text: &str) -> Result<CutArg> {
    let (spec, label) = match text.split_once(':') {
        Some((spec, label)) => (spec, label.trim().to_string()),
        None => (text, String::new()),
    };

    let (length_text, quantity) = match spec.rsplit_once(['x', 'X']) {
        Some((length, quantity)) => {
            let quantity: u32 = quantity
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid quantity in cut '{}'", text))?;
            (length, quantity)
        }
        None => (spec, 1),
    };

    let length = parse_length(length_text)
        .ok_or_else(|| anyhow!("invalid length '{}' in cut '{}'", length_text.trim(), text))?;
    if quantity == 0 {
        bail!("quantity must be at least 1 in cut '{}'", text);
    }

    Ok(CutArg {
        length,
        quantity,
        label,
    })
}

/// Parses a kerf given as decimal inches or a fraction (`0.1`, `1/8`).
///
/// Decimals are taken as written; only `N/D` and `W-N/D` go through
/// [`parse_fraction`].
pub fn parse_kerf(text: &str) -> Result<f64> {
    let text = text.trim();
    let kerf = if text.contains('/') {
        parse_fraction(text).map(|f| f.to_decimal())
    } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        text.parse::<f64>().ok()
    } else {
        None
    };
    kerf.ok_or_else(|| anyhow!("invalid kerf '{}'", text))
}

/// Parses a board length (`96`, `8'`, `8-0`).
pub fn parse_board(text: &str) -> Result<f64> {
    parse_length(text).ok_or_else(|| anyhow!("invalid board length '{}'", text))
}
