//! # U-Cutlist Core
//!
//! Measurement primitives shared by the U-Cutlist planner and CLI.
//!
//! ## Core Components
//!
//! - **Fractions**: [`Fraction`] - whole inches plus a power-of-two fraction,
//!   with snap-to-fraction arithmetic
//! - **Lengths**: [`parse_length`], [`format_length`] - feet/inches text to
//!   decimal inches and back
//! - **Presets**: [`COMMON_BOARD_LENGTHS`], [`COMMON_SAW_KERFS`],
//!   [`COMMON_FRACTIONS`]
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Parsing
//!
//! Parsers return `Option` rather than an error; malformed input is an
//! expected case for interactive callers.
//!
//! ```rust
//! use u_cutlist_core::{format_length, parse_fraction, parse_length};
//!
//! assert_eq!(parse_length("8-2"), Some(98.0));
//! assert_eq!(format_length(98.0), "8'-2.00\"");
//!
//! let f = parse_fraction("3-5/8").unwrap();
//! assert_eq!(f.to_decimal(), 3.625);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod fraction;
pub mod length;
mod scan;

// Re-exports
pub use error::{Error, Result};
pub use fraction::{
    format_fraction, gcd, parse_fraction, reduce, Fraction, CARPENTRY_DENOMINATORS,
    COMMON_FRACTIONS, MAX_DENOMINATOR, SNAP_TOLERANCE,
};
pub use length::{
    format_length, parse_length, BoardPreset, KerfPreset, COMMON_BOARD_LENGTHS,
    COMMON_SAW_KERFS, DEFAULT_BOARD_LENGTH, DEFAULT_KERF, INCHES_PER_FOOT,
};
