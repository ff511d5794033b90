//! Error types shared by the cut-list crates.

use thiserror::Error;

/// Errors raised by fraction arithmetic and cut planning.
///
/// Text parsing never produces these; parsers return `None` on malformed
/// input so callers can branch on presence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed fraction or zero denominator.
    #[error("invalid fraction: {0}")]
    InvalidFraction(String),

    /// Decimal value that cannot be expressed as a length (negative, NaN, infinite).
    #[error("invalid decimal value: {0}")]
    InvalidDecimal(f64),

    /// Snapping precision is not a supported power-of-two denominator.
    #[error("invalid precision 1/{0}: expected a power of two between 2 and 64")]
    InvalidPrecision(u64),

    /// Division by a zero-valued fraction.
    #[error("division by zero")]
    DivisionByZero,

    /// Subtraction whose result would be a negative length.
    #[error("result would be negative ({0})")]
    NegativeResult(f64),

    /// Planner invoked without any cuts.
    #[error("cut list is empty")]
    EmptyCutList,

    /// A requested cut does not fit on a single stock board.
    #[error("cut '{label}' ({length}\") exceeds board length {board_length}\"")]
    CutExceedsBoard {
        /// Label of the offending cut.
        label: String,
        /// Requested length in inches.
        length: f64,
        /// Stock board length in inches.
        board_length: f64,
    },

    /// Cut with a non-positive length or zero quantity.
    #[error("invalid cut: {0}")]
    InvalidCut(String),

    /// Board length that is not a positive finite number.
    #[error("invalid board length: {0}")]
    InvalidBoardLength(f64),

    /// Kerf that is negative or not finite.
    #[error("invalid kerf: {0}")]
    InvalidKerf(f64),
}

/// Result type alias for cut-list operations.
pub type Result<T> = std::result::Result<T, Error>;
