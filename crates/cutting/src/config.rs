//! Configuration for cut-list planning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_cutlist_core::{Error, Result, DEFAULT_BOARD_LENGTH, DEFAULT_KERF};

/// How the residual of a freshly opened board is booked when the first cut
/// plus one kerf is longer than the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResidualPolicy {
    /// Residual stops at zero; only the kerf that fits on the board is booked.
    #[default]
    Clamp,
    /// Kerf is always subtracted in full, so the residual may go negative.
    Raw,
}

/// Configuration parameters for the cut planner.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Stock board length in inches.
    pub board_length: f64,

    /// Saw blade kerf in inches, charged once per placed cut.
    /// Set to 0.0 to ignore blade loss.
    pub kerf: f64,

    /// Treatment of residuals that would go below zero.
    pub residual_policy: ResidualPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            board_length: DEFAULT_BOARD_LENGTH,
            kerf: DEFAULT_KERF,
            residual_policy: ResidualPolicy::default(),
        }
    }
}

impl PlannerConfig {
    /// Creates a new default configuration (12' boards, 1/8" kerf).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stock board length.
    pub fn with_board_length(mut self, inches: f64) -> Self {
        self.board_length = inches;
        self
    }

    /// Sets the kerf.
    pub fn with_kerf(mut self, inches: f64) -> Self {
        self.kerf = inches;
        self
    }

    /// Sets the residual policy.
    pub fn with_residual_policy(mut self, policy: ResidualPolicy) -> Self {
        self.residual_policy = policy;
        self
    }

    /// Checks that the board length is positive and the kerf non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.board_length.is_finite() || self.board_length <= 0.0 {
            return Err(Error::InvalidBoardLength(self.board_length));
        }
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(Error::InvalidKerf(self.kerf));
        }
        Ok(())
    }
}
