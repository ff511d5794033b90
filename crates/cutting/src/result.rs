//! Result types for cut-list planning.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_cutlist_core::format_length;

use crate::request::CutRequest;

/// Waste percentage below which a plan counts as efficient.
pub const EFFICIENT_WASTE_PERCENT: f64 = 5.0;

/// A single piece laid out on a board.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The piece (quantity 1).
    pub cut: CutRequest,
    /// Distance from the board's left end to the start of the piece.
    pub position: f64,
    /// Blade loss booked after this piece.
    pub kerf_loss: f64,
}

impl Placement {
    /// Position just past the piece, before its kerf.
    pub fn end(&self) -> f64 {
        self.position + self.cut.length
    }
}

/// The pieces assigned to one stock board, left to right.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardAssignment {
    /// 1-based board number.
    pub board_number: usize,
    /// Pieces in layout order.
    pub placements: Vec<Placement>,
    /// Length left after all pieces and kerf losses.
    pub residual_length: f64,
}

impl BoardAssignment {
    /// Declared waste of a closed board (its residual).
    pub fn waste(&self) -> f64 {
        self.residual_length
    }

    /// Number of pieces on the board.
    pub fn cut_count(&self) -> usize {
        self.placements.len()
    }

    /// Combined length of the pieces, excluding kerf.
    pub fn cut_length(&self) -> f64 {
        self.placements.iter().map(|p| p.cut.length).sum()
    }

    /// Combined blade loss.
    pub fn kerf_loss(&self) -> f64 {
        self.placements.iter().map(|p| p.kerf_loss).sum()
    }

    /// Length consumed by pieces and kerf.
    pub fn used_length(&self) -> f64 {
        self.cut_length() + self.kerf_loss()
    }
}

/// Result of planning a cut list onto stock boards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutPlan {
    /// Stock board length in inches.
    pub board_length: f64,

    /// Kerf used for planning.
    pub kerf: f64,

    /// Boards in the order they were opened.
    pub boards: Vec<BoardAssignment>,

    /// Number of boards required.
    pub total_boards_needed: usize,

    /// Sum of board residuals.
    pub total_waste: f64,

    /// `total_waste` as a percentage of all stock used.
    pub waste_percentage: f64,
}

impl CutPlan {
    pub(crate) fn from_boards(board_length: f64, kerf: f64, boards: Vec<BoardAssignment>) -> Self {
        let total_boards_needed = boards.len();
        let total_waste: f64 = boards.iter().map(BoardAssignment::waste).sum();
        let total_material = total_boards_needed as f64 * board_length;
        let waste_percentage = if total_material > 0.0 {
            total_waste / total_material * 100.0
        } else {
            0.0
        };

        Self {
            board_length,
            kerf,
            boards,
            total_boards_needed,
            total_waste,
            waste_percentage,
        }
    }

    /// Total stock length consumed (`boards * board_length`).
    pub fn total_material(&self) -> f64 {
        self.total_boards_needed as f64 * self.board_length
    }

    /// Number of pieces placed.
    pub fn placed_count(&self) -> usize {
        self.boards.iter().map(BoardAssignment::cut_count).sum()
    }

    /// Combined length of all pieces.
    pub fn total_cut_length(&self) -> f64 {
        self.boards.iter().map(BoardAssignment::cut_length).sum()
    }

    /// Combined blade loss.
    pub fn total_kerf_loss(&self) -> f64 {
        self.boards.iter().map(BoardAssignment::kerf_loss).sum()
    }

    /// Fraction of stock that ends up in pieces (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        let material = self.total_material();
        if material > 0.0 {
            self.total_cut_length() / material
        } else {
            0.0
        }
    }

    /// Returns true if waste is under [`EFFICIENT_WASTE_PERCENT`].
    pub fn is_efficient(&self) -> bool {
        self.waste_percentage < EFFICIENT_WASTE_PERCENT
    }

    /// Condensed statistics.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from(self)
    }
}

/// Summary statistics for a cut plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Boards required.
    pub boards: usize,
    /// Pieces placed.
    pub pieces: usize,
    /// Combined piece length.
    pub total_cut_length: f64,
    /// Combined blade loss.
    pub total_kerf_loss: f64,
    /// Combined residual.
    pub total_waste: f64,
    /// Waste percentage.
    pub waste_percentage: f64,
    /// Whether the plan is under the efficiency threshold.
    pub efficient: bool,
}

impl From<&CutPlan> for PlanSummary {
    fn from(plan: &CutPlan) -> Self {
        Self {
            boards: plan.total_boards_needed,
            pieces: plan.placed_count(),
            total_cut_length: plan.total_cut_length(),
            total_kerf_loss: plan.total_kerf_loss(),
            total_waste: plan.total_waste,
            waste_percentage: plan.waste_percentage,
            efficient: plan.is_efficient(),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} board(s), {} piece(s), waste {} ({:.1}%)",
            self.boards,
            self.pieces,
            format_length(self.total_waste),
            self.waste_percentage
        )
    }
}
