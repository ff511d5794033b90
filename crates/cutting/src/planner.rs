//! Greedy longest-first cut planner.
//!
//! # Algorithm
//!
//! 1. **Expand**: each request becomes `quantity` single pieces
//! 2. **Sort**: pieces by length, longest first (stable, so equal lengths keep
//!    input order)
//! 3. **Pack**: keep one open board; a piece goes on it if the residual
//!    covers `length + kerf`, otherwise the board is closed and a new one is
//!    opened with the piece at position 0
//! 4. **Aggregate**: waste is the sum of board residuals
//!
//! Closed boards are never revisited. This keeps layouts predictable and the
//! whole pass `O(n log n)`, at the cost of optimality.

use u_cutlist_core::{Error, Result};

use crate::config::{PlannerConfig, ResidualPolicy};
use crate::request::CutRequest;
use crate::result::{BoardAssignment, CutPlan, Placement};

/// Cut-list planner.
#[derive(Debug, Clone, Default)]
pub struct CutPlanner {
    config: PlannerConfig,
}

impl CutPlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Creates a planner with default configuration.
    pub fn default_config() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans `cuts` onto stock boards.
    ///
    /// Fails with [`Error::EmptyCutList`] for an empty slice, and with
    /// [`Error::CutExceedsBoard`] if any piece is longer than a board.
    pub fn plan(&self, cuts: &[CutRequest]) -> Result<CutPlan> {
        self.config.validate()?;
        if cuts.is_empty() {
            return Err(Error::EmptyCutList);
        }

        let board_length = self.config.board_length;
        let kerf = self.config.kerf;

        for cut in cuts {
            cut.validate(board_length)?;
        }

        let pieces = expand_pieces(cuts);
        let mut boards: Vec<BoardAssignment> = Vec::new();
        let mut open: Option<BoardAssignment> = None;

        for piece in pieces {
            let needed = piece.length + kerf;

            if let Some(board) = open.as_mut() {
                if board.residual_length >= needed {
                    let position = board_length - board.residual_length;
                    board.residual_length -= needed;
                    board.placements.push(Placement {
                        cut: piece,
                        position,
                        kerf_loss: kerf,
                    });
                    continue;
                }
            }

            if let Some(closed) = open.take() {
                boards.push(closed);
            }
            open = Some(self.open_board(boards.len() + 1, piece));
        }

        if let Some(last) = open {
            boards.push(last);
        }

        let plan = CutPlan::from_boards(board_length, kerf, boards);
        log::debug!(
            "Planned {} piece(s) on {} board(s) of {}\": waste {:.3}\" ({:.1}%)",
            plan.placed_count(),
            plan.total_boards_needed,
            board_length,
            plan.total_waste,
            plan.waste_percentage
        );
        Ok(plan)
    }

    /// Starts a new board with `piece` at position 0.
    fn open_board(&self, board_number: usize, piece: CutRequest) -> BoardAssignment {
        let board_length = self.config.board_length;
        let kerf = self.config.kerf;
        let raw_residual = board_length - piece.length - kerf;

        let (residual_length, kerf_loss) = match self.config.residual_policy {
            ResidualPolicy::Clamp if raw_residual < 0.0 => {
                log::debug!(
                    "Board {}: '{}' leaves no room for a full kerf, clamping residual",
                    board_number,
                    piece.label
                );
                (0.0, board_length - piece.length)
            }
            ResidualPolicy::Raw if raw_residual < 0.0 => {
                log::warn!(
                    "Board {}: '{}' plus kerf overruns the board by {:.4}\"",
                    board_number,
                    piece.label,
                    -raw_residual
                );
                (raw_residual, kerf)
            }
            _ => (raw_residual, kerf),
        };

        BoardAssignment {
            board_number,
            placements: vec![Placement {
                cut: piece,
                position: 0.0,
                kerf_loss,
            }],
            residual_length,
        }
    }
}

/// Plans `cuts` onto boards of `board_length` with the given `kerf`.
///
/// Shorthand for [`CutPlanner::plan`] with the default residual policy.
pub fn compute_cut_plan(cuts: &[CutRequest], board_length: f64, kerf: f64) -> Result<CutPlan> {
    let config = PlannerConfig::new()
        .with_board_length(board_length)
        .with_kerf(kerf);
    CutPlanner::new(config).plan(cuts)
}

/// Expands requests into single pieces, longest first.
fn expand_pieces(cuts: &[CutRequest]) -> Vec<CutRequest> {
    let mut pieces: Vec<CutRequest> = cuts
        .iter()
        .flat_map(|cut| (0..cut.quantity).map(move |_| cut.unit()))
        .collect();
    // `sort_by` is stable: equal lengths keep request order.
    pieces.sort_by(|a, b| b.length.total_cmp(&a.length));
    pieces
}
