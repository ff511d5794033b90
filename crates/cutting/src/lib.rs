//! Stock-cutting planner for linear lumber.
//!
//! Given requested piece lengths, a stock board length and a saw kerf, this
//! crate lays the pieces out on as few boards as a single greedy pass finds
//! and reports the waste.
//!
//! # Algorithm
//!
//! 1. **Expansion**: every [`CutRequest`] becomes `quantity` single pieces
//! 2. **Ordering**: longest pieces first, ties in request order
//! 3. **First fit on the open board**: a piece joins the current board if the
//!    residual covers the piece plus one kerf, otherwise a new board is opened
//! 4. **Reporting**: per-board layout, residual waste and waste percentage
//!
//! # Example
//!
//! ```rust
//! use u_cutlist_cutting::{compute_cut_plan, CutRequest};
//!
//! let cuts = vec![
//!     CutRequest::new("A", 48.0).with_quantity(2),
//!     CutRequest::new("B", 30.0),
//! ];
//! let plan = compute_cut_plan(&cuts, 96.0, 0.125).unwrap();
//! assert_eq!(plan.total_boards_needed, 2);
//! ```

pub mod config;
#[cfg(feature = "serde")]
pub mod job;
pub mod planner;
pub mod request;
pub mod result;

pub use config::{PlannerConfig, ResidualPolicy};
#[cfg(feature = "serde")]
pub use job::{CutJob, JobCut, JobError, LengthValue};
pub use planner::{compute_cut_plan, CutPlanner};
pub use request::{CutList, CutRequest};
pub use result::{BoardAssignment, CutPlan, PlanSummary, Placement, EFFICIENT_WASTE_PERCENT};
pub use u_cutlist_core::{Error, Result};
