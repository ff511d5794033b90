//! Cut jobs loaded from TOML or JSON files.
//!
//! A job names the stock, the blade and the pieces:
//!
//! ```toml
//! board_length = "8'"
//! kerf = 0.125
//!
//! [[cuts]]
//! length = "2-6"
//! quantity = 4
//! label = "Shelf"
//!
//! [[cuts]]
//! length = 18.5
//! ```
//!
//! Lengths are either plain inches or any text [`parse_length`] accepts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use u_cutlist_core::{parse_length, DEFAULT_KERF};

use crate::config::{PlannerConfig, ResidualPolicy};
use crate::planner::CutPlanner;
use crate::request::CutList;
use crate::result::CutPlan;

/// Errors raised while loading or planning a job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported job file extension: {0}")]
    UnsupportedFormat(String),

    #[error("invalid length: {0}")]
    InvalidLength(String),

    #[error(transparent)]
    Plan(#[from] u_cutlist_core::Error),
}

/// A length given as inches or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LengthValue {
    /// Decimal inches.
    Inches(f64),
    /// Text such as `"8-2"` or `"8'2\""`.
    Text(String),
}

impl LengthValue {
    /// Resolves to inches.
    pub fn to_inches(&self) -> Result<f64, JobError> {
        match self {
            LengthValue::Inches(inches) => Ok(*inches),
            LengthValue::Text(text) => {
                parse_length(text).ok_or_else(|| JobError::InvalidLength(text.clone()))
            }
        }
    }
}

/// One line of a job's cut list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCut {
    /// Piece length.
    pub length: LengthValue,
    /// Number of pieces.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Optional label; blank labels become `"Cut N"`.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// A complete planning job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutJob {
    /// Stock board length.
    pub board_length: LengthValue,
    /// Blade kerf in inches (defaults to 1/8").
    #[serde(default)]
    pub kerf: Option<f64>,
    /// Residual policy (defaults to clamping).
    #[serde(default)]
    pub residual_policy: Option<ResidualPolicy>,
    /// Requested pieces.
    #[serde(default)]
    pub cuts: Vec<JobCut>,
}

impl CutJob {
    /// Parses a job from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, JobError> {
        Ok(toml::from_str(content)?)
    }

    /// Parses a job from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a TOML job file.
    pub fn from_toml_file(path: &Path) -> Result<Self, JobError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads a JSON job file.
    pub fn from_json_file(path: &Path) -> Result<Self, JobError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Loads a job file, choosing the format from the extension.
    pub fn from_file(path: &Path) -> Result<Self, JobError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            other => Err(JobError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Planner configuration described by this job.
    pub fn config(&self) -> Result<PlannerConfig, JobError> {
        let config = PlannerConfig::new()
            .with_board_length(self.board_length.to_inches()?)
            .with_kerf(self.kerf.unwrap_or(DEFAULT_KERF))
            .with_residual_policy(self.residual_policy.unwrap_or_default());
        config.validate()?;
        Ok(config)
    }

    /// Cut list bound to this job's board length.
    pub fn cut_list(&self) -> Result<CutList, JobError> {
        let mut list = CutList::for_board(self.board_length.to_inches()?);
        self.append_cuts(&mut list)?;
        Ok(list)
    }

    /// Appends this job's cuts to `list`, checked against the list's board
    /// rather than the job's own `board_length`.
    pub fn append_cuts(&self, list: &mut CutList) -> Result<(), JobError> {
        for cut in &self.cuts {
            let length = cut.length.to_inches()?;
            list.add(length, cut.quantity, cut.label.as_deref().unwrap_or(""))?;
        }
        Ok(())
    }

    /// Plans the job.
    pub fn plan(&self) -> Result<CutPlan, JobError> {
        let planner = CutPlanner::new(self.config()?);
        let list = self.cut_list()?;
        Ok(planner.plan(list.cuts())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BOOKSHELF: &str = r#"
board_length = "8'"
kerf = 0.125

[[cuts]]
length = "2-6"
quantity = 4
label = "Shelf"

[[cuts]]
length = 18.5
"#;

    #[test]
    fn test_parse_toml_job() {
        let job = CutJob::from_toml_str(BOOKSHELF).unwrap();
        assert_eq!(job.board_length, LengthValue::Text("8'".to_string()));
        assert_eq!(job.cuts.len(), 2);
        assert_eq!(job.cuts[1].quantity, 1);

        let list = job.cut_list().unwrap();
        assert_eq!(list.cuts()[0].length, 30.0);
        assert_eq!(list.cuts()[0].label, "Shelf");
        assert_eq!(list.cuts()[1].label, "Cut 2");

        let config = job.config().unwrap();
        assert_eq!(config.board_length, 96.0);
        assert_eq!(config.residual_policy, ResidualPolicy::Clamp);
    }

    #[test]
    fn test_plan_json_job() {
        let job = CutJob::from_json_str(
            r#"{
                "board_length": 96,
                "residual_policy": "raw",
                "cuts": [
                    { "length": 48, "quantity": 2, "label": "A" },
                    { "length": "30", "label": "B" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(job.residual_policy, Some(ResidualPolicy::Raw));

        let plan = job.plan().unwrap();
        assert_eq!(plan.total_boards_needed, 2);
        assert_eq!(plan.kerf, DEFAULT_KERF);
    }

    #[test]
    fn test_invalid_length() {
        let job = CutJob::from_toml_str("board_length = \"eight feet\"\n").unwrap();
        assert!(matches!(job.config(), Err(JobError::InvalidLength(_))));
    }

    #[test]
    fn test_cut_longer_than_board() {
        let job = CutJob::from_toml_str(
            "board_length = 96\n[[cuts]]\nlength = \"8-1\"\n",
        )
        .unwrap();
        assert!(matches!(
            job.plan(),
            Err(JobError::Plan(u_cutlist_core::Error::CutExceedsBoard { .. }))
        ));
    }

    #[test]
    fn test_append_cuts_to_longer_board() {
        let job = CutJob::from_toml_str(
            "board_length = 96\n[[cuts]]\nlength = 100\nlabel = \"Rail\"\n",
        )
        .unwrap();
        assert!(job.cut_list().is_err());

        let mut list = CutList::for_board(120.0);
        job.append_cuts(&mut list).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.cuts()[0].label, "Rail");
    }

    #[test]
    fn test_empty_job() {
        let job = CutJob::from_toml_str("board_length = 96\n").unwrap();
        assert!(matches!(
            job.plan(),
            Err(JobError::Plan(u_cutlist_core::Error::EmptyCutList))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(BOOKSHELF.as_bytes()).unwrap();

        let job = CutJob::from_file(file.path()).unwrap();
        let plan = job.plan().unwrap();
        assert_eq!(plan.placed_count(), 5);

        let other = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            CutJob::from_file(other.path()),
            Err(JobError::UnsupportedFormat(_))
        ));
    }
}
