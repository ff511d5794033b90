//! Cut requests and the editable list they are collected in.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_cutlist_core::{Error, Result};

/// A labeled demand for `quantity` pieces of one length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutRequest {
    /// Opaque identifier, unique within a [`CutList`].
    pub id: String,
    /// Piece length in inches.
    pub length: f64,
    /// Number of pieces.
    pub quantity: u32,
    /// Display label.
    pub label: String,
}

impl CutRequest {
    /// Creates a single-piece request labeled with its id.
    pub fn new(id: impl Into<String>, length: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            length,
            quantity: 1,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// A copy of this request standing for exactly one piece.
    pub fn unit(&self) -> Self {
        Self {
            quantity: 1,
            ..self.clone()
        }
    }

    /// Total length of all pieces, excluding kerf.
    pub fn total_length(&self) -> f64 {
        self.length * self.quantity as f64
    }

    /// Checks length and quantity, and that one piece fits on `board_length`.
    pub fn validate(&self, board_length: f64) -> Result<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(Error::InvalidCut(format!(
                "'{}' has non-positive length {}",
                self.label, self.length
            )));
        }
        if self.quantity == 0 {
            return Err(Error::InvalidCut(format!(
                "'{}' has zero quantity",
                self.label
            )));
        }
        if self.length > board_length {
            return Err(Error::CutExceedsBoard {
                label: self.label.clone(),
                length: self.length,
                board_length,
            });
        }
        Ok(())
    }
}

/// An ordered, editable list of cut requests.
///
/// Requests are validated on insertion. When the list is bound to a board
/// length, cuts longer than the board are refused.
#[derive(Debug, Clone, Default)]
pub struct CutList {
    cuts: Vec<CutRequest>,
    board_length: Option<f64>,
    next_id: u64,
}

impl CutList {
    /// Creates an empty list with no board length bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list that refuses cuts longer than `board_length`.
    pub fn for_board(board_length: f64) -> Self {
        Self {
            board_length: Some(board_length),
            ..Self::default()
        }
    }

    /// Board length this list validates against, if any.
    pub fn board_length(&self) -> Option<f64> {
        self.board_length
    }

    /// Adds a cut. A blank label becomes `"Cut N"` (N = position in the list).
    ///
    /// Returns the stored request.
    pub fn add(&mut self, length: f64, quantity: u32, label: &str) -> Result<&CutRequest> {
        let label = if label.trim().is_empty() {
            format!("Cut {}", self.cuts.len() + 1)
        } else {
            label.trim().to_string()
        };
        self.next_id += 1;
        let request = CutRequest {
            id: self.next_id.to_string(),
            length,
            quantity,
            label,
        };
        self.push(request)
    }

    /// Adds a prepared request, keeping its id.
    pub fn add_request(&mut self, request: CutRequest) -> Result<&CutRequest> {
        self.push(request)
    }

    fn push(&mut self, request: CutRequest) -> Result<&CutRequest> {
        request.validate(self.board_length.unwrap_or(f64::INFINITY))?;
        self.cuts.push(request);
        Ok(&self.cuts[self.cuts.len() - 1])
    }

    /// Removes the request with the given id.
    pub fn remove(&mut self, id: &str) -> Option<CutRequest> {
        let index = self.cuts.iter().position(|c| c.id == id)?;
        Some(self.cuts.remove(index))
    }

    /// Removes all requests.
    pub fn clear(&mut self) {
        self.cuts.clear();
    }

    /// Requests in insertion order.
    pub fn cuts(&self) -> &[CutRequest] {
        &self.cuts
    }

    /// Iterates over requests in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CutRequest> {
        self.cuts.iter()
    }

    /// Number of requests (not pieces).
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Returns true if there are no requests.
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Number of pieces after quantity expansion.
    pub fn total_pieces(&self) -> u64 {
        self.cuts.iter().map(|c| c.quantity as u64).sum()
    }

    /// Combined length of all pieces, excluding kerf.
    pub fn total_length(&self) -> f64 {
        self.cuts.iter().map(CutRequest::total_length).sum()
    }
}

impl<'a> IntoIterator for &'a CutList {
    type Item = &'a CutRequest;
    type IntoIter = std::slice::Iter<'a, CutRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.cuts.iter()
    }
}
