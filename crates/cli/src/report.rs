//! Plain-text rendering of cut plans.

use std::fmt::{self, Write};

use u_cutlist_core::{format_length, Fraction};
use u_cutlist_cutting::{BoardAssignment, CutPlan};

/// Width of the board diagram in characters.
const DIAGRAM_WIDTH: usize = 48;

/// Renders a plan as a human-readable report.
pub fn render_plan(plan: &CutPlan) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let summary = plan.summary();

    writeln!(
        out,
        "Stock: {} boards, kerf {}\"",
        format_length(plan.board_length),
        kerf_label(plan.kerf)
    )?;
    writeln!(out, "Boards needed: {}", plan.total_boards_needed)?;
    writeln!(
        out,
        "Total waste: {} ({:.1}%)",
        format_length(plan.total_waste),
        plan.waste_percentage
    )?;
    if summary.efficient {
        writeln!(out, "Efficient plan: waste under 5%")?;
    }

    for board in &plan.boards {
        writeln!(out)?;
        render_board(&mut out, board, plan.board_length)?;
    }
    Ok(out)
}

fn render_board(out: &mut String, board: &BoardAssignment, board_length: f64) -> fmt::Result {
    writeln!(
        out,
        "Board {}  [{}]  waste {}",
        board.board_number,
        diagram(board, board_length),
        format_length(board.waste())
    )?;
    for placement in &board.placements {
        writeln!(
            out,
            "  @ {:>9}  {:<20} {}",
            format_length(placement.position),
            placement.cut.label,
            format_length(placement.cut.length)
        )?;
    }
    Ok(())
}

/// One letter per piece, scaled to the board; `.` marks residual.
fn diagram(board: &BoardAssignment, board_length: f64) -> String {
    let scale = DIAGRAM_WIDTH as f64 / board_length;
    let mut cells = vec!['.'; DIAGRAM_WIDTH];
    for (i, placement) in board.placements.iter().enumerate() {
        let glyph = (b'A' + (i % 26) as u8) as char;
        let start = (placement.position * scale).floor() as usize;
        let end = ((placement.end() * scale).ceil() as usize).min(DIAGRAM_WIDTH);
        for cell in cells.iter_mut().take(end).skip(start) {
            *cell = glyph;
        }
    }
    cells.into_iter().collect()
}

fn kerf_label(kerf: f64) -> String {
    Fraction::from_decimal(kerf)
        .map(|f| f.to_string())
        .unwrap_or_else(|_| format!("{}", kerf))
}
