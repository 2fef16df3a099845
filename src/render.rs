use std::io::{self, Write};

use lib_2048::Board;

use crate::command::Mode;

const COLOUR_TABLE: [u8; 7] = [90, 33, 31, 32, 33, 36, 35];

/// What the header line reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub mode: Mode,
    pub score: u64,
    pub step: usize,
    pub actions: usize,
}

fn header(status: &Status, frame_width: usize) -> String {
    let mut line = format!(
        "| status: {} | score: {} | step: ",
        status.mode, status.score
    );

    match status.mode {
        Mode::Play => line.push_str(&format!("{} ", status.actions)),
        Mode::Replay => line.push_str(&format!("{}/{} ", status.step, status.actions)),
    }

    if line.len() + 1 < frame_width {
        line.push_str(&" ".repeat(frame_width - line.len() - 1));
    }

    line.push('|');
    line
}

const fn digits(value: u32) -> usize {
    match value.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Inner width of a cell: wide enough for the largest tile, and stretched so
/// the grid is at least as wide as the header.
fn cell_width(board: &Board, status: &Status) -> usize {
    let side = board.side();
    let grid_width = (digits(board.max_tile()) + 3) * side + 1;
    let header_width = header(status, 0).len();

    (grid_width.max(header_width) + side - 2) / side - 3
}

fn draw_cell(out: &mut impl Write, cell: u32, width: usize, colour: bool) -> io::Result<()> {
    out.write_all(b"| ")?;

    if cell == 0 {
        write!(out, "{:width$}", "")?;
    } else if colour {
        let exponent = cell.trailing_zeros() as usize;
        let colour = COLOUR_TABLE[exponent.saturating_sub(1) % COLOUR_TABLE.len()];

        write!(out, "\x1b[7m\x1b[{colour}m{cell:^width$}\x1b[m")?;
    } else {
        write!(out, "{cell:^width$}")?;
    }

    out.write_all(b" ")
}

pub fn draw_frame(
    out: &mut impl Write,
    board: &Board,
    status: &Status,
    colour: bool,
) -> io::Result<()> {
    let width = cell_width(board, status);
    let frame_width = (width + 3) * board.side() + 1;

    let outer = "=".repeat(frame_width);
    let inner = "-".repeat(frame_width);

    writeln!(out, "{outer}")?;
    writeln!(out, "{}", header(status, frame_width))?;
    writeln!(out, "{outer}")?;

    for (i, row) in board.rows().enumerate() {
        if i != 0 {
            writeln!(out, "{inner}")?;
        }

        for &cell in row {
            draw_cell(out, cell, width, colour)?;
        }

        out.write_all(b"|\n")?;
    }

    writeln!(out, "{outer}")?;
    out.flush()
}
