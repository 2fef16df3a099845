use crate::{
    board::{Board, MAX_SIDE},
    direction::Direction,
    indexer::LineIndex,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub changed: bool,
    pub score: u64,
}

impl MergeOutcome {
    fn combine(self, other: Self) -> Self {
        Self {
            changed: self.changed || other.changed,
            score: self.score + other.score,
        }
    }
}

/// Slides and merges the cells named by `line` towards its first index.
///
/// Equal neighbours merge pairwise from the leading edge and a merged tile
/// does not merge again in the same move, so `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]`.
///
/// Panics if `line` is longer than `MAX_SIDE`.
pub fn merge_line(cells: &mut [u32], line: &[usize]) -> MergeOutcome {
    assert!(
        line.len() <= MAX_SIDE,
        "line of {} cells exceeds {MAX_SIDE}",
        line.len()
    );

    let mut compacted = [0u32; MAX_SIDE];
    let mut len = 0;

    for cell in line.iter().map(|&index| cells[index]).filter(|&cell| cell != 0) {
        compacted[len] = cell;
        len += 1;
    }

    let mut score = 0;
    let mut i = 1;

    while i < len {
        if compacted[i - 1] == compacted[i] {
            compacted[i - 1] += compacted[i];
            score += u64::from(compacted[i - 1]);

            compacted.copy_within(i + 1..len, i);
            len -= 1;
            compacted[len] = 0;
        }

        i += 1;
    }

    let mut changed = false;

    for (&index, &cell) in line.iter().zip(&compacted) {
        changed |= cells[index] != cell;
        cells[index] = cell;
    }

    MergeOutcome { changed, score }
}

/// Runs `merge_line` over every line of `direction`.
pub fn slide(board: &mut Board, index: &LineIndex, direction: Direction) -> MergeOutcome {
    debug_assert_eq!(board.side(), index.side());

    let cells = board.cells_mut();

    index
        .lines(direction)
        .fold(MergeOutcome::default(), |outcome, line| {
            outcome.combine(merge_line(cells, line))
        })
}
