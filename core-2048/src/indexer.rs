use crate::{board::MAX_SIDE, direction::Direction};

/// Cell indices of every line for each direction, ordered from the edge tiles
/// slide towards to the opposite edge.
///
/// For a 4x4 board the `Down` table reads
///
/// ```text
/// 12,  8,  4,  0,
/// 13,  9,  5,  1,
/// 14, 10,  6,  2,
/// 15, 11,  7,  3,
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    side: usize,
    tables: [Box<[usize]>; 4],
}

const fn cell_index(direction: Direction, side: usize, line: usize, position: usize) -> usize {
    match direction {
        Direction::Left => line * side + position,
        Direction::Right => (line + 1) * side - (position + 1),
        Direction::Up => position * side + line,
        Direction::Down => (side - position - 1) * side + line,
    }
}

impl LineIndex {
    /// Panics if `side` is not in `1..=MAX_SIDE`, like `Board::new`.
    pub fn new(side: usize) -> Self {
        assert!(
            (1..=MAX_SIDE).contains(&side),
            "side length {side} outside 1..={MAX_SIDE}"
        );

        let tables: [Box<[usize]>; 4] = Direction::ALL.map(|direction| {
            (0..side)
                .flat_map(|line| {
                    (0..side).map(move |position| cell_index(direction, side, line, position))
                })
                .collect()
        });

        Self { side, tables }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn lines(&self, direction: Direction) -> impl Iterator<Item = &[usize]> {
        self.tables[direction as usize].chunks_exact(self.side)
    }
}
