use crate::codec::TilePlacement;

/// Largest side length whose cell indices fit in a placement byte.
pub const MAX_SIDE: usize = 8;

/// Square grid of tile values stored row-major. `0` marks an empty cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Empty board of `side * side` cells.
    ///
    /// Panics if `side` is not in `1..=MAX_SIDE`; callers validate user input
    /// before getting here.
    pub fn new(side: usize) -> Self {
        assert!(
            (1..=MAX_SIDE).contains(&side),
            "side length {side} outside 1..={MAX_SIDE}"
        );

        Self {
            side,
            cells: vec![0; side * side],
        }
    }

    pub fn from_cells(side: usize, cells: Vec<u32>) -> Self {
        let mut board = Self::new(side);
        assert_eq!(cells.len(), board.cells.len(), "cell count for side {side}");
        board.cells = cells;
        board
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    pub fn get(&self, index: usize) -> u32 {
        self.cells[index]
    }

    pub fn place(&mut self, placement: TilePlacement) {
        self.cells[placement.location] = placement.value;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.side)
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, &cell)| (cell == 0).then_some(index))
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}
