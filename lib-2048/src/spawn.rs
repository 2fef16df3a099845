use log::trace;
use rand::Rng;

use core_2048::{Board, TilePlacement};

/// Drops a 2 or a 4 onto a uniformly chosen empty cell.
pub struct TileGenerator<R> {
    rng: R,
    random_factor_of_2: f64,
}

impl<R> TileGenerator<R> {
    pub const fn new(rng: R, random_factor_of_2: f64) -> Self {
        Self {
            rng,
            random_factor_of_2,
        }
    }

    pub fn random_factor_of_2(&self) -> f64 {
        self.random_factor_of_2
    }
}

impl<R> TileGenerator<R>
where
    R: Rng,
{
    /// Picks a placement without touching the board. `None` when the board is
    /// full.
    pub fn generate(&mut self, board: &Board) -> Option<TilePlacement> {
        let empty_count = board.empty_cells().count();

        if empty_count == 0 {
            return None;
        }

        let slot_idx = self.rng.gen_range(0..empty_count);
        let location = board.empty_cells().nth(slot_idx)?;

        let draw: f64 = self.rng.gen();
        let value = if draw > self.random_factor_of_2 { 4 } else { 2 };

        Some(TilePlacement { location, value })
    }

    /// Generates a placement and applies it.
    pub fn spawn(&mut self, board: &mut Board) -> Option<TilePlacement> {
        let placement = self.generate(board)?;
        board.place(placement);

        trace!("placed {} at cell {}", placement.value, placement.location);

        Some(placement)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn generator(random_factor_of_2: f64) -> TileGenerator<ChaCha8Rng> {
        TileGenerator::new(ChaCha8Rng::seed_from_u64(7), random_factor_of_2)
    }

    #[test]
    fn single_empty_cell_is_chosen() {
        let mut generator = generator(0.5);

        for hole in 0..9 {
            let mut cells = vec![2; 9];
            cells[hole] = 0;
            let board = Board::from_cells(3, cells);

            let placement = generator.generate(&board).unwrap();
            assert_eq!(placement.location, hole);
        }
    }

    #[test]
    fn full_board_places_nothing() {
        let mut generator = generator(0.5);
        let mut board = Board::from_cells(2, vec![2, 4, 8, 16]);

        assert_eq!(generator.spawn(&mut board), None);
        assert_eq!(board.cells(), &[2, 4, 8, 16]);
    }

    #[test]
    fn threshold_selects_value() {
        let board = Board::new(4);

        // Draws lie in [0, 1), never above 1.
        let mut only_twos = generator(1.0);
        // Only an exact 0.0 draw stays at or below 0.
        let mut mostly_fours = generator(0.0);

        for _ in 0..200 {
            assert_eq!(only_twos.generate(&board).unwrap().value, 2);
        }

        let fours = (0..200)
            .filter(|_| mostly_fours.generate(&board).unwrap().value == 4)
            .count();
        assert!(fours >= 199);
    }

    #[test]
    fn spawn_fills_an_empty_cell() {
        let mut generator = generator(0.75);
        let mut board = Board::new(4);

        for filled in 1..=16 {
            let placement = generator.spawn(&mut board).unwrap();
            assert!(placement.value == 2 || placement.value == 4);
            assert_eq!(board.get(placement.location), placement.value);
            assert_eq!(board.empty_cells().count(), 16 - filled);
        }

        assert!(board.is_full());
    }
}
