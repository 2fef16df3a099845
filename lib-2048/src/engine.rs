use log::{debug, error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use core_2048::{slide, Board, Direction, EncodedPlacement, LineIndex};

use crate::{
    config::EngineConfig,
    error::EngineError,
    history::{History, INITIAL_TILE_COUNT},
    spawn::TileGenerator,
};

/// A single game: the live board, its score and the logs needed to replay it.
///
/// The tile generator is the only source of randomness, so two engines built
/// from the same seed and fed the same directions stay identical.
pub struct GameEngine<R = ChaCha8Rng> {
    board: Board,
    index: LineIndex,
    score: u64,
    history: History,
    generator: TileGenerator<R>,
}

impl GameEngine<ChaCha8Rng> {
    pub fn new(side_length: usize, random_factor_of_2: f64) -> Result<Self, EngineError> {
        Self::with_rng(
            EngineConfig::new(side_length, random_factor_of_2),
            ChaCha8Rng::from_entropy(),
        )
    }

    pub fn from_seed(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R> GameEngine<R>
where
    R: Rng,
{
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;

        let side = config.side_length;

        let mut engine = Self {
            board: Board::new(side),
            index: LineIndex::new(side),
            score: 0,
            history: History::new(),
            generator: TileGenerator::new(rng, config.random_factor_of_2),
        };

        for _ in 0..INITIAL_TILE_COUNT {
            engine.place_tile();
        }

        info!(
            "new {side}x{side} game, random factor of 2 {}",
            config.random_factor_of_2
        );

        Ok(engine)
    }

    /// Slides the board towards `direction`. Returns `false`, leaving the
    /// engine untouched, when nothing would move.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        let mut board = self.board.clone();
        let outcome = slide(&mut board, &self.index, direction);

        if !outcome.changed {
            debug!("{direction:?} leaves the board unchanged");
            return false;
        }

        self.board = board;
        self.score += outcome.score;
        self.history.record_action(direction);
        self.place_tile();

        debug!(
            "action {}: {direction:?} scored {}, total {}",
            self.history.action_count(),
            outcome.score,
            self.score
        );

        true
    }

    fn place_tile(&mut self) {
        if let Some(placement) = self.generator.spawn(&mut self.board) {
            self.history.record_placement(placement);
        }
    }
}

impl<R> GameEngine<R> {
    pub fn is_game_over(&self) -> bool {
        Direction::iter().all(|direction| {
            let mut board = self.board.clone();

            !slide(&mut board, &self.index, direction).changed
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row-major copy of the cells.
    pub fn board_snapshot(&self) -> Vec<u32> {
        self.board.cells().to_vec()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn action_count(&self) -> usize {
        self.history.action_count()
    }

    pub fn side_length(&self) -> usize {
        self.board.side()
    }

    pub fn random_factor_of_2(&self) -> f64 {
        self.generator.random_factor_of_2()
    }

    pub fn action_history(&self) -> &[u8] {
        self.history.actions()
    }

    pub fn placement_history(&self) -> &[EncodedPlacement] {
        self.history.placements()
    }

    /// Every board from the start of the game to now, rebuilt from the logs.
    ///
    /// The last snapshot must match the live board; a mismatch means the logs
    /// and the board have drifted apart and is reported as an error.
    pub fn replay(&self) -> Result<Vec<Board>, EngineError> {
        let snapshots = self.history.replay(&self.index)?;

        let replayed = snapshots.last().map_or(&[][..], Board::cells);
        let live = self.board.cells();

        let divergence = replayed
            .iter()
            .zip(live)
            .position(|(replayed, live)| replayed != live);

        if let Some(cell) = divergence {
            let (replayed, live) = (replayed[cell], live[cell]);
            error!("replay diverged at cell {cell}: replayed {replayed}, live {live}");

            return Err(EngineError::InternalConsistency {
                cell,
                replayed,
                live,
            });
        }

        Ok(snapshots)
    }
}
