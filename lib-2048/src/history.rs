use core_2048::{slide, Board, DecodeError, Direction, EncodedPlacement, LineIndex, TilePlacement};

/// Tiles placed before the first action.
pub const INITIAL_TILE_COUNT: usize = 2;

const HISTORY_EXPAND_LENGTH: usize = 1024;

/// Append-only logs of committed actions and placed tiles, enough to rebuild
/// every board a game has passed through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    actions: Vec<u8>,
    placements: Vec<EncodedPlacement>,
}

fn reserve_ahead<T>(log: &mut Vec<T>) {
    if log.len() == log.capacity() {
        log.reserve(HISTORY_EXPAND_LENGTH);
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            actions: Vec::with_capacity(HISTORY_EXPAND_LENGTH),
            placements: Vec::with_capacity(HISTORY_EXPAND_LENGTH),
        }
    }

    /// Wraps logs produced elsewhere, e.g. an exported game.
    pub fn from_logs(actions: Vec<u8>, placements: Vec<EncodedPlacement>) -> Self {
        Self {
            actions,
            placements,
        }
    }

    pub fn record_action(&mut self, direction: Direction) {
        reserve_ahead(&mut self.actions);
        self.actions.push(direction.ordinal());
    }

    pub fn record_placement(&mut self, placement: TilePlacement) {
        reserve_ahead(&mut self.placements);
        self.placements.push(placement.encode());
    }

    pub fn actions(&self) -> &[u8] {
        &self.actions
    }

    pub fn placements(&self) -> &[EncodedPlacement] {
        &self.placements
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Rebuilds the board before each action plus the board after the last
    /// one, using nothing but the two logs.
    ///
    /// Every action must be followed by a placement, since a move that changes
    /// the board always leaves a cell free.
    pub fn replay(&self, index: &LineIndex) -> Result<Vec<Board>, DecodeError> {
        let mut board = Board::new(index.side());

        let initial = INITIAL_TILE_COUNT.min(board.cell_count());
        let expected = initial + self.actions.len();

        if self.placements.len() < expected {
            return Err(DecodeError::MissingPlacement {
                expected,
                found: self.placements.len(),
            });
        }

        let (initial_tiles, action_tiles) = self.placements.split_at(initial);

        for encoded in initial_tiles {
            place_checked(&mut board, encoded.decode())?;
        }

        let mut snapshots = Vec::with_capacity(self.actions.len() + 1);
        snapshots.push(board.clone());

        for (&ordinal, encoded) in self.actions.iter().zip(action_tiles) {
            slide(&mut board, index, Direction::try_from(ordinal)?);
            place_checked(&mut board, encoded.decode())?;

            snapshots.push(board.clone());
        }

        Ok(snapshots)
    }
}

fn place_checked(board: &mut Board, placement: TilePlacement) -> Result<(), DecodeError> {
    if placement.location >= board.cell_count() {
        return Err(DecodeError::LocationOutOfRange {
            location: placement.location,
            cells: board.cell_count(),
        });
    }

    board.place(placement);
    Ok(())
}
