//! Board primitives for the sliding-tile game: the grid itself, the four
//! slide directions, per-direction line tables, the line merge and the
//! one-byte tile placement codec used by replay logs.

pub mod board;
pub mod codec;
pub mod direction;
pub mod indexer;
pub mod merge;

pub use board::{Board, MAX_SIDE};
pub use codec::{DecodeError, EncodedPlacement, TilePlacement};
pub use direction::Direction;
pub use indexer::LineIndex;
pub use merge::{merge_line, slide, MergeOutcome};
