//! One-byte encoding of a tile placement for the replay log.
//!
//! Layout: bit 6 is set when the placed value is 4 (clear for 2), bits 0..=5
//! hold the cell index. Boards with more than 64 cells lose the high location
//! bits, which is why `MAX_SIDE` is 8.

const LOCATION_MASK: u8 = 0x3f;
const FOUR_FLAG_SHIFT: u32 = 6;

/// Failure to read a replay log entry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid direction ordinal {0}")]
    InvalidDirection(u8),
    #[error("placement at cell {location} outside a board of {cells} cells")]
    LocationOutOfRange { location: usize, cells: usize },
    #[error("placement log holds {found} entries, {expected} needed")]
    MissingPlacement { expected: usize, found: usize },
}

/// A tile dropped onto an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TilePlacement {
    pub location: usize,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodedPlacement(u8);

impl TilePlacement {
    pub fn encode(self) -> EncodedPlacement {
        let four_flag = u8::from(self.value == 4) << FOUR_FLAG_SHIFT;
        // Truncation above 64 cells is part of the format.
        let location = (self.location & usize::from(LOCATION_MASK)) as u8;

        EncodedPlacement(four_flag | location)
    }
}

impl EncodedPlacement {
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn byte(self) -> u8 {
        self.0
    }

    pub fn decode(self) -> TilePlacement {
        let value = if (self.0 >> FOUR_FLAG_SHIFT) & 1 == 1 { 4 } else { 2 };

        TilePlacement {
            location: usize::from(self.0 & LOCATION_MASK),
            value,
        }
    }
}
