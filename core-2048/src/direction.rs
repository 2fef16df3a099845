use crate::codec::DecodeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Ordinal stored in the action log.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = DecodeError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or(DecodeError::InvalidDirection(ordinal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        let ordinals: Vec<u8> = Direction::iter().map(Direction::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn decode_ordinal() {
        for direction in Direction::iter() {
            assert_eq!(Direction::try_from(direction.ordinal()), Ok(direction));
        }
        assert_eq!(
            Direction::try_from(4),
            Err(DecodeError::InvalidDirection(4))
        );
    }
}
