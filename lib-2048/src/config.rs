use core_2048::MAX_SIDE;

use crate::error::ConfigError;

pub const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub side_length: usize,
    /// A uniform draw above this threshold spawns a 4, otherwise a 2.
    pub random_factor_of_2: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            side_length: 4,
            random_factor_of_2: 0.75,
        }
    }
}

impl EngineConfig {
    pub fn new(side_length: usize, random_factor_of_2: f64) -> Self {
        Self {
            side_length,
            random_factor_of_2,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = self.side_length.saturating_mul(self.side_length);

        if !(1..=MAX_CELLS).contains(&cells) {
            return Err(ConfigError::SideLength(self.side_length));
        }

        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.random_factor_of_2) {
            return Err(ConfigError::RandomFactor(self.random_factor_of_2));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn side_length_bounds() {
        assert_eq!(EngineConfig::new(1, 0.5).validate(), Ok(()));
        assert_eq!(EngineConfig::new(8, 0.5).validate(), Ok(()));
        assert_eq!(
            EngineConfig::new(0, 0.5).validate(),
            Err(ConfigError::SideLength(0))
        );
        assert_eq!(
            EngineConfig::new(9, 0.5).validate(),
            Err(ConfigError::SideLength(9))
        );
        assert_eq!(
            EngineConfig::new(usize::MAX, 0.5).validate(),
            Err(ConfigError::SideLength(usize::MAX))
        );
    }

    #[test]
    fn random_factor_bounds() {
        assert!(EngineConfig::new(4, 0.0).validate().is_ok());
        assert!(EngineConfig::new(4, 1.0).validate().is_ok());
        assert!(EngineConfig::new(4, -0.1).validate().is_err());
        assert!(EngineConfig::new(4, 1.5).validate().is_err());
        assert!(EngineConfig::new(4, f64::NAN).validate().is_err());
    }
}
