use core_2048::DecodeError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("side length {0} must give between 1 and 64 cells")]
    SideLength(usize),
    #[error("random factor of 2 must lie in [0, 1], got {0}")]
    RandomFactor(f64),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("corrupted history: {0}")]
    CorruptHistory(#[from] DecodeError),
    #[error(
        "replayed board diverges from live board at cell {cell}: replayed {replayed}, live {live}"
    )]
    InternalConsistency { cell: usize, replayed: u32, live: u32 },
}
