pub use core_2048::*;

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod spawn;

pub use config::EngineConfig;
pub use engine::GameEngine;
pub use error::{ConfigError, EngineError};
pub use history::History;
pub use spawn::TileGenerator;
