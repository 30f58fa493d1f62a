pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{LocalInput, LocalOutput};
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    engine::MorseEngine,
    symbol_table::SymbolTable,
    transcoder::{decode_from_morse, encode_to_morse, Transcoder},
};
pub use domain::model::{EncodeOptions, Mode, ProgrammerInfo};
pub use utils::error::{MorseError, Result};
