#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{EncodeOptions, Mode, ProgrammerInfo};
use crate::utils::error::Result;
use crate::utils::validation::{validate_exclusive, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Effective settings after merging command-line flags and the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub mode: Mode,
    pub encode_options: EncodeOptions,
    pub input_files: Vec<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub verbose: bool,
    pub log_json: bool,
    pub log_level: Option<String>,
    pub show_programmer_info: bool,
    pub programmer: ProgrammerInfo,
}

impl ConfigProvider for Settings {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn encode_options(&self) -> EncodeOptions {
        self.encode_options
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_exclusive(
            ("--slash-wordspacer", self.encode_options.use_slash_word_separator),
            ("--decode", self.mode == Mode::Decode),
        )?;

        if let Some(path) = &self.output_file {
            validate_path("out", &path.to_string_lossy())?;
        }
        for path in &self.input_files {
            validate_path("file", &path.to_string_lossy())?;
        }

        Ok(())
    }
}
