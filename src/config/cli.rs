use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::{EncodeOptions, Mode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_exclusive, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "morse", version)]
#[command(about = "Converts text to Morse code or decodes Morse code back to text")]
#[command(after_help = "Reads standard input when no FILE is given.\n\n\
Examples:\n  \
echo \"Hello World\" | morse           Encode text from standard input\n  \
morse -d morse.txt                   Decode a file\n  \
morse input.txt -o output.morse      Encode a file into another file")]
pub struct CliConfig {
    /// Encode text to Morse code (default)
    #[arg(short, long)]
    pub encode: bool,

    /// Decode Morse code to text
    #[arg(short, long)]
    pub decode: bool,

    /// Write the output to FILE instead of standard output
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<String>,

    /// Use '/' as word separator (only with --encode)
    #[arg(long)]
    pub slash_wordspacer: bool,

    /// Print programmer information as JSON and exit
    #[arg(long)]
    pub programmer_info: bool,

    /// Optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Input files, concatenated in order
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl CliConfig {
    pub fn mode(&self) -> Mode {
        if self.decode {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }

    /// 命令列旗標優先，未指定時才使用設定檔的值
    pub fn into_settings(self, file: Option<&TomlConfig>) -> Settings {
        let mode = self.mode();
        let file_slash = file.map(|f| f.slash_word_separator()).unwrap_or(false);
        // 設定檔的 slash 預設只影響編碼
        let use_slash_word_separator =
            self.slash_wordspacer || (mode == Mode::Encode && file_slash);

        Settings {
            mode,
            encode_options: EncodeOptions {
                use_slash_word_separator,
            },
            input_files: self.files.into_iter().map(PathBuf::from).collect(),
            output_file: self.out.map(PathBuf::from),
            verbose: self.verbose,
            log_json: self.log_json || file.map(|f| f.log_json()).unwrap_or(false),
            log_level: file.and_then(|f| f.log_level()).map(str::to_string),
            show_programmer_info: self.programmer_info,
            programmer: file.map(|f| f.programmer_info()).unwrap_or_default(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_exclusive(("--encode", self.encode), ("--decode", self.decode))?;
        validate_exclusive(
            ("--slash-wordspacer", self.slash_wordspacer),
            ("--decode", self.decode),
        )?;
        Ok(())
    }
}
