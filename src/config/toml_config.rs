use crate::domain::model::ProgrammerInfo;
use crate::utils::error::{MorseError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub encode: Option<EncodeSection>,
    pub logging: Option<LoggingSection>,
    pub programmer: Option<ProgrammerInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncodeSection {
    pub slash_word_separator: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| MorseError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MorseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MorseError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn slash_word_separator(&self) -> bool {
        self.encode
            .as_ref()
            .and_then(|e| e.slash_word_separator)
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn programmer_info(&self) -> ProgrammerInfo {
        self.programmer.clone().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        if let Some(programmer) = &self.programmer {
            validate_non_empty_string("programmer.firstname", &programmer.firstname)?;
            validate_non_empty_string("programmer.surname", &programmer.surname)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[encode]
slash_word_separator = true

[logging]
level = "debug"
json = true

[programmer]
firstname = "Ada"
surname = "Lovelace"
branch_of_study = "TIT"
contact = "ada@example.org"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.slash_word_separator());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.log_json());
        assert_eq!(config.programmer_info().surname, "Lovelace");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(!config.slash_word_separator());
        assert_eq!(config.log_level(), None);
        assert_eq!(config.programmer_info(), ProgrammerInfo::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MORSE_TEST_CONTACT", "op@example.org");

        let toml_content = r#"
[programmer]
firstname = "Ada"
surname = "Lovelace"
branch_of_study = "TIT"
contact = "${MORSE_TEST_CONTACT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.programmer_info().contact, "op@example.org");

        std::env::remove_var("MORSE_TEST_CONTACT");
    }

    #[test]
    fn test_unset_env_var_kept_literally() {
        std::env::remove_var("MORSE_TEST_UNSET_SURNAME");

        let toml_content = r#"
[programmer]
firstname = "Ada"
surname = "${MORSE_TEST_UNSET_SURNAME}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.programmer_info().surname,
            "${MORSE_TEST_UNSET_SURNAME}"
        );
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[encode\nslash_word_separator = 1");
        assert!(matches!(result, Err(MorseError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[encode]\nslash_word_separator = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.slash_word_separator());
    }
}
