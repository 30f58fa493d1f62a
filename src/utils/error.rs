use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Conflicting options: {first} and {second} cannot be used together")]
    ConflictingOptions { first: String, second: String },

    #[error("Invalid symbol table: {message}")]
    InvalidTable { message: String },

    #[error("Processing failed: no input was provided")]
    AbsentInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MorseError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MorseError::IoError(_) => ErrorSeverity::Critical,
            MorseError::SerializationError(_) => ErrorSeverity::Medium,
            MorseError::InvalidTable { .. } => ErrorSeverity::Critical,
            MorseError::ConfigError { .. }
            | MorseError::InvalidConfigValueError { .. }
            | MorseError::ConflictingOptions { .. }
            | MorseError::AbsentInput => ErrorSeverity::High,
        }
    }

    /// 進程結束碼：驗證與處理錯誤為 1，系統錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MorseError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                _ => format!("Could not read or write data: {}", e),
            },
            MorseError::ConflictingOptions { first, second } => {
                format!("The options {} and {} cannot be used together.", first, second)
            }
            MorseError::AbsentInput => "Processing failed.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MorseError::IoError(_) => "Check that the input files exist and the output path is writable",
            MorseError::SerializationError(_) => "Check the programmer section of the configuration file",
            MorseError::ConfigError { .. } => "Make sure the configuration file exists and is valid TOML",
            MorseError::InvalidConfigValueError { .. } => "Fix the reported value and run again",
            MorseError::ConflictingOptions { .. } => {
                "Use either --encode or --decode; --slash-wordspacer only works with --encode"
            }
            MorseError::InvalidTable { .. } => "Table entries need unique characters and unique codes made of '.' and '-'",
            MorseError::AbsentInput => "Provide input through a file argument or standard input",
        }
    }
}

pub type Result<T> = std::result::Result<T, MorseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let io = MorseError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "x.txt"));
        assert_eq!(io.exit_code(), 3);
        assert_eq!(MorseError::AbsentInput.exit_code(), 1);

        let conflict = MorseError::ConflictingOptions {
            first: "--encode".to_string(),
            second: "--decode".to_string(),
        };
        assert_eq!(conflict.severity(), ErrorSeverity::High);
        assert!(conflict.user_friendly_message().contains("--decode"));
    }
}
