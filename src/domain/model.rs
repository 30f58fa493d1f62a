use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// 單一 Morse 記號
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Dot,
    Dash,
}

impl Mark {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Mark::Dot),
            b'-' => Some(Mark::Dash),
            _ => None,
        }
    }
}

/// 字元與其 Morse 表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub character: char,
    pub code: String,
}

impl SymbolEntry {
    pub fn new(character: char, code: impl Into<String>) -> Self {
        Self {
            character,
            code: code.into(),
        }
    }

    /// Marks of the code; `None` for any byte that is neither `.` nor `-`.
    pub fn marks(&self) -> impl Iterator<Item = Option<Mark>> + '_ {
        self.code.bytes().map(Mark::from_byte)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    pub use_slash_word_separator: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgrammerInfo {
    pub firstname: String,
    pub surname: String,
    pub branch_of_study: String,
    pub contact: String,
}

impl Default for ProgrammerInfo {
    fn default() -> Self {
        Self {
            firstname: "VORNAME".to_string(),
            surname: "NACHNAME".to_string(),
            branch_of_study: "TIT".to_string(),
            contact: String::new(),
        }
    }
}

impl ProgrammerInfo {
    /// `--programmer-info` 的輸出格式：四格縮排的 JSON
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programmer_info_uses_four_space_indent() {
        let json = ProgrammerInfo::default().to_pretty_json().unwrap();

        assert!(json.starts_with("{\n    \"firstname\": \"VORNAME\","));
        assert!(json.contains("\n    \"branch_of_study\": \"TIT\","));
        assert!(json.ends_with("\n}"));
        assert!(!json.contains("\n  \""));
    }

    #[test]
    fn test_programmer_info_json_round_trips() {
        let info = ProgrammerInfo {
            firstname: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            branch_of_study: "MATH".to_string(),
            contact: "ada@example.org".to_string(),
        };

        let json = info.to_pretty_json().unwrap();
        let parsed: ProgrammerInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }
}
