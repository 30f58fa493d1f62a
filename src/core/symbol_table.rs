use crate::core::letter_buffer::MAX_LETTER_MARKS;
use crate::domain::model::SymbolEntry;
use crate::utils::error::{MorseError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// 拉丁字母表：字母、數字、標點、數學與格式符號
const LATIN_TABLE: &[(char, &str)] = &[
    // 字母
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    // 數字
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    // 標點
    ('.', ".-.-.-"),
    (',', "--..--"),
    (':', "---..."),
    (';', "-.-.-."),
    ('?', "..--.."),
    // 數學符號
    ('=', "-...-"),
    ('-', "-....-"),
    ('+', ".-.-."),
    // 格式符號
    ('_', "..--.-"),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('/', "-..-."),
    ('@', ".--.-."),
];

/// Immutable two-way mapping between characters and Morse codes.
///
/// Character lookups are case-insensitive (ASCII upper-casing); code lookups
/// are exact string matches. Build one with [`SymbolTable::standard`] or
/// [`SymbolTable::from_entries`] and share it by reference.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    by_char: HashMap<char, String>,
    by_code: HashMap<String, char>,
}

impl SymbolTable {
    /// 全程序共用的拉丁表，第一次呼叫時建立
    pub fn standard() -> &'static SymbolTable {
        static STANDARD: OnceLock<SymbolTable> = OnceLock::new();
        STANDARD.get_or_init(SymbolTable::latin)
    }

    pub fn latin() -> Self {
        let mut by_char = HashMap::with_capacity(LATIN_TABLE.len());
        let mut by_code = HashMap::with_capacity(LATIN_TABLE.len());
        for &(character, code) in LATIN_TABLE {
            by_char.insert(character, code.to_string());
            by_code.insert(code.to_string(), character);
        }
        Self { by_char, by_code }
    }

    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SymbolEntry>,
    {
        let mut by_char = HashMap::new();
        let mut by_code = HashMap::new();

        for entry in entries {
            let character = validate_character(entry.character)?;
            validate_code(&entry)?;

            if by_char.contains_key(&character) {
                return Err(MorseError::InvalidTable {
                    message: format!("character '{}' is mapped twice", character),
                });
            }
            if let Some(existing) = by_code.get(&entry.code) {
                return Err(MorseError::InvalidTable {
                    message: format!(
                        "code '{}' is shared by '{}' and '{}'",
                        entry.code, existing, character
                    ),
                });
            }

            by_char.insert(character, entry.code.clone());
            by_code.insert(entry.code, character);
        }

        Ok(Self { by_char, by_code })
    }

    pub fn lookup_code(&self, character: char) -> Option<&str> {
        self.by_char
            .get(&character.to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn lookup_char(&self, code: &str) -> Option<char> {
        self.by_code.get(code).copied()
    }

    pub(crate) fn lookup_char_bytes(&self, code: &[u8]) -> Option<char> {
        std::str::from_utf8(code)
            .ok()
            .and_then(|code| self.lookup_char(code))
    }

    /// Entries sorted by character.
    pub fn entries(&self) -> Vec<SymbolEntry> {
        let mut entries: Vec<SymbolEntry> = self
            .by_char
            .iter()
            .map(|(character, code)| SymbolEntry::new(*character, code.clone()))
            .collect();
        entries.sort_by_key(|entry| entry.character);
        entries
    }

    pub fn len(&self) -> usize {
        self.by_char.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_char.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::latin()
    }
}

fn validate_character(character: char) -> Result<char> {
    if !character.is_ascii_graphic() || character == '*' {
        return Err(MorseError::InvalidTable {
            message: format!(
                "character {:?} must be a printable ASCII symbol other than '*'",
                character
            ),
        });
    }
    Ok(character.to_ascii_uppercase())
}

fn validate_code(entry: &SymbolEntry) -> Result<()> {
    if entry.code.is_empty() {
        return Err(MorseError::InvalidTable {
            message: format!("code for '{}' is empty", entry.character),
        });
    }
    if entry.code.len() > MAX_LETTER_MARKS {
        return Err(MorseError::InvalidTable {
            message: format!(
                "code for '{}' has {} marks, at most {} are decodable",
                entry.character,
                entry.code.len(),
                MAX_LETTER_MARKS
            ),
        });
    }
    if entry.marks().any(|mark| mark.is_none()) {
        return Err(MorseError::InvalidTable {
            message: format!(
                "code '{}' for '{}' may only contain '.' and '-'",
                entry.code, entry.character
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_table_contents() {
        let table = SymbolTable::latin();
        assert_eq!(table.len(), 49);
        assert_eq!(table.lookup_code('A'), Some(".-"));
        assert_eq!(table.lookup_code('0'), Some("-----"));
        assert_eq!(table.lookup_code('?'), Some("..--.."));
        assert_eq!(table.lookup_code('@'), Some(".--.-."));
        assert_eq!(table.lookup_code('!'), None);
        assert_eq!(table.lookup_code(' '), None);
    }

    #[test]
    fn test_lookup_code_is_case_insensitive() {
        let table = SymbolTable::standard();
        assert_eq!(table.lookup_code('q'), table.lookup_code('Q'));
        assert_eq!(table.lookup_code('z'), Some("--.."));
    }

    #[test]
    fn test_lookup_char_is_exact() {
        let table = SymbolTable::standard();
        assert_eq!(table.lookup_char("-..-."), Some('/'));
        assert_eq!(table.lookup_char("......"), None);
        assert_eq!(table.lookup_char(" .-"), None);
        assert_eq!(table.lookup_char(""), None);
    }

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let table = SymbolTable::standard();
        for (character, code) in LATIN_TABLE {
            assert_eq!(table.lookup_char(code), Some(*character));
            assert_eq!(
                table.lookup_char(table.lookup_code(character.to_ascii_lowercase()).unwrap()),
                Some(*character)
            );
        }
        assert!(SymbolTable::from_entries(table.entries()).is_ok());
    }

    #[test]
    fn test_from_entries_rejects_duplicate_code() {
        let result = SymbolTable::from_entries(vec![
            SymbolEntry::new('A', ".-"),
            SymbolEntry::new('B', ".-"),
        ]);
        assert!(matches!(result, Err(MorseError::InvalidTable { .. })));
    }

    #[test]
    fn test_from_entries_rejects_case_folded_duplicate() {
        let result = SymbolTable::from_entries(vec![
            SymbolEntry::new('a', ".-"),
            SymbolEntry::new('A', "-..."),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_entries_rejects_bad_codes_and_characters() {
        assert!(SymbolTable::from_entries(vec![SymbolEntry::new('A', "")]).is_err());
        assert!(SymbolTable::from_entries(vec![SymbolEntry::new('A', ".x")]).is_err());
        assert!(SymbolTable::from_entries(vec![SymbolEntry::new('A', "...........")]).is_err());
        assert!(SymbolTable::from_entries(vec![SymbolEntry::new('*', ".")]).is_err());
        assert!(SymbolTable::from_entries(vec![SymbolEntry::new(' ', ".")]).is_err());
        assert!(SymbolTable::from_entries(vec![SymbolEntry::new('é', ".")]).is_err());
    }

    #[test]
    fn test_custom_table_normalizes_case() {
        let table = SymbolTable::from_entries(vec![SymbolEntry::new('x', "-")]).unwrap();
        assert_eq!(table.lookup_code('X'), Some("-"));
        assert_eq!(table.lookup_char("-"), Some('X'));
    }
}
