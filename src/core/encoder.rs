use crate::core::symbol_table::SymbolTable;
use crate::domain::model::EncodeOptions;

pub const LETTER_SEPARATOR: &str = " ";
pub const WORD_SEPARATOR: &str = "   ";
pub const SLASH_WORD_SEPARATOR: &str = " / ";
pub const PLACEHOLDER: &str = "*";

/// Encodes raw text bytes into Morse code.
///
/// Line feeds and carriage returns are skipped, a space separates words and
/// every other byte becomes one letter. Bytes without a table entry turn into
/// `*`; a multi-byte UTF-8 sequence turns into one `*` per byte.
pub(crate) fn encode(table: &SymbolTable, options: EncodeOptions, input: &[u8]) -> String {
    let word_separator = if options.use_slash_word_separator {
        SLASH_WORD_SEPARATOR
    } else {
        WORD_SEPARATOR
    };

    let mut morse = String::with_capacity(input.len() * 7);
    let mut first_letter = true;
    let mut first_word = true;
    let mut i = 0;

    while i < input.len() {
        let byte = input[i];
        i += 1;

        match byte {
            b'\n' | b'\r' => continue,
            b' ' => {
                // 第一個字之前不輸出分隔
                if !first_word {
                    morse.push_str(word_separator);
                }
                first_letter = true;
                first_word = false;
                continue;
            }
            _ => {}
        }

        if first_letter {
            first_letter = false;
            first_word = false;
        } else {
            morse.push_str(LETTER_SEPARATOR);
        }

        if byte.is_ascii() {
            match table.lookup_code(byte as char) {
                Some(code) => morse.push_str(code),
                None => morse.push_str(PLACEHOLDER),
            }
            continue;
        }

        // 多位元組字元：每個位元組一個 *，並跳過後續位元組
        let remaining = input.len() - i;
        let width = sequence_width(byte).min(remaining + 1);
        for n in 0..width {
            if n > 0 {
                morse.push_str(LETTER_SEPARATOR);
            }
            morse.push_str(PLACEHOLDER);
        }
        i += width - 1;
    }

    morse
}

/// Byte count announced by a UTF-8 lead byte; 1 for anything else.
fn sequence_width(lead: u8) -> usize {
    if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}
