use crate::core::letter_buffer::LetterBuffer;
use crate::core::symbol_table::SymbolTable;

/// Blank run that closes a word.
const WORD_GAP_BLANKS: usize = 3;

/// Decodes Morse code bytes back into text.
///
/// The scan either accumulates marks of the current letter or counts blanks.
/// A blank resolves the pending letter; codes without a table entry are
/// dropped. Exactly three blanks in a row emit one space and restart the
/// count, and a ` / ` that begins right after a letter emits one space as well.
pub(crate) fn decode(table: &SymbolTable, input: &[u8]) -> String {
    let mut text = String::with_capacity(input.len());
    let mut letter = LetterBuffer::new();
    let mut blank_run = 0usize;
    let mut i = 0;

    while i < input.len() {
        if input[i] == b' ' {
            flush_letter(table, &mut letter, &mut text);
            blank_run += 1;

            if blank_run == 1 && is_slash_gap(input, i) {
                text.push(' ');
                i += 2;
                blank_run = 0;
            } else if blank_run == WORD_GAP_BLANKS {
                text.push(' ');
                blank_run = 0;
            }
        } else {
            blank_run = 0;
            if !letter.push(input[i]) {
                tracing::trace!("letter exceeds buffer capacity, dropping mark at {}", i);
            }
        }
        i += 1;
    }

    flush_letter(table, &mut letter, &mut text);
    text
}

// 空白之後緊接著 "/ "
fn is_slash_gap(input: &[u8], blank_at: usize) -> bool {
    input.get(blank_at + 1) == Some(&b'/') && input.get(blank_at + 2) == Some(&b' ')
}

fn flush_letter(table: &SymbolTable, letter: &mut LetterBuffer, text: &mut String) {
    if letter.is_empty() {
        return;
    }
    match table.lookup_char_bytes(letter.as_bytes()) {
        Some(character) => text.push(character),
        None => tracing::trace!("no character for code {:?}", String::from_utf8_lossy(letter.as_bytes())),
    }
    letter.clear();
}
