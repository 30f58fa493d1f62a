//! Bounded buffer for the marks of the letter being decoded.

/// Longest mark sequence the decoder keeps for one letter.
pub const MAX_LETTER_MARKS: usize = 10;

/// Append-only buffer holding at most [`MAX_LETTER_MARKS`] bytes.
///
/// Bytes pushed past the capacity are discarded, so an over-long sequence
/// resolves as its first ten marks.
#[derive(Debug, Clone, Default)]
pub struct LetterBuffer {
    buf: [u8; MAX_LETTER_MARKS],
    len: usize,
}

impl LetterBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; MAX_LETTER_MARKS],
            len: 0,
        }
    }

    /// Returns `false` when the byte was dropped because the buffer is full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.len < MAX_LETTER_MARKS {
            self.buf[self.len] = byte;
            self.len += 1;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
