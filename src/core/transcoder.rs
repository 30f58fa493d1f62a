use crate::core::symbol_table::SymbolTable;
use crate::core::{decoder, encoder};
use crate::domain::model::{EncodeOptions, Mode};

/// Encoder/decoder bound to one symbol table.
#[derive(Debug, Clone, Copy)]
pub struct Transcoder<'t> {
    table: &'t SymbolTable,
    options: EncodeOptions,
}

impl<'t> Transcoder<'t> {
    pub fn new(table: &'t SymbolTable, options: EncodeOptions) -> Self {
        Self { table, options }
    }

    pub fn encode(&self, text: &[u8]) -> String {
        encoder::encode(self.table, self.options, text)
    }

    pub fn decode(&self, code: &[u8]) -> String {
        decoder::decode(self.table, code)
    }

    /// `None` in, `None` out; an empty input still yields `Some("")`.
    pub fn transcode(&self, mode: Mode, input: Option<&[u8]>) -> Option<String> {
        let input = input?;
        Some(match mode {
            Mode::Encode => self.encode(input),
            Mode::Decode => self.decode(input),
        })
    }
}

impl Transcoder<'static> {
    pub fn standard(options: EncodeOptions) -> Self {
        Self::new(SymbolTable::standard(), options)
    }
}

/// Encodes `text` with the standard table. Absent text yields `None`.
pub fn encode_to_morse(text: Option<&str>, use_slash_word_separator: bool) -> Option<String> {
    Transcoder::standard(EncodeOptions {
        use_slash_word_separator,
    })
    .transcode(Mode::Encode, text.map(str::as_bytes))
}

/// Decodes `code` with the standard table. Absent code yields `None`.
pub fn decode_from_morse(code: Option<&str>) -> Option<String> {
    Transcoder::standard(EncodeOptions::default()).transcode(Mode::Decode, code.map(str::as_bytes))
}
