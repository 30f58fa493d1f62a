use crate::core::symbol_table::SymbolTable;
use crate::core::transcoder::Transcoder;
use crate::domain::model::Mode;
use crate::domain::ports::{ConfigProvider, TextSink, TextSource};
use crate::utils::error::{MorseError, Result};

pub struct MorseEngine<'t, S: TextSource, K: TextSink> {
    source: S,
    sink: K,
    transcoder: Transcoder<'t>,
    mode: Mode,
}

impl<'t, S: TextSource, K: TextSink> MorseEngine<'t, S, K> {
    pub fn new<C: ConfigProvider>(table: &'t SymbolTable, source: S, sink: K, config: &C) -> Self {
        Self {
            source,
            sink,
            transcoder: Transcoder::new(table, config.encode_options()),
            mode: config.mode(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Reads the whole input, transcodes it and writes the result followed
    /// by a newline. Returns a description of where the output went.
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Reading input");
        let input = self.source.read_all().await?;
        if let Some(bytes) = &input {
            tracing::debug!("Read {} bytes", bytes.len());
        }

        let input = match self.mode {
            Mode::Decode => input.map(strip_line_ending),
            Mode::Encode => input,
        };

        tracing::debug!("Transcoding in {:?} mode", self.mode);
        let output = self
            .transcoder
            .transcode(self.mode, input.as_deref())
            .ok_or(MorseError::AbsentInput)?;

        let target = self.sink.describe();
        tracing::debug!("Writing {} bytes to {}", output.len() + 1, target);
        self.sink.write_all(&format!("{}\n", output)).await?;

        Ok(target)
    }
}

// 輸出時會補一個換行，解碼前先去掉輸入結尾的那一個
fn strip_line_ending(mut bytes: Vec<u8>) -> Vec<u8> {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    bytes
}
