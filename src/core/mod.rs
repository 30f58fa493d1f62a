pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod letter_buffer;
pub mod symbol_table;
pub mod transcoder;

pub use crate::domain::model::{EncodeOptions, Mark, Mode, SymbolEntry};
pub use crate::domain::ports::{ConfigProvider, TextSink, TextSource};
pub use crate::utils::error::Result;
