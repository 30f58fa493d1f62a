use crate::domain::model::{EncodeOptions, Mode};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 轉換的輸入來源。`None` 代表完全沒有輸入，與空字串不同
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn read_all(&self) -> Result<Option<Vec<u8>>>;
}

/// 轉換結果的輸出目的地
#[async_trait]
pub trait TextSink: Send + Sync {
    async fn write_all(&self, text: &str) -> Result<()>;
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn mode(&self) -> Mode;
    fn encode_options(&self) -> EncodeOptions;
}
