use crate::domain::ports::TextSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalOutput {
    Stdout,
    File(PathBuf),
}

impl LocalOutput {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => LocalOutput::File(path),
            None => LocalOutput::Stdout,
        }
    }
}

#[async_trait]
impl TextSink for LocalOutput {
    async fn write_all(&self, text: &str) -> Result<()> {
        match self {
            LocalOutput::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(text.as_bytes()).await?;
                stdout.flush().await?;
            }
            LocalOutput::File(path) => {
                // 不自動建立目錄，無法寫入就回報錯誤
                tokio::fs::write(path, text.as_bytes()).await.map_err(|e| {
                    tracing::error!("Could not open '{}' for writing: {}", path.display(), e);
                    e
                })?;
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        match self {
            LocalOutput::Stdout => "stdout".to_string(),
            LocalOutput::File(path) => path.display().to_string(),
        }
    }
}
