use crate::domain::ports::TextSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Reads the listed files in order, or standard input when there are none.
#[derive(Debug, Clone, Default)]
pub struct LocalInput {
    files: Vec<PathBuf>,
}

impl LocalInput {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    pub fn reads_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl TextSource for LocalInput {
    async fn read_all(&self) -> Result<Option<Vec<u8>>> {
        if self.reads_stdin() {
            tracing::debug!("Reading from standard input");
            let mut data = Vec::new();
            tokio::io::stdin().read_to_end(&mut data).await?;
            return Ok(Some(data));
        }

        // 多個檔案依序串接
        let mut data = Vec::new();
        for path in &self.files {
            tracing::debug!("Reading input file: {}", path.display());
            let content = tokio::fs::read(path).await.map_err(|e| {
                tracing::error!("Could not open '{}': {}", path.display(), e);
                e
            })?;
            data.extend_from_slice(&content);
        }

        Ok(Some(data))
    }
}
