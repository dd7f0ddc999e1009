//! Saving downloaded files

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::FileSaver;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Invalid file name: '{0}'")]
    InvalidFilename(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes downloads into a fixed directory.
///
/// Only the final component of the requested name is used, so a server or
/// caller cannot steer the file outside the directory.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    directory: PathBuf,
}

impl DirectorySaver {
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Destination for `filename` inside the download directory.
    pub fn target_path(&self, filename: &str) -> Result<PathBuf, SaveError> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| SaveError::InvalidFilename(filename.to_string()))?;
        Ok(self.directory.join(name))
    }
}

#[async_trait]
impl FileSaver for DirectorySaver {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, SaveError> {
        let path = self.target_path(filename)?;
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|source| SaveError::Io {
                path: self.directory.clone(),
                source,
            })?;
        tokio::fs::write(&path, bytes).await.map_err(|source| SaveError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(path.display().to_string())
    }
}
