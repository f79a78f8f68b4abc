use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::{
    fs,
    sync::{OnceCell, RwLock},
};

use crate::models::WordEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access word list at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list at {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode word list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Source of the crossword word list
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// All words, in the order they were added
    async fn list(&self) -> Result<Vec<WordEntry>, StoreError>;

    async fn add(&self, entry: WordEntry) -> Result<WordEntry, StoreError>;

    /// Remove every entry with `id`. Unknown ids are not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Word list kept as a JSON array on disk.
///
/// The file is read once, on first use, and the list is then served from
/// memory. Every change rewrites the whole file.
pub struct JsonWordStore {
    path: PathBuf,
    entries: OnceCell<RwLock<Vec<WordEntry>>>,
}

impl JsonWordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the cached list, loading it from disk if this is the first access.
    /// Concurrent first callers share a single load.
    async fn entries(&self) -> Result<&RwLock<Vec<WordEntry>>, StoreError> {
        self.entries
            .get_or_try_init(|| async {
                let words = load(&self.path).await?;
                tracing::info!(
                    "Loaded {} crossword words from {}",
                    words.len(),
                    self.path.display()
                );
                Ok(RwLock::new(words))
            })
            .await
    }

    async fn persist(&self, words: &[WordEntry]) -> Result<(), StoreError> {
        let io_error = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await.map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(words).map_err(StoreError::Encode)?;
        fs::write(&self.path, json).await.map_err(io_error)?;

        tracing::debug!("Saved {} crossword words to {}", words.len(), self.path.display());
        Ok(())
    }
}

async fn load(path: &Path) -> Result<Vec<WordEntry>, StoreError> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("No word list at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl WordRepository for JsonWordStore {
    async fn list(&self) -> Result<Vec<WordEntry>, StoreError> {
        let entries = self.entries().await?;
        Ok(entries.read().await.clone())
    }

    async fn add(&self, entry: WordEntry) -> Result<WordEntry, StoreError> {
        let entries = self.entries().await?;
        let mut words = entries.write().await;

        let mut updated = words.clone();
        updated.push(entry.clone());
        self.persist(&updated).await?;
        *words = updated;

        Ok(entry)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let entries = self.entries().await?;
        let mut words = entries.write().await;

        let updated: Vec<WordEntry> = words.iter().filter(|w| w.id != id).cloned().collect();
        self.persist(&updated).await?;
        *words = updated;

        Ok(())
    }
}
