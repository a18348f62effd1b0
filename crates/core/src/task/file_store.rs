//! File-based task storage implementation
//!
//! Stores tasks as JSON in a file on disk.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::Task;
use super::ordering::SortSpec;
use super::repository::TaskRepository;
use crate::{Error, Result};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of tasks
    cache: RwLock<HashMap<Uuid, Task>>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let tasks: Vec<Task> = serde_json::from_str(&content)?;
            tasks.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        tracing::debug!(path = ?path, tasks = cache.len(), "Loaded task store");

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the cache to disk
    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<&Task> = cache.values().collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let content = serde_json::to_string_pretty(&tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn fetch_sorted(&self, sort: &SortSpec, skip: u64, limit: u64) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<&Task> = cache.values().collect();
        tasks.sort_by(|a, b| sort.compare(a, b));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(tasks.into_iter().skip(skip).take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<u64> {
        let cache = self.cache.read().await;
        Ok(cache.len() as u64)
    }

    async fn insert_many(&self, tasks: Vec<Task>) -> Result<usize> {
        let batch_len = tasks.len();
        {
            let mut cache = self.cache.write().await;
            let mut batch_ids = HashSet::with_capacity(tasks.len());
            if let Some(dup) = tasks
                .iter()
                .find(|t| cache.contains_key(&t.id) || !batch_ids.insert(t.id))
            {
                return Err(Error::InvalidInput(format!(
                    "Task with ID {} already exists",
                    dup.id
                )));
            }
            cache.extend(tasks.into_iter().map(|t| (t.id, t)));
        }
        self.persist().await?;
        Ok(batch_len)
    }
}
