//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use taskboard_core::task::{seed, FileTaskStore, TaskRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    data_dir: PathBuf,
    task_store: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Create a new AppState backed by a task file in the given data directory
    pub async fn new(data_dir: PathBuf) -> taskboard_core::Result<Self> {
        let tasks_path = data_dir.join("tasks.json");
        let task_store = Arc::new(FileTaskStore::new(tasks_path).await?);

        Ok(Self::with_store(data_dir, task_store))
    }

    /// Create an AppState around an existing task store
    pub fn with_store(data_dir: PathBuf, task_store: Arc<dyn TaskRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                data_dir,
                task_store,
            }),
        }
    }

    /// Insert the seed file's tasks if the store is empty.
    ///
    /// Returns the number of tasks inserted.
    pub async fn seed_if_empty(&self, seed_file: &Path) -> taskboard_core::Result<usize> {
        let existing = self.task_store().count().await?;
        if existing > 0 {
            tracing::info!("Task store already holds {} tasks, skipping seed", existing);
            return Ok(0);
        }

        let tasks = seed::load_seed(seed_file).await?;
        let inserted = self.task_store().insert_many(tasks).await?;
        tracing::info!("Seeded {} tasks from {:?}", inserted, seed_file);
        Ok(inserted)
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &dyn TaskRepository {
        self.inner.task_store.as_ref()
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }
}
