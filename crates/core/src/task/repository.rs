//! Task repository trait
//!
//! Defines the interface the listing engine reads tasks through.

use async_trait::async_trait;

use super::model::Task;
use super::ordering::SortSpec;
use crate::Result;

/// Repository interface for task storage
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch at most `limit` tasks sorted by `sort`, skipping the first `skip`
    async fn fetch_sorted(&self, sort: &SortSpec, skip: u64, limit: u64) -> Result<Vec<Task>>;

    /// Total number of tasks in the collection
    async fn count(&self) -> Result<u64>;

    /// Insert several tasks at once, returning how many were stored.
    ///
    /// The batch is rejected as a whole if any id repeats, within the batch
    /// or against stored tasks.
    async fn insert_many(&self, tasks: Vec<Task>) -> Result<usize>;
}
