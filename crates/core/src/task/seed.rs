//! Seed data loading
//!
//! A seed file is a JSON array of tasks without ids or timestamps:
//!
//! ```json
//! [{ "boardId": 1, "status": "todo", "title": "Write docs", "priority": 2 }]
//! ```

use chrono::{Duration, Utc};
use serde::Deserialize;
use std::path::Path;

use super::model::{Task, TaskStatus};
use crate::Result;

/// A task entry in a seed file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTask {
    pub board_id: i64,
    pub status: TaskStatus,
    pub title: String,
    pub priority: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Parse seed JSON into tasks.
///
/// Creation times step forward by one millisecond per entry, so tasks with
/// identical sort keys keep their file order.
pub fn parse_seed(content: &str) -> Result<Vec<Task>> {
    let entries: Vec<SeedTask> = serde_json::from_str(content)?;
    let base = Utc::now();

    Ok(entries
        .into_iter()
        .zip(0i64..)
        .map(|(entry, offset)| {
            let mut task = Task::new(entry.board_id, entry.title)
                .with_status(entry.status)
                .with_priority(entry.priority)
                .with_created_at(base + Duration::milliseconds(offset));
            task.description = entry.description;
            task
        })
        .collect())
}

/// Read and parse a seed file
pub async fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let tasks = parse_seed(&content)?;
    tracing::debug!(path = ?path.as_ref(), tasks = tasks.len(), "Parsed seed file");
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn parse_seed_builds_tasks_in_file_order() {
        let tasks = parse_seed(
            r#"[
                { "boardId": 2, "status": "in_progress", "title": "first", "priority": 3 },
                { "boardId": 1, "status": "backlog", "title": "second", "priority": 1,
                  "description": "with details" }
            ]"#,
        )
        .unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].board_id, 2);
        assert_eq!(tasks[0].status, TaskStatus::InProgress);
        assert_eq!(tasks[0].priority, 3);
        assert_eq!(tasks[1].description.as_deref(), Some("with details"));
        assert!(tasks[0].created_at < tasks[1].created_at);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn parse_seed_rejects_unknown_status() {
        let result = parse_seed(
            r#"[{ "boardId": 1, "status": "archived", "title": "x", "priority": 1 }]"#,
        );
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[tokio::test]
    async fn load_seed_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        tokio::fs::write(
            &path,
            r#"[{ "boardId": 1, "status": "todo", "title": "seeded", "priority": 2 }]"#,
        )
        .await
        .unwrap();

        let tasks = load_seed(&path).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "seeded");
    }

    #[tokio::test]
    async fn load_seed_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_seed(temp_dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
