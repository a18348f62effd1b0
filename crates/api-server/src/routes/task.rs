//! Task API endpoints
//!
//! Read-only, paginated listing of board tasks.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use taskboard_core::pagination::{PageRequest, PageResult};
use taskboard_core::task::{list_tasks, Task, TaskStatus};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub board_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            board_id: task.board_id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// First `page` value of the query string.
///
/// The query is read as raw pairs so that repeated or malformed `page`
/// parameters never fail extraction.
fn page_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str())
}

/// GET /tasks?page=N - List one page of tasks in board order
async fn list_tasks_page(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<PageResult<TaskResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let request = PageRequest::from_param(page_param(&params));

    let page = list_tasks(state.task_store(), request).await.map_err(|e| {
        tracing::error!("Failed to list tasks: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(page.map(TaskResponse::from)))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new().route("/tasks", get(list_tasks_page))
}
