//! Paginated task listing

use super::model::Task;
use super::repository::TaskRepository;
use crate::pagination::{assemble_page, build_query, PageRequest, PageResult};
use crate::Result;

/// List one page of tasks in board order.
///
/// The fetch and the count run concurrently and are not read from a shared
/// snapshot. Storage errors are returned unchanged.
pub async fn list_tasks(
    repository: &dyn TaskRepository,
    request: PageRequest,
) -> Result<PageResult<Task>> {
    let query = build_query(&request);

    let (records, total_count) = tokio::try_join!(
        repository.fetch_sorted(&query.sort, query.skip, query.limit),
        repository.count(),
    )?;

    tracing::debug!(
        page = request.page_number(),
        returned = records.len(),
        total = total_count,
        "Listed tasks"
    );

    Ok(assemble_page(
        records,
        total_count,
        request.page_number(),
        request.page_size(),
    ))
}
