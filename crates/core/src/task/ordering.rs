//! Board ordering for tasks
//!
//! Every storage implementation sorts through [`SortSpec::compare`] so the
//! order never depends on a particular engine's string collation.

use std::cmp::Ordering;

use super::model::Task;

/// A field tasks can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    BoardId,
    Status,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ordered list of sort keys, applied in precedence order.
///
/// Tasks that tie on every key fall back to creation time and then to the
/// task id, so the resulting order is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<(SortField, SortDirection)>,
}

impl SortSpec {
    pub fn new(keys: Vec<(SortField, SortDirection)>) -> Self {
        Self { keys }
    }

    /// Board id, then status rank, then priority, all ascending
    pub fn board_order() -> Self {
        Self::new(vec![
            (SortField::BoardId, SortDirection::Ascending),
            (SortField::Status, SortDirection::Ascending),
            (SortField::Priority, SortDirection::Ascending),
        ])
    }

    /// Compare two tasks under this spec
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.keys
            .iter()
            .map(|(field, direction)| {
                let ordering = compare_field(*field, a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::board_order()
    }
}

fn compare_field(field: SortField, a: &Task, b: &Task) -> Ordering {
    match field {
        SortField::BoardId => a.board_id.cmp(&b.board_id),
        SortField::Status => a.status.rank().cmp(&b.status.rank()),
        SortField::Priority => a.priority.cmp(&b.priority),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use chrono::{Duration, Utc};

    fn task(board_id: i64, status: TaskStatus, priority: i64) -> Task {
        Task::new(board_id, "task")
            .with_status(status)
            .with_priority(priority)
    }

    fn keys(tasks: &[Task]) -> Vec<(i64, TaskStatus, i64)> {
        tasks
            .iter()
            .map(|t| (t.board_id, t.status, t.priority))
            .collect()
    }

    #[test]
    fn board_order_sorts_by_board_then_status_then_priority() {
        let mut tasks = vec![
            task(2, TaskStatus::Todo, 1),
            task(1, TaskStatus::InProgress, 2),
            task(1, TaskStatus::InProgress, 5),
            task(1, TaskStatus::Done, 3),
            task(1, TaskStatus::Backlog, 9),
            task(1, TaskStatus::InProgress, 1),
        ];

        let spec = SortSpec::board_order();
        tasks.sort_by(|a, b| spec.compare(a, b));

        assert_eq!(
            keys(&tasks),
            vec![
                (1, TaskStatus::Backlog, 9),
                (1, TaskStatus::Done, 3),
                (1, TaskStatus::InProgress, 1),
                (1, TaskStatus::InProgress, 2),
                (1, TaskStatus::InProgress, 5),
                (2, TaskStatus::Todo, 1),
            ]
        );
    }

    #[test]
    fn status_uses_rank_not_declaration_order() {
        let todo = task(1, TaskStatus::Todo, 1);
        let done = task(1, TaskStatus::Done, 1);

        // Todo is declared before Done but ranks after it.
        assert_eq!(SortSpec::board_order().compare(&done, &todo), Ordering::Less);
    }

    #[test]
    fn ties_break_on_creation_time_then_id() {
        let now = Utc::now();
        let older = task(1, TaskStatus::Todo, 1).with_created_at(now);
        let newer = task(1, TaskStatus::Todo, 1).with_created_at(now + Duration::seconds(1));

        let spec = SortSpec::board_order();
        assert_eq!(spec.compare(&older, &newer), Ordering::Less);
        assert_eq!(spec.compare(&newer, &older), Ordering::Greater);

        let mut twin = older.clone();
        twin.id = uuid::Uuid::new_v4();
        assert_ne!(spec.compare(&older, &twin), Ordering::Equal);
        assert_eq!(spec.compare(&older, &older), Ordering::Equal);
    }

    #[test]
    fn descending_key_reverses_field_order() {
        let spec = SortSpec::new(vec![(SortField::Priority, SortDirection::Descending)]);
        let mut tasks = vec![
            task(1, TaskStatus::Todo, 1),
            task(1, TaskStatus::Todo, 8),
            task(1, TaskStatus::Todo, 4),
        ];

        tasks.sort_by(|a, b| spec.compare(a, b));

        let priorities: Vec<i64> = tasks.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![8, 4, 1]);
    }
}
