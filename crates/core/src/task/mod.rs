//! Task module
//!
//! This module contains task-related types, the board ordering and storage.

mod file_store;
mod listing;
mod model;
pub mod ordering;
mod repository;
pub mod seed;

pub use file_store::FileTaskStore;
pub use listing::list_tasks;
pub use model::*;
pub use ordering::{SortDirection, SortField, SortSpec};
pub use repository::TaskRepository;
