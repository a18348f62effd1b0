//! Core library for the task board
//!
//! This crate contains the business logic behind the task listing endpoint:
//! - Task model and the fixed board ordering
//! - Page query building and page assembly
//! - Task storage (trait plus a JSON file implementation)

pub mod error;
pub mod pagination;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
