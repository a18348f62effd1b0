//! Page-based listing
//!
//! The query builder turns a requested page into a sorted fetch instruction,
//! and the page assembler wraps the fetched slice with navigation metadata.
//! Both are pure and safe to call from any number of request handlers.

mod page;
mod query;

pub use page::{assemble_page, total_pages, PageResult};
pub use query::{build_query, FetchInstruction, PageRequest};

/// Number of records on every page
pub const PAGE_SIZE: u64 = 5;
