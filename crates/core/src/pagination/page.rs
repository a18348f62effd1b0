//! Page assembler

use serde::Serialize;

/// One page of results with navigation metadata.
///
/// `previous_page` and `next_page` are omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
}

impl<T> PageResult<T> {
    /// Convert the records while keeping order and navigation
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            data: self.data.into_iter().map(f).collect(),
            previous_page: self.previous_page,
            next_page: self.next_page,
        }
    }
}

/// Number of pages needed for `total_count` records
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Wrap an already sorted slice of records into a page.
///
/// An empty collection never has navigation links. A page past the end
/// keeps its `previous_page` so clients can step back.
pub fn assemble_page<T>(
    records: Vec<T>,
    total_count: u64,
    page_number: u64,
    page_size: u64,
) -> PageResult<T> {
    if total_count == 0 {
        return PageResult {
            data: Vec::new(),
            previous_page: None,
            next_page: None,
        };
    }

    let previous_page = (page_number > 1).then(|| page_number - 1);
    let next_page = if page_number < total_pages(total_count, page_size) {
        page_number.checked_add(1)
    } else {
        None
    };

    PageResult {
        data: records,
        previous_page,
        next_page,
    }
}
