//! Query builder

use std::num::IntErrorKind;

use super::PAGE_SIZE;
use crate::task::SortSpec;

/// A requested page, already normalized to a positive page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
}

impl PageRequest {
    /// Build a request for `page_number`; anything below 1 becomes page 1
    pub fn new(page_number: i64) -> Self {
        Self {
            page_number: u64::try_from(page_number).unwrap_or(0).max(1),
        }
    }

    /// Build a request from the raw `page` query parameter.
    ///
    /// Missing, non-numeric and non-positive values all fall back to page 1.
    /// Positive integers too large for `u64` saturate, landing past the last
    /// page rather than on the first.
    pub fn from_param(raw: Option<&str>) -> Self {
        let page_number = raw
            .map(str::trim)
            .and_then(|value| match value.parse::<u64>() {
                Ok(number) => Some(number),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
                Err(_) => None,
            })
            .unwrap_or(1)
            .max(1);
        Self { page_number }
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page_number: 1 }
    }
}

/// What the storage layer has to fetch for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchInstruction {
    pub sort: SortSpec,
    pub skip: u64,
    pub limit: u64,
}

/// Translate a page request into a sorted skip/limit fetch
pub fn build_query(request: &PageRequest) -> FetchInstruction {
    let page_size = request.page_size();
    FetchInstruction {
        sort: SortSpec::board_order(),
        skip: (request.page_number() - 1).saturating_mul(page_size),
        limit: page_size,
    }
}
