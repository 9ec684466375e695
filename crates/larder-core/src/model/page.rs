// ── Product page ──

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Position of a page within the full match set.
///
/// `total` counts every match the catalog knows about, which can exceed
/// what it is willing to page through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub start: u32,
    pub limit: u32,
    pub total: u32,
}

/// One page of search results. Replaced wholesale on every successful
/// fetch; an empty `items` list means the search matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub meta: PaginationMeta,
}

impl ProductPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based page number of this page.
    pub fn page_number(&self) -> u32 {
        if self.meta.limit == 0 {
            1
        } else {
            self.meta.start / self.meta.limit + 1
        }
    }
}
