// ── Pagination arithmetic ──
//
// Pure functions over `PaginationMeta`. The catalog reports a `total` for
// the whole match set but refuses offsets past a fixed ceiling, so every
// navigation target and every range label is bounded by `max_results`
// rather than by `total`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::PaginationMeta;

/// Results per page unless configured otherwise.
pub const DEFAULT_PAGE_LIMIT: u32 = 25;

/// Offset ceiling of the current catalog deployment.
pub const DEFAULT_MAX_RESULTS: u32 = 250;

/// A navigation intent from the browse UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Navigation {
    First,
    Prev,
    Next,
    Last,
}

/// Page size and result ceiling, validated together.
///
/// `max_results` is always a non-zero multiple of `page_limit`, so the last
/// reachable page starts exactly at `max_results - page_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
    page_limit: u32,
    max_results: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl PageLimits {
    pub fn new(page_limit: u32, max_results: u32) -> Result<Self, CoreError> {
        use larder_api::products::{MAX_OFFSET, MAX_PAGE_LIMIT};

        if page_limit == 0 || page_limit > MAX_PAGE_LIMIT {
            return Err(CoreError::ValidationFailed {
                message: format!("page size {page_limit} is outside 1..={MAX_PAGE_LIMIT}"),
            });
        }
        if max_results < page_limit || max_results % page_limit != 0 {
            return Err(CoreError::ValidationFailed {
                message: format!(
                    "result ceiling {max_results} must be a non-zero multiple of page size {page_limit}"
                ),
            });
        }
        if max_results - page_limit > MAX_OFFSET {
            return Err(CoreError::ValidationFailed {
                message: format!(
                    "result ceiling {max_results} needs offsets past the catalog maximum of {MAX_OFFSET}"
                ),
            });
        }
        Ok(Self {
            page_limit,
            max_results,
        })
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// The part of `total` that can actually be paged through.
    pub fn reachable_total(&self, total: u32) -> u32 {
        total.min(self.max_results)
    }

    /// Target offset for `nav` from the page described by `meta`, or
    /// `None` when the move would not change the view.
    pub fn target(&self, nav: Navigation, meta: &PaginationMeta) -> Option<u32> {
        match nav {
            Navigation::First => self.first_offset(meta),
            Navigation::Prev => self.prev_offset(meta),
            Navigation::Next => self.next_offset(meta),
            Navigation::Last => self.last_offset(meta),
        }
    }

    pub fn first_offset(&self, meta: &PaginationMeta) -> Option<u32> {
        (meta.start > 0).then_some(0)
    }

    pub fn prev_offset(&self, meta: &PaginationMeta) -> Option<u32> {
        (meta.start > 0).then(|| meta.start.saturating_sub(self.page_limit))
    }

    pub fn next_offset(&self, meta: &PaginationMeta) -> Option<u32> {
        let target = meta.start.saturating_add(self.page_limit);
        (target < self.reachable_total(meta.total)).then_some(target)
    }

    pub fn last_offset(&self, meta: &PaginationMeta) -> Option<u32> {
        let target = self.last_page_start(meta.total);
        (meta.start != target).then_some(target)
    }

    /// Start offset of the final reachable page for `total` results.
    ///
    /// `floor(total / page) * page`, clamped to the ceiling's last page.
    /// When `total` is an exact multiple below the ceiling this is the
    /// offset just past the data, and the catalog answers with an empty page.
    pub fn last_page_start(&self, total: u32) -> u32 {
        ((total / self.page_limit) * self.page_limit).min(self.max_results - self.page_limit)
    }

    /// Start offset of the 1-based page number `page`, clamped to the last
    /// reachable page for `total`.
    pub fn page_start(&self, page: u32, total: u32) -> u32 {
        page.saturating_sub(1)
            .saturating_mul(self.page_limit)
            .min(self.last_page_start(total))
    }

    /// The "low to high of total" label for a page. Derived on demand from
    /// the latest meta; never cached.
    pub fn range_label(&self, meta: &PaginationMeta) -> RangeLabel {
        RangeLabel {
            low: meta.start.saturating_add(1),
            high: meta.start.saturating_add(meta.limit).min(meta.total),
            shown_total: self.reachable_total(meta.total),
        }
    }
}

/// Displayed result range, e.g. `26 to 50 of 250`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeLabel {
    pub low: u32,
    pub high: u32,
    pub shown_total: u32,
}

impl fmt::Display for RangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} of {}", self.low, self.high, self.shown_total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn meta(start: u32, total: u32) -> PaginationMeta {
        PaginationMeta {
            start,
            limit: 25,
            total,
        }
    }

    fn limits() -> PageLimits {
        PageLimits::default()
    }

    #[test]
    fn reachable_total_is_capped_by_ceiling() {
        assert_eq!(limits().reachable_total(1000), 250);
        assert_eq!(limits().reachable_total(250), 250);
        assert_eq!(limits().reachable_total(5), 5);
        assert_eq!(limits().reachable_total(0), 0);
    }

    #[test]
    fn first_is_noop_on_first_page() {
        assert_eq!(limits().first_offset(&meta(0, 1000)), None);
        assert_eq!(limits().first_offset(&meta(100, 1000)), Some(0));
    }

    #[test]
    fn prev_is_noop_at_zero_regardless_of_total() {
        for total in [0, 5, 25, 1000] {
            assert_eq!(limits().prev_offset(&meta(0, total)), None);
        }
        assert_eq!(limits().prev_offset(&meta(50, 1000)), Some(25));
        assert_eq!(limits().prev_offset(&meta(25, 1000)), Some(0));
    }

    #[test]
    fn next_stops_at_reachable_total() {
        assert_eq!(limits().next_offset(&meta(0, 1000)), Some(25));
        assert_eq!(limits().next_offset(&meta(200, 1000)), Some(225));
        assert_eq!(limits().next_offset(&meta(225, 1000)), None);
        assert_eq!(limits().next_offset(&meta(0, 5)), None);
        assert_eq!(limits().next_offset(&meta(0, 26)), Some(25));
        assert_eq!(limits().next_offset(&meta(0, 25)), None);
    }

    #[test]
    fn last_is_clamped_to_ceiling() {
        assert_eq!(limits().last_offset(&meta(0, 1000)), Some(225));
        assert_eq!(limits().last_offset(&meta(225, 1000)), None);
        assert_eq!(limits().last_offset(&meta(0, 130)), Some(125));
        assert_eq!(limits().last_offset(&meta(0, 5)), None);
    }

    #[test]
    fn last_floors_exact_multiples_without_stepping_back() {
        assert_eq!(limits().last_page_start(50), 50);
        assert_eq!(limits().last_page_start(25), 25);
        assert_eq!(limits().last_page_start(0), 0);
        assert_eq!(limits().last_page_start(250), 225);
        assert_eq!(limits().last_offset(&meta(0, 50)), Some(50));
        assert_eq!(limits().last_offset(&meta(50, 50)), None);
    }

    #[test]
    fn targets_are_page_aligned() {
        let l = limits();
        for total in [0, 1, 24, 25, 26, 249, 250, 251, 1000, 5000] {
            for start in (0..250).step_by(25) {
                let m = meta(start, total);
                for nav in [Navigation::First, Navigation::Prev, Navigation::Next, Navigation::Last] {
                    if let Some(t) = l.target(nav, &m) {
                        assert_eq!(t % 25, 0, "{nav} from {start}/{total} gave {t}");
                        assert!(t <= 225, "{nav} from {start}/{total} passed the ceiling");
                    }
                }
            }
        }
    }

    #[test]
    fn page_start_clamps_to_last_page() {
        assert_eq!(limits().page_start(1, 1000), 0);
        assert_eq!(limits().page_start(3, 1000), 50);
        assert_eq!(limits().page_start(40, 1000), 225);
        assert_eq!(limits().page_start(0, 1000), 0);
        assert_eq!(limits().page_start(9, 60), 50);
        assert_eq!(limits().page_start(9, 50), 50);
    }

    #[test]
    fn range_labels() {
        assert_eq!(limits().range_label(&meta(0, 5)).to_string(), "1 to 5 of 5");
        assert_eq!(
            limits().range_label(&meta(225, 1000)).to_string(),
            "226 to 250 of 250"
        );
        assert_eq!(
            limits().range_label(&meta(25, 1000)).to_string(),
            "26 to 50 of 250"
        );
    }

    #[test]
    fn limits_validation() {
        assert!(PageLimits::new(25, 250).is_ok());
        assert!(PageLimits::new(50, 1000).is_ok());
        assert!(PageLimits::new(0, 250).is_err());
        assert!(PageLimits::new(51, 510).is_err());
        assert!(PageLimits::new(25, 260).is_err());
        assert!(PageLimits::new(25, 0).is_err());
        assert!(PageLimits::new(25, 1050).is_err());
    }

    #[test]
    fn navigation_parses_from_lowercase() {
        assert_eq!("next".parse::<Navigation>().unwrap(), Navigation::Next);
        assert_eq!(Navigation::Last.to_string(), "last");
    }
}
