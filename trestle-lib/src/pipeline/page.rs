//! Pagination: page slicing, shown-entries info and control layout.

use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

use crate::config::ControlLabels;
use crate::error::ConfigError;

/// Entries-per-page setting, including the "show everything" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    /// At most this many rows per page.
    Limit(usize),
    /// No pagination: every row on one implicit page.
    All,
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageSize::Limit(limit) => write!(f, "{limit}"),
            PageSize::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for PageSize {
    type Err = ConfigError;

    /// Parses a positive integer, or `all` / `*` for the sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "*" {
            return Ok(PageSize::All);
        }
        match trimmed.parse::<usize>() {
            Ok(limit) if limit >= 1 => Ok(PageSize::Limit(limit)),
            _ => Err(ConfigError::InvalidPageSize(s.to_string())),
        }
    }
}

/// Where the engine currently stands in the page space.
///
/// The current page is reset to 1 whenever the search term, the page size
/// or the sort changes, so pagination never silently points past the new
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current: usize,
    size: PageSize,
}

impl PageState {
    /// Creates a state on page 1 with the given size.
    pub fn new(size: PageSize) -> Self {
        Self { current: 1, size }
    }

    /// Returns the current page number (1-based).
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the entries-per-page setting.
    pub fn size(&self) -> PageSize {
        self.size
    }

    pub(crate) fn reset(&mut self) {
        self.current = 1;
    }

    pub(crate) fn go_to(&mut self, page: usize) {
        self.current = page.max(1);
    }

    pub(crate) fn set_size(&mut self, size: PageSize) {
        self.size = size;
        self.current = 1;
    }
}

/// Shown-entries information, 1-based: "showing `first` to `last` of
/// `total`".
///
/// `first` and `last` are both 0 when the page shows nothing; `total == 0`
/// is the "no entries found" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-based position of the first shown row, 0 when none is shown.
    pub first: usize,
    /// 1-based position of the last shown row, 0 when none is shown.
    pub last: usize,
    /// Total number of rows after filtering.
    pub total: usize,
}

/// One navigation element the view should draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControl {
    /// Display label; opaque to the engine and may contain markup.
    pub label: String,
    /// The page this control navigates to.
    pub target: usize,
    /// Whether this is the numbered button for the current page.
    pub active: bool,
}

/// The full stride of navigation controls for the current state: first,
/// previous, one numbered button per page (no ellipsis or truncation),
/// next, last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    /// Controls in display order.
    pub items: Vec<PageControl>,
    /// Total number of pages.
    pub total_pages: usize,
}

/// The paginator's verdict: which slice of the visible set to show, the
/// shown-entries info, and the controls to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    /// Index range into the visible set.
    pub range: Range<usize>,
    /// Shown-entries information.
    pub info: PageInfo,
    /// Navigation controls; `None` when everything fits on one page.
    pub controls: Option<PageControls>,
}

/// Slices a visible set of `total` rows down to the requested page.
///
/// A page past the end is not an error: it yields an empty range with
/// `info` still reporting the true total. Controls are suppressed whenever
/// the page size covers the whole set. Never panics.
pub fn paginate(total: usize, page: usize, size: PageSize, labels: &ControlLabels) -> PageSlice {
    let limit = match size {
        PageSize::All => {
            return PageSlice {
                range: 0..total,
                info: info_for(0, total, total),
                controls: None,
            };
        }
        PageSize::Limit(limit) => limit.max(1),
    };

    let start = page.saturating_sub(1).saturating_mul(limit).min(total);
    let end = start.saturating_add(limit).min(total);
    let controls = (limit < total).then(|| build_controls(total, page, limit, labels));

    PageSlice {
        range: start..end,
        info: info_for(start, end, total),
        controls,
    }
}

fn info_for(start: usize, end: usize, total: usize) -> PageInfo {
    if start == end {
        PageInfo {
            first: 0,
            last: 0,
            total,
        }
    } else {
        PageInfo {
            first: start + 1,
            last: end,
            total,
        }
    }
}

fn build_controls(total: usize, page: usize, limit: usize, labels: &ControlLabels) -> PageControls {
    let total_pages = total.div_ceil(limit);
    let mut items = Vec::with_capacity(total_pages + 4);

    items.push(PageControl {
        label: labels.first.clone(),
        target: 1,
        active: false,
    });
    items.push(PageControl {
        label: labels.previous.clone(),
        target: page.saturating_sub(1).max(1),
        active: false,
    });
    for number in 1..=total_pages {
        items.push(PageControl {
            label: number.to_string(),
            target: number,
            active: number == page,
        });
    }
    items.push(PageControl {
        label: labels.next.clone(),
        target: (page + 1).min(total_pages),
        active: false,
    });
    items.push(PageControl {
        label: labels.last.clone(),
        target: total_pages,
        active: false,
    });

    PageControls { items, total_pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> ControlLabels {
        ControlLabels::default()
    }

    fn targets(controls: &PageControls) -> Vec<usize> {
        controls.items.iter().map(|item| item.target).collect()
    }

    #[test]
    fn test_first_page_of_25_rows_at_size_10() {
        let slice = paginate(25, 1, PageSize::Limit(10), &labels());
        assert_eq!(slice.range, 0..10);
        assert_eq!(
            slice.info,
            PageInfo {
                first: 1,
                last: 10,
                total: 25
            }
        );

        let controls = slice.controls.expect("three pages need controls");
        assert_eq!(controls.total_pages, 3);
        // First, Prev->1, 1, 2, 3, Next->2, Last->3.
        assert_eq!(targets(&controls), vec![1, 1, 1, 2, 3, 2, 3]);
        let active: Vec<bool> = controls.items.iter().map(|item| item.active).collect();
        assert_eq!(active, vec![false, false, true, false, false, false, false]);
        assert_eq!(controls.items[0].label, "<<");
        assert_eq!(controls.items[6].label, ">>");
    }

    #[test]
    fn test_last_partial_page() {
        let slice = paginate(25, 3, PageSize::Limit(10), &labels());
        assert_eq!(slice.range, 20..25);
        assert_eq!(slice.info.first, 21);
        assert_eq!(slice.info.last, 25);

        let controls = slice.controls.expect("controls expected");
        // Next is pinned to the last page, Prev goes back one.
        assert_eq!(targets(&controls), vec![1, 2, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_page_past_the_end_is_empty_but_keeps_the_total() {
        let slice = paginate(25, 9, PageSize::Limit(10), &labels());
        assert_eq!(slice.range, 25..25);
        assert_eq!(
            slice.info,
            PageInfo {
                first: 0,
                last: 0,
                total: 25
            }
        );
    }

    #[test]
    fn test_all_sentinel_shows_everything_without_controls() {
        let slice = paginate(25, 1, PageSize::All, &labels());
        assert_eq!(slice.range, 0..25);
        assert_eq!(slice.info.last, 25);
        assert!(slice.controls.is_none());
    }

    #[test]
    fn test_controls_suppressed_when_everything_fits() {
        let slice = paginate(7, 1, PageSize::Limit(10), &labels());
        assert_eq!(slice.range, 0..7);
        assert!(slice.controls.is_none());

        // Exact fit counts as fitting.
        let slice = paginate(10, 1, PageSize::Limit(10), &labels());
        assert!(slice.controls.is_none());
    }

    #[test]
    fn test_empty_set_reports_zeroes() {
        let slice = paginate(0, 1, PageSize::Limit(10), &labels());
        assert_eq!(
            slice.info,
            PageInfo {
                first: 0,
                last: 0,
                total: 0
            }
        );
        assert!(slice.controls.is_none());

        let slice = paginate(0, 1, PageSize::All, &labels());
        assert_eq!(slice.info.total, 0);
        assert_eq!(slice.info.first, 0);
    }

    #[test]
    fn test_page_count_is_ceiling_of_total_over_size() {
        for (total, limit, expected) in [(25, 10, 3), (30, 10, 3), (31, 10, 4), (11, 10, 2)] {
            let slice = paginate(total, 1, PageSize::Limit(limit), &labels());
            let controls = slice.controls.expect("controls expected");
            assert_eq!(controls.total_pages, expected, "total {total} limit {limit}");
            // First + Prev + numbered + Next + Last.
            assert_eq!(controls.items.len(), expected + 4);
        }
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!("10".parse::<PageSize>().unwrap(), PageSize::Limit(10));
        assert_eq!("all".parse::<PageSize>().unwrap(), PageSize::All);
        assert_eq!("*".parse::<PageSize>().unwrap(), PageSize::All);
        assert!("0".parse::<PageSize>().is_err());
        assert!("ten".parse::<PageSize>().is_err());
    }
}
