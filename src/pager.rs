//! Fixed-size pagination over the feed.
//!
//! The slicing arithmetic lives in the free function [`page_slice`] so it
//! can be tested on its own; [`Pager`] holds only the page counters and the
//! two bounded transitions.

/// How many articles one page shows.
pub const ITEMS_PER_PAGE: usize = 15;

/// Page counters for the current feed.
///
/// Invariants: `current_page >= 1` always; when `total_pages >= 1`,
/// `current_page <= total_pages` after every transition.  An empty feed has
/// `total_pages == 0` and `current_page` parked at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_pages: usize,
}

impl Pager {
    /// A pager over a feed of `item_count` articles, starting on page 1.
    pub fn new(item_count: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: item_count.div_ceil(ITEMS_PER_PAGE),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Move to the next page; no-op on the last page (and on an empty feed,
    /// where `current_page(1) >= total_pages(0)` already holds).
    pub fn advance(&mut self) {
        if self.current_page < self.total_pages {
            self.current_page += 1;
        }
    }

    /// Move to the previous page; no-op on page 1.
    pub fn retreat(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(0)
    }
}

/// The window of `items` visible on `current_page`.
///
/// Pure: the window is `[(page - 1) * PER_PAGE, page * PER_PAGE)`, truncated
/// at the end of the slice.  A page past the end yields an empty slice.
pub fn page_slice<T>(items: &[T], current_page: usize) -> &[T] {
    let first = (current_page - 1) * ITEMS_PER_PAGE;
    let last = (first + ITEMS_PER_PAGE).min(items.len());
    if first >= items.len() {
        return &[];
    }
    &items[first..last]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
