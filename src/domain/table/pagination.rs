pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Caller-driven page cursor. `page` is 1-based and is never re-validated
/// against the item count; see [`Pagination::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

/// Values derived from a [`Pagination`] and an item count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    /// 1-based inclusive display bounds, clamped to `total`.
    pub from: usize,
    pub to: usize,
    pub can_previous_page: bool,
    pub can_next_page: bool,
    pub page_numbers: Vec<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
    }

    pub fn total_pages(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn can_next_page(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self, total: usize) {
        if self.can_next_page(total) {
            self.page += 1;
        }
    }

    /// Copy with `page` pulled back into `1..=total_pages` (or 1 when empty).
    pub fn clamped(&self, total: usize) -> Self {
        let last = self.total_pages(total).max(1);
        Self {
            page: self.page.clamp(1, last),
            page_size: self.page_size,
        }
    }

    /// Index range of the current page inside a list of `total` items.
    /// Pages past the end yield an empty range.
    pub fn window(&self, total: usize) -> std::ops::Range<usize> {
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    pub fn info(&self, total: usize) -> PageInfo {
        let total_pages = self.total_pages(total);
        let from = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .saturating_add(1)
            .min(total);
        let to = self.page.saturating_mul(self.page_size).min(total);

        PageInfo {
            page: self.page,
            page_size: self.page_size,
            total,
            total_pages,
            from,
            to,
            can_previous_page: self.can_previous_page(),
            can_next_page: self.can_next_page(total),
            page_numbers: page_numbers(self.page, total_pages),
        }
    }
}

/// Sliding window of at most [`MAX_PAGE_BUTTONS`] page numbers around `page`.
/// A `page` outside `1..=total_pages` anchors the window at the nearest end.
pub fn page_numbers(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let page = page.clamp(1, total_pages);
    let half = MAX_PAGE_BUTTONS / 2;
    let start = page.saturating_sub(half).max(1);
    let end = start.saturating_add(MAX_PAGE_BUTTONS - 1).min(total_pages);
    let start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1).min(start);
    (start..=end).collect()
}
