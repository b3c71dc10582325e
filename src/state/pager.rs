//! Fixed-size page slicing for the result columns.

/// Number of articles shown per page in each column.
pub const PAGE_SIZE: usize = 5;

/// Page cursor for one result column.
///
/// Holds only indices; the articles live in `SearchSession`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based page index.
    pub page: usize,
    /// Highlighted row within the current page.
    pub selected: usize,
}

impl Pager {
    /// What: Count pages needed for `len` items.
    ///
    /// Output:
    /// - At least `1`; an empty list still has one (empty) page.
    #[must_use]
    pub const fn page_count(len: usize) -> usize {
        if len == 0 { 1 } else { len.div_ceil(PAGE_SIZE) }
    }

    /// Slice of `items` on the current page.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(PAGE_SIZE).min(items.len());
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    }

    /// Whether the back control is enabled.
    #[must_use]
    pub const fn can_back(&self) -> bool {
        self.page > 0
    }

    /// Whether the forward control is enabled for a list of `len` items.
    #[must_use]
    pub const fn can_forward(&self, len: usize) -> bool {
        self.page + 1 < Self::page_count(len)
    }

    /// What: Move one page back if allowed.
    ///
    /// Output:
    /// - `true` when the page changed.
    pub const fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.page -= 1;
        self.selected = 0;
        true
    }

    /// What: Move one page forward if allowed.
    ///
    /// Inputs:
    /// - `len`: Length of the paged list
    ///
    /// Output:
    /// - `true` when the page changed.
    pub const fn forward(&mut self, len: usize) -> bool {
        if !self.can_forward(len) {
            return false;
        }
        self.page += 1;
        self.selected = 0;
        true
    }

    /// What: Move the highlighted row by `delta`, clamped to the visible page.
    ///
    /// Details:
    /// - Does not flip pages; paging is explicit through `back`/`forward`.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        let rows = self.visible_len(len);
        if rows == 0 {
            self.selected = 0;
            return;
        }
        let cur = isize::try_from(self.selected).unwrap_or(0);
        let max = isize::try_from(rows - 1).unwrap_or(0);
        self.selected = usize::try_from((cur + delta).clamp(0, max)).unwrap_or(0);
    }

    /// What: Map the highlighted row to an index into the full list.
    ///
    /// Output:
    /// - `None` when the current page is empty.
    #[must_use]
    pub fn selected_index(&self, len: usize) -> Option<usize> {
        let rows = self.visible_len(len);
        if rows == 0 {
            return None;
        }
        Some(self.page * PAGE_SIZE + self.selected.min(rows - 1))
    }

    /// Back to page 0, row 0.
    pub const fn reset(&mut self) {
        self.page = 0;
        self.selected = 0;
    }

    /// Number of rows shown on the current page for a list of `len` items.
    fn visible_len(&self, len: usize) -> usize {
        let start = self.page.saturating_mul(PAGE_SIZE).min(len);
        (len - start).min(PAGE_SIZE)
    }
}
