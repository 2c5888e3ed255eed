/// Grid page size used by the dashboard unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One page slice of an ordered sequence plus the page count for the whole
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPage<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Number of pages needed to show `len` items. Zero when the sequence is
/// empty; a page size of zero is treated as one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Computes the 1-indexed page slice for whatever page it is given. Pages past
/// the end produce an empty slice, a page below one is treated as the first
/// page, and the final page is clipped to the sequence length.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> GridPage<'_, T> {
    let size = page_size.max(1);
    let start = current_page.saturating_sub(1) * size;
    let end = (start + size).min(items.len());

    GridPage {
        items: items.get(start..end).unwrap_or(&[]),
        total_pages: total_pages(items.len(), size),
    }
}

/// Clamps a requested page into `[1, total_pages]`, settling on page one when
/// the sequence is empty.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Navigation state for the grid. Holds only the 1-indexed current page; the
/// caller resets it to the first page whenever filter criteria change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
}

impl Pager {
    pub const fn first() -> Self {
        Self { current: 1 }
    }

    pub const fn current(self) -> usize {
        self.current
    }

    /// Advances one page; a no-op on the last page (no wraparound).
    pub fn next(&mut self, total_pages: usize) {
        if self.current < total_pages {
            self.current += 1;
        }
    }

    /// Steps back one page; a no-op on the first page.
    pub fn previous(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_yields_no_pages() {
        let page = paginate::<u32>(&[], 6, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn sequential_pages_partition_the_sequence() {
        let items: Vec<u32> = (0..20).collect();
        let pages = total_pages(items.len(), 6);
        assert_eq!(pages, 4);

        let mut seen = Vec::new();
        for page in 1..=pages {
            seen.extend_from_slice(paginate(&items, 6, page).items);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn final_page_is_clipped() {
        let items: Vec<u32> = (0..8).collect();
        assert_eq!(paginate(&items, 6, 2).items, &[6, 7]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..8).collect();
        assert!(paginate(&items, 6, 3).items.is_empty());
        assert!(paginate(&items, 6, 99).items.is_empty());
    }

    #[test]
    fn page_below_one_reads_as_the_first_page() {
        let items: Vec<u32> = (0..8).collect();
        assert_eq!(paginate(&items, 6, 0).items, paginate(&items, 6, 1).items);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let items: Vec<u32> = (0..3).collect();
        let page = paginate(&items, 0, 2);
        assert_eq!(page.items, &[1]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn navigation_clamps_at_both_boundaries() {
        let mut pager = Pager::first();
        pager.previous();
        assert_eq!(pager.current(), 1);

        pager.next(3);
        pager.next(3);
        assert_eq!(pager.current(), 3);
        pager.next(3);
        assert_eq!(pager.current(), 3);

        pager.reset();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn navigation_is_a_no_op_when_there_are_no_pages() {
        let mut pager = Pager::first();
        pager.next(0);
        assert_eq!(pager.current(), 1);
        pager.previous();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn requested_pages_clamp_into_range() {
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 0), 1);
    }
}
