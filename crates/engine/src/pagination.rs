/// Pagination arithmetic for the expenses table.
///
/// Pages are 1-indexed and always clamped to `1..=max_page`. Transitions that
/// change the page return the new page number so the caller can refetch; the
/// controller itself performs no I/O.
#[derive(Debug, Clone)]
pub struct Pagination {
    page: u64,
    page_size: u64,
    total_count: u64,
}

impl Pagination {
    /// `page_size` must be positive; zero is bumped to 1.
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Highest valid page. An empty table still has page 1.
    pub fn max_page(&self) -> u64 {
        self.total_count.div_ceil(self.page_size).max(1)
    }

    /// Advances one page; no-op (returns `None`) at the last page.
    pub fn next(&mut self) -> Option<u64> {
        if self.page >= self.max_page() {
            return None;
        }
        self.page += 1;
        Some(self.page)
    }

    /// Goes back one page; no-op (returns `None`) at page 1.
    pub fn prev(&mut self) -> Option<u64> {
        if self.page <= 1 {
            return None;
        }
        self.page -= 1;
        Some(self.page)
    }

    /// Records a new server-reported row count. When the table shrank below
    /// the current page, the page clamps down and the new page is returned
    /// as a refetch trigger.
    pub fn set_total_count(&mut self, total_count: u64) -> Option<u64> {
        self.total_count = total_count;
        let max_page = self.max_page();
        if self.page > max_page {
            self.page = max_page;
            return Some(self.page);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_rows_at_five_per_page_is_five_pages() {
        let mut pagination = Pagination::new(5);
        pagination.set_total_count(23);
        assert_eq!(pagination.max_page(), 5);
    }

    #[test]
    fn next_clamps_at_the_last_page() {
        let mut pagination = Pagination::new(5);
        pagination.set_total_count(23);

        for expected in 2..=5 {
            assert_eq!(pagination.next(), Some(expected));
        }
        assert_eq!(pagination.next(), None);
        assert_eq!(pagination.page(), 5);
    }

    #[test]
    fn prev_clamps_at_page_one() {
        let mut pagination = Pagination::new(5);
        pagination.set_total_count(23);

        assert_eq!(pagination.prev(), None);
        assert_eq!(pagination.page(), 1);

        pagination.next();
        assert_eq!(pagination.prev(), Some(1));
    }

    #[test]
    fn shrinking_total_clamps_the_page_down() {
        let mut pagination = Pagination::new(5);
        pagination.set_total_count(23);
        while pagination.next().is_some() {}
        assert_eq!(pagination.page(), 5);

        // Dropping to 11 rows leaves 3 pages; page 5 is out of range.
        assert_eq!(pagination.set_total_count(11), Some(3));
        assert_eq!(pagination.page(), 3);
    }

    #[test]
    fn growing_total_does_not_move_the_page() {
        let mut pagination = Pagination::new(5);
        pagination.set_total_count(5);
        assert_eq!(pagination.set_total_count(50), None);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn empty_table_still_has_one_page() {
        let mut pagination = Pagination::new(5);
        assert_eq!(pagination.max_page(), 1);
        assert_eq!(pagination.set_total_count(0), None);
        assert_eq!(pagination.page(), 1);
    }
}
