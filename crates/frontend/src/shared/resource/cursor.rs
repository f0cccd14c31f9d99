/// Page position within a server-paginated list.
///
/// Pages are 1-indexed; `total_pages == 0` means unknown or empty, and no
/// forward navigation happens until a successful fetch establishes the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_more: bool,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            total_pages: 0,
            has_more: false,
        }
    }

    /// Back to page 1 with the page count unknown. Used on every filter change
    /// so a stale page number is never reused under a new filter.
    pub fn reset(&mut self) {
        self.page = 1;
        self.total_pages = 0;
        self.has_more = false;
    }

    pub fn can_advance(&self) -> bool {
        self.has_more
    }

    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    /// Record a successful fetch of `fetched_page` with the server-reported
    /// page count (`pagination.pages` is authoritative).
    pub fn apply(&mut self, fetched_page: u32, pages: u32) {
        self.total_pages = pages;
        // The data set can shrink between fetches; never sit past the end.
        self.page = if pages > 0 {
            fetched_page.min(pages)
        } else {
            1
        };
        self.has_more = pages > 0 && self.page < pages;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_page_one_without_forward_navigation() {
        let c = PageCursor::new(10);
        assert_eq!(c.page, 1);
        assert!(!c.can_advance());
        assert!(!c.can_go_back());
    }

    #[test]
    fn apply_tracks_server_page_count() {
        let mut c = PageCursor::new(10);
        c.apply(1, 3);
        assert_eq!((c.page, c.total_pages), (1, 3));
        assert!(c.can_advance());

        c.apply(3, 3);
        assert_eq!(c.page, 3);
        assert!(!c.can_advance());
        assert!(c.can_go_back());
    }

    #[test]
    fn empty_result_pins_to_page_one() {
        let mut c = PageCursor::new(10);
        c.apply(1, 0);
        assert_eq!(c.page, 1);
        assert!(!c.can_advance());
        assert!(!c.can_go_back());
    }

    #[test]
    fn shrunken_data_set_clamps_page() {
        let mut c = PageCursor::new(10);
        c.apply(5, 2);
        assert_eq!(c.page, 2);
        assert!(!c.can_advance());
    }

    #[test]
    fn reset_forgets_the_page_count() {
        let mut c = PageCursor::new(10);
        c.apply(2, 4);
        c.reset();
        assert_eq!((c.page, c.total_pages), (1, 0));
        assert!(!c.can_advance());
    }
}
