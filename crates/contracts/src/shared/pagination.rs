use serde::{Deserialize, Serialize};

/// Allowed page sizes for listing endpoints
pub const PER_PAGE_OPTIONS: [u64; 4] = [10, 25, 50, 100];

pub const DEFAULT_PER_PAGE: u64 = 10;

/// One entry of the pagination link set returned by listing endpoints.
///
/// `url` is `None` for disabled links (prev on the first page, next on the
/// last) and for ellipsis gaps. The frontend renders the set unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// A page of records plus the pagination envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub links: Vec<PageLink>,
    pub total: u64,
    /// 1-based index of the first record on this page, `None` when empty
    pub from: Option<u64>,
    /// 1-based index of the last record on this page, `None` when empty
    pub to: Option<u64>,
    pub current_page: u64,
    pub per_page: u64,
    pub last_page: u64,
}

impl<T> Paginated<T> {
    pub fn empty(per_page: u64) -> Self {
        Self {
            data: Vec::new(),
            links: Vec::new(),
            total: 0,
            from: None,
            to: None,
            current_page: 1,
            per_page,
            last_page: 1,
        }
    }
}

/// Clamp a requested page size to the allowed set, falling back to default
pub fn clamp_per_page(requested: u64) -> u64 {
    if PER_PAGE_OPTIONS.contains(&requested) {
        requested
    } else {
        DEFAULT_PER_PAGE
    }
}

/// Compute the `from`/`to` counters for a page
pub fn page_bounds(total: u64, current_page: u64, per_page: u64) -> (Option<u64>, Option<u64>) {
    if total == 0 {
        return (None, None);
    }
    let from = (current_page - 1) * per_page + 1;
    if from > total {
        return (None, None);
    }
    let to = (current_page * per_page).min(total);
    (Some(from), Some(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_per_page() {
        assert_eq!(clamp_per_page(10), 10);
        assert_eq!(clamp_per_page(25), 25);
        assert_eq!(clamp_per_page(100), 100);
        assert_eq!(clamp_per_page(0), DEFAULT_PER_PAGE);
        assert_eq!(clamp_per_page(33), DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(0, 1, 10), (None, None));
        assert_eq!(page_bounds(7, 1, 10), (Some(1), Some(7)));
        assert_eq!(page_bounds(25, 2, 10), (Some(11), Some(20)));
        assert_eq!(page_bounds(25, 3, 10), (Some(21), Some(25)));
        // page beyond the data
        assert_eq!(page_bounds(25, 4, 10), (None, None));
    }
}
