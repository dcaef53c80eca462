use contracts::shared::pagination::{page_bounds, PageLink, Paginated};

/// How many pages are shown on each side of the current page before the
/// link set collapses into an ellipsis.
const WINDOW: u64 = 2;

/// Pages shown in the numbered part of the link set; `None` is an ellipsis gap
pub fn page_window(current: u64, last: u64) -> Vec<Option<u64>> {
    if last <= 10 {
        return (1..=last).map(Some).collect();
    }

    let mut pages: Vec<Option<u64>> = Vec::new();
    let mut prev_shown = 0u64;
    for n in 1..=last {
        let near_edge = n <= 2 || n > last - 2;
        let near_current = n + WINDOW >= current && n <= current + WINDOW;
        if near_edge || near_current {
            if prev_shown != 0 && n > prev_shown + 1 {
                pages.push(None);
            }
            pages.push(Some(n));
            prev_shown = n;
        }
    }
    pages
}

fn page_url(base_query: &str, page: u64) -> String {
    if base_query.is_empty() {
        format!("?page={}", page)
    } else {
        format!("?{}&page={}", base_query, page)
    }
}

/// Build the pagination link set the listing endpoints return verbatim to
/// the client: previous, numbered window, next. Disabled links and ellipsis
/// entries carry `url: None`.
pub fn build_links(current: u64, last: u64, base_query: &str) -> Vec<PageLink> {
    let mut links = Vec::new();

    links.push(PageLink {
        url: (current > 1).then(|| page_url(base_query, current - 1)),
        label: "« Sebelumnya".to_string(),
        active: false,
    });

    for entry in page_window(current, last) {
        match entry {
            Some(n) => links.push(PageLink {
                url: Some(page_url(base_query, n)),
                label: n.to_string(),
                active: n == current,
            }),
            None => links.push(PageLink {
                url: None,
                label: "...".to_string(),
                active: false,
            }),
        }
    }

    links.push(PageLink {
        url: (current < last).then(|| page_url(base_query, current + 1)),
        label: "Berikutnya »".to_string(),
        active: false,
    });

    links
}

/// Assemble the full pagination envelope for one page of records
pub fn make_paginated<T>(
    data: Vec<T>,
    total: u64,
    page: u64,
    per_page: u64,
    base_query: &str,
) -> Paginated<T> {
    let last_page = if total == 0 {
        1
    } else {
        (total + per_page - 1) / per_page
    };
    let (from, to) = page_bounds(total, page, per_page);
    Paginated {
        data,
        links: build_links(page, last_page, base_query),
        total,
        from,
        to,
        current_page: page,
        per_page,
        last_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_small_page_count() {
        assert_eq!(
            page_window(1, 3),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_window_collapses_middle() {
        let w = page_window(10, 20);
        assert_eq!(
            w,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn test_window_near_start_has_single_gap() {
        let w = page_window(2, 20);
        assert_eq!(
            w,
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(19), Some(20)]
        );
    }

    #[test]
    fn test_links_first_page() {
        let links = build_links(1, 3, "");
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].label, "« Sebelumnya");
        assert_eq!(links[0].url, None);
        assert!(links[1].active);
        assert_eq!(links[1].url.as_deref(), Some("?page=1"));
        assert_eq!(links[4].url.as_deref(), Some("?page=2"));
    }

    #[test]
    fn test_links_last_page_disables_next() {
        let links = build_links(3, 3, "");
        assert_eq!(links.last().unwrap().url, None);
        assert_eq!(links[0].url.as_deref(), Some("?page=2"));
    }

    #[test]
    fn test_links_preserve_filter_query() {
        let links = build_links(1, 2, "sort=terlama&per_page=25");
        assert_eq!(
            links[1].url.as_deref(),
            Some("?sort=terlama&per_page=25&page=1")
        );
    }

    #[test]
    fn test_make_paginated_envelope() {
        let page = make_paginated(vec!["a", "b"], 12, 2, 10, "");
        assert_eq!(page.last_page, 2);
        assert_eq!(page.from, Some(11));
        assert_eq!(page.to, Some(12));
        assert_eq!(page.total, 12);
    }

    #[test]
    fn test_make_paginated_empty() {
        let page = make_paginated(Vec::<&str>::new(), 0, 1, 10, "");
        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
    }
}
