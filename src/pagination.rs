use serde::Serialize;

/// Number of customers shown per directory page.
pub const CUSTOMERS_PER_PAGE: usize = 5;

/// One page cut out of a larger list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub visible: Vec<T>,
    pub total_pages: usize,
}

/// Number of pages needed to show `total` items, zero for an empty list.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Index of the first item of the 1-based `page`. Page 0 is treated as page 1.
pub fn page_start(page: usize, page_size: usize) -> usize {
    page.max(1).saturating_sub(1).saturating_mul(page_size)
}

/// Returns the slice `[(page-1)*page_size, page*page_size)` clamped to `items`.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> Page<T> {
    let start = page_start(page, page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        visible: items[start..end].to_vec(),
        total_pages: total_pages(items.len(), page_size),
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Navigation bar state rendered under a paginated table.
///
/// `pages` holds the page numbers to draw, `None` marking an elided gap.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageNav {
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// 1-based index of the first shown item.
    pub showing_from: usize,
    /// 1-based index of the last shown item.
    pub showing_to: usize,
    pub total_items: usize,
}

impl PageNav {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let current_page = current_page.max(1);
        let total_pages = total_pages(total_items, page_size);
        let start = page_start(current_page, page_size);

        Self {
            pages: get_pages(total_pages, current_page, 2, 2, 2, 2),
            page: current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            showing_from: (start + 1).min(total_items),
            showing_to: (start + page_size).min(total_items),
            total_items,
        }
    }
}
