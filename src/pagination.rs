//! Pagination window math, kept free of any rendering concern.

/// One slot in the rendered pagination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    /// Gap marker between the boundary page and the window. Never a
    /// navigation target.
    Ellipsis,
}

pub fn total_pages(total_count: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_count.div_ceil(per_page as u64) as u32
}

/// Computes the ordered pagination row: a window of up to `max_visible`
/// contiguous pages centered on `current_page`, with page 1 and the last
/// page pinned at the edges and ellipses marking any gap wider than one.
///
/// Empty when everything fits on a single page (no pagination UI).
pub fn compute_window(
    current_page: u32,
    total_count: u64,
    per_page: u32,
    max_visible: u32,
) -> Vec<PageItem> {
    let total = total_pages(total_count, per_page);
    if total <= 1 {
        return Vec::new();
    }

    let delta = max_visible / 2;
    let mut start = current_page.saturating_sub(delta).max(1);
    let mut end = (current_page + delta).min(total);

    // Clamping at either boundary shrinks the window; grow it back on the
    // open side so it stays max_visible wide whenever enough pages exist.
    if end - start + 1 < max_visible {
        if start == 1 {
            end = (start + max_visible - 1).min(total);
        } else {
            start = end.saturating_sub(max_visible - 1).max(1);
        }
    }

    let mut row = Vec::new();
    if start > 1 {
        row.push(PageItem::Page(1));
        if start > 2 {
            row.push(PageItem::Ellipsis);
        }
    }
    for page in start..=end {
        row.push(PageItem::Page(page));
    }
    if end < total {
        if end < total - 1 {
            row.push(PageItem::Ellipsis);
        }
        row.push(PageItem::Page(total));
    }
    row
}

/// 1-based bounds of the rows shown on `current_page`, for the
/// "Showing X to Y of Z results" footer.
pub fn result_bounds(current_page: u32, per_page: u32, total_count: u64) -> (u64, u64) {
    let first = ((current_page as u64 - 1) * per_page as u64 + 1).min(total_count);
    let last = (current_page as u64 * per_page as u64).min(total_count);
    (first, last)
}
