use serde::{Deserialize, Serialize};

/// Label of the "previous page" link.
pub const PREVIOUS_LABEL: &str = "&laquo; Previous";
/// Label of the "next page" link.
pub const NEXT_LABEL: &str = "Next &raquo;";
/// Label of a gap between page numbers.
pub const GAP_LABEL: &str = "...";

fn get_pages(
    total_pages: u32,
    current_page: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    // Page counts come from the backend, so stay clear of overflow near u32::MAX.
    let past_last = last_page.saturating_add(1);
    let left_end = left_edge.saturating_add(1).min(past_last);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(past_last);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge).saturating_add(1));

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One entry of a pager, as rendered by list screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    pub label: String,
    pub active: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl PaginationLink {
    fn new(label: impl Into<String>, page: Option<u32>, active: bool) -> Self {
        Self {
            label: label.into(),
            active,
            url: None,
            page,
        }
    }
}

/// Builds previous/numbered/next links for `current_page` out of
/// `total_pages`, collapsing long ranges into gaps.
pub fn page_links(current_page: u32, total_pages: u32) -> Vec<PaginationLink> {
    if total_pages == 0 {
        return vec![];
    }

    let current_page = current_page.clamp(1, total_pages);
    let previous = (current_page > 1).then(|| current_page - 1);
    let next = (current_page < total_pages).then(|| current_page + 1);

    let mut links = vec![PaginationLink::new(PREVIOUS_LABEL, previous, false)];
    links.extend(
        get_pages(total_pages, current_page, 2, 2, 4, 2)
            .into_iter()
            .map(|page| match page {
                Some(page) => PaginationLink::new(page.to_string(), Some(page), page == current_page),
                None => PaginationLink::new(GAP_LABEL, None, false),
            }),
    );
    links.push(PaginationLink::new(NEXT_LABEL, next, false));

    links
}
