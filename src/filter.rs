//! Catalog filtering, ordering and pagination
//!
//! Everything here is a pure function over a slice of skills. The grid
//! controller calls [`compute_view`] whenever the settled query, the tag
//! filter or the requested page changes.

use crate::models::Skill;

/// Cards per page
pub const PAGE_SIZE: usize = 12;

/// Above this many pages the page index collapses gaps into ellipses
const MAX_UNCOLLAPSED_PAGES: usize = 7;

/// One page of the filtered catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub items: Vec<&'a Skill>,
    pub total_pages: usize,
    pub current_page: usize,
    pub match_count: usize,
}

/// Entry in the compact page index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Check a skill against a lowercased query and an optional tag/category
fn matches(skill: &Skill, query_lower: &str, tag: Option<&str>) -> bool {
    let matches_search = skill.name.to_lowercase().contains(query_lower)
        || skill.description.to_lowercase().contains(query_lower)
        || skill
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(query_lower));

    let matches_tag = match tag {
        Some(tag) => skill.tags.iter().any(|t| t == tag) || skill.category.name() == tag,
        None => true,
    };

    matches_search && matches_tag
}

/// Filter skills by query and tag, most popular first.
///
/// Equal popularity keeps input order (`sort_by` is stable).
pub fn filter_skills<'a>(skills: &'a [Skill], query: &str, tag: Option<&str>) -> Vec<&'a Skill> {
    let query_lower = query.to_lowercase();
    let mut filtered: Vec<&Skill> = skills
        .iter()
        .filter(|s| matches(s, &query_lower, tag))
        .collect();
    filtered.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    filtered
}

/// Number of pages for a match count; always at least one
pub fn total_pages(match_count: usize, page_size: usize) -> usize {
    match_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page (possibly negative) into `[0, total_pages - 1]`
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.saturating_sub(1);
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).map_or(last, |p| p.min(last))
    }
}

/// Compute the visible page for the given filter and page request
pub fn compute_view<'a>(
    skills: &'a [Skill],
    query: &str,
    tag: Option<&str>,
    page: usize,
    page_size: usize,
) -> View<'a> {
    let page_size = page_size.max(1);
    let filtered = filter_skills(skills, query, tag);
    let match_count = filtered.len();
    let total_pages = total_pages(match_count, page_size);
    let current_page = page.min(total_pages - 1);

    let start = (current_page * page_size).min(match_count);
    let end = (start + page_size).min(match_count);

    View {
        items: filtered[start..end].to_vec(),
        total_pages,
        current_page,
        match_count,
    }
}

/// Page numbers to show, with gaps collapsed into at most one ellipsis per side
pub fn pagination_items(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= MAX_UNCOLLAPSED_PAGES {
        return (0..total_pages).map(PageMarker::Page).collect();
    }

    let last = total_pages - 1;
    let current = current_page.min(last);
    let mut items = vec![PageMarker::Page(0)];

    if current > 2 {
        items.push(PageMarker::Ellipsis);
    }
    for page in current.saturating_sub(1).max(1)..=(current + 1).min(last - 1) {
        items.push(PageMarker::Page(page));
    }
    if current + 3 < total_pages {
        items.push(PageMarker::Ellipsis);
    }
    items.push(PageMarker::Page(last));

    items
}
