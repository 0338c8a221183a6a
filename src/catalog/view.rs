//! Catalogue view model: filtering, sorting, and pagination.
//!
//! Owns the ephemeral query state (free-text query, selected tag, visible
//! count) next to the immutable tool list. The filtered, sorted, and
//! paginated lists are pure projections recomputed on demand; nothing here
//! can fail.

use std::collections::BTreeSet;

use super::Tool;

/// Records revealed per "show more" step, and the initial visible count.
pub const PAGE_SIZE: usize = 20;

/// View model over the immutable tool list.
///
/// Invariant: `visible_count` stays within
/// `[page_size, max(page_size, filtered_len)]` and snaps back to
/// `page_size` whenever the query or the selected tag changes.
#[derive(Debug, Clone)]
pub struct CatalogView {
    tools: Vec<Tool>,
    tags: Vec<String>,
    page_size: usize,
    search_query: String,
    selected_tag: Option<String>,
    visible_count: usize,
}

impl CatalogView {
    /// Create a view with the default page size.
    pub fn new(tools: Vec<Tool>) -> Self {
        Self::with_page_size(tools, PAGE_SIZE)
    }

    /// Create a view with an explicit page size (clamped to at least 1).
    pub fn with_page_size(tools: Vec<Tool>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let tags = extract_tags(&tools);
        Self {
            tools,
            tags,
            page_size,
            search_query: String::new(),
            selected_tag: None,
            visible_count: page_size,
        }
    }

    /// The tag vocabulary: all distinct tags, case-sensitive, ascending.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Size of the unfiltered base list.
    pub fn total(&self) -> usize {
        self.tools.len()
    }

    /// Whether any filter is active.
    pub fn has_filters(&self) -> bool {
        !self.search_query.is_empty() || self.selected_tag.is_some()
    }

    /// Replace the free-text query. A change resets pagination.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search_query {
            self.search_query = query;
            self.visible_count = self.page_size;
        }
    }

    /// Replace the selected tag (`None` means "all tags"). A change resets
    /// pagination.
    pub fn select_tag(&mut self, tag: Option<String>) {
        if tag != self.selected_tag {
            self.selected_tag = tag;
            self.visible_count = self.page_size;
        }
    }

    /// Reset query and tag in one step; pagination snaps back with them.
    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.selected_tag = None;
        self.visible_count = self.page_size;
    }

    /// The filtered, sorted list.
    ///
    /// A tool is included iff the (trimmed, case-insensitive) query matches
    /// its name, description, or any tag, AND the selected tag, if any, is
    /// an exact member of its tags. Sorted by name ascending, case-folded;
    /// the sort is stable so equal names keep base-list order.
    pub fn filtered(&self) -> Vec<&Tool> {
        let query = self.search_query.trim().to_lowercase();
        let mut list: Vec<&Tool> = self
            .tools
            .iter()
            .filter(|tool| self.matches(tool, &query))
            .collect();
        list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        list
    }

    pub fn filtered_len(&self) -> usize {
        let query = self.search_query.trim().to_lowercase();
        self.tools.iter().filter(|tool| self.matches(tool, &query)).count()
    }

    /// The visible prefix of the filtered list.
    pub fn visible(&self) -> Vec<&Tool> {
        let mut list = self.filtered();
        list.truncate(self.visible_count);
        list
    }

    /// Reveal one more page, capped at the filtered length.
    pub fn show_more(&mut self) {
        let cap = self.filtered_len().max(self.page_size);
        self.visible_count = (self.visible_count + self.page_size).min(cap);
    }

    /// Collapse back to the first page.
    pub fn show_less(&mut self) {
        self.visible_count = self.page_size;
    }

    pub fn can_show_more(&self) -> bool {
        self.visible_count < self.filtered_len()
    }

    pub fn can_show_less(&self) -> bool {
        self.visible_count > self.page_size
    }

    fn matches(&self, tool: &Tool, query: &str) -> bool {
        let text_match = query.is_empty()
            || tool.name.to_lowercase().contains(query)
            || tool.description.to_lowercase().contains(query)
            || tool.tags.iter().any(|tag| tag.to_lowercase().contains(query));

        let tag_match = match &self.selected_tag {
            None => true,
            Some(selected) => tool.tags.iter().any(|tag| tag == selected),
        };

        text_match && tag_match
    }
}

/// Distinct tags across all records, sorted ascending.
fn extract_tags(tools: &[Tool]) -> Vec<String> {
    let set: BTreeSet<&str> = tools
        .iter()
        .flat_map(|tool| tool.tags.iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_owned).collect()
}
