use crate::catalog::Entry;

/// Current filter selection: category, active tags, search text.
///
/// The visible set is always derived from this plus the full catalog via
/// [`visible_indices`]; nothing here touches the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category, `"all"` meaning no category restriction.
    pub category: String,
    /// Toggled tags. Empty means no tag restriction. Kept in toggle order.
    pub active_tags: Vec<String>,
    /// Search query, stored verbatim and case-folded at match time.
    pub search: String,
}

/// Category value meaning "no category filter".
pub const ALL_CATEGORY: &str = "all";

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            active_tags: Vec::new(),
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Replace the search query verbatim.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Replace the selected category.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Toggle a tag: insert if absent, remove if present.
    ///
    /// Returns true if the tag was added, false if removed.
    pub fn toggle_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if let Some(pos) = self.active_tags.iter().position(|t| *t == tag) {
            self.active_tags.remove(pos);
            false
        } else {
            self.active_tags.push(tag);
            true
        }
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|t| t == tag)
    }

    /// True when no filter restricts the catalog (the startup state).
    pub fn is_default(&self) -> bool {
        self.category == ALL_CATEGORY && self.active_tags.is_empty() && self.search.is_empty()
    }

    /// Whether an entry passes all three predicates (conjunction).
    ///
    /// Category and tag comparisons are case-insensitive equality; the search
    /// query is a case-insensitive substring of title, description, or any tag.
    pub fn matches(&self, entry: &Entry) -> bool {
        let category_match = self.category == ALL_CATEGORY
            || entry.category.to_lowercase() == self.category.to_lowercase();

        let tag_match = self.active_tags.is_empty()
            || self.active_tags.iter().any(|active| {
                entry
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase() == active.to_lowercase())
            });

        let query = self.search.to_lowercase();
        let search_match = query.is_empty()
            || entry.title.to_lowercase().contains(&query)
            || entry.description.to_lowercase().contains(&query)
            || entry.tags.iter().any(|tag| tag.to_lowercase().contains(&query));

        category_match && tag_match && search_match
    }
}

/// Derive the visible subset as indices into `entries`, preserving order.
pub fn visible_indices(entries: &[Entry], state: &FilterState) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| state.matches(entry))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(title: &str, category: &str, tags: &[&str]) -> Entry {
        Entry {
            title: title.to_string(),
            description: format!("{title} description"),
            url: format!("https://example.com/{}", title.to_lowercase()),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: String::new(),
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("Chess", "games", &["board", "strategy"]),
            entry("Paint Tool", "design", &["art"]),
        ]
    }

    #[test]
    fn test_default_state_shows_everything() {
        let entries = sample();
        let state = FilterState::default();
        assert!(state.is_default());
        assert_eq!(visible_indices(&entries, &state), vec![0, 1]);
    }

    #[test]
    fn test_category_filter() {
        let entries = sample();
        let mut state = FilterState::default();
        state.set_category("games");
        assert_eq!(visible_indices(&entries, &state), vec![0]);
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let entries = sample();
        let mut state = FilterState::default();
        state.set_category("GAMES");
        assert_eq!(visible_indices(&entries, &state), vec![0]);
    }

    #[test]
    fn test_category_and_tags_conjoin() {
        let entries = sample();
        let mut state = FilterState::default();

        state.set_category("games");
        assert_eq!(visible_indices(&entries, &state), vec![0]);

        // Chess carries the "board" tag, so the visible set is unchanged.
        state.toggle_tag("board");
        assert_eq!(visible_indices(&entries, &state), vec![0]);

        // Only "art" active with category still "games": Chess lacks the tag
        // and Paint Tool fails the category, so nothing survives.
        state.toggle_tag("board");
        state.toggle_tag("art");
        assert_eq!(visible_indices(&entries, &state), Vec::<usize>::new());
    }

    #[test]
    fn test_tag_match_is_any_of_active() {
        let entries = sample();
        let mut state = FilterState::default();
        state.toggle_tag("board");
        state.toggle_tag("art");
        // One matching tag is enough.
        assert_eq!(visible_indices(&entries, &state), vec![0, 1]);
    }

    #[test]
    fn test_search_matches_title_only_entry() {
        let entries = sample();
        let mut state = FilterState::default();
        state.set_search("paint");
        assert_eq!(visible_indices(&entries, &state), vec![1]);
    }

    #[test]
    fn test_search_matches_tags() {
        let entries = sample();
        let mut state = FilterState::default();
        state.set_search("strat");
        assert_eq!(visible_indices(&entries, &state), vec![0]);
    }

    #[test]
    fn test_toggle_tag_reports_direction() {
        let mut state = FilterState::default();
        assert!(state.toggle_tag("board"));
        assert!(state.is_tag_active("board"));
        assert!(!state.toggle_tag("board"));
        assert!(!state.is_tag_active("board"));
    }

    #[test]
    fn test_set_category_is_idempotent() {
        let entries = sample();
        let mut state = FilterState::default();
        state.set_category("design");
        let once = visible_indices(&entries, &state);
        state.set_category("design");
        assert_eq!(visible_indices(&entries, &state), once);
    }

    prop_compose! {
        fn arb_entry()(
            title in "[a-zA-Z ]{0,12}",
            description in "[a-zA-Z ]{0,20}",
            category in "[a-z]{1,6}",
            tags in prop::collection::vec("[a-zA-Z]{1,6}", 0..4),
        ) -> Entry {
            Entry {
                title,
                description,
                url: String::new(),
                category,
                tags,
                icon: String::new(),
            }
        }
    }

    proptest! {
        #[test]
        fn prop_visible_is_ordered_subset(
            entries in prop::collection::vec(arb_entry(), 0..20),
            category in "[a-z]{1,6}",
            query in "[a-zA-Z]{0,4}",
        ) {
            let state = FilterState {
                category,
                active_tags: Vec::new(),
                search: query,
            };
            let visible = visible_indices(&entries, &state);
            prop_assert!(visible.iter().all(|&i| i < entries.len()));
            prop_assert!(visible.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_toggle_twice_restores_active_set(
            tags in prop::collection::vec("[a-z]{1,6}", 0..5),
            tag in "[a-z]{1,6}",
        ) {
            // Build the initial set by toggling, as the UI does, so it is
            // duplicate-free.
            let mut state = FilterState::default();
            for t in tags {
                if !state.is_tag_active(&t) {
                    state.toggle_tag(t);
                }
            }
            let mut before = state.active_tags.clone();
            state.toggle_tag(tag.clone());
            state.toggle_tag(tag);

            // Set semantics: toggling may move a tag to the end of the list,
            // but membership is restored exactly.
            let mut after = state.active_tags.clone();
            before.sort();
            after.sort();
            prop_assert_eq!(after, before);
        }

        #[test]
        fn prop_search_is_case_insensitive(
            entries in prop::collection::vec(arb_entry(), 0..20),
            query in "[a-zA-Z]{0,6}",
        ) {
            let upper = FilterState {
                category: ALL_CATEGORY.to_string(),
                active_tags: Vec::new(),
                search: query.to_uppercase(),
            };
            let lower = FilterState {
                category: ALL_CATEGORY.to_string(),
                active_tags: Vec::new(),
                search: query.to_lowercase(),
            };
            prop_assert_eq!(
                visible_indices(&entries, &upper),
                visible_indices(&entries, &lower)
            );
        }

        #[test]
        fn prop_default_state_is_identity(
            entries in prop::collection::vec(arb_entry(), 0..20),
        ) {
            let state = FilterState::default();
            let expected: Vec<usize> = (0..entries.len()).collect();
            prop_assert_eq!(visible_indices(&entries, &state), expected);
        }
    }
}
