use crate::filter::ALL_CATEGORY;

/// Encode a category as a location fragment. `"all"` maps to the empty
/// fragment so the default view has no location suffix.
pub fn encode_fragment(category: &str) -> String {
    if category == ALL_CATEGORY {
        String::new()
    } else {
        category.to_string()
    }
}

/// Decode a location fragment back into a category.
pub fn decode_fragment(fragment: &str) -> String {
    if fragment.is_empty() {
        ALL_CATEGORY.to_string()
    } else {
        fragment.to_string()
    }
}

/// Linear navigation history over location fragments.
///
/// Mirrors browser-style semantics: selecting a category pushes a fragment
/// and discards any forward entries; back/forward move the cursor without
/// pushing, so applying the resulting fragment never loops.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<String>,
    cursor: usize,
}

impl History {
    /// Start a history at the given fragment (the deep-linked location).
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            stack: vec![initial.into()],
            cursor: 0,
        }
    }

    /// The fragment at the cursor.
    pub fn current(&self) -> &str {
        &self.stack[self.cursor]
    }

    /// Push a new fragment, truncating anything ahead of the cursor.
    ///
    /// Pushing the current fragment again is a no-op, so repeated selection
    /// of the same category does not pad the history.
    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if fragment == *self.current() {
            return;
        }
        self.stack.truncate(self.cursor + 1);
        self.stack.push(fragment);
        self.cursor += 1;
    }

    /// Move back one entry, returning the new current fragment.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Move forward one entry, returning the new current fragment.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.stack.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_forward(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_round_trip() {
        for category in ["games", "design", "ai"] {
            assert_eq!(decode_fragment(&encode_fragment(category)), category);
        }
    }

    #[test]
    fn test_all_maps_to_empty_fragment() {
        assert_eq!(encode_fragment(ALL_CATEGORY), "");
        assert_eq!(decode_fragment(""), ALL_CATEGORY);
    }

    #[test]
    fn test_push_and_back() {
        let mut history = History::default();
        history.push("games");
        history.push("design");

        assert_eq!(history.current(), "design");
        assert_eq!(history.back(), Some("games"));
        assert_eq!(history.back(), Some(""));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = History::default();
        history.push("games");
        history.back();

        assert_eq!(history.forward(), Some("games"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::default();
        history.push("games");
        history.push("design");
        history.back();
        history.push("tools");

        assert_eq!(history.current(), "tools");
        assert!(!history.can_forward());
        assert_eq!(history.back(), Some("games"));
    }

    #[test]
    fn test_pushing_current_fragment_is_noop() {
        let mut history = History::default();
        history.push("games");
        history.push("games");

        assert_eq!(history.back(), Some(""));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn test_deep_linked_start() {
        let history = History::new("design");
        assert_eq!(history.current(), "design");
        assert!(!history.can_back());
    }
}
