use crate::catalog::{Catalog, Entry};
use crate::filter::{self, FilterState};
use crate::history::{self, History};
use crate::theme::{Theme, ThemeStore};

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
    Tags,
}

/// Input mode for the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// A user action, dispatched through [`App::dispatch`].
///
/// Key handlers translate terminal events into these, so the state
/// transitions are testable without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search query (applied on every keystroke).
    SetSearch(String),
    /// Select a category and push it onto the navigation history.
    SetCategory(String),
    /// Toggle a tag in the active set.
    ToggleTag(String),
    /// Apply the category encoded in a history fragment without pushing.
    NavigationChanged(String),
    /// Flip and persist the theme.
    ToggleTheme,
}

/// Vertical chrome around the list: header, search bar, filter strip,
/// status line, list borders.
pub const LIST_OVERHEAD: u16 = 13;

/// Main application state.
pub struct App {
    pub catalog: Catalog,
    pub filter: FilterState,
    /// Indices of visible entries, in catalog order.
    pub visible: Vec<usize>,

    // Filter controls, derived once from the full catalog.
    pub categories: Vec<String>,
    pub tags: Vec<String>,

    pub history: History,
    pub theme: Theme,
    theme_store: Option<ThemeStore>,

    pub should_quit: bool,
    pub view: View,
    pub input_mode: InputMode,
    pub show_help: bool,

    // List view state
    pub list_selected: usize, // index within the visible page
    pub list_offset: usize,   // offset into `visible`
    pub page_size: usize,

    // Detail view state
    pub detail: Option<usize>, // index into the catalog
    pub detail_scroll: u16,

    // Tag picker state
    pub tags_selected: usize,

    /// Dismissable load-failure notice.
    pub notice: Option<String>,
    pub status_msg: String,
}

impl App {
    pub fn new(
        catalog: Catalog,
        initial_category: &str,
        theme: Theme,
        theme_store: Option<ThemeStore>,
    ) -> Self {
        let categories = catalog.categories();
        let tags = catalog.tags();
        let history = History::new(history::encode_fragment(initial_category));

        let mut filter = FilterState::default();
        filter.set_category(initial_category);

        let mut app = Self {
            catalog,
            filter,
            visible: Vec::new(),
            categories,
            tags,
            history,
            theme,
            theme_store,
            should_quit: false,
            view: View::List,
            input_mode: InputMode::Normal,
            show_help: false,
            list_selected: 0,
            list_offset: 0,
            page_size: 20, // Updated on first render/resize
            detail: None,
            detail_scroll: 0,
            tags_selected: 0,
            notice: None,
            status_msg: String::new(),
        };
        app.apply_filter();
        app.status_msg = format!("{} links loaded", app.catalog.len());
        app
    }

    /// Recompute the visible set and reset list position.
    pub fn apply_filter(&mut self) {
        self.visible = filter::visible_indices(self.catalog.entries(), &self.filter);
        self.list_offset = 0;
        self.list_selected = 0;

        self.status_msg = if self.filter.is_default() {
            format!("{} links", self.visible.len())
        } else {
            format!("{} of {} links match", self.visible.len(), self.catalog.len())
        };
    }

    /// Apply a user command.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::SetSearch(query) => {
                self.filter.set_search(query);
                self.apply_filter();
            }
            Command::SetCategory(category) => {
                self.history.push(history::encode_fragment(&category));
                self.filter.set_category(category);
                self.apply_filter();
            }
            Command::ToggleTag(tag) => {
                self.filter.toggle_tag(tag);
                self.apply_filter();
            }
            Command::NavigationChanged(fragment) => {
                // No history push here: back/forward and the startup deep
                // link both land on this arm.
                self.filter.set_category(history::decode_fragment(&fragment));
                self.apply_filter();
            }
            Command::ToggleTheme => {
                self.theme = self.theme.toggle();
                match self.theme_store.as_ref().map(|s| s.save(self.theme)) {
                    Some(Err(e)) => {
                        self.status_msg = format!("Theme: {} (not saved: {})", self.theme, e);
                    }
                    _ => {
                        self.status_msg = format!("Theme: {}", self.theme);
                    }
                }
            }
        }
    }

    /// Go back in the category history, if possible.
    pub fn navigate_back(&mut self) {
        match self.history.back().map(str::to_string) {
            Some(fragment) => self.dispatch(Command::NavigationChanged(fragment)),
            None => self.status_msg = "Already at oldest view".to_string(),
        }
    }

    /// Go forward in the category history, if possible.
    pub fn navigate_forward(&mut self) {
        match self.history.forward().map(str::to_string) {
            Some(fragment) => self.dispatch(Command::NavigationChanged(fragment)),
            None => self.status_msg = "Already at newest view".to_string(),
        }
    }

    /// Select the next category in catalog order (wrapping).
    pub fn next_category(&mut self) {
        if let Some(category) = self.cycle_category(1) {
            self.dispatch(Command::SetCategory(category));
        }
    }

    /// Select the previous category in catalog order (wrapping).
    pub fn prev_category(&mut self) {
        if let Some(category) = self.cycle_category(-1) {
            self.dispatch(Command::SetCategory(category));
        }
    }

    fn cycle_category(&self, step: isize) -> Option<String> {
        if self.categories.is_empty() {
            return None;
        }
        let len = self.categories.len() as isize;
        // A deep-linked category absent from the catalog cycles from "all".
        let current = self
            .categories
            .iter()
            .position(|c| c.to_lowercase() == self.filter.category.to_lowercase())
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        Some(self.categories[next].clone())
    }

    // ── List paging ──

    /// The slice of visible indices on the current page.
    pub fn visible_page(&self) -> &[usize] {
        let end = (self.list_offset + self.page_size).min(self.visible.len());
        &self.visible[self.list_offset..end]
    }

    /// Catalog index of the selected entry.
    pub fn selected_index(&self) -> Option<usize> {
        self.visible.get(self.list_offset + self.list_selected).copied()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_index().and_then(|i| self.catalog.get(i))
    }

    /// Update page size based on terminal height.
    pub fn update_page_size(&mut self, terminal_height: u16) {
        let new_size = terminal_height.saturating_sub(LIST_OVERHEAD) as usize;
        self.page_size = new_size.max(1);
        let page_len = self.visible_page().len();
        if self.list_selected >= page_len {
            self.list_selected = page_len.saturating_sub(1);
        }
    }

    /// Move selection down, paging at the boundary.
    pub fn list_next(&mut self) {
        let page_len = self.visible_page().len();
        if page_len == 0 {
            return;
        }
        if self.list_selected + 1 < page_len {
            self.list_selected += 1;
        } else {
            let new_offset = self.list_offset + self.page_size;
            if new_offset < self.visible.len() {
                self.list_offset = new_offset;
                self.list_selected = 0;
            }
        }
    }

    /// Move selection up, paging at the boundary.
    pub fn list_prev(&mut self) {
        if self.list_selected > 0 {
            self.list_selected -= 1;
        } else if self.list_offset > 0 {
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
            self.list_selected = self.visible_page().len().saturating_sub(1);
        }
    }

    pub fn list_page_down(&mut self) {
        let new_offset = self.list_offset + self.page_size;
        if new_offset < self.visible.len() {
            self.list_offset = new_offset;
            self.list_selected = 0;
        } else {
            self.list_end();
        }
    }

    pub fn list_page_up(&mut self) {
        if self.list_offset > 0 {
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
        }
        self.list_selected = 0;
    }

    /// Jump to the first page.
    pub fn list_home(&mut self) {
        self.list_offset = 0;
        self.list_selected = 0;
    }

    /// Jump to the last page.
    pub fn list_end(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let last_page_start = ((self.visible.len() - 1) / self.page_size) * self.page_size;
        self.list_offset = last_page_start;
        self.list_selected = self.visible_page().len().saturating_sub(1);
    }

    // ── Detail view ──

    pub fn open_detail(&mut self) {
        if let Some(index) = self.selected_index() {
            self.detail = Some(index);
            self.detail_scroll = 0;
            self.view = View::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.view = View::List;
    }

    pub fn detail_entry(&self) -> Option<&Entry> {
        self.detail.and_then(|i| self.catalog.get(i))
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(20);
    }

    pub fn scroll_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(20);
    }

    // ── Tag picker ──

    pub fn tags_next(&mut self) {
        if !self.tags.is_empty() && self.tags_selected + 1 < self.tags.len() {
            self.tags_selected += 1;
        }
    }

    pub fn tags_prev(&mut self) {
        self.tags_selected = self.tags_selected.saturating_sub(1);
    }

    /// Toggle the tag under the picker cursor.
    pub fn toggle_selected_tag(&mut self) {
        if let Some(tag) = self.tags.get(self.tags_selected).cloned() {
            self.dispatch(Command::ToggleTag(tag));
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
