use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::text::Text;

use crate::document::Catalog;
use super::{
    collection::Collection,
    gesture::DoublePress,
    item::{Component, Endpoint, Entry, ListItem, Webhook},
    mode::ViewMode,
    search::SearchInput,
    viewport,
};

/// Everything the renderer reads and the key handler mutates.
#[derive(Debug, Clone)]
pub struct AppState {
    pub title: String,
    pub version: String,
    pub endpoints: Collection<Endpoint>,
    pub components: Collection<Component>,
    pub webhooks: Collection<Webhook>,

    pub view: ViewMode,
    /// Index into the active (possibly filtered) sequence of `view`.
    pub cursor: usize,
    /// First visible item. Always `<= cursor`.
    pub scroll_offset: usize,
    pub width: u16,
    pub height: u16,

    pub show_help: bool,
    pub show_command: bool,
    /// Last generated command, shown by the command overlay.
    pub command: String,
    /// Highlighted once when generated so rendering stays cheap.
    pub command_highlighted: Option<Text<'static>>,

    /// `true` while keystrokes go to the search bar.
    pub search_mode: bool,
    pub search: SearchInput,
    pub gesture: DoublePress,
    /// One-shot message for the footer, cleared on the next key.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(
        title: impl Into<String>,
        version: impl Into<String>,
        catalog: Catalog,
        gesture_timeout: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            endpoints: Collection::new(catalog.endpoints),
            components: Collection::new(catalog.components),
            webhooks: Collection::new(catalog.webhooks),
            view: ViewMode::default(),
            cursor: 0,
            scroll_offset: 0,
            width: 80,
            height: 24,
            show_help: false,
            show_command: false,
            command: String::new(),
            command_highlighted: None,
            search_mode: false,
            search: SearchInput::default(),
            gesture: DoublePress::new(gesture_timeout),
            status: None,
            should_quit: false,
        }
    }

    pub fn has_webhooks(&self) -> bool {
        !self.webhooks.master().is_empty()
    }

    /// Length of the active sequence for `view`.
    pub fn active_len(&self) -> usize {
        self.len_of(self.view)
    }

    pub fn len_of(&self, view: ViewMode) -> usize {
        match view {
            ViewMode::Endpoints => self.endpoints.len(),
            ViewMode::Webhooks => self.webhooks.len(),
            ViewMode::Components => self.components.len(),
        }
    }

    pub fn entry(&self, index: usize) -> Option<Entry<'_>> {
        match self.view {
            ViewMode::Endpoints => self.endpoints.get(index).map(Entry::Endpoint),
            ViewMode::Webhooks => self.webhooks.get(index).map(Entry::Webhook),
            ViewMode::Components => self.components.get(index).map(Entry::Component),
        }
    }

    pub fn item_height(&self, index: usize) -> usize {
        match self.view {
            ViewMode::Endpoints => self.endpoints.height_of(index),
            ViewMode::Webhooks => self.webhooks.height_of(index),
            ViewMode::Components => self.components.height_of(index),
        }
    }

    pub fn content_height(&self) -> usize {
        viewport::content_height(self.height)
    }

    pub fn content_width(&self) -> usize {
        viewport::content_width(self.width)
    }

    /// Clamp the cursor into the active sequence, then recompute the scroll
    /// offset so the cursor item is fully on screen.
    pub fn ensure_cursor_visible(&mut self) {
        let len = self.active_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll_offset = viewport::recompute_scroll(
            self.cursor,
            self.scroll_offset,
            self.content_height(),
            len,
            |i| self.item_height(i),
        );
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.ensure_cursor_visible();
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.ensure_cursor_visible();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.active_len() {
            self.cursor += 1;
            self.ensure_cursor_visible();
        }
    }

    /// Jump down a fixed number of items, stopping at the last one.
    pub fn half_page_down(&mut self, lines: usize) {
        let last = self.active_len().saturating_sub(1);
        self.cursor = (self.cursor + lines).min(last);
        self.ensure_cursor_visible();
    }

    /// Jump up by half the content height, stopping at the first item.
    pub fn half_page_up(&mut self) {
        let half = (self.content_height() / 2).max(1);
        self.cursor = self.cursor.saturating_sub(half);
        self.ensure_cursor_visible();
    }

    pub fn jump_first(&mut self) {
        self.cursor = 0;
        self.ensure_cursor_visible();
    }

    pub fn jump_last(&mut self) {
        self.cursor = self.active_len().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// Flip the fold flag of the item under the cursor. Returns its key.
    pub fn toggle_fold(&mut self) -> Option<String> {
        let cursor = self.cursor;
        let key = match self.view {
            ViewMode::Endpoints => self.endpoints.toggle_fold(cursor).map(ListItem::key),
            ViewMode::Webhooks => self.webhooks.toggle_fold(cursor).map(ListItem::key),
            ViewMode::Components => self.components.toggle_fold(cursor).map(ListItem::key),
        };
        if let Some(key) = &key {
            tracing::debug!(item = %key, "toggled fold");
        }
        self.ensure_cursor_visible();
        key
    }

    fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn next_view(&mut self) {
        self.set_view(self.view.next(self.has_webhooks()));
    }

    pub fn prev_view(&mut self) {
        self.set_view(self.view.prev(self.has_webhooks()));
    }

    /// Re-derive every filtered view from the current query.
    fn refilter(&mut self) {
        let query = self.search.value();
        self.endpoints.apply_filter(query);
        self.components.apply_filter(query);
        self.webhooks.apply_filter(query);
        tracing::debug!(
            query,
            endpoints = self.endpoints.len(),
            components = self.components.len(),
            webhooks = self.webhooks.len(),
            "applied filter"
        );
    }

    /// Open the search bar with an empty query. The list shows everything
    /// until the first keystroke.
    pub fn start_search(&mut self) {
        self.search_mode = true;
        self.search.clear();
        self.refilter();
        self.ensure_cursor_visible();
    }

    /// Drop the query and return to the top of the unfiltered list.
    pub fn cancel_search(&mut self) {
        self.search_mode = false;
        self.search.clear();
        self.refilter();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Keep the query and hand keys back to navigation.
    pub fn commit_search(&mut self) {
        self.search_mode = false;
    }

    /// Feed an editing key to the search bar, re-filtering when the text changes.
    pub fn edit_search(&mut self, key: KeyEvent) {
        if self.search.handle_key(key) {
            self.refilter();
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Start with `query` already committed.
    pub fn apply_query(&mut self, query: &str) {
        self.search = SearchInput::new(query);
        self.search_mode = false;
        self.refilter();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// `true` when a non-empty query is narrowing the lists.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
    }
}
