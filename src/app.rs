use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::document::{extract, Catalog, Document};
use crate::event::Event;
use crate::http::builder::build_curl;
use crate::state::app_state::AppState;
use crate::state::item::Entry;
use crate::ui::highlight::highlight_shell;

pub struct App {
    pub state: AppState,
    doc: Document,
    config: Config,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(doc: Document, config: Config) -> Self {
        let catalog = extract(&doc);
        Self::with_catalog(doc, catalog, config)
    }

    pub fn with_catalog(doc: Document, catalog: Catalog, config: Config) -> Self {
        let state = AppState::new(
            doc.info.title.clone(),
            doc.info.version.clone(),
            catalog,
            config.gesture_timeout,
        );
        Self { state, doc, config, clipboard: Box::new(SystemClipboard::default()) }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.handle_key(key, Instant::now());
            }
            Event::Key(_) => {}
            Event::Resize(width, height) => self.state.resize(width, height),
        }
    }

    /// Route one key press. Search and overlays take priority over navigation.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.state.status = None;
        // Only an unmodified `g` may continue a pending `gg`.
        if key.code != KeyCode::Char('g') || is_ctrl(key) || self.state.search_mode {
            self.state.gesture.reset();
        }

        if self.state.search_mode {
            self.handle_search_key(key);
        } else if self.state.show_help {
            self.handle_help_key(key);
        } else if self.state.show_command {
            self.handle_command_key(key);
        } else {
            self.handle_browse_key(key, now);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.cancel_search(),
            KeyCode::Enter => self.state.commit_search(),
            KeyCode::Char('c') if is_ctrl(key) => self.quit(),
            _ => self.state.edit_search(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if is_ctrl(key) => self.state.show_help = false,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => self.state.show_help = false,
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if is_ctrl(key) => self.state.show_command = false,
            KeyCode::Char('q') | KeyCode::Esc => self.state.show_command = false,
            KeyCode::Char('y') => self.copy_command(),
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, now: Instant) {
        if is_ctrl(key) {
            match key.code {
                KeyCode::Char('c') => self.quit(),
                KeyCode::Char('d') => self.state.half_page_down(self.config.half_page_lines),
                KeyCode::Char('u') => self.state.half_page_up(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.state.show_help = true,
            KeyCode::Char('/') => self.state.start_search(),
            KeyCode::Esc => {
                if self.state.is_filtered() {
                    self.state.cancel_search();
                }
            }
            KeyCode::Char('r') => self.generate_command(),
            KeyCode::Tab | KeyCode::Char('L') => self.state.next_view(),
            KeyCode::BackTab | KeyCode::Char('H') => self.state.prev_view(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_up(),
            KeyCode::Char('j') | KeyCode::Down => self.state.move_down(),
            KeyCode::Char('G') | KeyCode::End => self.state.jump_last(),
            KeyCode::Home => self.state.jump_first(),
            KeyCode::Char('g') => {
                if self.state.gesture.press('g', now) {
                    self.state.jump_first();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.toggle_fold();
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        tracing::info!("quit requested");
        self.state.should_quit = true;
    }

    /// Build the curl command for the item under the cursor and open the
    /// overlay. Components have no command.
    fn generate_command(&mut self) {
        let (method, path, op) = match self.state.entry(self.state.cursor) {
            Some(Entry::Endpoint(ep)) => (ep.method.as_str(), ep.path.as_str(), &ep.operation),
            Some(Entry::Webhook(hook)) => (hook.method.as_str(), hook.name.as_str(), &hook.operation),
            Some(Entry::Component(_)) | None => return,
        };
        let command = build_curl(method, path, op, &self.doc, &self.config.fallback_server);
        tracing::info!(method, path, "generated curl command");

        self.state.command_highlighted = Some(highlight_shell(&command));
        self.state.command = command;
        self.state.show_command = true;
    }

    fn copy_command(&mut self) {
        match self.clipboard.set_text(&self.state.command) {
            Ok(()) => self.state.status = Some("Copied to clipboard".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.state.status = Some(format!("Copy failed: {e}"));
            }
        }
    }
}

fn is_ctrl(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}
