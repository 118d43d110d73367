//! TUI application state and event handling.
//!
//! The `App` struct owns all application state and runs the main event loop
//! via `run()`. It manages:
//!
//! - **Lifecycle**: Loading splash, username gate, catalog browser, fault screen
//! - **Search**: Live substring filtering of the catalog as the query changes
//! - **Session**: Username and theme, persisted through [`SessionStore`]
//! - **Status messages**: Transient feedback for clipboard operations and errors
//! - **Dirty state tracking**: Optimized rendering only when state changes

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::clock::format_header_clock;
use super::events::{Action, poll_event};
use super::rendering::{self, BrowseContext};
use super::theme::Palette;
use crate::clipboard;
use crate::models::{Catalog, category_title};
use crate::session_store::SessionStore;
use crate::views::{ResolvedView, ViewState};

/// Splash screen duration before the catalog is shown.
pub const STARTUP_DELAY_MS: u64 = 1500;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
const MAX_QUERY_LEN: usize = 256;
const MAX_USERNAME_LEN: usize = 64;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which screen the app is on.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Startup splash, shown until the deadline passes.
    Loading { deadline: Instant },
    /// Username prompt for a logged-out session.
    Gate,
    /// The catalog browser (dashboard or category detail).
    Browse,
    /// Recoverable failure screen; browsing state is kept for retry.
    Fault { detail: String, show_detail: bool },
}

pub struct App {
    pub catalog: Catalog,
    pub session: SessionStore,
    pub view: ViewState,
    pub phase: Phase,
    /// Sidebar rows as (category id, display title), in catalog order.
    pub categories: Vec<(String, String)>,
    /// Hovered sidebar row; 0 is the dashboard.
    pub nav_idx: usize,
    /// Selected row in the category resource list.
    pub selected_item: usize,
    pub gate_input: String,
    pub gate_error: Option<String>,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    startup_delay: Duration,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(catalog: Catalog, session: SessionStore, startup_delay: Duration) -> Self {
        let categories = catalog
            .category_ids()
            .map(|id| (id.to_string(), category_title(id)))
            .collect();

        Self {
            catalog,
            session,
            view: ViewState::new(),
            phase: Phase::Loading { deadline: Instant::now() + startup_delay },
            categories,
            nav_idx: 0,
            selected_item: 0,
            gate_input: String::new(),
            gate_error: None,
            status_message: None,
            should_quit: false,
            startup_delay,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.advance_lifecycle();

            // Clear expired status messages (marks dirty if cleared)
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let elapsed = self.last_draw_time.elapsed();
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                self.draw(terminal)?;
            }

            let action = poll_event(Duration::from_millis(100))?;
            let visible_items = self.visible_item_count();
            self.handle_action(action, visible_items);
        }

        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let palette = Palette::for_theme(self.session.theme());

        match self.phase {
            Phase::Loading { .. } => {
                terminal
                    .draw(|frame| rendering::render_loading(frame, &palette))
                    .context("Failed to draw terminal UI")?;
            }
            Phase::Gate => {
                terminal
                    .draw(|frame| {
                        rendering::render_gate(
                            frame,
                            &palette,
                            &self.gate_input,
                            self.gate_error.as_deref(),
                        )
                    })
                    .context("Failed to draw terminal UI")?;
            }
            Phase::Fault { .. } => self.draw_fault(terminal, &palette)?,
            Phase::Browse => {
                // View composition failures drop to the fault screen instead
                // of tearing down the terminal.
                let fault = match self.view.resolve(&self.catalog) {
                    Ok(screen) => {
                        let clock = format_header_clock(&Local::now());
                        let ctx = BrowseContext {
                            username: self.session.username(),
                            clock: &clock,
                            theme: self.session.theme(),
                            query: self.view.query(),
                            screen: &screen,
                            categories: &self.categories,
                            nav_idx: self.nav_idx,
                            active_category: self.view.active_category(),
                            selected_item: self.selected_item,
                            status_message: self.status_message.as_ref(),
                            total_resources: self.catalog.total_resources(),
                        };
                        terminal
                            .draw(|frame| rendering::render_browse(frame, &palette, &ctx))
                            .context("Failed to draw terminal UI")?;
                        None
                    }
                    Err(err) => Some(format!("{err:#}")),
                };
                if let Some(detail) = fault {
                    self.on_view_fault(detail);
                    self.draw_fault(terminal, &palette)?;
                }
            }
        }

        self.needs_redraw = false;
        self.last_draw_time = Instant::now();
        Ok(())
    }

    /// Draw the fault screen. A failure here ends the run loop.
    fn draw_fault<B: Backend>(&self, terminal: &mut Terminal<B>, palette: &Palette) -> Result<()> {
        let (detail, show_detail) = match &self.phase {
            Phase::Fault { detail, show_detail } => (detail.as_str(), *show_detail),
            _ => ("", false),
        };
        terminal
            .draw(|frame| rendering::render_fault(frame, palette, detail, show_detail))
            .context("Failed to draw terminal UI")?;
        Ok(())
    }

    /// Leave the loading phase once its deadline has passed.
    fn advance_lifecycle(&mut self) {
        if let Phase::Loading { deadline } = self.phase
            && Instant::now() >= deadline
        {
            self.phase = if self.session.is_logged_in() { Phase::Browse } else { Phase::Gate };
            self.needs_redraw = true;
        }
    }

    /// Rows the selection can move over on the current screen.
    fn visible_item_count(&self) -> usize {
        match self.view.resolve(&self.catalog) {
            Ok(ResolvedView::Category(view)) => view.items.len(),
            _ => 0,
        }
    }

    fn handle_action(&mut self, action: Action, visible_items: usize) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        match self.phase {
            Phase::Loading { .. } => {}
            Phase::Gate => self.handle_gate_action(action),
            Phase::Browse => self.handle_browse_action(action, visible_items),
            Phase::Fault { .. } => self.handle_fault_action(action),
        }
    }

    fn handle_gate_action(&mut self, action: Action) {
        match action {
            Action::Input(c) => {
                if self.gate_input.chars().count() < MAX_USERNAME_LEN {
                    self.gate_input.push(c);
                }
                self.gate_error = None;
                self.needs_redraw = true;
            }
            Action::Backspace => {
                self.gate_input.pop();
                self.gate_error = None;
                self.needs_redraw = true;
            }
            Action::Submit => {
                match self.session.set_username(&self.gate_input) {
                    Ok(()) => {
                        self.gate_input.clear();
                        self.gate_error = None;
                        self.phase = Phase::Browse;
                    }
                    Err(err) => self.gate_error = Some(err.to_string()),
                }
                self.needs_redraw = true;
            }
            Action::Escape => {
                // Nothing to fall back to before login
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_browse_action(&mut self, action: Action, visible_items: usize) {
        match action {
            Action::Escape => self.escape(),
            Action::MoveUp => self.move_selection(-1, visible_items),
            Action::MoveDown => self.move_selection(1, visible_items),
            Action::Submit => self.activate_nav_selection(),
            Action::Input(c) => self.update_query(c),
            Action::Backspace => self.delete_query_char(),
            Action::ToggleTheme => {
                self.session.toggle_theme();
                self.needs_redraw = true;
            }
            Action::Logout => self.logout(),
            Action::CopyUrl => self.copy_selected_url(),
            Action::Quit | Action::None => {}
        }
    }

    fn handle_fault_action(&mut self, action: Action) {
        match action {
            Action::Input('r') => {
                // Try again with the browsing state intact
                self.phase = Phase::Browse;
                self.needs_redraw = true;
            }
            Action::Input('R') => self.reload(),
            Action::Input('d') => {
                if let Phase::Fault { show_detail, .. } = &mut self.phase {
                    *show_detail = !*show_detail;
                }
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    /// Esc peels one layer at a time: query, then category, then the app.
    fn escape(&mut self) {
        if !self.view.query().is_empty() {
            self.view.clear_query();
            self.selected_item = 0;
        } else if self.view.active_category().is_some() {
            self.view.select_category(None);
            self.nav_idx = 0;
            self.selected_item = 0;
        } else {
            self.should_quit = true;
        }
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize, visible_items: usize) {
        if self.view.active_category().is_some() {
            if visible_items == 0 {
                self.selected_item = 0;
                return;
            }
            let new_idx =
                (self.selected_item as isize + delta).clamp(0, visible_items as isize - 1);
            if new_idx as usize != self.selected_item {
                self.selected_item = new_idx as usize;
                self.needs_redraw = true;
            }
        } else {
            let rows = self.categories.len() as isize + 1;
            let new_idx = (self.nav_idx as isize + delta).clamp(0, rows - 1);
            if new_idx as usize != self.nav_idx {
                self.nav_idx = new_idx as usize;
                self.needs_redraw = true;
            }
        }
    }

    /// Open the hovered sidebar row: the dashboard or a category.
    fn activate_nav_selection(&mut self) {
        if self.nav_idx == 0 {
            self.view.select_category(None);
        } else if let Some((id, _)) = self.categories.get(self.nav_idx - 1) {
            self.view.select_category(Some(id.as_str()));
        }
        self.selected_item = 0;
        self.needs_redraw = true;
    }

    fn update_query(&mut self, c: char) {
        if self.view.query().chars().count() >= MAX_QUERY_LEN {
            return;
        }
        let mut query = self.view.query().to_string();
        query.push(c);
        self.view.set_query(query);
        self.selected_item = 0;
        self.needs_redraw = true;
    }

    fn delete_query_char(&mut self) {
        let mut query = self.view.query().to_string();
        if query.pop().is_some() {
            self.view.set_query(query);
            self.selected_item = 0;
            self.needs_redraw = true;
        }
    }

    fn logout(&mut self) {
        self.session.logout();
        self.view.reset();
        self.nav_idx = 0;
        self.selected_item = 0;
        self.gate_input.clear();
        self.gate_error = None;
        self.status_message = None;
        self.phase = Phase::Gate;
        self.needs_redraw = true;
    }

    fn copy_selected_url(&mut self) {
        if self.view.active_category().is_none() {
            self.set_status(
                "✗ Open a category to copy a resource URL",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
            return;
        }

        let url = match self.view.resolve(&self.catalog) {
            Ok(ResolvedView::Category(view)) => {
                view.items.get(self.selected_item).map(|item| item.url.clone())
            }
            _ => None,
        };

        match url {
            Some(url) => match clipboard::copy_url(&url) {
                Ok(()) => self.set_status(
                    "✓ URL copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                ),
                Err(e) => self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                ),
            },
            None => self.set_status(
                "✗ No resource selected",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    /// Full restart of the browsing state; the session survives.
    fn reload(&mut self) {
        self.view.reset();
        self.nav_idx = 0;
        self.selected_item = 0;
        self.status_message = None;
        self.phase = Phase::Loading { deadline: Instant::now() + self.startup_delay };
        self.needs_redraw = true;
    }

    fn on_view_fault(&mut self, detail: String) {
        tracing::error!("View composition failed: {detail}");
        self.status_message = None;
        self.phase = Phase::Fault { detail, show_detail: false };
        self.needs_redraw = true;
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
        }
    }
}
