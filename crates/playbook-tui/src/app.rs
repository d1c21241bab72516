use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use playbook::{
    ActiveFilter, Catalog, Clipboard, EntryId, Feedback, PageLocation, ShareMachine, SystemEntry,
    VisibleCache,
};
use ratatui::layout::{Position, Rect};

use crate::action::{Action, AppCommand};

/// Duration threshold for detecting double-clicks (in milliseconds).
const DOUBLE_CLICK_THRESHOLD_MS: u128 = 400;

/// ~3 seconds at the 250ms tick.
const STATUS_TICKS: u8 = 12;

/// Tracks clickable regions for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub struct LayoutGeometry {
    /// Inner area of the list pane (excluding borders).
    pub list_inner: Rect,
    /// Inner area of the detail pane (excluding borders).
    pub detail_inner: Rect,
    /// Filter picker overlay, if open.
    pub overlay: Option<Rect>,
}

/// UI mode the app is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
    FilterPicker,
}

/// Transient status message shown in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// Remaining ticks before the message expires.
    pub ticks_remaining: u8,
}

/// Browser state. Inputs produce commands (side effects), actions update state.
pub struct App {
    /// The full, immutable catalog.
    pub catalog: Catalog,
    /// Positions into the catalog of the entries currently shown.
    pub visible: Vec<usize>,
    /// Cursor position in `visible`.
    pub cursor: usize,
    /// Viewport scroll offset for list pane.
    pub list_scroll_offset: usize,
    /// Detail pane scroll offset.
    pub detail_scroll: u16,

    pub mode: Mode,
    pub active_filter: ActiveFilter,
    pub search_query: String,
    /// Filter tabs in display order.
    pub tabs: Vec<ActiveFilter>,
    /// Cursor position in the filter picker overlay.
    pub filter_cursor: usize,

    /// Which entry's link was copied most recently.
    pub share: ShareMachine,
    /// Transient feedback message.
    pub status_message: Option<StatusMessage>,

    /// Layout geometry for mouse hit testing.
    pub layout_geometry: LayoutGeometry,

    cache: VisibleCache,
    clipboard: Box<dyn Clipboard>,
    last_click_time: Option<Instant>,
    last_click_pos: Option<(u16, u16)>,
}

impl App {
    pub fn new(catalog: Catalog, location: PageLocation, clipboard: Box<dyn Clipboard>) -> Self {
        let mut app = Self {
            catalog,
            visible: Vec::new(),
            cursor: 0,
            list_scroll_offset: 0,
            detail_scroll: 0,
            mode: Mode::Normal,
            active_filter: ActiveFilter::All,
            search_query: String::new(),
            tabs: playbook::tabs(),
            filter_cursor: 0,
            share: ShareMachine::new(location),
            status_message: None,
            layout_geometry: LayoutGeometry::default(),
            cache: VisibleCache::new(),
            clipboard,
            last_click_time: None,
            last_click_pos: None,
        };
        app.recompute_view();
        app
    }

    /// Handle a terminal event, returning a command for the event loop.
    pub fn handle_event(&mut self, event: Event) -> AppCommand {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => AppCommand::None,
        }
    }

    /// Handle an async action (result from a background task).
    pub fn handle_action(&mut self, action: Action) -> AppCommand {
        match action {
            Action::ShareExpired(token) => {
                self.share.expire(token);
                AppCommand::None
            }
        }
    }

    /// Tick the app forward (called on interval). Used for expiring status messages.
    pub fn tick(&mut self) {
        if let Some(msg) = &mut self.status_message {
            if msg.ticks_remaining == 0 {
                self.status_message = None;
            } else {
                msg.ticks_remaining -= 1;
            }
        }
    }

    pub fn set_filter(&mut self, filter: ActiveFilter) {
        self.active_filter = filter;
        self.recompute_view();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_query = term.into();
        self.recompute_view();
    }

    /// Copy the share link for `id` and mark it as copied.
    pub fn share_entry(&mut self, id: &EntryId) -> AppCommand {
        match self.share.share(id, self.clipboard.as_mut()) {
            Ok(shared) => {
                self.set_feedback(Feedback::link_copied(id));
                AppCommand::ScheduleReset {
                    token: shared.token,
                    after: shared.reset_after,
                }
            }
            Err(err) => {
                self.set_feedback(Feedback::copy_failed(&err));
                AppCommand::None
            }
        }
    }

    /// Move the cursor to `id` if it is currently visible.
    pub fn select(&mut self, id: &EntryId) -> bool {
        let catalog = &self.catalog;
        let found = self
            .visible
            .iter()
            .position(|&idx| &catalog.entries()[idx].id == id);
        match found {
            Some(pos) => {
                self.cursor = pos;
                self.detail_scroll = 0;
                true
            }
            None => false,
        }
    }

    /// Entries currently shown, in catalog order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &SystemEntry> {
        self.visible.iter().map(|&idx| &self.catalog.entries()[idx])
    }

    pub fn selected_entry(&self) -> Option<&SystemEntry> {
        self.visible
            .get(self.cursor)
            .map(|&idx| &self.catalog.entries()[idx])
    }

    /// Index of the active filter among the tabs, if it is one of them.
    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t == &self.active_filter)
    }

    /// Record the geometry of the frame about to be drawn and settle the list
    /// scroll offset for it, so clicks map to the rows actually on screen.
    pub fn apply_layout(&mut self, geometry: LayoutGeometry) {
        let height = geometry.list_inner.height as usize;
        if height > 0 {
            self.list_scroll_offset =
                compute_scroll_offset(self.cursor, self.list_scroll_offset, height);
        }
        self.layout_geometry = geometry;
    }

    pub fn set_feedback(&mut self, feedback: Feedback) {
        self.status_message = Some(StatusMessage {
            text: feedback.message,
            is_error: feedback.level == playbook::Level::Error,
            ticks_remaining: STATUS_TICKS,
        });
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        // Ctrl+C always quits.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::FilterPicker => self.handle_filter_picker_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> AppCommand {
        match self.mode {
            Mode::Normal | Mode::Search => self.handle_normal_mouse(mouse),
            Mode::FilterPicker => self.handle_filter_picker_mouse(mouse),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor_down();
                AppCommand::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor_up();
                AppCommand::None
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_detail_down(5);
                AppCommand::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_detail_up(5);
                AppCommand::None
            }
            KeyCode::PageDown => {
                self.scroll_detail_down(5);
                AppCommand::None
            }
            KeyCode::PageUp => {
                self.scroll_detail_up(5);
                AppCommand::None
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search;
                AppCommand::None
            }
            KeyCode::Char('f') => {
                self.mode = Mode::FilterPicker;
                self.filter_cursor = self.active_tab().unwrap_or(0);
                AppCommand::None
            }
            KeyCode::Tab => {
                self.cycle_tab(true);
                AppCommand::None
            }
            KeyCode::BackTab => {
                self.cycle_tab(false);
                AppCommand::None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(tab) = self.tabs.get(idx).cloned() {
                    self.set_filter(tab);
                }
                AppCommand::None
            }
            KeyCode::Char('c') | KeyCode::Char('s') | KeyCode::Enter => self.share_selected(),
            KeyCode::Esc => {
                if !self.active_filter.is_all() || !self.search_query.is_empty() {
                    self.active_filter = ActiveFilter::All;
                    self.search_query.clear();
                    self.recompute_view();
                }
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.search_query.clear();
                self.recompute_view();
                AppCommand::None
            }
            KeyCode::Enter => {
                // Keep the current search active.
                self.mode = Mode::Normal;
                AppCommand::None
            }
            KeyCode::Down => {
                self.move_cursor_down();
                AppCommand::None
            }
            KeyCode::Up => {
                self.move_cursor_up();
                AppCommand::None
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.recompute_view();
                AppCommand::None
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.recompute_view();
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_filter_picker_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.filter_cursor + 1 < self.tabs.len() {
                    self.filter_cursor += 1;
                }
                AppCommand::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
                AppCommand::None
            }
            KeyCode::Enter => {
                self.apply_picker_selection();
                AppCommand::None
            }
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn apply_picker_selection(&mut self) {
        if let Some(tab) = self.tabs.get(self.filter_cursor).cloned() {
            self.set_filter(tab);
        }
        self.mode = Mode::Normal;
    }

    fn cycle_tab(&mut self, forward: bool) {
        let count = self.tabs.len();
        if count == 0 {
            return;
        }
        let next = match (self.active_tab(), forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, _) => 0,
        };
        let tab = self.tabs[next].clone();
        self.set_filter(tab);
    }

    fn share_selected(&mut self) -> AppCommand {
        match self.selected_entry().map(|e| e.id.clone()) {
            Some(id) => self.share_entry(&id),
            None => AppCommand::None,
        }
    }

    fn move_cursor_down(&mut self) {
        self.move_cursor_down_n(1);
    }

    fn move_cursor_up(&mut self) {
        self.move_cursor_up_n(1);
    }

    fn move_cursor_down_n(&mut self, n: usize) {
        let last = self.visible.len().saturating_sub(1);
        let next = (self.cursor + n).min(last);
        if next != self.cursor {
            self.cursor = next;
            self.detail_scroll = 0;
        }
    }

    fn move_cursor_up_n(&mut self, n: usize) {
        let next = self.cursor.saturating_sub(n);
        if next != self.cursor {
            self.cursor = next;
            self.detail_scroll = 0;
        }
    }

    fn scroll_detail_down(&mut self, n: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(n);
    }

    fn scroll_detail_up(&mut self, n: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(n);
    }

    /// Check if a click at (col, row) is a double-click based on timing and position.
    /// Updates the last click state and returns true if this is a double-click.
    fn is_double_click(&mut self, col: u16, row: u16) -> bool {
        let now = Instant::now();
        let is_double = if let (Some(last_time), Some((last_col, last_row))) =
            (self.last_click_time, self.last_click_pos)
        {
            let elapsed = now.duration_since(last_time).as_millis();
            elapsed < DOUBLE_CLICK_THRESHOLD_MS && col == last_col && row == last_row
        } else {
            false
        };

        // Reset after double-click so a triple-click is not a second double.
        if is_double {
            self.last_click_time = None;
            self.last_click_pos = None;
        } else {
            self.last_click_time = Some(now);
            self.last_click_pos = Some((col, row));
        }

        is_double
    }

    fn handle_normal_mouse(&mut self, mouse: MouseEvent) -> AppCommand {
        let pos = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let is_double = self.is_double_click(mouse.column, mouse.row);

                // Double-click on an entry shares it.
                if self.layout_geometry.list_inner.contains(pos)
                    && self.handle_list_click(mouse.row)
                    && is_double
                {
                    return self.share_selected();
                }
                AppCommand::None
            }
            MouseEventKind::ScrollDown => {
                if self.layout_geometry.list_inner.contains(pos) {
                    self.move_cursor_down_n(3);
                } else if self.layout_geometry.detail_inner.contains(pos) {
                    self.scroll_detail_down(3);
                }
                AppCommand::None
            }
            MouseEventKind::ScrollUp => {
                if self.layout_geometry.list_inner.contains(pos) {
                    self.move_cursor_up_n(3);
                } else if self.layout_geometry.detail_inner.contains(pos) {
                    self.scroll_detail_up(3);
                }
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    /// Move the cursor to the clicked row. Returns false if the row is empty.
    fn handle_list_click(&mut self, row: u16) -> bool {
        let inner = self.layout_geometry.list_inner;
        let relative_row = (row.saturating_sub(inner.y)) as usize;
        let list_index = self.list_scroll_offset + relative_row;

        if list_index >= self.visible.len() {
            return false;
        }
        if list_index != self.cursor {
            self.cursor = list_index;
            self.detail_scroll = 0;
        }
        true
    }

    fn handle_filter_picker_mouse(&mut self, mouse: MouseEvent) -> AppCommand {
        let pos = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(overlay) = self.layout_geometry.overlay {
                    if overlay.contains(pos) {
                        // Map click to option index (accounting for border).
                        let relative_row = mouse.row.saturating_sub(overlay.y + 1) as usize;
                        if relative_row < self.tabs.len() {
                            self.filter_cursor = relative_row;
                            self.apply_picker_selection();
                        }
                    } else {
                        // Click outside: close overlay.
                        self.mode = Mode::Normal;
                    }
                }
                AppCommand::None
            }
            MouseEventKind::ScrollDown => {
                if self.filter_cursor + 1 < self.tabs.len() {
                    self.filter_cursor += 1;
                }
                AppCommand::None
            }
            MouseEventKind::ScrollUp => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    /// Recompute the visible entries, keeping the cursor on the same entry
    /// when it survives the new filter.
    fn recompute_view(&mut self) {
        let previous = self.selected_entry().map(|e| e.id.clone());

        self.visible = self
            .cache
            .positions(&self.catalog, &self.active_filter, &self.search_query)
            .to_vec();
        self.list_scroll_offset = 0;

        let kept = previous.is_some_and(|id| self.select(&id));
        if !kept {
            self.cursor = 0;
            self.detail_scroll = 0;
        }
    }
}

/// Smallest change to `current_offset` that keeps `cursor` inside a
/// viewport of `visible_height` rows.
pub(crate) fn compute_scroll_offset(cursor: usize, current_offset: usize, visible_height: usize) -> usize {
    if cursor < current_offset {
        cursor
    } else if cursor >= current_offset + visible_height {
        cursor.saturating_sub(visible_height - 1)
    } else {
        current_offset
    }
}
