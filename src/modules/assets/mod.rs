//! Assets page: the interactive table and its detail overlay.
//!
//! `AssetsView` owns the query state, the table cursor, the active header
//! column, the loading gate, and the overlay. Key events translate into
//! query transitions; everything derived (rows, counts, pages) is recomputed
//! from the store on demand.

pub mod loading;
pub mod overlay;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel, Selected};
use crate::domain::assets::{
    derive, filter_sort, mock_assets, Asset, DerivedView, QueryState, SortKey, StatusFilter,
};
use crate::modules::export::{export_assets, ExportFormat};

pub use loading::LoadingGate;
pub use overlay::{DetailOverlay, OverlayControl};

#[derive(Debug)]
pub struct AssetsView {
    store: Vec<Asset>,
    pub query: QueryState,
    /// Row cursor within the current page.
    pub cursor: usize,
    /// Header cursor: index into [`SortKey::ALL`].
    pub active_column: usize,
    pub overlay: Option<DetailOverlay>,
    loading: LoadingGate,
    pending_announce: bool,
    export_dir: Option<PathBuf>,
}

impl AssetsView {
    pub fn new(
        latency: Option<Duration>,
        rows_per_page: usize,
        export_dir: Option<PathBuf>,
    ) -> Self {
        Self::with_store(mock_assets(), latency, rows_per_page, export_dir)
    }

    /// Test seam: same view over an arbitrary store.
    pub fn with_store(
        store: Vec<Asset>,
        latency: Option<Duration>,
        rows_per_page: usize,
        export_dir: Option<PathBuf>,
    ) -> Self {
        let mut query = QueryState::default();
        query.set_rows_per_page(rows_per_page);
        Self {
            store,
            query,
            cursor: 0,
            active_column: 0,
            overlay: None,
            loading: LoadingGate::new(latency),
            pending_announce: false,
            export_dir,
        }
    }

    pub fn store(&self) -> &[Asset] {
        &self.store
    }

    pub fn derived(&self) -> DerivedView<'_> {
        derive(&self.store, &self.query)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Seed initial filters (CLI/config) without arming the loading gate.
    pub fn seed_filters(&mut self, query_text: &str, filter: StatusFilter) {
        self.query.set_query(query_text);
        self.query.set_status_filter(filter);
        let total_pages = self.derived().total_pages;
        self.query.clamp_page(total_pages);
    }

    /// Run one query transition: mutate, re-clamp the page, clamp the
    /// cursor, arm the loading gate, and queue a result-count announcement.
    fn apply<F: FnOnce(&mut QueryState)>(&mut self, now: Instant, transition: F) {
        transition(&mut self.query);
        let (page, page_len) = {
            let view = derive(&self.store, &self.query);
            (view.page, view.rows.len())
        };
        self.query.page = page;
        self.cursor = if page_len == 0 {
            0
        } else {
            self.cursor.min(page_len - 1)
        };
        self.loading.arm(now);
        self.pending_announce = true;
    }

    pub fn push_query_char(&mut self, now: Instant, ch: char) {
        let mut text = self.query.query.clone();
        text.push(ch);
        self.apply(now, |q| q.set_query(text));
    }

    pub fn pop_query_char(&mut self, now: Instant) {
        let mut text = self.query.query.clone();
        text.pop();
        self.apply(now, |q| q.set_query(text));
    }

    pub fn clear_query(&mut self, now: Instant) {
        self.apply(now, |q| q.set_query(String::new()));
    }

    pub fn set_status_filter(&mut self, now: Instant, filter: StatusFilter) {
        self.apply(now, |q| q.set_status_filter(filter));
    }

    pub fn cycle_status_filter(&mut self, now: Instant) {
        let next = self.query.status_filter.next();
        self.set_status_filter(now, next);
    }

    pub fn toggle_sort(&mut self, now: Instant, key: SortKey) {
        self.apply(now, |q| q.toggle_sort(key));
    }

    pub fn toggle_sort_active(&mut self, now: Instant) {
        let key = self.active_sort_key();
        self.toggle_sort(now, key);
    }

    pub fn active_sort_key(&self) -> SortKey {
        SortKey::ALL[self.active_column]
    }

    /// Move the header cursor, wrapping at both ends. Not a query
    /// transition: nothing changes until the column is toggled.
    pub fn move_column(&mut self, delta: isize) {
        let len = SortKey::ALL.len() as isize;
        let idx = self.active_column as isize + delta;
        self.active_column = idx.rem_euclid(len) as usize;
    }

    pub fn set_page(&mut self, now: Instant, n: usize) {
        let total_pages = self.derived().total_pages;
        self.apply(now, |q| q.set_page(n, total_pages));
    }

    pub fn next_page(&mut self, now: Instant) {
        let page = self.query.page;
        self.set_page(now, page.saturating_add(1));
    }

    pub fn prev_page(&mut self, now: Instant) {
        let page = self.query.page;
        self.set_page(now, page.saturating_sub(1));
    }

    pub fn cycle_rows_per_page(&mut self, now: Instant) {
        self.apply(now, |q| q.cycle_rows_per_page());
    }

    pub fn set_rows_per_page(&mut self, now: Instant, n: usize) {
        self.apply(now, |q| q.set_rows_per_page(n));
    }

    pub fn clear_filters(&mut self, now: Instant) {
        self.apply(now, |q| q.clear_filters());
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.derived().rows.len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_bottom(&mut self) {
        self.cursor = self.derived().rows.len().saturating_sub(1);
    }

    /// Asset under the cursor on the current page.
    pub fn selected_asset(&self) -> Option<&Asset> {
        let view = self.derived();
        view.rows.get(self.cursor).copied()
    }

    /// Open the detail overlay for the cursor row. The cursor position is
    /// registered as the return-focus target.
    pub fn open_overlay(&mut self) -> bool {
        let snapshot = {
            let view = self.derived();
            view.rows.get(self.cursor).map(|asset| (*asset).clone())
        };
        match snapshot {
            Some(asset) => {
                self.overlay = Some(DetailOverlay::open(asset, self.cursor));
                true
            }
            None => false,
        }
    }

    /// Close the overlay and restore the cursor to the opener row, or the
    /// first row when the opener left the derived view.
    pub fn close_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            let len = self.derived().rows.len();
            self.cursor = overlay.return_row(len);
        }
    }

    /// Keys while the overlay is open: it traps everything except its own
    /// dismiss and focus-cycling contract.
    pub fn handle_overlay_key(&mut self, key: KeyEvent) -> Action {
        if self.overlay.is_none() {
            return Action::None;
        }
        match key.code {
            KeyCode::Esc => {
                self.close_overlay();
                Action::None
            }
            KeyCode::Tab => {
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.focus_next();
                }
                Action::None
            }
            KeyCode::BackTab => {
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.focus_prev();
                }
                Action::None
            }
            KeyCode::Enter => match self.overlay.as_ref().map(|o| o.focused) {
                Some(OverlayControl::Close) => {
                    self.close_overlay();
                    Action::None
                }
                Some(OverlayControl::CopyId) => self
                    .overlay
                    .as_ref()
                    .map(|o| Action::Copy(o.asset.id.clone()))
                    .unwrap_or(Action::None),
                None => Action::None,
            },
            KeyCode::Char('y') => self
                .overlay
                .as_ref()
                .map(|o| Action::Copy(o.asset.id.clone()))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    /// Poll the loading gate. Returns the result count when a transition
    /// finished settling and should be announced in the status line.
    pub fn on_tick(&mut self, now: Instant) -> Option<usize> {
        let finished = self.loading.poll(now);
        if self.pending_announce && (finished || !self.loading.is_loading()) {
            self.pending_announce = false;
            return Some(self.derived().total_count);
        }
        None
    }

    /// Cancel any pending loading window, e.g. when the page is left.
    pub fn cancel_loading(&mut self) {
        self.loading.cancel();
        self.pending_announce = false;
    }

    fn export(&self, format: ExportFormat) -> Action {
        let rows = filter_sort(&self.store, &self.query);
        match export_assets(&rows, format, self.export_dir.as_deref()) {
            Ok(path) => Action::Notify(
                format!("Exported {} rows to {}", rows.len(), path.display()),
                NotifyLevel::Info,
            ),
            Err(err) => Action::Notify(format!("Export failed: {err}"), NotifyLevel::Error),
        }
    }

    fn sync_selected(&self, ctx: &mut Context) {
        ctx.selected = match self.selected_asset() {
            Some(asset) => Selected::Asset(asset.id.clone()),
            None => Selected::None,
        };
    }
}

impl Module for AssetsView {
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action {
        let now = Instant::now();
        let action = match key.code {
            KeyCode::Char('f') => {
                self.cycle_status_filter(now);
                Action::None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_column(-1);
                Action::None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_column(1);
                Action::None
            }
            KeyCode::Char('s') => {
                self.toggle_sort_active(now);
                Action::None
            }
            KeyCode::Char('n') | KeyCode::PageDown => {
                self.next_page(now);
                Action::None
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                self.prev_page(now);
                Action::None
            }
            KeyCode::Char('r') => {
                self.cycle_rows_per_page(now);
                Action::None
            }
            KeyCode::Char('c') => {
                self.clear_filters(now);
                Action::Notify("Filters cleared".to_string(), NotifyLevel::Info)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.cursor_down();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor_up();
                Action::None
            }
            KeyCode::Char('g') => {
                self.cursor_top();
                Action::None
            }
            KeyCode::Char('G') => {
                self.cursor_bottom();
                Action::None
            }
            KeyCode::Enter => {
                if self.open_overlay() {
                    Action::None
                } else {
                    Action::Notify("No asset selected".to_string(), NotifyLevel::Warn)
                }
            }
            KeyCode::Char('y') => match self.selected_asset() {
                Some(asset) => Action::Copy(asset.id.clone()),
                None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
            },
            KeyCode::Char('e') => self.export(ExportFormat::Csv),
            KeyCode::Char('E') => self.export(ExportFormat::Json),
            _ => Action::None,
        };
        self.sync_selected(ctx);
        action
    }
}
