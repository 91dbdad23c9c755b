//! Central application state: pages, focus, input mode, status line.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{Action, Context, NavigateTarget, NotifyLevel};
use crate::domain::assets::StatusFilter;
use crate::modules::assets::AssetsView;
use crate::modules::dashboard::Dashboard;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Assets,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::Assets];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Assets => "Assets",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Page::Dashboard => '1',
            Page::Assets => '2',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// The search field owns key input; Escape clears it to empty.
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Effective startup settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rows_per_page: usize,
    /// `None` disables the simulated loading delay.
    pub latency: Option<Duration>,
    pub export_dir: Option<PathBuf>,
    pub query: String,
    pub status_filter: StatusFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            rows_per_page: config.rows_per_page(),
            latency: config.latency_ms().map(Duration::from_millis),
            export_dir: config.export_dir(),
            query: String::new(),
            status_filter: StatusFilter::All,
        }
    }
}

#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    pub current_page: Page,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub dashboard: Dashboard,
    pub assets: AssetsView,
    /// Narrow-terminal navigation drawer; also dismissed with Escape.
    pub drawer_open: bool,
    pub help_open: bool,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let mut assets = AssetsView::new(
            settings.latency,
            settings.rows_per_page,
            settings.export_dir.clone(),
        );
        if !settings.query.is_empty() || settings.status_filter != StatusFilter::All {
            assets.seed_filters(&settings.query, settings.status_filter);
        }
        Self {
            ctx: Context::new(),
            current_page: Page::Dashboard,
            focus: Focus::Main,
            input_mode: InputMode::Normal,
            dashboard: Dashboard::new(),
            assets,
            drawer_open: false,
            help_open: false,
            status: None,
            should_quit: false,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
        // Result counts are announced once the loading window settles.
        if let Some(count) = self.assets.on_tick(now) {
            let text = if count == 1 {
                "1 result".to_string()
            } else {
                format!("{count} results")
            };
            self.set_status(text, StatusLevel::Info);
        }
    }

    pub fn navigate(&mut self, target: NavigateTarget) {
        let next = match target {
            NavigateTarget::Dashboard => Page::Dashboard,
            NavigateTarget::Assets => Page::Assets,
        };
        // Leaving the Assets view cancels its pending loading window.
        if self.current_page == Page::Assets && next != Page::Assets {
            self.assets.cancel_loading();
        }
        self.current_page = next;
        self.focus = Focus::Main;
        self.drawer_open = false;
    }

    pub fn cycle_page(&mut self, forward: bool) {
        let idx = Page::ALL
            .iter()
            .position(|page| *page == self.current_page)
            .unwrap_or(0);
        let len = Page::ALL.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        let target = match Page::ALL[next] {
            Page::Dashboard => NavigateTarget::Dashboard,
            Page::Assets => NavigateTarget::Assets,
        };
        let focus = self.focus;
        self.navigate(target);
        self.focus = focus;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Main,
            Focus::Main => Focus::Sidebar,
        };
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.focus = Focus::Main;
    }

    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn busy(&self) -> bool {
        self.current_page == Page::Assets && self.assets.is_loading()
    }

    /// Apply a module action. Returns text that should also reach the
    /// system clipboard, which the binary owns.
    pub fn apply_action(&mut self, action: Action) -> Option<String> {
        match action {
            Action::None => None,
            Action::Navigate(target) => {
                self.navigate(target);
                None
            }
            Action::Copy(text) => {
                self.ctx.set_clipboard(text.clone());
                self.set_status(format!("Copied: {text}"), StatusLevel::Info);
                Some(text)
            }
            Action::Notify(text, level) => {
                let level = match level {
                    NotifyLevel::Info => StatusLevel::Info,
                    NotifyLevel::Warn => StatusLevel::Warn,
                    NotifyLevel::Error => StatusLevel::Error,
                };
                self.set_status(text, level);
                None
            }
            Action::CloseOverlay => {
                self.assets.close_overlay();
                None
            }
            Action::Quit => {
                self.should_quit = true;
                None
            }
        }
    }
}
