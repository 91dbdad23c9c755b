use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use gridwatch::app::{App, Focus, InputMode, Page, Settings, StatusLevel};
use gridwatch::config;
use gridwatch::core::{Action, Module, NavigateTarget};
use gridwatch::domain::assets::{query::normalize_rows_per_page, StatusFilter};
use gridwatch::ui;

#[derive(Debug, Parser)]
#[command(
    name = "gridwatch",
    version,
    about = "Gridwatch: a terminal B2B energy portal for asset monitoring"
)]
struct Args {
    /// Config file path (default: XDG config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial page size (10, 25, or 50)
    #[arg(long)]
    rows_per_page: Option<usize>,

    /// Initial status filter (operational | maintenance | alert)
    #[arg(long)]
    status: Option<String>,

    /// Initial search text
    #[arg(long)]
    query: Option<String>,

    /// Disable the simulated loading delay
    #[arg(long)]
    no_latency: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load(args.config.clone());
    let settings = resolve_settings(&args, &config);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(settings);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn resolve_settings(args: &Args, config: &config::Config) -> Settings {
    let mut settings = Settings::from_config(config);
    if let Some(n) = args.rows_per_page {
        settings.rows_per_page = normalize_rows_per_page(n);
    }
    if args.no_latency {
        settings.latency = None;
    }
    if let Some(query) = args.query.as_deref() {
        settings.query = query.to_string();
    }
    if let Some(status) = args.status.as_deref() {
        // Lenient on purpose: unknown values mean "All"
        settings.status_filter = StatusFilter::parse_lenient(status);
    }
    settings
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(width, _) => {
                    // Widening back past the breakpoint dismisses the drawer
                    if width >= ui::layout::DRAWER_BREAKPOINT {
                        app.drawer_open = false;
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    if app.drawer_open {
        handle_drawer_key(app, key);
        return;
    }

    // An open overlay traps all key input until it is dismissed.
    if app.current_page == Page::Assets && app.assets.overlay.is_some() {
        let action = app.assets.handle_overlay_key(key);
        dispatch_action(app, action);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
    }
}

fn handle_drawer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => app.drawer_open = false,
        KeyCode::Char('j') | KeyCode::Down => app.cycle_page(true),
        KeyCode::Char('k') | KeyCode::Up => app.cycle_page(false),
        KeyCode::Char('1') => app.navigate(NavigateTarget::Dashboard),
        KeyCode::Char('2') => app.navigate(NavigateTarget::Assets),
        KeyCode::Enter => app.drawer_open = false,
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        // Escape empties the search field, then leaves input mode
        KeyCode::Esc => {
            app.assets.clear_query(now);
            app.exit_search();
        }
        KeyCode::Enter => app.exit_search(),
        KeyCode::Backspace => app.assets.pop_query_char(now),
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.assets.push_query_char(now, ch);
        }
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char('m') => {
            let collapsed = terminal_rect()
                .map(ui::layout::sidebar_collapsed)
                .unwrap_or(false);
            if collapsed {
                app.toggle_drawer();
            } else {
                app.set_status("Sidebar is already visible", StatusLevel::Info);
            }
        }
        KeyCode::Char('/') => {
            app.navigate(NavigateTarget::Assets);
            app.enter_search();
        }
        KeyCode::Char('1') => app.navigate(NavigateTarget::Dashboard),
        KeyCode::Char('2') => app.navigate(NavigateTarget::Assets),
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Esc => {
            if app.current_page == Page::Assets {
                app.navigate(NavigateTarget::Dashboard);
            }
        }
        _ => match app.focus {
            Focus::Sidebar => handle_sidebar_key(app, key),
            Focus::Main => {
                let action = match app.current_page {
                    Page::Dashboard => app.dashboard.handle_key(key, &mut app.ctx),
                    Page::Assets => app.assets.handle_key(key, &mut app.ctx),
                };
                dispatch_action(app, action);
            }
        },
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.cycle_page(true),
        KeyCode::Char('k') | KeyCode::Up => app.cycle_page(false),
        KeyCode::Enter => app.focus = Focus::Main,
        _ => {}
    }
}

fn dispatch_action(app: &mut App, action: Action) {
    if let Some(text) = app.apply_action(action) {
        copy_to_clipboard(app, &text);
    }
}

fn copy_to_clipboard(app: &mut App, text: &str) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(text).is_err() {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let Some(size) = terminal_rect() else {
        return;
    };
    let col = mouse.column;
    let row = mouse.row;

    if app.help_open {
        return;
    }

    // Backdrop click closes the overlay; clicks inside it do nothing.
    if app.current_page == Page::Assets && app.assets.overlay.is_some() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if !rect_contains(ui::overlay_area(size), col, row) {
                app.assets.close_overlay();
            }
        }
        return;
    }

    if app.drawer_open && ui::layout::sidebar_collapsed(size) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if !rect_contains(ui::layout::drawer_area(size), col, row) {
                app.drawer_open = false;
            }
        }
        return;
    }

    let areas = ui::layout::areas(size);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, areas, col, row, true),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, col, row, false),
        _ => {}
    }
}

fn handle_click(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16) {
    if rect_contains(areas.sidebar_nav, col, row) {
        let inner = rect_inner(areas.sidebar_nav);
        if !rect_contains(inner, col, row) {
            return;
        }
        let idx = (row - inner.y) as usize;
        if let Some(page) = Page::ALL.get(idx) {
            let target = match page {
                Page::Dashboard => NavigateTarget::Dashboard,
                Page::Assets => NavigateTarget::Assets,
            };
            app.navigate(target);
            app.focus = Focus::Sidebar;
        }
        return;
    }

    if rect_contains(areas.content, col, row) {
        app.focus = Focus::Main;
        if app.current_page == Page::Assets {
            // Rows start under the border, the controls line, and the header
            let inner = rect_inner(areas.content);
            let rows_top = inner.y.saturating_add(2);
            if row >= rows_top {
                let idx = (row - rows_top) as usize;
                let len = app.assets.derived().rows.len();
                if idx < len {
                    app.assets.cursor = idx;
                }
            }
        }
    }
}

fn handle_scroll(app: &mut App, areas: ui::layout::UiAreas, col: u16, row: u16, up: bool) {
    if rect_contains(areas.sidebar_nav, col, row) {
        app.focus = Focus::Sidebar;
        app.cycle_page(!up);
        return;
    }
    if rect_contains(areas.content, col, row) && app.current_page == Page::Assets {
        app.focus = Focus::Main;
        if up {
            app.assets.cursor_up();
        } else {
            app.assets.cursor_down();
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}
