use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod widgets;

use crate::app::{App, Focus, InputMode, Page, StatusLevel};
use crate::domain::assets::{SortKey, Status};
use crate::domain::metrics::{consumption_series, Metric, Tone};
use crate::modules::assets::{DetailOverlay, OverlayControl};
use widgets::sparkline::sparkline_text;

/// Column widths of the Assets table, matching [`SortKey::ALL`].
const COLUMN_WIDTHS: [usize; 5] = [9, 24, 10, 13, 17];

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let areas = layout::areas(size);
    let collapsed = layout::sidebar_collapsed(size);

    draw_header(f, areas.header, app);
    if !collapsed {
        draw_sidebar_nav(f, areas.sidebar_nav, app);
        draw_sidebar_callout(f, areas.sidebar_callout);
    }
    match app.current_page {
        Page::Dashboard => draw_dashboard(f, areas.content, app),
        Page::Assets => draw_assets(f, areas.content, app),
    }
    draw_status_line(f, areas.status_line, app);
    draw_input_line(f, areas.input_line, app);

    if app.drawer_open && collapsed {
        draw_drawer(f, size, app);
    }
    if let Some(overlay) = app.assets.overlay.clone() {
        draw_detail_overlay(f, size, &overlay);
    }
    if app.help_open {
        draw_help_popup(f, size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Gridwatch",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("B2B Energy Portal", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("Page", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.current_page.title())),
    ]);
    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let focus = match app.focus {
        Focus::Sidebar => "Sidebar",
        Focus::Main => "Main",
    };
    let mut right_spans = vec![
        Span::styled("Focus ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{focus}  ")),
    ];
    if app.busy() {
        right_spans.push(Span::styled(
            "● busy",
            Style::default().fg(Color::Yellow),
        ));
    }
    let right = Paragraph::new(Line::from(right_spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_sidebar_nav(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| {
            let is_active = *page == app.current_page;
            let mut spans = vec![
                Span::styled(
                    format!("{} ", page.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(page.title()),
            ];
            if is_active {
                spans.push(Span::raw(" *"));
            }
            let style = if is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Navigation")
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("-> ");

    let mut state = ListState::default();
    state.select(
        Page::ALL
            .iter()
            .position(|page| *page == app.current_page),
    );
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_sidebar_callout(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Concept portal —"),
        Line::from("all data is mock."),
        Line::from(""),
        Line::from("? keys · q quit"),
    ];
    let callout = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("About"))
        .wrap(Wrap { trim: true });
    f.render_widget(callout, area);
}

fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let metrics = app.dashboard.metrics();
    let selected = app.dashboard.selected_card();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let cells = [top[0], top[1], middle[0], middle[1], rows[2]];
    for (idx, metric) in metrics.iter().enumerate() {
        if let Some(cell) = cells.get(idx) {
            draw_metric_card(f, *cell, metric, idx == selected);
        }
    }
}

fn draw_metric_card(f: &mut Frame, area: Rect, metric: &Metric, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(metric.title)
        .border_style(border_style);

    let mut lines = vec![
        Line::from(Span::styled(
            metric.value,
            Style::default()
                .fg(tone_color(metric.tone))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            metric.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("state: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                metric.tone.title(),
                Style::default().fg(tone_color(metric.tone)),
            ),
        ]),
    ];
    if metric.title == "Energy Consumption" {
        let series = consumption_series();
        lines.push(Line::from(Span::styled(
            sparkline_text(&series, area.width.saturating_sub(2) as usize),
            Style::default().fg(Color::Cyan),
        )));
    }

    let card = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn draw_assets(f: &mut Frame, area: Rect, app: &App) {
    let view = app.assets.derived();
    let border_style = if app.focus == Focus::Main {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title = format!(
        "Assets — {} · page {}/{}",
        if view.total_count == 1 {
            "1 result".to_string()
        } else {
            format!("{} results", view.total_count)
        },
        view.page,
        view.total_pages,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_assets_controls(f, chunks[0], app);
    draw_assets_header(f, chunks[1], app);
    draw_assets_rows(f, chunks[2], app);
}

fn draw_assets_controls(f: &mut Frame, area: Rect, app: &App) {
    let query = &app.assets.query;
    let search = if query.query.is_empty() {
        "—".to_string()
    } else {
        query.query.clone()
    };
    let line = Line::from(vec![
        Span::styled("Search ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{search}  ")),
        Span::styled("Status ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", query.status_filter.title())),
        Span::styled("Rows ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", query.rows_per_page)),
        Span::styled("Sort ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "{} {}",
            query.sort_key.title(),
            query.sort_dir.marker(),
        )),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_assets_header(f: &mut Frame, area: Rect, app: &App) {
    let query = &app.assets.query;
    let mut spans = Vec::new();
    for (idx, key) in SortKey::ALL.iter().enumerate() {
        let mut label = key.title().to_string();
        // The sorted column carries its direction marker; other columns
        // carry none, so direction is never conveyed by color alone.
        if *key == query.sort_key {
            label.push(' ');
            label.push_str(query.sort_dir.marker());
        }
        let style = if idx == app.assets.active_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if *key == query.sort_key {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(pad(&label, COLUMN_WIDTHS[idx]), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_assets_rows(f: &mut Frame, area: Rect, app: &App) {
    let view = app.assets.derived();

    if app.assets.is_loading() {
        let count = view.rows.len().max(1);
        let items: Vec<ListItem> = (0..count)
            .map(|_| {
                let spans: Vec<Span> = COLUMN_WIDTHS
                    .iter()
                    .map(|width| {
                        Span::styled(
                            pad(&"░".repeat(width.saturating_sub(2)), *width),
                            Style::default().fg(Color::DarkGray),
                        )
                    })
                    .collect();
                ListItem::new(Line::from(spans))
            })
            .collect();
        let list = List::new(items);
        f.render_widget(list, area);
        return;
    }

    if view.total_count == 0 {
        let empty = Paragraph::new(Text::from(vec![
            Line::from("No assets match the current filters."),
            Line::from(Span::styled(
                "Press c to clear filters.",
                Style::default().fg(Color::DarkGray),
            )),
        ]));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|asset| {
            let spans = vec![
                Span::styled(
                    pad(&asset.id, COLUMN_WIDTHS[0]),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(pad(&asset.name, COLUMN_WIDTHS[1])),
                Span::raw(pad(&asset.site, COLUMN_WIDTHS[2])),
                Span::styled(
                    pad(asset.status.title(), COLUMN_WIDTHS[3]),
                    Style::default().fg(status_color(asset.status)),
                ),
                Span::styled(
                    pad(&asset.updated_at, COLUMN_WIDTHS[4]),
                    Style::default().fg(Color::Gray),
                ),
            ];
            ListItem::new(Line::from(spans))
        })
        .collect();

    let highlight_style = if app.focus == Focus::Main {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .highlight_style(highlight_style)
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    if !view.rows.is_empty() {
        state.select(Some(app.assets.cursor.min(view.rows.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if app.busy() {
        spans.push(Span::styled("● loading  ", Style::default().fg(Color::Yellow)));
    }
    match app.status_text() {
        Some((text, level)) => {
            spans.push(Span::styled(
                text.to_string(),
                Style::default().fg(level_color(level)),
            ));
        }
        None => {
            spans.push(Span::styled(
                "Press ? for keys",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_input_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::Cyan)),
            Span::raw(app.assets.query.query.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
            Span::styled(
                "  Esc clears · Enter keeps",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Normal => {
            let hint = match app.current_page {
                Page::Dashboard => "j/k cards · Enter open · 2 assets",
                Page::Assets => "/ search · f status · s sort · n/p page · Enter details",
            };
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Popup area of the detail overlay, also used for backdrop hit-testing.
pub fn overlay_area(size: Rect) -> Rect {
    centered_rect(56, 60, size)
}

fn draw_detail_overlay(f: &mut Frame, size: Rect, overlay: &DetailOverlay) {
    let area = overlay_area(size);
    f.render_widget(Clear, area);

    let asset = &overlay.asset;
    let field = |name: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{name:<13}"), Style::default().fg(Color::DarkGray)),
            Span::raw(value.to_string()),
        ])
    };

    let mut lines = vec![
        field("ID", &asset.id),
        field("Name", &asset.name),
        field("Site", &asset.site),
        Line::from(vec![
            Span::styled(format!("{:<13}", "Status"), Style::default().fg(Color::DarkGray)),
            Span::styled(
                asset.status.title(),
                Style::default().fg(status_color(asset.status)),
            ),
        ]),
        field("Last update", &asset.updated_at),
        Line::from(""),
    ];

    let mut controls = Vec::new();
    for control in OverlayControl::ALL {
        let style = if control == overlay.focused {
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        controls.push(Span::styled(format!("[ {} ]", control.title()), style));
        controls.push(Span::raw("  "));
    }
    lines.push(Line::from(controls));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc close · Tab cycle · Enter activate",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Asset {}", asset.id))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(popup, area);
}

fn draw_drawer(f: &mut Frame, size: Rect, app: &App) {
    let area = layout::drawer_area(size);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Navigation")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| {
            let marker = if *page == app.current_page { " *" } else { "" };
            ListItem::new(format!("{} {}{}", page.shortcut(), page.title(), marker))
        })
        .collect();
    let mut state = ListState::default();
    state.select(
        Page::ALL
            .iter()
            .position(|page| *page == app.current_page),
    );
    f.render_stateful_widget(
        List::new(items).highlight_symbol("-> "),
        chunks[0],
        &mut state,
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "Esc closes",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[1],
    );
}

fn draw_help_popup(f: &mut Frame, size: Rect) {
    let area = centered_rect(64, 70, size);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  Tab        Cycle sidebar/main focus"),
        Line::from("  1 / 2      Dashboard / Assets"),
        Line::from("  m          Open navigation drawer (narrow)"),
        Line::from("  j / k      Move selection"),
        Line::from("  g / G      First / last row"),
        Line::from("  Esc        Back / close"),
        Line::from(""),
        Line::from("Assets table"),
        Line::from("  /          Search (Esc clears, Enter keeps)"),
        Line::from("  f          Cycle status filter"),
        Line::from("  h / l      Move active column"),
        Line::from("  s          Toggle sort on active column"),
        Line::from("  n / p      Next / previous page"),
        Line::from("  r          Cycle rows per page (10/25/50)"),
        Line::from("  c          Clear filters"),
        Line::from("  Enter      Open asset details"),
        Line::from("  y          Copy asset id"),
        Line::from("  e / E      Export CSV / JSON"),
        Line::from(""),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(popup, area);
}

fn pad(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Operational => Color::Green,
        Status::Maintenance => Color::Yellow,
        Status::Alert => Color::Red,
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Ok => Color::Green,
        Tone::Attention => Color::Yellow,
        Tone::Critical => Color::Red,
    }
}

fn level_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::White,
        StatusLevel::Warn => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
