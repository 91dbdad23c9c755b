use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the sidebar collapses and `m` opens it as a drawer.
pub const DRAWER_BREAKPOINT: u16 = 90;

pub const SIDEBAR_WIDTH: u16 = 26;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub sidebar_nav: Rect,
    pub sidebar_callout: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub input_line: Rect,
}

pub fn sidebar_collapsed(size: Rect) -> bool {
    size.width < DRAWER_BREAKPOINT
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let sidebar_width = if sidebar_collapsed(size) {
        0
    } else {
        SIDEBAR_WIDTH
    };
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(vertical[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(main_chunks[0]);

    UiAreas {
        size,
        header: vertical[0],
        sidebar: main_chunks[0],
        sidebar_nav: sidebar_chunks[0],
        sidebar_callout: sidebar_chunks[1],
        content: main_chunks[1],
        status_line: vertical[2],
        input_line: vertical[3],
    }
}

/// Area of the navigation drawer popup on narrow terminals.
pub fn drawer_area(size: Rect) -> Rect {
    Rect {
        x: size.x,
        y: size.y,
        width: SIDEBAR_WIDTH.min(size.width),
        height: size.height,
    }
}
