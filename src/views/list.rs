//! Post list view: the paginated table and the row action menu popup.

use crate::state::{App, LoadPhase, MenuState};
use crate::views::fmt;
use crate::widgets::ActionMenu;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub struct Column {
    pub title: &'static str,
    pub constraint: Constraint,
}

/// Column layout mirrors the source grid: a narrow id column, a wide title,
/// fixed-width image/view/author columns, and a flexible created-at column.
pub const COLUMNS: [Column; 6] = [
    Column {
        title: "No.",
        constraint: Constraint::Length(12),
    },
    Column {
        title: "Title",
        constraint: Constraint::Min(30),
    },
    Column {
        title: "Image",
        constraint: Constraint::Length(14),
    },
    Column {
        title: "View",
        constraint: Constraint::Length(8),
    },
    Column {
        title: "Author",
        constraint: Constraint::Length(18),
    },
    Column {
        title: "Created At",
        constraint: Constraint::Min(20),
    },
];

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match &app.list_view.phase {
        LoadPhase::Loading => render_banner(f, app, chunks[0], "Loading posts…"),
        LoadPhase::Failed(message) => render_banner(
            f,
            app,
            chunks[0],
            &format!("Failed to load: {} (press r to retry)", message),
        ),
        LoadPhase::Loaded => render_table(f, app, chunks[0]),
    }

    render_pager(f, app, chunks[1]);

    if let MenuState::Open { cursor, .. } = &app.list_view.menu {
        let menu = ActionMenu {
            title: "Actions",
            entries: &["View", "Edit", "Delete"],
            selected: *cursor as usize,
            highlight: Style::default().fg(app.theme.primary),
            border: Style::default().fg(app.theme.border),
        };
        menu.render(f, chunks[0]);
    }
}

fn render_table(f: &mut Frame<'_>, app: &App, area: Rect) {
    let view = &app.list_view;

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(c.title)))
        .style(Style::default().fg(app.theme.secondary).add_modifier(Modifier::BOLD))
        .height(1);

    let rows: Vec<Row<'_>> = view
        .visible_rows()
        .map(|(_, post)| {
            Row::new([
                Cell::from(fmt::text_cell(post.id.as_deref())),
                Cell::from(format!("◉ {}", fmt::title_cell(post.title.as_deref()))),
                Cell::from(fmt::text_cell(post.image.as_deref())),
                Cell::from(fmt::view_count_cell(post.view_count)),
                Cell::from(Line::styled(
                    fmt::author_chip(post.author.as_ref()),
                    Style::default().fg(app.theme.chip),
                )),
                Cell::from(fmt::created_at_cell(post.created_at.as_deref())),
            ])
        })
        .collect();

    let mut state = TableState::default();
    if let Some(selected) = &view.selected {
        let range = view.visible_range();
        if let Some(index) = view.keys[range].iter().position(|k| k == selected) {
            state.select(Some(index));
        }
    }

    let widths = COLUMNS.map(|c| c.constraint);
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Discover")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ")
        .column_spacing(1);

    f.render_stateful_widget(table, area, &mut state);
}

fn render_banner(f: &mut Frame<'_>, app: &App, area: Rect, message: &str) {
    let style = if matches!(app.list_view.phase, LoadPhase::Failed(_)) {
        Style::default().fg(app.theme.error)
    } else {
        Style::default().fg(app.theme.text_dim)
    };
    let banner = Paragraph::new(message.to_string())
        .style(style)
        .block(
            Block::default()
                .title("Discover")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(banner, area);
}

fn render_pager(f: &mut Frame<'_>, app: &App, area: Rect) {
    let view = &app.list_view;
    let total = view.posts.len();
    let text = format!(
        "Page {}/{} · {} per page (s to cycle) · {} items",
        view.page.page + 1,
        view.page.page_count(total),
        view.page.size.as_usize(),
        total
    );
    let pager = Paragraph::new(text).style(Style::default().fg(app.theme.text_dim));
    f.render_widget(pager, area);
}
