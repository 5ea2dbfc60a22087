//! View rendering dispatch.

pub mod detail;
pub mod fmt;
pub mod list;

use crate::nav::View;
use crate::notifications::{NotificationAction, NotificationLevel};
use crate::state::App;
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::PostList => list::render(f, app, layout[1]),
        View::PostDetail => detail::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let title = format!("discover-tui | {}", app.active_view.title());
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let help = match app.active_view {
        View::PostList => {
            if app.list_view.menu.is_open() {
                "j/k move • Enter confirm • v view • e edit • d delete • Esc close"
            } else {
                "j/k move • h/l page • s page size • Enter actions • r refresh • q quit"
            }
        }
        View::PostDetail => "Esc back • q quit",
    };

    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let suffix = match note.action {
            Some(NotificationAction::Retry) => " (r to retry)",
            Some(NotificationAction::Dismiss) | None => "",
        };
        (
            format!("{}: {}{}", label, note.message, suffix),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };

    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
