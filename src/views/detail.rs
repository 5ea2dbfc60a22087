//! Post detail view, the navigation target of the row menu's view action.

use crate::state::App;
use crate::views::fmt;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let post = app
        .detail_row
        .as_ref()
        .and_then(|key| app.list_view.row_by_key(key));

    let Some(post) = post else {
        let empty = Paragraph::new("Post no longer available (Esc to go back)")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Post Detail").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    };

    let fields = vec![
        ("Id", fmt::text_cell(post.id.as_deref())),
        ("Title", fmt::text_cell(post.title.as_deref())),
        ("Image", fmt::text_cell(post.image.as_deref())),
        ("Views", fmt::view_count_cell(post.view_count)),
        ("Author", fmt::author_chip(post.author.as_ref())),
        ("Created", fmt::created_at_cell(post.created_at.as_deref())),
    ];

    let detail = DetailPanel {
        title: "Post Detail (Esc to go back)",
        fields,
        style: Style::default().fg(app.theme.secondary),
    };
    detail.render(f, area);
}
