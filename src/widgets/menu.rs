//! Popup action menu anchored over the table.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct ActionMenu<'a> {
    pub title: &'a str,
    pub entries: &'a [&'a str],
    pub selected: usize,
    pub highlight: Style,
    pub border: Style,
}

impl ActionMenu<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let popup = popup_rect(area, 20, self.entries.len() as u16 + 2);
        f.render_widget(Clear, popup);

        let items: Vec<ListItem<'_>> = self.entries.iter().map(|e| ListItem::new(*e)).collect();
        let mut state = ListState::default();
        state.select(Some(self.selected.min(self.entries.len().saturating_sub(1))));

        let list = List::new(items)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border),
            )
            .highlight_style(self.highlight)
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, popup, &mut state);
    }
}

/// A small rect centered in `area`, clamped to its bounds.
fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_rect_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_rect(area, 20, 5);
        assert_eq!(popup, Rect::new(40, 17, 20, 5));

        let tiny = Rect::new(0, 0, 10, 3);
        let clamped = popup_rect(tiny, 20, 5);
        assert!(clamped.width <= tiny.width);
        assert!(clamped.height <= tiny.height);
    }
}
