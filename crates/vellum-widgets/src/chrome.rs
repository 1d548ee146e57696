//! Chrome drawn around scene boxes.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

/// Outline for the selected box, titled with `label`.
///
/// Cyan while the box is being edited, yellow when it is only selected.
pub fn outline_block(label: &str, editing: bool) -> Block<'_> {
    let color = if editing { Color::Cyan } else { Color::Yellow };
    Block::new()
        .borders(Borders::ALL)
        .title(label)
        .border_style(Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::Widget;

    #[test]
    fn outline_color_follows_edit_state() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        outline_block("#1", false).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(0, 0)].fg, Color::Yellow);
        assert_eq!(buf[(1, 0)].symbol(), "#");

        let mut buf = Buffer::empty(area);
        outline_block("", true).render(area, &mut buf);
        assert_eq!(buf[(5, 2)].fg, Color::Cyan);
    }
}
