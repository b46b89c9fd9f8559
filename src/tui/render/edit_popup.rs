use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Centered single-line editor over the list: half the screen wide, sitting
/// in the upper quarter, with the terminal cursor at the insertion point.
pub fn render_edit_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref edit) = app.edit else {
        return;
    };

    if area.width < 3 || area.height < 3 {
        return;
    }
    let width = (area.width / 2).max(20).min(area.width);
    let height = 3;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 4;
    let popup = Rect::new(x, y, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("[edit task]")
        .border_style(
            Style::default()
                .fg(app.theme.popup_border)
                .add_modifier(Modifier::REVERSED),
        );
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Keep the insertion point visible when the text outgrows the box.
    let cursor_col = edit.buffer[..edit.cursor].chars().count();
    let avail = inner.width.saturating_sub(1) as usize;
    let skip = cursor_col.saturating_sub(avail);
    let text: String = edit.buffer.chars().skip(skip).collect();

    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.theme.text)),
        inner,
    );
    frame.set_cursor_position((inner.x + (cursor_col - skip) as u16, inner.y));
}
