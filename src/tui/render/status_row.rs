use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Bottom row: blank padding unless a transient message is showing.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref message) = app.status_message else {
        return;
    };

    let style = if app.status_is_error {
        Style::default()
            .fg(app.theme.warning)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim)
    };
    frame.render_widget(Paragraph::new(format!(" {}", message)).style(style), area);
}
