use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Reverse-video title bar: list name, new-list marker, record count,
/// done/total, percent complete.
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = title_text(app);
    let style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::REVERSED);
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn title_text(app: &App) -> String {
    let total = app.list.count_tasks();
    let done = app.list.count_done();
    // Dividers stay out of the denominator as well as the numerator.
    let percent = if total > 0 { 100 * done / total } else { 0 };

    let mut text = format!("{} ", app.list_name);
    if app.is_new {
        text.push_str("(new) ");
    }
    text.push_str(&format!(
        "-- {} tasks {}/{} -> {}% ",
        app.list.len(),
        done,
        total,
        percent
    ));
    text
}
