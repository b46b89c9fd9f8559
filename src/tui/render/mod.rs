pub mod edit_popup;
pub mod list_view;
pub mod status_row;
pub mod title_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: title bar, top pad, list window, status row.
/// The three fixed rows are the reservation the viewport's room accounts
/// for; the `Min` chunk is the room itself.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(1), // top pad
            Constraint::Min(1),    // list window
            Constraint::Length(1), // bottom pad / status row
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Modal editor (rendered on top of the list)
    if app.edit.is_some() {
        edit_popup::render_edit_popup(frame, app, area);
    }
}
