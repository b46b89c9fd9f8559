use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, EditState, EditTarget, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Any keypress clears the previous transient message.
    app.status_message = None;
    app.status_is_error = false;

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }

        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.list.len() {
                app.cursor += 1;
            }
        }

        KeyCode::Char('k') | KeyCode::Up => {
            if app.cursor != 0 {
                app.cursor -= 1;
            }
        }

        // Move the current record down one row, cursor following.
        KeyCode::Char('J') => {
            if app.cursor + 1 < app.list.len() {
                app.list.swap_up(app.cursor + 1);
                app.cursor += 1;
                app.autosave();
            }
        }

        // Move the current record up one row, cursor following.
        KeyCode::Char('K') => {
            if app.cursor != 0 {
                app.list.swap_up(app.cursor);
                app.cursor -= 1;
                app.autosave();
            }
        }

        KeyCode::Char('R') => {
            if !app.list.is_empty() {
                app.list.remove(app.cursor);
                app.clamp_cursor();
                app.autosave();
            }
        }

        KeyCode::Char('E') => {
            if let Some(record) = app.list.get(app.cursor) {
                let buffer = record.label().to_string();
                let cursor = buffer.len();
                app.edit = Some(EditState {
                    buffer,
                    cursor,
                    target: EditTarget::Existing(app.cursor),
                });
                app.mode = Mode::Edit;
            }
        }

        KeyCode::Enter => {
            if let Some(record) = app.list.get_mut(app.cursor)
                && !record.is_divider()
            {
                record.toggle_done();
                app.autosave();
            }
        }

        KeyCode::Char(' ') => {
            app.edit = Some(EditState {
                buffer: String::new(),
                cursor: 0,
                target: EditTarget::New,
            });
            app.mode = Mode::Edit;
        }

        _ => {}
    }
}
