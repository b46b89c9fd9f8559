use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::list::InsertAt;
use crate::model::record::Record;
use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(edit) = app.edit.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Enter => {
            if let Some(finished) = app.edit.take() {
                confirm_edit(app, finished.buffer, finished.target);
            }
            app.mode = Mode::Navigate;
        }

        // Cancel: drop the working copy. The record itself was never
        // touched, so the pre-edit text survives byte for byte.
        KeyCode::Esc => {
            app.edit = None;
            app.mode = Mode::Navigate;
        }

        KeyCode::Backspace => {
            if let Some(start) = prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.buffer.replace_range(start..edit.cursor, "");
                edit.cursor = start;
            }
        }

        KeyCode::Left => {
            if let Some(start) = prev_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = start;
            }
        }

        KeyCode::Right => {
            if let Some(end) = next_grapheme_boundary(&edit.buffer, edit.cursor) {
                edit.cursor = end;
            }
        }

        KeyCode::Home => edit.cursor = 0,
        KeyCode::End => edit.cursor = edit.buffer.len(),

        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                edit.buffer.insert(edit.cursor, c);
                edit.cursor += c.len_utf8();
            }
        }

        _ => {}
    }
}

/// Apply a finished edit session to the list.
fn confirm_edit(app: &mut App, buffer: String, target: EditTarget) {
    match target {
        EditTarget::New => {
            // An empty submission inserts nothing.
            if buffer.is_empty() {
                return;
            }
            let at = if app.list.is_empty() {
                InsertAt::Index(0)
            } else {
                InsertAt::Index(app.cursor + 1)
            };
            app.list.insert(Record::item(buffer), at);
            // Follow the new record; when the list was empty the cursor is
            // already on it.
            if app.list.len() > 1 {
                app.cursor += 1;
            }
            app.autosave();
        }
        EditTarget::Existing(at) => {
            if let Some(record) = app.list.get_mut(at) {
                record.set_label(buffer);
                app.autosave();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::list::TaskList;
    use crate::tui::app::EditState;
    use crate::tui::test_helpers::test_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_edit(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn start_edit(app: &mut App, buffer: &str, target: EditTarget) {
        app.edit = Some(EditState {
            buffer: buffer.to_string(),
            cursor: buffer.len(),
            target,
        });
        app.mode = Mode::Edit;
    }

    #[test]
    fn new_item_lands_after_the_cursor() {
        let mut list = TaskList::new();
        list.insert(Record::item("a".to_string()), InsertAt::End);
        list.insert(Record::item("b".to_string()), InsertAt::End);
        let mut app = test_app(list);

        start_edit(&mut app, "", EditTarget::New);
        type_str(&mut app, "between");
        press(&mut app, KeyCode::Enter);

        let labels: Vec<&str> = app.list.records().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["a", "between", "b"]);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn new_item_on_an_empty_list_lands_at_zero() {
        let mut app = test_app(TaskList::new());
        start_edit(&mut app, "", EditTarget::New);
        type_str(&mut app, "first");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn empty_submission_inserts_nothing() {
        let mut app = test_app(TaskList::new());
        start_edit(&mut app, "", EditTarget::New);
        press(&mut app, KeyCode::Enter);

        assert!(app.list.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn cancel_restores_the_original_exactly() {
        let mut list = TaskList::new();
        list.insert(Record::item("précis".to_string()), InsertAt::End);
        let mut app = test_app(list);

        start_edit(&mut app, "précis", EditTarget::Existing(0));
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.list.get(0).unwrap().label(), "précis");
        assert!(app.edit.is_none());
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn confirm_replaces_the_label() {
        let mut list = TaskList::new();
        list.insert(Record::item("old".to_string()), InsertAt::End);
        let mut app = test_app(list);

        start_edit(&mut app, "old", EditTarget::Existing(0));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "new");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.list.get(0).unwrap().label(), "new");
    }

    #[test]
    fn backspace_removes_whole_graphemes() {
        let mut app = test_app(TaskList::new());
        start_edit(&mut app, "", EditTarget::New);
        type_str(&mut app, "ab");
        press(&mut app, KeyCode::Char('é'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.edit.as_ref().unwrap().buffer, "ab");
        // Backspace at the start is a no-op.
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.edit.as_ref().unwrap().buffer, "ab");
    }

    #[test]
    fn arrows_move_the_insertion_point() {
        let mut app = test_app(TaskList::new());
        start_edit(&mut app, "ac", EditTarget::New);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.edit.as_ref().unwrap().buffer, "abc");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.edit.as_ref().unwrap().buffer, "abcd");
    }

    #[test]
    fn editing_a_divider_renames_it() {
        let mut list = TaskList::new();
        list.insert(
            Record::Divider {
                name: "today".to_string(),
            },
            InsertAt::End,
        );
        let mut app = test_app(list);

        start_edit(&mut app, "today", EditTarget::Existing(0));
        type_str(&mut app, "!");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.list.get(0),
            Some(&Record::Divider {
                name: "today!".to_string()
            })
        );
    }
}
