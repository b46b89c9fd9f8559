use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::record::Record;
use crate::tui::app::App;
use crate::tui::viewport;

/// Left margin before the number column.
const LEFT_PAD: &str = "  ";
/// Separator between the ordinal and the mark.
const NUM_STOP: &str = ".  ";
/// Gap between the mark and the task text.
const TASK_PAD: &str = "  ";

const MARK_TODO: &str = "[ ]";
const MARK_DONE: &str = "[x]";

/// Render the visible window of the list.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let room = area.height as usize;
    let visible = app.viewport.window(app.list.len(), app.cursor, room);
    let width = viewport::num_width(app.list.len());

    let mut lines: Vec<Line> = Vec::with_capacity(room);
    for at in visible {
        lines.push(render_row(app, at, width, area.width as usize));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn render_row(app: &App, at: usize, num_width: usize, row_width: usize) -> Line<'static> {
    let record = &app.list.records()[at];
    let is_cursor = at == app.cursor;
    let cursor_style = Style::default()
        .fg(app.theme.cursor)
        .add_modifier(Modifier::REVERSED);

    match record {
        Record::Divider { name } => {
            // ` [name]:` stretched across the whole row.
            let text = format!(" [{}]:", name);
            let fill = row_width.saturating_sub(text.chars().count());
            let style = if is_cursor {
                cursor_style
            } else {
                Style::default().fg(app.theme.divider)
            };
            Line::from(Span::styled(format!("{}{}", text, " ".repeat(fill)), style))
        }
        Record::Item { text, done } => {
            let ordinal = app.list.display_index(at) + 1;
            let base = if is_cursor {
                cursor_style
            } else {
                Style::default().fg(app.theme.text)
            };
            let mark_style = if *done {
                Style::default().fg(app.theme.mark_done)
            } else {
                Style::default().fg(app.theme.mark_todo)
            };
            let mark = if *done { MARK_DONE } else { MARK_TODO };

            // The margin and number stay dim even on the cursor row; the
            // highlight starts at the mark and runs to the right edge.
            let number = format!("{:>w$}{}", ordinal, NUM_STOP, w = num_width);
            let mut spans = vec![
                Span::styled(LEFT_PAD, Style::default().fg(app.theme.dim)),
                Span::styled(number, Style::default().fg(app.theme.dim)),
                Span::styled(mark, mark_style),
                Span::styled(TASK_PAD.to_string(), base),
                Span::styled(text.clone(), base),
            ];
            if is_cursor {
                let used = LEFT_PAD.len()
                    + num_width
                    + NUM_STOP.len()
                    + mark.len()
                    + TASK_PAD.len()
                    + text.chars().count();
                let fill = row_width.saturating_sub(used);
                spans.push(Span::styled(" ".repeat(fill), base));
            }
            Line::from(spans)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::list::{InsertAt, TaskList};
    use crate::tui::test_helpers::test_app;

    fn row_text(app: &App, at: usize) -> String {
        render_row(app, at, viewport::num_width(app.list.len()), 40)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn numbering_skips_dividers() {
        let mut list = TaskList::new();
        list.insert(Record::item("alpha".to_string()), InsertAt::End);
        list.insert(
            Record::Divider {
                name: "work".to_string(),
            },
            InsertAt::End,
        );
        list.insert(Record::item("beta".to_string()), InsertAt::End);
        let app = test_app(list);

        assert!(row_text(&app, 0).starts_with("  1.  [ ]  alpha"));
        assert!(row_text(&app, 2).starts_with("  2.  [ ]  beta"));
    }

    #[test]
    fn done_items_get_the_done_mark() {
        let mut list = TaskList::new();
        list.insert(
            Record::Item {
                text: "shipped".to_string(),
                done: true,
            },
            InsertAt::End,
        );
        let app = test_app(list);
        assert!(row_text(&app, 0).contains("[x]"));
    }

    #[test]
    fn divider_rows_fill_the_width() {
        let mut list = TaskList::new();
        list.insert(
            Record::Divider {
                name: "errands".to_string(),
            },
            InsertAt::End,
        );
        let app = test_app(list);

        let text = row_text(&app, 0);
        assert!(text.starts_with(" [errands]:"));
        assert_eq!(text.chars().count(), 40);
    }

    #[test]
    fn ordinals_right_align_to_the_widest_index() {
        let mut list = TaskList::new();
        for i in 0..12 {
            list.insert(Record::item(format!("task {}", i)), InsertAt::End);
        }
        let app = test_app(list);

        assert!(row_text(&app, 0).starts_with("   1.  "));
        assert!(row_text(&app, 11).starts_with("  12.  "));
    }
}
