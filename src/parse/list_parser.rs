use crate::model::list::{InsertAt, TaskList};
use crate::model::record::{DIVIDER_SENTINEL, Record};

/// Parse a list file from its source text.
///
/// Each line is `<text>:<flag>` where the flag is `0` or `1`. Lines missing
/// the trailing `:<flag>` pair are skipped and returned in the dropped list
/// so the caller can report them.
pub fn parse_list(source: &str) -> (TaskList, Vec<String>) {
    let mut list = TaskList::new();
    let mut dropped = Vec::new();

    for line in source.lines() {
        match parse_line(line) {
            Some(record) => list.insert(record, InsertAt::End),
            None => dropped.push(line.to_string()),
        }
    }

    (list, dropped)
}

/// Parse one `<text>:<flag>` line. The delimiter is positional: the
/// second-to-last byte must be `:`. Only a `1` flag marks a task done.
/// Text beginning with the divider sentinel becomes a `Divider`; its flag
/// is ignored.
fn parse_line(line: &str) -> Option<Record> {
    let bytes = line.as_bytes();
    if bytes.len() < 2 || bytes[bytes.len() - 2] != b':' {
        return None;
    }
    let done = bytes[bytes.len() - 1] == b'1';
    // The `:` byte is ASCII, so len-2 is a char boundary.
    let text = &line[..line.len() - 2];

    match text.strip_prefix(DIVIDER_SENTINEL) {
        Some(name) => Some(Record::Divider {
            name: name.to_string(),
        }),
        None => Some(Record::Item {
            text: text.to_string(),
            done,
        }),
    }
}
