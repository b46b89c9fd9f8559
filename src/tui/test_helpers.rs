use std::env;

use crate::model::config::Config;
use crate::model::list::TaskList;
use crate::tui::app::{App, Mode};
use crate::tui::theme::Theme;
use crate::tui::viewport::Viewport;

/// Build an `App` around an in-memory list, with autosave off so input
/// handlers never touch the filesystem.
pub fn test_app(list: TaskList) -> App {
    let data_dir = env::temp_dir();
    let list_file = data_dir.join("tick-test.todo");
    App {
        list,
        list_name: "test".to_string(),
        data_dir,
        list_file,
        config: Config {
            autosave: false,
            ..Config::default()
        },
        theme: Theme::default(),
        is_new: false,
        cursor: 0,
        viewport: Viewport::default(),
        mode: Mode::Navigate,
        edit: None,
        status_message: None,
        status_is_error: false,
        should_quit: false,
    }
}
