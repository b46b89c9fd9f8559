use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::list_io;
use crate::model::config::Config;
use crate::model::list::TaskList;

use super::input;
use super::render;
use super::theme::Theme;
use super::viewport::Viewport;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
}

/// What a finished edit session writes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A record to be inserted after the cursor on confirm. An empty
    /// submission inserts nothing.
    New,
    /// The record at this index; its label is replaced on confirm.
    Existing(usize),
}

/// Modal editor state. The buffer is a working copy; the record under edit
/// is untouched until confirm, so cancelling just drops the buffer.
#[derive(Debug, Clone)]
pub struct EditState {
    pub buffer: String,
    /// Byte offset of the insertion point in `buffer`.
    pub cursor: usize,
    pub target: EditTarget,
}

/// Main application state
pub struct App {
    pub list: TaskList,
    pub list_name: String,
    pub data_dir: PathBuf,
    pub list_file: PathBuf,
    pub config: Config,
    pub theme: Theme,
    /// True until the first successful save of a list whose file was missing
    /// at startup.
    pub is_new: bool,
    /// Currently selected row.
    pub cursor: usize,
    pub viewport: Viewport,
    pub mode: Mode,
    pub edit: Option<EditState>,
    /// Transient message for the status row, cleared on the next keypress.
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,
}

impl App {
    /// Pull the cursor back in range after the list shrank.
    pub fn clamp_cursor(&mut self) {
        if self.cursor >= self.list.len() {
            self.cursor = self.list.len().saturating_sub(1);
        }
    }

    /// Persist the list after a mutating command when autosave is on.
    pub fn autosave(&mut self) {
        if self.config.autosave {
            self.save();
        }
    }

    /// Persist the list. A failed save is reported in the status row; the
    /// in-memory list stays authoritative until the next attempt.
    pub fn save(&mut self) {
        match list_io::save_list(&self.data_dir, &self.list_file, &self.list) {
            Ok(()) => self.is_new = false,
            Err(e) => {
                self.status_message = Some(format!("save failed: {}", e));
                self.status_is_error = true;
            }
        }
    }
}

/// Run the TUI for the named list.
pub fn run(list_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = list_io::ensure_data_dir()?;
    let config = load_config(&data_dir);
    let list_file = list_io::list_path(&data_dir, list_name);
    let loaded = list_io::load_list(&data_dir, &list_file);

    let status_message = if loaded.dropped.is_empty() {
        None
    } else {
        Some(format!(
            "skipped {} malformed line(s), kept in {}",
            loaded.dropped.len(),
            crate::io::recovery::recovery_log_path(&data_dir).display()
        ))
    };

    let theme = Theme::from_config(&config.ui);
    let mut app = App {
        list: loaded.list,
        list_name: list_name.to_string(),
        data_dir,
        list_file,
        config,
        theme,
        is_new: loaded.is_new,
        cursor: 0,
        viewport: Viewport::default(),
        mode: Mode::Navigate,
        edit: None,
        status_is_error: !loaded.dropped.is_empty(),
        status_message,
        should_quit: false,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // One final save on the way out, regardless of earlier failures.
    app.save();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
