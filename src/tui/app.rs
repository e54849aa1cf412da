use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use crate::io::config_io::load_config;
use crate::io::workspace_io::load_workspace;
use crate::model::config::Config;
use crate::model::note::NoteFile;
use crate::model::todo::{TodoItem, TodoLists};
use crate::sidebar::{MemoryHost, NoteHost, Sidebar};

use super::input;
use super::render;
use super::theme::Theme;

/// Which sidebar section has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Tasks,
    Recent,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Files => Focus::Tasks,
            Focus::Tasks => Focus::Recent,
            Focus::Recent => Focus::Files,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Files => Focus::Recent,
            Focus::Tasks => Focus::Files,
            Focus::Recent => Focus::Tasks,
        }
    }
}

/// Current interaction mode, derived from which sidebar modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Rename,
    AddTodo,
    Unlock,
    Menu,
}

/// Main application state
pub struct App {
    pub host: MemoryHost,
    pub sidebar: Sidebar,
    pub theme: Theme,
    pub focus: Focus,
    /// Cursor into the file list
    pub files_cursor: usize,
    /// Cursor into the task list (pending first, then done)
    pub tasks_cursor: usize,
    pub recent_cursor: usize,
    /// First visible line of the note pane
    pub content_scroll: usize,
    pub show_counters: bool,
    /// One-shot message for the status row
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(host: MemoryHost, config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        let show_counters = config.sidebar.show_counters;
        let files_cursor = host
            .active_file_id()
            .and_then(|id| host.files().iter().position(|f| f.id == id))
            .unwrap_or(0);

        App {
            host,
            sidebar: Sidebar::new(config.sidebar),
            theme,
            focus: Focus::Files,
            files_cursor,
            tasks_cursor: 0,
            recent_cursor: 0,
            content_scroll: 0,
            show_counters,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.sidebar.unlock.is_some() {
            Mode::Unlock
        } else if self.sidebar.context_menu.is_some() {
            Mode::Menu
        } else if self.sidebar.rename.is_some() {
            Mode::Rename
        } else if self.sidebar.new_todo.is_some() {
            Mode::AddTodo
        } else {
            Mode::Navigate
        }
    }

    pub fn todos(&self) -> TodoLists {
        self.sidebar.todos(&self.host)
    }

    pub fn files(&self) -> Vec<&NoteFile> {
        self.host.files()
    }

    pub fn recent_files(&self) -> Vec<&NoteFile> {
        self.sidebar.recent_files(&self.host)
    }

    /// ID of the file under the file-list cursor
    pub fn cursor_file_id(&self) -> Option<String> {
        self.files().get(self.files_cursor).map(|f| f.id.clone())
    }

    pub fn cursor_recent_id(&self) -> Option<String> {
        self.recent_files()
            .get(self.recent_cursor)
            .map(|f| f.id.clone())
    }

    /// The task under the task-list cursor, freshly extracted
    pub fn cursor_todo(&self) -> Option<TodoItem> {
        self.todos().get(self.tasks_cursor).cloned()
    }

    /// Length of the list that currently has focus
    pub fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Files => self.files().len(),
            Focus::Tasks => self.todos().len(),
            Focus::Recent => self.recent_files().len(),
        }
    }

    pub fn focused_cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Files => &mut self.files_cursor,
            Focus::Tasks => &mut self.tasks_cursor,
            Focus::Recent => &mut self.recent_cursor,
        }
    }

    /// Keep every cursor inside its list after the lists change
    pub fn clamp_cursors(&mut self) {
        let files = self.files().len();
        let tasks = self.todos().len();
        let recent = self.recent_files().len();
        self.files_cursor = self.files_cursor.min(files.saturating_sub(1));
        self.tasks_cursor = self.tasks_cursor.min(tasks.saturating_sub(1));
        self.recent_cursor = self.recent_cursor.min(recent.saturating_sub(1));
    }

    /// Note IDs in display order
    pub fn file_ids(&self) -> Vec<String> {
        self.files().iter().map(|f| f.id.clone()).collect()
    }

    /// Put the file cursor back on `id` after the host reordered its notes.
    /// A note that no longer exists leaves the cursor where it is.
    pub fn anchor_files_cursor(&mut self, id: Option<&str>) {
        if let Some(pos) = id.and_then(|id| self.files().iter().position(|f| f.id == id)) {
            self.files_cursor = pos;
        }
    }

    /// Move the file cursor onto the active note
    pub fn follow_active_file(&mut self) {
        let active = self.host.active_file_id().map(str::to_string);
        if let Some(pos) = active.and_then(|id| self.files().iter().position(|f| f.id == id)) {
            self.files_cursor = pos;
        }
        self.tasks_cursor = 0;
        self.content_scroll = 0;
    }

    pub fn active_file(&self) -> Option<&NoteFile> {
        let id = self.host.active_file_id()?;
        self.host.find_file(id)
    }
}

/// Run the TUI application
pub fn run(
    notes_dir: Option<&Path>,
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    let log_dir = crate::logging::log_dir();
    let log_dir = if std::fs::create_dir_all(&log_dir).is_ok() {
        log_dir
    } else {
        std::env::temp_dir()
    };
    let _log_guard = crate::logging::init_file(&log_dir, verbose);

    let cwd = std::env::current_dir()?;
    let dir = notes_dir.unwrap_or(&cwd);
    let host = load_workspace(dir)?;
    info!(notes = host.len(), "starting tui");

    let mut app = App::new(host, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);
    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
