use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{EditorConfig, ItemList, Labels};
use crate::ops::editor::{Applied, Editor, Intent};
use crate::ops::list_ops;

use super::input;
use super::render;
use super::text_buffer::TextBuffer;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add input
    Add,
    /// Carrying an item to a new position
    Drag,
    /// Edit dialog open
    Edit,
}

/// An item picked up in drag mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Index the item was picked up from
    pub source: usize,
    /// Index it would land on if dropped now
    pub target: usize,
}

/// Main application state
pub struct App {
    pub editor: Editor,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    /// Index of the highlighted item
    pub cursor: usize,
    /// First visible item (adjusted during render)
    pub scroll: usize,
    pub add_input: TextBuffer,
    /// Mirrors the edit session's draft while the dialog is open
    pub dialog_input: TextBuffer,
    pub drag: Option<DragState>,
}

impl App {
    pub fn new(config: EditorConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            editor: Editor::new(config),
            mode: Mode::Navigate,
            theme,
            should_quit: false,
            cursor: 0,
            scroll: 0,
            add_input: TextBuffer::new(),
            dialog_input: TextBuffer::new(),
            drag: None,
        }
    }

    pub fn labels(&self) -> &Labels {
        &self.editor.config().labels
    }

    pub fn items(&self) -> &ItemList {
        self.editor.items()
    }

    /// Items in display order: while dragging, the order the drop would produce.
    pub fn display_items(&self) -> ItemList {
        match self.drag {
            Some(drag) => list_ops::reorder(self.editor.items(), drag.source, drag.target),
            None => self.editor.items().clone(),
        }
    }

    /// Index of the highlighted row in `display_items`
    pub fn highlighted_row(&self) -> usize {
        self.drag.map_or(self.cursor, |drag| drag.target)
    }

    /// Send an intent to the editor and bring view state back in line.
    pub fn dispatch(&mut self, intent: Intent) -> Applied {
        let applied = self.editor.apply(intent);
        if self.mode == Mode::Edit && !self.editor.session().is_open() {
            self.mode = Mode::Navigate;
            self.dialog_input.clear();
        }
        self.clamp_cursor();
        applied
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.editor.items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Run the TUI application
pub fn run(config: EditorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    tracing::info!(
        preset = %app.editor.config().preset,
        items = app.items().len(),
        "starting tui"
    );

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

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(items = app.items().len(), "tui exited");
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
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
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
