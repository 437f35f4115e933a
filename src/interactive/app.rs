//! TUI application state and logic

use super::rendering::tile_at_cell;
use crate::core::{
    GridError, LetterGenerator, LetterGrid, Position, Selection, Submission, Verdict, word_points,
};
use crate::solver::WordSolver;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::cell::Cell;
use std::io;
use tracing::{debug, info};

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: WordSolver> {
    pub grid: LetterGrid<S>,
    generator: LetterGenerator,
    pub size: usize,
    /// Keyboard cursor
    pub cursor: Position,
    pub messages: Vec<Message>,
    pub last_submission: Option<Submission>,
    /// Reveal every word on the grid
    pub show_words: bool,
    pub should_quit: bool,
    /// Screen area of the board, recorded on each draw for mouse hit-testing
    pub board_area: Cell<Rect>,
    /// Tile under the pointer while the left button is held
    drag_tile: Option<Position>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: WordSolver> App<S> {
    /// Create the app and load its first random grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if `size` is zero.
    pub fn new(
        grid: LetterGrid<S>,
        generator: LetterGenerator,
        size: usize,
    ) -> Result<Self, GridError> {
        let mut app = Self {
            grid,
            generator,
            size,
            cursor: Position::new(0, 0),
            messages: Vec::new(),
            last_submission: None,
            show_words: false,
            should_quit: false,
            board_area: Cell::new(Rect::default()),
            drag_tile: None,
        };
        app.grid.load_random(size, &mut app.generator)?;
        app.add_message(
            "Drag across touching tiles to spell a word, release to submit.",
            MessageStyle::Info,
        );
        app.add_message(
            "Or move with the arrows, Space to select, Enter to submit.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn new_game(&mut self) {
        match self.grid.load_random(self.size, &mut self.generator) {
            Ok(()) => {
                self.cursor = Position::new(0, 0);
                self.last_submission = None;
                self.show_words = false;
                self.drag_tile = None;
                self.messages.clear();
                info!(possible_words = self.grid.possible_words().len(), "new grid");
                self.add_message("New grid! Find as many words as you can.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Move the cursor, staying inside the grid
    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        let last = self.grid.size().saturating_sub(1);
        let row = self.cursor.row.saturating_add_signed(rows).min(last);
        let col = self.cursor.col.saturating_add_signed(cols).min(last);
        self.cursor = Position::new(row, col);
    }

    pub fn select_cursor(&mut self) {
        self.select_at(self.cursor);
    }

    /// Select the tile at `pos`, reporting an out-of-range position
    pub fn select_at(&mut self, pos: Position) {
        match self.grid.select(pos) {
            Ok(Selection::Ignored) => debug!(%pos, "selection ignored"),
            Ok(_) => self.cursor = pos,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn submit(&mut self) {
        if self.grid.path_tiles().next().is_none() || self.grid.is_word_submitted() {
            self.add_message("Select some tiles first.", MessageStyle::Error);
            return;
        }

        let submission = self.grid.submit();
        let word = submission.word.to_uppercase();
        match submission.verdict {
            Verdict::New => self.add_message(
                &format!("{word} +{}", word_points(&submission.word)),
                MessageStyle::Success,
            ),
            Verdict::Duplicate => {
                self.add_message(&format!("{word} was already found"), MessageStyle::Info);
            }
            Verdict::Invalid => {
                self.add_message(&format!("{word} is not a word"), MessageStyle::Error);
            }
        }
        self.last_submission = Some(submission);
    }

    pub fn clear_path(&mut self) {
        self.grid.deselect_path();
        self.drag_tile = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('w') => self.show_words = !self.show_words,
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Char(' ') => self.select_cursor(),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.clear_path(),
            _ => {}
        }
    }

    /// Press selects, dragging into a new tile selects it, release submits
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hit = tile_at_cell(self.board_area.get(), self.grid.size(), mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pos) = hit {
                    self.drag_tile = Some(pos);
                    self.select_at(pos);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(pos) = hit
                    && self.drag_tile.is_some()
                    && self.drag_tile != Some(pos)
                {
                    self.drag_tile = Some(pos);
                    self.select_at(pos);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_tile.take().is_some() {
                    self.submit();
                }
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSolver>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSolver>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit {
            info!(points = app.grid.points(), "quit");
            break;
        }
    }

    Ok(())
}
