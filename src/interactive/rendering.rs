//! TUI rendering with ratatui
//!
//! Draws the letter grid as bordered tiles colored by state, alongside the
//! score, the word being traced and the found words.

use super::app::{App, MessageStyle};
use crate::core::{Position, Tile, TileState, display_letter};
use crate::output::formatters::words_by_length;
use crate::solver::WordSolver;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Tile width in terminal cells, borders included
pub const TILE_WIDTH: u16 = 5;
/// Tile height in terminal cells, borders included
pub const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui<S: WordSolver>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

/// Area occupied by a `size` x `size` board centered in `area`
#[must_use]
pub fn board_rect(area: Rect, size: usize) -> Rect {
    let side = u16::try_from(size).unwrap_or(u16::MAX);
    let width = side.saturating_mul(TILE_WIDTH).min(area.width);
    let height = side.saturating_mul(TILE_HEIGHT).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Tile under the terminal cell (`x`, `y`), if any
#[must_use]
pub fn tile_at_cell(board: Rect, size: usize, x: u16, y: u16) -> Option<Position> {
    if x < board.x || y < board.y || x >= board.right() || y >= board.bottom() {
        return None;
    }
    let col = usize::from((x - board.x) / TILE_WIDTH);
    let row = usize::from((y - board.y) / TILE_HEIGHT);
    (row < size && col < size).then(|| Position::new(row, col))
}

const fn state_color(state: TileState) -> Color {
    match state {
        TileState::Up => Color::White,
        TileState::Down => Color::Yellow,
        TileState::Good => Color::Green,
        TileState::Bad => Color::Red,
        TileState::Dupe => Color::Blue,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD FINDER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: WordSolver>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Grid ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let size = app.grid.size();
    let board = board_rect(inner, size);
    app.board_area.set(board);

    for tile in app.grid.board().tiles() {
        let cell = tile_rect(board, tile.position());
        if cell.width < TILE_WIDTH || cell.height < TILE_HEIGHT {
            continue;
        }
        render_tile(f, tile, tile.position() == app.cursor, cell);
    }
}

fn tile_rect(board: Rect, pos: Position) -> Rect {
    let col = u16::try_from(pos.col).unwrap_or(u16::MAX);
    let row = u16::try_from(pos.row).unwrap_or(u16::MAX);
    let x = board.x.saturating_add(col.saturating_mul(TILE_WIDTH));
    let y = board.y.saturating_add(row.saturating_mul(TILE_HEIGHT));
    Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT).intersection(board)
}

fn render_tile(f: &mut Frame, tile: &Tile, is_cursor: bool, area: Rect) {
    let color = state_color(tile.state());
    let mut text_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if tile.state() != TileState::Up {
        text_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
    }

    let border_type = if is_cursor {
        BorderType::Double
    } else {
        BorderType::Rounded
    };
    let border_color = if is_cursor { Color::Cyan } else { color };

    let face = Paragraph::new(Span::styled(display_letter(tile.letter()), text_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .style(Style::default().fg(border_color)),
        );
    f.render_widget(face, area);
}

fn render_info_panel<S: WordSolver>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(3), // Current word
            Constraint::Min(5),    // Words
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_current_word(f, app, chunks[1]);
    render_words(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_score<S: WordSolver>(f: &mut Frame, app: &App<S>, area: Rect) {
    let points = app.grid.points();
    let possible = app.grid.possible_points();
    let percent = if possible > 0 {
        u16::try_from((points * 100 / possible).clamp(0, 100)).unwrap_or(100)
    } else {
        0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{points}/{possible} points"));

    f.render_widget(gauge, area);
}

fn render_current_word<S: WordSolver>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (word, color) = match (&app.last_submission, app.grid.is_word_submitted()) {
        (Some(submission), true) => (
            submission.word.to_uppercase(),
            state_color(submission.verdict.tile_state()),
        ),
        _ => (app.grid.path_word().to_uppercase(), Color::Yellow),
    };

    let paragraph = Paragraph::new(Span::styled(
        word,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_words<S: WordSolver>(f: &mut Frame, app: &App<S>, area: Rect) {
    let found = app.grid.found_words();
    let (title, words) = if app.show_words {
        (
            format!(" All Words ({}/{}) ", found.len(), app.grid.possible_words().len()),
            app.grid.possible_words(),
        )
    } else {
        (format!(" Found Words ({}) ", found.len()), found)
    };

    let lines: Vec<Line> = words_by_length(words)
        .into_iter()
        .map(|(len, group)| {
            let mut spans = vec![Span::styled(
                format!("{len:>2}: "),
                Style::default().fg(Color::Cyan),
            )];
            for word in group {
                let style = if found.contains(word) {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(word.to_string(), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S: WordSolver>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: WordSolver>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
        ])
        .split(area);

    let size = app.grid.size();
    let size_text = Paragraph::new(format!("Grid: {size}x{size}")).alignment(Alignment::Center);
    f.render_widget(size_text, chunks[0]);

    let words_text = format!(
        "Words: {} / {}",
        app.grid.found_words().len(),
        app.grid.possible_words().len()
    );
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help_text = "q: Quit | n: New | w: Words | Space: Select | Enter: Submit | Esc: Clear";
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
