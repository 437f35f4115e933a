//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::{TILE_HEIGHT, TILE_WIDTH, board_rect, tile_at_cell};
