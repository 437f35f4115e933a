//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: each line traces one path as tile labels
//! (`a1 b2 c3`), which is selected tile by tile and then submitted.

use crate::core::{LetterGenerator, LetterGrid, Position, Selection, Submission};
use crate::output::{print_found_words, print_grid, print_possible_words, print_submission};
use crate::solver::WordSolver;
use rand::Rng;
use std::io::{self, Write};

/// Outcome of tracing one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOutcome {
    /// Tiles whose selection had no effect (not adjacent or reused)
    pub ignored: Vec<Position>,
    pub submission: Submission,
}

/// Parse a path such as `a1 b2 c3` or `a1,b2,c3`
///
/// Every label must name a tile inside a `size` x `size` grid.
///
/// # Errors
///
/// Returns a message naming the first unusable label.
pub fn parse_path(input: &str, size: usize) -> Result<Vec<Position>, String> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err("Enter a path like 'a1 b2 c3'".to_string());
    }

    tokens
        .into_iter()
        .map(|token| match Position::from_label(token) {
            Some(pos) if pos.row < size && pos.col < size => Ok(pos),
            Some(_) => Err(format!("Tile '{token}' is outside the grid")),
            None => Err(format!("Invalid tile '{token}'")),
        })
        .collect()
}

/// Select each position in order, then submit the path
///
/// # Errors
///
/// Returns an error if a position lies outside the grid.
pub fn play_path<S: WordSolver>(
    grid: &mut LetterGrid<S>,
    positions: &[Position],
) -> Result<PathOutcome, crate::core::GridError> {
    let mut ignored = Vec::new();
    for &pos in positions {
        if grid.select(pos)? == Selection::Ignored {
            ignored.push(pos);
        }
    }

    Ok(PathOutcome {
        ignored,
        submission: grid.submit(),
    })
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or a new grid
/// cannot be generated.
pub fn run_simple<S: WordSolver, R: Rng>(
    grid: &mut LetterGrid<S>,
    generator: &mut LetterGenerator<R>,
    size: usize,
) -> anyhow::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Finder - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Trace a word by listing tiles, column letter then row number.");
    println!("Tiles must touch, including diagonally, and can't be reused.\n");
    println!("Commands: 'new' for a new grid, 'words' for found words,");
    println!("          'reveal' to list every word, 'quit' to exit\n");

    grid.load_random(size, generator)?;

    loop {
        print_grid(grid.board());
        println!(
            "Points: {} / {} possible | Words found: {}\n",
            grid.points(),
            grid.possible_points(),
            grid.found_words().len()
        );

        let input = get_user_input("Path")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Final score: {} points\n", grid.points());
                return Ok(());
            }
            "new" | "n" => {
                grid.load_random(size, generator)?;
                println!("\n🔄 New grid!\n");
            }
            "words" | "w" => print_found_words(grid.found_words()),
            "reveal" => print_possible_words(grid.possible_words(), grid.found_words()),
            _ => match parse_path(&input, grid.size()) {
                Ok(positions) => {
                    let outcome = play_path(grid, &positions)?;
                    for pos in &outcome.ignored {
                        println!("  skipped {} (not adjacent or already used)", pos.label());
                    }
                    print_submission(&outcome.submission);
                }
                Err(message) => println!("❌ {message}\n"),
            },
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
