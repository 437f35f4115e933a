//! Display functions for command results

use super::formatters::{
    column_header, create_progress_bar, tile_cell, verdict_label, words_by_length,
};
use crate::commands::{GenerateResult, POINTS_BUCKET, SolveResult, StatsResult};
use crate::core::{Board, Submission, TileState, Verdict, word_points};
use colored::{ColoredString, Colorize};
use rustc_hash::FxHashSet;

fn colored_cell(text: &str, state: TileState) -> ColoredString {
    match state {
        TileState::Up => text.white(),
        TileState::Down => text.black().on_yellow(),
        TileState::Good => text.black().on_green(),
        TileState::Bad => text.white().on_red(),
        TileState::Dupe => text.white().on_blue(),
    }
}

/// Print a grid with column letters and row numbers, tiles colored by state
pub fn print_grid(board: &Board) {
    let size = board.size();
    println!("\n{}", column_header(size).bright_black());
    for row in 0..size {
        print!("{}", format!("{:>2}", row + 1).bright_black());
        for tile in &board.tiles()[row * size..(row + 1) * size] {
            print!("{}", colored_cell(&tile_cell(tile), tile.state()).bold());
        }
        println!();
    }
    println!();
}

/// Print the outcome of a submitted path
pub fn print_submission(submission: &Submission) {
    if submission.word.is_empty() {
        println!("{}\n", "Nothing selected".bright_black());
        return;
    }

    let word = submission.word.to_uppercase();
    let label = verdict_label(submission.verdict);
    match submission.verdict {
        Verdict::New => println!(
            "{}\n",
            format!("✅ {word}: {label} (+{})", word_points(&submission.word))
                .green()
                .bold()
        ),
        Verdict::Duplicate => println!("{}\n", format!("🔁 {word}: {label}").blue()),
        Verdict::Invalid => println!("{}\n", format!("❌ {word}: {label}").red()),
    }
}

fn print_word_groups<'a, I>(words: I)
where
    I: IntoIterator<Item = &'a String>,
{
    for (len, group) in words_by_length(words) {
        println!("   {}: {}", format!("{len:>2}").bright_cyan(), group.join(" "));
    }
}

/// Print the words found so far
pub fn print_found_words(found: &FxHashSet<String>) {
    if found.is_empty() {
        println!("{}\n", "No words found yet".bright_black());
        return;
    }
    println!("\n📖 {} ({}):", "Found words".bright_cyan().bold(), found.len());
    print_word_groups(found);
    println!();
}

/// Print every word on the grid, marking the ones already found
pub fn print_possible_words(possible: &FxHashSet<String>, found: &FxHashSet<String>) {
    println!(
        "\n🔍 {} ({} found of {}):",
        "All words".bright_cyan().bold(),
        found.len(),
        possible.len()
    );
    let missed: Vec<String> = possible.difference(found).cloned().collect();
    if !found.is_empty() {
        println!("  {}", "found".green());
        print_word_groups(found);
    }
    if !missed.is_empty() {
        println!("  {}", "missed".yellow());
        print_word_groups(&missed);
    }
    println!();
}

/// Print a generated grid, and its words when requested
pub fn print_generate_result(result: &GenerateResult, show_words: bool) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "GENERATED GRID".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    print_grid(&result.board);
    println!(
        "   Letters: {} regular, {} vowels, {} hard",
        result.mix.regular, result.mix.vowels, result.mix.hard
    );
    println!(
        "   Words:   {} worth {} points",
        result.words.len(),
        format!("{}", result.possible_points).bright_yellow().bold()
    );

    if show_words {
        println!();
        print_word_groups(&result.words);
    }
    println!();
}

/// Print every word on a solved grid
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "SOLVED GRID".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    print_grid(&result.board);

    if result.words.is_empty() {
        println!("{}\n", "No words on this grid".yellow());
        return;
    }

    println!(
        "📖 {} words worth {} points:",
        result.words.len(),
        format!("{}", result.possible_points).bright_yellow().bold()
    );
    print_word_groups(&result.words);
    println!();
}

/// Print aggregate grid statistics
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GRID STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔤 {}", "Letters:".bright_cyan().bold());
    println!(
        "   Grids sampled:    {} ({}x{})",
        result.grids, result.size, result.size
    );
    println!("   Vowels:           {:5.1}%", result.vowel_fraction * 100.0);
    println!("   Hard letters:     {:5.1}%", result.hard_fraction * 100.0);
    println!("   Regular letters:  {:5.1}%", result.regular_fraction * 100.0);

    println!("\n📊 {}", "Possible points:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.1}", result.average_points).bright_yellow().bold()
    );
    println!("   Average words:    {:.1}", result.average_words);
    println!(
        "   Lowest:           {}",
        format!("{}", result.min_points).yellow()
    );
    println!(
        "   Highest:          {}",
        format!("{}", result.max_points).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    if result.grids == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&bucket, &count) in &result.distribution {
        let pct = (count as f64 / result.grids as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>4}-{:<4} {} {count:4} ({pct:5.1}%)",
            bucket,
            bucket + POINTS_BUCKET - 1,
            bar.green()
        );
    }
}
