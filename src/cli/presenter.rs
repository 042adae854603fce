//! CLI presenter for output formatting

use std::time::Duration as StdDuration;

use chrono::{Local, TimeZone};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::capture::Language;
use crate::domain::note::{Board, Note, NoteCategory, NoteColor};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
    language: Language,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: None,
            language: Language::default(),
        }
    }

    /// Interface language for column labels
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn category_label(&self, category: NoteCategory) -> &'static str {
        category.label_in(self.language)
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(StdDuration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Update spinner message
    pub fn update_spinner(&self, message: &str) {
        if let Some(ref spinner) = self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Recording status line: elapsed time, with the ceiling when there is one
    pub fn format_elapsed(&self, elapsed_secs: u64, max_secs: Option<u64>) -> String {
        match max_secs {
            Some(max) if max > 0 => {
                let bar_width = 20;
                let filled = ((elapsed_secs.min(max) * bar_width) / max) as usize;
                format!(
                    "[{}{}] {:>3}s / {}s",
                    "█".repeat(filled).cyan(),
                    "░".repeat(bar_width as usize - filled),
                    elapsed_secs,
                    max
                )
            }
            _ => format!("{:>3}s", elapsed_secs),
        }
    }

    /// Print the board, one section per column
    pub fn board(&self, board: &Board<'_>) {
        for column in board.columns() {
            println!(
                "{} {}",
                self.category_label(column.category).bold(),
                format!("({})", column.notes.len()).dimmed()
            );
            for note in &column.notes {
                println!("  {}", self.note_line(note));
            }
        }
    }

    /// Print notes as one-line summaries
    pub fn note_list(&self, notes: &[&Note]) {
        for note in notes {
            println!("{}", self.note_line(note));
        }
    }

    /// Print everything about one note
    pub fn note_detail(&self, note: &Note) {
        println!("{}", paint(&note.title, note.color_or_default()).bold());
        self.key_value("id", &note.id);
        self.key_value("category", note.category.as_str());
        self.key_value("created", &format_timestamp(note.created_at));
        if !note.tags().is_empty() {
            self.key_value("tags", &note.tags().join(", "));
        }
        if let Some(color) = note.color {
            self.key_value("color", color.as_str());
        }
        if let Some(at) = note.reminder {
            self.key_value("reminder", &format_timestamp(at));
        }
        if note.is_archived() {
            self.key_value("archived", "yes");
        }
        if let Some(images) = &note.images {
            self.key_value("images", &images.len().to_string());
        }
        self.key_value("versions", &note.versions().len().to_string());
        if !note.content.is_empty() {
            println!();
            println!("{}", note.content);
        }
        if !note.transcript.is_empty() && note.transcript != note.title {
            println!();
            println!("{} {}", "transcript:".dimmed(), note.transcript.dimmed());
        }
    }

    /// Print a note's version history, oldest first
    pub fn versions(&self, note: &Note) {
        if note.versions().is_empty() {
            self.info("No earlier versions");
            return;
        }
        for (index, version) in note.versions().iter().enumerate() {
            println!(
                "{} {} {}",
                format!("[{}]", index).cyan(),
                format_timestamp(version.timestamp).dimmed(),
                version.title.bold()
            );
            if !version.content.is_empty() {
                for line in version.content.lines() {
                    println!("    {}", line);
                }
            }
        }
    }

    fn note_line(&self, note: &Note) -> String {
        let mut line = format!(
            "{} {}",
            short_id(&note.id).dimmed(),
            paint(&note.title, note.color_or_default())
        );
        if !note.tags().is_empty() {
            line.push_str(&format!(" {}", format!("#{}", note.tags().join(" #")).blue()));
        }
        if note.reminder.is_some() {
            line.push_str(" ⏰");
        }
        line
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// First eight characters of an id, enough to address a note
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(end, _)| &id[..end])
}

/// Local date and time for a millisecond timestamp
pub fn format_timestamp(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

fn paint(text: &str, color: NoteColor) -> ColoredString {
    match color {
        NoteColor::Default => text.normal(),
        NoteColor::Red => text.red(),
        NoteColor::Orange => text.truecolor(255, 165, 0),
        NoteColor::Yellow => text.yellow(),
        NoteColor::Green => text.green(),
        NoteColor::Blue => text.blue(),
        NoteColor::Purple => text.purple(),
        NoteColor::Pink => text.bright_magenta(),
    }
}
