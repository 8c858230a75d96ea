//! Terminal output for the CLI handlers.
//!
//! Every helper honours the global output flags. In JSON mode each message
//! becomes one `{"type", "payload"}` object per line; quiet mode hides
//! everything except failures and errors.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};

/// Output flags collected from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    *OUTPUT
        .get_or_init(|| RwLock::new(OutputConfig::default()))
        .read()
}

/// Where a message goes and whether quiet mode hides it.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Channel {
    Regular,
    Failure,
    Error,
}

/// Print `text` for humans, or `{"type": kind, "payload": payload}` in JSON mode.
fn emit(channel: Channel, kind: &str, payload: Value, text: impl FnOnce() -> String) {
    let config = current();

    if config.json {
        let line = json!({ "type": kind, "payload": payload });
        if channel == Channel::Error {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
        return;
    }

    match channel {
        Channel::Regular if config.quiet => {}
        Channel::Regular | Channel::Failure => println!("{}", text()),
        Channel::Error => eprintln!("{}", text()),
    }
}

/// Install the flags parsed from the command line.
pub fn configure(config: OutputConfig) {
    *OUTPUT
        .get_or_init(|| RwLock::new(OutputConfig::default()))
        .write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Print the program name and version.
pub fn header(version: &str) {
    emit(
        Channel::Regular,
        "header",
        json!({ "app": "brierly", "version": version }),
        || format!("{} {}", "brierly".bold(), version.dimmed()),
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        Channel::Regular,
        "field",
        json!({ "label": label, "value": value }),
        || format!("  {:<12} {}", label.dimmed(), value),
    );
}

pub fn success(message: &str) {
    emit(
        Channel::Regular,
        "success",
        json!({ "message": message }),
        || format!("  {} {}", "✓".green(), message),
    );
}

/// Print a failure line. Shown even in quiet mode.
pub fn failure(message: &str) {
    emit(
        Channel::Failure,
        "failure",
        json!({ "message": message }),
        || format!("  {} {}", "×".red(), message),
    );
}

/// Print an error on stderr.
pub fn error(message: &str) {
    emit(
        Channel::Error,
        "error",
        json!({ "message": message }),
        || format!("{} {}", "error:".red().bold(), message),
    );
}

pub fn section(title: &str) {
    emit(
        Channel::Regular,
        "section",
        json!({ "title": title }),
        || format!("\n{}", title.bold()),
    );
}

pub fn note(message: &str) {
    emit(
        Channel::Regular,
        "note",
        json!({ "message": message }),
        || format!("  {}", message.dimmed()),
    );
}

/// Print a block of text (a rendered table, a TOML document) indented.
pub fn lines(content: &str) {
    emit(
        Channel::Regular,
        "lines",
        json!({ "content": content }),
        || {
            content
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n")
        },
    );
}

/// Print a complete JSON document, bypassing the line envelope.
pub fn json_output(value: Value) {
    println!("{value}");
}

/// Format a signed score: green below zero (better than the group), red above.
#[must_use]
pub fn signed(value: f64, precision: usize) -> String {
    let text = format!("{value:+.precision$}");
    if is_json() || value == 0.0 {
        return text;
    }
    if value < 0.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

#[must_use]
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    value.cyan().to_string()
}
