//! Terminal output for CLI handlers.
//!
//! Every handler prints through this module so `--json` and `--quiet`
//! behave the same everywhere. In JSON mode each call emits one line of
//! the form `{"type": ..., "payload": ...}` on stdout; warnings and errors
//! go to stderr in both modes.

use std::fmt::Display;
use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stderr, Stream::Stdout};
use parking_lot::RwLock;
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON lines instead of text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    *config_cell().read()
}

fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn json_record(kind: &str, payload: serde_json::Value) -> serde_json::Value {
    json!({
        "type": kind,
        "payload": payload,
    })
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!("{}", json_record(kind, payload));
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *config_cell().write() = config;
}

/// Apply the `--color` choice. `auto` styles only terminal streams.
pub fn apply_color(choice: &ColorChoice) {
    match choice {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {:<14} {}", label.if_supports_color(Stdout, |t| t.dimmed()), value);
}

/// Print a warning line to stderr. Shown even in quiet mode.
pub fn warning(message: &str) {
    if is_json() {
        eprintln!("{}", json_record("warning", json!({ "message": message })));
        return;
    }

    eprintln!("  {} {}", "⚠".if_supports_color(Stderr, |t| t.yellow()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json_record("error", json!({ "message": message })));
        return;
    }

    eprintln!("  {} {}", "×".if_supports_color(Stderr, |t| t.red()), message);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.if_supports_color(Stdout, |t| t.bold()));
}

/// Print a dimmed note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", message.if_supports_color(Stdout, |t| t.dimmed()));
}

/// Print a hint with a "hint:" prefix.
pub fn hint(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("{}", hint_line(message));
}

fn hint_line(message: &str) -> String {
    format!(
        "  {}: {}",
        "hint".if_supports_color(Stdout, |t| t.cyan()),
        message.if_supports_color(Stdout, |t| t.dimmed())
    )
}

/// Print multiple lines of content, each indented.
///
/// Results are not suppressed by `--quiet`; only decoration is.
pub fn lines(content: &str) {
    if is_json() {
        emit_json_line("lines", json!({ "content": content }));
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a typed JSON line with a custom payload.
pub fn json_line(kind: &str, payload: serde_json::Value) {
    emit_json_line(kind, payload);
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a braille spinner.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let config = read_config();
    if config.json || config.quiet {
        let pb = ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &ProgressBar, message: &str) {
    let config = read_config();
    if config.json {
        emit_json_line("spinner_success", json!({ "message": message }));
        pb.finish_and_clear();
        return;
    }
    if config.quiet {
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!(
        "{} {}",
        "✓".if_supports_color(Stderr, |t| t.green()),
        message
    ));
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    if is_json() {
        emit_json_line("spinner_fail", json!({ "message": message }));
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!(
        "{} {}",
        "×".if_supports_color(Stderr, |t| t.red()),
        message
    ));
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.if_supports_color(Stdout, |t| t.cyan()))
}

/// Format a dimmed value.
pub fn muted(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.if_supports_color(Stdout, |t| t.dimmed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_line_is_prefixed() {
        owo_colors::set_override(false);
        assert_eq!(hint_line("set a key"), "  hint: set a key");
        owo_colors::unset_override();
    }

    #[test]
    fn json_records_carry_type_and_payload() {
        let record = json_record("warning", json!({ "message": "careful" }));
        assert_eq!(record["type"], "warning");
        assert_eq!(record["payload"]["message"], "careful");
    }
}
