use crate::context::{AppContext, VerbosityLevel};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io::IsTerminal;
use std::time::Duration;

/// Color output control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when writing to a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        write!(f, "{}", s)
    }
}

/// Check if we should use colors in output
pub fn should_color(ctx: &AppContext) -> bool {
    match ctx.config.style.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Print a message if the context verbosity is at least `level`
pub fn print(ctx: &AppContext, level: VerbosityLevel, message: &str) {
    if ctx.verbosity >= level {
        eprintln!("{}", message);
    }
}

/// Colorize a checkmark for success if colors are enabled
pub fn checkmark(ctx: &AppContext) -> String {
    if should_color(ctx) {
        format!("{}", "✓".green().bold())
    } else {
        "✓".to_string()
    }
}

/// Colorize an X mark for errors if colors are enabled
pub fn error_mark(ctx: &AppContext) -> String {
    if should_color(ctx) {
        format!("{}", "✗".red().bold())
    } else {
        "✗".to_string()
    }
}

/// Print a success message to stdout
pub fn success(ctx: &AppContext, message: &str) {
    println!("{} {}", checkmark(ctx), message);
}

/// Print an error message to stderr
pub fn error(ctx: &AppContext, message: &str) {
    eprintln!("{} {}", error_mark(ctx), message);
}

/// Render an error and every error in its `source()` chain, joined by `": "`.
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Start a spinner on stderr for a remote call.
///
/// Returns a hidden bar when stderr is not a terminal so that piped output
/// stays clean.
pub fn spinner(message: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Pretty,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        write!(f, "{}", s)
    }
}

/// Trait for types that can be formatted for CLI output
pub trait Formattable: Serialize {
    /// Format the type for pretty (human-readable) output
    fn format_pretty(&self) -> String;
}

/// Format a single item for output
pub fn format_output<T: Formattable>(item: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Ok(item.format_pretty()),
        _ => serialize(item, format),
    }
}

/// Serialize any value as JSON or YAML.
///
/// `Pretty` has no generic rendering and falls back to JSON.
pub fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
        OutputFormat::Json | OutputFormat::Pretty => serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
    }
}
