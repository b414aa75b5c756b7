//! Entry renderer: turns entries and their metadata into framed console blocks.
//!
//! Rendering is pure. The same entry with the same metadata always produces
//! the same lines, byte for byte, which is what lets tests assert on exact
//! console output. Writing the block is the printer's job.
//!
//! ## Block layout
//!
//! ```text
//!
//! BATCH #0001 ────────────────────────────────────────────────
//! Source:  127.0.0.1
//! Volume:  2 entries
//! Received: 2026-01-02 03:04:05.678
//! ─────────────────────────────────────────────────────────────
//! 01 a
//! 02 {
//!      "x": 1
//!    }
//! ─────────────────────────────────────────────────────────────
//! ```
//!
//! Stream blocks use an `ENTRY #NNNN` header, `Source`/`Time`/`Format`
//! fields and indent every content line by two spaces.

use chrono::{DateTime, Local};
use console::Style;

use crate::entry::LogEntry;

/// Width of the closing separator rule.
pub const RULE_WIDTH: usize = 61;

/// Width of the rule trailing a block title.
pub const HEADER_RULE_WIDTH: usize = 48;

/// Continuation indent for multi-line batch entries (aligns under the index).
pub const BATCH_CONTINUATION_INDENT: usize = 3;

/// Indent for every content line of a stream entry.
pub const STREAM_INDENT: usize = 2;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Receipt time of an entry or notice, on the local clock.
pub type Timestamp = DateTime<Local>;

/// Millisecond-precision local timestamp as shown in headers and notices.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn rule(width: usize) -> String {
    "─".repeat(width)
}

/// Console styling. Colors are forced on or off at construction so output
/// does not depend on global terminal detection.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: bool,
    bold: Style,
    dim: Style,
    batch_title: Style,
    entry_title: Style,
    index: Style,
    opened: Style,
    closed: Style,
    failed: Style,
}

impl Theme {
    pub fn new(colors: bool) -> Self {
        let base = Style::new().force_styling(colors);
        Self {
            colors,
            bold: base.clone().bold(),
            dim: base.clone().dim(),
            batch_title: base.clone().bold().magenta(),
            entry_title: base.clone().bold().cyan(),
            index: base.clone().blue(),
            opened: base.clone().green(),
            closed: base.clone().yellow(),
            failed: base.red(),
        }
    }

    /// No escape sequences at all.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colors when stdout is a terminal and `NO_COLOR`/`CLICOLOR` allow it.
    pub fn detect() -> Self {
        Self::new(console::colors_enabled())
    }

    pub const fn colors(&self) -> bool {
        self.colors
    }

    fn field(&self, label: &str, value: impl std::fmt::Display) -> String {
        format!("{} {}", self.dim.apply_to(label), value)
    }

    fn separator(&self) -> String {
        self.dim.apply_to(rule(RULE_WIDTH)).to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}

/// Fully rendered console output for one batch, entry or notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
}

impl Block {
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The block as written to the console, one `\n` after every line.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Header metadata of a batch block.
#[derive(Debug, Clone, Copy)]
pub struct BatchMeta<'a> {
    pub id: u64,
    pub source: &'a str,
    pub received: Timestamp,
}

/// Header metadata of a stream entry block.
#[derive(Debug, Clone, Copy)]
pub struct StreamMeta<'a> {
    pub id: u64,
    pub source: &'a str,
    pub received: Timestamp,
}

/// Lines of one entry.
///
/// With a `first_prefix`, the prefix is put in front of the first line and
/// the remaining lines are indented by `indent` spaces. Without one, every
/// line is indented. Empty content renders as the bare prefix when there
/// is one, and as nothing otherwise.
pub fn render_lines(entry: &LogEntry, indent: usize, first_prefix: Option<&str>) -> Vec<String> {
    let lines = entry.content_lines();
    if lines.is_empty() {
        return first_prefix.map(str::to_owned).into_iter().collect();
    }
    let pad = " ".repeat(indent);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| match first_prefix {
            Some(prefix) if i == 0 => format!("{prefix}{line}"),
            _ => format!("{pad}{line}"),
        })
        .collect()
}

/// Render a whole batch as one framed block.
pub fn batch_block(theme: &Theme, meta: &BatchMeta<'_>, entries: &[LogEntry]) -> Block {
    let mut lines = vec![
        String::new(),
        format!(
            "{} {}",
            theme.batch_title.apply_to(format!("BATCH #{:04}", meta.id)),
            theme.dim.apply_to(rule(HEADER_RULE_WIDTH))
        ),
        theme.field("Source: ", meta.source),
        theme.field("Volume: ", format!("{} entries", entries.len())),
        theme.field("Received:", format_timestamp(&meta.received)),
        theme.separator(),
    ];

    for (i, entry) in entries.iter().enumerate() {
        let prefix = format!("{} ", theme.index.apply_to(format!("{:02}", i + 1)));
        lines.extend(render_lines(entry, BATCH_CONTINUATION_INDENT, Some(&prefix)));
    }

    lines.push(theme.separator());
    Block::new(lines)
}

/// Render a single stream entry as one framed block.
pub fn stream_block(theme: &Theme, meta: &StreamMeta<'_>, entry: &LogEntry) -> Block {
    let mut lines = vec![
        String::new(),
        format!(
            "{} {}",
            theme.entry_title.apply_to(format!("ENTRY #{:04}", meta.id)),
            theme.dim.apply_to(rule(HEADER_RULE_WIDTH))
        ),
        theme.field("Source:", meta.source),
        theme.field("Time:  ", format_timestamp(&meta.received)),
        theme.field("Format:", entry.format().label()),
        theme.separator(),
    ];
    lines.extend(render_lines(entry, STREAM_INDENT, None));
    lines.push(theme.separator());
    Block::new(lines)
}

/// Startup banner of an endpoint.
pub fn banner(theme: &Theme, title: &str, subtitle: &str, status: &str, endpoint: &str) -> Block {
    Block::new(vec![
        format!(
            "{} {} {}",
            theme.bold.apply_to(title),
            theme.dim.apply_to("|"),
            subtitle
        ),
        theme.field("Status:  ", status),
        theme.field("Endpoint:", endpoint),
        theme.separator(),
        String::new(),
    ])
}

pub fn connection_opened(theme: &Theme, at: &Timestamp, peer: &str) -> Block {
    Block::new(vec![format!(
        "{} {} from {peer}",
        theme.dim.apply_to(format!("[{}]", format_timestamp(at))),
        theme.opened.apply_to("Connection established"),
    )])
}

pub fn connection_closed(theme: &Theme, at: &Timestamp, peer: &str) -> Block {
    Block::new(vec![format!(
        "{} {} {peer}",
        theme.dim.apply_to(format!("[{}]", format_timestamp(at))),
        theme.closed.apply_to("Connection closed"),
    )])
}

pub fn connection_error(theme: &Theme, at: &Timestamp, peer: &str, reason: &str) -> Block {
    Block::new(vec![format!(
        "{} {} {peer}: {reason}",
        theme.dim.apply_to(format!("[{}]", format_timestamp(at))),
        theme.failed.apply_to("Connection error"),
    )])
}

pub fn batch_error(theme: &Theme, message: &str) -> Block {
    Block::new(vec![format!(
        "{} {message}",
        theme.bold.apply_to("Error processing batch:")
    )])
}

pub fn shutdown_notice(theme: &Theme) -> Block {
    Block::new(vec![
        String::new(),
        format!("{} Shutdown requested.", theme.dim.apply_to("[System]")),
    ])
}

pub fn fatal_error(theme: &Theme, message: &str) -> Block {
    Block::new(vec![
        String::new(),
        format!("{} {message}", theme.bold.apply_to("Error:")),
    ])
}
