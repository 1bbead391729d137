//! Terminal colouring and diagnostic output

use std::io::Write;

use carlog::{Diagnostic, Reporter};
use owo_colors::{colors::css, OwoColorize};
use supports_color::Stream;

/// How a line of output should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Green
    Success,
    /// Amber
    Warning,
    /// Dimmed
    Muted,
}

/// Renders `text` in `tone` if `stream` is a colour-capable terminal.
#[must_use]
pub fn paint(text: &str, tone: Tone, stream: Stream) -> String {
    if supports_color::on(stream).is_none() {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.fg::<css::Green>().to_string(),
        Tone::Warning => text.fg::<css::Orange>().to_string(),
        Tone::Muted => text.dimmed().to_string(),
    }
}

/// Writes each dropped line to stderr as a warning.
#[derive(Debug)]
pub struct TerminalReporter<W> {
    out: W,
}

impl<W: Write> TerminalReporter<W> {
    /// Creates a reporter writing to `out`, which should be stderr or a
    /// stand-in for it.
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        tracing::debug!(line = diagnostic.line, text = %diagnostic.text, "{}", diagnostic.kind);
        let message = paint(&format!("⚠️  Skipping {diagnostic}"), Tone::Warning, Stream::Stderr);
        if let Err(error) = writeln!(self.out, "{message}") {
            tracing::debug!(%error, "could not write diagnostic");
        }
    }
}
