use std::io::{self, Write};

use carlog::{dataset::CAR_INFOS, Config, Diagnostic, RecordCollection};
use clap::Parser;
use supports_color::Stream;
use tracing::instrument;

use crate::cli::terminal::{paint, Tone};

/// Command arguments for `carlog check`.
#[derive(Debug, Parser)]
pub struct Check {
    /// Lines to check, each 'YYYY-MM-DD PLATE' (default: the built-in records)
    lines: Vec<String>,

    /// Reject plates containing anything other than A-Z and 0-9.
    #[arg(long)]
    strict_plates: bool,
}

impl Check {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let lines: Vec<String> = if self.lines.is_empty() {
            CAR_INFOS.iter().map(ToString::to_string).collect()
        } else {
            self.lines
        };

        let mut records =
            RecordCollection::new().with_strict_plates(self.strict_plates || config.strict_plates);
        let diagnostics = records.extract(&lines);

        report(&lines, &diagnostics, &mut io::stdout().lock())?;
        Ok(())
    }
}

/// Writes one verdict per line followed by a summary.
///
/// `diagnostics` must be in line order, as returned by extraction.
fn report<W: Write>(lines: &[String], diagnostics: &[Diagnostic], out: &mut W) -> io::Result<()> {
    let mut pending = diagnostics.iter().peekable();

    for (index, line) in lines.iter().enumerate() {
        match pending.next_if(|diagnostic| diagnostic.line == index + 1) {
            Some(diagnostic) => {
                let verdict = format!("✗ {line}: {}", diagnostic.kind);
                writeln!(out, "{}", paint(&verdict, Tone::Warning, Stream::Stdout))?;
            }
            None => writeln!(out, "{}", paint(&format!("✓ {line}"), Tone::Success, Stream::Stdout))?,
        }
    }

    let valid = lines.len() - diagnostics.len();
    writeln!(out)?;
    let summary = format!("Valid: {valid} / {}", lines.len());
    writeln!(out, "{}", paint(&summary, Tone::Muted, Stream::Stdout))?;
    Ok(())
}
