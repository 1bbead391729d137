use std::io::{self, BufRead, Write};

use carlog::{dataset::CAR_INFOS, Config, RecordCollection, RecordView, SortOrder};
use clap::{Parser, ValueEnum};
use tracing::instrument;

use crate::cli::{prompt, terminal::TerminalReporter};

/// Command arguments for `carlog sort`.
#[derive(Debug, Default, Parser)]
pub struct Sort {
    /// Sort order; prompts for one when omitted.
    #[arg(long, value_enum)]
    by: Option<SortBy>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Reject plates containing anything other than A-Z and 0-9.
    #[arg(long)]
    strict_plates: bool,
}

/// Sortable fields.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortBy {
    /// Ascending by date
    Date,
    /// By the first letter of the plate
    Plate,
}

impl From<SortBy> for SortOrder {
    fn from(by: SortBy) -> Self {
        match by {
            SortBy::Date => Self::Date,
            SortBy::Plate => Self::PlateLetter,
        }
    }
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One `YYYY-MM-DD PLATE` line per record
    #[default]
    Table,
    /// A JSON array of records
    Json,
}

impl Sort {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        self.execute(
            config,
            &mut io::stdin().lock(),
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )
    }

    /// Runs the command against explicit streams.
    ///
    /// Only records are written to `out`; the prompt and diagnostics go to
    /// `err`.
    fn execute<R, O, E>(
        self,
        config: &Config,
        input: &mut R,
        out: &mut O,
        err: &mut E,
    ) -> anyhow::Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut records =
            RecordCollection::new().with_strict_plates(self.strict_plates || config.strict_plates);
        records.extract_with(CAR_INFOS, TerminalReporter::new(&mut *err));

        let order = match self.by.map(SortOrder::from).or(config.default_sort) {
            Some(order) => order,
            None => {
                let Some(order) = prompt::choose_sort(input, err)? else {
                    tracing::info!("no sort order chosen");
                    return Ok(());
                };
                order
            }
        };
        tracing::info!(?order, records = records.len(), "sorting records");

        records.sort(order);
        write_records(&records, self.output, out)
    }
}

fn write_records<W: Write>(
    records: &RecordCollection,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => write!(out, "{}", records.display())?,
        OutputFormat::Json => {
            let rows: Vec<RecordView<'_>> = records.iter().collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn sorted(order: SortOrder) -> RecordCollection {
        let mut records = RecordCollection::new();
        records.extract_with(CAR_INFOS, ());
        records.sort(order);
        records
    }

    #[test]
    fn table_output_lists_records() {
        let mut out = Vec::new();
        write_records(&sorted(SortOrder::Date), OutputFormat::Table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), CAR_INFOS.len());
        assert_eq!(lines.first(), Some(&"2000-03-10 K009VO"));
        assert_eq!(lines.last(), Some(&"2005-03-10 K009VO"));
    }

    #[test]
    fn json_output_lists_records() {
        let mut out = Vec::new();
        write_records(&sorted(SortOrder::PlateLetter), OutputFormat::Json, &mut out).unwrap();

        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), CAR_INFOS.len());
        assert_eq!(rows[0]["date"], "2001-11-12");
        assert_eq!(rows[0]["plate"], "A000BC");
        assert_eq!(rows[1]["original"], "2004-03-10 E003EK");
    }

    #[test]
    fn sort_by_maps_to_order() {
        assert_eq!(SortOrder::from(SortBy::Date), SortOrder::Date);
        assert_eq!(SortOrder::from(SortBy::Plate), SortOrder::PlateLetter);
    }

    fn run_with_input(sort: Sort, config: &Config, input: &[u8]) -> (String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        sort.execute(config, &mut Cursor::new(input), &mut out, &mut err)
            .unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn prompt_stays_off_stdout() {
        let sort = Sort {
            output: OutputFormat::Json,
            ..Sort::default()
        };
        let (out, err) = run_with_input(sort, &Config::default(), b"3\n1\n");

        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(CAR_INFOS.len()));
        assert_eq!(rows[0]["date"], "2000-03-10");
        assert!(err.contains("Choose sort order:"));
        assert!(err.contains("Invalid choice '3'"));
    }

    #[test]
    fn prompted_table_contains_only_records() {
        let (out, _) = run_with_input(Sort::default(), &Config::default(), b"2\n");

        assert_eq!(out.lines().count(), CAR_INFOS.len());
        assert!(out.lines().all(|line| line.len() > 11 && line.as_bytes()[10] == b' '));
        assert!(out.starts_with("2001-11-12 A000BC\n"));
    }

    #[test]
    fn end_of_input_writes_no_records() {
        let (out, err) = run_with_input(Sort::default(), &Config::default(), b"");
        assert!(out.is_empty());
        assert!(err.ends_with("Choice: "));
    }

    #[test]
    fn explicit_order_skips_prompt() {
        let sort = Sort {
            by: Some(SortBy::Date),
            ..Sort::default()
        };
        let (out, err) = run_with_input(sort, &Config::default(), b"");
        assert!(err.is_empty());
        assert!(out.starts_with("2000-03-10 K009VO\n"));
    }

    #[test]
    fn configured_order_skips_prompt() {
        let config = Config {
            default_sort: Some(SortOrder::PlateLetter),
            ..Config::default()
        };
        let (out, err) = run_with_input(Sort::default(), &config, b"");
        assert!(err.is_empty());
        assert!(out.starts_with("2001-11-12 A000BC\n"));
    }

    #[test]
    fn strict_plates_accept_built_in_records() {
        let sort = Sort {
            by: Some(SortBy::Date),
            strict_plates: true,
            ..Sort::default()
        };
        let (out, err) = run_with_input(sort, &Config::default(), b"");
        assert!(err.is_empty());
        assert_eq!(out.lines().count(), CAR_INFOS.len());
    }
}
