use std::io::{self, BufRead, Write};

use carlog::SortOrder;

const MENU: &str = "Choose sort order:\n  1 - by date\n  2 - by first letter of plate\nChoice: ";

/// Asks for a sort order until a valid answer is given.
///
/// Answers that are not valid UTF-8 are treated like any other invalid
/// answer. Returns `Ok(None)` when `input` reaches end-of-input before a
/// valid answer, in which case nothing further is written.
pub fn choose_sort<R, W>(input: &mut R, output: &mut W) -> io::Result<Option<SortOrder>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{MENU}")?;
        output.flush()?;

        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            tracing::debug!("end of input at sort prompt");
            return Ok(None);
        }

        match String::from_utf8_lossy(&line).trim() {
            "1" => return Ok(Some(SortOrder::Date)),
            "2" => return Ok(Some(SortOrder::PlateLetter)),
            other => {
                tracing::debug!(answer = other, "invalid sort choice");
                writeln!(output, "Invalid choice '{other}': enter 1 or 2")?;
            }
        }
    }
}
