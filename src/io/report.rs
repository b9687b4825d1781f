//! Reading and writing `token count` frequency reports

use crate::io::configuration::REPORT_SEPARATOR;
use crate::io::error::{Result, WithPath};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::warn;

/// One `token count` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Word or symbol
    pub token: String,
    /// Occurrences of the token
    pub count: u64,
}

/// Decode bytes as UTF-8, dropping any invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Parse a single report line without its line terminator
///
/// Returns `None` unless the line is exactly a non-empty token, one space and
/// a non-negative integer count.
pub fn parse_line(line: &str) -> Option<ReportEntry> {
    let mut fields = line.split(REPORT_SEPARATOR);
    let token = fields.next()?;
    let count = fields.next()?;
    if fields.next().is_some() || token.is_empty() {
        return None;
    }

    let count = count.trim().parse().ok()?;
    Some(ReportEntry {
        token: token.to_string(),
        count,
    })
}

/// Lines of a text source, decoded lossily and stripped of line terminators
pub struct LossyLines<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: u64,
}

impl<R: BufRead> LossyLines<R> {
    /// Wrap a buffered reader
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
        }
    }

    /// Number of lines returned so far
    pub const fn line_number(&self) -> u64 {
        self.line_number
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                let mut line = decode_lossy(&self.buffer);
                while line.ends_with(['\n', '\r']) {
                    line.pop();
                }
                Some(Ok(line))
            }
            Err(error) => Some(Err(error.into())),
        }
    }
}

/// Streaming report parser that skips and counts malformed lines
pub struct ReportReader<R> {
    lines: LossyLines<R>,
    skipped: u64,
}

impl<R: BufRead> ReportReader<R> {
    /// Parse entries from a buffered reader
    pub const fn new(reader: R) -> Self {
        Self {
            lines: LossyLines::new(reader),
            skipped: 0,
        }
    }

    /// Lines consumed so far, including blank and malformed ones
    pub const fn lines_read(&self) -> u64 {
        self.lines.line_number()
    }

    /// Malformed lines skipped so far
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<R: BufRead> Iterator for ReportReader<R> {
    type Item = Result<ReportEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(error) => return Some(Err(error)),
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Some(entry) = parse_line(&line) {
                return Some(Ok(entry));
            }
            self.skipped += 1;
            warn!(
                line = self.lines.line_number(),
                content = %line,
                "skipping malformed report line"
            );
        }
    }
}

/// Fully parsed report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Well formed entries in file order
    pub entries: Vec<ReportEntry>,
    /// Lines consumed, including blank and malformed ones
    pub lines_read: u64,
    /// Malformed lines that were skipped
    pub skipped_lines: u64,
}

/// Parse every entry of a report
///
/// # Errors
///
/// Returns an error if the reader fails; malformed lines are skipped, not errors
pub fn read_report<R: BufRead>(reader: R) -> Result<Report> {
    let mut parser = ReportReader::new(reader);
    let entries = parser.by_ref().collect::<Result<Vec<_>>>()?;
    Ok(Report {
        entries,
        lines_read: parser.lines_read(),
        skipped_lines: parser.skipped(),
    })
}

/// Write `token count` lines in the given order
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_report<W, S, I>(writer: &mut W, entries: I) -> Result<()>
where
    W: Write + ?Sized,
    S: AsRef<str>,
    I: IntoIterator<Item = (S, u64)>,
{
    for (token, count) in entries {
        write_entry(writer, token.as_ref(), count)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a single `token count` line without flushing
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_entry<W: Write + ?Sized>(writer: &mut W, token: &str, count: u64) -> Result<()> {
    writeln!(writer, "{token}{REPORT_SEPARATOR}{count}")?;
    Ok(())
}

/// Open an input file for buffered reading
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be opened
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_path(path, "open input")?;
    Ok(BufReader::new(file))
}

/// Open the report destination, standard output when no path is given
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be created
pub fn open_output(path: Option<&Path>, append: bool) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(std::io::stdout().lock())));
    };

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_path(path, "open output")?;
    Ok(Box::new(BufWriter::new(file)))
}
