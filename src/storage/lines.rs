//! Reading line sequences from text files
//!
//! [`read_lines`] never fails: when the file cannot be read it substitutes
//! [`FALLBACK_LINES`]. [`Lines::read`] does the same but remembers which of the
//! two happened, and [`try_read_lines`] hands the error back instead.

use std::{
    io,
    path::{Path, PathBuf},
};

/// The lines used in place of a file that cannot be read.
pub const FALLBACK_LINES: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

/// Where a [`Lines`] sequence came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    /// The lines were read from this file.
    File(PathBuf),

    /// The file could not be read and [`FALLBACK_LINES`] were used instead.
    Fallback,
}

/// A sequence of non-blank lines together with their origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines {
    source: LineSource,
    lines: Vec<String>,
}

impl Lines {
    /// Reads the non-blank lines of the file at `path`.
    ///
    /// Any failure to read the file is logged and replaced by
    /// [`FALLBACK_LINES`].
    #[must_use]
    pub fn read(path: &Path) -> Self {
        match try_read_lines(path) {
            Ok(lines) => Self {
                source: LineSource::File(path.to_path_buf()),
                lines,
            },
            Err(e) => {
                tracing::warn!(
                    path = %e.path().display(),
                    kind = ?e.kind(),
                    "{e}; using fallback lines"
                );
                Self::fallback()
            }
        }
    }

    /// The fallback sequence.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            source: LineSource::Fallback,
            lines: FALLBACK_LINES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Where the lines came from.
    #[must_use]
    pub const fn source(&self) -> &LineSource {
        &self.source
    }

    /// Returns `true` if the fallback sequence was substituted.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, LineSource::Fallback)
    }

    /// The lines, in source order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the sequence, returning the lines.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.lines
    }
}

/// Reads the non-blank lines of the file at `path`, or [`FALLBACK_LINES`] if it
/// cannot be read.
#[must_use]
pub fn read_lines(path: &Path) -> Vec<String> {
    Lines::read(path).into_inner()
}

/// Reads the non-blank lines of the file at `path`.
///
/// The content is split on `\n` only, so a `\r` before it stays part of the
/// line. A line is blank if it holds nothing but whitespace and control
/// characters (code points up to U+0020). Lines that are kept are returned as
/// they appear in the file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn try_read_lines(path: &Path) -> Result<Vec<String>, ReadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = content
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(ToString::to_string)
        .collect();

    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c <= ' ')
}

/// The input file could not be read.
#[derive(Debug, thiserror::Error)]
#[error("failed to read {}: {source}", .path.display())]
pub struct ReadError {
    path: PathBuf,
    source: io::Error,
}

impl ReadError {
    /// The file that could not be read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The kind of I/O failure.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    fn write_temp(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn blank_lines_are_dropped() {
        let file = write_temp(b"hello\n\nhi\nworld\n");

        assert_eq!(read_lines(file.path()), ["hello", "hi", "world"]);
    }

    #[test]
    fn whitespace_only_lines_are_dropped_but_others_are_not_trimmed() {
        let file = write_temp(b"  indented\n   \n\t\ntrailing  \n");

        let lines = read_lines(file.path());

        assert_eq!(lines, ["  indented", "trailing  "]);
        assert!(lines.iter().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn carriage_returns_stay_on_their_line() {
        let file = write_temp(b"one\r\n\r\ntwo\r\n");

        assert_eq!(read_lines(file.path()), ["one\r", "two\r"]);
    }

    #[test]
    fn only_ascii_whitespace_and_controls_count_as_blank() {
        let file = write_temp("\u{a0}\n\u{0b}\u{1f}\nx\n\u{2028}\n".as_bytes());

        assert_eq!(read_lines(file.path()), ["\u{a0}", "x", "\u{2028}"]);
    }

    #[test]
    fn empty_file_yields_no_lines() {
        let file = write_temp(b"");

        let lines = Lines::read(file.path());

        assert!(lines.as_slice().is_empty());
        assert_eq!(lines.source(), &LineSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn missing_file_yields_fallback() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.txt");

        assert_eq!(read_lines(&missing), ["alpha", "beta", "gamma", "delta"]);
        assert!(Lines::read(&missing).is_fallback());
    }

    #[test]
    fn invalid_utf8_yields_fallback() {
        let file = write_temp(&[0x66, 0x6f, 0xff, 0xfe, b'\n']);

        assert_eq!(read_lines(file.path()), FALLBACK_LINES);
    }

    #[test]
    fn directory_yields_fallback() {
        let tmp = TempDir::new().unwrap();

        assert!(Lines::read(tmp.path()).is_fallback());
    }

    #[test]
    fn try_read_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.txt");

        let error = try_read_lines(&missing).unwrap_err();

        assert_eq!(error.path(), missing.as_path());
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
