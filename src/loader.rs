//! Reading documents and writing reports
//!
//! This module provides `DocumentLoader`, which feeds lines from a file or a string into an
//! [Analyzer], and `ReportWriter`, which writes rendered reports back to disk. All I/O of the
//! crate lives here; the analysis core never touches the filesystem.
//!
//! # Example
//!
//! ```rust
//! use textalyzer::loader::{DocumentLoader, ReportWriter};
//! use textalyzer::pipeline::Analyzer;
//! use textalyzer::formats::LineFormatter;
//!
//! let report = DocumentLoader::from_path("input.txt")?.analyze(&Analyzer::default())?;
//! ReportWriter::write("output.txt", LineFormatter::default().lines(&report))?;
//! ```

use crate::formats::{parse_term_line, FormatError, ParsedTermLine};
use crate::pipeline::{Analyzer, PipelineError};
use crate::report::Report;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Error that can occur when loading documents or writing reports
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error on the given path
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl LoaderError {
    fn io(path: &Path, source: io::Error) -> Self {
        LoaderError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

enum Source {
    Text(String),
    File(PathBuf),
}

/// Source of input lines for an analysis run
pub struct DocumentLoader {
    source: Source,
}

impl DocumentLoader {
    /// Load from a file path. The file must exist; its lines are read lazily by
    /// [DocumentLoader::analyze].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| LoaderError::io(path, e))?;
        if !metadata.is_file() {
            return Err(LoaderError::io(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        Ok(DocumentLoader {
            source: Source::File(path.to_path_buf()),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: Source::Text(source.into()),
        }
    }

    /// Run the analyzer over every line of the source.
    ///
    /// File lines must be valid UTF-8; the first read or decode error aborts the run.
    pub fn analyze(&self, analyzer: &Analyzer) -> Result<Report, LoaderError> {
        match &self.source {
            Source::Text(text) => Ok(analyzer.report(text.lines())),
            Source::File(path) => {
                info!(path = %path.display(), "reading input");
                let file = File::open(path).map_err(|e| LoaderError::io(path, e))?;
                let mut failure = None;
                let lines = BufReader::new(file)
                    .lines()
                    .map_while(|line| match line {
                        Ok(line) => Some(line),
                        Err(e) => {
                            failure = Some(e);
                            None
                        }
                    });
                let report = analyzer.report(lines);
                match failure {
                    Some(e) => Err(LoaderError::io(path, e)),
                    None => Ok(report),
                }
            }
        }
    }

    /// Parse a report previously written in the `line` format.
    pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Vec<ParsedTermLine>, LoaderError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoaderError::io(path, e))?;
        let parsed = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_term_line)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(path = %path.display(), terms = parsed.len(), "read report");
        Ok(parsed)
    }
}

/// Writes rendered reports as UTF-8 files
pub struct ReportWriter;

impl ReportWriter {
    /// Write each line followed by exactly one newline.
    pub fn write<P, I>(path: P, lines: I) -> Result<(), LoaderError>
    where
        P: AsRef<Path>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LoaderError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let mut count = 0usize;
        for line in lines {
            writeln!(writer, "{}", line.as_ref()).map_err(|e| LoaderError::io(path, e))?;
            count += 1;
        }
        writer.flush().map_err(|e| LoaderError::io(path, e))?;
        info!(path = %path.display(), lines = count, "wrote report");
        Ok(())
    }

    /// Write already-serialized content verbatim.
    pub fn write_str<P: AsRef<Path>>(path: P, content: &str) -> Result<(), LoaderError> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|e| LoaderError::io(path, e))?;
        info!(path = %path.display(), bytes = content.len(), "wrote report");
        Ok(())
    }
}
