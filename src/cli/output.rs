use crate::Diagnostic;
use colored::*;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Writes diagnostics to a sink in the order they are recorded and remembers
/// whether any finding occurred. Text lines are
/// `<file>:<line> "<word>" should be <suggestion> in <identifier>`; JSON mode
/// emits one object per line in the same order. No summary line either way.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    colored: bool,
    findings: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat, colored: bool) -> Self {
        Self {
            out,
            format,
            colored,
            findings: 0,
        }
    }

    pub fn record(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.findings += 1;
        match self.format {
            OutputFormat::Text => self.write_text(diagnostic),
            OutputFormat::Json => {
                let line = serde_json::to_string(diagnostic)?;
                writeln!(self.out, "{line}")
            }
        }
    }

    fn write_text(&mut self, d: &Diagnostic) -> io::Result<()> {
        let location = format!("{}:{}", d.file.display(), d.line);
        if self.colored {
            writeln!(
                self.out,
                "{} \"{}\" should be {} in {}",
                location.blue().bold(),
                d.word.red().bold(),
                d.suggestion.green(),
                d.identifier
            )
        } else {
            writeln!(
                self.out,
                "{} \"{}\" should be {} in {}",
                location, d.word, d.suggestion, d.identifier
            )
        }
    }

    /// True from the first recorded diagnostic onward.
    pub fn has_findings(&self) -> bool {
        self.findings > 0
    }

    pub fn findings(&self) -> usize {
        self.findings
    }

    /// Hand back the underlying sink, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.out
    }
}
