pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;
pub mod parser;

pub use checker::TypoChecker;
pub use config::ScanConfig;
pub use error::ScanError;

use serde::Serialize;
use std::path::PathBuf;

/// The syntactic role of an identifier occurrence, as reported by the
/// identifier provider. Anything without a definite function/variable/constant
/// classification (types, modules, labels, use-sites) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    Function,
    Variable,
    Constant,
    Other,
}

/// One identifier occurrence in a scanned source file. The same declared name
/// may recur as multiple values at different use sites; each is scanned
/// independently.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: String,
    pub kind: IdentKind,
    pub file: PathBuf,
    pub line: usize,
}

/// One reported misspelling: a word inside `identifier` that the correction
/// table matched, with its suggested replacement.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub line: usize,
    pub word: String,
    pub suggestion: String,
    pub identifier: String,
}
