pub mod corrector;
pub mod filter;
pub mod segmenter;

use crate::cli::output::Reporter;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::parser;
use crate::{Diagnostic, Identifier};
use self::corrector::Corrector;
use std::io::Write;

/// The scan pipeline: a corrector compiled for this run, driven over an
/// identifier stream through the kind filter and word segmenter.
pub struct TypoChecker {
    corrector: Corrector,
}

impl TypoChecker {
    /// Build the correction table for this scan: suppress the configured
    /// ignore words, then compile. The table is immutable for the run.
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        let mut builder = Corrector::builder();
        builder.remove_rules(&config.ignore_words);

        Ok(Self {
            corrector: builder.compile()?,
        })
    }

    /// Resolve `targets`, extract their identifiers, and scan the stream.
    /// Returns whether any diagnostic was recorded. A target that fails to
    /// resolve fails the whole scan before any output is produced.
    pub fn check_targets<W: Write>(
        &self,
        targets: &[String],
        config: &ScanConfig,
        reporter: &mut Reporter<W>,
    ) -> Result<bool, ScanError> {
        let identifiers = parser::collect_identifiers(targets, config.include_tests)?;
        self.scan(identifiers, config, reporter)
    }

    /// Core loop over an already-materialized identifier stream: filter by
    /// kind, segment the name, look up each word, and report hits in input
    /// order.
    pub fn scan<W, I>(
        &self,
        identifiers: I,
        config: &ScanConfig,
        reporter: &mut Reporter<W>,
    ) -> Result<bool, ScanError>
    where
        W: Write,
        I: IntoIterator<Item = Identifier>,
    {
        for ident in identifiers {
            if !filter::accepts(ident.kind, config) {
                continue;
            }

            for word in segmenter::segment(&ident.name) {
                if let Some(hit) = self.corrector.lookup(word) {
                    reporter.record(&Diagnostic {
                        file: ident.file.clone(),
                        line: ident.line,
                        word: hit.word,
                        suggestion: hit.suggestion,
                        identifier: ident.name.clone(),
                    })?;
                }
            }
        }

        Ok(reporter.has_findings())
    }
}
