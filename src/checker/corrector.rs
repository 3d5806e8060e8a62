use crate::dict::corpus;
use crate::error::ScanError;
use fst::{Map, MapBuilder};
use std::collections::BTreeMap;

/// A dictionary hit for one word, with the suggestion's casing already
/// reconstructed to match the queried word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub word: String,
    pub suggestion: String,
}

/// Staging area for the correction table. Rules can be removed (case
/// insensitively) until `compile` consumes the builder; the compiled
/// `Corrector` is immutable, so late suppression is not expressible.
pub struct CorrectorBuilder {
    rules: BTreeMap<String, String>,
}

impl CorrectorBuilder {
    /// Seed the rule table from the embedded misspelling corpus.
    pub fn from_builtin_corpus() -> Self {
        Self {
            rules: corpus::rules().collect(),
        }
    }

    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Drop the rules for the given words. A removed rule never fires again
    /// for the lifetime of the compiled corrector, whatever the casing of the
    /// queried word.
    pub fn remove_rules<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.rules.remove(&word.as_ref().to_lowercase());
        }
    }

    pub fn compile(self) -> Result<Corrector, ScanError> {
        let mut builder = MapBuilder::memory();
        let mut suggestions = Vec::with_capacity(self.rules.len());

        // BTreeMap iterates in key order, which is what the fst builder needs.
        for (idx, (misspelling, correction)) in self.rules.into_iter().enumerate() {
            builder.insert(misspelling.as_bytes(), idx as u64)?;
            suggestions.push(correction);
        }

        Ok(Corrector {
            map: builder.into_map(),
            suggestions,
        })
    }
}

/// The compiled correction table. Lookup is case-insensitive; the corpus
/// stores rules in lowercase and the queried word's casing is mirrored onto
/// the suggestion.
pub struct Corrector {
    map: Map<Vec<u8>>,
    suggestions: Vec<String>,
}

impl Corrector {
    pub fn builder() -> CorrectorBuilder {
        CorrectorBuilder::from_builtin_corpus()
    }

    pub fn lookup(&self, word: &str) -> Option<Correction> {
        let folded = word.to_lowercase();
        let idx = self.map.get(folded.as_bytes())? as usize;

        Some(Correction {
            word: word.to_string(),
            suggestion: match_case(word, &self.suggestions[idx]),
        })
    }
}

/// Mirror the casing pattern of `original` onto `suggestion`: an uppercase
/// word stays uppercase, a capitalized word stays capitalized, everything
/// else keeps the corpus's lowercase form.
fn match_case(original: &str, suggestion: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(|c| c.is_uppercase());

    if first_upper && original.len() > 1 && chars.all(|c| !c.is_lowercase()) {
        suggestion.to_uppercase()
    } else if first_upper {
        let mut out = String::with_capacity(suggestion.len());
        let mut rest = suggestion.chars();
        if let Some(first) = rest.next() {
            out.extend(first.to_uppercase());
        }
        out.extend(rest);
        out
    } else {
        suggestion.to_string()
    }
}
