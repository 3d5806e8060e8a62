//! Built-in misspelling corpus, embedded at compile time.
//!
//! One rule per line, `misspelling correction`, both lowercase. Lines starting
//! with `#` are comments. The corpus only supplies the raw rule table; case
//! handling and suppression live in the corrector.

static CORPUS: &str = include_str!("misspellings.txt");

/// All correction rules in the embedded corpus.
pub fn rules() -> impl Iterator<Item = (String, String)> {
    CORPUS.lines().filter_map(parse_line)
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.split_whitespace();
    let misspelling = fields.next()?;
    let correction = fields.next()?;
    Some((misspelling.to_string(), correction.to_string()))
}
