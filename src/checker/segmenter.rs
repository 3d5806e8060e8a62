/// Character classes that delimit words inside an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Separator,
}

fn class_of(ch: char) -> CharClass {
    if ch.is_lowercase() {
        CharClass::Lower
    } else if ch.is_uppercase() {
        CharClass::Upper
    } else if ch.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Separator
    }
}

/// Split an identifier into its constituent words, preserving original casing.
///
/// Words break on case transitions (`camelCase`, `PascalCase`), digit/letter
/// boundaries, and explicit separators (`snake_case`, `kebab-case`). An
/// all-uppercase run is kept together as an acronym unless a lowercase
/// continuation follows, in which case the run's final letter opens the next
/// word: `parseJSONData` segments to `["parse", "JSON", "Data"]`.
///
/// Separator runs are dropped. A name with no internal boundaries comes back
/// as a single word; the empty string yields no words.
pub fn segment(name: &str) -> Vec<&str> {
    let mut runs: Vec<(usize, usize, CharClass)> = Vec::new();

    for (idx, ch) in name.char_indices() {
        let class = class_of(ch);
        let end = idx + ch.len_utf8();
        match runs.last_mut() {
            Some((_, run_end, run_class)) if *run_class == class && *run_end == idx => {
                *run_end = end;
            }
            _ => runs.push((idx, end, class)),
        }
    }

    // An uppercase run followed by a lowercase run donates its last letter to
    // the following word ("FOOBar" -> "FOO", "Bar").
    let mut words = Vec::new();
    let mut i = 0;
    while i < runs.len() {
        let (start, end, class) = runs[i];
        match class {
            CharClass::Separator => {}
            CharClass::Upper
                if i + 1 < runs.len()
                    && runs[i + 1].2 == CharClass::Lower
                    && runs[i + 1].0 == end =>
            {
                let split = last_char_boundary(name, start, end);
                if split > start {
                    words.push(&name[start..split]);
                }
                words.push(&name[split..runs[i + 1].1]);
                i += 2;
                continue;
            }
            _ => words.push(&name[start..end]),
        }
        i += 1;
    }

    words
}

/// Byte offset of the last character in `name[start..end]`.
fn last_char_boundary(name: &str, start: usize, end: usize) -> usize {
    name[start..end]
        .char_indices()
        .last()
        .map(|(i, _)| start + i)
        .unwrap_or(start)
}
