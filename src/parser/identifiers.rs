use crate::{IdentKind, Identifier};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

lazy_static! {
    static ref IDENT: Regex = Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref KEYWORDS: HashSet<&'static str> = [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "_",
    ]
    .into_iter()
    .collect();
}

/// Lexical state carried across lines of one file.
enum Carry {
    Code,
    BlockComment(usize),
    Str { raw_hashes: Option<usize> },
}

/// Append every identifier occurrence in `content` to `out`, in source order.
///
/// This is a lexical pass, not a parse: comments and string literals are
/// stripped and the remaining tokens are classified from their leading
/// keyword (`fn`, `const`/`static`, `let`). Everything else, including type
/// names, module names, labels, and use-sites, lands in `Other`.
pub fn extract(content: &str, file: &Path, out: &mut Vec<Identifier>) {
    let mut carry = Carry::Code;
    let mut prev: Option<String> = None;
    let mut prev2: Option<String> = None;

    for (idx, line) in content.lines().enumerate() {
        let code = strip_line(line, &mut carry);

        for m in IDENT.find_iter(&code) {
            // an ident cannot start right after a digit ("0xFF" is one token)
            if m.start() > 0 && code.as_bytes()[m.start() - 1].is_ascii_digit() {
                continue;
            }

            let token = m.as_str();
            if !KEYWORDS.contains(token) {
                out.push(Identifier {
                    name: token.to_string(),
                    kind: classify(prev.as_deref(), prev2.as_deref()),
                    file: file.to_path_buf(),
                    line: idx + 1,
                });
            }

            prev2 = prev.take();
            prev = Some(token.to_string());
        }
    }
}

fn classify(prev: Option<&str>, prev2: Option<&str>) -> IdentKind {
    match prev {
        Some("fn") => IdentKind::Function,
        Some("const") | Some("static") => IdentKind::Constant,
        Some("let") => IdentKind::Variable,
        Some("mut") => match prev2 {
            Some("let") => IdentKind::Variable,
            Some("static") => IdentKind::Constant,
            _ => IdentKind::Other,
        },
        _ => IdentKind::Other,
    }
}

/// Rewrite one line with comments and literal contents blanked out, keeping
/// identifier tokens where they are.
fn strip_line(line: &str, carry: &mut Carry) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut code: Vec<char> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match *carry {
            Carry::BlockComment(depth) => {
                if chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
                    *carry = Carry::BlockComment(depth + 1);
                    code.extend([' ', ' ']);
                    i += 2;
                } else if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    *carry = if depth == 1 {
                        Carry::Code
                    } else {
                        Carry::BlockComment(depth - 1)
                    };
                    code.extend([' ', ' ']);
                    i += 2;
                } else {
                    code.push(' ');
                    i += 1;
                }
            }
            Carry::Str { raw_hashes: None } => {
                if chars[i] == '\\' {
                    code.push(' ');
                    if i + 1 < chars.len() {
                        code.push(' ');
                    }
                    i += 2;
                } else {
                    if chars[i] == '"' {
                        *carry = Carry::Code;
                    }
                    code.push(' ');
                    i += 1;
                }
            }
            Carry::Str {
                raw_hashes: Some(hashes),
            } => {
                if chars[i] == '"' && closes_raw(&chars, i + 1, hashes) {
                    for _ in 0..=hashes {
                        code.push(' ');
                    }
                    i += 1 + hashes;
                    *carry = Carry::Code;
                } else {
                    code.push(' ');
                    i += 1;
                }
            }
            Carry::Code => {
                let c = chars[i];
                if c == '/' && chars.get(i + 1) == Some(&'/') {
                    break;
                } else if c == '/' && chars.get(i + 1) == Some(&'*') {
                    *carry = Carry::BlockComment(1);
                    code.extend([' ', ' ']);
                    i += 2;
                } else if c == '"' {
                    enter_string(&mut code, carry, &chars, i);
                    code.push(' ');
                    i += 1;
                } else if c == '\'' {
                    i = lex_quote(&chars, i, &mut code);
                } else {
                    code.push(c);
                    i += 1;
                }
            }
        }
    }

    code.into_iter().collect()
}

/// Open a string literal at `quote`, blanking any `r`/`b`/`#` prefix already
/// copied to `code` so it never tokenizes.
fn enter_string(code: &mut Vec<char>, carry: &mut Carry, chars: &[char], quote: usize) {
    let mut j = quote;
    while j > 0 && chars[j - 1] == '#' {
        j -= 1;
    }
    let hashes = quote - j;

    let mut prefix = 0;
    let mut raw = false;
    if j > 0 && chars[j - 1] == 'r' {
        raw = true;
        prefix = 1;
        if j > 1 && chars[j - 2] == 'b' {
            prefix = 2;
        }
    } else if hashes == 0 && j > 0 && chars[j - 1] == 'b' {
        prefix = 1;
    }

    // a word character right before the prefix means those letters belong to
    // an ordinary token, not a literal prefix
    if prefix > 0 && j > prefix && is_word_char(chars[j - prefix - 1]) {
        prefix = 0;
        raw = false;
    }

    for k in 0..prefix {
        let pos = code.len() - 1 - hashes - k;
        code[pos] = ' ';
    }

    *carry = Carry::Str {
        raw_hashes: raw.then_some(hashes),
    };
}

fn closes_raw(chars: &[char], from: usize, hashes: usize) -> bool {
    (0..hashes).all(|k| chars.get(from + k) == Some(&'#'))
}

/// Handle a `'` in code position: a char literal is blanked entirely, a loop
/// label keeps its name visible (they are identifiers worth scanning), a
/// lifetime is blanked.
fn lex_quote(chars: &[char], quote: usize, code: &mut Vec<char>) -> usize {
    if chars.get(quote + 1) == Some(&'\\') {
        // skip the escaped character so '\'' finds the right closing quote
        let mut i = quote + 3;
        while i < chars.len() && chars[i] != '\'' {
            i += 1;
        }
        let end = (i + 1).min(chars.len());
        for _ in quote..end {
            code.push(' ');
        }
        return end;
    }

    if chars.get(quote + 1).is_some() && chars.get(quote + 2) == Some(&'\'') {
        code.extend([' ', ' ', ' ']);
        return quote + 3;
    }

    let mut end = quote + 1;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    let mut next = end;
    while next < chars.len() && chars[next].is_whitespace() {
        next += 1;
    }
    let label_decl = chars.get(next) == Some(&':');
    let label_use = preceded_by_jump_keyword(chars, quote);

    code.push(' ');
    if label_decl || label_use {
        code.extend(&chars[quote + 1..end]);
    } else {
        for _ in quote + 1..end {
            code.push(' ');
        }
    }
    end
}

fn preceded_by_jump_keyword(chars: &[char], quote: usize) -> bool {
    let mut j = quote;
    while j > 0 && chars[j - 1].is_whitespace() {
        j -= 1;
    }
    let end = j;
    while j > 0 && is_word_char(chars[j - 1]) {
        j -= 1;
    }
    let word: String = chars[j..end].iter().collect();
    word == "break" || word == "continue"
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
