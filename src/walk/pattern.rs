//! Name pattern: a POSIX-style regular expression matched against raw entry
//! names.
//!
//! Matching is an unanchored search, like `regexec` in the C locale: every
//! byte is one character, so `.` and negated brackets match bytes that are
//! not valid UTF-8, and case folding is ASCII-only. Non-ASCII characters in
//! the pattern stand for their UTF-8 bytes. Both dialects are rewritten into
//! the `regex` crate's syntax before compilation:
//!
//! - **Extended** (default): passed through, except bracket expressions,
//!   which keep POSIX meaning (backslash is literal inside brackets).
//! - **Basic**: `\( \) \{ \} \| \+ \?` are operators and their bare forms are
//!   literals; `*` at the start of an expression is literal.
//!
//! Back-references have no equivalent and are rejected.

use regex::bytes::{Regex, RegexBuilder};

/// A compiled name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    /// Compiles `pattern` in the requested dialect.
    pub fn new(pattern: &str, case_sensitive: bool, basic: bool) -> Result<Self, regex::Error> {
        let translated = if basic {
            translate_basic(pattern)?
        } else {
            translate_extended(pattern)?
        };
        let regex = RegexBuilder::new(&translated)
            .unicode(false)
            .dot_matches_new_line(true)
            .case_insensitive(!case_sensitive)
            .build()?;
        Ok(Self { regex })
    }

    /// `true` if the pattern occurs anywhere in `name`.
    #[inline]
    pub fn matches(&self, name: &[u8]) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

fn syntax_error(msg: &str) -> regex::Error {
    regex::Error::Syntax(msg.to_owned())
}

/// Appends `c` as a literal: one byte escape per UTF-8 byte when it is not
/// ASCII.
fn push_literal(out: &mut String, c: char) {
    if c.is_ascii() {
        out.push(c);
    } else {
        let mut buf = [0u8; 4];
        for b in c.encode_utf8(&mut buf).bytes() {
            out.push_str(&format!("\\x{b:02X}"));
        }
    }
}

fn push_escaped(out: &mut String, c: char) {
    if c.is_ascii_punctuation() {
        out.push('\\');
    }
    push_literal(out, c);
}

/// Copies a bracket expression starting after its `[`, returning the index
/// just past its closing `]`.
fn translate_bracket(chars: &[char], mut i: usize, out: &mut String) -> Result<usize, regex::Error> {
    out.push('[');
    if chars.get(i) == Some(&'^') {
        out.push('^');
        i += 1;
    }
    // Set after a member that may start a range, cleared by a class or a
    // completed range.
    let mut range_start = false;
    // A range operator was just emitted; the next member is its end.
    let mut in_range = false;

    // A leading ']' is a literal member.
    if chars.get(i) == Some(&']') {
        out.push_str("\\]");
        range_start = true;
        i += 1;
    }
    while let Some(&c) = chars.get(i) {
        match c {
            ']' => {
                out.push(']');
                return Ok(i + 1);
            }
            '[' if matches!(chars.get(i + 1), Some(':')) => {
                // Character class name, copied through verbatim.
                let end = chars[i + 2..]
                    .windows(2)
                    .position(|w| w == [':', ']'])
                    .ok_or_else(|| syntax_error("unterminated character class"))?;
                let close = i + 2 + end + 2;
                out.extend(&chars[i..close]);
                i = close;
                range_start = false;
                in_range = false;
                continue;
            }
            '[' if matches!(chars.get(i + 1), Some('.') | Some('=')) => {
                // Collating symbol or equivalence class of one character.
                let delim = chars[i + 1];
                match (chars.get(i + 2), chars.get(i + 3), chars.get(i + 4)) {
                    (Some(&sym), Some(&d), Some(']')) if d == delim => {
                        push_escaped(out, sym);
                        i += 5;
                    }
                    _ => return Err(syntax_error("unsupported collating element")),
                }
            }
            // Range operator only between two members; a '-' first, last or
            // after a completed range is literal. Literal dashes are escaped
            // so "--" never reaches the engine as a set difference.
            '-' if range_start && !matches!(chars.get(i + 1), None | Some(']')) => {
                out.push('-');
                range_start = false;
                in_range = true;
                i += 1;
                continue;
            }
            _ => {
                push_escaped(out, c);
                i += 1;
            }
        }
        range_start = !in_range;
        in_range = false;
    }
    Err(syntax_error("unterminated bracket expression"))
}

fn translate_extended(pattern: &str) -> Result<String, regex::Error> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;
    while let Some(&c) = chars.get(i) {
        match c {
            '[' => i = translate_bracket(&chars, i + 1, &mut out)?,
            '\\' => {
                let Some(&next) = chars.get(i + 1) else {
                    return Err(syntax_error("trailing backslash"));
                };
                if next.is_ascii_digit() {
                    return Err(syntax_error("back-references are not supported"));
                }
                if next.is_ascii() {
                    out.push('\\');
                    out.push(next);
                } else {
                    push_literal(&mut out, next);
                }
                i += 2;
            }
            _ => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }
    Ok(out)
}

fn translate_basic(pattern: &str) -> Result<String, regex::Error> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    // A '*' here is literal: start of pattern, after "\(", "\|" or a leading '^'.
    let mut at_start = true;
    let mut i = 0;
    while let Some(&c) = chars.get(i) {
        let mut next_at_start = false;
        match c {
            '[' => i = translate_bracket(&chars, i + 1, &mut out)?,
            '\\' => {
                let Some(&next) = chars.get(i + 1) else {
                    return Err(syntax_error("trailing backslash"));
                };
                match next {
                    '(' | '|' => {
                        out.push(next);
                        next_at_start = true;
                    }
                    ')' | '{' | '}' | '+' | '?' => out.push(next),
                    d if d.is_ascii_digit() => {
                        return Err(syntax_error("back-references are not supported"));
                    }
                    n if n.is_ascii() => {
                        out.push('\\');
                        out.push(n);
                    }
                    n => push_literal(&mut out, n),
                }
                i += 2;
            }
            '(' | ')' | '{' | '}' | '|' | '+' | '?' => {
                push_escaped(&mut out, c);
                i += 1;
            }
            '*' if at_start => {
                out.push_str("\\*");
                i += 1;
            }
            '^' if at_start => {
                out.push('^');
                next_at_start = true;
                i += 1;
            }
            _ => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
        at_start = next_at_start;
    }
    Ok(out)
}
