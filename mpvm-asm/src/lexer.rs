//! Line-oriented tokenizer (§4.G). Whitespace separates tokens, `;` runs a
//! comment to end of line, and the leading character decides the token
//! kind: `%` registers, `$` immediates, `.` directives, a letter starts an
//! identifier or label.

use crate::error::Diagnostic;

const MAX_PAYLOAD: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `%` followed by hex digits.
    Reg(String),
    /// `$` followed by hex digits.
    Addr(String),
    /// `.` followed by the rest of the line.
    Proc(String),
    /// A bare identifier.
    Idnt(String),
    /// An identifier followed immediately by `:`.
    Lbl(String),
}

pub type LocatedToken = (Token, u32);

fn truncate(mut s: String) -> String {
    if s.len() > MAX_PAYLOAD {
        s.truncate(MAX_PAYLOAD);
    }
    s
}

pub fn tokenize(source: &str, file: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<LocatedToken> {
    let mut tokens = Vec::new();

    for (line_index, line) in source.lines().enumerate() {
        let line_no = (line_index + 1) as u32;
        let mut chars = line.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            if c.is_whitespace() {
                continue;
            }
            if c == ';' {
                break;
            }
            match c {
                '%' => match lex_hex_run(&mut chars) {
                    Ok(digits) => tokens.push((Token::Reg(truncate(digits)), line_no)),
                    Err(()) => diagnostics.push(Diagnostic::new(
                        file,
                        line_no,
                        "expected hex digits after '%'",
                    )),
                },
                '$' => match lex_hex_run(&mut chars) {
                    Ok(digits) => tokens.push((Token::Addr(truncate(digits)), line_no)),
                    Err(()) => diagnostics.push(Diagnostic::new(
                        file,
                        line_no,
                        "expected hex digits after '$'",
                    )),
                },
                '.' => {
                    let rest: String = chars.by_ref().map(|(_, c)| c).collect();
                    tokens.push((Token::Proc(truncate(rest)), line_no));
                }
                c if c.is_ascii_alphabetic() => {
                    let mut name = String::new();
                    name.push(c);
                    while let Some(&(_, next)) = chars.peek() {
                        if next.is_ascii_alphanumeric() {
                            name.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if let Some(&(_, ':')) = chars.peek() {
                        chars.next();
                        tokens.push((Token::Lbl(truncate(name)), line_no));
                    } else {
                        tokens.push((Token::Idnt(truncate(name)), line_no));
                    }
                }
                _ => {
                    diagnostics.push(Diagnostic::new(
                        file,
                        line_no,
                        format!("unexpected character '{}'", c),
                    ));
                }
            }
        }
    }

    tokens
}

/// Consumes a (possibly empty) run of hex digits. Fails if the next
/// character exists and is neither a hex digit nor whitespace/comment.
fn lex_hex_run(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Result<String, ()> {
    if let Some(&(_, next)) = chars.peek() {
        if !next.is_ascii_hexdigit() && !next.is_whitespace() && next != ';' {
            return Err(());
        }
    }
    let mut digits = String::new();
    while let Some(&(_, next)) = chars.peek() {
        if next.is_ascii_hexdigit() {
            digits.push(next);
            chars.next();
        } else {
            break;
        }
    }
    Ok(digits)
}
