//! `.include 'path'` expansion (§4.J). Each `Proc` token produced by the
//! lexer is inspected here before the encoder ever sees it: `include`
//! directives are resolved and spliced in recursively, anything else is
//! left for the encoder to report as an unknown directive.

use crate::error::Diagnostic;
use crate::lexer::{self, LocatedToken, Token};

pub trait IncludeResolver {
    fn read(&self, path: &str) -> std::io::Result<String>;
}

pub struct FsIncludeResolver;

impl IncludeResolver for FsIncludeResolver {
    fn read(&self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Tokenizes `source` and transparently inlines every `.include`, so the
/// caller sees one flat stream as if everything had been written in a
/// single file. Cycles are not detected; a self-including file recurses
/// until the resolver itself gives up (e.g. a filesystem depth limit).
pub fn expand(
    source: &str,
    file: &str,
    resolver: &dyn IncludeResolver,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<LocatedToken> {
    let raw = lexer::tokenize(source, file, diagnostics);
    let mut out = Vec::with_capacity(raw.len());

    for (token, line) in raw {
        match token {
            Token::Proc(text) => match parse_include(&text) {
                Some(path) => match resolver.read(&path) {
                    Ok(contents) => out.extend(expand(&contents, &path, resolver, diagnostics)),
                    Err(err) => diagnostics.push(Diagnostic::new(
                        file,
                        line,
                        format!("cannot include \"{}\": {}", path, err),
                    )),
                },
                None => out.push((Token::Proc(text), line)),
            },
            other => out.push((other, line)),
        }
    }

    out
}

fn parse_include(directive: &str) -> Option<String> {
    let rest = directive.trim_start().strip_prefix("include")?;
    let rest = rest.trim_start().strip_prefix('\'')?;
    let end = rest.find('\'')?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
pub struct MemoryIncludeResolver(pub std::collections::HashMap<String, String>);

#[cfg(test)]
impl IncludeResolver for MemoryIncludeResolver {
    fn read(&self, path: &str) -> std::io::Result<String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()))
    }
}
