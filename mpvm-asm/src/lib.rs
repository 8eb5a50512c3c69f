//! Assembler for the mpvm instruction set: a line-oriented lexer, a
//! two-pass label resolver, and an encoder driven by the same opcode
//! table the VM decodes against.

pub mod encoder;
pub mod error;
pub mod includes;
pub mod labels;
pub mod lexer;

pub use error::{Diagnostic, FatalError};

use includes::IncludeResolver;
use std::path::Path;

/// The result of one assembler invocation: the encoded object body plus
/// every diagnostic collected along the way. A non-empty `diagnostics`
/// means the caller should treat the run as failed, even though `bytes`
/// is always fully formed (zero-filled where a fixup went unresolved).
pub struct Assembly {
    pub bytes: Vec<u8>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub fn assemble(source: &str, file: &str) -> Assembly {
    assemble_with_resolver(source, file, &includes::FsIncludeResolver)
}

pub fn assemble_with_resolver(
    source: &str,
    file: &str,
    resolver: &dyn IncludeResolver,
) -> Assembly {
    let mut diagnostics = Vec::new();
    let tokens = includes::expand(source, file, resolver, &mut diagnostics);
    let mut result = encoder::encode(&tokens, file, &mut diagnostics);
    labels::resolve(&mut result.bytes, &result.labels, result.fixups, file, &mut diagnostics);
    Assembly { bytes: result.bytes, diagnostics }
}

pub fn assemble_file(path: &Path) -> Result<Assembly, FatalError> {
    let source = std::fs::read_to_string(path).map_err(|source| FatalError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(assemble(&source, &path.display().to_string()))
}
