//! Diagnostics are accumulate-and-continue: a bad token or an unresolved
//! label doesn't abort the pass, it's recorded and assembly carries on so
//! a single invocation can report every problem in a source file at once.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn new(file: impl Into<String>, line: u32, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

/// Failures that stop assembly outright, as opposed to [`Diagnostic`]s,
/// which are collected and reported after the pass finishes.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    #[error("reading \"{path}\" failed: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("writing the object file failed: {0}")]
    Obj(#[from] mpvm_obj::ObjError),
}
