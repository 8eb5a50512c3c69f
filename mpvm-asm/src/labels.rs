//! Label table and fixup list (§4.I). The table is a fixed 8,192-bucket
//! hash table keyed by a polynomial hash with multiplier 31, matching the
//! object format's own little-endian, fixed-width addressing. Fixups are
//! resolved in a single pass once the whole source (and its includes)
//! has been encoded.

use crate::error::Diagnostic;
use byteorder::{ByteOrder, LittleEndian};

pub const BUCKET_COUNT: usize = 8192;

fn hash(name: &str) -> usize {
    let mut h: u32 = 0;
    for byte in name.bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    (h as usize) % BUCKET_COUNT
}

/// `name -> output offset`, first definition wins.
pub struct LabelTable {
    buckets: Vec<Vec<(String, u32)>>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable {
            buckets: vec![Vec::new(); BUCKET_COUNT],
        }
    }

    /// Returns `false` if `name` was already defined; the existing entry
    /// is left untouched either way.
    pub fn define(&mut self, name: &str, offset: u32) -> bool {
        let bucket = &mut self.buckets[hash(name)];
        if bucket.iter().any(|(n, _)| n == name) {
            return false;
        }
        bucket.push((name.to_string(), offset));
        true
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.buckets[hash(name)]
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, offset)| *offset)
    }
}

impl Default for LabelTable {
    fn default() -> LabelTable {
        LabelTable::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixup {
    pub name: String,
    pub patch_offset: u32,
    pub line: u32,
}

/// Walks `fixups` once, patching each reference's four little-endian
/// bytes with the label's resolved offset. An unresolved name is a
/// diagnostic, not a panic; the bytes it would have patched are left as
/// the zero placeholder the encoder wrote.
pub fn resolve(
    bytes: &mut [u8],
    labels: &LabelTable,
    fixups: Vec<Fixup>,
    file: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for fixup in fixups {
        match labels.lookup(&fixup.name) {
            Some(offset) => {
                let at = fixup.patch_offset as usize;
                LittleEndian::write_u32(&mut bytes[at..at + 4], offset);
            }
            None => diagnostics.push(Diagnostic::new(
                file,
                fixup.line,
                format!("undefined label \"{}\"", fixup.name),
            )),
        }
    }
}
