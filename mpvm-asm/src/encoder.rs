//! Encodes a token stream into opcode bytes per the instruction table
//! (§4.H). `.include` has already been expanded away by the time tokens
//! reach here, so the only directive-shaped thing left to reject is a
//! stray `Proc` token (an unknown directive the include expander didn't
//! recognize and passed through unresolved).

use crate::error::Diagnostic;
use crate::labels::{Fixup, LabelTable};
use crate::lexer::{LocatedToken, Token};
use byteorder::WriteBytesExt;
use mpvm::opcode::by_mnemonic;
use mpvm_util::Endian;

const CHUNK: usize = 8192;

fn reserve_chunk(buf: &mut Vec<u8>, additional: usize) {
    let spare = buf.capacity() - buf.len();
    if spare < additional {
        let short = additional - spare;
        let chunks = (short + CHUNK - 1) / CHUNK;
        buf.reserve(chunks * CHUNK);
    }
}

pub struct EncodeResult {
    pub bytes: Vec<u8>,
    pub labels: LabelTable,
    pub fixups: Vec<Fixup>,
}

pub fn encode(tokens: &[LocatedToken], file: &str, diagnostics: &mut Vec<Diagnostic>) -> EncodeResult {
    let mut bytes = Vec::new();
    let mut labels = LabelTable::new();
    let mut fixups = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let (token, line) = &tokens[i];
        match token {
            Token::Lbl(name) => {
                if !labels.define(name, bytes.len() as u32) {
                    diagnostics.push(Diagnostic::new(
                        file,
                        *line,
                        format!("label \"{}\" redefined, first definition kept", name),
                    ));
                }
                i += 1;
            }
            Token::Idnt(mnemonic) => {
                i += 1;
                match by_mnemonic(mnemonic) {
                    None => diagnostics.push(Diagnostic::new(
                        file,
                        *line,
                        format!("unknown mnemonic \"{}\"", mnemonic),
                    )),
                    Some((opcode, info)) => {
                        reserve_chunk(&mut bytes, 1 + info.format.len() * 4);
                        bytes.push(opcode);
                        for operand in info.format.chars() {
                            i = match operand {
                                'r' => encode_reg(tokens, i, file, &mut bytes, diagnostics),
                                'i' => encode_imm(tokens, i, file, &mut bytes, &mut fixups, diagnostics),
                                other => unreachable!("unknown operand kind '{}' in opcode table", other),
                            };
                        }
                    }
                }
            }
            Token::Reg(_) | Token::Addr(_) => {
                diagnostics.push(Diagnostic::new(
                    file,
                    *line,
                    "operand outside of an instruction",
                ));
                i += 1;
            }
            Token::Proc(text) => {
                diagnostics.push(Diagnostic::new(
                    file,
                    *line,
                    format!("unknown directive \".{}\"", text),
                ));
                i += 1;
            }
        }
    }

    EncodeResult { bytes, labels, fixups }
}

fn encode_reg(
    tokens: &[LocatedToken],
    i: usize,
    file: &str,
    bytes: &mut Vec<u8>,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    match tokens.get(i) {
        Some((Token::Reg(digits), line)) => {
            match u8::from_str_radix(digits, 16) {
                Ok(value) if value < 16 => bytes.push(value),
                Ok(value) => diagnostics.push(Diagnostic::new(
                    file,
                    *line,
                    format!("register %{:x} out of range (must be < 16)", value),
                )),
                Err(_) => diagnostics.push(Diagnostic::new(
                    file,
                    *line,
                    format!("invalid register digits \"{}\"", digits),
                )),
            }
            i + 1
        }
        Some((_, line)) => {
            diagnostics.push(Diagnostic::new(file, *line, "expected a register operand"));
            i + 1
        }
        None => {
            diagnostics.push(Diagnostic::new(file, 0, "expected a register operand, found end of input"));
            i
        }
    }
}

fn encode_imm(
    tokens: &[LocatedToken],
    i: usize,
    file: &str,
    bytes: &mut Vec<u8>,
    fixups: &mut Vec<Fixup>,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    match tokens.get(i) {
        Some((Token::Addr(digits), line)) => {
            match u32::from_str_radix(digits, 16) {
                Ok(value) => bytes.write_u32::<Endian>(value).expect("writing to a Vec<u8> cannot fail"),
                Err(_) => diagnostics.push(Diagnostic::new(
                    file,
                    *line,
                    format!("invalid immediate digits \"{}\"", digits),
                )),
            }
            i + 1
        }
        Some((Token::Idnt(name), line)) => {
            fixups.push(Fixup {
                name: name.clone(),
                patch_offset: bytes.len() as u32,
                line: *line,
            });
            bytes.extend_from_slice(&[0; 4]);
            i + 1
        }
        Some((_, line)) => {
            diagnostics.push(Diagnostic::new(file, *line, "expected an immediate or a label"));
            i + 1
        }
        None => {
            diagnostics.push(Diagnostic::new(file, 0, "expected an immediate operand, found end of input"));
            i
        }
    }
}
