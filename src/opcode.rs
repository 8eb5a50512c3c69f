//! The opcode table (§4.E, §4.H). This is the wire contract between the
//! assembler and the VM: the table index a mnemonic resolves to *is* the
//! opcode byte the decoder dispatches on, so the two sides share this one
//! declaration instead of keeping independent copies in sync by hand.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    Lw = 0,
    Lwu = 1,
    Lb = 2,
    Li = 3,
    Sw = 4,
    Swu = 5,
    Sb = 6,
    Sr = 7,
    Add = 8,
    Addi = 9,
    Sub = 10,
    Mul = 11,
    Div = 12,
    Ble = 13,
    Bgt = 14,
    Beq = 15,
    Bne = 16,
    J = 17,
    Jr = 18,
    Jal = 19,
    Sys = 20,
}

/// One row of the instruction table: mnemonic, operand format string
/// (`r` = one-byte register, `i` = four-byte little-endian immediate),
/// and whether the VM actually implements it (§4.E reserved slots).
pub struct OpcodeInfo {
    pub opcode: OpCode,
    pub mnemonic: &'static str,
    pub format: &'static str,
    pub implemented: bool,
}

pub const OPCODE_TABLE: [OpcodeInfo; 21] = [
    OpcodeInfo { opcode: OpCode::Lw, mnemonic: "lw", format: "ri", implemented: true },
    OpcodeInfo { opcode: OpCode::Lwu, mnemonic: "lwu", format: "ri", implemented: false },
    OpcodeInfo { opcode: OpCode::Lb, mnemonic: "lb", format: "ri", implemented: true },
    OpcodeInfo { opcode: OpCode::Li, mnemonic: "li", format: "ri", implemented: true },
    OpcodeInfo { opcode: OpCode::Sw, mnemonic: "sw", format: "ri", implemented: true },
    OpcodeInfo { opcode: OpCode::Swu, mnemonic: "swu", format: "ri", implemented: false },
    OpcodeInfo { opcode: OpCode::Sb, mnemonic: "sb", format: "ri", implemented: true },
    OpcodeInfo { opcode: OpCode::Sr, mnemonic: "sr", format: "ri", implemented: false },
    OpcodeInfo { opcode: OpCode::Add, mnemonic: "add", format: "rrr", implemented: true },
    OpcodeInfo { opcode: OpCode::Addi, mnemonic: "addi", format: "rir", implemented: true },
    OpcodeInfo { opcode: OpCode::Sub, mnemonic: "sub", format: "rrr", implemented: false },
    OpcodeInfo { opcode: OpCode::Mul, mnemonic: "mul", format: "rrr", implemented: false },
    OpcodeInfo { opcode: OpCode::Div, mnemonic: "div", format: "rrr", implemented: false },
    OpcodeInfo { opcode: OpCode::Ble, mnemonic: "ble", format: "rri", implemented: true },
    OpcodeInfo { opcode: OpCode::Bgt, mnemonic: "bgt", format: "rri", implemented: true },
    OpcodeInfo { opcode: OpCode::Beq, mnemonic: "beq", format: "rri", implemented: true },
    OpcodeInfo { opcode: OpCode::Bne, mnemonic: "bne", format: "rri", implemented: true },
    OpcodeInfo { opcode: OpCode::J, mnemonic: "j", format: "i", implemented: true },
    OpcodeInfo { opcode: OpCode::Jr, mnemonic: "jr", format: "r", implemented: true },
    OpcodeInfo { opcode: OpCode::Jal, mnemonic: "jal", format: "i", implemented: true },
    OpcodeInfo { opcode: OpCode::Sys, mnemonic: "sys", format: "r", implemented: true },
];

pub fn by_mnemonic(name: &str) -> Option<(u8, &'static OpcodeInfo)> {
    OPCODE_TABLE
        .iter()
        .position(|row| row.mnemonic == name)
        .map(|index| (index as u8, &OPCODE_TABLE[index]))
}

pub fn by_byte(byte: u8) -> Option<&'static OpcodeInfo> {
    OPCODE_TABLE.get(byte as usize)
}
