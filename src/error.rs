use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("reserved opcode {opcode:#04x} has no runtime implementation")]
    ReservedOpcode { opcode: u8 },
    #[error("opcode byte {opcode:#04x} does not name any instruction")]
    InvalidOpcode { opcode: u8 },
    #[error("instruction at {pc:#010x} reads past the end of the arena")]
    TruncatedInstruction { pc: u32 },
    #[error("illegal syscall selector {selector:#010x}")]
    IllegalSyscall { selector: u32 },
    #[error("process table is full ({cap} processes)")]
    ProcessTableFull { cap: usize },
    #[error("image body of {len} bytes exceeds MEMLIM ({limit} bytes)")]
    ImageTooLarge { len: usize, limit: u32 },
    #[error("no process at index {index}")]
    NoSuchProcess { index: usize },
}
