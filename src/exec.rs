//! Per-opcode semantics (§4.E). Each arm mutates the owning process's
//! registers/PC and, for stores, the shared arena; `sys` additionally
//! reaches into the tty buffer.

use crate::arena::Arena;
use crate::constants::{BASE_REGISTER, LINK_REGISTER, SYSE, SYSW};
use crate::decode::{decode, Instruction};
use crate::error::VmError;
use crate::process::Process;
use crate::tty::TtyBuffer;

/// Decodes and executes one instruction for `process`, advancing its `pc`.
///
/// Returns `Err` for every runtime failure (§7); the caller (the
/// scheduler) decides whether a given error terminates only this process
/// or the whole supervisor.
pub fn step(process: &mut Process, arena: &mut Arena, tty: &mut TtyBuffer) -> Result<(), VmError> {
    let mut pc = process.pc;
    let instruction = decode(arena, &mut pc)?;
    process.pc = pc;

    let base = process.r[BASE_REGISTER as usize];

    use Instruction::*;
    match instruction {
        Lw { r, l } => {
            let addr = l.wrapping_add(4).wrapping_add(base);
            if (addr as usize) < arena.len() {
                process.r[r as usize] = arena.read_u32_zero_extended(addr as usize);
            }
        }
        Lb { r, l } => {
            let addr = l.wrapping_add(base);
            if (addr as usize) < arena.len() {
                process.r[r as usize] = arena.read_u8(addr as usize).unwrap_or(0) as u32;
            }
        }
        Li { r, l } => {
            process.r[r as usize] = l;
        }
        Sw { r, l } => {
            let addr = l.wrapping_add(base);
            grow_for_write(arena, addr, 4);
            arena.write_u32(addr as usize, process.r[r as usize]);
        }
        Sb { r, l } => {
            let addr = l.wrapping_add(base);
            let nmem = arena.len() as u32;
            if addr >= nmem {
                arena.grow_by(((addr - nmem) + 128) as usize);
            }
            arena.write_u8(addr as usize, process.r[r as usize] as u8);
        }
        Add { a, b, c } => {
            process.r[c as usize] = process.r[a as usize].wrapping_add(process.r[b as usize]);
        }
        Addi { a, l, b } => {
            process.r[b as usize] = process.r[a as usize].wrapping_add(l);
        }
        Ble { a, b, l } => {
            if process.r[a as usize] < process.r[b as usize] {
                branch(process, l);
            }
        }
        Bgt { a, b, l } => {
            if process.r[a as usize] > process.r[b as usize] {
                branch(process, l);
            }
        }
        Beq { a, b, l } => {
            if process.r[a as usize] == process.r[b as usize] {
                branch(process, l);
            }
        }
        Bne { a, b, l } => {
            if process.r[a as usize] != process.r[b as usize] {
                branch(process, l);
            }
        }
        J { l } => branch(process, l),
        Jr { r } => {
            process.pc = process.r[r as usize];
        }
        Jal { l } => {
            process.r[LINK_REGISTER as usize] = process.pc;
            branch(process, l);
        }
        Sys { r } => {
            let selector = process.r[r as usize];
            match selector {
                SYSE => process.set_exit(),
                SYSW => tty.push(process.r[1] as u8),
                other => return Err(VmError::IllegalSyscall { selector: other }),
            }
        }
        Lwu { .. } => return Err(VmError::ReservedOpcode { opcode: 1 }),
        Swu { .. } => return Err(VmError::ReservedOpcode { opcode: 5 }),
        Sr { .. } => return Err(VmError::ReservedOpcode { opcode: 7 }),
        Sub { .. } => return Err(VmError::ReservedOpcode { opcode: 10 }),
        Mul { .. } => return Err(VmError::ReservedOpcode { opcode: 11 }),
        Div { .. } => return Err(VmError::ReservedOpcode { opcode: 12 }),
    }

    Ok(())
}

fn branch(process: &mut Process, offset: u32) {
    process.pc = offset.wrapping_add(process.epc);
}

/// `sw`'s documented growth trigger (`addr > nmem`) is exact only up to the
/// `addr == nmem` boundary, where the write itself still needs four fresh
/// bytes; grow defensively to cover that gap without changing when growth
/// is *triggered*.
fn grow_for_write(arena: &mut Arena, addr: u32, width: u32) {
    let nmem = arena.len() as u32;
    if addr > nmem {
        arena.grow_by(((addr - nmem) + 4) as usize);
    }
    let needed_end = addr as usize + width as usize;
    if needed_end > arena.len() {
        arena.grow_by(needed_end - arena.len());
    }
}
