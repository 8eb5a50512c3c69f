//! The supervisor: owns the shared arena, the process table, and the tty
//! buffer, and drives the cooperative round-robin scheduler (§4.F). Also
//! exposes the primitives an interactive frontend would call (§10.4).

use crate::arena::Arena;
use crate::constants::{MEMLIM, PROCESS_TABLE_CAP, SCHCNT};
use crate::error::VmError;
use crate::exec;
use crate::process::Process;
use crate::tty::TtyBuffer;

pub struct Supervisor {
    arena: Arena,
    processes: Vec<Process>,
    tty: TtyBuffer,
}

impl Supervisor {
    pub fn new() -> Supervisor {
        Supervisor {
            arena: Arena::new(),
            processes: Vec::new(),
            tty: TtyBuffer::new(),
        }
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn process(&self, index: usize) -> &Process {
        &self.processes[index]
    }

    pub fn tty(&self) -> &TtyBuffer {
        &self.tty
    }

    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    pub fn arena_byte(&self, addr: usize) -> Option<u8> {
        self.arena.read_u8(addr)
    }

    /// Appends `body` to the arena as a new process image (§4.A).
    pub fn load_image(&mut self, body: &[u8]) -> Result<usize, VmError> {
        if body.len() as u32 > MEMLIM {
            return Err(VmError::ImageTooLarge {
                len: body.len(),
                limit: MEMLIM,
            });
        }
        if self.processes.len() >= PROCESS_TABLE_CAP {
            return Err(VmError::ProcessTableFull {
                cap: PROCESS_TABLE_CAP,
            });
        }
        let epc = self.arena.append(body) as u32;
        self.processes.push(Process::new(epc));
        let index = self.processes.len() - 1;
        tracing::info!(index, epc, len = body.len(), "loaded image");
        Ok(index)
    }

    pub fn toggle_brk(&mut self, index: usize) -> Result<(), VmError> {
        self.processes
            .get_mut(index)
            .ok_or(VmError::NoSuchProcess { index })?
            .toggle_brk();
        Ok(())
    }

    pub fn restart(&mut self, index: usize) -> Result<(), VmError> {
        self.processes
            .get_mut(index)
            .ok_or(VmError::NoSuchProcess { index })?
            .restart();
        Ok(())
    }

    /// One scheduler tick: every non-blocked process runs up to `SCHCNT`
    /// instructions in insertion order (§4.F). An illegal syscall aborts
    /// the whole tick immediately, matching the original's fatal exit; any
    /// other runtime fault only terminates the offending process.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self) -> Result<(), VmError> {
        for index in 0..self.processes.len() {
            if self.processes[index].is_blocked() {
                continue;
            }

            let mut quantum = SCHCNT;
            while quantum > 0 && !self.processes[index].is_blocked() {
                quantum -= 1;
                let process = &mut self.processes[index];
                match exec::step(process, &mut self.arena, &mut self.tty) {
                    Ok(()) => {}
                    Err(VmError::IllegalSyscall { selector }) => {
                        tracing::error!(index, selector, "illegal syscall, aborting supervisor");
                        return Err(VmError::IllegalSyscall { selector });
                    }
                    Err(other) => {
                        tracing::error!(index, error = %other, "fatal instruction fault, terminating process");
                        self.processes[index].set_exit();
                    }
                }
            }

            if self.processes[index].is_blocked() {
                tracing::debug!(index, stat = self.processes[index].stat, "process blocked");
            }
        }
        Ok(())
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Supervisor::new()
    }
}
