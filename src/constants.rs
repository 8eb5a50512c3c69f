//! Named constants lifted from the original fixed-header configuration:
//! there is no config file in this system, only these and the CLI flags
//! in the `mpvm-ctl` binary.

/// Per-image body size ceiling enforced by the loader, mirrored from
/// [`mpvm_obj::MEMLIM`]. Growth past this at *runtime* (via `sw`/`sb`) is
/// permitted; only load-time images are bounded.
pub const MEMLIM: u32 = 0x000F_F000;

/// Instructions a process may run per scheduler tick before yielding.
pub const SCHCNT: u32 = 300;

/// Tick interval at which the optional tty log file is rewritten.
pub const LOGCNT: u32 = 50;

/// Capacity of the in-memory tty ring buffer.
pub const TTY_SIZE: usize = 8192;

/// Maximum number of processes the supervisor will ever hold.
pub const PROCESS_TABLE_CAP: usize = 4096;

/// Register count per process.
pub const REGISTER_COUNT: usize = 16;

/// Register implicitly written by `jal` with the return address.
pub const LINK_REGISTER: u8 = 3;

/// Register implicitly added as the base of every load/store address.
pub const BASE_REGISTER: u8 = 8;

/// `sys` syscall numbers, selected via `r[0]` by convention (§9).
pub const SYSE: u32 = 0;
pub const SYSP: u32 = 1;
pub const SYSW: u32 = 2;

/// `stat` bit flags on a process record.
pub const STAT_EXIT: u8 = 1 << 1;
pub const STAT_BRK: u8 = 1 << 2;
