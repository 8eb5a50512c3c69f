pub mod arena;
pub mod constants;
pub mod decode;
pub mod error;
pub mod exec;
pub mod opcode;
pub mod process;
pub mod scheduler;
pub mod tty;

pub use error::VmError;
pub use scheduler::Supervisor;
