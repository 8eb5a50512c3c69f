//! Headless driver for [`mpvm::Supervisor`] (§10.4): loads the initial
//! image, runs ticks back to back, and periodically flushes the tty
//! buffer to a log file the way the original interactive frontend did.
//! An actual interactive display is out of scope here — the supervisor
//! primitives it would drive (`toggle_brk`, `restart`, `load_image`) are
//! already exposed on [`mpvm::Supervisor`] directly.

use mpvm::constants::LOGCNT;
use mpvm::{Supervisor, VmError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("reading \"{path}\" failed: {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: mpvm_obj::ObjError,
    },
    #[error("writing tty log \"{path}\" failed: {source}")]
    WriteLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Vm(#[from] VmError),
}

pub struct Options {
    /// Image to load as the first process; `None` with `suppress_initial_load`
    /// unset is a usage error the caller is expected to have already checked.
    pub input: Option<PathBuf>,
    pub suppress_initial_load: bool,
    pub tty_log: Option<PathBuf>,
}

/// Loads the initial image (unless suppressed) and runs ticks until every
/// process is blocked or exited, periodically flushing the tty buffer.
pub fn run(opts: &Options) -> Result<Supervisor, RunError> {
    let mut sup = Supervisor::new();

    if !opts.suppress_initial_load {
        if let Some(path) = &opts.input {
            load_image_file(&mut sup, path)?;
        }
    }

    let mut countdown = LOGCNT;
    while sup.process_count() > 0 && !all_halted(&sup) {
        sup.tick()?;

        if let Some(path) = &opts.tty_log {
            countdown -= 1;
            if countdown == 0 {
                countdown = LOGCNT;
                if !sup.tty().is_empty() {
                    flush_tty_log(&sup, path)?;
                }
            }
        }
    }

    Ok(sup)
}

fn all_halted(sup: &Supervisor) -> bool {
    (0..sup.process_count()).all(|i| sup.process(i).is_blocked())
}

fn load_image_file(sup: &mut Supervisor, path: &Path) -> Result<usize, RunError> {
    let image = mpvm_obj::read_file(path).map_err(|source| RunError::ReadImage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(sup.load_image(image.body())?)
}

fn flush_tty_log(sup: &Supervisor, path: &Path) -> Result<(), RunError> {
    let mut file = File::create(path).map_err(|source| RunError::WriteLog {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(sup.tty().snapshot())
        .map_err(|source| RunError::WriteLog {
            path: path.to_path_buf(),
            source,
        })
}
