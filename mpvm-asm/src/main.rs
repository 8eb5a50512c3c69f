#[macro_use]
extern crate clap;

use clap::Arg;
use mpvm_asm::{Assembly, FatalError};
use std::path::{Path, PathBuf};
use std::process::exit;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Assembly source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUT")
                .help("Object file to write (default: a)"),
        )
        .get_matches();

    let input = Path::new(matches.value_of("INPUT").unwrap());
    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("a"));

    let assembly = match assemble_and_write(input, &output) {
        Ok(assembly) => assembly,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };

    for diagnostic in &assembly.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if !assembly.is_ok() {
        exit(1);
    }
}

/// Assembles `input` and, if it produced no diagnostics, writes the result
/// to `output`. Both the read and the write path report through the same
/// error type so `main` has one place to format a fatal failure.
fn assemble_and_write(input: &Path, output: &Path) -> Result<Assembly, FatalError> {
    let assembly = mpvm_asm::assemble_file(input)?;
    if assembly.is_ok() {
        let image = mpvm_obj::Image::new(assembly.bytes.clone());
        mpvm_obj::write_file(output, &image)?;
    }
    Ok(assembly)
}
