#[macro_use]
extern crate clap;

use clap::Arg;
use mpvm_ctl::Options;
use std::path::PathBuf;
use std::process::exit;

fn main() {
    tracing_subscriber::fmt::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Object file to load as the first process")
                .index(1),
        )
        .arg(
            Arg::with_name("no_initial_load")
                .short("n")
                .help("Start with no processes loaded"),
        )
        .arg(
            Arg::with_name("tty_log")
                .short("t")
                .takes_value(true)
                .value_name("TTYFILE")
                .help("Periodically write the tty buffer to this file"),
        )
        .get_matches();

    let suppress_initial_load = matches.is_present("no_initial_load");
    let input = matches.value_of("INPUT").map(PathBuf::from);

    if !suppress_initial_load && input.is_none() {
        eprintln!("vm: an INPUT image is required unless -n is given");
        exit(1);
    }

    let opts = Options {
        input,
        suppress_initial_load,
        tty_log: matches.value_of("tty_log").map(PathBuf::from),
    };

    if let Err(err) = mpvm_ctl::run(&opts) {
        eprintln!("vm: {}", err);
        exit(1);
    }
}
