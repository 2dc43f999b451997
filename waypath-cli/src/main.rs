//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = waypath_cli::run() {
        eprintln!("waypath: {err}");
        std::process::exit(1);
    }
}
