//! shellrec - a line-oriented command shell with statement recording and replay.

use shellrec::app;
use shellrec::cli::Cli;

fn main() {
    let cli = Cli::parse_args();

    match app::run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    }
}
