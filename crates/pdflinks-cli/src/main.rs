mod cli;
mod report_cmd;

use std::io::{self, IsTerminal};

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures; every other parse error
            // is a usage error with exit status 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    let config = cli.report_config();
    if let Err(code) = report_cmd::run(&cli.pdf_dir, &config) {
        std::process::exit(code);
    }
}
