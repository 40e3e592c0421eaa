use clap::Parser;
use std::io;
use std::process;

use toolcheck::cli::Cli;
use toolcheck::console::Console;
use toolcheck::logging;
use toolcheck::runner::Runner;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log_level()) {
        eprintln!("failed to initialize logging: {}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let runner = Runner::with_default_checks(cli.config());
    if let Err(e) = runner.run(&mut console) {
        let _ = console.flush();
        eprintln!("{}", e);
        process::exit(1);
    }
}
