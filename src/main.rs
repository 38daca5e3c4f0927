mod cli;
mod config;
mod error;
mod install;
mod logging;
mod paths;
mod util;

use cli::{Cli, Failure};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = cli.run() {
        match Failure::from_error(&e) {
            Failure::Stdout(msg) => println!("{}", msg),
            Failure::Stderr(msg) => eprintln!("{}", msg),
        }
        std::process::exit(-1);
    }
}
