use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Asn { script } => cmd::asn::run(&script),
        Command::Geom { script } => cmd::geom::run(&script),
        Command::Pgm { file } => cmd::pgm::run(&file),
        Command::Version => {
            println!("{}", dimgen_core::version());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
