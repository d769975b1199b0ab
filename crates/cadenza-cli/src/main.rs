mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { file, output } => commands::build::run(file, output),
        Command::Check { file } => commands::check::run(file),
        Command::Ast { file, pretty } => commands::ast::run(file, pretty),
    }
}
