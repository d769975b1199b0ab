use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cadenza", bin_name = "cadenza")]
#[command(about = "Compiler for Cadenza, an effect-typed language that targets C#")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a .cdz file to C#
    Build {
        /// Source file to compile
        file: PathBuf,

        /// Write the generated C# here instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Parse a .cdz file and report errors without generating C#
    Check {
        /// Source file to check
        file: PathBuf,
    },

    /// Parse a .cdz file and print its AST as JSON
    Ast {
        /// Source file to parse
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
