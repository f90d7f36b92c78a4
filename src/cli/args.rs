//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Command-line calculator: validated input parsing, four operators, smart result formatting
#[derive(Parser, Debug)]
#[command(name = "rscalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a single expression: A OP B
    Eval {
        /// First operand
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Operator: + - * / (or add, sub, mul, div; x also multiplies)
        #[arg(allow_hyphen_values = true)]
        op: String,

        /// Second operand
        #[arg(allow_hyphen_values = true)]
        b: String,
    },

    /// Read "A OP B" lines from stdin until EOF or "quit"
    Repl,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
