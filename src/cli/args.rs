//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Employee/manager hierarchies: reparenting, pre-order listings and roster files
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Roster file (default: `roster` from config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub roster: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show hierarchy as tree
    Tree,

    /// List a manager and all subordinates in pre-order
    List {
        /// Staff id of the manager to start from (default: every root)
        #[arg(long)]
        from: Option<i32>,
    },

    /// List direct reports of a manager
    Reports {
        /// Staff id of the manager
        id: i32,
    },

    /// Assign an employee to a manager
    Reassign {
        /// Staff id of the employee
        employee: i32,
        /// Staff id of the new manager
        manager: i32,
        /// Write the result back to the roster
        #[arg(short, long)]
        write: bool,
    },

    /// Remove an employee from a manager
    Release {
        /// Staff id of the employee
        employee: i32,
        /// Staff id of the manager
        manager: i32,
        /// Write the result back to the roster
        #[arg(short, long)]
        write: bool,
    },

    /// Count e/E characters in a text file
    Count {
        /// Text file (default: `count_input` from config)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
