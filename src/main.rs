//! Mills: a terminal nine men's morris game.
//!
//! ## Usage
//!
//! - `mills` - Start an interactive game
//! - `mills play` - Same as above
//! - `mills rules` - Print the rules and command reference

use clap::{Parser, Subcommand};

use mills::repl::{Repl, RULES};

/// Mills: nine men's morris in the terminal
#[derive(Parser)]
#[command(name = "mills")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive two-player game
    Play,
    /// Print the rules and command reference
    Rules,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Rules) => println!("{RULES}"),
        Some(Commands::Play) | None => {
            let mut repl = Repl::new();
            repl.run()?;
        }
    }

    Ok(())
}
