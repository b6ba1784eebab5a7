//! Wordle Assist - CLI
//!
//! Interactive assistant, self-play solver, and opening-word power ranking
//! over a user-supplied dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_assist::{
    commands::{rank_dictionary, run_assist, solve_target},
    core::Word,
    output::{print_rank_table, print_solve_outcome},
    solver::Strategy,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Constraint-based Wordle assistant with worst-case power scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a newline-separated five-letter word dictionary
    #[arg(short = 'w', long, global = true, default_value = "dictionary5.txt")]
    wordlist: String,

    /// Strategy: power (default), exploit, explore
    #[arg(short, long, global = true, default_value = "power")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant mode (default)
    Assist,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank dictionary words by guaranteed worst-case elimination
    Rank {
        /// Number of top words to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary: Vec<Word> = load_from_file(&cli.wordlist)
        .with_context(|| format!("Failed to load dictionary from '{}'", cli.wordlist))?;

    if dictionary.is_empty() {
        anyhow::bail!("Dictionary '{}' contains no five-letter words", cli.wordlist);
    }

    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => run_assist(dictionary).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => {
            let strategy = Strategy::from_name(&cli.strategy);
            let mut rng = rand::rng();
            let outcome = solve_target(&word, dictionary, strategy, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_solve_outcome(&outcome, verbose);
            Ok(())
        }
        Commands::Rank { top } => {
            println!(
                "Scoring {} words against the full dictionary...",
                dictionary.len()
            );
            let entries = rank_dictionary(&dictionary, top);
            print_rank_table(&entries);
            Ok(())
        }
    }
}
