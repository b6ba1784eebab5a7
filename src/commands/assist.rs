//! Interactive assistant mode
//!
//! Text-based loop: suggest a guess, collect the feedback the game gave, and
//! shrink the candidate list round by round.

use crate::core::{FeedbackRow, Word};
use crate::output::formatters::{feedback_tiles, word_tiles};
use crate::solver::{Session, Strategy};
use colored::Colorize;
use std::io::{self, Write as _};

/// Candidate lists up to this size are printed in full
const LIST_THRESHOLD: usize = 20;

/// Run the interactive assistant
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(dictionary: Vec<Word>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Assist - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each round, pick a suggestion source or type your own word:");
    println!("  1 - a word still consistent with all feedback (exploit)");
    println!("  2 - a fresh-letter probe word (explore)");
    println!("  3 - the word with the best guaranteed elimination (power)\n");
    println!("Then enter the feedback for each letter, e.g. XCIXX:");
    println!("  X - letter is not in the word");
    println!("  C - letter is at the correct position");
    println!("  I - letter is in the word, wrong position\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = Session::new(dictionary);
    let mut rng = rand::rng();
    let mut round = 1;

    loop {
        let remaining = session.candidates().len();

        if session.candidates().is_empty() {
            println!(
                "\n{}",
                "No dictionary word fits the feedback so far.".yellow()
            );
            println!("The answer may be missing from the dictionary. Type 'new' or 'quit'.\n");

            match read_input("Command")?.as_str() {
                "new" | "n" => {
                    session.reset();
                    round = 1;
                    println!("\nNew game started!\n");
                    continue;
                }
                "quit" | "q" | "exit" => return Ok(()),
                _ => continue,
            }
        }

        println!("────────────────────────────────────────────────────────────");
        println!("Round {round}: {remaining} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        if remaining <= LIST_THRESHOLD {
            for word in session.candidates().words() {
                println!("  {}", word_tiles(word));
            }
            println!();
        }

        // Choose the round's guess.
        let guess = loop {
            let input = read_input("Choose 1/2/3, type a word, or a command")?;

            let strategy = match input.as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "new" | "n" => {
                    session.reset();
                    round = 0; // Will be incremented below
                    break None;
                }
                "1" => Some(Strategy::Exploit),
                "2" => Some(Strategy::Explore),
                "3" => Some(Strategy::MaxPower),
                _ => None,
            };

            if let Some(strategy) = strategy {
                match session.suggest(strategy, &mut rng) {
                    Some(word) => break Some(word),
                    None => {
                        println!(
                            "{}",
                            "No word available for that strategy, try another.".yellow()
                        );
                    }
                }
            } else if input.len() > 1 {
                match Word::new(input.as_str()) {
                    Ok(word) => break Some(word),
                    Err(e) => println!("{}", format!("Invalid word: {e}").red()),
                }
            } else {
                println!("Invalid input, please try again!");
            }
        };

        let Some(guess) = guess else {
            round += 1;
            println!("\nNew game started!\n");
            continue;
        };

        println!("\nGuess: {}", word_tiles(&guess).bold());

        // Collect the round's feedback.
        let feedback = loop {
            let input = read_input("Feedback (XCI per letter, or a command)")?;

            match input.as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "new" | "n" => break None,
                _ => match FeedbackRow::parse(&input) {
                    Some(row) => break Some(row),
                    None => println!(
                        "{}",
                        "Need exactly five of X, C, or I (e.g. XCIXX).".red()
                    ),
                },
            }
        };

        let Some(feedback) = feedback else {
            session.reset();
            round = 1;
            println!("\nNew game started!\n");
            continue;
        };

        let outcome = session.apply_feedback(&guess, &feedback);
        println!("\n  {}", feedback_tiles(&guess, &feedback));

        if outcome.solved {
            println!(
                "\n{}",
                format!("Solved in {round} {}!", if round == 1 { "round" } else { "rounds" })
                    .green()
                    .bold()
            );

            match read_input("Play again? (yes/no)")?.as_str() {
                "yes" | "y" => {
                    session.reset();
                    round = 1;
                    println!("\nNew game started!\n");
                    continue;
                }
                _ => return Ok(()),
            }
        }

        round += 1;
    }
}

/// Read one trimmed, lowercased line of user input
fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_lowercase())
}
