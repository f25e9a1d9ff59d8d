use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use wordle_engine::{
    ConstraintStore, Game, GameStatus, GuessRecord, LetterKnowledge, WordList,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH,
};

/// Play a game of Wordle in the terminal against the engine.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to the solutions word list, one word per line.
    #[clap(short, long)]
    solutions: String,

    /// Path to the acceptable-guesses word list. Must contain every word in
    /// the solutions list.
    #[clap(short, long)]
    guesses: String,

    /// Maximum number of attempts per game.
    #[clap(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let solutions = WordList::from_reader(
        BufReader::new(File::open(&args.solutions)?),
        DEFAULT_WORD_LENGTH,
    )?;
    let guesses = WordList::from_reader(
        BufReader::new(File::open(&args.guesses)?),
        DEFAULT_WORD_LENGTH,
    )?;
    println!(
        "Loaded {} solutions and {} acceptable guesses.",
        solutions.len(),
        guesses.len()
    );

    let mut game = Game::new(&solutions, &guesses, args.attempts)?;
    println!("Guess the {}-letter word. Enter '?' for a suggestion.", game.word_length());

    let stdin = io::stdin();
    loop {
        print!("[{}/{}] > ", game.attempt() + 1, game.max_attempts());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        let input = line.trim().to_lowercase();
        if input.is_empty() {
            continue;
        }
        if input == "?" {
            match game.suggest() {
                Some(word) => println!("Try '{}'.", word),
                None => println!("No solution word is consistent with the board."),
            }
            continue;
        }

        match game.submit_guess(&input) {
            Ok(record) => {
                print_feedback(&record);
                print_alphabet(game.constraints());
            }
            Err(err) => {
                println!("{}", err);
                continue;
            }
        }

        match game.status() {
            GameStatus::Won => {
                println!("You won in {} guesses!", game.attempt());
                return Ok(());
            }
            GameStatus::Lost => {
                println!("Out of guesses. The word was '{}'.", game.solution());
                return Ok(());
            }
            GameStatus::Ongoing => {}
        }
    }
}

/// Prints the scored guess: '=' exact, '~' present elsewhere, '.' absent.
fn print_feedback(record: &GuessRecord) {
    println!("  {}", record);
}

/// Prints the alphabet key: known-present letters upper case, known-absent
/// letters replaced by '.', everything else lower case.
fn print_alphabet(constraints: &ConstraintStore) {
    let mut key = String::with_capacity(26);
    for letter in 'a'..='z' {
        match constraints.knowledge(letter) {
            LetterKnowledge::Present => key.push(letter.to_ascii_uppercase()),
            LetterKnowledge::Absent => key.push('.'),
            LetterKnowledge::Unknown => key.push(letter),
        }
    }
    println!("  [{}]", key);
}
