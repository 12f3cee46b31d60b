//! A toy spell checker that exists to show off tree shapes: it loads a
//! dictionary into an unbalanced BST using a chosen insertion order, reports
//! the resulting shape, then times membership lookups for a second word list.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use minispell::order;
use minispell::set::StringSet;
use minispell::words::read_words;

const DICT_FILE: &str = "/home/student/data/smalldict.words";
const CHECK_FILE: &str = "/home/student/data/ispell.words";

#[derive(Parser)]
#[command(about = "Times BST insertion and lookup under different insertion orders")]
struct Cli {
    /// Insert words in the order they appear (default).
    #[arg(short = 'f', long = "file-order", group = "order")]
    file_order: bool,

    /// Insert words in a random order.
    #[arg(short = 's', long = "shuffled-order", group = "order")]
    shuffled_order: bool,

    /// Insert words in a balanced order.
    #[arg(short = 'b', long = "balanced-order", group = "order")]
    balanced_order: bool,

    /// Number of words to read from the dictionary.
    #[arg(short = 'n', long = "num-dict-words", value_name = "N")]
    num_dict_words: Option<usize>,

    /// Number of words to check for spelling.
    #[arg(short = 'm', long = "num-check-words", value_name = "N")]
    num_check_words: Option<usize>,

    /// Use a different dictionary file.
    #[arg(short = 'd', long = "dict-file", default_value = DICT_FILE)]
    dict_file: PathBuf,

    /// File whose words are looked up in the dictionary.
    #[arg(default_value = CHECK_FILE)]
    check_file: PathBuf,
}

enum InsertionOrder {
    AsRead,
    Shuffled,
    Balanced,
}

impl Cli {
    fn insertion_order(&self) -> InsertionOrder {
        // The flags are mutually exclusive (clap enforces the group), with
        // as-read as the default.
        match (self.file_order, self.shuffled_order, self.balanced_order) {
            (_, true, _) => InsertionOrder::Shuffled,
            (_, _, true) => InsertionOrder::Balanced,
            _ => InsertionOrder::AsRead,
        }
    }
}

/// Reads a word list, narrating progress on stderr like every other step.
fn read_words_from(path: &Path, max_words: Option<usize>) -> anyhow::Result<Vec<String>> {
    eprint!("Reading words from {}...", path.display());
    let words = read_words(path, max_words.unwrap_or(usize::MAX))
        .with_context(|| format!("error reading '{}'", path.display()))?;
    eprintln!(" done!");
    Ok(words)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let words = read_words_from(&cli.dict_file, cli.num_dict_words)?;

    // Build the search tree (and time how long that takes).
    let mut dict = StringSet::new();
    eprint!("Inserting into dictionary ");
    let start = Instant::now();
    match cli.insertion_order() {
        InsertionOrder::AsRead => {
            eprint!("(in order read)...");
            order::insert_as_read(&mut dict, words);
        }
        InsertionOrder::Shuffled => {
            eprint!("(in shuffled order)...");
            order::insert_shuffled(&mut dict, words, &mut rand::thread_rng());
        }
        InsertionOrder::Balanced => {
            eprint!("(in perfect-balance order)...");
            order::insert_balanced(&mut dict, words);
        }
    }
    let insertion_time = start.elapsed();
    eprintln!(" done!");

    println!(" - insertion took {:.6} seconds", insertion_time.as_secs_f64());
    print!(" - ");
    dict.show_statistics(&mut io::stdout())?;
    if let Some(median) = dict.select(dict.len() / 2) {
        println!(" - median word in dictionary: '{}'", median);
    }
    println!();

    // Look the check words up in the dictionary (and time that too).
    let check_words = read_words_from(&cli.check_file, cli.num_check_words)?;
    eprint!("Looking up these words in the dictionary...");
    let start = Instant::now();
    let in_dict = check_words
        .iter()
        .filter(|word| dict.contains(word.as_str()))
        .count();
    let lookup_time = start.elapsed();
    eprintln!(" done!");

    println!(" - looking up took {:.6} seconds", lookup_time.as_secs_f64());
    println!(" - {} words read, {} in dictionary", check_words.len(), in_dict);
    println!();

    Ok(())
}
