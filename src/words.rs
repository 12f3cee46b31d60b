//! Reading whitespace-delimited word lists from files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads up to `max_words` whitespace-delimited words from the given file.
///
/// An empty file yields an empty vector; hitting the cap mid-file simply
/// stops reading. IO failures (including a missing file) propagate to the
/// caller, which is expected to report them and exit non-zero.
pub fn read_words(path: &Path, max_words: usize) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            if words.len() == max_words {
                return Ok(words);
            }
            words.push(token.to_owned());
        }
    }
    Ok(words)
}
