//! Line wrapping of captions drawn over the image.
//!
//! Wrapping is done by word count, not by width: the longer the longest word,
//! the fewer words go on one line.

use tracing::debug;

/// Words per line when no word is longer than [`SHORT_WORD`].
const WORDS_PER_LINE_SHORT: usize = 4;
/// Words per line when the longest word is at most [`MEDIUM_WORD`] long.
const WORDS_PER_LINE_MEDIUM: usize = 3;
/// Words per line for anything longer.
const WORDS_PER_LINE_LONG: usize = 3;

const SHORT_WORD: usize = 5;
const MEDIUM_WORD: usize = 8;

/// Trim `caption` and break it into lines.
///
/// Words are separated by a single space, except after every N-th word
/// (see [`cadence`]) which is followed by a newline. The last word keeps its
/// separator. Blank captions produce an empty string.
pub fn format_caption(caption: &str) -> String {
    let caption = caption.trim();

    if caption.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = caption.split(' ').collect();
    let n = cadence(&words);

    debug!(words = words.len(), cadence = n, "Wrapping caption.");

    let mut wrapped = String::with_capacity(caption.len() + 1);

    for (i, word) in words.iter().enumerate() {
        wrapped.push_str(word);
        wrapped.push(if (i + 1) % n == 0 { '\n' } else { ' ' });
    }

    wrapped
}

/// Number of words after which a line break goes, chosen by the length
/// (in characters) of the longest word.
pub fn cadence(words: &[&str]) -> usize {
    let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

    match longest {
        0..=SHORT_WORD => WORDS_PER_LINE_SHORT,
        l if l <= MEDIUM_WORD => WORDS_PER_LINE_MEDIUM,
        _ => WORDS_PER_LINE_LONG,
    }
}
