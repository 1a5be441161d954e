//! Field rules, free of any form state.

use santa_list_types::{FieldId, Rejection};

/// Shortest accepted name, in characters, after trimming.
pub const NAME_MIN_LEN: usize = 5;

/// Longest accepted name, in characters, after trimming.
pub const NAME_MAX_LEN: usize = 50;

/// Longest run of one repeated character a name may contain.
pub const MAX_REPEATED_RUN: usize = 3;

/// Fewest gifts a visitor may bring.
pub const MIN_GIFTS: u64 = 5;

/// Checks a name or surname.
///
/// On the trimmed input:
/// - between 5 and 50 characters long,
/// - alphabetic characters only (no spaces, digits or punctuation),
/// - starts with an uppercase letter,
/// - no character repeated more than 3 times in a row.
pub fn valid_name(name: &str) -> bool {
    let name = name.trim();
    let len = name.chars().count();

    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len)
        && name.chars().all(char::is_alphabetic)
        && name.chars().next().is_some_and(char::is_uppercase)
        && !has_consecutive_duplicates(name)
}

/// True when some character repeats more than [`MAX_REPEATED_RUN`] times in a row.
///
/// Comparison is exact: `'A'` followed by `'a'` is not a repeat.
pub fn has_consecutive_duplicates(text: &str) -> bool {
    longest_run(text) > MAX_REPEATED_RUN
}

fn longest_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut previous = None;

    for c in text.chars() {
        run = if previous == Some(c) { run + 1 } else { 1 };
        previous = Some(c);
        longest = longest.max(run);
    }

    longest
}

/// Parses a count typed into `field`.
///
/// Surrounding whitespace is ignored. Anything that is not an integer in
/// `i64` range yields [`Rejection::NotAnInteger`]; a negative integer
/// yields [`Rejection::NegativeNumber`].
pub fn parse_count(field: FieldId, text: &str) -> Result<u64, Rejection> {
    match text.trim().parse::<i64>() {
        Ok(value) if value < 0 => Err(Rejection::NegativeNumber { field, value }),
        Ok(value) => Ok(value.unsigned_abs()),
        Err(_) => Err(Rejection::NotAnInteger { field }),
    }
}
