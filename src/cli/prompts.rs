//! Interactive prompt loops and CLI messages.
//!
//! Every prompt re-asks until the input is valid, so the generator only ever
//! sees fully validated values.

use std::io::Write;

use tracing::info;

use crate::config::{LanguageMode, MAX_LENGTH};

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Read one line from stdin; exits with code 1 on EOF or read failure.
fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = std::io::stdout().flush();

    let mut input = String::new();
    match std::io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            error("Input closed, aborting.");
            std::process::exit(1);
        }
        Ok(_) => input.trim().to_string(),
    }
}

/// Ask for the password length until a value in 1..=1,000,000 is given.
pub fn read_length() -> usize {
    loop {
        let input = read_line(&format!("Password length (1-{}): ", MAX_LENGTH));
        match input.parse::<usize>() {
            Ok(len) if (1..=MAX_LENGTH).contains(&len) => {
                info!(length = len, "length received");
                return len;
            }
            Ok(_) | Err(_) => warn(&format!("Enter a number between 1 and {}.", MAX_LENGTH)),
        }
    }
}

/// Ask for the alphabet choice until one of 1/2/3 is given.
pub fn read_language_mode() -> LanguageMode {
    loop {
        let input = read_line("Alphabets (1 - latin, 2 - cyrillic, 3 - both): ");
        if let Some(mode) = input.parse::<u8>().ok().and_then(LanguageMode::from_choice) {
            info!(?mode, "language mode received");
            return mode;
        }
        warn("Enter 1, 2 or 3.");
    }
}

/// Ask a yes/no question until the answer is recognizable.
pub fn read_bool(prompt: &str) -> bool {
    loop {
        let input = read_line(&format!("{prompt} (y/n): ")).to_lowercase();
        match input.as_str() {
            "y" | "yes" | "true" => return true,
            "n" | "no" | "false" => return false,
            _ => warn("Enter 'y' or 'n'."),
        }
    }
}

/// Ask for mandatory digits until every token is a single digit and the
/// count fits the chosen length. Empty input means none.
pub fn read_mandatory_digits(length: usize) -> Vec<char> {
    loop {
        let input = read_line("Mandatory digits, space-separated (empty for none): ");
        match parse_digit_tokens(&input) {
            Some(digits) if digits.len() > length => {
                warn(&format!(
                    "{} digit(s) do not fit in a password of length {}.",
                    digits.len(),
                    length
                ));
            }
            Some(digits) => {
                info!(count = digits.len(), "mandatory digits received");
                return digits;
            }
            None => warn("Each token must be a single digit 0-9."),
        }
    }
}

/// Split a whitespace-separated digit list; `None` when any token is not a
/// single ASCII digit.
pub fn parse_digit_tokens(input: &str) -> Option<Vec<char>> {
    let mut digits = Vec::new();
    for token in input.split_whitespace() {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => digits.push(c),
            _ => return None,
        }
    }
    Some(digits)
}
