//! Character pool assembly for password generation.

use crate::config::Config;

const LOWERCASE_LATIN: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE_LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_CYRILLIC: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
const UPPERCASE_CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

/// Build the character pool from the selected classes.
///
/// Class order is fixed: Latin lower, Latin upper, Cyrillic lower, Cyrillic
/// upper, specials. Classes are never deduplicated against each other; a
/// character present in two classes is sampled with double weight.
pub fn build(config: &Config) -> Vec<char> {
    let mut pool: Vec<char> = Vec::new();

    if config.language_mode().includes_latin() {
        pool.extend(LOWERCASE_LATIN.chars());
        if config.mixed_case() {
            pool.extend(UPPERCASE_LATIN.chars());
        }
    }

    if config.language_mode().includes_cyrillic() {
        pool.extend(LOWERCASE_CYRILLIC.chars());
        if config.mixed_case() {
            pool.extend(UPPERCASE_CYRILLIC.chars());
        }
    }

    if config.special_characters() {
        pool.extend(SPECIAL_CHARACTERS.chars());
    }

    pool
}
