//! Password generation.

use tracing::debug;
use zeroize::Zeroize;

use super::charset;
use crate::config::Config;
use crate::rng::RandomSource;

#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// Characters remain to be drawn but no character class was selected.
    EmptyPool,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::EmptyPool => write!(f, "no character class selected"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generate a single password from an already-validated configuration.
///
/// Mandatory digits seed the buffer first, the remainder is drawn uniformly
/// from the pool with replacement, and a full Fisher-Yates pass de-biases
/// every position, seeded prefix included.
pub fn generate<R: RandomSource>(config: &Config, rng: &mut R) -> Result<String, GenerateError> {
    let pool = charset::build(config);

    let mut buffer: Vec<char> = Vec::with_capacity(config.length());
    buffer.extend(config.mandatory_digits().iter().copied());

    fill_from_pool(&pool, config.length(), rng, &mut buffer)?;
    shuffle(&mut buffer, rng);

    debug!(
        length = config.length(),
        pool_size = pool.len(),
        "password generated"
    );

    let password: String = buffer.iter().collect();
    buffer.zeroize();
    Ok(password)
}

/// Draw pool characters until `buffer` holds `length` of them.
///
/// Each draw is independent (sampling with replacement). Fails before the
/// first draw when the pool cannot supply the remaining characters.
fn fill_from_pool<R: RandomSource>(
    pool: &[char],
    length: usize,
    rng: &mut R,
    buffer: &mut Vec<char>,
) -> Result<(), GenerateError> {
    if pool.is_empty() && buffer.len() < length {
        return Err(GenerateError::EmptyPool);
    }

    while buffer.len() < length {
        buffer.push(pool[rng.next_below(pool.len())]);
    }

    Ok(())
}

/// Uniform in-place permutation over the whole buffer.
fn shuffle<R: RandomSource>(chars: &mut [char], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.next_below(i + 1);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LanguageMode};
    use crate::rng::{OsRandom, RandomSource};

    /// Replays a fixed list of draws; panics if a draw violates its bound or
    /// the script runs dry.
    struct ScriptedSource {
        draws: Vec<usize>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(draws: &[usize]) -> Self {
            Self {
                draws: draws.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_below(&mut self, n: usize) -> usize {
            let draw = self.draws[self.next];
            self.next += 1;
            assert!(draw < n, "scripted draw {} out of bound {}", draw, n);
            draw
        }
    }

    fn latin_config(length: usize, digits: Vec<char>) -> Config {
        Config::new(length, LanguageMode::Latin, false, false, digits).unwrap()
    }

    #[test]
    fn exact_output_with_identity_shuffle() {
        // Fill draws 2,0,4,1,3 over "abc..z" give "caebd"; the shuffle draws
        // j == i at every step, leaving the buffer untouched.
        let config = latin_config(5, vec![]);
        let mut rng = ScriptedSource::new(&[2, 0, 4, 1, 3, 4, 3, 2, 1]);
        assert_eq!(generate(&config, &mut rng).unwrap(), "caebd");
    }

    #[test]
    fn exact_output_with_swapping_shuffle() {
        // Seeded digit '7' plus fill draws 0,1 give "7ab"; shuffle swaps
        // (2,0) then (1,0), producing "ab7".
        let config = latin_config(3, vec!['7']);
        let mut rng = ScriptedSource::new(&[0, 1, 0, 0]);
        assert_eq!(generate(&config, &mut rng).unwrap(), "ab7");
    }

    #[test]
    fn output_length_matches_config() {
        let mut rng = OsRandom;
        for length in [2, 17, 500] {
            let config = Config::new(
                length,
                LanguageMode::LatinAndCyrillic,
                true,
                true,
                vec!['0', '9'],
            )
            .unwrap();
            let password = generate(&config, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn single_character_output_without_digits() {
        let mut rng = OsRandom;
        let config = Config::new(1, LanguageMode::LatinAndCyrillic, true, true, vec![]).unwrap();
        let password = generate(&config, &mut rng).unwrap();
        assert_eq!(password.chars().count(), 1);
    }

    #[test]
    fn mandatory_digits_appear_exactly_once_each() {
        let mut rng = OsRandom;
        let config = Config::new(
            40,
            LanguageMode::Latin,
            false,
            false,
            vec!['3', '3', '8'],
        )
        .unwrap();

        let password = generate(&config, &mut rng).unwrap();
        assert_eq!(password.chars().filter(|&c| c == '3').count(), 2);
        assert_eq!(password.chars().filter(|&c| c == '8').count(), 1);
        // Everything else must come from the latin lowercase pool.
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '3' || c == '8')
        );
    }

    #[test]
    fn digits_filling_whole_length_yield_a_permutation() {
        let mut rng = OsRandom;
        let config = latin_config(3, vec!['1', '2', '3']);
        let password = generate(&config, &mut rng).unwrap();

        let mut chars: Vec<char> = password.chars().collect();
        chars.sort_unstable();
        assert_eq!(chars, vec!['1', '2', '3']);
    }

    #[test]
    fn empty_pool_with_remaining_draws_fails() {
        let mut rng = OsRandom;
        let mut buffer = Vec::new();
        let err = fill_from_pool(&[], 1, &mut rng, &mut buffer).unwrap_err();
        assert_eq!(err, GenerateError::EmptyPool);
    }

    #[test]
    fn empty_pool_is_fine_when_buffer_is_already_full() {
        let mut rng = OsRandom;
        let mut buffer = vec!['1', '2'];
        assert!(fill_from_pool(&[], 2, &mut rng, &mut buffer).is_ok());
        assert_eq!(buffer, vec!['1', '2']);
    }

    #[test]
    fn cyrillic_output_draws_only_cyrillic() {
        let mut rng = OsRandom;
        let config = Config::new(200, LanguageMode::Cyrillic, true, false, vec![]).unwrap();
        let password = generate(&config, &mut rng).unwrap();
        assert!(password.chars().all(|c| ('а'..='я').contains(&c)
            || ('А'..='Я').contains(&c)
            || c == 'ё'
            || c == 'Ё'));
    }

    #[test]
    fn every_pool_character_eventually_appears() {
        // 10,000 draws over 26 characters; the odds of missing one are
        // vanishingly small.
        let mut rng = OsRandom;
        let config = latin_config(10_000, vec![]);
        let password = generate(&config, &mut rng).unwrap();
        for c in 'a'..='z' {
            assert!(password.contains(c), "character {:?} never drawn", c);
        }
    }

    #[test]
    fn seeded_digit_does_not_stay_in_front() {
        // The shuffle must move the seeded prefix around; 200 trials all
        // leaving '5' at position 0 would mean no shuffle happened.
        let mut rng = OsRandom;
        let config = latin_config(10, vec!['5']);
        let moved = (0..200).any(|_| {
            let password = generate(&config, &mut rng).unwrap();
            password.chars().next() != Some('5')
        });
        assert!(moved);
    }
}
