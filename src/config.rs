//! Password generation parameters.

/// Hard cap on password length, guarding against resource exhaustion.
pub const MAX_LENGTH: usize = 1_000_000;

/// Which alphabet(s) contribute to the character pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMode {
    Latin,
    Cyrillic,
    LatinAndCyrillic,
}

impl LanguageMode {
    /// Map the CLI's numeric choice (1-3) to a mode.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(LanguageMode::Latin),
            2 => Some(LanguageMode::Cyrillic),
            3 => Some(LanguageMode::LatinAndCyrillic),
            _ => None,
        }
    }

    pub fn includes_latin(self) -> bool {
        matches!(self, LanguageMode::Latin | LanguageMode::LatinAndCyrillic)
    }

    pub fn includes_cyrillic(self) -> bool {
        matches!(self, LanguageMode::Cyrillic | LanguageMode::LatinAndCyrillic)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Length is zero or exceeds [`MAX_LENGTH`].
    LengthOutOfRange(usize),
    /// More mandatory digits than the password has room for.
    TooManyMandatoryDigits { digits: usize, length: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LengthOutOfRange(len) => {
                write!(f, "length {} out of range (1..={})", len, MAX_LENGTH)
            }
            ConfigError::TooManyMandatoryDigits { digits, length } => {
                write!(
                    f,
                    "{} mandatory digit(s) exceed password length {}",
                    digits, length
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable generation request. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    length: usize,
    language_mode: LanguageMode,
    mixed_case: bool,
    special_characters: bool,
    mandatory_digits: Vec<char>,
}

impl Config {
    /// Validates the length cap and the mandatory-digit count; everything
    /// else is stored unchanged.
    pub fn new(
        length: usize,
        language_mode: LanguageMode,
        mixed_case: bool,
        special_characters: bool,
        mandatory_digits: Vec<char>,
    ) -> Result<Self, ConfigError> {
        if length == 0 || length > MAX_LENGTH {
            return Err(ConfigError::LengthOutOfRange(length));
        }
        if mandatory_digits.len() > length {
            return Err(ConfigError::TooManyMandatoryDigits {
                digits: mandatory_digits.len(),
                length,
            });
        }

        Ok(Self {
            length,
            language_mode,
            mixed_case,
            special_characters,
            mandatory_digits,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn language_mode(&self) -> LanguageMode {
        self.language_mode
    }

    pub fn mixed_case(&self) -> bool {
        self.mixed_case
    }

    pub fn special_characters(&self) -> bool {
        self.special_characters
    }

    pub fn mandatory_digits(&self) -> &[char] {
        &self.mandatory_digits
    }
}
