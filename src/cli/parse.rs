use super::CliFlags;
use crate::config::LanguageMode;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    InvalidLanguage(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::InvalidLanguage(s) => {
                write!(f, "Invalid language: {} (latin, cyrillic, both)", s)
            }
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-m" | "--mixed-case" => flags.mixed_case = true,
            "-s" | "--special" => flags.special = true,
            "-l" | "--length" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue("--length".to_string()));
                }
                flags.length = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            "--lang" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue("--lang".to_string()));
                }
                flags.language = Some(match args[i].as_str() {
                    "latin" => LanguageMode::Latin,
                    "cyrillic" => LanguageMode::Cyrillic,
                    "both" => LanguageMode::LatinAndCyrillic,
                    other => return Err(ParseError::InvalidLanguage(other.to_string())),
                });
            }
            "-d" | "--digits" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue("--digits".to_string()));
                }
                flags.digits = Some(args[i].clone());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}
