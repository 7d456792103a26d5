//! CLI front end: flag mode and interactive mode.

mod flags;
mod parse;
pub mod prompts;
mod quiet;

use std::time::Instant;

use tracing::info;
use zeroize::Zeroize;

pub use flags::CliFlags;
pub use parse::parse;

use crate::config::Config;
use crate::pass;
use crate::rng::OsRandom;

/// Run with command-line arguments; falls back to interactive prompts when
/// only the program name is present.
pub fn run(args: Vec<String>) {
    if args.len() <= 1 {
        let config = collect_interactive();
        generate_and_print(&config);
        return;
    }

    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(2);
        }
    };

    if flags.help {
        print_help();
        return;
    }
    if flags.version {
        println!("parolgen {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    quiet::set(flags.quiet);

    let config = match config_from_flags(&flags) {
        Ok(config) => config,
        Err(msg) => {
            prompts::error(&msg);
            std::process::exit(2);
        }
    };

    generate_and_print(&config);
}

/// Gather a validated configuration through the prompt loops.
fn collect_interactive() -> Config {
    let length = prompts::read_length();
    let language_mode = prompts::read_language_mode();
    let mixed_case = prompts::read_bool("Mix upper and lower case?");
    let special = prompts::read_bool("Include special characters?");
    let digits = prompts::read_mandatory_digits(length);

    // Prompts enforce every constraint the constructor checks.
    match Config::new(length, language_mode, mixed_case, special, digits) {
        Ok(config) => config,
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(2);
        }
    }
}

/// Build a configuration from flag mode; no re-prompting here, malformed
/// values are fatal.
fn config_from_flags(flags: &CliFlags) -> Result<Config, String> {
    let length = flags
        .length
        .ok_or_else(|| "Missing required flag: --length".to_string())?;

    let digits = match &flags.digits {
        Some(raw) => prompts::parse_digit_tokens(raw)
            .ok_or_else(|| format!("Invalid digits: {} (single digits 0-9)", raw))?,
        None => Vec::new(),
    };

    let language_mode = flags
        .language
        .unwrap_or(crate::config::LanguageMode::Latin);

    Config::new(length, language_mode, flags.mixed_case, flags.special, digits)
        .map_err(|e| e.to_string())
}

fn generate_and_print(config: &Config) {
    info!(
        length = config.length(),
        mode = ?config.language_mode(),
        mixed_case = config.mixed_case(),
        special = config.special_characters(),
        digits = config.mandatory_digits().len(),
        "generating password"
    );

    let start = Instant::now();
    let mut rng = OsRandom;

    match pass::generate(config, &mut rng) {
        Ok(mut password) => {
            let elapsed_ms = start.elapsed().as_millis();
            println!("{password}");
            password.zeroize();
            if !quiet::enabled() {
                println!(
                    "Generated {} character(s) in {}ms",
                    config.length(),
                    elapsed_ms
                );
            }
        }
        Err(e) => {
            prompts::error(&format!("Generation failed: {e}"));
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("parolgen - password generator with latin and cyrillic alphabets");
    println!();
    println!("Usage: parolgen [OPTIONS]");
    println!();
    println!("Run without arguments for interactive prompts.");
    println!();
    println!("Options:");
    println!("  -l, --length <N>     Password length (1-1000000), required in flag mode");
    println!("      --lang <MODE>    Alphabets: latin (default), cyrillic, both");
    println!("  -m, --mixed-case     Include uppercase variants");
    println!("  -s, --special        Include special characters");
    println!("  -d, --digits <LIST>  Mandatory digits, space-separated (e.g. \"1 2 3\")");
    println!("  -q, --quiet          Only print the password line");
    println!("  -h, --help           Show this help");
    println!("  -v, --version        Show version");
}
