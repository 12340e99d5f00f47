use std::collections::HashMap;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use zeroize::Zeroize;

use passgen::charset;
use passgen::error::{Error, Result};
use passgen::password_generator::{self, GenerationConfig};
use passgen::settings;
use passgen::strength;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate secure random passwords", long_about = None)]
struct Args {
    /// Password length
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Exclude lowercase letters
    #[arg(long)]
    no_lowercase: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    no_uppercase: bool,

    /// Exclude digits
    #[arg(long)]
    no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    no_symbols: bool,

    /// Generate from an explicit character set instead of classes
    #[arg(long, value_name = "CHARS", conflicts_with = "charset")]
    custom: Option<String>,

    /// Generate from a predefined character set (run with an unknown name
    /// to list them)
    #[arg(long, value_name = "NAME")]
    charset: Option<String>,

    /// Generate using a named profile
    #[arg(long, value_name = "NAME", conflicts_with_all = ["custom", "charset"])]
    profile: Option<String>,

    /// TOML file with additional profiles, looked up before the built-ins
    #[arg(long, value_name = "PATH")]
    profiles_file: Option<PathBuf>,

    /// Print a strength rating next to each password
    #[arg(long)]
    strength: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let passwords = generate_passwords(args)?;

    for mut password in passwords {
        if args.strength {
            let report = strength::estimate_strength(&password);
            println!(
                "{password}  [{} {}/{}]",
                report.category,
                report.score,
                strength::MAX_SCORE
            );
        } else {
            println!("{password}");
        }
        password.zeroize();
    }
    Ok(())
}

fn generate_passwords(args: &Args) -> Result<Vec<String>> {
    if let Some(name) = &args.profile {
        let user_profiles = match &args.profiles_file {
            Some(path) => settings::load_profiles(path)?,
            None => HashMap::new(),
        };
        return match user_profiles.get(name) {
            Some(config) => password_generator::generate_many(config, args.count),
            None => (0..args.count)
                .map(|_| password_generator::generate_with_profile(name))
                .collect(),
        };
    }

    if let Some(chars) = &args.custom {
        return (0..args.count)
            .map(|_| password_generator::generate_with_custom_charset(args.length, chars))
            .collect();
    }

    if let Some(name) = &args.charset {
        let chars = charset::named_charset(name).ok_or_else(|| {
            Error::GenericDyn(format!(
                "unknown charset '{name}' (available: {})",
                charset::NAMED_CHARSETS
                    .iter()
                    .map(|(charset_name, _)| *charset_name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;
        return (0..args.count)
            .map(|_| password_generator::generate_with_custom_charset(args.length, chars))
            .collect();
    }

    let config = GenerationConfig {
        length: args.length,
        lowercase: !args.no_lowercase,
        uppercase: !args.no_uppercase,
        digits: !args.no_digits,
        symbols: !args.no_symbols,
        custom_charset: None,
    };
    password_generator::generate_many(&config, args.count)
}
