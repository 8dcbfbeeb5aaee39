//! Rewrite command

use colored::*;
use eyre::{Context, Result};
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use neutral::{AgreementScope, Category, Neutralizer};

use crate::config::Config;

/// Options for a single rewrite, after CLI parsing
#[derive(Debug, Default)]
pub struct RewriteArgs {
    pub text: Vec<String>,
    pub file: Option<PathBuf>,
    pub set: Option<String>,
    pub category: Option<Category>,
    pub strict: bool,
    pub agreement: Option<AgreementScope>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run(args: RewriteArgs, config: &Config) -> Result<()> {
    let input = read_input(&args.text, args.file.as_deref())?;
    let result = rewrite_text(&input, &args, config)?;

    match args.output {
        Some(ref path) => {
            let path = Config::expand_path(path);
            fs::write(&path, &result).with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !args.quiet {
                eprintln!("{} Wrote {}", "✓".green(), path.display());
            }
        }
        None => {
            if result.ends_with('\n') {
                print!("{}", result);
            } else {
                println!("{}", result);
            }
        }
    }

    Ok(())
}

/// Build the neutralizer from CLI flags, falling back to config values
fn neutralizer_for(args: &RewriteArgs, config: &Config) -> Result<Neutralizer> {
    let set = args.set.as_deref().unwrap_or(&config.pronoun_set);
    let agreement = args.agreement.unwrap_or(config.agreement);

    let neutralizer = if args.strict || config.strict {
        Neutralizer::strict(Some(set))?
    } else {
        Neutralizer::new(Some(set))
    };

    debug!(
        "Using pronoun set '{}' (requested '{}'), agreement scope '{}'",
        neutralizer.pronoun_set().name,
        set,
        agreement.as_str()
    );
    Ok(neutralizer.with_agreement(agreement))
}

pub fn rewrite_text(input: &str, args: &RewriteArgs, config: &Config) -> Result<String> {
    let neutralizer = neutralizer_for(args, config)?;
    Ok(match args.category {
        Some(category) => neutralizer.category(category, input),
        None => neutralizer.neutralize(input),
    })
}

fn read_input(text: &[String], file: Option<&Path>) -> Result<String> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    if let Some(path) = file {
        let path = Config::expand_path(path);
        return fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rewrite_uses_config_set() {
        let config = Config {
            pronoun_set: "xe".to_string(),
            ..Config::default()
        };
        let out = rewrite_text("She lost her keys.", &RewriteArgs::default(), &config).unwrap();
        assert_eq!(out, "Xe lost xem keys.");
    }

    #[test]
    fn test_flag_overrides_config_set() {
        let config = Config {
            pronoun_set: "xe".to_string(),
            ..Config::default()
        };
        let args = RewriteArgs {
            set: Some("ey".to_string()),
            ..RewriteArgs::default()
        };
        assert_eq!(rewrite_text("He is here.", &args, &config).unwrap(), "Ey are here.");
    }

    #[test]
    fn test_single_category() {
        let args = RewriteArgs {
            category: Some(Category::Reflexive),
            ..RewriteArgs::default()
        };
        assert_eq!(
            rewrite_text("She admired herself.", &args, &Config::default()).unwrap(),
            "She admired themself."
        );
    }

    #[test]
    fn test_strict_from_flag_or_config() {
        let args = RewriteArgs {
            set: Some("bogus".to_string()),
            strict: true,
            ..RewriteArgs::default()
        };
        assert!(rewrite_text("She left.", &args, &Config::default()).is_err());

        let config = Config {
            strict: true,
            pronoun_set: "bogus".to_string(),
            ..Config::default()
        };
        assert!(rewrite_text("She left.", &RewriteArgs::default(), &config).is_err());
    }

    #[test]
    fn test_lenient_falls_back() {
        let args = RewriteArgs {
            set: Some("bogus".to_string()),
            ..RewriteArgs::default()
        };
        assert_eq!(rewrite_text("She left.", &args, &Config::default()).unwrap(), "They left.");
    }

    #[test]
    fn test_agreement_flag() {
        let args = RewriteArgs {
            agreement: Some(AgreementScope::First),
            ..RewriteArgs::default()
        };
        assert_eq!(
            rewrite_text("He was here and she was there.", &args, &Config::default()).unwrap(),
            "They were here and they was there."
        );
    }

    #[test]
    fn test_read_input_joins_args() {
        let text = vec!["He".to_string(), "left.".to_string()];
        assert_eq!(read_input(&text, None).unwrap(), "He left.");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("story.txt");
        fs::write(&path, "She ran.\n").unwrap();
        assert_eq!(read_input(&[], Some(&path)).unwrap(), "She ran.\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(read_input(&[], Some(&dir.path().join("nope.txt"))).is_err());
    }
}
