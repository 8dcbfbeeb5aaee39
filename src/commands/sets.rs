//! Pronoun set listing

use colored::*;
use eyre::Result;

use neutral::pronoun::registry;
use neutral::{Category, PronounSet};

use crate::cli::OutputFormat;
use crate::config::Config;

pub fn list(format: OutputFormat, config: &Config) -> Result<()> {
    let sets: Vec<&PronounSet> = registry::all().collect();
    let default = registry::resolve(Some(config.pronoun_set.as_str())).name;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sets)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&sets)?),
        OutputFormat::Text => {
            println!("{}", "Pronoun Sets:".bold());
            println!();

            for set in &sets {
                if set.name == default {
                    println!("  {} {:<6} {} {}", "●".green(), set.name.bold(), set.summary(), "(default)".dimmed());
                } else {
                    println!("  {} {:<6} {}", "○".dimmed(), set.name.bold(), set.summary());
                }
            }
        }
    }

    Ok(())
}

pub fn show(name: &str, format: OutputFormat) -> Result<()> {
    let set = registry::resolve_strict(Some(name))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(set)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(set)?),
        OutputFormat::Text => {
            println!("{} {}", "Pronoun set:".bold(), set.name.green().bold());
            println!();
            for category in Category::ORDERED {
                let [masculine, feminine] = category.sources();
                println!(
                    "  {:<22} {:<8} {}/{}",
                    category.name().cyan(),
                    set.slot(category),
                    masculine.dimmed(),
                    feminine.dimmed()
                );
            }
        }
    }

    Ok(())
}
