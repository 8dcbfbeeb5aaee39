use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

use neutral::AgreementScope;
use neutral::pronoun::registry;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::{Config, LogLevel};

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => {
            println!("{}", get(&key, config)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            println!("{} Setting {} = {}", "→".blue(), key.cyan(), value.green());
            let config_path = Config::neutral_dir().join("neutral.yaml");
            set(&key, &value, config, &config_path)?;
            println!("  {} Saved to {}", "✓".green(), config_path.display());
            Ok(())
        }
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "Neutral Configuration".bold());
            println!();
            println!("  {}: {}", "pronoun_set".cyan(), config.pronoun_set);
            println!("  {}: {}", "strict".cyan(), config.strict);
            println!("  {}: {}", "agreement".cyan(), config.agreement.as_str());
            println!("  {}: {}", "log_level".cyan(), config.log_level.as_filter());
        }
    }

    Ok(())
}

fn get(key: &str, config: &Config) -> Result<String> {
    let value = match key {
        "pronoun_set" | "pronoun-set" | "set" => config.pronoun_set.clone(),
        "strict" => config.strict.to_string(),
        "agreement" => config.agreement.as_str().to_string(),
        "log_level" | "log-level" => config.log_level.as_filter().to_string(),
        _ => eyre::bail!("Unknown config key: {}", key),
    };
    Ok(value)
}

fn set(key: &str, value: &str, config: &Config, config_path: &Path) -> Result<Config> {
    let mut new_config = config.clone();

    match key {
        "pronoun_set" | "pronoun-set" | "set" => {
            let set = registry::resolve_strict(Some(value))?;
            new_config.pronoun_set = set.name.to_string();
        }
        "strict" => {
            new_config.strict = value.parse().context("Invalid boolean value (use 'true' or 'false')")?;
        }
        "agreement" => {
            new_config.agreement = match value.to_lowercase().as_str() {
                "all" => AgreementScope::All,
                "first" => AgreementScope::First,
                _ => eyre::bail!("Invalid agreement scope '{}' (use 'all' or 'first')", value),
            };
        }
        "log_level" | "log-level" => {
            new_config.log_level = value.parse::<LogLevel>()?;
        }
        _ => {
            eyre::bail!("Unknown config key: {}", key);
        }
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml_str = serde_yaml::to_string(&new_config).context("Failed to serialize config")?;
    fs::write(config_path, yaml_str).context("Failed to write config file")?;

    Ok(new_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_known_keys() {
        let config = Config::default();
        assert_eq!(get("pronoun_set", &config).unwrap(), "they");
        assert_eq!(get("strict", &config).unwrap(), "false");
        assert_eq!(get("agreement", &config).unwrap(), "all");
        assert_eq!(get("log-level", &config).unwrap(), "info");
    }

    #[test]
    fn test_get_unknown_key() {
        assert!(get("color", &Config::default()).is_err());
    }

    #[test]
    fn test_set_writes_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("neutral.yaml");

        let updated = set("pronoun_set", "XE", &Config::default(), &path).unwrap();
        assert_eq!(updated.pronoun_set, "xe");

        let written: Config = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.pronoun_set, "xe");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("neutral.yaml");
        let config = Config::default();

        assert!(set("pronoun_set", "bogus", &config, &path).is_err());
        assert!(set("strict", "maybe", &config, &path).is_err());
        assert!(set("agreement", "some", &config, &path).is_err());
        assert!(set("color", "red", &config, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_agreement_and_strict() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("neutral.yaml");

        let updated = set("agreement", "first", &Config::default(), &path).unwrap();
        assert_eq!(updated.agreement, AgreementScope::First);
        let updated = set("strict", "true", &updated, &path).unwrap();
        assert!(updated.strict);
        assert_eq!(updated.agreement, AgreementScope::First);
    }
}
