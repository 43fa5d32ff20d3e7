use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use string_validators::config::{Command, Config};
use string_validators::{
    Catalog, CheckReport, Format, ProfileManager, check_document, check_json, check_values,
    platform,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse configuration from command line and project config
    let (config, command) = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    match command {
        Command::Formats => {
            for format in Format::ALL {
                if format.is_profile_driven() {
                    println!("{}\tprofile", format);
                } else {
                    println!("{}", format);
                }
            }
        }
        Command::Platform { user_agent } => {
            let flags = platform::init(&user_agent);
            println!("{}", serde_json::to_string_pretty(flags)?);
        }
        Command::Profiles => {
            let manager = load_profiles(&config).await?;
            for name in manager.list_profile_names() {
                if let Some(loaded) = manager.get_profile(&name) {
                    let source = loaded
                        .source_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "<built-in>".to_string());
                    println!(
                        "{}\t{}\t{:?}\t{}",
                        name,
                        loaded.profile.version.as_deref().unwrap_or("-"),
                        loaded.priority,
                        source
                    );
                }
            }
        }
        Command::Pattern { format } => {
            let format: Format = format.parse()?;
            let catalog = load_catalog(&config).await?;
            println!("{}", catalog.rule(format).as_str());
        }
        Command::Check {
            format,
            values,
            json,
        } => {
            let format: Format = format.parse()?;
            let catalog = load_catalog(&config).await?;

            let report = if values.is_empty() {
                let content = read_stdin().await?;
                check_document(&content, format, &catalog)
            } else {
                check_values(&values, format, &catalog)
            };
            finish(&report, json)?;
        }
        Command::CheckJson {
            format,
            input,
            json,
        } => {
            let format: Format = format.parse()?;
            let catalog = load_catalog(&config).await?;

            let content = if input == Path::new("-") {
                read_stdin().await?
            } else {
                tokio::fs::read_to_string(&input)
                    .await
                    .with_context(|| format!("Failed to read {}", input.display()))?
            };
            let value: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {}", input.display()))?;

            let report = check_json(&value, format, &catalog);
            finish(&report, json)?;
        }
    }

    Ok(())
}

async fn load_profiles(config: &Config) -> Result<ProfileManager> {
    let mut manager = ProfileManager::new(config)?;
    manager.initialize().await?;
    Ok(manager)
}

/// Compile the catalog for the effective profile
async fn load_catalog(config: &Config) -> Result<Catalog> {
    let manager = load_profiles(config).await?;
    match manager.get_effective_default_profile() {
        Some(loaded) => Catalog::from_profile(&loaded.profile),
        None => {
            log::warn!("No rule profile available, using compiled-in tables");
            Ok(Catalog::builtin().clone())
        }
    }
}

async fn read_stdin() -> Result<String> {
    let mut content = String::new();
    tokio::io::stdin()
        .read_to_string(&mut content)
        .await
        .context("Failed to read stdin")?;
    Ok(content)
}

/// Print the report and exit non-zero when anything failed
fn finish(report: &CheckReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for entry in &report.entries {
            let shown = match &entry.value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let verdict = if entry.valid { "valid" } else { "invalid" };
            println!("{}\t{}\t{}", entry.line, verdict, shown);
        }
    }

    if !report.is_valid() {
        log::info!(
            "{} of {} values failed '{}'",
            report.invalid_count(),
            report.entries.len(),
            report.format
        );
        std::process::exit(1);
    }

    Ok(())
}
