//! Configuration management for the validator CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project configuration (`.strval.toml`)
//! - Profile directory configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::profile::ProfilePriority;

/// File name of the per-project configuration
pub const PROJECT_CONFIG_FILE: &str = ".strval.toml";

/// Command-line arguments for the validator CLI
#[derive(Debug, Parser)]
#[command(name = "strval")]
#[command(about = "Check strings against common formats")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Explicitly specify the rule profile to use
    #[arg(long, global = true, help = "Rule profile to use (e.g., 'default')")]
    pub profile: Option<String>,

    /// Extra directory to search for profile files, searched last
    #[arg(long, global = true, help = "Directory containing profile TOML files")]
    pub profile_dir: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check values (or stdin lines) against a format
    Check {
        /// Format name, see `strval formats`
        format: String,
        /// Values to check; stdin lines are read when empty
        values: Vec<String>,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Check the elements of a JSON array; non-string elements never match
    CheckJson {
        format: String,
        /// JSON file, or `-` for stdin
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List format names
    Formats,
    /// Print the pattern behind a format
    Pattern { format: String },
    /// List loaded rule profiles
    Profiles,
    /// Print platform flags for a user-agent string
    Platform { user_agent: String },
}

/// Contents of `.strval.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProjectConfig {
    pub profile: Option<String>,
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }

    /// Find the nearest `.strval.toml` in `start` or its ancestors
    pub fn find(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile name explicitly set via command line
    pub cli_profile: Option<String>,
    /// Profile name from the project config
    pub project_profile: Option<String>,
    /// Where the project config was found
    pub project_config_path: Option<PathBuf>,
    /// Profile directories with their priority, searched in order
    pub profile_dirs: Vec<(PathBuf, ProfilePriority)>,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<(Self, Command)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args.command))
    }

    /// Create configuration relative to the current directory
    pub fn from_args(args: &Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Self::from_args_in(args, &cwd)
    }

    /// Create configuration relative to `dir` (useful for testing)
    pub fn from_args_in(args: &Args, dir: &Path) -> Result<Self> {
        let project_config_path = ProjectConfig::find(dir);
        let project = match &project_config_path {
            Some(path) => ProjectConfig::load(path)?,
            None => ProjectConfig::default(),
        };

        let mut profile_dirs = Vec::new();

        // Default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            profile_dirs.push((
                config_dir.join("strval").join("profiles"),
                ProfilePriority::UserGlobal,
            ));
        }

        // Workspace directory, next to the project config when there is one
        let workspace_root = project_config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(dir);
        profile_dirs.push((
            workspace_root.join(".strval").join("profiles"),
            ProfilePriority::Workspace,
        ));

        // Searched last, so it wins ties with the workspace directory
        if let Some(custom_dir) = &args.profile_dir {
            profile_dirs.push((custom_dir.clone(), ProfilePriority::Workspace));
        }

        Ok(Config {
            cli_profile: args.profile.clone(),
            project_profile: project.profile,
            project_config_path,
            profile_dirs,
            log_level: args.log_level.clone(),
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }

    /// Profile name from CLI, then project config
    pub fn get_effective_profile(&self) -> Option<String> {
        self.cli_profile
            .clone()
            .or_else(|| self.project_profile.clone())
    }
}
