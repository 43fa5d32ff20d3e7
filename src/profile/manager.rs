//! Profile management for the validator catalog.
//!
//! This module handles:
//! - Loading rule profiles from TOML files
//! - Loading priority: built-in < user-global < workspace
//! - Profile selection via command-line or project config
//! - Skipping broken files without failing the whole load

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::schema::{DEFAULT_PROFILE_NAME, Profile, ProfileFile};
use crate::config::Config;

/// Represents the loading priority of profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfilePriority {
    BuiltIn = 0,
    UserGlobal = 1,
    Workspace = 2,
}

/// A loaded profile with its source and priority
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: Profile,
    pub priority: ProfilePriority,
    pub source_path: Option<PathBuf>,
}

/// Configuration for profile selection
#[derive(Debug, Clone, Default)]
pub struct ProfileSelectionConfig {
    /// Profile explicitly specified via CLI
    pub cli_profile: Option<String>,
    /// Profile from project configuration
    pub project_profile: Option<String>,
    /// Path to project config (for logging)
    pub project_config_path: Option<PathBuf>,
}

/// Loads and resolves rule profiles
#[derive(Debug)]
pub struct ProfileManager {
    profiles: HashMap<String, LoadedProfile>,
    /// Directories searched in order, each with the priority of its files
    profile_dirs: Vec<(PathBuf, ProfilePriority)>,
    selection_config: ProfileSelectionConfig,
}

impl ProfileManager {
    /// Create a new profile manager with configuration
    pub fn new(config: &Config) -> Result<Self> {
        let selection_config = ProfileSelectionConfig {
            cli_profile: config.cli_profile.clone(),
            project_profile: config.project_profile.clone(),
            project_config_path: config.project_config_path.clone(),
        };

        Ok(Self {
            profiles: HashMap::new(),
            profile_dirs: config.profile_dirs.clone(),
            selection_config,
        })
    }

    /// Create a profile manager searching the standard directories
    pub fn with_default_config() -> Result<Self> {
        Ok(Self {
            profiles: HashMap::new(),
            profile_dirs: Self::get_default_profile_directories()?,
            selection_config: ProfileSelectionConfig::default(),
        })
    }

    /// Create a profile manager over explicit directories
    pub fn with_dirs(
        profile_dirs: Vec<(PathBuf, ProfilePriority)>,
        selection_config: ProfileSelectionConfig,
    ) -> Self {
        Self {
            profiles: HashMap::new(),
            profile_dirs,
            selection_config,
        }
    }

    fn get_default_profile_directories() -> Result<Vec<(PathBuf, ProfilePriority)>> {
        let mut dirs = Vec::new();

        // User global directory: ~/.config/strval/profiles/
        if let Some(config_dir) = dirs::config_dir() {
            dirs.push((
                config_dir.join("strval").join("profiles"),
                ProfilePriority::UserGlobal,
            ));
        }

        // Current workspace directory: ./.strval/profiles/
        let workspace_dir = std::env::current_dir()?.join(".strval").join("profiles");
        dirs.push((workspace_dir, ProfilePriority::Workspace));

        Ok(dirs)
    }

    /// Load the built-in profile and every profile file in the search directories
    pub async fn initialize(&mut self) -> Result<()> {
        let mut profiles = HashMap::new();

        // Built-in first (lowest priority)
        Self::load_built_in_profile(&mut profiles);

        for (profile_dir, priority) in &self.profile_dirs {
            Self::load_profiles_from_directory(profile_dir, *priority, &mut profiles).await?;
        }

        log::info!("Loaded {} rule profiles", profiles.len());
        self.profiles = profiles;

        Ok(())
    }

    fn load_built_in_profile(profiles: &mut HashMap<String, LoadedProfile>) {
        let profile = match ProfileFile::builtin() {
            Ok(file) => Profile::from(file),
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded profile: {:#}. Using compiled-in tables.",
                    e
                );
                Profile::fallback()
            }
        };

        profiles.insert(
            profile.name.clone(),
            LoadedProfile {
                profile,
                priority: ProfilePriority::BuiltIn,
                source_path: None,
            },
        );
    }

    async fn load_profiles_from_directory(
        dir: &Path,
        priority: ProfilePriority,
        profiles: &mut HashMap<String, LoadedProfile>,
    ) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }

        let mut entries = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read profile directory: {}", dir.display()))?;

        // Later files win ties within one directory
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("toml") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            if let Err(e) = Self::load_profile_file(&path, priority, profiles).await {
                log::warn!("Skipping profile file {}: {:#}", path.display(), e);
            }
        }

        Ok(())
    }

    async fn load_profile_file(
        path: &Path,
        priority: ProfilePriority,
        profiles: &mut HashMap<String, LoadedProfile>,
    ) -> Result<()> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;

        let profile = Profile::from(
            ProfileFile::parse(&content)
                .with_context(|| format!("Invalid profile file: {}", path.display()))?,
        );
        profile.validate()?;

        // Override an existing profile only from an equal or higher priority
        let should_load = match profiles.get(&profile.name) {
            Some(existing) => priority >= existing.priority,
            None => true,
        };

        if should_load {
            log::debug!(
                "Loaded profile '{}' ({:?}) from {}",
                profile.name,
                priority,
                path.display()
            );
            profiles.insert(
                profile.name.clone(),
                LoadedProfile {
                    profile,
                    priority,
                    source_path: Some(path.to_path_buf()),
                },
            );
        }

        Ok(())
    }

    /// Get a profile by name
    pub fn get_profile(&self, name: &str) -> Option<&LoadedProfile> {
        self.profiles.get(name)
    }

    /// List all available profile names, sorted
    pub fn list_profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the default profile
    pub fn get_default_profile(&self) -> Option<&LoadedProfile> {
        self.profiles.get(DEFAULT_PROFILE_NAME)
    }

    /// Resolve the profile to use: CLI > project config > default
    pub fn get_effective_default_profile(&self) -> Option<&LoadedProfile> {
        if let Some(cli_profile) = &self.selection_config.cli_profile {
            if let Some(profile) = self.get_profile(cli_profile) {
                return Some(profile);
            }
            log::warn!(
                "CLI-specified profile '{}' not found, falling back",
                cli_profile
            );
        }

        if let Some(project_profile) = &self.selection_config.project_profile {
            if let Some(profile) = self.get_profile(project_profile) {
                return Some(profile);
            }
            let config_path = self
                .selection_config
                .project_config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| crate::config::PROJECT_CONFIG_FILE.to_string());
            log::warn!(
                "Project profile '{}' from {} not found, falling back",
                project_profile,
                config_path
            );
        }

        self.get_default_profile()
    }
}
