//! Rule Profile Schema
//!
//! TOML layout of a rule profile and its runtime form.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::patterns;

/// Name of the embedded profile
pub const DEFAULT_PROFILE_NAME: &str = "default";

const BUILTIN_PROFILE: &str = include_str!("../../resources/profiles/default.strval-profile.toml");

/// Root profile file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileFile {
    pub profile: ProfileMeta,
    pub phone: PhoneTable,
    pub url: UrlTable,
}

/// Profile metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Mobile prefix table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PhoneTable {
    pub prefixes: Vec<PhonePrefix>,
}

/// Third digits allowed after `1` and a given second digit
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PhonePrefix {
    pub second: u8,
    pub third: Vec<u8>,
}

/// URL scheme list and top-level-domain whitelist
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UrlTable {
    #[serde(default = "default_schemes")]
    pub schemes: Vec<String>,
    pub tlds: Vec<String>,
    #[serde(default)]
    pub country_codes: bool,
}

fn default_schemes() -> Vec<String> {
    patterns::DEFAULT_URL_SCHEMES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Runtime profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub phone: PhoneTable,
    pub url: UrlTable,
}

impl ProfileFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse profile TOML")
    }

    /// The profile embedded in the binary
    pub fn builtin() -> Result<Self> {
        toml::from_str(BUILTIN_PROFILE).context("Failed to parse built-in profile TOML")
    }
}

impl From<ProfileFile> for Profile {
    fn from(file: ProfileFile) -> Self {
        Self {
            name: file.profile.name,
            version: file.profile.version,
            description: file.profile.description,
            phone: file.phone,
            url: file.url,
        }
    }
}

impl Profile {
    /// Profile built from the compiled-in tables, used when the embedded
    /// TOML cannot be read
    pub fn fallback() -> Self {
        Self {
            name: DEFAULT_PROFILE_NAME.to_string(),
            version: Some("compiled-fallback".to_string()),
            description: Some("Compiled-in default tables".to_string()),
            phone: PhoneTable {
                prefixes: patterns::DEFAULT_PHONE_PREFIXES
                    .iter()
                    .map(|&(second, third)| PhonePrefix {
                        second,
                        third: third.to_vec(),
                    })
                    .collect(),
            },
            url: UrlTable {
                schemes: default_schemes(),
                tlds: patterns::DEFAULT_URL_TLDS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                country_codes: true,
            },
        }
    }

    /// Check the tables can be turned into rules
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Profile name must not be empty");
        }

        if self.phone.prefixes.is_empty() {
            bail!("Profile '{}' has an empty phone prefix table", self.name);
        }
        let mut seen = HashSet::new();
        for prefix in &self.phone.prefixes {
            if prefix.second > 9 {
                bail!(
                    "Profile '{}' has second digit {} outside 0-9",
                    self.name,
                    prefix.second
                );
            }
            if !seen.insert(prefix.second) {
                bail!(
                    "Profile '{}' lists second digit {} more than once",
                    self.name,
                    prefix.second
                );
            }
            if prefix.third.is_empty() {
                bail!(
                    "Profile '{}' allows no third digit after 1{}",
                    self.name,
                    prefix.second
                );
            }
            if let Some(bad) = prefix.third.iter().find(|&&d| d > 9) {
                bail!(
                    "Profile '{}' has third digit {} outside 0-9 after 1{}",
                    self.name,
                    bad,
                    prefix.second
                );
            }
        }

        if self.url.schemes.is_empty() {
            bail!("Profile '{}' accepts no URL scheme", self.name);
        }
        if let Some(bad) = self.url.schemes.iter().find(|s| !is_scheme(s)) {
            bail!("Profile '{}' has invalid URL scheme '{}'", self.name, bad);
        }

        if self.url.tlds.is_empty() && !self.url.country_codes {
            bail!("Profile '{}' accepts no top-level domain", self.name);
        }
        if let Some(bad) = self.url.tlds.iter().find(|t| !is_tld(t)) {
            bail!("Profile '{}' has invalid TLD '{}'", self.name, bad);
        }

        Ok(())
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn is_tld(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}
