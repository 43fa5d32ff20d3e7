//! Validator Catalog
//!
//! Names every built-in format and binds it to a compiled rule. The
//! built-in catalog uses the default data tables; a catalog built from a
//! [`Profile`] recompiles the phone and URL rules from that profile's tables.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;

use crate::patterns;
use crate::profile::Profile;
use crate::value;

/// A named entry of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    ChineseName,
    Phone,
    Email,
    IdCard,
    Bank,
    External,
    Url,
    LowerCase,
    UpperCase,
    Alphabets,
}

impl Format {
    pub const ALL: [Format; 10] = [
        Format::ChineseName,
        Format::Phone,
        Format::Email,
        Format::IdCard,
        Format::Bank,
        Format::External,
        Format::Url,
        Format::LowerCase,
        Format::UpperCase,
        Format::Alphabets,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::ChineseName => "chinese-name",
            Format::Phone => "phone",
            Format::Email => "email",
            Format::IdCard => "id-card",
            Format::Bank => "bank",
            Format::External => "external",
            Format::Url => "url",
            Format::LowerCase => "lower-case",
            Format::UpperCase => "upper-case",
            Format::Alphabets => "alphabets",
        }
    }

    /// Whether the rule for this format comes from a profile's data tables
    pub fn is_profile_driven(&self) -> bool {
        matches!(self, Format::Phone | Format::Url)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Format::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Format::ALL.iter().map(|f| f.name()).collect();
                anyhow::anyhow!("Unknown format '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Compiled rules for every [`Format`]
#[derive(Debug, Clone)]
pub struct Catalog {
    profile_name: String,
    phone: Regex,
    url: Regex,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    profile_name: crate::profile::DEFAULT_PROFILE_NAME.to_string(),
    phone: patterns::PHONE.clone(),
    url: patterns::URL.clone(),
});

impl Catalog {
    /// Catalog over the compiled-in default tables
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Compile a catalog from a rule profile's data tables
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        profile.validate()?;

        let phone_source = patterns::phone_pattern(
            profile
                .phone
                .prefixes
                .iter()
                .map(|p| (p.second, p.third.as_slice())),
        )
        .with_context(|| format!("Profile '{}' has an invalid phone table", profile.name))?;
        let phone = Regex::new(&phone_source)
            .with_context(|| format!("Profile '{}' produced an invalid phone rule", profile.name))?;

        let url_source = patterns::url_pattern(
            profile.url.schemes.as_slice(),
            profile.url.tlds.as_slice(),
            profile.url.country_codes,
        );
        let url = Regex::new(&url_source)
            .with_context(|| format!("Profile '{}' produced an invalid URL rule", profile.name))?;

        log::debug!(
            "Compiled catalog for profile '{}' ({} phone prefixes, {} TLDs)",
            profile.name,
            profile.phone.prefixes.len(),
            profile.url.tlds.len()
        );

        Ok(Self {
            profile_name: profile.name.clone(),
            phone,
            url,
        })
    }

    /// Name of the profile the data-driven rules were compiled from
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    /// The compiled rule behind a format
    pub fn rule(&self, format: Format) -> &Regex {
        match format {
            Format::ChineseName => &patterns::CHINESE_NAME,
            Format::Phone => &self.phone,
            Format::Email => &patterns::EMAIL,
            Format::IdCard => &patterns::ID_CARD,
            Format::Bank => &patterns::BANK,
            Format::External => &patterns::EXTERNAL,
            Format::Url => &self.url,
            Format::LowerCase => &patterns::LOWER_CASE,
            Format::UpperCase => &patterns::UPPER_CASE,
            Format::Alphabets => &patterns::ALPHABETS,
        }
    }

    pub fn check(&self, format: Format, input: &str) -> bool {
        self.rule(format).is_match(input)
    }

    /// Check a value of dynamic origin; anything but a string does not match.
    pub fn check_value(&self, format: Format, input: &Value) -> bool {
        if !value::is_string(input) {
            return false;
        }
        input.as_str().is_some_and(|s| self.check(format, s))
    }
}
