//! Rule Profiles
//!
//! Replaceable data tables (mobile prefixes, URL TLDs) for the catalog.

pub mod manager;
pub mod schema;

pub use manager::{LoadedProfile, ProfileManager, ProfilePriority, ProfileSelectionConfig};
pub use schema::{
    DEFAULT_PROFILE_NAME, PhonePrefix, PhoneTable, Profile, ProfileFile, ProfileMeta, UrlTable,
};
