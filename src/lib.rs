//! String Validators
//!
//! Pattern-based predicates for common string formats.
//!
//! This library provides:
//! - Format validators (Chinese names, phone numbers, email, ID cards, bank
//!   accounts, URLs, letter case)
//! - The compiled pattern rules behind them
//! - Replaceable rule profiles for the phone prefix and URL TLD tables
//! - Type predicates for JSON values and platform flags from a user agent
//!
//! ```
//! use string_validators::{valid_phone, valid_url};
//!
//! assert!(valid_phone("13800138000"));
//! assert!(!valid_url("https://example.xyz"));
//! ```

pub mod catalog;
pub mod config;
pub mod patterns;
pub mod platform;
pub mod profile;
pub mod report;
pub mod validators;
pub mod value;

// Re-exports for clean public API
pub use catalog::{Catalog, Format};
pub use config::Config;
pub use platform::Platform;
pub use profile::{Profile, ProfileManager};
pub use report::{CheckReport, check_document, check_json, check_values};
pub use validators::{
    is_external, valid_alphabets, valid_bank, valid_chinese_name, valid_email, valid_id_card,
    valid_lower_case, valid_phone, valid_upper_case, valid_url,
};
pub use value::{is_array, is_string};
