//! Pattern Rules
//!
//! Raw pattern sources and their compiled forms. Every rule is compiled once,
//! on first use, and never changes afterwards.
//!
//! The phone prefix table and the URL top-level-domain whitelist are kept as
//! data (`DEFAULT_PHONE_PREFIXES`, `DEFAULT_URL_TLDS`) and turned into pattern
//! sources by [`phone_pattern`] and [`url_pattern`], so a rule profile can
//! swap them out without touching the grammar.

use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;

/// 2 to 4 CJK unified ideographs (U+4E00..=U+9FA5).
pub const CHINESE_NAME_PATTERN: &str = r"^[\x{4e00}-\x{9fa5}]{2,4}$";

/// Dotted atoms or a quoted local part, then an IPv4 literal or dotted labels.
///
/// A quoted local part never spans a line terminator.
pub const EMAIL_PATTERN: &str = r#"^(?:[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*|"[^\r\n\x{2028}\x{2029}]+")@(?:\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,})$"#;

/// 18-digit resident ID or the legacy 15-digit form.
///
/// Only the shape is checked: area code, plausible date segments and
/// sequence digits. The trailing check character of the 18-digit form is
/// never verified against its checksum.
pub const ID_CARD_PATTERN: &str = concat!(
    r"^(?:",
    r"[1-9][0-9]{5}(?:18|19|[23][0-9])[0-9]{2}(?:0[1-9]|1[0-2])(?:[0-2][1-9]|10|20|30|31)[0-9]{3}[0-9Xx]",
    r"|",
    r"[1-9][0-9]{5}[0-9]{2}(?:0[1-9]|1[0-2])(?:[0-2][1-9]|10|20|30|31)[0-9]{3}",
    r")$"
);

/// Leading nonzero digit, 12 or 16 to 19 digits in total.
pub const BANK_PATTERN: &str = r"^[1-9](?:[0-9]{11}|[0-9]{15,18})$";

pub const EXTERNAL_PATTERN: &str = r"^(?:https?:|mailto:|tel:)";

pub const LOWER_CASE_PATTERN: &str = r"^[a-z]+$";

pub const UPPER_CASE_PATTERN: &str = r"^[A-Z]+$";

pub const ALPHABETS_PATTERN: &str = r"^[A-Za-z]+$";

/// Allocated mainland mobile ranges as `(second digit, allowed third digits)`.
pub const DEFAULT_PHONE_PREFIXES: &[(u8, &[u8])] = &[
    (3, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
    (4, &[0, 1, 4, 5, 6, 7, 8, 9]),
    (5, &[0, 1, 2, 3, 5, 6, 7, 8, 9]),
    (6, &[2, 5, 6, 7]),
    (7, &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
    (8, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
    (9, &[0, 1, 2, 3, 5, 6, 7, 8, 9]),
];

pub const DEFAULT_URL_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Generic top-level domains accepted by [`URL`]. Two-letter country codes
/// are accepted separately.
pub const DEFAULT_URL_TLDS: &[&str] = &[
    "com", "edu", "gov", "int", "mil", "net", "org", "biz", "arpa", "info", "name", "pro", "aero",
    "coop", "museum",
];

const URL_USERINFO: &str = r"(?:[a-zA-Z0-9.-]+(?::[a-zA-Z0-9.&%$-]+)*@)*";
const URL_IPV4: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]?)(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])){3}";
const URL_HOST_LABELS: &str = r"(?:[a-zA-Z0-9-]+\.)*[a-zA-Z0-9-]+\.";
const URL_PORT_AND_PATH: &str = r"(?::[0-9]+)*(?:/(?:$|[a-zA-Z0-9.,?'\\+&%$#=~_-]+))*$";

/// Build the mobile number pattern from a prefix table.
///
/// The result always starts with `1` and ends with eight free digits, so a
/// match is exactly 11 ASCII digits long. Every entry of the table must be a
/// single decimal digit.
pub fn phone_pattern<'a, I>(prefixes: I) -> Result<String>
where
    I: IntoIterator<Item = (u8, &'a [u8])>,
{
    let mut branches = Vec::new();
    for (second, third) in prefixes {
        if second > 9 {
            bail!("Phone prefix second digit {} is not a digit", second);
        }
        let mut class = String::with_capacity(third.len());
        for &digit in third {
            if digit > 9 {
                bail!("Phone prefix 1{}{} is not a digit", second, digit);
            }
            class.push(char::from(b'0' + digit));
        }
        branches.push(format!("{}[{}]", second, class));
    }

    Ok(format!("^1(?:{})[0-9]{{8}}$", branches.join("|")))
}

/// Build the URL pattern from a scheme list and a TLD whitelist.
///
/// With `country_codes` set, any two-letter TLD is accepted in addition to
/// the whitelist.
pub fn url_pattern<S: AsRef<str>>(schemes: &[S], tlds: &[S], country_codes: bool) -> String {
    let schemes: Vec<String> = schemes.iter().map(|s| regex::escape(s.as_ref())).collect();
    let mut tld_alternatives: Vec<String> = tlds.iter().map(|t| regex::escape(t.as_ref())).collect();
    if country_codes {
        tld_alternatives.push("[a-zA-Z]{2}".to_string());
    }

    let mut pattern = String::from("^(?:");
    pattern.push_str(&schemes.join("|"));
    pattern.push_str(")://");
    pattern.push_str(URL_USERINFO);
    pattern.push_str("(?:");
    pattern.push_str(URL_IPV4);
    pattern.push('|');
    pattern.push_str(URL_HOST_LABELS);
    pattern.push_str("(?:");
    pattern.push_str(&tld_alternatives.join("|"));
    pattern.push_str("))");
    pattern.push_str(URL_PORT_AND_PATH);
    pattern
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

pub static CHINESE_NAME: LazyLock<Regex> = LazyLock::new(|| compile(CHINESE_NAME_PATTERN));

pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    let source = phone_pattern(DEFAULT_PHONE_PREFIXES.iter().copied())
        .expect("default phone table holds digits only");
    compile(&source)
});

pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));

pub static ID_CARD: LazyLock<Regex> = LazyLock::new(|| compile(ID_CARD_PATTERN));

pub static BANK: LazyLock<Regex> = LazyLock::new(|| compile(BANK_PATTERN));

pub static EXTERNAL: LazyLock<Regex> = LazyLock::new(|| compile(EXTERNAL_PATTERN));

pub static URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&url_pattern(DEFAULT_URL_SCHEMES, DEFAULT_URL_TLDS, true))
});

pub static LOWER_CASE: LazyLock<Regex> = LazyLock::new(|| compile(LOWER_CASE_PATTERN));

pub static UPPER_CASE: LazyLock<Regex> = LazyLock::new(|| compile(UPPER_CASE_PATTERN));

pub static ALPHABETS: LazyLock<Regex> = LazyLock::new(|| compile(ALPHABETS_PATTERN));
