//! Built-in validators
//!
//! Each function tests one string against one compiled rule from
//! [`crate::patterns`]. They never panic, never allocate on the input and
//! always return the same answer for the same input.

use crate::patterns;

/// Chinese personal name: 2 to 4 CJK ideographs.
///
/// Names with a middle dot or non-CJK characters are rejected.
pub fn valid_chinese_name(name: &str) -> bool {
    patterns::CHINESE_NAME.is_match(name)
}

/// Mainland mobile number against the built-in prefix table.
///
/// Use [`crate::Catalog::from_profile`] to check against a newer table.
pub fn valid_phone(phone: &str) -> bool {
    patterns::PHONE.is_match(phone)
}

/// Email address syntax only; no DNS or mailbox checks.
pub fn valid_email(email: &str) -> bool {
    patterns::EMAIL.is_match(email)
}

/// Resident ID number, 18-digit or legacy 15-digit form.
///
/// Structural check only: a wrong trailing check character still passes.
pub fn valid_id_card(number: &str) -> bool {
    patterns::ID_CARD.is_match(number)
}

/// Bank account number: no issuer or Luhn check.
pub fn valid_bank(bank: &str) -> bool {
    patterns::BANK.is_match(bank)
}

/// Whether `path` is an external reference (`http:`, `https:`, `mailto:`, `tel:`).
pub fn is_external(path: &str) -> bool {
    patterns::EXTERNAL.is_match(path)
}

/// Absolute URL whose host is an IPv4 address or ends in a whitelisted TLD.
pub fn valid_url(url: &str) -> bool {
    patterns::URL.is_match(url)
}

pub fn valid_lower_case(s: &str) -> bool {
    patterns::LOWER_CASE.is_match(s)
}

pub fn valid_upper_case(s: &str) -> bool {
    patterns::UPPER_CASE.is_match(s)
}

pub fn valid_alphabets(s: &str) -> bool {
    patterns::ALPHABETS.is_match(s)
}
