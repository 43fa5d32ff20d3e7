//! Host platform flags
//!
//! Classifies a runtime from its self-reported identification string
//! (a browser user agent, for example). Detection is a pure function of the
//! descriptor; the composition root that owns the descriptor may store one
//! result process-wide with [`init`].

use std::sync::{LazyLock, OnceLock};

use regex::Regex;
use serde::Serialize;

static IOS_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(i[^;]+;( U;)? CPU.+Mac OS X").expect("built-in pattern must compile")
});

static CURRENT: OnceLock<Platform> = OnceLock::new();

/// Environment flags derived from a host descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Platform {
    pub is_android: bool,
    pub is_ios: bool,
}

impl Platform {
    pub fn detect(user_agent: &str) -> Self {
        Self {
            is_android: user_agent.contains("Android") || user_agent.contains("Linux"),
            is_ios: IOS_AGENT.is_match(user_agent),
        }
    }
}

/// Detect and store the process-wide flags.
///
/// Only the first call detects; later calls return the stored flags
/// unchanged, whatever descriptor they pass.
pub fn init(user_agent: &str) -> &'static Platform {
    CURRENT.get_or_init(|| {
        let platform = Platform::detect(user_agent);
        log::debug!("Platform flags initialized: {:?}", platform);
        platform
    })
}

/// The process-wide flags, if [`init`] has run
pub fn current() -> Option<&'static Platform> {
    CURRENT.get()
}
