//! Terminal capability detection from the process environment.
//!
//! Detection is driven by conventional variables:
//!
//! - `LC_ALL`, `LC_CTYPE`, `LANG`: the first one set decides the charset;
//!   Unicode is assumed when it names UTF-8
//! - `NO_COLOR`: any non-empty value disables ANSI styling
//! - `TERM=dumb`: disables both ANSI styling and Unicode
//! - `COLUMNS`: terminal width
//!
//! Both functions take a lookup function; [`crate::initialize`] passes one
//! backed by `std::env::var`, tests pass a fixed map.

use crate::ui::renderable::Capabilities;

/// Width used when `COLUMNS` is missing or unparsable.
pub const DEFAULT_WIDTH: usize = 80;

/// Detects capabilities using `lookup` to read variables.
#[must_use]
pub fn detect_from(lookup: impl Fn(&str) -> Option<String>) -> Capabilities {
    let dumb = lookup("TERM").is_some_and(|term| term == "dumb");

    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| lookup(key).filter(|value| !value.is_empty()));
    let utf8 = locale.as_deref().is_some_and(names_utf8);

    let no_color = lookup("NO_COLOR").is_some_and(|value| !value.is_empty());

    let capabilities = Capabilities {
        unicode: utf8 && !dumb,
        ansi: !no_color && !dumb,
    };
    tracing::debug!(
        locale = ?locale,
        unicode = capabilities.unicode,
        ansi = capabilities.ansi,
        "detected terminal capabilities"
    );
    capabilities
}

/// Reads `COLUMNS` through `lookup`, falling back to [`DEFAULT_WIDTH`].
#[must_use]
pub fn width_from(lookup: impl Fn(&str) -> Option<String>) -> usize {
    lookup("COLUMNS")
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

fn names_utf8(locale: &str) -> bool {
    let lower = locale.to_ascii_lowercase();
    lower.contains("utf-8") || lower.contains("utf8")
}
