//! Pillbox: capsule-shaped styled labels for ANSI terminals.
//!
//! Pillbox renders short status labels ("pills") with category colors, and
//! provides the small set of renderables needed to lay them out:
//! - A [`Label`] with a fixed [`Category`] color table
//! - A `Renderable` contract (`measure` + `render`) shared by pills, text,
//!   rules and tables
//! - Capability-aware output: rounded powerline caps and box drawing on
//!   Unicode terminals, plain padding and ASCII borders elsewhere
//! - A [`Console`](ui::Console) that paints segments as ANSI or bare text

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Showcase Binary (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Samples (samples/)                                 │  ← Demo sections
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Renderable trait, segments, styles               │
//! │  - Pill, text, rule, table                          │
//! │  - Console painter, themes                          │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐       ┌─────────────────────────┐
//! │ Domain (domain/)      │       │ Infrastructure          │
//! │ - Label, Category     │       │ (infrastructure/)       │
//! │ - Error types         │       │ - Capability detection  │
//! └───────────────────────┘       └─────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Label and category model, error types
//! - [`ui`]: Rendering contract, renderables and console painter
//! - [`infrastructure`]: Terminal capability detection
//! - [`extensions`]: Range comparison helpers
//! - [`samples`]: Showcase sections over fixed sample data
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration is a flat key/value map, filled from `PILLBOX_*` environment
//! variables and `key=value` command-line arguments:
//!
//! ```text
//! pillbox unicode=false color=auto width=100 theme=mono trace_level=debug
//! ```
//!
//! # Example
//!
//! ```rust
//! use pillbox::ui::{Capabilities, RenderOptions, Renderable};
//! use pillbox::{Category, Label};
//!
//! let label = Label::new("OK", Category::Info);
//! let options = RenderOptions::new(Capabilities { unicode: true, ansi: true });
//!
//! assert_eq!(label.measure(&options, 1).max, 6);
//! let texts: Vec<String> = label
//!     .render(&options, 80)
//!     .map(|segment| segment.text().to_string())
//!     .collect();
//! assert_eq!(texts, ["\u{E0B6}", " OK ", "\u{E0B4}"]);
//! ```

pub mod domain;
pub mod extensions;
pub mod infrastructure;
pub mod samples;
pub mod ui;

pub mod observability;

pub use domain::{Category, Label, PillboxError, Result};
pub use ui::{Capabilities, Console, RenderOptions, Renderable, Theme};

use std::collections::BTreeMap;
use std::io::Write;

/// Prefix of environment variables read by [`Config::from_env_and_args`].
pub const ENV_PREFIX: &str = "PILLBOX_";

/// Three-way switch for capabilities that can be detected or forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    /// Use what the environment reports.
    #[default]
    Auto,
    On,
    Off,
}

impl Toggle {
    fn parse(key: &str, value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "true" | "yes" | "on" | "1" => Ok(Self::On),
            "false" | "no" | "off" | "0" => Ok(Self::Off),
            other => Err(PillboxError::Config(format!(
                "{key}: expected auto, true or false, got {other:?}"
            ))),
        }
    }

    /// Resolves against a detected value.
    #[must_use]
    pub const fn resolve(self, detected: bool) -> bool {
        match self {
            Self::Auto => detected,
            Self::On => true,
            Self::Off => false,
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Force or detect Unicode glyph support. Default: detect.
    pub unicode: Toggle,

    /// Force or detect ANSI color output. Default: detect.
    pub color: Toggle,

    /// Output width in cells. Default: `COLUMNS`, else 80.
    pub width: Option<usize>,

    /// Built-in theme name (`default`, `mono`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// Unknown keys are ignored with a debug log.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Config`] when `unicode`, `color` or `width` hold
    /// a value that cannot be parsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pillbox::{Config, Toggle};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("unicode".to_string(), "false".to_string());
    /// map.insert("width".to_string(), "100".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.unicode, Toggle::Off);
    /// assert_eq!(config.width, Some(100));
    /// # Ok::<(), pillbox::PillboxError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();

        for (key, value) in map {
            match key.as_str() {
                "unicode" => config.unicode = Toggle::parse(key, value)?,
                "color" => config.color = Toggle::parse(key, value)?,
                "width" => {
                    let width = value
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .filter(|width| *width > 0)
                        .ok_or_else(|| {
                            PillboxError::Config(format!("width: expected a positive integer, got {value:?}"))
                        })?;
                    config.width = Some(width);
                }
                "theme" => config.theme_name = Some(value.clone()),
                "theme_file" => config.theme_file = Some(value.clone()),
                "trace_level" => config.trace_level = Some(value.clone()),
                other => tracing::debug!(key = %other, "ignoring unknown config key"),
            }
        }

        Ok(config)
    }

    /// Builds configuration from `PILLBOX_*` variables read through `lookup`,
    /// then `key=value` arguments, with arguments taking precedence.
    ///
    /// # Errors
    ///
    /// Returns [`PillboxError::Config`] for an argument without `=` or for any
    /// value rejected by [`Config::from_map`].
    pub fn from_env_and_args<I, S>(lookup: impl Fn(&str) -> Option<String>, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();

        for key in ["unicode", "color", "width", "theme", "theme_file", "trace_level"] {
            let var = format!("{ENV_PREFIX}{}", key.to_ascii_uppercase());
            if let Some(value) = lookup(&var) {
                map.insert(key.to_string(), value);
            }
        }

        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg.split_once('=').ok_or_else(|| {
                PillboxError::Config(format!("expected key=value argument, got {arg:?}"))
            })?;
            map.insert(key.trim().to_string(), value.to_string());
        }

        Self::from_map(&map)
    }
}

/// Resolved render settings: capabilities, width and theme.
#[derive(Debug, Clone)]
pub struct Session {
    pub options: RenderOptions,
    pub width: usize,
    pub theme: Theme,
}

impl Session {
    /// Wraps `out` in a console using these settings.
    pub fn console<W: Write>(self, out: W) -> Console<W> {
        Console::new(out, self.options, self.width, self.theme)
    }
}

/// Resolves a [`Session`] from configuration and the real environment.
///
/// Theme resolution: `theme_file`, then `theme_name`, then the default theme.
/// A theme that fails to load is logged and replaced by the default.
#[must_use]
pub fn initialize(config: &Config) -> Session {
    initialize_with(config, |key| std::env::var(key).ok())
}

/// [`initialize`] with an explicit environment lookup.
#[must_use]
pub fn initialize_with(config: &Config, lookup: impl Fn(&str) -> Option<String>) -> Session {
    tracing::debug!("initializing pillbox session");

    let detected = infrastructure::terminal::detect_from(&lookup);
    let capabilities = Capabilities {
        unicode: config.unicode.resolve(detected.unicode),
        ansi: config.color.resolve(detected.ansi),
    };
    let width = config
        .width
        .unwrap_or_else(|| infrastructure::terminal::width_from(&lookup));

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    tracing::debug!(
        unicode = capabilities.unicode,
        ansi = capabilities.ansi,
        width,
        theme = %theme.name,
        "session resolved"
    );

    Session {
        options: RenderOptions::new(capabilities),
        width,
        theme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_map(&BTreeMap::new()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("unicode".to_string(), "maybe".to_string());
        assert!(matches!(Config::from_map(&map), Err(PillboxError::Config(_))));

        let mut map = BTreeMap::new();
        map.insert("width".to_string(), "0".to_string());
        assert!(Config::from_map(&map).is_err());
    }

    #[test]
    fn arguments_override_environment() {
        let config = Config::from_env_and_args(
            env(&[("PILLBOX_UNICODE", "true"), ("PILLBOX_THEME", "mono")]),
            ["unicode=off", "width=42"],
        )
        .unwrap();
        assert_eq!(config.unicode, Toggle::Off);
        assert_eq!(config.width, Some(42));
        assert_eq!(config.theme_name.as_deref(), Some("mono"));
    }

    #[test]
    fn argument_without_equals_is_error() {
        let err = Config::from_env_and_args(env(&[]), ["unicode"]).unwrap_err();
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn overrides_beat_detection() {
        let config = Config {
            unicode: Toggle::Off,
            color: Toggle::On,
            ..Default::default()
        };
        let session = initialize_with(&config, env(&[("LANG", "en_US.UTF-8"), ("NO_COLOR", "1")]));
        assert_eq!(
            session.options.capabilities,
            Capabilities { unicode: false, ansi: true }
        );
        assert_eq!(session.width, infrastructure::DEFAULT_WIDTH);
    }

    #[test]
    fn auto_uses_detection_and_columns() {
        let session = initialize_with(
            &Config::default(),
            env(&[("LANG", "C.UTF-8"), ("COLUMNS", "132")]),
        );
        assert!(session.options.unicode());
        assert!(session.options.capabilities.ansi);
        assert_eq!(session.width, 132);
    }

    #[test]
    fn bad_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            theme_file: None,
            ..Default::default()
        };
        assert_eq!(initialize_with(&config, env(&[])).theme.name, "default");

        let config = Config {
            theme_file: Some("/definitely/not/here.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize_with(&config, env(&[])).theme.name, "default");
    }

    #[test]
    fn named_theme_is_loaded() {
        let config = Config {
            theme_name: Some("mono".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize_with(&config, env(&[])).theme.name, "mono");
    }

    #[test]
    fn theme_file_wins_over_theme_name() {
        use std::io::Write as _;

        let contents = include_str!("../themes/default.toml").replace("name = \"default\"", "name = \"custom\"");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("mono".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        assert_eq!(initialize_with(&config, env(&[])).theme.name, "custom");
    }
}
