//! CLI runtime configuration.
//!
//! Defaults are resolved once at startup from the process environment (after `.env` has been
//! loaded) and passed into each command. Command-line flags take precedence over these values.

use anyhow::Context;
use uuidkit::{Format, TimeLayout};

/// Environment variable holding the default output format letter.
pub const FORMAT_ENV: &str = "UUIDKIT_FORMAT";

/// Environment variable holding the default generation layout.
pub const LAYOUT_ENV: &str = "UUIDKIT_LAYOUT";

/// Defaults resolved at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliConfig {
    default_format: Format,
    default_layout: TimeLayout,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_format: Format::D,
            default_layout: TimeLayout::TimeOrdered,
        }
    }
}

impl CliConfig {
    /// Reads `UUIDKIT_FORMAT` and `UUIDKIT_LAYOUT` from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_values(
            std::env::var(FORMAT_ENV).ok(),
            std::env::var(LAYOUT_ENV).ok(),
        )
    }

    /// Builds a config from raw variable values without touching the environment.
    ///
    /// `None` or blank values fall back to the defaults (`D`, `time-ordered`).
    pub fn from_env_values(format: Option<String>, layout: Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let default_format = non_blank(format)
            .map(|v| v.parse::<Format>())
            .transpose()
            .with_context(|| format!("{FORMAT_ENV} is not a valid format"))?
            .unwrap_or(defaults.default_format);

        let default_layout = non_blank(layout)
            .map(|v| v.parse::<TimeLayout>())
            .transpose()
            .with_context(|| format!("{LAYOUT_ENV} is not a valid layout"))?
            .unwrap_or(defaults.default_layout);

        Ok(Self {
            default_format,
            default_layout,
        })
    }

    pub fn default_format(&self) -> Format {
        self.default_format
    }

    pub fn default_layout(&self) -> TimeLayout {
        self.default_layout
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
