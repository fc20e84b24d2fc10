//! Indicator configuration.
//!
//! A [`Config`] tells the indicator which behaviours to drive and how to find
//! its elements. The default matches the usual page layout:
//!
//! | role           | selector               |
//! |----------------|------------------------|
//! | `main`         | `main`                 |
//! | `progress_bar` | `#progress-bar`        |
//! | `main_section` | `section.main-content` |
//! | `top_button`   | `#top-button`          |
//!
//! It can also be loaded from a JSON blob, or from toml with the `toml`
//! feature:
//!
//! ```toml
//! variant = "basic"
//! clamp_to_full = true
//!
//! [selectors]
//! progress_bar = "#reading-progress"
//! ```
use crate::{Role, Variant};
use enum_map::EnumMap;
use std::fmt;
use std::io;

#[cfg(feature = "toml")]
use std::path::Path;

/// Selector used for each role.
pub type Selectors = EnumMap<Role, String>;

/// Settings for an indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    variant: Variant,
    selectors: Selectors,
    clamp_to_full: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variant: Variant::default(),
            selectors: EnumMap::from_fn(|role: Role| role.default_selector().to_string()),
            clamp_to_full: false,
        }
    }
}

impl Config {
    /// Creates a default configuration for the given variant.
    pub fn new(variant: Variant) -> Self {
        Config {
            variant,
            ..Config::default()
        }
    }

    /// Returns the configured variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the selector used to find the element playing `role`.
    pub fn selector(&self, role: Role) -> &str {
        &self.selectors[role]
    }

    /// Returns `true` if progress is capped at 100%.
    pub fn clamp_to_full(&self) -> bool {
        self.clamp_to_full
    }

    /// Sets the variant.
    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    /// Sets the variant.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.set_variant(variant);
        self
    }

    /// Sets the selector for `role`.
    pub fn set_selector<S: Into<String>>(&mut self, role: Role, selector: S) {
        self.selectors[role] = selector.into();
    }

    /// Sets the selector for `role`.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn with_selector<S: Into<String>>(mut self, role: Role, selector: S) -> Self {
        self.set_selector(role, selector);
        self
    }

    /// Caps progress at 100%.
    ///
    /// Off by default: a well-formed page never exceeds 100% anyway.
    pub fn set_clamp_to_full(&mut self, clamp: bool) {
        self.clamp_to_full = clamp;
    }

    /// Caps progress at 100%.
    ///
    /// Chainable variant.
    #[must_use]
    pub fn with_clamp_to_full(mut self, clamp: bool) -> Self {
        self.set_clamp_to_full(clamp);
        self
    }

    /// Updates this configuration from a JSON object.
    ///
    /// Missing keys are left untouched; unknown keys are ignored.
    pub fn load_json_value(&mut self, value: &serde_json::Value) -> Result<(), Error> {
        let table = value.as_object().ok_or_else(|| Error::InvalidValue {
            key: String::new(),
            message: "expected an object".into(),
        })?;

        for (key, value) in table {
            match key.as_str() {
                "variant" => {
                    self.variant = value
                        .as_str()
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| Error::invalid(key, "expected \"basic\" or \"extended\""))?;
                }
                "clamp_to_full" => {
                    self.clamp_to_full = value
                        .as_bool()
                        .ok_or_else(|| Error::invalid(key, "expected a boolean"))?;
                }
                "selectors" => {
                    let selectors = value
                        .as_object()
                        .ok_or_else(|| Error::invalid(key, "expected a table"))?;
                    for (name, selector) in selectors {
                        let Ok(role) = name.parse::<Role>() else {
                            log::warn!("Ignoring selector for unknown role `{name}`");
                            continue;
                        };
                        let selector = selector
                            .as_str()
                            .filter(|s| !s.trim().is_empty())
                            .ok_or_else(|| {
                                Error::invalid(
                                    format!("selectors.{name}"),
                                    "expected a non-empty string",
                                )
                            })?;
                        self.selectors[role] = selector.to_string();
                    }
                }
                _ => log::warn!("Ignoring unknown configuration key `{key}`"),
            }
        }

        Ok(())
    }
}

/// Possible error returned when loading a configuration.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error occurred when reading the file.
    Io(io::Error),

    /// An error occurred when parsing the JSON content.
    Parse(serde_json::Error),

    #[cfg(feature = "toml")]
    #[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
    /// An error occurred when parsing the toml content.
    Toml(toml::de::Error),

    /// A key has a value of the wrong type or shape.
    InvalidValue {
        /// Offending key
        key: String,
        /// What was expected instead
        message: String,
    },
}

impl Error {
    fn invalid<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Error::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "could not read configuration: {err}"),
            Error::Parse(err) => write!(f, "could not parse configuration: {err}"),
            #[cfg(feature = "toml")]
            Error::Toml(err) => write!(f, "could not parse configuration: {err}"),
            Error::InvalidValue { key, message } if key.is_empty() => f.write_str(message),
            Error::InvalidValue { key, message } => write!(f, "`{key}`: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            #[cfg(feature = "toml")]
            Error::Toml(err) => Some(err),
            Error::InvalidValue { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

/// Loads a configuration from a JSON string.
///
/// Keys that are absent keep their default value.
pub fn load_json(content: &str) -> Result<Config, Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let mut config = Config::default();
    config.load_json_value(&value)?;

    Ok(config)
}

/// Loads a configuration from a toml string.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
pub fn load_toml(content: &str) -> Result<Config, Error> {
    let table: toml::Value = toml::de::from_str(content)?;

    let mut config = Config::default();
    config.load_json_value(&serde_json::to_value(table)?)?;

    Ok(config)
}

/// Loads a configuration from a toml file.
///
/// Must have the `toml` feature enabled.
#[cfg(feature = "toml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "toml")))]
pub fn load_config_file<P: AsRef<Path>>(filename: P) -> Result<Config, Error> {
    let content = std::fs::read_to_string(filename)?;

    load_toml(&content)
}

/// Loads the default configuration.
pub fn load_default() -> Config {
    Config::default()
}
