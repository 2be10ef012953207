//! # Application configuration — `mesto.toml`
//!
//! The web crate embeds a TOML file with three sections. Every field has a
//! production default, so a missing section (or an empty file) is equivalent to
//! the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "https://nomoreparties.co/v1"
//! cohort = "cohort-42"
//! token = "00000000-0000-0000-0000-000000000000"
//!
//! [validation]
//! form_selector = ".popup__form"
//! input_selector = ".popup__input"
//! submit_button_selector = ".popup__button"
//! inactive_button_class = "popup__button_disabled"
//! input_error_class = "popup__input_type_error"
//! error_class = "popup__error_visible"
//!
//! [modal]
//! opened_class = "popup_is-opened"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation. |
//! | [`ApiConfig`] | Where the remote API lives and how to authorise against it. |
//! | [`ValidationConfig`] | Selectors and class markers shared by every validated form. Keys also accept the camelCase spelling (`formSelector`, ...). |
//! | [`ModalConfig`] | Class marker applied to open overlays. |
//! | [`Selector`] | A simple `.class` or `#id` selector. |

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::classes::ClassList;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported selector `{0}`: only `.class` and `#id` selectors are supported")]
    UnsupportedSelector(String),
    #[error("`{key}` must be a class selector, got `{selector}`")]
    ClassSelectorRequired { key: &'static str, selector: String },
}

/// Top-level configuration stored in `mesto.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub modal: ModalConfig,
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mesto.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validation.check()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to replace the API token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api.token = token.into();
        self
    }
}

/// Remote API location and credentials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub cohort: String,
    /// Sent verbatim in the `authorization` header.
    #[serde(default)]
    pub token: String,
}

fn default_base_url() -> String {
    "https://nomoreparties.co/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cohort: String::new(),
            token: String::new(),
        }
    }
}

impl ApiConfig {
    /// Base URL with the cohort segment appended, without a trailing slash.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let cohort = self.cohort.trim_matches('/');
        if cohort.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{cohort}")
        }
    }
}

/// Selectors and class markers for the validation engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_form_selector", alias = "formSelector")]
    pub form_selector: Selector,
    #[serde(default = "default_input_selector", alias = "inputSelector")]
    pub input_selector: Selector,
    #[serde(default = "default_submit_selector", alias = "submitButtonSelector")]
    pub submit_button_selector: Selector,
    #[serde(default = "default_inactive_class", alias = "inactiveButtonClass")]
    pub inactive_button_class: String,
    #[serde(default = "default_input_error_class", alias = "inputErrorClass")]
    pub input_error_class: String,
    #[serde(default = "default_error_class", alias = "errorClass")]
    pub error_class: String,
}

fn default_form_selector() -> Selector {
    Selector::Class("popup__form".to_string())
}

fn default_input_selector() -> Selector {
    Selector::Class("popup__input".to_string())
}

fn default_submit_selector() -> Selector {
    Selector::Class("popup__button".to_string())
}

fn default_inactive_class() -> String {
    "popup__button_disabled".to_string()
}

fn default_input_error_class() -> String {
    "popup__input_type_error".to_string()
}

fn default_error_class() -> String {
    "popup__error_visible".to_string()
}

impl ValidationConfig {
    /// Forms and submit buttons repeat across the page, so they can only be
    /// selected by class; `#id` is accepted for inputs alone.
    pub fn check(&self) -> Result<(), ConfigError> {
        for (key, selector) in [
            ("form_selector", &self.form_selector),
            ("submit_button_selector", &self.submit_button_selector),
        ] {
            if selector.class_name().is_none() {
                return Err(ConfigError::ClassSelectorRequired {
                    key,
                    selector: selector.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            form_selector: default_form_selector(),
            input_selector: default_input_selector(),
            submit_button_selector: default_submit_selector(),
            inactive_button_class: default_inactive_class(),
            input_error_class: default_input_error_class(),
            error_class: default_error_class(),
        }
    }
}

/// Overlay class markers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModalConfig {
    #[serde(default = "default_opened_class")]
    pub opened_class: String,
}

fn default_opened_class() -> String {
    "popup_is-opened".to_string()
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            opened_class: default_opened_class(),
        }
    }
}

/// A simple selector matched against an element's id and class list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Id(String),
}

impl Selector {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();
        let (ctor, rest): (fn(String) -> Selector, &str) = if let Some(rest) = s.strip_prefix('.') {
            (Selector::Class, rest)
        } else if let Some(rest) = s.strip_prefix('#') {
            (Selector::Id, rest)
        } else {
            return Err(ConfigError::UnsupportedSelector(s.to_string()));
        };

        let valid = !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ConfigError::UnsupportedSelector(s.to_string()));
        }
        Ok(ctor(rest.to_string()))
    }

    pub fn matches(&self, id: Option<&str>, classes: &ClassList) -> bool {
        match self {
            Selector::Class(name) => classes.contains(name),
            Selector::Id(want) => id == Some(want.as_str()),
        }
    }

    /// The class name a renderer should apply so the element matches, if any.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Selector::Class(name) => Some(name),
            Selector::Id(_) => None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Id(id) => write!(f, "#{id}"),
        }
    }
}

impl std::str::FromStr for Selector {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Selector::parse(&raw).map_err(serde::de::Error::custom)
    }
}
