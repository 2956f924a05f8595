//! TOML configuration for pickers
//!
//! ```toml
//! locale = "ko-KR"
//!
//! [[picker]]
//! mode = "range"
//! label = "기간 선택"
//! value = { start = "2024-03-10", end = "2024-03-15" }
//! ```
//!
//! `value` is a date string, an array of date strings (multiple mode) or a
//! `{ start, end }` table (range mode).

use crate::components::date_picker::{DatePicker, DateValue, SelectionMode};
use crate::date::CalendarDate;
use crate::i18n::Locale;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("A {found} value does not fit {mode} mode")]
    ValueShape {
        mode: SelectionMode,
        found: &'static str,
    },
}

/// Initial value as written in the file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ValueConfig {
    Date(CalendarDate),
    Dates(Vec<CalendarDate>),
    Range {
        #[serde(default)]
        start: Option<CalendarDate>,
        #[serde(default)]
        end: Option<CalendarDate>,
    },
}

impl ValueConfig {
    fn shape(&self) -> &'static str {
        match self {
            ValueConfig::Date(_) => "date",
            ValueConfig::Dates(_) => "date list",
            ValueConfig::Range { .. } => "range",
        }
    }

    /// Convert to a widget value, checking it fits the mode
    pub fn to_value(&self, mode: SelectionMode) -> Result<DateValue, ConfigError> {
        match (mode, self) {
            (SelectionMode::Multiple, ValueConfig::Dates(dates)) => Ok(DateValue::Dates(dates.clone())),
            (SelectionMode::Range, ValueConfig::Range { start, end }) => Ok(DateValue::Range {
                start: *start,
                end: *end,
            }),
            (
                SelectionMode::Single
                | SelectionMode::Week
                | SelectionMode::Month
                | SelectionMode::Year,
                ValueConfig::Date(date),
            ) => Ok(DateValue::Date(*date)),
            _ => Err(ConfigError::ValueShape {
                mode,
                found: self.shape(),
            }),
        }
    }
}

/// One picker
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatePickerConfig {
    #[serde(default)]
    pub mode: SelectionMode,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<ValueConfig>,
    pub width: Option<u16>,
}

impl DatePickerConfig {
    /// Initial value, if one is configured
    pub fn initial_value(&self) -> Result<Option<DateValue>, ConfigError> {
        self.value
            .as_ref()
            .map(|value| value.to_value(self.mode))
            .transpose()
    }
}

/// A set of pickers sharing a locale
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Locale tag such as `ko-KR`; the environment's locale when absent
    pub locale: Option<String>,
    #[serde(default, rename = "picker")]
    pub pickers: Vec<DatePickerConfig>,
}

impl ShowcaseConfig {
    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ShowcaseConfig =
            toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), pickers = config.pickers.len(), "config loaded");
        Ok(config)
    }

    /// Every configured value must fit its picker's mode
    pub fn validate(&self) -> Result<(), ConfigError> {
        for picker in &self.pickers {
            picker.initial_value()?;
        }
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::from_string)
            .unwrap_or_else(Locale::from_env)
    }
}

impl DatePicker {
    /// Build a picker from its configuration
    pub fn from_config(config: &DatePickerConfig) -> Result<Self, ConfigError> {
        let mut picker = DatePicker::new(config.mode);
        if let Some(label) = &config.label {
            picker = picker.with_label(label.clone());
        }
        if let Some(placeholder) = &config.placeholder {
            picker = picker.with_placeholder(placeholder.clone());
        }
        if let Some(width) = config.width {
            picker = picker.with_width(width);
        }
        if let Some(value) = config.initial_value()? {
            picker = picker.with_value(value);
        }
        Ok(picker)
    }
}
