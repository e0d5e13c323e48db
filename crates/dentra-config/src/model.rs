use std::collections::BTreeMap;

use dentra_domain::{CodeConfig, MonthRollover};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_CODE_WIDTH: usize = 3;

/// Stores user-configurable dashboard preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub month_rollover: MonthRollover,
    /// Business code format per entity kind (`staff`, `patient`, ...).
    #[serde(default = "Config::default_code_formats")]
    pub code_formats: BTreeMap<String, CodeFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "vi-VN".into(),
            currency: "VND".into(),
            month_rollover: MonthRollover::default(),
            code_formats: Self::default_code_formats(),
        }
    }
}

impl Config {
    pub fn default_code_formats() -> BTreeMap<String, CodeFormat> {
        [
            ("staff", "NV"),
            ("patient", "BN"),
            ("treatment", "DT"),
            ("service", "DV"),
            ("inventory", "VT"),
        ]
        .into_iter()
        .map(|(kind, prefix)| (kind.to_string(), CodeFormat::new(prefix, DEFAULT_CODE_WIDTH)))
        .collect()
    }

    pub fn code_format(&self, kind: &str) -> Result<&CodeFormat, ConfigError> {
        self.code_formats
            .get(&kind.trim().to_ascii_lowercase())
            .ok_or_else(|| ConfigError::UnknownCodeKind(kind.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeFormat {
    pub prefix: String,
    #[serde(default = "CodeFormat::default_width")]
    pub width: usize,
}

impl CodeFormat {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    fn default_width() -> usize {
        DEFAULT_CODE_WIDTH
    }

    /// Builds generator input from this format and the codes already issued.
    pub fn with_existing<I, S>(&self, codes: I) -> CodeConfig
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CodeConfig::new(self.prefix.clone(), self.width).with_existing(codes)
    }
}
