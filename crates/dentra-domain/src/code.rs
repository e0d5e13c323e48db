use serde::{Deserialize, Serialize};

/// Inputs for generating the next sequential business code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeConfig {
    pub prefix: String,
    /// Minimum digit count; shorter numbers are zero-padded.
    pub width: usize,
    #[serde(default)]
    pub existing_codes: Vec<String>,
}

impl CodeConfig {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            existing_codes: Vec::new(),
        }
    }

    pub fn with_existing<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_codes.extend(codes.into_iter().map(Into::into));
        self
    }
}
