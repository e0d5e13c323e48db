//! Shared traits and enums for dashboard records.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exposes the document-store identifier of a record, when it has one.
pub trait Identifiable {
    fn id(&self) -> Option<&str>;
}

/// Records that can be bucketed by their creation instant.
pub trait Timestamped {
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

/// Decides which month counts as "previous" when the current month is January.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MonthRollover {
    /// January compares against December of the previous year.
    #[default]
    Calendar,
    /// January compares against December of the same year, matching the
    /// historical dashboard figures.
    SameYear,
}

impl fmt::Display for MonthRollover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MonthRollover::Calendar => "calendar",
            MonthRollover::SameYear => "same-year",
        };
        f.write_str(label)
    }
}

impl FromStr for MonthRollover {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "calendar" => Ok(MonthRollover::Calendar),
            "same-year" | "same_year" | "sameyear" => Ok(MonthRollover::SameYear),
            other => Err(format!("unknown month rollover `{other}`")),
        }
    }
}

// Re-export common dependencies so consumers can rely on this crate as a façade.
pub use chrono;
pub use serde;
pub use serde_json;
