//! Fahrenheit temperature classification.
//!
//! A temperature falls into exactly one [`TemperatureBand`]:
//!
//! | Range            | Band     | Label                |
//! |------------------|----------|----------------------|
//! | `t > 85`         | `High`   | `High temperature`   |
//! | `50 <= t <= 85`  | `Normal` | `Normal temperature` |
//! | `t < 50`         | `Low`    | `Low temperature`    |
//!
//! # Example
//!
//! ```rust
//! use tempband::classifier::{classify, TemperatureBand};
//!
//! assert_eq!(classify(90), TemperatureBand::High);
//! assert_eq!(classify(70).label(), "Normal temperature");
//! ```

use serde::Serialize;
use std::fmt;

/// Lowest temperature (inclusive) in the normal band
pub const NORMAL_MIN: i32 = 50;

/// Highest temperature (inclusive) in the normal band
pub const NORMAL_MAX: i32 = 85;

/// Band a Fahrenheit temperature falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    /// Above `NORMAL_MAX`
    High,
    /// Between `NORMAL_MIN` and `NORMAL_MAX`, both inclusive
    Normal,
    /// Below `NORMAL_MIN`
    Low,
}

impl TemperatureBand {
    /// Fixed output label for this band
    pub fn label(self) -> &'static str {
        match self {
            TemperatureBand::High => "High temperature",
            TemperatureBand::Normal => "Normal temperature",
            TemperatureBand::Low => "Low temperature",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a Fahrenheit temperature into its band
pub fn classify(temperature: i32) -> TemperatureBand {
    if temperature > NORMAL_MAX {
        TemperatureBand::High
    } else if (NORMAL_MIN..=NORMAL_MAX).contains(&temperature) {
        TemperatureBand::Normal
    } else {
        TemperatureBand::Low
    }
}

/// Label for a Fahrenheit temperature
pub fn classify_label(temperature: i32) -> &'static str {
    classify(temperature).label()
}

/// A temperature together with the band it was classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub temperature: i32,
    pub band: TemperatureBand,
    pub label: &'static str,
}

impl Classification {
    pub fn of(temperature: i32) -> Self {
        let band = classify(temperature);
        Self {
            temperature,
            band,
            label: band.label(),
        }
    }
}
