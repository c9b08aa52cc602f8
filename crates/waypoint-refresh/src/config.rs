//! Refresh configuration
//!
//! Defaults reproduce the product's fixed constants: the outcomes section
//! always lands at number 10 and needs two measurements to compare.

use serde::{Deserialize, Serialize};

/// Refresh service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Section number the synthesized outcomes section is written under
    pub outcomes_section_number: u32,
    /// Display name of the synthesized outcomes section
    pub outcomes_section_name: String,
    /// Minimum metric snapshots required before outcomes are reported
    pub min_snapshots: usize,
}

impl RefreshConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With outcomes section number
    #[inline]
    #[must_use]
    pub fn with_outcomes_section_number(mut self, number: u32) -> Self {
        self.outcomes_section_number = number;
        self
    }

    /// With outcomes section name
    #[inline]
    #[must_use]
    pub fn with_outcomes_section_name(mut self, name: impl Into<String>) -> Self {
        self.outcomes_section_name = name.into();
        self
    }

    /// With minimum snapshot count
    #[inline]
    #[must_use]
    pub fn with_min_snapshots(mut self, count: usize) -> Self {
        self.min_snapshots = count;
        self
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    /// Returns the deserialization error for malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            outcomes_section_number: 10,
            outcomes_section_name: "Outcomes & Learning".to_string(),
            min_snapshots: 2,
        }
    }
}
