//! Roadmap version tags
//!
//! Versions ride in the roadmap's free-text `status` field as `"vMAJOR.MINOR"`.
//! [`VersionTag`] is the structured parse/format vehicle: parsing tolerates a
//! missing `v` prefix and falls back to `v1.0` for anything unparseable, and a
//! refresh only ever bumps the minor component.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"v?(\d+)\.(\d+)").expect("valid tag regex"));

/// A `vMAJOR.MINOR` roadmap version tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VersionTag {
    /// Major component; never bumped automatically
    pub major: u32,
    /// Minor component; incremented by one per refresh
    pub minor: u32,
}

impl VersionTag {
    /// Create a tag from its components
    #[inline]
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a tag out of a free-text status field
    ///
    /// Accepts `"v2.3"` and `"2.3"` anywhere in the string. Returns `None`
    /// when no tag is present; callers fall back to [`VersionTag::default`].
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let caps = TAG_RE.captures(text)?;
        let major = caps[1].parse().ok()?;
        let minor = caps[2].parse().ok()?;
        Some(Self { major, minor })
    }

    /// The tag the next refresh produces: minor + 1, major untouched
    #[inline]
    #[must_use]
    pub const fn bumped(self) -> Self {
        Self {
            major: self.major,
            minor: self.minor + 1,
        }
    }
}

impl Default for VersionTag {
    /// `v1.0`, the tag assumed for roadmaps with no parseable version
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}
