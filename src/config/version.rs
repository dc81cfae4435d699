//! QuickBooks API minor version.
//!
//! This module provides the [`MinorVersion`] type sent as the mandatory
//! `minorversion` query parameter on every API call.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// QuickBooks Online API minor version.
///
/// The accounting API is versioned under `/v3` with a numeric minor version
/// selecting the entity schema revision. Intuit retired every minor version
/// below 75, which is the default here.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::MinorVersion;
///
/// let version: MinorVersion = "70".parse().unwrap();
/// assert_eq!(version.to_string(), "70");
/// assert_eq!(MinorVersion::default().value(), 75);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorVersion(u32);

impl MinorVersion {
    /// The minor version used when none is configured.
    pub const DEFAULT: Self = Self(75);

    /// Creates a minor version from its number.
    #[must_use]
    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    /// Returns the numeric minor version.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for MinorVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MinorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MinorVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or_else(|| ConfigError::InvalidMinorVersion {
                version: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_version_parses_numbers() {
        let version: MinorVersion = "65".parse().unwrap();
        assert_eq!(version, MinorVersion::new(65));
        assert_eq!(version.to_string(), "65");
    }

    #[test]
    fn test_minor_version_rejects_invalid() {
        assert!("".parse::<MinorVersion>().is_err());
        assert!("0".parse::<MinorVersion>().is_err());
        assert!("seventy".parse::<MinorVersion>().is_err());
        assert!("-3".parse::<MinorVersion>().is_err());
    }

    #[test]
    fn test_minor_version_default() {
        assert_eq!(MinorVersion::default(), MinorVersion::DEFAULT);
        assert_eq!(MinorVersion::default().value(), 75);
    }
}
