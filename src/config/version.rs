//! monday.com API version definitions.
//!
//! This module provides the [`ApiVersion`] enum sent in the `API-Version`
//! header of every request.

use crate::error::ConfigError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// monday.com API version.
///
/// monday.com releases a new API version every quarter (January, April,
/// July, October). This enum names the versions this crate knows about and
/// falls back to [`ApiVersion::Custom`] for any other well-formed version.
///
/// # Example
///
/// ```rust
/// use monday_async::ApiVersion;
///
/// let version: ApiVersion = "2024-04".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_04);
/// assert_eq!(version.to_string(), "2024-04");
/// assert_eq!(ApiVersion::default(), ApiVersion::V2024_04);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2023-10
    V2023_10,
    /// API version 2024-01
    V2024_01,
    /// API version 2024-04
    #[default]
    V2024_04,
    /// API version 2024-07
    V2024_07,
    /// API version 2024-10
    V2024_10,
    /// API version 2025-01
    V2025_01,
    /// API version 2025-04
    V2025_04,
    /// API version 2025-07
    V2025_07,
    /// Any other `YYYY-MM` version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the most recent version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_07
    }

    /// Returns the oldest version still served by monday.com.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2024_01
    }

    /// Returns all known versions in chronological order.
    #[must_use]
    pub fn known_versions() -> Vec<Self> {
        vec![
            Self::V2023_10,
            Self::V2024_01,
            Self::V2024_04,
            Self::V2024_07,
            Self::V2024_10,
            Self::V2025_01,
            Self::V2025_04,
            Self::V2025_07,
        ]
    }

    /// Returns `true` for the named variants and `false` for `Custom`.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns `true` if this version is not older than
    /// [`minimum_supported`](Self::minimum_supported).
    ///
    /// ```rust
    /// use monday_async::ApiVersion;
    ///
    /// assert!(ApiVersion::V2024_04.is_supported());
    /// assert!(!ApiVersion::V2023_10.is_supported());
    /// ```
    #[must_use]
    pub fn is_supported(&self) -> bool {
        *self >= Self::minimum_supported()
    }

    /// Returns `true` if this version is older than
    /// [`minimum_supported`](Self::minimum_supported).
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        !self.is_supported()
    }

    /// Returns the `YYYY-MM` form of this version.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2023_10 => "2023-10",
            Self::V2024_01 => "2024-01",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::Custom(s) => s,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        if year.len() != 4 || month.len() != 2 {
            return false;
        }
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// YYYY-MM strings sort chronologically, so Custom versions interleave with
// the named ones.
impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2023-10" => Ok(Self::V2023_10),
            "2024-01" => Ok(Self::V2024_01),
            "2024-04" => Ok(Self::V2024_04),
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2023-10".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2023_10
        );
        assert_eq!(
            "2024-04".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2024_04
        );
        assert_eq!(
            " 2025-07 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2025_07
        );
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V2023_10.to_string(), "2023-10");
        assert_eq!(ApiVersion::V2024_04.to_string(), "2024-04");
        assert_eq!(
            ApiVersion::Custom("2025-10".to_string()).to_string(),
            "2025-10"
        );
    }

    #[test]
    fn test_default_version_is_2024_04() {
        assert_eq!(ApiVersion::default(), ApiVersion::V2024_04);
        assert!(ApiVersion::default().is_supported());
    }

    #[test]
    fn test_api_version_parses_future_versions_as_custom() {
        let version: ApiVersion = "2026-01".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-01".to_string()));
        assert!(!version.is_known());
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("2024".parse::<ApiVersion>().is_err());
        assert!("2024-1".parse::<ApiVersion>().is_err());
        assert!("2024-02".parse::<ApiVersion>().is_err());
        assert!("24-01".parse::<ApiVersion>().is_err());
        assert!("2024-04-01".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_known_versions_chronological() {
        let versions = ApiVersion::known_versions();
        assert!(versions.contains(&ApiVersion::latest()));
        for window in versions.windows(2) {
            assert!(window[0] < window[1], "{} < {}", window[0], window[1]);
        }
    }

    #[test]
    fn test_supported_and_deprecated() {
        assert!(ApiVersion::V2023_10.is_deprecated());
        assert!(!ApiVersion::V2023_10.is_supported());
        assert!(ApiVersion::V2024_01.is_supported());
        assert!(ApiVersion::latest().is_supported());
        assert!(ApiVersion::Custom("2026-04".to_string()).is_supported());
        assert!(ApiVersion::Custom("2023-01".to_string()).is_deprecated());
    }

    #[test]
    fn test_custom_versions_order_among_known() {
        let custom = ApiVersion::Custom("2025-10".to_string());
        assert!(ApiVersion::V2025_07 < custom);
        assert!(ApiVersion::Custom("2022-10".to_string()) < ApiVersion::V2023_10);
    }
}
