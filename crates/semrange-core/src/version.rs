//! Three-component versions and their total order.

use crate::error::{ConstraintError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[vV]?([0-9]+)\.([0-9]+)\.([0-9]+)(.+)?$").expect("version regex is valid")
});

/// A `major.minor.patch` version with an optional trailing tag.
///
/// Versions are totally ordered: numeric components compare first, then a
/// tagged version sorts before the untagged release with the same triple, and
/// two tags compare lexically. Equality includes the tag, so `1.0.0-rc1` and
/// `1.0.0` are distinct even though one precedes the other.
///
/// # Examples
///
/// ```
/// use semrange_core::Version;
///
/// let release: Version = "1.0.0".parse().unwrap();
/// let candidate: Version = "v1.0.0-rc1".parse().unwrap();
///
/// assert!(candidate < release);
/// assert_ne!(candidate, release);
/// assert_eq!(candidate.to_string(), "1.0.0-rc1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    tag: Option<String>,
}

impl Version {
    /// The smallest version of the domain, `0.0.0`.
    pub const FIRST: Self = Self::new(0, 0, 0);

    /// Creates an untagged version.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            tag: None,
        }
    }

    /// Creates a version carrying a trailing tag such as `-beta.1`.
    ///
    /// An empty tag is treated as no tag.
    pub fn with_tag(major: u64, minor: u64, patch: u64, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            major,
            minor,
            patch,
            tag: (!tag.is_empty()).then_some(tag),
        }
    }

    /// Parses `[v]major.minor.patch[tag]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::MalformedVersion`] unless the whole input
    /// matches; `"1"`, `"1.2"` and `""` all fail.
    pub fn parse(text: &str) -> Result<Self> {
        let captures = VERSION_REGEX
            .captures(text)
            .ok_or_else(|| ConstraintError::malformed_version(text))?;

        let component = |index: usize| -> Result<u64> {
            captures[index]
                .parse()
                .map_err(|_| ConstraintError::malformed_version(text))
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            tag: captures.get(4).map(|m| m.as_str().to_string()),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether the version carries a pre-release (or any other) tag.
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }

    /// Component-wise subtraction `self - other`.
    ///
    /// Not a distance: any component may be negative.
    ///
    /// ```
    /// use semrange_core::Version;
    ///
    /// let a = Version::new(2, 0, 0);
    /// let b = Version::new(1, 2, 3);
    /// assert_eq!(a.difference(&b), (1, -2, -3));
    /// ```
    pub fn difference(&self, other: &Self) -> (i64, i64, i64) {
        (
            signed_delta(self.major, other.major),
            signed_delta(self.minor, other.minor),
            signed_delta(self.patch, other.patch),
        )
    }

    /// Advances one component by `step`, resetting the lower components and
    /// dropping the tag. Saturates instead of overflowing.
    pub fn bumped(&self, bump: Bump, step: u64) -> Self {
        match bump {
            Bump::Major => Self::new(self.major.saturating_add(step), 0, 0),
            Bump::Minor => Self::new(self.major, self.minor.saturating_add(step), 0),
            Bump::Patch => Self::new(self.major, self.minor, self.patch.saturating_add(step)),
        }
    }

    /// Numeric components as a tuple, ignoring the tag.
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

fn signed_delta(a: u64, b: u64) -> i64 {
    (i128::from(a) - i128::from(b)).clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple()
            .cmp(&other.triple())
            .then_with(|| match (&self.tag, &other.tag) {
                (Some(a), Some(b)) => a.cmp(b),
                // pre-releases precede the release
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// The component a release advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

impl Bump {
    /// Classifies `next` as a major, minor or patch release over `previous`.
    ///
    /// Returns `None` when `next` does not advance any numeric component,
    /// for instance a re-tag of the same triple or a backport.
    ///
    /// ```
    /// use semrange_core::{Bump, Version};
    ///
    /// let prev = Version::new(1, 4, 2);
    /// assert_eq!(Bump::between(&prev, &Version::new(2, 0, 0)), Some(Bump::Major));
    /// assert_eq!(Bump::between(&prev, &Version::new(1, 5, 0)), Some(Bump::Minor));
    /// assert_eq!(Bump::between(&prev, &Version::new(1, 4, 3)), Some(Bump::Patch));
    /// assert_eq!(Bump::between(&prev, &Version::new(1, 3, 9)), None);
    /// ```
    pub fn between(previous: &Version, next: &Version) -> Option<Self> {
        match next.difference(previous) {
            (major, _, _) if major > 0 => Some(Self::Major),
            (0, minor, _) if minor > 0 => Some(Self::Minor),
            (0, 0, patch) if patch > 0 => Some(Self::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
