//! Versions as written inside constraints, before desugaring.

use crate::error::{ConstraintError, Result};
use crate::helpers::{minor_interval, patch_interval};
use crate::interval::{BoundKind, Endpoint, Interval};
use crate::version::{Bump, Version};

/// One component of a written version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Number(u64),
    /// `*`, `x` or `X`.
    Wildcard,
    Missing,
}

impl Part {
    /// Reads a captured component.
    ///
    /// `None` is a missing component, any of `*`, `x`, `X` a wildcard.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::MalformedVersion`] for a number that does
    /// not fit in `u64` or any other text.
    pub fn read(text: Option<&str>) -> Result<Self> {
        match text {
            None => Ok(Self::Missing),
            Some("*" | "x" | "X") => Ok(Self::Wildcard),
            Some(digits) => digits
                .parse()
                .map(Self::Number)
                .map_err(|_| ConstraintError::malformed_version(digits)),
        }
    }

    pub fn number(self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Wildcard | Self::Missing => None,
        }
    }
}

/// A version with possibly missing or wildcarded components, like `1.2`,
/// `1.*` or `x`.
///
/// ```
/// use semrange_core::PartialVersion;
///
/// let partial = PartialVersion::read(Some("1"), Some("x"), None).unwrap();
/// assert_eq!(partial.precision(), 1);
/// assert!(partial.has_wildcard());
/// assert_eq!(partial.x_range().to_string(), "[1.0.0,2.0.0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialVersion {
    pub major: Part,
    pub minor: Part,
    pub patch: Part,
}

impl PartialVersion {
    /// Reads three captured components.
    ///
    /// # Errors
    ///
    /// See [`Part::read`].
    pub fn read(major: Option<&str>, minor: Option<&str>, patch: Option<&str>) -> Result<Self> {
        Ok(Self {
            major: Part::read(major)?,
            minor: Part::read(minor)?,
            patch: Part::read(patch)?,
        })
    }

    /// Number of leading components given as numbers.
    pub fn precision(&self) -> usize {
        [self.major, self.minor, self.patch]
            .iter()
            .take_while(|part| part.number().is_some())
            .count()
    }

    pub fn has_wildcard(&self) -> bool {
        [self.major, self.minor, self.patch].contains(&Part::Wildcard)
    }

    /// The version with every unspecified component set to 0.
    pub fn floor(&self) -> Version {
        Version::new(
            self.major.number().unwrap_or(0),
            self.minor.number().unwrap_or(0),
            self.patch.number().unwrap_or(0),
        )
    }

    /// First version past the line a partial names: `2.0.0` for `1` or
    /// `1.x`, `1.3.0` for `1.2`. `None` for a full version or a bare
    /// wildcard, which name no line.
    pub fn ceiling(&self) -> Option<Version> {
        let floor = self.floor();
        match self.precision() {
            1 => Some(floor.bumped(Bump::Major, 1)),
            2 => Some(floor.bumped(Bump::Minor, 1)),
            _ => None,
        }
    }

    /// The versions matching the given prefix: `*` is everything, `1.x`
    /// the 1.x line, `1.2.x` the 1.2.x line, and a full version only itself.
    pub fn x_range(&self) -> Interval {
        let floor = self.floor();
        match self.precision() {
            0 => Interval::unbounded(),
            1 => minor_interval(&floor),
            2 => patch_interval(&floor),
            _ => Interval::singleton(floor),
        }
    }
}

/// `lower - upper`: inclusive of the whole line named by a partial upper end.
///
/// `1.0.0 - 2` is `[1.0.0,3.0.0)`, `1.0.0 - 2.0` is `[1.0.0,2.1.0)`,
/// `1.0.0 - 2.0.0` is `[1.0.0,2.0.0]`, and a wildcard upper end is unbounded.
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidBounds`] when the range runs backwards.
///
/// ```
/// use semrange_core::{PartialVersion, hyphen_range};
///
/// let lower = PartialVersion::read(Some("1"), Some("2"), None).unwrap();
/// let upper = PartialVersion::read(Some("2"), Some("3"), Some("4")).unwrap();
/// assert_eq!(hyphen_range(&lower, &upper).unwrap().to_string(), "[1.2.0,2.3.4]");
/// ```
pub fn hyphen_range(lower: &PartialVersion, upper: &PartialVersion) -> Result<Interval> {
    let lower = lower.floor();
    if upper.precision() == 0 {
        return Ok(Interval::at_least(lower));
    }
    match upper.ceiling() {
        Some(ceiling) => Interval::closed_open(lower, ceiling),
        None => Interval::new(
            BoundKind::Closed,
            lower,
            Endpoint::Finite(upper.floor()),
            BoundKind::Closed,
        ),
    }
}
