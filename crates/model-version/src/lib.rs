//! Versions of the build-description model, like `4.0.0`.
//!
//! Parsing a version the model builder knows about hands back the shared
//! registry entry, so callers can compare against [`V4_0_0`] or [`V4_1_0`]
//! directly. Anything else is carried through unchanged, even when it isn't
//! numeric.

use std::{borrow::Cow, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::{debug, trace, warn};

pub type VersionPart = u32;

/// A whole `major.minor.patch` version string, with one named group per part.
pub static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)$").unwrap()
});

pub static V4_0_0: ModelVersion = ModelVersion::known(4, 0, 0, "4.0.0");
pub static V4_1_0: ModelVersion = ModelVersion::known(4, 1, 0, "4.1.0");

// Ascending. Lookups scan from the newest entry backwards.
static ALL_KNOWN_VERSIONS: &[&ModelVersion] = &[&V4_0_0, &V4_1_0];

/// Every model version the model builder understands, oldest first.
pub fn known_versions() -> &'static [&'static ModelVersion] {
    ALL_KNOWN_VERSIONS
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelVersionError {
    #[error("Model version {text} has a part too large to represent")]
    InvalidVersionText { text: String },
    #[error("Empty model version")]
    Empty,
}

/// A three-part model version.
///
/// Equality, ordering and hashing only look at the numbers. The text is kept
/// for display, which is how a version that isn't numeric at all (say
/// `${model.version}`) survives a trip through the model builder: it becomes
/// `0.0.0` with its original text attached. All such versions compare equal to
/// each other.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct ModelVersion {
    major: VersionPart,
    minor: VersionPart,
    patch: VersionPart,
    display: Cow<'static, str>,
}

impl ModelVersion {
    pub fn new(major: VersionPart, minor: VersionPart, patch: VersionPart) -> Self {
        Self {
            major,
            minor,
            patch,
            display: Cow::Owned(format!("{major}.{minor}.{patch}")),
        }
    }

    const fn known(
        major: VersionPart,
        minor: VersionPart,
        patch: VersionPart,
        display: &'static str,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            display: Cow::Borrowed(display),
        }
    }

    fn raw(text: &str) -> Self {
        Self {
            major: 0,
            minor: 0,
            patch: 0,
            display: Cow::Owned(text.to_string()),
        }
    }

    /// Parse a model version, ignoring surrounding spaces and ASCII control
    /// characters.
    ///
    /// Returns `Ok(None)` for blank text. Known versions come back borrowed
    /// from the registry; text that isn't `major.minor.patch` comes back as a
    /// `0.0.0` version displaying that text. The only error is a part that
    /// doesn't fit in a [`VersionPart`].
    pub fn parse(text: &str) -> Result<Option<Cow<'static, Self>>, ModelVersionError> {
        let text = text.trim_matches(|c: char| c <= ' ');
        if text.is_empty() {
            return Ok(None);
        }

        let Some(captures) = VERSION_PATTERN.captures(text) else {
            debug!(text, "Model version is not numeric, keeping it as written");
            return Ok(Some(Cow::Owned(Self::raw(text))));
        };

        let part = |name: &str| {
            captures[name].parse::<VersionPart>().map_err(|_| {
                warn!(text, part = name, "Model version part is out of range");
                ModelVersionError::InvalidVersionText {
                    text: text.to_string(),
                }
            })
        };
        let (major, minor, patch) = (part("major")?, part("minor")?, part("patch")?);

        if let Some(known) = Self::find_known(major, minor, patch) {
            trace!(text, %known, "Resolved known model version");
            return Ok(Some(Cow::Borrowed(known)));
        }

        Ok(Some(Cow::Owned(Self {
            major,
            minor,
            patch,
            display: Cow::Owned(text.to_string()),
        })))
    }

    /// Like [`ModelVersion::parse`], for text that may be missing entirely.
    pub fn parse_optional(
        text: Option<&str>,
    ) -> Result<Option<Cow<'static, Self>>, ModelVersionError> {
        text.map_or(Ok(None), Self::parse)
    }

    fn find_known(
        major: VersionPart,
        minor: VersionPart,
        patch: VersionPart,
    ) -> Option<&'static ModelVersion> {
        known_versions()
            .iter()
            .rev()
            .find(|v| v.major == major && v.minor == minor && v.patch == patch)
            .copied()
    }

    pub fn major(&self) -> VersionPart {
        self.major
    }

    pub fn minor(&self) -> VersionPart {
        self.minor
    }

    pub fn patch(&self) -> VersionPart {
        self.patch
    }

    /// Is this one of the [`known_versions`]?
    pub fn is_known(&self) -> bool {
        Self::find_known(self.major, self.minor, self.patch).is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Stable hash of the numeric parts, `((major * 31) + minor) * 31 + patch`.
    pub fn hash_code(&self) -> u32 {
        self.major
            .wrapping_mul(31)
            .wrapping_add(self.minor)
            .wrapping_mul(31)
            .wrapping_add(self.patch)
    }
}

impl PartialEq for ModelVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }
}

impl Eq for ModelVersion {}

impl std::hash::Hash for ModelVersion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl Ord for ModelVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for ModelVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

impl FromStr for ModelVersion {
    type Err = ModelVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?
            .map(Cow::into_owned)
            .ok_or(ModelVersionError::Empty)
    }
}
