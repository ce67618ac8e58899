//! `oci://` artifact URL parsing.
//!
//! An artifact URL is a registry reference behind the `oci://` scheme:
//! `oci://<domain>[:<port>]/<path>[:<tag>|@<digest>]`. Every operation in
//! this module shares one validation path (prefix check, then reference
//! parsing) and differs only in which view of the parsed reference it
//! returns.

use crate::digest::Digest;
use crate::error::{OciUrlError, Result};
use crate::reference::Reference;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// Scheme prefix every artifact URL must start with.
pub const ARTIFACT_PREFIX: &str = "oci://";

const FORMAT_HINT: &str = "URL must be in format 'oci://<domain>/<org>/<repo>'";

/// Validates the artifact URL and returns the address of the artifact.
///
/// # Examples
///
/// ```
/// let artifact = libociurl::parse_artifact_url("oci://ghcr.io/org/repo:v1.0.0").unwrap();
/// assert_eq!(artifact, "ghcr.io/org/repo:v1.0.0");
/// ```
pub fn parse_artifact_url(url: &str) -> Result<String> {
    let reference = parse_artifact_ref(url)?;
    Ok(reference.to_string())
}

/// Validates the artifact URL and returns the address of the repository.
///
/// # Examples
///
/// ```
/// let repo = libociurl::parse_repository_url("oci://ghcr.io/org/repo:v1.0.0").unwrap();
/// assert_eq!(repo, "ghcr.io/org/repo");
/// ```
pub fn parse_repository_url(url: &str) -> Result<String> {
    let reference = parse_artifact_ref(url)?;
    Ok(reference.name())
}

/// Extracts the digest reference from the artifact URL.
///
/// Fails with [`OciUrlError::InvalidDigest`] when the URL is well formed
/// but points at a tag.
pub fn parse_digest(url: &str) -> Result<Digest> {
    let reference = parse_artifact_ref(url)?;
    Digest::try_from(reference)
}

/// Returns true if `s` carries the `oci://` scheme. The remainder is not
/// validated.
pub fn is_artifact_url(s: &str) -> bool {
    s.starts_with(ARTIFACT_PREFIX)
}

fn parse_artifact_ref(url: &str) -> Result<Reference> {
    let Some(remainder) = url.strip_prefix(ARTIFACT_PREFIX) else {
        tracing::debug!(url, "rejected URL without '{}' prefix", ARTIFACT_PREFIX);
        return Err(OciUrlError::invalid_url(FORMAT_HINT));
    };

    let reference = Reference::from_str(remainder).map_err(|e| match e {
        OciUrlError::InvalidReference {
            source: Some(source),
            ..
        } => OciUrlError::InvalidUrl {
            message: format!("'{}' invalid URL: {}", url, source),
            source: Some(source),
        },
        other => {
            OciUrlError::invalid_url_with_source(format!("'{}' invalid URL: {}", url, other), other)
        }
    })?;

    tracing::trace!(url, reference = %reference, "parsed artifact URL");
    Ok(reference)
}

/// A parsed `oci://` artifact URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactUrl {
    reference: Reference,
}

impl FromStr for ArtifactUrl {
    type Err = OciUrlError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(ArtifactUrl {
            reference: parse_artifact_ref(s)?,
        })
    }
}

impl TryFrom<&str> for ArtifactUrl {
    type Error = OciUrlError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<Reference> for ArtifactUrl {
    fn from(reference: Reference) -> Self {
        ArtifactUrl::from_reference(reference)
    }
}

impl fmt::Display for ArtifactUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ARTIFACT_PREFIX, self.reference)
    }
}

impl ArtifactUrl {
    /// Wraps an already-parsed reference as an artifact URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use libociurl::{ArtifactUrl, Reference};
    ///
    /// let reference: Reference = "ghcr.io/org/repo:v1".parse().unwrap();
    /// let url = ArtifactUrl::from_reference(reference);
    /// assert_eq!(url.to_string(), "oci://ghcr.io/org/repo:v1");
    /// ```
    pub fn from_reference(reference: Reference) -> Self {
        ArtifactUrl { reference }
    }

    /// Returns the parsed reference.
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Returns the artifact address, `registry/repository[:tag][@digest]`.
    pub fn artifact(&self) -> String {
        self.reference.to_string()
    }

    /// Returns the repository address, `registry/repository`.
    pub fn repository(&self) -> String {
        self.reference.name()
    }

    /// Returns the digest reference, failing if the URL points at a tag.
    pub fn digest(&self) -> Result<Digest> {
        Digest::try_from(self.reference.clone())
    }
}
