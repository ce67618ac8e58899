//! Registry reference parsing and canonical formatting.
//!
//! This module provides a wrapper around `oci_spec::distribution::Reference`
//! that integrates with ociurl's error handling and renders references in a
//! single canonical form: `registry/repository[:tag][@digest]`.

use crate::error::{OciUrlError, Result};
use oci_spec::distribution::Reference as OciReference;
use oci_spec::image::Digest as OciDigest;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;


/// Tag assumed when a reference names neither a tag nor a digest.
pub const DEFAULT_TAG: &str = "latest";

/// A parsed registry reference, wrapping `oci_spec::distribution::Reference`.
///
/// A reference without a tag or digest is normalized to carry
/// [`DEFAULT_TAG`], so its canonical text always names an identifier and
/// re-parsing that text yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference(OciReference);

impl FromStr for Reference {
    type Err = OciUrlError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = OciReference::from_str(s).map_err(|e| {
            OciUrlError::invalid_reference_with_source(
                format!("Invalid image reference '{}': {}", s, e),
                e,
            )
        })?;

        // The reference grammar admits digests that the content digest
        // grammar rejects (uppercase hex), so check both.
        if let Some(digest) = parsed.digest() {
            OciDigest::from_str(digest).map_err(|e| {
                OciUrlError::invalid_reference_with_source(
                    format!("Invalid image reference '{}': {}", s, e),
                    e,
                )
            })?;
        }

        let reference = if parsed.tag().is_none() && parsed.digest().is_none() {
            tracing::trace!(reference = s, "no tag or digest, defaulting to '{}'", DEFAULT_TAG);
            OciReference::with_tag(
                parsed.registry().to_string(),
                parsed.repository().to_string(),
                DEFAULT_TAG.to_string(),
            )
        } else {
            parsed
        };

        Ok(Reference(reference))
    }
}

impl TryFrom<&str> for Reference {
    type Error = OciUrlError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.registry(), self.repository())?;
        if let Some(tag) = self.tag() {
            write!(f, ":{}", tag)?;
        }
        if let Some(digest) = self.digest() {
            write!(f, "@{}", digest)?;
        }
        Ok(())
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Reference {
    /// Returns the registry part of the reference.
    pub fn registry(&self) -> &str {
        self.0.registry()
    }

    /// Returns the repository part of the reference.
    pub fn repository(&self) -> &str {
        self.0.repository()
    }

    /// Returns the tag part of the reference, if present.
    pub fn tag(&self) -> Option<&str> {
        self.0.tag()
    }

    /// Returns the digest part of the reference, if present.
    pub fn digest(&self) -> Option<&str> {
        self.0.digest()
    }

    /// Returns `registry/repository`, without tag or digest.
    ///
    /// # Examples
    ///
    /// ```
    /// use libociurl::Reference;
    ///
    /// let reference: Reference = "ghcr.io/org/repo:v1.0.0".parse().unwrap();
    /// assert_eq!(reference.name(), "ghcr.io/org/repo");
    /// ```
    pub fn name(&self) -> String {
        format!("{}/{}", self.registry(), self.repository())
    }

    /// Returns true when the reference pins content by digest.
    pub fn is_digest(&self) -> bool {
        self.digest().is_some()
    }
}
