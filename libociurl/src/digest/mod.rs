//! Digest-qualified references.
//!
//! A [`Digest`] is a [`Reference`] known to pin its content by digest. The
//! content digest itself is validated with `oci_spec::image::Digest`.

use crate::error::{OciUrlError, Result};
use crate::reference::Reference;
use oci_spec::image::Digest as OciDigest;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;


/// A registry reference whose identifier is a content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    reference: Reference,
    content: OciDigest,
}

impl TryFrom<Reference> for Digest {
    type Error = OciUrlError;

    fn try_from(reference: Reference) -> Result<Self> {
        let Some(digest) = reference.digest() else {
            return Err(OciUrlError::invalid_digest(format!(
                "'{}' does not contain a digest",
                reference
            )));
        };

        let content = OciDigest::from_str(digest).map_err(|e| {
            OciUrlError::invalid_digest_with_source(
                format!("Invalid digest format '{}': {}", digest, e),
                e,
            )
        })?;

        Ok(Digest { reference, content })
    }
}

impl FromStr for Digest {
    type Err = OciUrlError;

    /// Parses a bare `registry/repository@algorithm:hex` reference.
    fn from_str(s: &str) -> Result<Self> {
        Digest::try_from(Reference::from_str(s)?)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name(), self.content)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Digest {
    /// Returns the full reference this digest was taken from.
    ///
    /// A tag given alongside the digest is kept here even though the
    /// digest's own text omits it.
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Returns `registry/repository`.
    pub fn name(&self) -> String {
        self.reference.name()
    }

    /// Returns the content digest as `algorithm:hex`.
    pub fn digest(&self) -> String {
        self.content.to_string()
    }

    /// Returns the digest algorithm, e.g. `sha256`.
    pub fn algorithm(&self) -> String {
        self.content.algorithm().to_string()
    }

    /// Returns the encoded hash without the algorithm prefix.
    pub fn encoded(&self) -> &str {
        self.content.digest()
    }
}
