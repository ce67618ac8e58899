//! ociurl - OCI Artifact URL Library
//!
//! ociurl validates artifact addresses of the form
//! `oci://<domain>/<org>/<repo>[:<tag>|@<digest>]` and derives three views
//! of them: the artifact reference, the repository address and the
//! digest-qualified reference.
//!
//! # Quick Start
//!
//! ```
//! use libociurl::{parse_artifact_url, parse_digest, parse_repository_url};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = "oci://ghcr.io/org/repo:v1.0.0";
//!
//!     assert_eq!(parse_artifact_url(url)?, "ghcr.io/org/repo:v1.0.0");
//!     assert_eq!(parse_repository_url(url)?, "ghcr.io/org/repo");
//!
//!     // A tag is not a digest
//!     assert!(parse_digest(url).is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`ArtifactUrl`] - A parsed `oci://` URL with all three views
//! - [`Reference`] - Registry reference parsing and canonical formatting
//! - [`Digest`] - A reference pinned by content digest
//! - [`OciUrlError`] - Error type for every operation
//!
//! Parsing is pure: no I/O, no shared state, no caching. Tags are never
//! resolved to digests here; that needs a registry round trip.

#![warn(clippy::all)]

/// Returns the libociurl crate version.
///
/// # Examples
///
/// ```
/// let version = libociurl::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod artifact;
pub mod digest;
pub mod error;
pub mod reference;

pub use artifact::{
    ARTIFACT_PREFIX, ArtifactUrl, is_artifact_url, parse_artifact_url, parse_digest,
    parse_repository_url,
};
pub use digest::Digest;
pub use error::{OciUrlError, Result};
pub use reference::Reference;
