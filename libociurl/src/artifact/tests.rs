use super::*;
use std::error::Error;

const DIGEST: &str = "sha256:7173b809ca12ec5dee4506cd86be934c4596dd234ee82c0662eac04a8c2c71dc";

fn assert_invalid_url(result: Result<impl std::fmt::Debug>) {
    let err = result.expect_err("expected an error");
    assert!(
        matches!(err, OciUrlError::InvalidUrl { .. }),
        "expected InvalidUrl, got {:?}",
        err
    );
}

#[test]
fn test_parse_artifact_url_with_tag() {
    let result = parse_artifact_url("oci://ghcr.io/org/repo:v1.0.0").unwrap();
    assert_eq!(result, "ghcr.io/org/repo:v1.0.0");
}

#[test]
fn test_parse_repository_url_strips_tag() {
    let result = parse_repository_url("oci://ghcr.io/org/repo:v1.0.0").unwrap();
    assert_eq!(result, "ghcr.io/org/repo");
}

#[test]
fn test_parse_digest_with_tag_fails() {
    let err = parse_digest("oci://ghcr.io/org/repo:v1.0.0").unwrap_err();
    assert!(matches!(err, OciUrlError::InvalidDigest { .. }));
}

#[test]
fn test_parse_artifact_url_with_digest() {
    let url = format!("oci://ghcr.io/org/repo@{}", DIGEST);
    let result = parse_artifact_url(&url).unwrap();
    assert_eq!(result, format!("ghcr.io/org/repo@{}", DIGEST));
}

#[test]
fn test_parse_digest_with_digest_succeeds() {
    let url = format!("oci://ghcr.io/org/repo@{}", DIGEST);
    let digest = parse_digest(&url).unwrap();
    assert_eq!(digest.to_string(), parse_artifact_url(&url).unwrap());
    assert_eq!(digest.digest(), DIGEST);
}

#[test]
fn test_parse_repository_url_strips_digest() {
    let url = format!("oci://ghcr.io/org/repo@{}", DIGEST);
    assert_eq!(parse_repository_url(&url).unwrap(), "ghcr.io/org/repo");
}

#[test]
fn test_missing_prefix_fails_all_operations() {
    let url = "ghcr.io/org/repo:v1.0.0";
    assert_invalid_url(parse_artifact_url(url));
    assert_invalid_url(parse_repository_url(url));
    assert_invalid_url(parse_digest(url));

    let err = parse_artifact_url(url).unwrap_err();
    assert!(err.to_string().contains("oci://<domain>/<org>/<repo>"));
    assert!(err.source().is_none());
}

#[test]
fn test_prefix_is_case_sensitive() {
    assert_invalid_url(parse_artifact_url("OCI://ghcr.io/org/repo:v1"));
    assert_invalid_url(parse_artifact_url("oci:/ghcr.io/org/repo:v1"));
    assert_invalid_url(parse_artifact_url(""));
}

#[test]
fn test_invalid_reference_fails_all_operations() {
    let url = "oci://not a valid ref!!";
    assert_invalid_url(parse_artifact_url(url));
    assert_invalid_url(parse_repository_url(url));
    assert_invalid_url(parse_digest(url));
}

#[test]
fn test_invalid_reference_wraps_cause_and_mentions_input() {
    let url = "oci://not a valid ref!!";
    let err = parse_artifact_url(url).unwrap_err();
    assert!(err.to_string().contains(url));
    assert!(err.to_string().contains("invalid URL"));
    assert!(err.source().is_some());
}

#[test]
fn test_invalid_reference_message_uses_parser_cause() {
    let url = "oci://not a valid ref!!";
    let err = parse_artifact_url(url).unwrap_err();
    let cause = err.source().expect("source should be set").to_string();
    assert_eq!(err.message(), format!("'{}' invalid URL: {}", url, cause));
    assert!(!err.to_string().contains("Invalid image reference"));
}

#[test]
fn test_uppercase_digest_fails_all_operations() {
    let url = "oci://ghcr.io/org/repo@sha256:7173B809CA12ec5dee4506cd86be934c4596dd234ee82c0662eac04a8c2c71dc";
    assert_invalid_url(parse_artifact_url(url));
    assert_invalid_url(parse_repository_url(url));
    assert_invalid_url(parse_digest(url));
}

#[test]
fn test_empty_remainder_fails() {
    assert_invalid_url(parse_artifact_url("oci://"));
}

#[test]
fn test_parse_artifact_url_without_tag_adds_latest() {
    let result = parse_artifact_url("oci://ghcr.io/org/repo").unwrap();
    assert_eq!(result, "ghcr.io/org/repo:latest");
    assert_eq!(
        parse_digest("oci://ghcr.io/org/repo").unwrap_err().to_string(),
        "Invalid digest: 'ghcr.io/org/repo:latest' does not contain a digest"
    );
}

#[test]
fn test_parse_artifact_url_with_port() {
    let result = parse_artifact_url("oci://localhost:5000/org/repo:dev").unwrap();
    assert_eq!(result, "localhost:5000/org/repo:dev");
    assert_eq!(
        parse_repository_url("oci://localhost:5000/org/repo:dev").unwrap(),
        "localhost:5000/org/repo"
    );
}

#[test]
fn test_parse_artifact_url_is_idempotent() {
    for url in [
        "oci://ghcr.io/org/repo:v1.0.0",
        "oci://ghcr.io/org/repo",
        "oci://localhost:5000/org/nested/repo:dev",
    ] {
        let first = parse_artifact_url(url).unwrap();
        let second = parse_artifact_url(&format!("{}{}", ARTIFACT_PREFIX, first)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_parse_artifact_url_round_trips_through_reference() {
    let raw = "ghcr.io/org/repo:v1.0.0";
    let artifact = parse_artifact_url(&format!("oci://{}", raw)).unwrap();
    assert_eq!(
        Reference::from_str(&artifact).unwrap(),
        Reference::from_str(raw).unwrap()
    );
}

#[test]
fn test_repository_is_prefix_of_artifact() {
    let url = format!("oci://ghcr.io/org/repo:v2@{}", DIGEST);
    let artifact = parse_artifact_url(&url).unwrap();
    let repository = parse_repository_url(&url).unwrap();
    assert!(artifact.starts_with(&repository));
    assert!(!repository.contains('@'));
}

#[test]
fn test_is_artifact_url() {
    assert!(is_artifact_url("oci://ghcr.io/org/repo"));
    assert!(is_artifact_url("oci://"));
    assert!(!is_artifact_url("ghcr.io/org/repo"));
    assert!(!is_artifact_url("https://ghcr.io/org/repo"));
}

#[test]
fn test_artifact_url_from_str() {
    let url = ArtifactUrl::from_str("oci://ghcr.io/org/repo:v1.0.0").unwrap();
    assert_eq!(url.artifact(), "ghcr.io/org/repo:v1.0.0");
    assert_eq!(url.repository(), "ghcr.io/org/repo");
    assert_eq!(url.reference().tag(), Some("v1.0.0"));
    assert!(matches!(
        url.digest().unwrap_err(),
        OciUrlError::InvalidDigest { .. }
    ));
}

#[test]
fn test_artifact_url_display_restores_prefix() {
    let url = ArtifactUrl::try_from("oci://ghcr.io/org/repo").unwrap();
    assert_eq!(url.to_string(), "oci://ghcr.io/org/repo:latest");
}

#[test]
fn test_artifact_url_from_reference() {
    let reference = Reference::from_str(&format!("ghcr.io/org/repo@{}", DIGEST)).unwrap();
    let url = ArtifactUrl::from(reference);
    assert_eq!(url.to_string(), format!("oci://ghcr.io/org/repo@{}", DIGEST));
    assert_eq!(url.digest().unwrap().encoded().len(), 64);
}

#[test]
fn test_artifact_url_rejects_missing_prefix() {
    assert_invalid_url(ArtifactUrl::from_str("ghcr.io/org/repo"));
}
