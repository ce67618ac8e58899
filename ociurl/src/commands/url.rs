use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libociurl::{ArtifactUrl, OciUrlError};
use serde::Serialize;

/// Which view of an artifact URL to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// `registry/repository[:tag][@digest]`
    Artifact,
    /// `registry/repository`
    Repository,
    /// `registry/repository@algorithm:hex`
    Digest,
}

/// Parse `url` and render the requested view
pub fn render_view(url: &str, view: View) -> Result<String, OciUrlError> {
    match view {
        View::Artifact => libociurl::parse_artifact_url(url),
        View::Repository => libociurl::parse_repository_url(url),
        View::Digest => libociurl::parse_digest(url).map(|digest| digest.to_string()),
    }
}

/// Handle the artifact, repository and digest commands
pub fn handle_view(ctx: &AppContext, url: &str, view: View) {
    tracing::info!(url, ?view, "parsing artifact URL");

    match render_view(url, view) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            format::error(ctx, &e.to_string());
            std::process::exit(1);
        }
    }
}

/// Every view of an artifact URL, for the inspect command
#[derive(Debug, Serialize, PartialEq)]
pub struct UrlInspection {
    pub url: String,
    pub artifact: String,
    pub repository: String,
    pub registry: String,
    pub path: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
}

impl UrlInspection {
    pub fn from_url(url: &str) -> Result<Self, OciUrlError> {
        let parsed: ArtifactUrl = url.parse()?;
        let reference = parsed.reference();

        Ok(UrlInspection {
            url: parsed.to_string(),
            artifact: parsed.artifact(),
            repository: parsed.repository(),
            registry: reference.registry().to_string(),
            path: reference.repository().to_string(),
            tag: reference.tag().map(str::to_string),
            digest: reference.digest().map(str::to_string),
        })
    }
}

impl Formattable for UrlInspection {
    fn format_pretty(&self) -> String {
        format!(
            "URL:        {}\nArtifact:   {}\nRepository: {}\nRegistry:   {}\nPath:       {}\nTag:        {}\nDigest:     {}",
            self.url,
            self.artifact,
            self.repository,
            self.registry,
            self.path,
            self.tag.as_deref().unwrap_or("-"),
            self.digest.as_deref().unwrap_or("-"),
        )
    }
}

/// Handle the inspect command
pub fn handle_inspect(ctx: &AppContext, url: &str, format: Option<OutputFormat>) {
    let format = format.unwrap_or(ctx.config.style.format);
    tracing::info!(url, format = format.as_str(), "inspecting artifact URL");

    let inspection = match UrlInspection::from_url(url) {
        Ok(inspection) => inspection,
        Err(e) => {
            format::error(ctx, &e.to_string());
            std::process::exit(1);
        }
    };

    match format::format_output(&inspection, format) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
