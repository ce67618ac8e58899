/// Config command handlers
pub mod config;

/// Artifact URL command handlers
pub mod url;

/// Version command handlers
pub mod version;
