/// Get the version string for ociurl and libociurl
pub fn get_version_string() -> String {
    format!(
        "ociurl {}\nlibociurl {}",
        env!("CARGO_PKG_VERSION"),
        libociurl::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
