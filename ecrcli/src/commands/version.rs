/// Get the version string for ecrcli and libecr
pub fn get_version_string() -> String {
    format!(
        "ecrcli {}\nlibecr {}",
        env!("CARGO_PKG_VERSION"),
        libecr::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
