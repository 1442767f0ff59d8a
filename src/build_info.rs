//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// The line printed by `--version`.
pub fn version_line() -> String {
    format!(
        "idols {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
