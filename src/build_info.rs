//! Compile-time build metadata exposed through `--version`.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `git describe` output captured at build time.
pub const GIT_COMMIT: &str = env!("THEMEPORT_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("THEMEPORT_BUILD_TIMESTAMP");

/// Version string handed to clap for `themeport --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("THEMEPORT_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("THEMEPORT_BUILD_TIMESTAMP")
);

/// One-line summary used in debug logs at startup.
pub fn summary_line() -> String {
    format!("themeport v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
