//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("OFFICE_BUILD_GIT_HASH");

pub const BUILD_TIMESTAMP: &str = env!("OFFICE_BUILD_TIMESTAMP");

/// Cargo profile (`debug`/`release`) the binary was built with.
pub const BUILD_PROFILE: &str = env!("OFFICE_BUILD_PROFILE");

/// Version block rendered by `office --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("OFFICE_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("OFFICE_BUILD_TIMESTAMP"),
    " (",
    env!("OFFICE_BUILD_PROFILE"),
    ")"
);
