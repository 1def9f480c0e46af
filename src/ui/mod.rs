//! Terminal-facing presentation helpers shared by the host.

pub mod theme;
