//! Terminal host for the office scene.
//!
//! Input mapping, host state, frame rendering and the I/O loops live in
//! separate modules so the scene logic can be exercised without a terminal.

pub mod host;
pub mod input;
pub mod render;
pub mod settings;
pub mod terminal;

pub use host::{FocusTarget, HostStep, SceneHost};
pub use input::{CancelEdge, HostInput};
pub use terminal::{run_interactive, run_line_driven};
