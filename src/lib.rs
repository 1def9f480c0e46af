//! Office: the office scene's interface visibility controller.
//!
//! The office scene shows a menu of buttons (the container surface). Each
//! menu button opens a closeable panel and hides the menu; a close button or
//! the cancel key brings the menu back, and cancelling from the menu leaves
//! for the main menu scene.
//!
//! # Quick start
//!
//! ```no_run
//! use office::audio::SilentAudio;
//! use office::config::load_config;
//! use office::layout::OfficeScene;
//! use office::scene::PendingTransition;
//!
//! let config = load_config(None).unwrap();
//! let mut scene =
//!     OfficeScene::build(&config, Some(SilentAudio), PendingTransition::default()).unwrap();
//! let open = scene.board.openers[0].click().to_vec();
//! scene.controller.dispatch_all(&open);
//! assert!(scene.controller.close_all());
//! ```

pub mod audio;
pub mod button;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod scene;
pub mod style;
pub mod surface;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;
