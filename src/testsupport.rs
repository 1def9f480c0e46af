//! Shared test fixtures for controller, layout, and config tests.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::audio::AudioSource;
use crate::scene::{SceneId, SceneLoader};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("office-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Audio source that counts plays through a shared counter.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    plays: Rc<Cell<usize>>,
}

impl RecordingAudio {
    pub fn plays(&self) -> usize {
        self.plays.get()
    }
}

impl AudioSource for RecordingAudio {
    fn play(&mut self) {
        self.plays.set(self.plays.get() + 1);
    }
}

/// Scene loader that records every requested scene.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub loads: Vec<SceneId>,
}

impl SceneLoader for RecordingLoader {
    fn load_scene(&mut self, scene: SceneId) {
        self.loads.push(scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_files() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/office.toml", "[scene]");
        assert_eq!(fs::read_to_string(file).unwrap(), "[scene]");
        assert!(fixture.path().exists());
    }

    #[test]
    fn recording_audio_clones_share_counter() {
        let audio = RecordingAudio::default();
        let mut handle = audio.clone();
        handle.play();
        handle.play();
        assert_eq!(audio.plays(), 2);
    }
}
