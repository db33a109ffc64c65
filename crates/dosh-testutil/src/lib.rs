//! Test fixtures for dosh.
//!
//! [`TestRoot`] creates a unique system root under the host temp directory,
//! offers builders for the `devices/<category>/<drive>/` layout the kernel
//! mounts from, and removes everything on drop.
//!
//! ```
//! use dosh_testutil::TestRoot;
//!
//! let root = TestRoot::new();
//! root.drive("internal", "A").config(r#"{"type": "system"}"#);
//! root.drive("external", "B");
//! assert!(root.devices().join("internal/A/disk.json").is_file());
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A throwaway system root. Deleted when dropped.
#[derive(Debug)]
pub struct TestRoot {
    path: PathBuf,
}

impl TestRoot {
    /// Create an empty root directory unique to this process and call.
    pub fn new() -> Self {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = env::temp_dir().join(format!("dosh-test-{}-{}", std::process::id(), id));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create test root");
        Self { path }
    }

    /// The system root (parent of `devices/`).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `devices/` directory. Not created until a drive is added.
    pub fn devices(&self) -> PathBuf {
        self.path.join("devices")
    }

    /// Create `devices/<category>/<name>/` and return a builder for it.
    pub fn drive(&self, category: &str, name: &str) -> DriveBuilder {
        let dir = self.devices().join(category).join(name);
        fs::create_dir_all(&dir).expect("create drive dir");
        DriveBuilder { dir }
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Populates a drive directory created by [`TestRoot::drive`].
#[derive(Debug, Clone)]
pub struct DriveBuilder {
    dir: PathBuf,
}

impl DriveBuilder {
    /// Host directory backing the drive.
    pub fn host_path(&self) -> &Path {
        &self.dir
    }

    /// Write a raw `disk.json` (may be deliberately malformed).
    pub fn config(self, json: &str) -> Self {
        fs::write(self.dir.join("disk.json"), json).expect("write disk.json");
        self
    }

    /// Create a file (and its parents) relative to the drive root.
    pub fn file(self, rel: &str, content: &str) -> Self {
        let path = self.dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write file");
        self
    }

    /// Create a directory (and its parents) relative to the drive root.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.dir.join(rel)).expect("create dir");
        self
    }
}
