//! Drive discovery and the mount table.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the optional per-drive config file at the drive root.
pub const DISK_CONFIG_FILE: &str = "disk.json";

/// A drive letter, always stored upper-case. Displays as `A:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriveLetter(char);

impl DriveLetter {
    /// Create from an ASCII letter (either case).
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_uppercase()))
    }

    /// Parse `a`, `A`, `a:` or `A:`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.strip_suffix(':').unwrap_or(s);
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// The bare upper-case letter.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.0)
    }
}

/// A mounted drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    /// Drive letter.
    pub letter: DriveLetter,
    /// Canonical host directory backing the drive. Fixed at mount time.
    pub host_root: PathBuf,
    /// Kind tag from `disk.json` (`generic` by default).
    pub kind: String,
    /// Label from `disk.json` (`No Label` by default).
    pub label: String,
    /// First-level devices directory the drive was found in.
    pub category: String,
}

/// Contents of `disk.json`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
struct DiskConfig {
    #[serde(rename = "type", default = "default_kind")]
    kind: String,
    #[serde(default = "default_label")]
    label: String,
}

fn default_kind() -> String {
    "generic".to_string()
}

fn default_label() -> String {
    "No Label".to_string()
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            label: default_label(),
        }
    }
}

/// The mount table: drive letter → drive.
///
/// Built once by [`DriveTable::scan`]. A remount builds a new table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveTable {
    drives: BTreeMap<DriveLetter, Drive>,
}

impl DriveTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover drives under `devices/<category>/<drive>/`.
    ///
    /// Never fails: a missing devices directory is created, unreadable entries
    /// and bad configs are logged and skipped or defaulted, and an empty table
    /// is a valid (degraded) result.
    pub fn scan(devices: &Path) -> Self {
        let mut table = Self::new();

        if !devices.is_dir() {
            tracing::info!("devices directory not found at {}, creating it", devices.display());
            if let Err(e) = fs::create_dir_all(devices) {
                tracing::error!("could not create devices directory {}: {}", devices.display(), e);
                return table;
            }
        }

        for category_dir in sorted_subdirs(devices) {
            let category = file_name_lossy(&category_dir);
            for drive_dir in sorted_subdirs(&category_dir) {
                let name = file_name_lossy(&drive_dir);
                let Some(letter) = DriveLetter::parse(&name) else {
                    tracing::warn!("skipping {}: drive directories must be a single letter", drive_dir.display());
                    continue;
                };

                if let Some(existing) = table.drives.get(&letter) {
                    tracing::warn!(
                        "duplicate drive {} in {}, keeping the one from {}",
                        letter, category, existing.category
                    );
                    continue;
                }

                let host_root = match drive_dir.canonicalize() {
                    Ok(p) => p,
                    Err(e) => {
                        tracing::warn!("skipping {}: {}", drive_dir.display(), e);
                        continue;
                    }
                };

                let config = read_disk_config(&host_root);
                tracing::info!("mounted drive {} ({}, {})", letter, config.kind, config.label);
                table.insert(Drive {
                    letter,
                    host_root,
                    kind: config.kind,
                    label: config.label,
                    category: category.clone(),
                });
            }
        }

        table
    }

    /// Add a drive, replacing any drive with the same letter.
    pub fn insert(&mut self, drive: Drive) {
        self.drives.insert(drive.letter, drive);
    }

    /// Look up a drive by letter.
    pub fn get(&self, letter: DriveLetter) -> Option<&Drive> {
        self.drives.get(&letter)
    }

    /// Look up a drive by textual letter (`a`, `A:`), case-insensitive.
    pub fn lookup(&self, letter: &str) -> Option<&Drive> {
        DriveLetter::parse(letter).and_then(|l| self.get(l))
    }

    /// Iterate drives in letter order.
    pub fn iter(&self) -> impl Iterator<Item = &Drive> {
        self.drives.values()
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }

    /// The drive a new session starts on: `A:` if mounted, else the lowest letter.
    pub fn default_drive(&self) -> Option<DriveLetter> {
        let a = DriveLetter('A');
        if self.drives.contains_key(&a) {
            Some(a)
        } else {
            self.drives.keys().next().copied()
        }
    }
}

/// Read `disk.json` from a drive root, falling back to defaults.
fn read_disk_config(root: &Path) -> DiskConfig {
    let path = root.join(DISK_CONFIG_FILE);
    if !path.is_file() {
        return DiskConfig::default();
    }

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str::<DiskConfig>(&s).map_err(|e| e.to_string()));

    match parsed {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("could not read or parse {}: {}", path.display(), e);
            DiskConfig::default()
        }
    }
}

/// Subdirectories of `dir`, sorted by name. Unreadable directories yield nothing.
fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("could not read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosh_testutil::TestRoot;

    #[test]
    fn parse_letters() {
        assert_eq!(DriveLetter::parse("a"), DriveLetter::new('A'));
        assert_eq!(DriveLetter::parse("B:"), DriveLetter::new('b'));
        assert_eq!(DriveLetter::parse("ab"), None);
        assert_eq!(DriveLetter::parse("1:"), None);
        assert_eq!(DriveLetter::parse(""), None);
        assert_eq!(DriveLetter::new('c').map(|l| l.to_string()), Some("C:".to_string()));
    }

    #[test]
    fn scan_reads_config_and_defaults() {
        let root = TestRoot::new();
        root.drive("internal", "A").config(r#"{"type": "system", "label": "Boot"}"#);
        root.drive("external", "b");

        let table = DriveTable::scan(&root.devices());
        assert_eq!(table.len(), 2);

        let a = table.lookup("A:").unwrap();
        assert_eq!(a.kind, "system");
        assert_eq!(a.label, "Boot");
        assert_eq!(a.category, "internal");
        assert!(a.host_root.is_absolute());

        let b = table.lookup("b").unwrap();
        assert_eq!(b.kind, "generic");
        assert_eq!(b.label, "No Label");
    }

    #[test]
    fn malformed_config_degrades_to_defaults() {
        let root = TestRoot::new();
        root.drive("internal", "A").config("{ not json");
        root.drive("internal", "C").config(r#"{"type": 7}"#);

        let table = DriveTable::scan(&root.devices());
        assert_eq!(table.len(), 2);
        for drive in table.iter() {
            assert_eq!(drive.kind, "generic");
            assert_eq!(drive.label, "No Label");
        }
    }

    #[test]
    fn partial_config_keeps_given_fields() {
        let root = TestRoot::new();
        root.drive("internal", "A").config(r#"{"type": "system"}"#);

        let table = DriveTable::scan(&root.devices());
        let a = table.lookup("a").unwrap();
        assert_eq!(a.kind, "system");
        assert_eq!(a.label, "No Label");
    }

    #[test]
    fn missing_devices_dir_is_created() {
        let root = TestRoot::new();
        assert!(!root.devices().exists());

        let table = DriveTable::scan(&root.devices());
        assert!(table.is_empty());
        assert!(root.devices().is_dir());
        assert_eq!(table.default_drive(), None);
    }

    #[test]
    fn non_letter_dirs_and_stray_files_are_skipped() {
        let root = TestRoot::new();
        root.drive("internal", "A");
        root.drive("internal", "floppy");
        std::fs::write(root.devices().join("internal").join("notes.txt"), "x").unwrap();
        std::fs::write(root.devices().join("README"), "x").unwrap();

        let table = DriveTable::scan(&root.devices());
        assert_eq!(table.len(), 1);
        assert!(table.lookup("A").is_some());
    }

    #[test]
    fn duplicate_letter_first_category_wins() {
        let root = TestRoot::new();
        root.drive("external", "A").config(r#"{"label": "usb"}"#);
        root.drive("internal", "a").config(r#"{"label": "disk"}"#);

        let table = DriveTable::scan(&root.devices());
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("A").unwrap().category, "external");
        assert_eq!(table.lookup("A").unwrap().label, "usb");
    }

    #[test]
    fn default_drive_prefers_a() {
        let root = TestRoot::new();
        root.drive("internal", "C");
        root.drive("internal", "B");
        let table = DriveTable::scan(&root.devices());
        assert_eq!(table.default_drive(), DriveLetter::new('B'));

        root.drive("internal", "A");
        let table = DriveTable::scan(&root.devices());
        assert_eq!(table.default_drive(), DriveLetter::new('A'));
    }
}
