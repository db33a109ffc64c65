//! Virtual path resolution.
//!
//! Turns `A:/docs/readme.txt` (or a path relative to the session) into a host
//! path that is guaranteed to be the drive root or nested under it.

use std::io;
use std::path::{Component, Path, PathBuf};

use dosh_types::{VfsError, VfsResult};

use super::drive::{DriveLetter, DriveTable};

/// Per-session working location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Current drive, if any drive is mounted.
    pub drive: Option<DriveLetter>,
    /// Current directory relative to the drive root, `/`-prefixed. Root is `/`.
    pub dir: String,
}

impl Session {
    /// A session at the root of `drive`.
    pub fn at_root(drive: Option<DriveLetter>) -> Self {
        Self {
            drive,
            dir: "/".to_string(),
        }
    }

    /// Full current path (`A:/docs`), or `None` without a drive.
    pub fn full_path(&self) -> Option<String> {
        self.drive.map(|d| format!("{}{}", d, self.dir))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::at_root(None)
    }
}

/// A virtual path that passed the sandbox check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Drive the path lives on.
    pub drive: DriveLetter,
    /// Canonical host path (may not exist yet).
    pub host: PathBuf,
    /// Canonical host root of the drive.
    pub root: PathBuf,
}

impl Resolved {
    /// The directory part relative to the drive root, `/`-prefixed.
    pub fn virtual_dir(&self) -> String {
        let rel = self.host.strip_prefix(&self.root).unwrap_or(Path::new(""));
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// Canonical display form, e.g. `A:/docs/readme.txt`.
    pub fn display(&self) -> String {
        format!("{}{}", self.drive, self.virtual_dir())
    }

    /// True if this is the drive root itself.
    pub fn is_root(&self) -> bool {
        self.host == self.root
    }

    /// Last path component, or `A:` for the root.
    pub fn file_name(&self) -> String {
        if self.is_root() {
            return self.drive.to_string();
        }
        self.host
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.drive.to_string())
    }
}

/// Resolve a virtual path against the session and mount table.
///
/// Absolute paths start with `<letter>:`. Anything else is joined onto the
/// session's current path. Backslashes are accepted as separators. The result
/// is canonicalized (symlinks and `..` included) before the containment check,
/// so escapes are rejected no matter how they are spelled.
///
/// Whitespace is significant: `"notes "` and `"notes"` are different names.
pub fn resolve(raw: &str, session: &Session, drives: &DriveTable) -> VfsResult<Resolved> {
    let (drive, root, joined) = join_virtual(raw, session, drives)?;
    let host = canonicalize_lenient(&joined).ok_or_else(|| VfsError::InvalidPath(raw.to_string()))?;
    contained(raw, drive, root, host)
}

/// Resolve a path naming the entry itself, without following a final symlink.
///
/// Only the parent is canonicalized; the last component is appended as given.
/// Removal and move operations use this so they act on a link rather than on
/// whatever it points at. Paths ending in `..` (or naming the root) fall back
/// to [`resolve`].
pub fn resolve_entry(raw: &str, session: &Session, drives: &DriveTable) -> VfsResult<Resolved> {
    let (drive, root, joined) = join_virtual(raw, session, drives)?;
    let (Some(parent), Some(Component::Normal(name))) = (joined.parent(), joined.components().next_back()) else {
        return resolve(raw, session, drives);
    };
    if !parent.starts_with(&root) {
        return resolve(raw, session, drives);
    }

    let parent = canonicalize_lenient(parent).ok_or_else(|| VfsError::InvalidPath(raw.to_string()))?;
    let host = parent.join(name);
    contained(raw, drive, root, host)
}

/// Pick the drive and lexically join the path onto its root.
fn join_virtual(raw: &str, session: &Session, drives: &DriveTable) -> VfsResult<(DriveLetter, PathBuf, PathBuf)> {
    let invalid = || VfsError::InvalidPath(raw.to_string());
    let normalized = raw.replace('\\', "/");

    let (letter, rest) = match split_drive(&normalized) {
        Some((letter, rest)) => (letter, rest.to_string()),
        None => {
            let drive = session.drive.ok_or_else(invalid)?;
            let current = session.dir.trim_end_matches('/');
            let rel = normalized.trim_start_matches('/');
            (drive, format!("{current}/{rel}"))
        }
    };

    if rest.contains(':') {
        return Err(invalid());
    }

    let drive = drives.get(letter).ok_or_else(invalid)?;
    let root = drive.host_root.clone();

    let rest = rest.trim_matches('/');
    let joined = if rest.is_empty() { root.clone() } else { root.join(rest) };
    Ok((letter, root, joined))
}

fn contained(raw: &str, drive: DriveLetter, root: PathBuf, host: PathBuf) -> VfsResult<Resolved> {
    if !host.starts_with(&root) {
        tracing::debug!("rejected {} -> {}", raw, host.display());
        return Err(VfsError::InvalidPath(raw.to_string()));
    }
    Ok(Resolved { drive, host, root })
}

/// Split off a leading `<letter>:`.
fn split_drive(path: &str) -> Option<(DriveLetter, &str)> {
    let mut chars = path.char_indices();
    let (_, first) = chars.next()?;
    let (colon_at, second) = chars.next()?;
    if second != ':' {
        return None;
    }
    let letter = DriveLetter::new(first)?;
    Some((letter, &path[colon_at + 1..]))
}

/// Canonicalize a path whose tail may not exist yet.
///
/// The longest existing prefix is canonicalized by the host; the remaining
/// components are appended lexically. A dangling symlink in the prefix chain
/// is refused since its target cannot be checked.
fn canonicalize_lenient(path: &Path) -> Option<PathBuf> {
    for prefix in path.ancestors() {
        match std::fs::canonicalize(prefix) {
            Ok(mut base) => {
                let tail = path.strip_prefix(prefix).ok()?;
                for component in tail.components() {
                    match component {
                        Component::Normal(part) => base.push(part),
                        Component::ParentDir => {
                            base.pop();
                        }
                        Component::CurDir => {}
                        Component::RootDir | Component::Prefix(_) => return None,
                    }
                }
                return Some(base);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if std::fs::symlink_metadata(prefix).is_ok() {
                    return None;
                }
            }
            Err(_) => return None,
        }
    }
    None
}
