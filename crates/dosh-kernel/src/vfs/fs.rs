//! The virtual filesystem: session state plus drive-routed file operations.

use chrono::Local;
use dosh_types::{DirEntry, VfsError, VfsResult};
use tokio::fs;

use super::drive::{DriveLetter, DriveTable, DISK_CONFIG_FILE};
use super::resolve::{resolve, resolve_entry, Resolved, Session};
use super::trash::{self, DEFAULT_TRASH_DIR};

/// Drive-letter filesystem over a fixed mount table.
///
/// Owns the session (current drive and directory). Every operation resolves
/// its path through [`resolve`] first, so nothing outside a drive root is ever
/// touched. Removal and trash act on a symlink itself, never on its target.
/// Failed operations leave the session unchanged.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    drives: DriveTable,
    session: Session,
    trash_dir: String,
}

impl VirtualFs {
    /// Create a filesystem whose session starts at the root of the default drive.
    pub fn new(drives: DriveTable) -> Self {
        let session = Session::at_root(drives.default_drive());
        Self {
            drives,
            session,
            trash_dir: DEFAULT_TRASH_DIR.to_string(),
        }
    }

    /// Use a different trash directory (relative to the root of `A:`).
    pub fn with_trash_dir(mut self, dir: impl Into<String>) -> Self {
        self.trash_dir = dir.into();
        self
    }

    pub fn drives(&self) -> &DriveTable {
        &self.drives
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_drive(&self) -> Option<DriveLetter> {
        self.session.drive
    }

    /// Current directory relative to the drive root (`/`, `/docs`).
    pub fn current_dir(&self) -> &str {
        &self.session.dir
    }

    /// Current full path (`A:/docs`), or `[no drive]`.
    pub fn current_path(&self) -> String {
        self.session
            .full_path()
            .unwrap_or_else(|| "[no drive]".to_string())
    }

    /// Virtual path of the trash directory.
    pub fn trash_path(&self) -> String {
        format!("A:/{}", self.trash_dir.trim_matches('/'))
    }

    /// Resolve a virtual path against the current session.
    pub fn resolve(&self, path: &str) -> VfsResult<Resolved> {
        resolve(path, &self.session, &self.drives)
    }

    /// List a directory, sorted by name.
    ///
    /// `disk.json` at a drive root is drive metadata and is not listed.
    pub async fn list(&self, path: &str) -> VfsResult<Vec<DirEntry>> {
        let target = self.resolve(path)?;
        let meta = fs::metadata(&target.host)
            .await
            .map_err(|e| VfsError::from_io(path, e))?;
        if !meta.is_dir() {
            return Err(VfsError::NotADirectory(path.to_string()));
        }

        let mut dir = fs::read_dir(&target.host)
            .await
            .map_err(|e| VfsError::io(path, e))?;
        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| VfsError::io(path, e))? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if target.is_root() && name == DISK_CONFIG_FILE {
                continue;
            }

            // Follow symlinks for size and kind; a dangling link lists as an empty file.
            let listed = match fs::metadata(entry.path()).await {
                Ok(m) if m.is_dir() => DirEntry::directory(name).with_modified(m.modified().ok()),
                Ok(m) => DirEntry::file(name, m.len()).with_modified(m.modified().ok()),
                Err(_) => DirEntry::file(name, 0),
            };
            entries.push(listed);
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Read a file as text.
    pub async fn read(&self, path: &str) -> VfsResult<String> {
        let target = self.resolve(path)?;
        let meta = fs::metadata(&target.host)
            .await
            .map_err(|e| VfsError::from_io(path, e))?;
        if meta.is_dir() {
            return Err(VfsError::IsADirectory(path.to_string()));
        }

        let bytes = fs::read(&target.host)
            .await
            .map_err(|e| VfsError::from_io(path, e))?;
        String::from_utf8(bytes).map_err(|_| VfsError::Io {
            path: path.to_string(),
            message: "file is not valid UTF-8 text".to_string(),
        })
    }

    /// Write text to a file, creating or overwriting it. Parents must exist.
    pub async fn write(&self, path: &str, content: &str) -> VfsResult<()> {
        let target = self.resolve(path)?;
        if is_dir(&target).await {
            return Err(VfsError::IsADirectory(path.to_string()));
        }
        fs::write(&target.host, content)
            .await
            .map_err(|e| VfsError::io(path, e))
    }

    /// Create a directory and any missing parents.
    pub async fn mkdir(&self, path: &str) -> VfsResult<()> {
        let target = self.resolve(path)?;
        if fs::symlink_metadata(&target.host).await.is_ok() {
            return Err(VfsError::AlreadyExists(path.to_string()));
        }
        fs::create_dir_all(&target.host)
            .await
            .map_err(|e| VfsError::io(path, e))
    }

    /// Remove an empty directory. A symlink to a directory is not one.
    pub async fn rmdir(&mut self, path: &str) -> VfsResult<()> {
        let target = resolve_entry(path, &self.session, &self.drives)?;
        if target.is_root() {
            return Err(VfsError::InvalidPath(path.to_string()));
        }
        let real_dir = fs::symlink_metadata(&target.host)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !real_dir {
            return Err(VfsError::NotADirectory(path.to_string()));
        }

        let mut dir = fs::read_dir(&target.host)
            .await
            .map_err(|e| VfsError::io(path, e))?;
        if dir
            .next_entry()
            .await
            .map_err(|e| VfsError::io(path, e))?
            .is_some()
        {
            return Err(VfsError::NotEmpty(path.to_string()));
        }

        fs::remove_dir(&target.host)
            .await
            .map_err(|e| VfsError::io(path, e))?;
        self.repair_session().await;
        Ok(())
    }

    /// Move a file or directory into the trash on drive `A:`.
    ///
    /// Returns the name the item was given inside the trash.
    pub async fn trash(&mut self, path: &str) -> VfsResult<String> {
        let target = resolve_entry(path, &self.session, &self.drives)?;
        if target.is_root() {
            return Err(VfsError::InvalidPath(path.to_string()));
        }
        if fs::symlink_metadata(&target.host).await.is_err() {
            return Err(VfsError::NotFound(path.to_string()));
        }

        if DriveLetter::new('A').and_then(|l| self.drives.get(l)).is_none() {
            return Err(VfsError::TrashUnavailable);
        }
        // The trash location goes through the sandbox like any other path.
        let trash_root = self.resolve(&self.trash_path())?.host;
        if trash_root.starts_with(&target.host) {
            return Err(VfsError::InvalidPath(path.to_string()));
        }

        fs::create_dir_all(&trash_root)
            .await
            .map_err(|e| VfsError::io(self.trash_path(), e))?;

        let name = trash::entry_name(&target.file_name(), Local::now());
        let dest = trash::unique_destination(&trash_root, &name).await;
        trash::move_item(&target.host, &dest)
            .await
            .map_err(|e| VfsError::io(path, e))?;

        let stored = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(name);
        tracing::debug!("trashed {} as {}", target.display(), stored);

        self.repair_session().await;
        Ok(stored)
    }

    /// Delete permanently: a file, or a directory with everything in it.
    pub async fn force_delete(&mut self, path: &str) -> VfsResult<()> {
        let target = resolve_entry(path, &self.session, &self.drives)?;
        if target.is_root() {
            return Err(VfsError::InvalidPath(path.to_string()));
        }
        let meta = fs::symlink_metadata(&target.host)
            .await
            .map_err(|e| VfsError::from_io(path, e))?;

        let removed = if meta.is_dir() {
            fs::remove_dir_all(&target.host).await
        } else {
            fs::remove_file(&target.host).await
        };
        removed.map_err(|e| VfsError::io(path, e))?;

        self.repair_session().await;
        Ok(())
    }

    /// Change the current directory, or the current drive for a bare `X:`.
    ///
    /// Switching drives keeps the current directory when it also exists on
    /// the new drive, otherwise the session moves to the new drive's root.
    pub async fn change_dir(&mut self, path: &str) -> VfsResult<()> {
        if path.len() == 2 && path.ends_with(':') {
            let letter = DriveLetter::parse(path)
                .filter(|l| self.drives.get(*l).is_some())
                .ok_or_else(|| VfsError::UnknownDrive(path.to_string()))?;

            let candidate = Session {
                drive: Some(letter),
                dir: self.session.dir.clone(),
            };
            let same_dir = format!("{}{}", letter, candidate.dir);
            let keep_dir = match resolve(&same_dir, &candidate, &self.drives) {
                Ok(r) => is_dir(&r).await,
                Err(_) => false,
            };
            self.session = if keep_dir {
                candidate
            } else {
                Session::at_root(Some(letter))
            };
            tracing::debug!("changed drive to {}", self.current_path());
            return Ok(());
        }

        let target = self.resolve(path)?;
        if !is_dir(&target).await {
            return Err(VfsError::NotADirectory(path.to_string()));
        }
        self.session = Session {
            drive: Some(target.drive),
            dir: target.virtual_dir(),
        };
        Ok(())
    }

    /// Fall back to the drive root if the current directory was removed.
    async fn repair_session(&mut self) {
        let Some(current) = self.session.full_path() else {
            return;
        };
        if self.session.dir == "/" {
            return;
        }
        let still_there = match self.resolve(&current) {
            Ok(r) => is_dir(&r).await,
            Err(_) => false,
        };
        if !still_there {
            tracing::debug!("current directory {} is gone, returning to root", self.current_path());
            self.session.dir = "/".to_string();
        }
    }
}

async fn is_dir(target: &Resolved) -> bool {
    fs::metadata(&target.host)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
