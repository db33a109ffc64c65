//! Virtual Filesystem (VFS) for dosh.
//!
//! The VFS exposes host directories as lettered drives:
//!
//! - **DriveTable**: Drives discovered once at startup from the devices tree
//! - **resolve**: Turns a virtual path into a sandboxed host path
//! - **VirtualFs**: Session state (current drive/dir) plus file operations
//!
//! # Design
//!
//! Drives are found two levels below `<root>/devices`:
//!
//! ```text
//! <root>/devices/
//! ├── internal/
//! │   ├── A/            # A:  (disk.json: {"type": "system"})
//! │   └── C/            # C:
//! └── external/
//!     └── B/            # B:
//! ```
//!
//! Every operation resolves its path first. A resolved path is always the
//! drive root or something nested under it after canonicalization, so `..`
//! and symlinks cannot leave the drive.

mod drive;
mod fs;
mod resolve;
mod trash;

pub use drive::{Drive, DriveLetter, DriveTable, DISK_CONFIG_FILE};
pub use fs::VirtualFs;
pub use resolve::{resolve, resolve_entry, Resolved, Session};
pub use trash::{entry_name as trash_entry_name, DEFAULT_TRASH_DIR};
