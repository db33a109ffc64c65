//! Trash naming and moves.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tokio::fs;

/// Trash location relative to the root of drive `A:`.
pub const DEFAULT_TRASH_DIR: &str = "user/trashbin";

/// `<basename>.<YYYYmmddHHMMSS>`
pub fn entry_name(base: &str, at: DateTime<Local>) -> String {
    format!("{}.{}", base, at.format("%Y%m%d%H%M%S"))
}

/// First free path in `dir` for `name`, adding `-1`, `-2`, ... on collision.
pub(crate) async fn unique_destination(dir: &Path, name: &str) -> PathBuf {
    let mut candidate = dir.join(name);
    let mut n = 1u32;
    while fs::symlink_metadata(&candidate).await.is_ok() {
        candidate = dir.join(format!("{name}-{n}"));
        n += 1;
    }
    candidate
}

/// Rename `src` to `dest`, copying files across devices when rename fails.
pub(crate) async fn move_item(src: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(src, dest).await {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            let meta = fs::symlink_metadata(src).await?;
            if !meta.is_file() {
                return Err(rename_err);
            }
            tracing::debug!("rename into trash failed ({}), copying instead", rename_err);
            fs::copy(src, dest).await?;
            fs::remove_file(src).await
        }
    }
}
