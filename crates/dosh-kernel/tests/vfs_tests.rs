//! Virtual filesystem tests against real host directories.
//!
//! Each test builds a throwaway `devices/` tree with TestRoot and drives the
//! public VirtualFs API the way the builtins do.

use dosh_kernel::vfs::{DriveTable, VirtualFs};
use dosh_kernel::{DirEntryKind, VfsError};
use dosh_testutil::TestRoot;
use rstest::rstest;

fn two_drives() -> (TestRoot, VirtualFs) {
    let root = TestRoot::new();
    root.drive("internal", "A")
        .config(r#"{"type": "system", "label": "System"}"#)
        .dir("user")
        .file("readme.txt", "hello");
    root.drive("external", "B").dir("music");
    let vfs = VirtualFs::new(DriveTable::scan(&root.devices()));
    (root, vfs)
}

// ============================================================================
// Sandbox
// ============================================================================

#[rstest]
#[case("..")]
#[case("../..")]
#[case("A:/..")]
#[case("A:/user/../../..")]
#[case("B:/../internal/A")]
#[case("Z:/")]
#[case("A:/foo:bar")]
fn escapes_are_rejected(#[case] path: &str) {
    let (_root, vfs) = two_drives();
    assert!(
        matches!(vfs.resolve(path), Err(VfsError::InvalidPath(_))),
        "{path:?} resolved"
    );
}

#[rstest]
#[case("A:/user/..", "A:/")]
#[case("a:\\user", "A:/user")]
#[case("user/./../readme.txt", "A:/readme.txt")]
#[case("B:", "B:/")]
#[case("B:/music/", "B:/music")]
fn paths_normalize(#[case] path: &str, #[case] expected: &str) {
    let (_root, vfs) = two_drives();
    assert_eq!(vfs.resolve(path).unwrap().display(), expected);
}

#[cfg(unix)]
#[tokio::test]
async fn symlink_out_of_drive_is_not_followed() {
    let (root, vfs) = two_drives();
    let outside = root.path().join("secret.txt");
    std::fs::write(&outside, "top secret").unwrap();
    std::os::unix::fs::symlink(&outside, root.devices().join("internal/A/link.txt")).unwrap();

    assert!(matches!(vfs.read("link.txt").await, Err(VfsError::InvalidPath(_))));
}

// ============================================================================
// File operations
// ============================================================================

#[tokio::test]
async fn write_read_round_trip_preserves_bytes() {
    let (_root, vfs) = two_drives();
    let text = "line one\n  indented\r\nno newline at end";
    vfs.write("B:/music/notes.txt", text).await.unwrap();
    assert_eq!(vfs.read("B:/music/notes.txt").await.unwrap(), text);
}

#[tokio::test]
async fn listing_is_sorted_and_hides_disk_config() {
    let (_root, vfs) = two_drives();
    vfs.write("zeta.txt", "z").await.unwrap();
    vfs.mkdir("alpha").await.unwrap();

    let names: Vec<_> = vfs.list("A:/").await.unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["alpha", "readme.txt", "user", "zeta.txt"]);

    let entries = vfs.list("A:/").await.unwrap();
    assert_eq!(entries[0].kind, DirEntryKind::Directory);
    assert_eq!(entries[1].size, 5);
}

#[tokio::test]
async fn error_kinds() {
    let (_root, mut vfs) = two_drives();
    assert!(matches!(vfs.read("nope.txt").await, Err(VfsError::NotFound(_))));
    assert!(matches!(vfs.read("user").await, Err(VfsError::IsADirectory(_))));
    assert!(matches!(vfs.mkdir("user").await, Err(VfsError::AlreadyExists(_))));
    assert!(matches!(vfs.rmdir("readme.txt").await, Err(VfsError::NotADirectory(_))));
    assert!(matches!(vfs.rmdir("A:/").await, Err(VfsError::InvalidPath(_))));
    assert!(matches!(vfs.change_dir("Q:").await, Err(VfsError::UnknownDrive(_))));

    vfs.write("user/keep.txt", "x").await.unwrap();
    assert!(matches!(vfs.rmdir("user").await, Err(VfsError::NotEmpty(_))));
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn cd_round_trip() {
    let (_root, mut vfs) = two_drives();
    vfs.mkdir("user/docs").await.unwrap();

    vfs.change_dir("user/docs").await.unwrap();
    assert_eq!(vfs.current_path(), "A:/user/docs");
    vfs.change_dir("..").await.unwrap();
    vfs.change_dir("..").await.unwrap();
    assert_eq!(vfs.current_path(), "A:/");

    vfs.change_dir("B:").await.unwrap();
    assert_eq!(vfs.current_path(), "B:/");
    vfs.change_dir("music").await.unwrap();
    assert_eq!(vfs.current_path(), "B:/music");
}

#[tokio::test]
async fn removing_the_cwd_moves_the_session_up() {
    let (_root, mut vfs) = two_drives();
    vfs.mkdir("user/tmp/deep").await.unwrap();
    vfs.change_dir("user/tmp/deep").await.unwrap();

    vfs.force_delete("A:/user/tmp").await.unwrap();
    assert_eq!(vfs.current_path(), "A:/");
}

// ============================================================================
// Trash
// ============================================================================

#[tokio::test]
async fn trash_keeps_both_copies_of_a_name() {
    let (root, mut vfs) = two_drives();
    let first = vfs.trash("readme.txt").await.unwrap();
    vfs.write("readme.txt", "again").await.unwrap();
    let second = vfs.trash("readme.txt").await.unwrap();

    assert_ne!(first, second);
    assert!(first.starts_with("readme.txt."));
    let trash = root.devices().join("internal/A/user/trashbin");
    assert_eq!(std::fs::read_dir(trash).unwrap().count(), 2);
    assert!(matches!(vfs.read("readme.txt").await, Err(VfsError::NotFound(_))));
}

#[tokio::test]
async fn trash_needs_drive_a() {
    let root = TestRoot::new();
    root.drive("external", "B").file("x.txt", "x");
    let mut vfs = VirtualFs::new(DriveTable::scan(&root.devices()));
    assert_eq!(vfs.trash("B:/x.txt").await, Err(VfsError::TrashUnavailable));
    assert_eq!(vfs.read("B:/x.txt").await.unwrap(), "x");
}

#[tokio::test]
async fn trashing_the_trash_is_refused() {
    let (_root, mut vfs) = two_drives();
    vfs.mkdir("user/trashbin").await.unwrap();
    assert!(matches!(vfs.trash("user").await, Err(VfsError::InvalidPath(_))));
    assert!(matches!(vfs.trash("user/trashbin").await, Err(VfsError::InvalidPath(_))));
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn rescan_is_idempotent() {
    let (root, vfs) = two_drives();
    let again = DriveTable::scan(&root.devices());
    let letters = |t: &DriveTable| t.iter().map(|d| d.letter.as_char()).collect::<Vec<_>>();
    assert_eq!(letters(vfs.drives()), letters(&again));
    assert_eq!(letters(&again), vec!['A', 'B']);
}
