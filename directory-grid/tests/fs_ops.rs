mod support;

use directory_grid::{FileSystemModel, Icon, StdFileSystemModel};
use support::ScratchDir;

#[test]
fn std_fs_renames_file() {
    let fs = StdFileSystemModel;
    let scratch = ScratchDir::new("fs_rename");

    let from = scratch.file("a.txt", b"hello");
    let to = from.sibling("b.txt");

    assert!(fs.rename(&from, &to));
    assert!(!from.as_path().exists());
    assert_eq!(std::fs::read(to.as_path()).unwrap(), b"hello");
}

#[test]
fn std_fs_refuses_to_overwrite() {
    let fs = StdFileSystemModel;
    let scratch = ScratchDir::new("fs_clobber");

    let a = scratch.file("a.txt", b"a");
    let b = scratch.file("b.txt", b"b");

    assert!(!fs.rename(&a, &b));
    assert_eq!(std::fs::read(a.as_path()).unwrap(), b"a");
    assert_eq!(std::fs::read(b.as_path()).unwrap(), b"b");
}

#[test]
fn std_fs_rename_onto_itself_is_a_no_op() {
    let fs = StdFileSystemModel;
    let scratch = ScratchDir::new("fs_same");

    let a = scratch.file("a.txt", b"a");
    assert!(fs.rename(&a, &a.clone()));
    assert_eq!(std::fs::read(a.as_path()).unwrap(), b"a");

    let ghost = scratch.entry("ghost.txt");
    assert!(!fs.rename(&ghost, &ghost.clone()));
}

#[test]
fn std_fs_rename_of_missing_file_fails() {
    let fs = StdFileSystemModel;
    let scratch = ScratchDir::new("fs_missing");

    let ghost = scratch.entry("ghost.txt");
    assert!(!fs.rename(&ghost, &ghost.sibling("still-ghost.txt")));
}

#[test]
fn std_fs_classifies_directories() {
    let fs = StdFileSystemModel;
    let scratch = ScratchDir::new("fs_kind");

    let sub = scratch.dir("sub");
    let file = scratch.file("f.txt", b"");
    assert!(fs.is_directory(&sub));
    assert!(!fs.is_directory(&file));
    assert_eq!(fs.icon_for(&sub), Icon::FOLDER);
    assert_eq!(fs.icon_for(&file), Icon::FILE);
    assert!(!fs.is_directory(&scratch.entry("nope")));
}
