use std::fs::{self, File};
use svglist::scanner::directory as scanner_dir;
use tempfile::TempDir;

#[test]
fn test_find_matching_entries_nonrecursive() {
    let td = TempDir::new().unwrap();
    File::create(td.path().join("a.svg")).unwrap();
    File::create(td.path().join("b.svg")).unwrap();
    File::create(td.path().join("readme.md")).unwrap();

    let sub = td.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    File::create(sub.join("c.svg")).unwrap();

    let mut names = scanner_dir::find_matching_entries(td.path(), ".svg").unwrap();
    names.sort();
    assert_eq!(names, vec!["a.svg", "b.svg"]);
}

#[test]
fn test_directory_named_like_svg_is_listed() {
    let td = TempDir::new().unwrap();
    fs::create_dir_all(td.path().join("folder.svg")).unwrap();

    let names = scanner_dir::find_matching_entries(td.path(), ".svg").unwrap();
    assert_eq!(names, vec!["folder.svg"]);
}

#[test]
fn test_custom_suffix() {
    let td = TempDir::new().unwrap();
    File::create(td.path().join("icon.png")).unwrap();
    File::create(td.path().join("icon.svg")).unwrap();

    let names = scanner_dir::find_matching_entries(td.path(), ".png").unwrap();
    assert_eq!(names, vec!["icon.png"]);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_matching_name_is_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use svglist::ListingError;

    let td = TempDir::new().unwrap();
    // Some filesystems refuse non UTF-8 names outright.
    if File::create(td.path().join(OsStr::from_bytes(b"bad\xff.svg"))).is_err() {
        return;
    }
    File::create(td.path().join("good.svg")).unwrap();

    let err = scanner_dir::find_matching_entries(td.path(), ".svg").unwrap_err();
    assert!(matches!(err, ListingError::InvalidName { .. }), "got {:?}", err);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_other_name_is_ignored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let td = TempDir::new().unwrap();
    if File::create(td.path().join(OsStr::from_bytes(b"notes\xff.txt"))).is_err() {
        return;
    }
    File::create(td.path().join("good.svg")).unwrap();

    let names = scanner_dir::find_matching_entries(td.path(), ".svg").unwrap();
    assert_eq!(names, vec!["good.svg"]);
}
