use snape_core::config::SAMPLE_SNIPPETS;
use snape_core::{create_sample_snippets, load_snippets, prepare_snippets, SnapeError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn loads_every_file_sorted_ignoring_case() {
    let dir = tempdir().unwrap();
    write(dir.path(), "zebra.txt", "z");
    write(dir.path(), "Apple.md", "a");
    write(dir.path(), "mango", "m");
    write(dir.path(), "banana.txt", "b");

    let snippets = load_snippets(dir.path()).unwrap();
    let names: Vec<_> = snippets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Apple", "banana", "mango", "zebra"]);
    assert_eq!(snippets[0].content, "a");
    assert_eq!(snippets[0].path, dir.path().join("Apple.md"));
}

#[test]
fn skips_hidden_files_and_walks_subdirectories() {
    let dir = tempdir().unwrap();
    write(dir.path(), ".DS_Store", "junk");
    write(dir.path(), "top.txt", "top");
    write(dir.path(), "work/deep/nested.sh", "echo hi");
    write(dir.path(), "work/.hidden", "secret");

    let snippets = load_snippets(dir.path()).unwrap();
    let names: Vec<_> = snippets.iter().map(|s| s.display_name.as_str()).collect();
    assert_eq!(names, ["nested", "top"]);
    assert_eq!(snippets[0].content, "echo hi");
}

#[test]
fn shared_names_show_their_extension() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.txt", "text");
    write(dir.path(), "a.md", "markdown");
    write(dir.path(), "b.txt", "single");

    let snippets = load_snippets(dir.path()).unwrap();
    let names: Vec<_> = snippets.iter().map(|s| s.display_name.as_str()).collect();
    // Walk order is by file name, and the sort keeps it for equal names
    assert_eq!(names, ["a.md", "a.txt", "b"]);
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bytes.bin"), [b'o', b'k', 0xff]).unwrap();

    let snippets = load_snippets(dir.path()).unwrap();
    assert_eq!(snippets[0].content, "ok\u{fffd}");
}

#[test]
fn missing_directory_fails_the_load() {
    let dir = tempdir().unwrap();
    let err = load_snippets(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, SnapeError::Walk(_)));
}

#[test]
fn samples_fill_an_empty_directory() {
    let dir = tempdir().unwrap();
    let mut snippets = load_snippets(dir.path()).unwrap();
    assert!(snippets.is_empty());

    create_sample_snippets(dir.path(), &mut snippets).unwrap();

    assert_eq!(snippets.len(), SAMPLE_SNIPPETS.len());
    let names: Vec<_> = snippets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["greeting", "hello", "hello-world"]);
    for (file_name, content) in SAMPLE_SNIPPETS {
        assert_eq!(fs::read_to_string(dir.path().join(file_name)).unwrap(), *content);
    }
}

#[test]
fn samples_are_not_written_when_snippets_exist() {
    let dir = tempdir().unwrap();
    write(dir.path(), "mine.txt", "keep");

    let mut snippets = load_snippets(dir.path()).unwrap();
    create_sample_snippets(dir.path(), &mut snippets).unwrap();

    assert_eq!(snippets.len(), 1);
    assert!(!dir.path().join("hello.txt").exists());
}

#[test]
fn prepare_without_directory_is_empty() {
    assert!(prepare_snippets(None).unwrap().is_empty());
}

#[test]
fn prepare_seeds_and_loads() {
    let dir = tempdir().unwrap();
    let snippets = prepare_snippets(Some(dir.path())).unwrap();
    assert_eq!(snippets.len(), SAMPLE_SNIPPETS.len());
    assert_eq!(snippets[1].content, "Hello, World!");
}

#[cfg(unix)]
#[test]
fn symlinked_files_are_loaded() {
    use std::os::unix::fs::symlink;

    let outside = tempdir().unwrap();
    write(outside.path(), "shared.txt", "from elsewhere");
    let dir = tempdir().unwrap();
    symlink(outside.path().join("shared.txt"), dir.path().join("linked.txt")).unwrap();

    let snippets = prepare_snippets(Some(dir.path())).unwrap();
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].name, "linked");
    assert_eq!(snippets[0].content, "from elsewhere");
    assert_eq!(snippets[0].path, dir.path().join("linked.txt"));
    // The link counts as a snippet, so no samples are seeded
    assert!(!dir.path().join("hello.txt").exists());
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_walked() {
    use std::os::unix::fs::symlink;

    let outside = tempdir().unwrap();
    write(outside.path(), "inner.txt", "inner");
    let dir = tempdir().unwrap();
    write(dir.path(), "top.txt", "top");
    symlink(outside.path(), dir.path().join("more")).unwrap();

    let snippets = load_snippets(dir.path()).unwrap();
    let names: Vec<_> = snippets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["top"]);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_fails_the_load() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    write(dir.path(), "a.txt", "a");
    write(dir.path(), "z.txt", "z");
    symlink(dir.path().join("gone.txt"), dir.path().join("m.txt")).unwrap();

    let err = load_snippets(dir.path()).unwrap_err();
    assert!(matches!(err, SnapeError::Io(_)));
}

#[cfg(unix)]
#[test]
fn hidden_dangling_symlink_is_ignored() {
    use std::os::unix::fs::symlink;

    let dir = tempdir().unwrap();
    write(dir.path(), "a.txt", "a");
    symlink(dir.path().join("gone"), dir.path().join(".lock")).unwrap();

    assert_eq!(load_snippets(dir.path()).unwrap().len(), 1);
}
