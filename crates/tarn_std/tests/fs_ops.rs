use std::path::Path;

use tarn_std::fs::{self, Fs};
use tarn_std::text::Text;

fn p(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

fn root_of(tmp: &tempfile::TempDir) -> String {
    tmp.path().to_string_lossy().into_owned()
}

#[test]
fn write_then_read_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let file = p(tmp.path(), "a.txt");
    assert!(fs::write_file(&file, "abc"));
    assert_eq!(fs::read_file(&file), Some(Text::from("abc")));
    assert!(fs::write_file(&file, "xy"));
    assert_eq!(fs::read_file(&file).unwrap(), "xy");
    assert!(fs::append_file(&file, "z"));
    assert_eq!(fs::read_file(&file).unwrap(), "xyz");
}

#[test]
fn missing_paths_resolve_to_absence() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = p(tmp.path(), "nope.txt");
    assert_eq!(fs::read_file(&missing), None);
    assert!(fs::read_lines(&missing).is_empty());
    assert!(!fs::exists(&missing));
    assert_eq!(fs::file_size(&missing), -1);
    assert!(!fs::write_file(p(tmp.path(), "no/such/dir.txt"), "x"));
    assert!(fs::list_dir(&missing).is_empty());
    assert!(!fs::remove(&missing));
    assert_eq!(fs::remove_all(&missing), 0);
}

#[test]
fn read_lines_splits_on_line_boundaries() {
    let tmp = tempfile::tempdir().unwrap();
    let file = p(tmp.path(), "lines.txt");
    fs::write_file(&file, "one\r\ntwo\n\nfour\n");
    assert_eq!(fs::read_lines(&file), vec!["one", "two", "", "four"]);
    fs::write_file(&file, "no terminator");
    assert_eq!(fs::read_lines(&file), vec!["no terminator"]);
    fs::write_file(&file, "");
    assert!(fs::read_lines(&file).is_empty());
    fs::write_file(&file, "\n");
    assert_eq!(fs::read_lines(&file), vec![""]);
}

#[test]
fn metadata_queries() {
    let tmp = tempfile::tempdir().unwrap();
    let file = p(tmp.path(), "data.bin");
    fs::write_file(&file, [0u8; 10]);
    let dir = root_of(&tmp);
    assert!(fs::exists(&file));
    assert!(fs::is_file(&file));
    assert!(!fs::is_dir(&file));
    assert!(fs::is_dir(&dir));
    assert!(!fs::is_file(&dir));
    assert_eq!(fs::file_size(&file), 10);
    assert_eq!(fs::file_size(&dir), -1);
}

#[test]
fn mkdir_creates_one_level_and_mkdirp_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let deep = p(tmp.path(), "a/b/c");
    assert!(!fs::mkdir(&deep));
    assert!(fs::mkdirp(&deep));
    assert!(fs::mkdirp(&deep));
    assert!(fs::is_dir(&deep));
    let single = p(tmp.path(), "single");
    assert!(fs::mkdir(&single));
    assert!(!fs::mkdir(&single));

    let file = p(tmp.path(), "blocker");
    fs::write_file(&file, "x");
    assert!(!fs::mkdirp(&file));
}

#[test]
fn remove_and_remove_all() {
    let tmp = tempfile::tempdir().unwrap();
    let root = p(tmp.path(), "tree");
    fs::mkdirp(fs::join(&root, "sub/inner"));
    fs::write_file(fs::join(&root, "top.txt"), "1");
    fs::write_file(fs::join(&root, "sub/mid.txt"), "2");
    fs::write_file(fs::join(&root, "sub/inner/leaf.txt"), "3");

    assert!(!fs::remove(&root));
    // tree, top.txt, sub, mid.txt, inner, leaf.txt
    assert_eq!(fs::remove_all(&root), 6);
    assert!(!fs::exists(&root));

    let empty = p(tmp.path(), "empty");
    fs::mkdir(&empty);
    assert!(fs::remove(&empty));
    let file = p(tmp.path(), "f");
    fs::write_file(&file, "x");
    assert!(fs::remove(&file));
    fs::write_file(&file, "x");
    assert_eq!(fs::remove_all(&file), 1);
}

#[cfg(unix)]
#[test]
fn remove_all_does_not_follow_symlinks() {
    let tmp = tempfile::tempdir().unwrap();
    let outside = p(tmp.path(), "outside");
    fs::mkdir(&outside);
    fs::write_file(fs::join(&outside, "keep.txt"), "k");
    let tree = p(tmp.path(), "tree");
    fs::mkdir(&tree);
    std::os::unix::fs::symlink(&outside, Path::new(&tree).join("link")).unwrap();

    assert_eq!(fs::remove_all(&tree), 2);
    assert!(fs::is_file(fs::join(&outside, "keep.txt")));
}

#[test]
fn copy_and_move_overwrite_destinations() {
    let tmp = tempfile::tempdir().unwrap();
    let src = p(tmp.path(), "src.txt");
    let dst = p(tmp.path(), "dst.txt");
    fs::write_file(&src, "new");
    fs::write_file(&dst, "old");
    assert!(fs::copy(&src, &dst));
    assert_eq!(fs::read_file(&dst).unwrap(), "new");
    assert!(fs::exists(&src));

    fs::write_file(&src, "moved");
    assert!(fs::move_path(&src, &dst));
    assert!(!fs::exists(&src));
    assert_eq!(fs::read_file(&dst).unwrap(), "moved");

    assert!(!fs::copy(&src, &dst));
    assert!(!fs::move_path(&src, &dst));
    assert!(!fs::copy(&root_of(&tmp), &dst));
}

#[test]
fn list_dir_returns_child_names_only() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write_file(p(tmp.path(), "b.txt"), "");
    fs::write_file(p(tmp.path(), "a.txt"), "");
    fs::mkdir(p(tmp.path(), "sub"));
    fs::write_file(p(tmp.path(), "sub/inner.txt"), "");
    let mut names = fs::list_dir(&root_of(&tmp));
    names.sort();
    assert_eq!(names, vec!["a.txt", "b.txt", "sub"]);
}

#[test]
fn path_decomposition() {
    assert_eq!(fs::extension("a/b.txt"), ".txt");
    assert_eq!(fs::extension("a/b.tar.gz"), ".gz");
    assert_eq!(fs::extension("a/b"), "");
    assert_eq!(fs::extension(".profile"), "");
    assert_eq!(fs::filename("a/b.txt"), "b.txt");
    assert_eq!(fs::filename("b.txt"), "b.txt");
    assert_eq!(fs::filename("/"), "");
    assert_eq!(fs::stem("a/b.txt"), "b");
    assert_eq!(fs::parent("a/b.txt"), "a");
    assert_eq!(fs::parent("b.txt"), "");
    assert_eq!(fs::parent("/"), "");
    let expected = Path::new("a").join("b.txt");
    assert_eq!(fs::join("a", "b.txt"), &*expected.to_string_lossy());
    let expected = Path::new("a").join("b").join("c");
    assert_eq!(fs::join_all(&["a", "b", "c"]), &*expected.to_string_lossy());
}

#[cfg(unix)]
#[test]
fn join_defers_to_host_rules() {
    assert_eq!(fs::join("a", "/etc"), "/etc");
    assert_eq!(fs::join("a/", "b"), "a/b");
    assert!(fs::is_absolute("/tmp"));
    assert!(!fs::is_absolute("tmp"));
}

#[test]
fn absolute_and_working_directory() {
    let host = Fs::std();
    let cwd = host.cwd();
    assert!(!cwd.is_empty());
    let abs = host.absolute("some/rel");
    assert!(fs::is_absolute(&abs));
    assert!(tarn_std::text::ends_with(&abs, "rel"));
    assert!(!host.chdir("/definitely/not/a/real/dir"));
    assert_eq!(host.cwd(), cwd);
}

#[test]
fn copy_onto_itself_fails_and_keeps_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let file = p(tmp.path(), "same.txt");
    assert!(fs::write_file(&file, "hello"));
    assert!(!fs::copy(&file, &file));
    assert_eq!(fs::read_file(&file).unwrap(), "hello");

    let dotted = format!("{}/./same.txt", root_of(&tmp));
    assert!(!fs::copy(&file, &dotted));
    assert_eq!(fs::read_file(&file).unwrap(), "hello");
}

#[cfg(unix)]
#[test]
fn copy_onto_a_link_to_the_source_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let file = p(tmp.path(), "target.txt");
    let link = p(tmp.path(), "alias.txt");
    fs::write_file(&file, "kept");
    std::os::unix::fs::symlink(&file, &link).unwrap();
    assert!(!Fs::std().copy(&file, &link));
    assert_eq!(fs::read_file(&file).unwrap(), "kept");
}
