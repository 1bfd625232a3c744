use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use pathkit::engine::Scope;
use pathkit::listing::{self, count_direct_dirs, count_direct_files, list_direct_files};
use pathkit::ops::{copy_by_suffix, move_by_suffix, move_file, rename_matching};
use pathkit::{build_snapshot, snapshot, Outcome, PathKind, PathKitError, Select};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a temporary directory tree for testing.
///
/// Structure:
/// ```
/// tmp/
///   a.txt
///   b.txt
///   sub/
///     c.txt
/// ```
fn setup_test_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("b.txt"), "bravo").unwrap();

    let sub = root.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("c.txt"), "charlie").unwrap();

    dir
}

fn set(names: Vec<String>) -> BTreeSet<String> {
    names.into_iter().collect()
}

fn set_of(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Independent file count using walkdir.
fn walkdir_file_count(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

// ---------------------------------------------------------------------------
// Listing utilities
// ---------------------------------------------------------------------------

#[test]
fn lists_direct_and_nested_entries() {
    let dir = setup_test_dir();
    let root = dir.path();

    assert_eq!(set(list_direct_files(root).unwrap()), set_of(&["a.txt", "b.txt"]));
    assert_eq!(count_direct_files(root).unwrap(), 2);
    assert_eq!(
        set(listing::list_all_files(root).unwrap()),
        set_of(&["a.txt", "b.txt", "c.txt"])
    );
    assert_eq!(listing::count_all_files(root).unwrap(), 3);
    assert_eq!(count_direct_dirs(root).unwrap(), 1);
    assert_eq!(listing::list_all_dirs(root).unwrap(), vec!["sub".to_string()]);
    assert_eq!(
        set(listing::list_all_contents(root).unwrap()),
        set_of(&["a.txt", "b.txt", "sub", "c.txt"])
    );
}

#[test]
fn counts_equal_listing_lengths() {
    let dir = setup_test_dir();
    let root = dir.path();
    fs::create_dir_all(root.join("sub/deeper/deepest")).unwrap();
    fs::write(root.join("sub/deeper/d.md"), "delta").unwrap();

    for scope in [Scope::Direct, Scope::Recursive] {
        for select in [Select::Files, Select::Dirs, Select::Any] {
            assert_eq!(
                listing::names(root, scope, select).unwrap().len(),
                listing::count(root, scope, select).unwrap(),
                "{scope:?} {select:?}"
            );
        }
    }

    assert_eq!(listing::count_all_files(root).unwrap(), walkdir_file_count(root));
}

#[test]
fn file_target_lists_its_siblings() {
    let dir = setup_test_dir();
    let file = dir.path().join("a.txt");

    assert_eq!(
        set(list_direct_files(&file).unwrap()),
        set(list_direct_files(dir.path()).unwrap())
    );
    assert_eq!(count_direct_dirs(&file).unwrap(), 1);
}

#[test]
fn empty_directory_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    assert!(list_direct_files(root).unwrap().is_empty());
    assert!(listing::list_direct_dirs(root).unwrap().is_empty());
    assert!(listing::list_all_files(root).unwrap().is_empty());
    assert!(listing::list_all_dirs(root).unwrap().is_empty());
    assert_eq!(count_direct_files(root).unwrap(), 0);
    assert_eq!(count_direct_dirs(root).unwrap(), 0);
    assert_eq!(listing::count_all_files(root).unwrap(), 0);
    assert_eq!(listing::count_all_dirs(root).unwrap(), 0);

    let mut out = Vec::new();
    listing::write_names(root, Scope::Recursive, Select::Any, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn missing_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = list_direct_files(&missing).unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
    assert!(listing::count_all_dirs(&missing).unwrap_err().is_not_found());
}

#[test]
fn empty_path_is_an_invalid_handle() {
    assert!(matches!(
        list_direct_files("").unwrap_err(),
        PathKitError::InvalidHandle(_)
    ));
    assert!(matches!(
        build_snapshot("").unwrap_err(),
        PathKitError::InvalidHandle(_)
    ));
    assert!(pathkit::create_path("").is_err());
}

#[test]
fn write_names_prints_one_per_line() {
    let dir = setup_test_dir();

    let mut out = Vec::new();
    listing::write_names(dir.path(), Scope::Direct, Select::Files, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: BTreeSet<String> = text.lines().map(str::to_string).collect();
    assert_eq!(lines, set_of(&["a.txt", "b.txt"]));
}

#[test]
fn custom_matcher_works() {
    let dir = setup_test_dir();
    fs::write(dir.path().join("sub/notes.md"), "notes").unwrap();

    let md = listing::find(dir.path(), Scope::Recursive, pathkit::SuffixMatcher::new("md").unwrap())
        .unwrap();

    assert_eq!(md.len(), 1);
    assert_eq!(md[0].name, "notes.md");
    assert_eq!(md[0].depth, 2);
}

#[cfg(unix)]
#[test]
fn symlinks_are_classified_by_target() {
    let dir = setup_test_dir();
    std::os::unix::fs::symlink(dir.path().join("a.txt"), dir.path().join("link.txt")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

    let files = set(list_direct_files(dir.path()).unwrap());
    assert!(files.contains("link.txt"));
    assert!(!files.contains("dangling"));
    assert_eq!(listing::count_all_contents(dir.path()).unwrap(), 6);
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn snapshot_of_directory() {
    let dir = setup_test_dir();
    let snap = build_snapshot(dir.path()).unwrap();

    assert!(snap.exists());
    assert_eq!(snap.kind(), PathKind::Directory);
    assert_eq!(set(snap.local_files().to_vec()), set_of(&["a.txt", "b.txt"]));
    assert_eq!(snap.local_dirs(), ["sub"]);
    assert_eq!(set(snap.all_files().to_vec()), set_of(&["a.txt", "b.txt", "c.txt"]));

    let counts = snap.counts();
    assert_eq!(counts.local_files, snap.local_files().len());
    assert_eq!(counts.local_dirs, 1);
    assert_eq!(counts.total_files, 3);
    assert_eq!(counts.total_dirs, 1);
    assert_eq!(snap.all_contents().len(), 4);
}

#[test]
fn snapshot_of_file() {
    let dir = setup_test_dir();
    let file = dir.path().join("sub").join("c.txt");
    let snap = build_snapshot(&file).unwrap();

    assert!(snap.is_file());
    assert_eq!(snap.name(), "c.txt");
    assert_eq!(snap.stem(), "c");
    assert_eq!(snap.suffix(), ".txt");
    assert_eq!(snap.suffixes(), [".txt"]);
    assert_eq!(snap.parent(), dir.path().join("sub"));
    assert_eq!(snap.parents()[0], dir.path().join("sub"));
    assert_eq!(snap.parts().last().map(String::as_str), Some("c.txt"));
    assert!(snap.is_absolute());
    assert_eq!(snap.absolute(), file);

    // Sibling listings: c.txt is alone in sub/.
    assert_eq!(snap.local_files(), ["c.txt"]);
    assert!(snap.local_dirs().is_empty());

    assert_eq!(snap.with_suffix(".md").unwrap(), dir.path().join("sub/c.md"));
    assert_eq!(snap.with_stem("d").unwrap(), dir.path().join("sub/d.txt"));
}

#[test]
fn snapshot_through_listing_utilities() {
    let dir = setup_test_dir();
    let snap = build_snapshot(dir.path()).unwrap();

    assert_eq!(count_direct_files(&snap).unwrap(), snap.counts().local_files);
    assert_eq!(listing::count_all_dirs(&snap).unwrap(), snap.counts().total_dirs);
}

#[test]
fn snapshot_is_stale_until_refreshed() {
    let dir = setup_test_dir();
    let snap = build_snapshot(dir.path()).unwrap();

    fs::write(dir.path().join("new.txt"), "new").unwrap();

    assert_eq!(snap.counts().local_files, 2);
    let fresh = snap.refresh().unwrap();
    assert_eq!(fresh.counts().local_files, 3);
}

#[test]
fn missing_snapshot_fails_unless_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("later.log");

    assert!(build_snapshot(&missing).unwrap_err().is_not_found());

    let snap = snapshot().allow_missing(true).build(&missing).unwrap();
    assert!(!snap.exists());
    assert_eq!(snap.kind(), PathKind::Other);
    assert_eq!(snap.counts(), pathkit::Counts::default());
    assert_eq!(snap.suffix(), ".log");
}

#[cfg(unix)]
#[test]
fn dangling_link_snapshot_when_missing_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("dangling");
    std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

    assert!(build_snapshot(&link).unwrap_err().is_not_found());

    let snap = snapshot().allow_missing(true).build(&link).unwrap();
    assert!(snap.is_symlink());
    assert_eq!(snap.kind(), PathKind::Other);
    assert_eq!(snap.counts(), pathkit::Counts::default());
    assert!(snap.all_contents().is_empty());

    let mut out = Vec::new();
    snap.write_info(&mut out).unwrap();
    assert!(!String::from_utf8(out).unwrap().contains("Directory Tree:"));
}

#[test]
fn max_depth_limits_recursive_listings() {
    let dir = setup_test_dir();
    let snap = snapshot().max_depth(1).build(dir.path()).unwrap();

    assert_eq!(snap.counts().total_files, 2);
    assert_eq!(snap.all_files().len(), snap.local_files().len());
}

#[test]
fn info_report_has_all_sections() {
    let dir = setup_test_dir();
    let snap = build_snapshot(dir.path()).unwrap();

    let mut out = Vec::new();
    snap.write_info(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Information:"));
    assert!(text.contains("Path type:            directory"));
    assert!(text.contains("Total files:          3"));
    for section in ["Local Folders:", "Local Files:", "All Files:", "All Folders:", "Directory Tree:"] {
        assert!(text.contains(section), "missing {section}");
    }
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

#[test]
fn tree_is_sorted_and_indented() {
    let dir = setup_test_dir();
    let root = dir.path();

    let mut out = Vec::new();
    pathkit::tree::write_tree(root, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = format!(
        "+ {}\n   + a.txt\n   + b.txt\n   + sub\n      + c.txt\n",
        root.display()
    );
    assert_eq!(text, expected);
}

#[test]
fn tree_keeps_children_under_their_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("notes")).unwrap();
    fs::write(root.join("notes/today.md"), "today").unwrap();
    fs::write(root.join("notes.md"), "index").unwrap();

    let mut out = Vec::new();
    pathkit::tree::write_tree(root, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = format!(
        "+ {}\n   + notes\n      + today.md\n   + notes.md\n",
        root.display()
    );
    assert_eq!(text, expected);
}

#[test]
fn tree_of_file_prints_parent() {
    let dir = setup_test_dir();
    let file = dir.path().join("sub").join("c.txt");

    let mut out = Vec::new();
    pathkit::tree::write_tree(&file, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text, format!("+ {}\n   + c.txt\n", dir.path().join("sub").display()));
}

// ---------------------------------------------------------------------------
// Rename
// ---------------------------------------------------------------------------

#[test]
fn rename_replaces_substring() {
    let dir = setup_test_dir();
    let root = dir.path();

    let renamed = rename_matching(root, "a", "x").unwrap();

    assert_eq!(renamed.len(), 1);
    assert!(root.join("x.txt").exists());
    assert!(!root.join("a.txt").exists());
    assert!(root.join("b.txt").exists());
    assert!(root.join("sub/c.txt").exists());
    assert_eq!(fs::read_to_string(root.join("x.txt")).unwrap(), "alpha");
}

#[test]
fn rename_without_matches_is_noop() {
    let dir = setup_test_dir();

    let renamed = rename_matching(dir.path(), "zzz", "y").unwrap();

    assert!(renamed.is_empty());
    assert_eq!(
        set(listing::list_all_contents(dir.path()).unwrap()),
        set_of(&["a.txt", "b.txt", "sub", "c.txt"])
    );
}

#[test]
fn rename_handles_matching_parent_and_child() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("data.csv"), "1,2").unwrap();

    let renamed = rename_matching(dir.path(), "data", "info").unwrap();

    assert_eq!(renamed.len(), 2);
    assert!(dir.path().join("info/info.csv").exists());
}

#[test]
fn rename_only_replaces_first_occurrence() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aa.txt"), "").unwrap();

    rename_matching(dir.path(), "a", "b").unwrap();

    assert!(dir.path().join("ba.txt").exists());
}

#[test]
fn rename_collision_keeps_earlier_renames() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/a1.txt"), "deep").unwrap();
    fs::write(root.join("a2.txt"), "top").unwrap();
    fs::write(root.join("x2.txt"), "taken").unwrap();

    let err = rename_matching(root, "a", "x").unwrap_err();

    assert!(matches!(err, PathKitError::AlreadyExists(_)), "got {err:?}");
    assert!(root.join("sub/x1.txt").exists(), "deeper rename should have happened first");
    assert_eq!(fs::read_to_string(root.join("x2.txt")).unwrap(), "taken");
    assert!(root.join("a2.txt").exists());
}

#[test]
fn rename_rejects_empty_substring() {
    let dir = setup_test_dir();
    assert!(matches!(
        rename_matching(dir.path(), "", "x").unwrap_err(),
        PathKitError::InvalidPattern(_)
    ));
}

// ---------------------------------------------------------------------------
// Move / copy
// ---------------------------------------------------------------------------

#[test]
fn move_file_moves_when_destination_free() {
    let dir = setup_test_dir();
    let dest = dir.path().join("sub");

    let outcome = move_file("a.txt", dir.path(), &dest).unwrap();

    assert!(matches!(outcome, Outcome::Moved { .. }));
    assert_eq!(outcome.destination(), dest.join("a.txt"));
    assert!(!dir.path().join("a.txt").exists());
    assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
}

#[test]
fn move_file_never_overwrites() {
    let dir = setup_test_dir();
    let root = dir.path();
    let dest = root.join("sub");
    fs::write(root.join("c.txt"), "newer").unwrap();

    let first = move_file("c.txt", root, &dest).unwrap();
    let after_first = fs::read_to_string(dest.join("c.txt")).unwrap();
    let second = move_file("c.txt", root, &dest).unwrap();

    assert!(first.is_skipped());
    assert!(second.is_skipped());
    assert_eq!(after_first, "charlie");
    assert_eq!(fs::read_to_string(dest.join("c.txt")).unwrap(), after_first);
    assert!(root.join("c.txt").exists());
}

#[test]
fn second_identical_move_changes_nothing() {
    let dir = setup_test_dir();
    let root = dir.path();
    let dest = tempfile::tempdir().unwrap();

    let first = move_file("a.txt", root, dest.path()).unwrap();
    assert!(matches!(first, Outcome::Moved { .. }));
    let after_first = fs::read_to_string(dest.path().join("a.txt")).unwrap();

    // Put a different file back at the source; the destination must win.
    fs::write(root.join("a.txt"), "replacement").unwrap();
    let second = move_file("a.txt", root, dest.path()).unwrap();

    assert!(second.is_skipped());
    assert_eq!(second.destination(), dest.path().join("a.txt"));
    assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), after_first);
    assert_eq!(fs::read_to_string(root.join("a.txt")).unwrap(), "replacement");
}

#[test]
fn move_file_accepts_strings() {
    let dir = setup_test_dir();
    let src = dir.path().to_string_lossy().into_owned();
    let dst = dir.path().join("sub").to_string_lossy().into_owned();

    move_file("b.txt", src.as_str(), dst.as_str()).unwrap();

    assert!(dir.path().join("sub/b.txt").exists());
}

#[test]
fn move_missing_source_propagates() {
    let dir = setup_test_dir();
    let err = move_file("ghost.txt", dir.path(), dir.path().join("sub")).unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[test]
fn move_by_suffix_sweeps_matching_files() {
    let dir = setup_test_dir();
    let root = dir.path();
    fs::write(root.join("sub/keep.md"), "md").unwrap();
    let dest = tempfile::tempdir().unwrap();

    let outcomes = move_by_suffix(root, dest.path(), ".txt").unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| matches!(o, Outcome::Moved { .. })));
    assert_eq!(
        set(list_direct_files(dest.path()).unwrap()),
        set_of(&["a.txt", "b.txt", "c.txt"])
    );
    assert!(root.join("sub/keep.md").exists());
    assert_eq!(listing::count_all_files(root).unwrap(), 1);
}

#[test]
fn copy_by_suffix_keeps_sources_and_skips_existing() {
    let dir = setup_test_dir();
    let dest = tempfile::tempdir().unwrap();
    fs::write(dest.path().join("b.txt"), "old").unwrap();

    let outcomes = copy_by_suffix(dir.path(), dest.path(), "txt").unwrap();

    assert_eq!(outcomes.iter().filter(|o| o.is_skipped()).count(), 1);
    assert_eq!(fs::read_to_string(dest.path().join("b.txt")).unwrap(), "old");
    assert_eq!(fs::read_to_string(dest.path().join("c.txt")).unwrap(), "charlie");
    assert_eq!(listing::count_all_files(dir.path()).unwrap(), 3);
}

#[test]
fn create_subdir_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    let made = pathkit::ops::create_subdir("x/y", dir.path()).unwrap();
    let again = pathkit::ops::create_subdir("x/y", dir.path()).unwrap();

    assert_eq!(made, again);
    assert!(made.is_dir());
}
