//! Cleanup runs against the in-memory filesystem.

use std::{io, path::Path};

use dump_cleanup_domain::CleanupConfig;
use dump_cleanup_infra::MemoryFileSystem;
use dump_cleanup_ports::filesystem::{DirEntryDto, FileStat, FileSystem};
use dump_cleanup_usecase::RetentionEnforcer;

use crate::common::*;

fn cleanup(fs: &MemoryFileSystem, folder: &str, limit: i64) -> dump_cleanup_shared_kernel::Result<Vec<std::path::PathBuf>> {
    RetentionEnforcer::new(fs).run(&CleanupConfig::new(folder, limit)).map(|report| report.deleted)
}

#[test]
fn unset_folder_fails_without_touching_anything() {
    let fs = three_dumps_and_a_stranger();
    let err = cleanup(&fs, "", 1).unwrap_err();

    assert!(err.is_config());
    assert_eq!(err.to_string(), "Invalid configuration: heap dump folder is not set");
    assert_eq!(fs.children("dumps").len(), 4);
}

#[test]
fn negative_limit_fails_without_touching_anything() {
    let fs = three_dumps_and_a_stranger();
    let err = cleanup(&fs, "dumps", -1).unwrap_err();

    assert!(err.is_config());
    assert_eq!(fs.children("dumps").len(), 4);
}

#[test]
fn missing_folder_fails() {
    let fs = MemoryFileSystem::new();
    let err = cleanup(&fs, "nope", 1).unwrap_err();

    assert!(err.is_path());
    assert!(err.to_string().contains("'nope': does not exist"));
}

#[test]
fn regular_file_folder_fails() {
    let fs = MemoryFileSystem::new();
    fs.create_file("dumps");
    let err = cleanup(&fs, "dumps", 1).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cannot open heap dump folder 'dumps': not a directory (mode: -rw-r--r--)"
    );
}

#[test]
fn failing_stat_is_a_path_error_with_the_cause() {
    let fs = three_dumps_and_a_stranger();
    fs.fail_stat_of("dumps");
    let err = cleanup(&fs, "dumps", 1).unwrap_err();

    assert!(err.is_path());
    assert_eq!(err.to_string(), "Cannot open heap dump folder 'dumps': permission denied");
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(fs.children("dumps").len(), 4);
}

#[test]
fn unlistable_folder_fails_with_the_cause() {
    let fs = three_dumps_and_a_stranger();
    fs.fail_listing_of("dumps");
    let err = cleanup(&fs, "dumps", 1).unwrap_err();

    assert!(err.is_path());
    assert!(err.to_string().ends_with("permission denied"));
}

#[test]
fn limit_one_deletes_all_three_dumps() {
    let fs = three_dumps_and_a_stranger();
    let deleted = cleanup(&fs, "dumps", 1).unwrap();

    assert_deleted(&deleted, &["dumps/3.hprof", "dumps/2.hprof", "dumps/1.hprof"]);
    assert_no_file(&fs, "dumps/1.hprof");
    assert_no_file(&fs, "dumps/2.hprof");
    assert_no_file(&fs, "dumps/3.hprof");
    assert_has_file(&fs, "dumps/not.a.dump");
}

#[test]
fn limit_two_keeps_the_newest_dump() {
    let fs = three_dumps_and_a_stranger();
    let deleted = cleanup(&fs, "dumps", 2).unwrap();

    assert_deleted(&deleted, &["dumps/2.hprof", "dumps/1.hprof"]);
    assert_has_file(&fs, "dumps/3.hprof");
    assert_has_file(&fs, "dumps/not.a.dump");
}

#[test]
fn folder_without_dumps_is_left_alone() {
    let fs = memory_dumps(&["not.a.dump"]);
    let deleted = cleanup(&fs, "dumps", 3).unwrap();

    assert!(deleted.is_empty());
    assert_has_file(&fs, "dumps/not.a.dump");
}

#[test]
fn fewer_dumps_than_the_limit_is_a_noop() {
    let fs = memory_dumps(&["1.hprof", "2.hprof", "not.a.dump"]);
    let deleted = cleanup(&fs, "dumps", 3).unwrap();

    assert!(deleted.is_empty());
    assert_eq!(fs.children("dumps"), ["1.hprof", "2.hprof", "not.a.dump"]);
}

#[test]
fn zero_limit_disables_cleanup() {
    let fs = three_dumps_and_a_stranger();
    assert!(cleanup(&fs, "dumps", 0).unwrap().is_empty());
    assert_eq!(fs.children("dumps").len(), 4);
}

#[test]
fn repeated_runs_are_idempotent() {
    let fs = memory_dumps(&["1.hprof", "2.hprof", "not.a.dump"]);

    let first = cleanup(&fs, "dumps", 2).unwrap();
    assert_deleted(&first, &["dumps/1.hprof"]);
    assert_has_file(&fs, "dumps/2.hprof");

    let second = cleanup(&fs, "dumps", 2).unwrap();
    assert!(second.is_empty());
    assert_has_file(&fs, "dumps/2.hprof");
    assert_has_file(&fs, "dumps/not.a.dump");
}

#[test]
fn failed_delete_keeps_earlier_deletions() {
    let fs = three_dumps_and_a_stranger();
    fs.fail_removal_of("dumps/2.hprof");
    let err = cleanup(&fs, "dumps", 1).unwrap_err();

    assert!(err.is_delete());
    assert!(err.to_string().starts_with("Cannot delete heap dump file 'dumps/2.hprof'"));
    assert_no_file(&fs, "dumps/3.hprof");
    assert_has_file(&fs, "dumps/2.hprof");
    assert_has_file(&fs, "dumps/1.hprof");
}

#[test]
fn managed_directory_is_deleted_when_empty() {
    let fs = memory_dumps(&["1.hprof", "2.hprof"]);
    fs.create_dir_all("dumps/0.hprof");
    let deleted = cleanup(&fs, "dumps", 2).unwrap();

    assert_deleted(&deleted, &["dumps/1.hprof", "dumps/0.hprof"]);
    assert_eq!(fs.children("dumps"), ["2.hprof"]);
}

#[test]
fn non_empty_managed_directory_aborts_the_run() {
    let fs = memory_dumps(&["2.hprof"]);
    fs.create_file("dumps/1.hprof/part");
    let err = cleanup(&fs, "dumps", 1).unwrap_err();

    assert!(err.is_delete());
    assert_no_file(&fs, "dumps/2.hprof");
    assert_has_file(&fs, "dumps/1.hprof/part");
}

/// Hands out a listing, then removes `victim` before any deletion happens.
struct VanishesAfterListing<'a> {
    inner: &'a MemoryFileSystem,
    victim: &'static str,
}

impl FileSystem for VanishesAfterListing<'_> {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        self.inner.stat(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryDto>> {
        let entries = self.inner.list_dir(path)?;
        self.inner.remove(Path::new(self.victim))?;
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        self.inner.remove(path)
    }
}

#[test]
fn file_vanishing_after_listing_is_a_delete_error() {
    let fs = three_dumps_and_a_stranger();
    let racing = VanishesAfterListing { inner: &fs, victim: "dumps/2.hprof" };
    let err = RetentionEnforcer::new(&racing).run(&CleanupConfig::new("dumps", 1)).unwrap_err();

    assert!(err.is_delete());
    assert!(err.to_string().starts_with("Cannot delete heap dump file 'dumps/2.hprof'"));
    assert_no_file(&fs, "dumps/3.hprof");
    assert_has_file(&fs, "dumps/1.hprof");
    assert_has_file(&fs, "dumps/not.a.dump");
}
