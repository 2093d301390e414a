use std::fs;

use grocer_core::FrequencyStore;
use grocer_engine::{load_backup, persist_frequencies, AtomicFileWriter, StoreIoError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_store() -> FrequencyStore {
    let mut store = FrequencyStore::new();
    store.record_text("orange apple banana apple apple banana");
    store
}

#[test]
fn backup_is_sorted_item_count_lines() {
    grocer_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frequency.dat");

    persist_frequencies(&sample_store(), &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "apple 3\nbanana 2\norange 1\n"
    );
}

#[test]
fn backup_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frequency.dat");
    fs::write(&path, "old contents that are much longer than the new ones\n").unwrap();

    let mut store = FrequencyStore::new();
    store.record("kiwi");
    persist_frequencies(&store, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "kiwi 1\n");
}

#[test]
fn backup_round_trips_through_reader() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frequency.dat");
    let store = sample_store();

    persist_frequencies(&store, &path).unwrap();
    assert_eq!(load_backup(&path).unwrap(), store);
}

#[test]
fn empty_store_writes_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("frequency.dat");

    persist_frequencies(&FrequencyStore::new(), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn missing_directory_is_create_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no_such_dir").join("frequency.dat");

    let err = persist_frequencies(&sample_store(), &path).unwrap_err();
    assert!(matches!(err, StoreIoError::Create { .. }), "{err:?}");
    assert!(!path.exists());
}

#[test]
fn failed_write_leaves_no_stray_files() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("taken");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "x").unwrap();

    let writer = AtomicFileWriter::new(target.clone());
    assert!(writer.write("apple 1\n").is_err());

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("taken")]);
    assert!(target.join("keep.txt").exists());
}
