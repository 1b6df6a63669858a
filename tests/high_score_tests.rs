//! High score persistence tests

use std::fs;
use std::path::PathBuf;

use juegos::io::HighScoreStore;
use juegos::GameError;

fn scratch_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("juegos-{}-{}.dat", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_missing_file_reads_as_zero() {
    let store = HighScoreStore::new(scratch_path("missing"));
    assert_eq!(store.load().unwrap(), 0);
}

#[test]
fn test_save_then_load() {
    let path = scratch_path("roundtrip");
    let store = HighScoreStore::new(&path);

    assert_eq!(store.save(1234, 0).unwrap(), 1234);
    assert_eq!(store.load().unwrap(), 1234);
    assert_eq!(fs::read(&path).unwrap().len(), 8);

    let _ = fs::remove_file(path);
}

#[test]
fn test_save_keeps_previous_when_higher() {
    let path = scratch_path("keep");
    let store = HighScoreStore::new(&path);

    store.save(900, 0).unwrap();
    let previous = store.load().unwrap();
    assert_eq!(store.save(300, previous).unwrap(), 900);
    assert_eq!(store.load().unwrap(), 900);

    let _ = fs::remove_file(path);
}

#[test]
fn test_wrong_length_is_corrupt() {
    let path = scratch_path("corrupt");
    fs::write(&path, b"abc").unwrap();
    let store = HighScoreStore::new(&path);

    match store.load() {
        Err(GameError::CorruptHighScore { len, .. }) => assert_eq!(len, 3),
        other => panic!("expected corrupt high score, got {other:?}"),
    }

    let _ = fs::remove_file(path);
}
