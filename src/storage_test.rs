use super::*;

#[test]
fn missing_key_loads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme"), Ok(None));
}

#[test]
fn save_then_load() {
    let mut store = MemoryStore::new();
    store.save("theme", "dark").expect("memory store never rejects");
    assert_eq!(store.load("theme"), Ok(Some("dark".to_owned())));
}

#[test]
fn save_overwrites() {
    let mut store = MemoryStore::with_entry("theme", "dark");
    store.save("theme", "light").expect("memory store never rejects");
    assert_eq!(store.load("theme"), Ok(Some("light".to_owned())));
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.load("other"), Ok(None));
}

#[test]
fn error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "preference storage is unavailable");
    assert_eq!(
        StorageError::Rejected("QuotaExceededError".into()).to_string(),
        "preference storage rejected the write: QuotaExceededError"
    );
}
