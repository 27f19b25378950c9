use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryCredentialStore::default();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_save_replaces_previous_token() {
    let store = MemoryCredentialStore::with_token("old");
    store.save("new");
    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn memory_store_erase_clears_slot() {
    let store = MemoryCredentialStore::with_token("t");
    store.erase();
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_off_browser() {
    let store = BrowserCredentialStore;
    store.save("t");
    assert_eq!(store.load(), None);
}
