//! Checked Operation Tests
//!
//! - root grants admins, admins grant namespace admins, namespace admins
//!   grant per-document rights; nobody can skip a level
//! - a refused check never reaches the store
//! - a failing check is returned unchanged, never turned into AccessDenied

use std::sync::Mutex;

use docvault::datastore::{
    checked_append, checked_get, checked_put, checked_set_admin, checked_set_namespace_admin,
    checked_set_token, Capabilities, DataStore, DataStoreError, DataStoreResult, MemDataStore,
};

// =============================================================================
// Test Utilities
// =============================================================================

/// Store whose predicates give a fixed answer and which records every
/// mutation or read that reaches it
#[derive(Debug)]
struct ScriptedStore {
    answer: DataStoreResult<bool>,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedStore {
    fn answering(answer: DataStoreResult<bool>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, op: &'static str) {
        self.calls.lock().unwrap().push(op);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self) -> DataStoreResult<bool> {
        self.answer.clone()
    }
}

impl DataStore for ScriptedStore {
    fn get(&self, _ns: &str, _doc: &str) -> DataStoreResult<Option<Vec<u8>>> {
        self.record("get");
        Ok(Some(b"value".to_vec()))
    }

    fn put(&self, _ns: &str, _doc: &str, _value: &[u8]) -> DataStoreResult<()> {
        self.record("put");
        Ok(())
    }

    fn append(&self, _ns: &str, _doc: &str, _delim: &[u8], _value: &[u8]) -> DataStoreResult<()> {
        self.record("append");
        Ok(())
    }

    fn set_token(
        &self,
        _token: &str,
        _ns: &str,
        _doc: &str,
        _get: bool,
        _put: bool,
        _append: bool,
    ) -> DataStoreResult<()> {
        self.record("set_token");
        Ok(())
    }

    fn permissions(&self, _token: &str, _ns: &str, _doc: &str) -> DataStoreResult<Capabilities> {
        Ok(if self.answer()? {
            Capabilities::ALL
        } else {
            Capabilities::NONE
        })
    }

    fn set_namespace_admin(&self, _token: &str, _ns: &str, _is: bool) -> DataStoreResult<()> {
        self.record("set_namespace_admin");
        Ok(())
    }

    fn set_admin(&self, _token: &str, _is: bool) -> DataStoreResult<()> {
        self.record("set_admin");
        Ok(())
    }

    fn is_namespace_admin(&self, _token: &str, _ns: &str) -> DataStoreResult<bool> {
        self.answer()
    }

    fn is_admin(&self, _token: &str) -> DataStoreResult<bool> {
        self.answer()
    }

    fn is_root(&self, _token: &str) -> DataStoreResult<bool> {
        self.answer()
    }
}

/// Run every checked operation once against `store`
fn run_all(store: &ScriptedStore) -> Vec<DataStoreResult<()>> {
    vec![
        checked_get(store, "c", "ns", "doc").map(|_| ()),
        checked_put(store, "c", "ns", "doc", b"v"),
        checked_append(store, "c", "ns", "doc", b"\n", b"v"),
        checked_set_token(store, "c", "t", "ns", "doc", true, true, true),
        checked_set_namespace_admin(store, "c", "t", "ns", true),
        checked_set_admin(store, "c", "t", true),
    ]
}

// =============================================================================
// Protocol
// =============================================================================

#[test]
fn test_refused_check_never_reaches_store() {
    let store = ScriptedStore::answering(Ok(false));
    for result in run_all(&store) {
        assert_eq!(result, Err(DataStoreError::AccessDenied));
    }
    assert!(store.calls().is_empty());
}

#[test]
fn test_check_error_is_propagated_verbatim() {
    let failure = DataStoreError::Internal("backing store offline".into());
    let store = ScriptedStore::answering(Err(failure.clone()));
    for result in run_all(&store) {
        assert_eq!(result, Err(failure.clone()));
    }
    assert!(store.calls().is_empty());
}

#[test]
fn test_allowed_check_forwards_once() {
    let store = ScriptedStore::answering(Ok(true));
    for result in run_all(&store) {
        assert_eq!(result, Ok(()));
    }
    assert_eq!(
        store.calls(),
        vec![
            "get",
            "put",
            "append",
            "set_token",
            "set_namespace_admin",
            "set_admin"
        ]
    );
}

// =============================================================================
// Hierarchy
// =============================================================================

#[test]
fn test_full_delegation_scenario() {
    let store = MemDataStore::new("R");

    checked_set_admin(&store, "R", "A", true).unwrap();
    checked_set_namespace_admin(&store, "A", "N", "ns1", true).unwrap();
    checked_set_token(&store, "N", "T", "ns1", "doc1", true, true, false).unwrap();

    checked_put(&store, "T", "ns1", "doc1", b"hi").unwrap();
    assert_eq!(
        checked_get(&store, "T", "ns1", "doc1").unwrap().as_deref(),
        Some(&b"hi"[..])
    );
    assert_eq!(
        checked_append(&store, "T", "ns1", "doc1", b"\n", b"x"),
        Err(DataStoreError::AccessDenied)
    );
    // The refused append left the document alone
    assert_eq!(store.get("ns1", "doc1").unwrap().as_deref(), Some(&b"hi"[..]));
}

#[test]
fn test_namespace_admin_cannot_grant_namespace_admin() {
    let store = MemDataStore::new("R");
    store.set_namespace_admin("N", "ns1", true).unwrap();

    assert_eq!(
        checked_set_namespace_admin(&store, "N", "M", "ns1", true),
        Err(DataStoreError::AccessDenied)
    );
    assert!(!store.is_namespace_admin("M", "ns1").unwrap());
}

#[test]
fn test_namespace_admin_is_scoped_to_its_namespace() {
    let store = MemDataStore::new("R");
    store.set_namespace_admin("N", "ns1", true).unwrap();

    assert_eq!(
        checked_set_token(&store, "N", "T", "ns2", "doc", true, true, true),
        Err(DataStoreError::AccessDenied)
    );
    assert!(!store.can_get("T", "ns2", "doc").unwrap());
}

#[test]
fn test_admin_cannot_grant_admin() {
    let store = MemDataStore::new("R");
    store.set_admin("A", true).unwrap();

    assert_eq!(
        checked_set_admin(&store, "A", "B", true),
        Err(DataStoreError::AccessDenied)
    );
    assert!(!store.is_admin("B").unwrap());
}

#[test]
fn test_admin_is_not_implicitly_namespace_admin() {
    let store = MemDataStore::new("R");
    store.set_admin("A", true).unwrap();

    assert_eq!(
        checked_set_token(&store, "A", "T", "ns1", "doc", true, false, false),
        Err(DataStoreError::AccessDenied)
    );
}

#[test]
fn test_document_token_cannot_grant_tokens() {
    let store = MemDataStore::new("R");
    store.set_token("T", "ns1", "doc", true, true, true).unwrap();

    assert_eq!(
        checked_set_token(&store, "T", "U", "ns1", "doc", true, true, true),
        Err(DataStoreError::AccessDenied)
    );
    assert_eq!(store.permissions("U", "ns1", "doc").unwrap(), Capabilities::NONE);
}

#[test]
fn test_revocation_takes_effect_on_next_check() {
    let store = MemDataStore::new("R");
    checked_set_admin(&store, "R", "A", true).unwrap();
    checked_set_namespace_admin(&store, "A", "N", "ns1", true).unwrap();

    checked_set_admin(&store, "R", "A", false).unwrap();
    assert_eq!(
        checked_set_namespace_admin(&store, "A", "N2", "ns1", true),
        Err(DataStoreError::AccessDenied)
    );
    // Grants already made by a revoked admin stay in place
    assert!(store.is_namespace_admin("N", "ns1").unwrap());

    checked_set_token(&store, "N", "T", "ns1", "doc", true, false, false).unwrap();
    checked_set_token(&store, "N", "T", "ns1", "doc", false, false, false).unwrap();
    assert_eq!(
        checked_get(&store, "T", "ns1", "doc"),
        Err(DataStoreError::AccessDenied)
    );
}
