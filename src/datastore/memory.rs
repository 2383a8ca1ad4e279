//! # In-memory Data Store
//!
//! All tables live behind one mutex, so every operation is linearizable
//! with respect to every other. The root token never changes after
//! construction and is compared outside the lock.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use subtle::ConstantTimeEq;

use super::capabilities::Capabilities;
use super::errors::{DataStoreError, DataStoreResult};
use super::store::DataStore;

type DocumentTable = HashMap<String, HashMap<String, Vec<u8>>>;
type PermissionTable = HashMap<String, HashMap<String, HashMap<String, Capabilities>>>;

#[derive(Debug, Default)]
struct Tables {
    /// ns -> doc -> value
    documents: DocumentTable,
    /// ns -> doc -> token -> rights; never holds an empty set
    permissions: PermissionTable,
    /// ns -> tokens; never holds an empty set
    namespace_admins: HashMap<String, HashSet<String>>,
    admins: HashSet<String>,
}

/// Process-lifetime document store held entirely in memory
pub struct MemDataStore {
    root_token: String,
    tables: Mutex<Tables>,
}

impl MemDataStore {
    /// Create an empty store whose root is `root_token`
    pub fn new(root_token: impl Into<String>) -> Self {
        Self {
            root_token: root_token.into(),
            tables: Mutex::new(Tables::default()),
        }
    }

    fn tables(&self) -> DataStoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| DataStoreError::Internal("Lock poisoned".into()))
    }

    /// Number of stored permission records, across all namespaces
    pub fn permission_record_count(&self) -> DataStoreResult<usize> {
        let tables = self.tables()?;
        Ok(tables
            .permissions
            .values()
            .flat_map(|docs| docs.values())
            .map(|tokens| tokens.len())
            .sum())
    }
}

impl fmt::Debug for MemDataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemDataStore")
            .field("root_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl DataStore for MemDataStore {
    fn get(&self, ns: &str, doc: &str) -> DataStoreResult<Option<Vec<u8>>> {
        let tables = self.tables()?;
        Ok(tables
            .documents
            .get(ns)
            .and_then(|docs| docs.get(doc))
            .cloned())
    }

    fn put(&self, ns: &str, doc: &str, value: &[u8]) -> DataStoreResult<()> {
        let mut tables = self.tables()?;
        tables
            .documents
            .entry(ns.to_string())
            .or_default()
            .insert(doc.to_string(), value.to_vec());
        Ok(())
    }

    fn append(&self, ns: &str, doc: &str, delim: &[u8], value: &[u8]) -> DataStoreResult<()> {
        let mut tables = self.tables()?;
        let current = tables
            .documents
            .entry(ns.to_string())
            .or_default()
            .entry(doc.to_string())
            .or_default();
        current.reserve(delim.len() + value.len());
        current.extend_from_slice(delim);
        current.extend_from_slice(value);
        Ok(())
    }

    fn set_token(
        &self,
        token: &str,
        ns: &str,
        doc: &str,
        get: bool,
        put: bool,
        append: bool,
    ) -> DataStoreResult<()> {
        let caps = Capabilities::from_flags(get, put, append);
        let mut tables = self.tables()?;

        if !caps.is_empty() {
            tables
                .permissions
                .entry(ns.to_string())
                .or_default()
                .entry(doc.to_string())
                .or_default()
                .insert(token.to_string(), caps);
            return Ok(());
        }

        let Some(docs) = tables.permissions.get_mut(ns) else {
            return Ok(());
        };
        if let Some(tokens) = docs.get_mut(doc) {
            tokens.remove(token);
            if tokens.is_empty() {
                docs.remove(doc);
            }
        }
        if docs.is_empty() {
            tables.permissions.remove(ns);
        }
        Ok(())
    }

    fn permissions(&self, token: &str, ns: &str, doc: &str) -> DataStoreResult<Capabilities> {
        let tables = self.tables()?;
        Ok(tables
            .permissions
            .get(ns)
            .and_then(|docs| docs.get(doc))
            .and_then(|tokens| tokens.get(token))
            .copied()
            .unwrap_or_default())
    }

    fn set_namespace_admin(&self, token: &str, ns: &str, is: bool) -> DataStoreResult<()> {
        let mut tables = self.tables()?;

        if is {
            tables
                .namespace_admins
                .entry(ns.to_string())
                .or_default()
                .insert(token.to_string());
        } else if let Some(tokens) = tables.namespace_admins.get_mut(ns) {
            tokens.remove(token);
            if tokens.is_empty() {
                tables.namespace_admins.remove(ns);
            }
        }
        Ok(())
    }

    fn set_admin(&self, token: &str, is: bool) -> DataStoreResult<()> {
        let mut tables = self.tables()?;
        if is {
            tables.admins.insert(token.to_string());
        } else {
            tables.admins.remove(token);
        }
        Ok(())
    }

    fn is_namespace_admin(&self, token: &str, ns: &str) -> DataStoreResult<bool> {
        let tables = self.tables()?;
        Ok(tables
            .namespace_admins
            .get(ns)
            .is_some_and(|tokens| tokens.contains(token)))
    }

    fn is_admin(&self, token: &str) -> DataStoreResult<bool> {
        let tables = self.tables()?;
        Ok(tables.admins.contains(token))
    }

    fn is_root(&self, token: &str) -> DataStoreResult<bool> {
        Ok(self.root_token.as_bytes().ct_eq(token.as_bytes()).into())
    }
}
