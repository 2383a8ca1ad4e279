//! # Data Store Trait
//!
//! The query and mutation contract the checked operations are written
//! against. Every method is atomic on its own; no method calls back into
//! the checked layer.

use super::capabilities::Capabilities;
use super::errors::DataStoreResult;

/// Storage engine for namespaced documents and the permission tables
/// that guard them
pub trait DataStore: Send + Sync + std::fmt::Debug {
    /// Read a document. `None` means it was never written.
    fn get(&self, ns: &str, doc: &str) -> DataStoreResult<Option<Vec<u8>>>;

    /// Replace a document's value
    fn put(&self, ns: &str, doc: &str, value: &[u8]) -> DataStoreResult<()>;

    /// Append `delim` followed by `value` to a document, treating a missing
    /// document as empty
    fn append(&self, ns: &str, doc: &str, delim: &[u8], value: &[u8]) -> DataStoreResult<()>;

    /// Overwrite the rights `token` holds on (ns, doc). All three false
    /// removes the record.
    fn set_token(
        &self,
        token: &str,
        ns: &str,
        doc: &str,
        get: bool,
        put: bool,
        append: bool,
    ) -> DataStoreResult<()>;

    /// Snapshot of the rights `token` holds on (ns, doc)
    fn permissions(&self, token: &str, ns: &str, doc: &str) -> DataStoreResult<Capabilities>;

    fn can_get(&self, token: &str, ns: &str, doc: &str) -> DataStoreResult<bool> {
        Ok(self.permissions(token, ns, doc)?.can_get())
    }

    fn can_put(&self, token: &str, ns: &str, doc: &str) -> DataStoreResult<bool> {
        Ok(self.permissions(token, ns, doc)?.can_put())
    }

    fn can_append(&self, token: &str, ns: &str, doc: &str) -> DataStoreResult<bool> {
        Ok(self.permissions(token, ns, doc)?.can_append())
    }

    /// Add (`is == true`) or remove `token` as admin of `ns`
    fn set_namespace_admin(&self, token: &str, ns: &str, is: bool) -> DataStoreResult<()>;

    /// Add (`is == true`) or remove `token` as a global admin
    fn set_admin(&self, token: &str, is: bool) -> DataStoreResult<()>;

    fn is_namespace_admin(&self, token: &str, ns: &str) -> DataStoreResult<bool>;

    fn is_admin(&self, token: &str) -> DataStoreResult<bool>;

    fn is_root(&self, token: &str) -> DataStoreResult<bool>;
}
