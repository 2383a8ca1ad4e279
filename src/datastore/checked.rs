//! # Checked Operations
//!
//! Each checked operation asks the store exactly one question about the
//! caller's token and only forwards to the store when the answer is yes:
//!
//! | operation | predicate |
//! |---|---|
//! | `checked_get` | `can_get(client, ns, doc)` |
//! | `checked_put` | `can_put(client, ns, doc)` |
//! | `checked_append` | `can_append(client, ns, doc)` |
//! | `checked_set_token` | `is_namespace_admin(client, ns)` |
//! | `checked_set_namespace_admin` | `is_admin(client)` |
//! | `checked_set_admin` | `is_root(client)` |
//!
//! A predicate error is returned as-is and the operation is skipped. The
//! check and the action are two separate lock acquisitions, so a revoke can
//! land between them.

use crate::observability::{Event, Logger};

use super::errors::{DataStoreError, DataStoreResult};
use super::store::DataStore;

/// Turn a predicate answer into `Ok(())` or `AccessDenied`
fn authorize(allowed: bool, operation: &str, fields: &[(&str, &str)]) -> DataStoreResult<()> {
    if allowed {
        return Ok(());
    }

    let mut logged = Vec::with_capacity(fields.len() + 1);
    logged.push(("operation", operation));
    logged.extend_from_slice(fields);
    Logger::warn(Event::AccessDenied.as_str(), &logged);

    Err(DataStoreError::AccessDenied)
}

fn flag(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Read a document if `client_token` may get it
pub fn checked_get<S: DataStore + ?Sized>(
    store: &S,
    client_token: &str,
    ns: &str,
    doc: &str,
) -> DataStoreResult<Option<Vec<u8>>> {
    let allowed = store.can_get(client_token, ns, doc)?;
    authorize(allowed, "get", &[("doc", doc), ("ns", ns)])?;
    store.get(ns, doc)
}

/// Replace a document if `client_token` may put it
pub fn checked_put<S: DataStore + ?Sized>(
    store: &S,
    client_token: &str,
    ns: &str,
    doc: &str,
    value: &[u8],
) -> DataStoreResult<()> {
    let allowed = store.can_put(client_token, ns, doc)?;
    authorize(allowed, "put", &[("doc", doc), ("ns", ns)])?;
    store.put(ns, doc, value)
}

/// Append to a document if `client_token` may append to it
pub fn checked_append<S: DataStore + ?Sized>(
    store: &S,
    client_token: &str,
    ns: &str,
    doc: &str,
    delim: &[u8],
    value: &[u8],
) -> DataStoreResult<()> {
    let allowed = store.can_append(client_token, ns, doc)?;
    authorize(allowed, "append", &[("doc", doc), ("ns", ns)])?;
    store.append(ns, doc, delim, value)
}

/// Set the rights of `token` on (ns, doc) if `client_token` administers `ns`
#[allow(clippy::too_many_arguments)]
pub fn checked_set_token<S: DataStore + ?Sized>(
    store: &S,
    client_token: &str,
    token: &str,
    ns: &str,
    doc: &str,
    get: bool,
    put: bool,
    append: bool,
) -> DataStoreResult<()> {
    let allowed = store.is_namespace_admin(client_token, ns)?;
    authorize(allowed, "set_token", &[("doc", doc), ("ns", ns)])?;
    store.set_token(token, ns, doc, get, put, append)?;

    Logger::info(
        Event::TokenPermissionsSet.as_str(),
        &[
            ("append", flag(append)),
            ("doc", doc),
            ("get", flag(get)),
            ("ns", ns),
            ("put", flag(put)),
        ],
    );
    Ok(())
}

/// Grant or revoke namespace admin if `client_token` is a global admin
pub fn checked_set_namespace_admin<S: DataStore + ?Sized>(
    store: &S,
    client_token: &str,
    token: &str,
    ns: &str,
    is: bool,
) -> DataStoreResult<()> {
    let allowed = store.is_admin(client_token)?;
    authorize(allowed, "set_namespace_admin", &[("ns", ns)])?;
    store.set_namespace_admin(token, ns, is)?;

    Logger::info(
        Event::NamespaceAdminSet.as_str(),
        &[("is", flag(is)), ("ns", ns)],
    );
    Ok(())
}

/// Grant or revoke global admin if `client_token` is root
pub fn checked_set_admin<S: DataStore + ?Sized>(
    store: &S,
    client_token: &str,
    token: &str,
    is: bool,
) -> DataStoreResult<()> {
    let allowed = store.is_root(client_token)?;
    authorize(allowed, "set_admin", &[])?;
    store.set_admin(token, is)?;

    Logger::info(Event::AdminSet.as_str(), &[("is", flag(is))]);
    Ok(())
}
