//! # Data Store
//!
//! Namespaced document storage plus the tables behind its four-tier
//! permission model:
//!
//! - one root token, fixed at construction, which may grant admins
//! - admins, which may grant namespace admins
//! - namespace admins, which may grant per-document rights in their namespace
//! - per-document tokens holding any of {get, put, append}
//!
//! [`DataStore`] is the engine contract; the `checked_*` functions wrap it
//! with the authorization step.

pub mod capabilities;
pub mod checked;
pub mod errors;
pub mod memory;
pub mod store;

pub use capabilities::Capabilities;
pub use checked::{
    checked_append, checked_get, checked_put, checked_set_admin, checked_set_namespace_admin,
    checked_set_token,
};
pub use errors::{DataStoreError, DataStoreResult};
pub use memory::MemDataStore;
pub use store::DataStore;
