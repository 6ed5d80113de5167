//! Link-scoped pseudonymous voter identity.
//!
//! There are no accounts. A voter is a random UUID minted the first time a
//! device opens a given link context and persisted in that device's local
//! store; the capability-token reading of "whoever holds the link". A
//! different device, a cleared store, or a different link context all yield
//! fresh, unlinked identities.
//!
//! - [`provider`] - context keys and token derivation
//! - [`store`] - the durable key-value abstraction
//! - [`file_store`] - JSON-file store used by the member CLI

pub mod file_store;
pub mod provider;
pub mod store;

pub use file_store::FileTokenStore;
pub use provider::{LinkContext, VoterIdentity};
pub use store::{MemoryTokenStore, TokenStore};
