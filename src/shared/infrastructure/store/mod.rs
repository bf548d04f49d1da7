// Errors shared by every repository port.
//
// The ports themselves live next to the module that needs them
// (`modules/*/adapters/outbound/repository.rs`); the in-memory adapter
// implements all of them against a single set of tables.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store conflict: {0}")]
    Conflict(String),
}

pub mod in_memory;
