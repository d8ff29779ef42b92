use displaydoc::Display;
use thiserror::Error;

/// Errors of the store
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone)]
pub enum ClockDBError {
    /// unknown column family: {0}
    UnknownColumnFamily(String),
    /// store error: {0}
    StoreError(String),
}
