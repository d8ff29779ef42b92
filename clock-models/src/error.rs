// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Result type of the models crate
pub type ModelsResult<T, E = ModelsError> = core::result::Result<T, E>;

/// Errors of the models
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelsError {
    /// hash parse error: {0}
    HashParseError(String),
    /// address parse error: {0}
    AddressParseError(String),
    /// Serialization error: {0}
    SerializeError(String),
    /// Deserialization error: {0}
    DeserializeError(String),
    /// Wrong prefix: expected {0}, got {1}
    WrongPrefix(String, String),
}
