// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Base models of the clock module: account addresses, hashes, shared
//! constants and the settings loader used by binaries.

#![warn(missing_docs)]

pub use address::{Address, SCAddress, UserAddress};
pub use error::{ModelsError, ModelsResult};
pub use hash::{Hash, HASH_SIZE_BYTES};

/// account and smart contract addresses
pub mod address;
/// protocol constants and settings loading
pub mod config;
/// models error
pub mod error;
/// blake3 hash
pub mod hash;
