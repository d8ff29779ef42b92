// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Tooling for the tests of the clock module and of the crates using it

mod config;

pub use config::*;

use clock_models::{Address, Hash};

/// Smart contract address derived from `seed`
pub fn contract_address(seed: &str) -> String {
    Address::from_sc_hash(Hash::compute_from(seed.as_bytes())).to_string()
}

/// User address derived from `seed`
pub fn user_address(seed: &str) -> String {
    Address::from_user_hash(Hash::compute_from(seed.as_bytes())).to_string()
}
