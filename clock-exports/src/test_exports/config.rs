// Copyright (c) 2022 MASSA LABS <info@massa.net>

use clock_models::config::{MAX_CLOCK_CONTRACTS, MAX_CLOCK_CONTRACT_GAS_LIMIT};

use super::user_address;
use crate::ClockConfig;

/// Authority of the default test configuration
pub fn authority_address() -> String {
    user_address("gov")
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            authority: authority_address(),
            max_contracts: MAX_CLOCK_CONTRACTS,
            max_contract_gas_limit: MAX_CLOCK_CONTRACT_GAS_LIMIT,
        }
    }
}
