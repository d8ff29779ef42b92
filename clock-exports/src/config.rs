// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines a configuration structure containing all settings for the clock module

/// Clock module configuration
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// address allowed to update the params through `MsgUpdateParams` (the governance module account)
    pub authority: String,
    /// maximum number of contracts in the params
    pub max_contracts: u64,
    /// maximum gas limit given to each contract call
    pub max_contract_gas_limit: u64,
}
