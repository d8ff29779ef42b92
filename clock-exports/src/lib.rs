// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # Overview
//!
//! This crate provides all the facilities to interact with the clock module
//! (clock-worker crate): at the beginning and at the end of every block, a
//! governance-controlled list of contracts is called, each with its own gas
//! budget, and failures are isolated so that a faulty contract never stops
//! block production.
//!
//! # Architecture
//!
//! ## allow_list.rs
//! Pure edition of the contract list: add, remove, replace.
//!
//! ## config.rs
//! Configuration of the module.
//!
//! ## controller_traits.rs
//! Defines the `ClockController` trait used to query and update the module.
//!
//! ## error.rs
//! Defines error types for the crate.
//!
//! ## execution.rs
//! Defines the interface towards the contract runtime, the gas meter, the
//! messages sent to contracts and the outcome of a block hook.
//!
//! ## governance.rs
//! Governance proposal and message types, and the process-wide registry of
//! proposal kinds.
//!
//! ## params.rs
//! Parameters of the module and their binary codec.
//!
//! ## Test exports
//!
//! When the crate feature `test-exports` is enabled, tooling useful for testing
//! purposes is exported. See test_exports/mod.rs for details.

mod allow_list;
mod config;
mod controller_traits;
mod error;
mod execution;
pub mod governance;
mod params;

pub use allow_list::{AllowListEditor, EditRequest};
pub use config::ClockConfig;
pub use controller_traits::ClockController;
pub use error::{ClockError, ExecutionError};
pub use execution::{
    BlockHook, ContractExecutor, DispatchFailure, DispatchFailureReason, DispatchOutcome,
    GasMeter, SudoMessage,
};
pub use params::{
    parse_contract_address, ClockParams, ClockParamsDeserializer, ClockParamsSerializer,
};

#[cfg(any(test, feature = "test-exports"))]
pub use execution::MockContractExecutor;

#[cfg(any(test, feature = "test-exports"))]
pub mod test_exports;
