// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::{start_clock_module, BlockDispatcher};
use clock_db_exports::ShareableClockDBController;
use clock_db_worker::ClockDB;
use clock_exports::governance::MsgUpdateParams;
use clock_exports::test_exports::{authority_address, contract_address};
use clock_exports::{ClockConfig, ClockController, ClockParams, MockContractExecutor};
use clock_metrics::ClockMetrics;
use clock_models::Address;
use std::str::FromStr;

/// Everything a scenario needs to drive the module
pub struct TestModule {
    pub controller: Box<dyn ClockController>,
    pub dispatcher: BlockDispatcher,
    pub metrics: ClockMetrics,
    pub db: ShareableClockDBController,
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Starts the module over an empty in-memory store
pub fn start_test_module(executor: MockContractExecutor) -> TestModule {
    init_logging();
    let db = ClockDB::new_shareable();
    let metrics = ClockMetrics::new(false);
    let (controller, dispatcher) = start_clock_module(
        ClockConfig::default(),
        db.clone(),
        Box::new(executor),
        metrics.clone(),
    );
    TestModule {
        controller,
        dispatcher,
        metrics,
        db,
    }
}

/// Params calling the contracts derived from `seeds`, in order
pub fn params(seeds: &[&str], gas: u64) -> ClockParams {
    ClockParams {
        contract_addresses: seeds.iter().map(|s| contract_address(s)).collect(),
        contract_gas_limit: gas,
    }
}

pub fn decoded(seed: &str) -> Address {
    Address::from_str(&contract_address(seed)).unwrap()
}

/// Writes `params` through the authority path
pub fn set_params(module: &mut TestModule, params: ClockParams) {
    module
        .controller
        .update_params(MsgUpdateParams {
            authority: authority_address(),
            params,
        })
        .unwrap();
}
