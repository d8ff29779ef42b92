// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::{
    register_proposal_kinds, BlockDispatcher, ClockControllerImpl, ParamsStore, ProposalGate,
};
use clock_db_exports::ShareableClockDBController;
use clock_exports::{ClockConfig, ClockController, ContractExecutor};
use clock_metrics::ClockMetrics;
use tracing::info;

/// Starts the clock module and returns a pair to interact with it.
///
/// # parameters
/// * `config`: module configuration
/// * `db`: shared store holding the params record
/// * `executor`: contract runtime used to call the clock contracts
/// * `metrics`: prometheus metrics of the block hooks
///
/// # Returns
/// A pair `(clock_controller, block_dispatcher)` where:
/// * `clock_controller`: query and governance surface of the module
/// * `block_dispatcher`: hook to run at each block boundary
pub fn start_clock_module(
    config: ClockConfig,
    db: ShareableClockDBController,
    executor: Box<dyn ContractExecutor>,
    metrics: ClockMetrics,
) -> (Box<dyn ClockController>, BlockDispatcher) {
    register_proposal_kinds();

    let store = ParamsStore::new(config.clone(), db);
    let params = store.get_params();
    info!(
        "clock module started with {} contracts, gas limit {}",
        params.contract_addresses.len(),
        params.contract_gas_limit
    );

    let controller = ClockControllerImpl {
        store: store.clone(),
        gate: ProposalGate::new(config, store.clone()),
    };
    let dispatcher = BlockDispatcher::new(store, executor, metrics);
    (Box::new(controller), dispatcher)
}
