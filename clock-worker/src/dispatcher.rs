// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Calls the clock contracts at the block boundaries

use crate::ParamsStore;
use clock_exports::{
    BlockHook, ContractExecutor, DispatchFailure, DispatchFailureReason, DispatchOutcome,
    GasMeter, SudoMessage,
};
use clock_logging::clock_trace;
use clock_metrics::ClockMetrics;
use clock_models::config::MODULE_NAME;
use clock_models::Address;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, warn};

/// Hook run by the block processing pipeline at the beginning and at the end
/// of every block.
///
/// Contracts are called one after the other, in list order, each with its own
/// gas meter. A failing contract is recorded and the loop moves on: a hook
/// never fails the block.
pub struct BlockDispatcher {
    store: ParamsStore,
    executor: Box<dyn ContractExecutor>,
    metrics: ClockMetrics,
}

impl BlockDispatcher {
    /// Creates a dispatcher reading the params from `store`
    pub fn new(
        store: ParamsStore,
        executor: Box<dyn ContractExecutor>,
        metrics: ClockMetrics,
    ) -> Self {
        BlockDispatcher {
            store,
            executor,
            metrics,
        }
    }

    /// Calls the contracts with the hash of the block being started
    pub fn on_block_begin(&self, block_hash: &[u8]) -> DispatchOutcome {
        self.dispatch(BlockHook::BeginBlock, SudoMessage::begin_block(block_hash))
    }

    /// Calls the contracts at the end of the block, with the header hash when known
    pub fn on_block_end(&self, header_hash: Option<&[u8]>) -> DispatchOutcome {
        self.dispatch(BlockHook::EndBlock, SudoMessage::end_block(header_hash))
    }

    fn dispatch(&self, hook: BlockHook, message: SudoMessage) -> DispatchOutcome {
        let start = Instant::now();
        let params = self.store.get_params();
        let payload = message.to_bytes();
        let mut outcome = DispatchOutcome::new(hook);

        for target in &params.contract_addresses {
            outcome.attempted += 1;
            let contract = match Address::from_str(target) {
                Ok(contract) => contract,
                Err(err) => {
                    debug!("[{}] {}: cannot decode {}: {}", MODULE_NAME, hook, target, err);
                    outcome.failures.push(DispatchFailure {
                        target: target.clone(),
                        reason: DispatchFailureReason::InvalidAddress(err),
                    });
                    continue;
                }
            };

            // fresh meter: what a contract burns is never taken from the next one
            let mut gas_meter = GasMeter::new(params.contract_gas_limit);
            match self.executor.sudo(&contract, &payload, &mut gas_meter) {
                Ok(_) => {
                    debug!(
                        "[{}] {}: {} used {} gas",
                        MODULE_NAME,
                        hook,
                        target,
                        gas_meter.consumed()
                    );
                }
                Err(err) => {
                    debug!(
                        "[{}] {}: {} failed after {} gas: {}",
                        MODULE_NAME,
                        hook,
                        target,
                        gas_meter.consumed(),
                        err
                    );
                    outcome.failures.push(DispatchFailure {
                        target: target.clone(),
                        reason: DispatchFailureReason::Execution(err),
                    });
                }
            }
        }

        if !outcome.is_success() {
            let errors: Vec<String> = outcome
                .failures
                .iter()
                .map(|failure| format!("{}: {}", failure.target, failure.reason))
                .collect();
            warn!(
                "[{}] {} execute errors: [{}]",
                MODULE_NAME,
                hook,
                errors.join(", ")
            );
        }

        self.metrics
            .inc_contract_executions(hook.as_str(), outcome.attempted as u64);
        self.metrics
            .inc_contract_failures(hook.as_str(), outcome.failures.len() as u64);
        self.metrics
            .observe_hook_duration(hook.as_str(), start.elapsed().as_secs_f64());
        clock_trace!("block_hook", {
            "hook": hook.as_str(),
            "attempted": outcome.attempted,
            "failed": outcome.failed_targets()
        });

        outcome
    }
}
