// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Interface towards the contract runtime and outcome of a block hook

use crate::ExecutionError;
use base64::Engine;
use clock_models::{Address, ModelsError};
use serde_json::json;

/// Gas budget of a single contract call.
///
/// Every contract gets a fresh meter, so gas burnt by one contract never
/// reduces the allowance of the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GasMeter {
    limit: u64,
    consumed: u64,
}

impl GasMeter {
    /// Creates a meter allowing `limit` gas
    pub fn new(limit: u64) -> Self {
        GasMeter { limit, consumed: 0 }
    }

    /// Consumes `amount` gas.
    /// Going over the limit burns the whole budget and fails.
    pub fn consume(&mut self, amount: u64, descriptor: &str) -> Result<(), ExecutionError> {
        let consumed = self.consumed.saturating_add(amount);
        if consumed > self.limit {
            self.consumed = self.limit;
            return Err(ExecutionError::OutOfGas {
                limit: self.limit,
                consumed,
                descriptor: descriptor.to_string(),
            });
        }
        self.consumed = consumed;
        Ok(())
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn remaining(&self) -> u64 {
        self.limit - self.consumed
    }

    pub fn is_out_of_gas(&self) -> bool {
        self.consumed >= self.limit
    }
}

/// Contract runtime, as seen by the clock module
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait ContractExecutor: Send + Sync {
    /// Calls the privileged `sudo` entry point of `contract` with `message`,
    /// metering the execution with `gas_meter`.
    ///
    /// # Returns
    /// The data returned by the contract, or the reason the call failed.
    /// Running out of gas is a failure.
    fn sudo(
        &self,
        contract: &Address,
        message: &[u8],
        gas_meter: &mut GasMeter,
    ) -> Result<Vec<u8>, ExecutionError>;
}

/// Block boundary at which the contracts are called
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockHook {
    BeginBlock,
    EndBlock,
}

impl BlockHook {
    /// Label of the hook in logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockHook::BeginBlock => "begin_block",
            BlockHook::EndBlock => "end_block",
        }
    }
}

impl std::fmt::Display for BlockHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message given to the `sudo` entry point of the contracts
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SudoMessage {
    /// `{"clock_begin_block":{"hash":"<base64>"}}`
    BeginBlock { hash: String },
    /// `{"clock_end_block":{}}`, or `{"clock_end_block":{"hash":"<base64>"}}` when the header hash is known
    EndBlock { hash: Option<String> },
}

impl SudoMessage {
    pub fn begin_block(block_hash: &[u8]) -> Self {
        SudoMessage::BeginBlock {
            hash: base64::engine::general_purpose::STANDARD.encode(block_hash),
        }
    }

    pub fn end_block(header_hash: Option<&[u8]>) -> Self {
        SudoMessage::EndBlock {
            hash: header_hash.map(|hash| base64::engine::general_purpose::STANDARD.encode(hash)),
        }
    }

    /// JSON encoding sent to the contracts
    pub fn to_bytes(&self) -> Vec<u8> {
        let value = match self {
            SudoMessage::BeginBlock { hash } => json!({ "clock_begin_block": { "hash": hash } }),
            SudoMessage::EndBlock { hash: Some(hash) } => {
                json!({ "clock_end_block": { "hash": hash } })
            }
            SudoMessage::EndBlock { hash: None } => json!({ "clock_end_block": {} }),
        };
        value.to_string().into_bytes()
    }
}

/// Why a contract call failed during a block hook
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchFailureReason {
    /// the stored address does not decode
    InvalidAddress(ModelsError),
    /// the runtime reported an error, including running out of gas
    Execution(ExecutionError),
}

impl std::fmt::Display for DispatchFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchFailureReason::InvalidAddress(err) => write!(f, "invalid address: {}", err),
            DispatchFailureReason::Execution(err) => write!(f, "execution failed: {}", err),
        }
    }
}

/// A failed contract call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchFailure {
    pub target: String,
    pub reason: DispatchFailureReason,
}

/// Result of one block hook: the failures, in call order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub hook: BlockHook,
    /// number of contracts the hook went through
    pub attempted: usize,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchOutcome {
    pub fn new(hook: BlockHook) -> Self {
        DispatchOutcome {
            hook,
            attempted: 0,
            failures: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Addresses of the failed contracts, in call order
    pub fn failed_targets(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.target.as_str()).collect()
    }
}
