// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! this file defines all possible clock error categories

use displaydoc::Display;
use thiserror::Error;

/// Errors of the clock component.
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug, PartialEq, Eq)]
pub enum ClockError {
    /// invalid contract address {0}: {1}
    InvalidAddress(String, String),
    /// contract address already present: {0}
    DuplicateTarget(String),
    /// contract address not present: {0}
    UnknownTarget(String),
    /// invalid contract gas limit {0}: must not exceed {1}
    InvalidGasLimit(u64, u64),
    /// too many contracts: {0} exceeds {1}
    TooManyTargets(usize, u64),
    /// invalid authority; expected {expected}, got {got}
    Unauthorized {
        /// configured authority
        expected: String,
        /// authority of the message
        got: String,
    },
    /// unrecognized clock proposal content type: {0}
    UnknownProposal(String),
    /// proposal kind already registered: {0}
    DuplicateProposalKind(String),
    /// invalid proposal: {0}
    InvalidProposal(String),
    /// invalid deposit: {0}
    InvalidDeposit(String),
    /// serialization error: {0}
    SerializeError(String),
}

/// Errors reported by the contract runtime for a single call.
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug, PartialEq, Eq)]
pub enum ExecutionError {
    /// out of gas in {descriptor}: limit {limit}, consumed {consumed}
    OutOfGas {
        /// gas limit of the call
        limit: u64,
        /// gas consumed when the limit was hit, including the failed request
        consumed: u64,
        /// what was being metered
        descriptor: String,
    },
    /// contract not found: {0}
    ContractNotFound(String),
    /// Runtime error: {0}
    RuntimeError(String),
}
