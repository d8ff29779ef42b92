// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! The clock worker calls a governance-controlled list of contracts at the
//! beginning and at the end of every block.
//!
//! The `BlockDispatcher` is driven by the block processing pipeline: it reads
//! the current params, gives every contract a fresh gas meter and collects the
//! failures without ever failing the block.
//!
//! The params are updated either by an approved governance proposal or by a
//! direct message from the configured authority, both going through the
//! `ProposalGate`, which validates the change before the `ParamsStore` commits
//! it in a single batch.
//!
//! `start_clock_module` wires everything together and returns the controller
//! used by the query and governance surfaces along with the dispatcher.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod controller_impl;
mod dispatcher;
mod params_store;
mod proposal;
mod worker;

pub use controller_impl::ClockControllerImpl;
pub use dispatcher::BlockDispatcher;
pub use params_store::ParamsStore;
pub use proposal::{register_proposal_kinds, ProposalGate};
pub use worker::start_clock_module;

#[cfg(test)]
mod tests;
