// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Edition of the list of contracts called at each block boundary.
//!
//! Everything here is pure: the editor computes the next params out of the
//! current ones and never touches the store. Writing the result is the job of
//! the proposal gate, and the client uses the same editor to reject a bad
//! proposal before submitting it.

use crate::params::parse_contract_address;
use crate::{ClockError, ClockParams};

/// Change requested on the contract list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditRequest {
    /// Append a contract at the end of the list, optionally replacing the gas limit
    Add {
        /// contract to add
        address: String,
        /// new gas limit, the current one is kept if `None`
        gas_limit: Option<u64>,
    },
    /// Remove one contract, keeping the order of the others
    Remove {
        /// contract to remove
        address: String,
    },
    /// Overwrite the whole params
    Replace(ClockParams),
}

/// Computes the next params out of the current ones and an `EditRequest`
pub struct AllowListEditor;

impl AllowListEditor {
    /// Applies `request` on top of `current`.
    ///
    /// # Returns
    /// The params to commit, or the rule the request violates:
    /// * `InvalidAddress` if an address does not decode
    /// * `DuplicateTarget` if an added address is already present, or a replacement list has repeats
    /// * `UnknownTarget` if a removed address is absent
    pub fn apply(current: &ClockParams, request: EditRequest) -> Result<ClockParams, ClockError> {
        match request {
            EditRequest::Add { address, gas_limit } => {
                parse_contract_address(&address)?;
                if current.position(&address).is_some() {
                    return Err(ClockError::DuplicateTarget(address));
                }
                let mut next = current.clone();
                next.contract_addresses.push(address);
                if let Some(gas_limit) = gas_limit {
                    next.contract_gas_limit = gas_limit;
                }
                Ok(next)
            }
            EditRequest::Remove { address } => {
                parse_contract_address(&address)?;
                let Some(index) = current.position(&address) else {
                    return Err(ClockError::UnknownTarget(address));
                };
                let mut next = current.clone();
                // Vec::remove shifts the tail left, order is kept
                next.contract_addresses.remove(index);
                Ok(next)
            }
            EditRequest::Replace(params) => {
                params.validate_addresses()?;
                Ok(params)
            }
        }
    }
}
