// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Entry point of every change of the clock params

use crate::ParamsStore;
use clock_exports::governance::{
    register_proposal_kind_once, MsgUpdateParams, ProposalContent, PROPOSAL_TYPE_UPDATE_PARAMS,
};
use clock_exports::{AllowListEditor, ClockConfig, ClockError, ClockParams, EditRequest};
use clock_logging::clock_trace;
use tracing::{debug, info};

/// Registers the proposal kinds of the clock module with the governance
/// registry. Can be called from several entry points of the same process:
/// only the first call registers, the next ones do nothing.
pub fn register_proposal_kinds() {
    if register_proposal_kind_once(PROPOSAL_TYPE_UPDATE_PARAMS) {
        debug!("registered proposal kind {}", PROPOSAL_TYPE_UPDATE_PARAMS);
    }
}

/// Applies approved governance decisions and authority messages to the params
#[derive(Clone)]
pub struct ProposalGate {
    config: ClockConfig,
    store: ParamsStore,
}

impl ProposalGate {
    /// Creates a gate writing to `store`
    pub fn new(config: ClockConfig, store: ParamsStore) -> Self {
        ProposalGate { config, store }
    }

    /// Computes the next params out of the stored ones and commits them.
    ///
    /// # Returns
    /// The committed params. On error the store is unchanged.
    pub fn apply_edit(&self, request: EditRequest) -> Result<ClockParams, ClockError> {
        let next = AllowListEditor::apply(&self.store.get_params(), request)?;
        self.store.set_params(next.clone())?;
        Ok(next)
    }

    /// Direct update of the params, only accepted from the configured authority
    pub fn update_params(&self, msg: MsgUpdateParams) -> Result<(), ClockError> {
        if msg.authority != self.config.authority {
            return Err(ClockError::Unauthorized {
                expected: self.config.authority.clone(),
                got: msg.authority,
            });
        }
        let params = self.apply_edit(EditRequest::Replace(msg.params))?;
        info!(
            "clock params updated by {}: {} contracts, gas limit {}",
            msg.authority,
            params.contract_addresses.len(),
            params.contract_gas_limit
        );
        Ok(())
    }

    /// Executes a proposal enacted by the governance module.
    /// Any error fails the proposal execution as a whole.
    pub fn handle_proposal(&self, content: &ProposalContent) -> Result<(), ClockError> {
        match content {
            ProposalContent::UpdateParams(proposal) => {
                let params = self.apply_edit(EditRequest::Replace(proposal.params.clone()))?;
                info!("clock params updated by proposal \"{}\"", proposal.title);
                clock_trace!("proposal_executed", {
                    "title": proposal.title,
                    "contracts": params.contract_addresses,
                    "gas_limit": params.contract_gas_limit
                });
                Ok(())
            }
            ProposalContent::Unrecognized { kind } => {
                Err(ClockError::UnknownProposal(kind.clone()))
            }
        }
    }
}
