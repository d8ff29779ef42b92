// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::{ParamsStore, ProposalGate};
use clock_exports::governance::{MsgUpdateParams, ProposalContent};
use clock_exports::{ClockController, ClockError, ClockParams};

/// Implementation of the clock controller
#[derive(Clone)]
pub struct ClockControllerImpl {
    pub(crate) store: ParamsStore,
    pub(crate) gate: ProposalGate,
}

impl ClockController for ClockControllerImpl {
    /// current params of the module
    fn get_params(&self) -> ClockParams {
        self.store.get_params()
    }

    /// contracts called at each block boundary
    fn list_targets(&self) -> Vec<String> {
        self.store.list_targets()
    }

    /// direct update from the authority
    fn update_params(&mut self, msg: MsgUpdateParams) -> Result<(), ClockError> {
        self.gate.update_params(msg)
    }

    /// enacted governance proposal
    fn handle_proposal(&mut self, content: &ProposalContent) -> Result<(), ClockError> {
        self.gate.handle_proposal(content)
    }

    fn clone_box(&self) -> Box<dyn ClockController> {
        Box::new(self.clone())
    }
}
