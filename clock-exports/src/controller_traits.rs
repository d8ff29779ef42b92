// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::governance::{MsgUpdateParams, ProposalContent};
use crate::{ClockError, ClockParams};

/// Trait defining a clock controller: the query and governance surface of the module
pub trait ClockController: Send + Sync {
    /// current params, the zero value if none were ever written
    fn get_params(&self) -> ClockParams;

    /// contracts called at each block boundary, in call order
    fn list_targets(&self) -> Vec<String>;

    /// apply a direct params update, only accepted from the configured authority
    fn update_params(&mut self, msg: MsgUpdateParams) -> Result<(), ClockError>;

    /// execute an approved governance proposal routed to the module
    fn handle_proposal(&mut self, content: &ProposalContent) -> Result<(), ClockError>;

    /// Returns a boxed clone of self.
    /// Useful to allow cloning `Box<dyn ClockController>`.
    fn clone_box(&self) -> Box<dyn ClockController>;
}

/// Allow cloning `Box<dyn ClockController>`
/// Uses `ClockController::clone_box` internally
impl Clone for Box<dyn ClockController> {
    fn clone(&self) -> Box<dyn ClockController> {
        self.clone_box()
    }
}
