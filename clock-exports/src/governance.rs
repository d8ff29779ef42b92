// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Governance side of the clock module: the proposal changing the params, the
//! direct administrative message, and the process-wide registry of proposal
//! kinds that the governance module accepts.

use crate::{ClockError, ClockParams};
use clock_models::config::{
    MAX_DENOM_LENGTH, MAX_PROPOSAL_DESCRIPTION_LENGTH, MAX_PROPOSAL_TITLE_LENGTH, MODULE_NAME,
};
use clock_models::Address;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Kind of the proposal updating the clock params
pub const PROPOSAL_TYPE_UPDATE_PARAMS: &str = "UpdateParams";

/// Governance route of the clock proposals
pub const ROUTER_KEY: &str = MODULE_NAME;

lazy_static::lazy_static! {
    static ref PROPOSAL_KINDS: RwLock<BTreeSet<String>> = RwLock::new(BTreeSet::new());
}

/// true if `kind` has been registered in this process
pub fn is_valid_proposal_kind(kind: &str) -> bool {
    PROPOSAL_KINDS.read().contains(kind)
}

/// Registers a proposal kind. Registering the same kind twice is an error.
pub fn register_proposal_kind(kind: &str) -> Result<(), ClockError> {
    let mut kinds = PROPOSAL_KINDS.write();
    if !kinds.insert(kind.to_string()) {
        return Err(ClockError::DuplicateProposalKind(kind.to_string()));
    }
    Ok(())
}

/// Registers `kind` unless it is already known, atomically.
///
/// # Returns
/// true if this call performed the registration
pub fn register_proposal_kind_once(kind: &str) -> bool {
    let mut kinds = PROPOSAL_KINDS.write();
    if kinds.contains(kind) {
        return false;
    }
    kinds.insert(kind.to_string())
}

/// Governance proposal replacing the clock params
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateParamsProposal {
    pub title: String,
    pub description: String,
    pub params: ClockParams,
}

impl UpdateParamsProposal {
    pub fn proposal_route(&self) -> &'static str {
        ROUTER_KEY
    }

    pub fn proposal_type(&self) -> &'static str {
        PROPOSAL_TYPE_UPDATE_PARAMS
    }

    /// Stateless checks on the title and the description
    pub fn validate_basic(&self) -> Result<(), ClockError> {
        if self.title.trim().is_empty() {
            return Err(ClockError::InvalidProposal(
                "proposal title cannot be blank".to_string(),
            ));
        }
        if self.title.len() > MAX_PROPOSAL_TITLE_LENGTH {
            return Err(ClockError::InvalidProposal(format!(
                "proposal title is longer than max length of {}",
                MAX_PROPOSAL_TITLE_LENGTH
            )));
        }
        if self.description.trim().is_empty() {
            return Err(ClockError::InvalidProposal(
                "proposal description cannot be blank".to_string(),
            ));
        }
        if self.description.len() > MAX_PROPOSAL_DESCRIPTION_LENGTH {
            return Err(ClockError::InvalidProposal(format!(
                "proposal description is longer than max length of {}",
                MAX_PROPOSAL_DESCRIPTION_LENGTH
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for UpdateParamsProposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Update Clock Params Proposal:")?;
        writeln!(f, "  Title:              {}", self.title)?;
        writeln!(f, "  Description:        {}", self.description)?;
        writeln!(
            f,
            "  Contract Addresses: [{}]",
            self.params.contract_addresses.join(", ")
        )?;
        writeln!(f, "  Contract Gas Limit: {}", self.params.contract_gas_limit)
    }
}

/// Content of a governance proposal routed to the clock module
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum ProposalContent {
    UpdateParams(UpdateParamsProposal),
    /// content of another module routed here
    Unrecognized { kind: String },
}

impl ProposalContent {
    pub fn kind(&self) -> &str {
        match self {
            ProposalContent::UpdateParams(p) => p.proposal_type(),
            ProposalContent::Unrecognized { kind } => kind,
        }
    }

    pub fn validate_basic(&self) -> Result<(), ClockError> {
        match self {
            ProposalContent::UpdateParams(p) => p.validate_basic(),
            ProposalContent::Unrecognized { kind } => {
                Err(ClockError::UnknownProposal(kind.clone()))
            }
        }
    }
}

/// Direct update of the params, only accepted from the configured authority
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParams {
    pub authority: String,
    pub params: ClockParams,
}

/// Single coin amount, written `<amount><denom>` (e.g. `1000uclock`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub amount: u128,
    pub denom: String,
}

fn validate_denom(denom: &str) -> Result<(), ClockError> {
    let mut chars = denom.chars();
    let valid = denom.len() >= 3
        && denom.len() <= MAX_DENOM_LENGTH
        && chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));
    if !valid {
        return Err(ClockError::InvalidDeposit(format!("invalid denom: {}", denom)));
    }
    Ok(())
}

impl FromStr for Coin {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            return Err(ClockError::InvalidDeposit(
                "unexpected coin amounts, expecting just 1 coin amount".to_string(),
            ));
        }
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (amount, denom) = s.split_at(split);
        if amount.is_empty() {
            return Err(ClockError::InvalidDeposit(format!(
                "bad deposit amount: {}",
                s
            )));
        }
        let amount = amount
            .parse::<u128>()
            .map_err(|err| ClockError::InvalidDeposit(format!("bad deposit amount: {}", err)))?;
        validate_denom(denom)?;
        Ok(Coin {
            amount,
            denom: denom.to_string(),
        })
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Submission of a proposal to the governance module
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSubmitProposal {
    pub proposer: String,
    pub initial_deposit: Coin,
    pub content: ProposalContent,
}

impl MsgSubmitProposal {
    pub fn validate_basic(&self) -> Result<(), ClockError> {
        Address::from_str(&self.proposer).map_err(|err| {
            ClockError::InvalidProposal(format!("invalid proposer {}: {}", self.proposer, err))
        })?;
        validate_denom(&self.initial_deposit.denom)?;
        self.content.validate_basic()?;
        if !is_valid_proposal_kind(self.content.kind()) {
            return Err(ClockError::InvalidProposal(format!(
                "invalid proposal type: {}",
                self.content.kind()
            )));
        }
        Ok(())
    }
}
