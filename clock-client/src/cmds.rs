// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::settings::Settings;
use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use clock_exports::governance::{
    Coin, MsgSubmitProposal, ProposalContent, UpdateParamsProposal,
};
use clock_exports::{AllowListEditor, ClockParams, EditRequest};
use clock_worker::register_proposal_kinds;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Result of a command, printable for humans or as JSON
pub trait Output {
    fn pretty_print(&self);
    fn to_json(&self) -> Result<String>;
}

impl Output for ClockParams {
    fn pretty_print(&self) {
        print!("{}", self);
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Contract list, one address per line
#[derive(Serialize)]
pub struct ContractList(pub Vec<String>);

impl Output for ContractList {
    fn pretty_print(&self) {
        if self.0.is_empty() {
            println!("no clock contract");
        }
        for address in &self.0 {
            println!("{}", address);
        }
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl Output for MsgSubmitProposal {
    fn pretty_print(&self) {
        if let ProposalContent::UpdateParams(proposal) = &self.content {
            print!("{}", proposal);
        }
        println!("Proposer:           {}", self.proposer);
        println!("Deposit:            {}", self.initial_deposit);
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("cannot encode the message: {}", e),
        }
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Options shared by the commands reading the params snapshot
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotArgs {
    /// JSON snapshot of the current clock params
    #[arg(long = "params")]
    pub params: Option<PathBuf>,
}

/// Options shared by the proposal commands
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProposalArgs {
    /// title of the proposal
    pub title: String,
    /// deposit, exactly one coin (e.g. `1000uclock`)
    pub deposit: String,
    /// description of the proposal
    pub description: String,
    /// address submitting the proposal
    #[arg(long = "from")]
    pub from: Option<String>,
    #[command(flatten)]
    pub snapshot: SnapshotArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// build a proposal adding a contract to the list called at each block
    AddContract {
        /// contract to add
        address: String,
        /// gas limit given to each contract call
        gas_limit: u64,
        #[command(flatten)]
        proposal: ProposalArgs,
    },
    /// build a proposal removing a contract from the list called at each block
    RemoveContract {
        /// contract to remove
        address: String,
        #[command(flatten)]
        proposal: ProposalArgs,
    },
    /// print the clock params of a snapshot
    GetParams {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
    /// print the contracts called at each block, in call order
    ListContracts {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
}

/// Reads a JSON params snapshot
pub fn read_params_snapshot(path: &Path) -> Result<ClockParams> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read params snapshot {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid params snapshot {}", path.display()))
}

impl Command {
    pub(crate) fn run(&self, settings: &Settings) -> Result<Box<dyn Output>> {
        match self {
            Command::AddContract {
                address,
                gas_limit,
                proposal,
            } => {
                let msg = build_edit_proposal(
                    settings,
                    proposal,
                    EditRequest::Add {
                        address: address.clone(),
                        gas_limit: Some(*gas_limit),
                    },
                )?;
                Ok(Box::new(msg))
            }
            Command::RemoveContract { address, proposal } => {
                let msg = build_edit_proposal(
                    settings,
                    proposal,
                    EditRequest::Remove {
                        address: address.clone(),
                    },
                )?;
                Ok(Box::new(msg))
            }
            Command::GetParams { snapshot } => {
                Ok(Box::new(read_params_snapshot(snapshot_path(settings, snapshot))?))
            }
            Command::ListContracts { snapshot } => {
                let params = read_params_snapshot(snapshot_path(settings, snapshot))?;
                Ok(Box::new(ContractList(params.contract_addresses)))
            }
        }
    }
}

fn snapshot_path<'a>(settings: &'a Settings, snapshot: &'a SnapshotArgs) -> &'a Path {
    snapshot
        .params
        .as_deref()
        .unwrap_or_else(|| settings.params_path.as_path())
}

/// Applies `request` on the snapshot and wraps the full next params into a
/// proposal submission. Nothing is sent: the message is meant to be signed
/// and broadcast by the wallet.
fn build_edit_proposal(
    settings: &Settings,
    args: &ProposalArgs,
    request: EditRequest,
) -> Result<MsgSubmitProposal> {
    register_proposal_kinds();

    let proposer = args
        .from
        .clone()
        .or_else(|| settings.from.clone())
        .ok_or_else(|| anyhow!("no proposer address: use --from"))?;

    let initial_deposit = Coin::from_str(&args.deposit)?;
    if let Some(denom) = &settings.deposit_denom {
        if &initial_deposit.denom != denom {
            bail!(
                "invalid deposit denom {}, expected {}",
                initial_deposit.denom,
                denom
            );
        }
    }

    let current = read_params_snapshot(snapshot_path(settings, &args.snapshot))?;
    let params = AllowListEditor::apply(&current, request)?;
    debug!("next clock params: {:?}", params);

    let msg = MsgSubmitProposal {
        proposer,
        initial_deposit,
        content: ProposalContent::UpdateParams(UpdateParamsProposal {
            title: args.title.clone(),
            description: args.description.clone(),
            params,
        }),
    };
    msg.validate_basic()?;
    Ok(msg)
}
