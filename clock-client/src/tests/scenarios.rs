// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::cmds::{read_params_snapshot, Command, ProposalArgs, SnapshotArgs};
use crate::settings::Settings;
use clap::Parser;
use clock_exports::governance::{MsgSubmitProposal, ProposalContent};
use clock_exports::test_exports::{contract_address, user_address};
use clock_exports::{ClockError, ClockParams};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn snapshot(seeds: &[&str], gas: u64) -> NamedTempFile {
    let params = ClockParams {
        contract_addresses: seeds.iter().map(|s| contract_address(s)).collect(),
        contract_gas_limit: gas,
    };
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&params).unwrap()).unwrap();
    file
}

fn settings(file: &NamedTempFile) -> Settings {
    Settings {
        params_path: file.path().to_path_buf(),
        from: Some(user_address("proposer")),
        deposit_denom: Some("uclock".to_string()),
    }
}

fn proposal_args(deposit: &str) -> ProposalArgs {
    ProposalArgs {
        title: "clock contracts".to_string(),
        deposit: deposit.to_string(),
        description: "edit the clock contracts".to_string(),
        from: None,
        snapshot: SnapshotArgs { params: None },
    }
}

/// Runs `command` and decodes the submission it prints
fn submission(command: Command, settings: &Settings) -> anyhow::Result<MsgSubmitProposal> {
    let output = command.run(settings)?;
    Ok(serde_json::from_str(&output.to_json()?)?)
}

fn proposed_params(msg: &MsgSubmitProposal) -> &ClockParams {
    match &msg.content {
        ProposalContent::UpdateParams(proposal) => &proposal.params,
        other => panic!("unexpected content {:?}", other),
    }
}

#[test]
#[serial]
fn test_add_contract_keeps_existing_list() {
    let file = snapshot(&["A", "B"], 100_000);
    let msg = submission(
        Command::AddContract {
            address: contract_address("C"),
            gas_limit: 200_000,
            proposal: proposal_args("1000uclock"),
        },
        &settings(&file),
    )
    .unwrap();

    assert_eq!(msg.proposer, user_address("proposer"));
    assert_eq!(msg.initial_deposit.to_string(), "1000uclock");
    let params = proposed_params(&msg);
    assert_eq!(
        params.contract_addresses,
        vec![
            contract_address("A"),
            contract_address("B"),
            contract_address("C")
        ]
    );
    assert_eq!(params.contract_gas_limit, 200_000);
}

#[test]
#[serial]
fn test_add_contract_rejected_before_submission() {
    let file = snapshot(&["A"], 10);
    let settings = settings(&file);

    let err = submission(
        Command::AddContract {
            address: contract_address("A"),
            gas_limit: 10,
            proposal: proposal_args("1000uclock"),
        },
        &settings,
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ClockError>(),
        Some(&ClockError::DuplicateTarget(contract_address("A")))
    );

    let err = submission(
        Command::AddContract {
            address: "juno14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9skjuwg8"
                .to_string(),
            gas_limit: 10,
            proposal: proposal_args("1000uclock"),
        },
        &settings,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClockError>(),
        Some(ClockError::InvalidAddress(..))
    ));

    let err = submission(
        Command::AddContract {
            address: contract_address("B"),
            gas_limit: 10,
            proposal: proposal_args("1000uclock,1ustake"),
        },
        &settings,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClockError>(),
        Some(ClockError::InvalidDeposit(_))
    ));

    // wrong denomination
    submission(
        Command::AddContract {
            address: contract_address("B"),
            gas_limit: 10,
            proposal: proposal_args("1000ustake"),
        },
        &settings,
    )
    .unwrap_err();
}

#[test]
#[serial]
fn test_remove_contract() {
    let file = snapshot(&["A", "B", "C"], 100_000);
    let settings = settings(&file);
    let msg = submission(
        Command::RemoveContract {
            address: contract_address("B"),
            proposal: proposal_args("10uclock"),
        },
        &settings,
    )
    .unwrap();
    assert_eq!(
        proposed_params(&msg).contract_addresses,
        vec![contract_address("A"), contract_address("C")]
    );
    assert_eq!(proposed_params(&msg).contract_gas_limit, 100_000);

    let err = submission(
        Command::RemoveContract {
            address: contract_address("D"),
            proposal: proposal_args("10uclock"),
        },
        &settings,
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ClockError>(),
        Some(&ClockError::UnknownTarget(contract_address("D")))
    );
}

#[test]
#[serial]
fn test_missing_proposer() {
    let file = snapshot(&[], 0);
    let mut settings = settings(&file);
    settings.from = None;
    let command = Command::AddContract {
        address: contract_address("A"),
        gas_limit: 1,
        proposal: proposal_args("10uclock"),
    };
    assert!(command.run(&settings).is_err());
}

#[test]
fn test_snapshot_commands() {
    let file = snapshot(&["A", "B"], 7);
    let other = snapshot(&["C"], 9);
    let settings = settings(&file);

    let output = Command::ListContracts {
        snapshot: SnapshotArgs { params: None },
    }
    .run(&settings)
    .unwrap();
    assert_eq!(
        output.to_json().unwrap(),
        serde_json::to_string(&vec![contract_address("A"), contract_address("B")]).unwrap()
    );

    let output = Command::GetParams {
        snapshot: SnapshotArgs {
            params: Some(other.path().to_path_buf()),
        },
    }
    .run(&settings)
    .unwrap();
    let params: ClockParams = serde_json::from_str(&output.to_json().unwrap()).unwrap();
    assert_eq!(params, read_params_snapshot(other.path()).unwrap());
    assert_eq!(params.contract_gas_limit, 9);

    let missing = Command::GetParams {
        snapshot: SnapshotArgs {
            params: Some("does/not/exist.json".into()),
        },
    };
    assert!(missing.run(&settings).is_err());
}

#[test]
fn test_parse_command_line() {
    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    let cli = Cli::try_parse_from([
        "clock-client",
        "add-contract",
        "AS12",
        "100000",
        "my title",
        "1000uclock",
        "my description",
        "--from",
        "AU12",
        "--params",
        "params.json",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Command::AddContract {
            address: "AS12".to_string(),
            gas_limit: 100_000,
            proposal: ProposalArgs {
                title: "my title".to_string(),
                deposit: "1000uclock".to_string(),
                description: "my description".to_string(),
                from: Some("AU12".to_string()),
                snapshot: SnapshotArgs {
                    params: Some("params.json".into()),
                },
            },
        }
    );

    // gas limit must be an unsigned integer
    assert!(Cli::try_parse_from([
        "clock-client",
        "add-contract",
        "AS12",
        "lots",
        "title",
        "1000uclock",
        "description"
    ])
    .is_err());
}
