// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Durable record of the clock params

use clock_db_exports::{
    DBBatch, ShareableClockDBController, CLOCK_PARAMS_DESER_ERROR, CLOCK_PARAMS_KEY, CRUD_ERROR,
    STATE_CF,
};
use clock_exports::{
    ClockConfig, ClockError, ClockParams, ClockParamsDeserializer, ClockParamsSerializer,
};
use clock_models::config::MAX_CLOCK_CONTRACTS;
use clock_serialization::{DeserializeError, Deserializer, Serializer};
use tracing::debug;

/// Reads and writes the params record of the module.
///
/// The record lives under `CLOCK_PARAMS_KEY` in the state column. An absent
/// record reads as the zero value, and the record is never deleted.
///
/// Reads are bounded by the codec limit `MAX_CLOCK_CONTRACTS` only, so that a
/// record committed under a larger `max_contracts` stays readable after the
/// configuration is lowered. The configured bound applies to writes.
#[derive(Clone)]
pub struct ParamsStore {
    config: ClockConfig,
    db: ShareableClockDBController,
    params_serializer: ClockParamsSerializer,
    params_deserializer: ClockParamsDeserializer,
}

impl ParamsStore {
    /// Creates a store over the shared database
    pub fn new(config: ClockConfig, db: ShareableClockDBController) -> Self {
        let params_deserializer = ClockParamsDeserializer::new(MAX_CLOCK_CONTRACTS);
        ParamsStore {
            config,
            db,
            params_serializer: ClockParamsSerializer::new(),
            params_deserializer,
        }
    }

    /// Current params, or the zero value if none were ever written.
    ///
    /// A read failure or an undecodable record means the state is corrupted,
    /// which is not recoverable.
    pub fn get_params(&self) -> ClockParams {
        let db = self.db.read();
        match db
            .get_cf(STATE_CF, CLOCK_PARAMS_KEY.to_vec())
            .expect(CRUD_ERROR)
        {
            Some(serialized) => {
                let (rest, params) = self
                    .params_deserializer
                    .deserialize::<DeserializeError>(&serialized)
                    .expect(CLOCK_PARAMS_DESER_ERROR);
                if !rest.is_empty() {
                    panic!("{}: {} trailing bytes", CLOCK_PARAMS_DESER_ERROR, rest.len());
                }
                params
            }
            None => ClockParams::default(),
        }
    }

    /// Validates `params` and writes them in a single batch.
    /// On error nothing is written.
    pub fn set_params(&self, params: ClockParams) -> Result<(), ClockError> {
        params.validate(
            self.config.max_contracts.min(MAX_CLOCK_CONTRACTS),
            self.config.max_contract_gas_limit,
        )?;

        let mut serialized = Vec::new();
        self.params_serializer
            .serialize(&params, &mut serialized)
            .map_err(|err| ClockError::SerializeError(err.to_string()))?;

        let mut db = self.db.write();
        let mut batch = DBBatch::new();
        db.put_or_update_entry_value(&mut batch, CLOCK_PARAMS_KEY.to_vec(), &serialized);
        db.write_batch(batch);
        debug!(
            "clock params written: {} contracts, gas limit {}",
            params.contract_addresses.len(),
            params.contract_gas_limit
        );
        Ok(())
    }

    /// Contracts called at each block boundary, in call order
    pub fn list_targets(&self) -> Vec<String> {
        self.get_params().contract_addresses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use clock_db_exports::{ClockDBController, MockClockDBController};
    use clock_db_worker::ClockDB;
    use clock_exports::test_exports::contract_address;
    use parking_lot::RwLock;
    use std::sync::Arc;

    fn store() -> ParamsStore {
        ParamsStore::new(ClockConfig::default(), ClockDB::new_shareable())
    }

    #[test]
    fn test_empty_store_reads_zero_value() {
        let store = store();
        assert_eq!(store.get_params(), ClockParams::default());
        assert!(store.list_targets().is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let store = store();
        let params = ClockParams {
            contract_addresses: vec![contract_address("A"), contract_address("B")],
            contract_gas_limit: 100_000,
        };
        store.set_params(params.clone()).unwrap();
        assert_eq!(store.get_params(), params);
        assert_eq!(store.list_targets(), params.contract_addresses);

        // a clone shares the same record
        let other = store.clone();
        other.set_params(ClockParams::default()).unwrap();
        assert_eq!(store.get_params(), ClockParams::default());
    }

    #[test]
    fn test_invalid_params_leave_store_unchanged() {
        let store = store();
        let params = ClockParams {
            contract_addresses: vec![contract_address("A")],
            contract_gas_limit: 10,
        };
        store.set_params(params.clone()).unwrap();

        let duplicated = ClockParams {
            contract_addresses: vec![contract_address("B"), contract_address("B")],
            contract_gas_limit: 10,
        };
        assert_eq!(
            store.set_params(duplicated),
            Err(ClockError::DuplicateTarget(contract_address("B")))
        );

        let too_much_gas = ClockParams {
            contract_addresses: vec![],
            contract_gas_limit: ClockConfig::default().max_contract_gas_limit + 1,
        };
        assert_matches!(
            store.set_params(too_much_gas),
            Err(ClockError::InvalidGasLimit(..))
        );

        let mut malformed = params.clone();
        malformed.contract_addresses.push("AS12".to_string());
        assert_matches!(
            store.set_params(malformed),
            Err(ClockError::InvalidAddress(..))
        );

        assert_eq!(store.get_params(), params);
    }

    #[test]
    fn test_too_many_contracts() {
        let config = ClockConfig {
            max_contracts: 2,
            ..ClockConfig::default()
        };
        let store = ParamsStore::new(config, ClockDB::new_shareable());
        let params = ClockParams {
            contract_addresses: ["A", "B", "C"].iter().map(|s| contract_address(s)).collect(),
            contract_gas_limit: 0,
        };
        assert_matches!(
            store.set_params(params),
            Err(ClockError::TooManyTargets(3, 2))
        );
        assert_eq!(store.get_params(), ClockParams::default());
    }

    #[test]
    fn test_record_readable_after_max_contracts_lowered() {
        let db = ClockDB::new_shareable();
        let params = ClockParams {
            contract_addresses: ["A", "B", "C"].iter().map(|s| contract_address(s)).collect(),
            contract_gas_limit: 100,
        };
        ParamsStore::new(ClockConfig::default(), db.clone())
            .set_params(params.clone())
            .unwrap();

        let lowered = ParamsStore::new(
            ClockConfig {
                max_contracts: 2,
                ..ClockConfig::default()
            },
            db,
        );
        assert_eq!(lowered.get_params(), params);
        assert_eq!(lowered.list_targets().len(), 3);
        // writes follow the new bound
        assert_matches!(
            lowered.set_params(params.clone()),
            Err(ClockError::TooManyTargets(3, 2))
        );
        assert_eq!(lowered.get_params(), params);
    }

    #[test]
    fn test_config_above_codec_limit_is_capped() {
        let config = ClockConfig {
            max_contracts: MAX_CLOCK_CONTRACTS + 10,
            ..ClockConfig::default()
        };
        let store = ParamsStore::new(config, ClockDB::new_shareable());
        let params = ClockParams {
            contract_addresses: (0..=MAX_CLOCK_CONTRACTS)
                .map(|i| contract_address(&i.to_string()))
                .collect(),
            contract_gas_limit: 0,
        };
        assert_matches!(store.set_params(params), Err(ClockError::TooManyTargets(..)));
        assert_eq!(store.get_params(), ClockParams::default());
    }

    #[test]
    #[should_panic(expected = "critical: clock params deserialization failed")]
    fn test_trailing_bytes_are_fatal() {
        let params = ClockParams {
            contract_addresses: vec![contract_address("A")],
            contract_gas_limit: 5,
        };
        let mut serialized = Vec::new();
        ClockParamsSerializer::new()
            .serialize(&params, &mut serialized)
            .unwrap();
        serialized.extend([1, 2, 3]);

        let mut db = MockClockDBController::new();
        db.expect_get_cf()
            .returning(move |_, _| Ok(Some(serialized.clone())));
        let db: ShareableClockDBController =
            Arc::new(RwLock::new(Box::new(db) as Box<dyn ClockDBController>));
        ParamsStore::new(ClockConfig::default(), db).get_params();
    }

    #[test]
    #[should_panic(expected = "critical: clock params deserialization failed")]
    fn test_corrupted_record_is_fatal() {
        let mut db = MockClockDBController::new();
        db.expect_get_cf()
            .returning(|_, _| Ok(Some(vec![0xff, 0xff, 0xff])));
        let db: ShareableClockDBController =
            Arc::new(RwLock::new(Box::new(db) as Box<dyn ClockDBController>));
        ParamsStore::new(ClockConfig::default(), db).get_params();
    }
}
