// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Parameters of the clock module and their binary codec

use crate::ClockError;
use clock_models::config::MAX_ADDRESS_STRING_LENGTH;
use clock_models::Address;
use clock_serialization::{
    Deserializer, SerializeError, Serializer, StringDeserializer, StringSerializer,
    U64VarIntDeserializer, U64VarIntSerializer,
};
use nom::error::{context, ContextError, ParseError};
use nom::multi::length_count;
use nom::sequence::tuple;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Bound::Included;
use std::str::FromStr;

/// Contracts called at every block boundary, and the gas each call may use.
///
/// The zero value (no contract, no gas) is what an empty store holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockParams {
    /// contracts to call, in call order
    pub contract_addresses: Vec<String>,
    /// gas budget given to each contract call
    pub contract_gas_limit: u64,
}

/// Decodes a contract address, attaching the offending string to the error
pub fn parse_contract_address(address: &str) -> Result<Address, ClockError> {
    Address::from_str(address)
        .map_err(|err| ClockError::InvalidAddress(address.to_string(), err.to_string()))
}

impl ClockParams {
    /// Checks that every address decodes and appears only once
    pub fn validate_addresses(&self) -> Result<(), ClockError> {
        let mut seen = HashSet::with_capacity(self.contract_addresses.len());
        for address in &self.contract_addresses {
            parse_contract_address(address)?;
            if !seen.insert(address.as_str()) {
                return Err(ClockError::DuplicateTarget(address.clone()));
            }
        }
        Ok(())
    }

    /// Full validation performed before the params are written to the store
    pub fn validate(&self, max_contracts: u64, max_contract_gas_limit: u64) -> Result<(), ClockError> {
        if self.contract_addresses.len() as u64 > max_contracts {
            return Err(ClockError::TooManyTargets(
                self.contract_addresses.len(),
                max_contracts,
            ));
        }
        if self.contract_gas_limit > max_contract_gas_limit {
            return Err(ClockError::InvalidGasLimit(
                self.contract_gas_limit,
                max_contract_gas_limit,
            ));
        }
        self.validate_addresses()
    }

    /// Position of a contract in the call order
    pub fn position(&self, address: &str) -> Option<usize> {
        self.contract_addresses.iter().position(|a| a == address)
    }
}

impl std::fmt::Display for ClockParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Contract gas limit: {}", self.contract_gas_limit)?;
        writeln!(f, "Contract addresses:")?;
        for address in &self.contract_addresses {
            writeln!(f, "  {}", address)?;
        }
        Ok(())
    }
}

/// Serializer for `ClockParams`
#[derive(Clone, Default)]
pub struct ClockParamsSerializer {
    u64_serializer: U64VarIntSerializer,
    string_serializer: StringSerializer,
}

impl ClockParamsSerializer {
    /// Creates a new `ClockParamsSerializer`
    pub const fn new() -> Self {
        Self {
            u64_serializer: U64VarIntSerializer::new(),
            string_serializer: StringSerializer::new(),
        }
    }
}

impl Serializer<ClockParams> for ClockParamsSerializer {
    /// ```
    /// use clock_exports::{ClockParams, ClockParamsSerializer};
    /// use clock_serialization::Serializer;
    ///
    /// let params = ClockParams::default();
    /// let mut buffer = Vec::new();
    /// ClockParamsSerializer::new().serialize(&params, &mut buffer).unwrap();
    /// assert_eq!(buffer, vec![0, 0]);
    /// ```
    fn serialize(&self, value: &ClockParams, buffer: &mut Vec<u8>) -> Result<(), SerializeError> {
        let count: u64 = value.contract_addresses.len().try_into().map_err(|err| {
            SerializeError::NumberTooBig(format!("too many contract addresses: {}", err))
        })?;
        self.u64_serializer.serialize(&count, buffer)?;
        for address in &value.contract_addresses {
            self.string_serializer.serialize(address, buffer)?;
        }
        self.u64_serializer
            .serialize(&value.contract_gas_limit, buffer)?;
        Ok(())
    }
}

/// Deserializer for `ClockParams`
#[derive(Clone)]
pub struct ClockParamsDeserializer {
    count_deserializer: U64VarIntDeserializer,
    address_deserializer: StringDeserializer,
    gas_deserializer: U64VarIntDeserializer,
}

impl ClockParamsDeserializer {
    /// Creates a new `ClockParamsDeserializer` accepting at most `max_contracts` addresses
    pub const fn new(max_contracts: u64) -> Self {
        Self {
            count_deserializer: U64VarIntDeserializer::new(Included(0), Included(max_contracts)),
            address_deserializer: StringDeserializer::new(
                Included(0),
                Included(MAX_ADDRESS_STRING_LENGTH),
            ),
            gas_deserializer: U64VarIntDeserializer::new(Included(0), Included(u64::MAX)),
        }
    }
}

impl Deserializer<ClockParams> for ClockParamsDeserializer {
    fn deserialize<'a, E: ParseError<&'a [u8]> + ContextError<&'a [u8]>>(
        &self,
        buffer: &'a [u8],
    ) -> IResult<&'a [u8], ClockParams, E> {
        context(
            "Failed ClockParams deserialization",
            tuple((
                context(
                    "Failed contract_addresses deserialization",
                    length_count(
                        |input| self.count_deserializer.deserialize(input),
                        |input| self.address_deserializer.deserialize(input),
                    ),
                ),
                context("Failed contract_gas_limit deserialization", |input| {
                    self.gas_deserializer.deserialize(input)
                }),
            )),
        )
        .map(|(contract_addresses, contract_gas_limit)| ClockParams {
            contract_addresses,
            contract_gas_limit,
        })
        .parse(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_exports::contract_address;
    use assert_matches::assert_matches;
    use clock_serialization::DeserializeError;

    #[test]
    fn test_params_codec() {
        let params = ClockParams {
            contract_addresses: vec![contract_address("A"), contract_address("B")],
            contract_gas_limit: 100_000,
        };
        let mut buffer = Vec::new();
        ClockParamsSerializer::new()
            .serialize(&params, &mut buffer)
            .unwrap();
        let (rest, decoded) = ClockParamsDeserializer::new(10)
            .deserialize::<DeserializeError>(&buffer)
            .unwrap();
        assert!(rest.is_empty());
        assert_eq!(decoded, params);

        // the count bound is enforced when reading back
        ClockParamsDeserializer::new(1)
            .deserialize::<DeserializeError>(&buffer)
            .expect_err("more addresses than allowed must be rejected");
    }

    #[test]
    fn test_params_validate() {
        let a = contract_address("A");
        let ok = ClockParams {
            contract_addresses: vec![a.clone(), contract_address("B")],
            contract_gas_limit: 100_000,
        };
        ok.validate(10, 1_000_000).unwrap();
        assert_matches!(
            ok.validate(1, 1_000_000),
            Err(ClockError::TooManyTargets(2, 1))
        );
        assert_matches!(
            ok.validate(10, 99_999),
            Err(ClockError::InvalidGasLimit(100_000, 99_999))
        );

        let duplicated = ClockParams {
            contract_addresses: vec![a.clone(), a.clone()],
            contract_gas_limit: 0,
        };
        assert_eq!(
            duplicated.validate(10, 10),
            Err(ClockError::DuplicateTarget(a))
        );

        let malformed = ClockParams {
            contract_addresses: vec!["juno1notanaddress".to_string()],
            contract_gas_limit: 0,
        };
        assert_matches!(
            malformed.validate(10, 10),
            Err(ClockError::InvalidAddress(addr, _)) if addr == "juno1notanaddress"
        );

        ClockParams::default().validate(0, 0).unwrap();
    }

    #[test]
    fn test_params_json() {
        let params = ClockParams {
            contract_addresses: vec![contract_address("A")],
            contract_gas_limit: 7,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            format!(
                "{{\"contract_addresses\":[\"{}\"],\"contract_gas_limit\":7}}",
                contract_address("A")
            )
        );
        assert_eq!(serde_json::from_str::<ClockParams>(&json).unwrap(), params);
    }
}
