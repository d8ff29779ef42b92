// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::ModelsError;
use crate::hash::{Hash, HASH_SIZE_BYTES};
use clock_serialization::{
    DeserializeError, Deserializer, Serializer, U64VarIntDeserializer, U64VarIntSerializer,
};
use std::ops::Bound::Included;
use std::str::FromStr;

const ADDRESS_PREFIX: char = 'A';

/// Size of the decoded address hash, in bytes
pub const ADDRESS_SIZE_BYTES: usize = HASH_SIZE_BYTES;

/// Account address of the chain, either owned by a key or by a smart contract.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Address {
    /// User address, derived from a public key
    User(UserAddress),
    /// Smart contract address
    SC(SCAddress),
}

/// Derived from a public key
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UserAddress(pub Hash);

/// Derived from the context of the contract creation
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SCAddress(pub Hash);

/// Shared behavior of the address variants
pub trait AddressTrait {
    /// Variant prefix, right after `ADDRESS_PREFIX`
    const PREFIX: char;
    /// Version of the inner encoding
    const VERSION: u64;
}

impl AddressTrait for UserAddress {
    const PREFIX: char = 'U';
    const VERSION: u64 = 0;
}

impl AddressTrait for SCAddress {
    const PREFIX: char = 'S';
    const VERSION: u64 = 0;
}

fn encode_versioned(version: u64, hash: &Hash) -> Result<String, std::fmt::Error> {
    let mut bytes: Vec<u8> = Vec::with_capacity(ADDRESS_SIZE_BYTES + 1);
    U64VarIntSerializer::new()
        .serialize(&version, &mut bytes)
        .map_err(|_| std::fmt::Error)?;
    bytes.extend(hash.to_bytes());
    Ok(bs58::encode(bytes).with_check().into_string())
}

fn decode_versioned(expected_version: u64, data: &str) -> Result<Hash, ModelsError> {
    let decoded = bs58::decode(data)
        .with_check(None)
        .into_vec()
        .map_err(|err| ModelsError::AddressParseError(err.to_string()))?;
    let (rest, version) = U64VarIntDeserializer::new(Included(0), Included(u64::MAX))
        .deserialize::<DeserializeError>(&decoded[..])
        .map_err(|_| ModelsError::AddressParseError("invalid version".to_string()))?;
    if version != expected_version {
        return Err(ModelsError::AddressParseError(format!(
            "unsupported version {}",
            version
        )));
    }
    let bytes: &[u8; ADDRESS_SIZE_BYTES] = rest.try_into().map_err(|_| {
        ModelsError::AddressParseError(format!("invalid hash length {}", rest.len()))
    })?;
    Ok(Hash::from_bytes(bytes))
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Address::User(addr) => write!(
                f,
                "{}{}{}",
                ADDRESS_PREFIX,
                UserAddress::PREFIX,
                encode_versioned(UserAddress::VERSION, &addr.0)?
            ),
            Address::SC(addr) => write!(
                f,
                "{}{}{}",
                ADDRESS_PREFIX,
                SCAddress::PREFIX,
                encode_versioned(SCAddress::VERSION, &addr.0)?
            ),
        }
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Address {
    type Err = ModelsError;

    /// ## Example
    /// ```rust
    /// # use clock_models::{Address, Hash};
    /// # use std::str::FromStr;
    /// let address = Address::from_sc_hash(Hash::compute_from(b"clock"));
    /// let ser = address.to_string();
    /// let res_addr = Address::from_str(&ser).unwrap();
    /// assert_eq!(address, res_addr);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some(ADDRESS_PREFIX) => {}
            Some(other) => {
                return Err(ModelsError::WrongPrefix(
                    ADDRESS_PREFIX.to_string(),
                    other.to_string(),
                ))
            }
            None => return Err(ModelsError::AddressParseError("empty address".to_string())),
        }
        match chars.next() {
            Some(UserAddress::PREFIX) => Ok(Address::User(UserAddress(decode_versioned(
                UserAddress::VERSION,
                chars.as_str(),
            )?))),
            Some(SCAddress::PREFIX) => Ok(Address::SC(SCAddress(decode_versioned(
                SCAddress::VERSION,
                chars.as_str(),
            )?))),
            Some(other) => Err(ModelsError::AddressParseError(format!(
                "unknown address kind '{}'",
                other
            ))),
            None => Err(ModelsError::AddressParseError(
                "missing address kind".to_string(),
            )),
        }
    }
}

impl Address {
    /// Builds a smart contract address out of its hash
    pub fn from_sc_hash(hash: Hash) -> Self {
        Address::SC(SCAddress(hash))
    }

    /// Builds a user address out of its hash
    pub fn from_user_hash(hash: Hash) -> Self {
        Address::User(UserAddress(hash))
    }

    /// Inner hash of the address
    pub fn hash(&self) -> &Hash {
        match self {
            Address::User(addr) => &addr.0,
            Address::SC(addr) => &addr.0,
        }
    }

    /// true if the address designates a smart contract
    pub fn is_sc(&self) -> bool {
        matches!(self, Address::SC(_))
    }
}

impl ::serde::Serialize for Address {
    fn serialize<S: ::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&self.to_string())
    }
}

impl<'de> ::serde::Deserialize<'de> for Address {
    fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> Result<Address, D::Error> {
        struct AddressVisitor;

        impl<'de> ::serde::de::Visitor<'de> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A + variant prefix + base58::encode(version + hash)")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: ::serde::de::Error,
            {
                Address::from_str(v).map_err(E::custom)
            }
        }

        d.deserialize_str(AddressVisitor)
    }
}
