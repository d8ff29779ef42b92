//! DEFAULT VALUES USED TO INITIALIZE DIVERS CONFIGURATIONS STRUCTURES
//!
//! These values are the hard-coded values that make sense to never be modified
//! by a user. Generally, they are passed with dependency injection in a `config`
//! parameter for each component, that is convenient for unit tests.

/// Name of the module, used as governance route and log prefix
pub const MODULE_NAME: &str = "clock";
/// Maximum number of contracts called at each block boundary
pub const MAX_CLOCK_CONTRACTS: u64 = 256;
/// Maximum gas given to each contract call at each block boundary
pub const MAX_CLOCK_CONTRACT_GAS_LIMIT: u64 = 1_000_000_000;
/// Upper bound of the length of an address string stored in the params
pub const MAX_ADDRESS_STRING_LENGTH: u64 = 128;
/// Maximum length of a governance proposal title, in bytes
pub const MAX_PROPOSAL_TITLE_LENGTH: usize = 140;
/// Maximum length of a governance proposal description, in bytes
pub const MAX_PROPOSAL_DESCRIPTION_LENGTH: usize = 10_000;
/// Maximum length of a coin denomination
pub const MAX_DENOM_LENGTH: usize = 128;
