// Commons
pub const STATE_CF: &str = "state";

// Errors
pub const CRUD_ERROR: &str = "critical: database crud operation failed";

// Clock
pub const CLOCK_PARAMS_KEY: &[u8] = b"clock/params";
pub const CLOCK_PARAMS_DESER_ERROR: &str = "critical: clock params deserialization failed";
