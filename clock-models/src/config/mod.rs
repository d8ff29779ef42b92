//! Protocol constants and the settings loader shared by binaries.

mod constants;
mod settings;

pub use constants::*;
pub use settings::build_clock_settings;
