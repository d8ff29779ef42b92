mod constants;
mod controller;
mod db_batch;
mod error;

pub use constants::*;
pub use controller::*;
pub use db_batch::*;
pub use error::*;
