//! In-memory implementation of the clock store.
//!
//! Durable storage is owned by the node; this implementation keeps the state
//! column in a `BTreeMap` and applies batches atomically, which is all the
//! clock module relies on.

mod clock_db;

pub use clock_db::ClockDB;
