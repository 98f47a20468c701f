//! Interface of the on-disk key-value store.
//!
//! `massa_db_worker` provides the RocksDB implementation; other crates only
//! depend on the `MassaDBController` trait defined here.

mod constants;
mod controller;
mod db_batch;
mod error;
mod settings;

pub use constants::*;
pub use controller::*;
pub use db_batch::*;
pub use error::*;
pub use settings::*;
