//! Operario DB - local metrics warehouse.
//!
//! Every robot run lands in a small `SQLite` database: one `run_log` row
//! per execution, plus batched inserts for whatever tabular output a
//! robot produces. Migrations are embedded and applied on startup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod batch;
pub mod connection;
pub mod error;
pub mod run_log;

pub use batch::insert_batch;
pub use connection::Warehouse;
pub use error::{DatabaseError, Result};
pub use run_log::{insert_run, recent_runs, RunRecord};
