//! Operario Report - end-of-run status reporting.
//!
//! Every robot run ends the same way: log the outcome, record it in the
//! local warehouse, and (in production) post the status payload to the
//! orchestration webhook. Failures additionally go to a failure webhook
//! with the machine's identity attached.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod reporter;
pub mod status;

pub use error::{ReportError, ReportResult};
pub use reporter::{DevicePayload, ExecutionReporter, FailurePayload};
pub use status::{ExecutionCounts, ExecutionStatus};
