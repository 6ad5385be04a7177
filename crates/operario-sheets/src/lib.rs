//! Operario Sheets - spreadsheet input and output.
//!
//! Robots receive their work as spreadsheets and hand results back the
//! same way. This crate writes styled `.xlsx` workbooks (auto column
//! widths, bold headers, borders, centered cells) and reads `.xls` or
//! `.xlsx` back into plain string tables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod reader;
pub mod table;
pub mod writer;

pub use error::{SheetError, SheetResult};
pub use reader::read_sheet;
pub use table::Table;
pub use writer::{create_with_tabs, write_workbook, BorderWeight, TableStyle};
