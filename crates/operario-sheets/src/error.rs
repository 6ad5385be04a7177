//! Error types for spreadsheet operations.

use thiserror::Error;

/// Errors from writing or reading spreadsheets.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Workbook writing failed.
    #[error("xlsx write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Workbook reading failed.
    #[error("spreadsheet read error: {0}")]
    Read(#[from] calamine::Error),

    /// The requested sheet does not exist in the workbook.
    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    /// The workbook has no sheets at all.
    #[error("workbook has no sheets")]
    EmptyWorkbook,

    /// A data row is wider than the header row.
    #[error("row {row} has {cells} cells but the table has {columns} columns")]
    RowTooWide {
        /// Zero-based data row index.
        row: usize,
        /// Cells in the offending row.
        cells: usize,
        /// Header column count.
        columns: usize,
    },
}

/// Result type for spreadsheet operations.
pub type SheetResult<T> = std::result::Result<T, SheetError>;
