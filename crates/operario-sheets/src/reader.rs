//! Reading xls/xlsx workbooks back into tables.

use crate::error::{SheetError, SheetResult};
use crate::table::Table;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Read one sheet into a [`Table`].
///
/// With `sheet` unset, the first sheet is read. The first row becomes the
/// headers; every cell is rendered to a string, empty cells to `""`.
/// Both `.xls` and `.xlsx` files are handled.
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> SheetResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|n| n == name) {
                return Err(SheetError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(SheetError::EmptyWorkbook)?,
    };

    let range = workbook.worksheet_range(&name)?;
    let mut rows = range.rows().map(|row| {
        row.iter()
            .map(|cell| match cell {
                Data::Empty => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<String>>()
    });

    let headers = rows.next().unwrap_or_default();
    let table = Table {
        headers,
        rows: rows.collect(),
    };
    tracing::debug!(
        path = %path.display(),
        sheet = %name,
        rows = table.rows.len(),
        "sheet read"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{write_workbook, TableStyle};
    use tempfile::TempDir;

    fn sample() -> Table {
        Table::new(vec!["Nota", "Valor"])
            .with_row(vec!["123", "45.90"])
            .with_row(vec!["124", "12.00"])
    }

    #[test]
    fn test_read_back_written_sheet() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("dados.xlsx");
        write_workbook(
            &path,
            &[("Notas".to_string(), sample())],
            &TableStyle::default(),
        )
        .expect("write workbook");

        let table = read_sheet(&path, None).expect("read first sheet");
        assert_eq!(table.headers, vec!["Nota", "Valor"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["123", "45.90"]);
    }

    #[test]
    fn test_read_named_sheet() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("dados.xlsx");
        write_workbook(
            &path,
            &[
                ("Entrada".to_string(), sample()),
                ("Saida".to_string(), Table::new(vec!["Status"])),
            ],
            &TableStyle::default(),
        )
        .expect("write workbook");

        let table = read_sheet(&path, Some("Saida")).expect("read named sheet");
        assert_eq!(table.headers, vec!["Status"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("dados.xlsx");
        write_workbook(
            &path,
            &[("Notas".to_string(), sample())],
            &TableStyle::default(),
        )
        .expect("write workbook");

        let err = read_sheet(&path, Some("Inexistente")).expect_err("missing sheet");
        assert!(matches!(err, SheetError::SheetNotFound(_)));
    }
}
