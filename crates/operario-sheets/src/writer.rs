//! Styled xlsx writing.

use crate::error::{SheetError, SheetResult};
use crate::table::Table;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

/// Border weight applied to every written cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderWeight {
    /// Thin border.
    Thin,
    /// Medium border.
    Medium,
    /// Thick border.
    Thick,
}

impl BorderWeight {
    fn as_border(self) -> FormatBorder {
        match self {
            Self::Thin => FormatBorder::Thin,
            Self::Medium => FormatBorder::Medium,
            Self::Thick => FormatBorder::Thick,
        }
    }
}

/// Visual style for a written sheet.
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Lower clamp for auto column width.
    pub min_col_width: f64,
    /// Upper clamp for auto column width.
    pub max_col_width: f64,
    /// Bold header row.
    pub header_bold: bool,
    /// Header background as `0xRRGGBB`, when set.
    pub header_bg: Option<u32>,
    /// Center cell text horizontally and vertically.
    pub center_cells: bool,
    /// Cell borders, when set.
    pub border: Option<BorderWeight>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            min_col_width: 10.0,
            max_col_width: 50.0,
            header_bold: true,
            header_bg: None,
            center_cells: true,
            border: Some(BorderWeight::Thin),
        }
    }
}

impl TableStyle {
    fn header_format(&self) -> Format {
        let mut format = self.cell_format();
        if self.header_bold {
            format = format.set_bold();
        }
        if let Some(rgb) = self.header_bg {
            format = format.set_background_color(Color::RGB(rgb));
        }
        format
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
    }

    fn cell_format(&self) -> Format {
        let mut format = Format::new();
        if self.center_cells {
            format = format
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter);
        }
        if let Some(weight) = self.border {
            format = format.set_border(weight.as_border());
        }
        format
    }
}

/// Write one workbook with one styled sheet per `(name, table)` pair.
///
/// Headers land in row 1, data rows below; column widths follow the
/// longest cell in each column, clamped to the style's limits.
pub fn write_workbook(
    path: &Path,
    sheets: &[(String, Table)],
    style: &TableStyle,
) -> SheetResult<()> {
    let mut workbook = Workbook::new();

    for (name, table) in sheets {
        validate(table)?;
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;

        let header_format = style.header_format();
        let cell_format = style.cell_format();

        for (idx, header) in table.headers.iter().enumerate() {
            let col = idx as u16;
            worksheet.write_string_with_format(0, col, header, &header_format)?;
            worksheet.set_column_width(col, column_width(table, idx, style))?;
        }
        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                worksheet.write_string_with_format(
                    (row_idx + 1) as u32,
                    col_idx as u16,
                    cell,
                    &cell_format,
                )?;
            }
        }
    }

    workbook.save(path)?;
    tracing::debug!(path = %path.display(), sheets = sheets.len(), "workbook written");
    Ok(())
}

/// Create an empty workbook that only carries named tabs and header rows.
pub fn create_with_tabs(path: &Path, tabs: &[(String, Vec<String>)]) -> SheetResult<()> {
    let sheets: Vec<(String, Table)> = tabs
        .iter()
        .map(|(name, columns)| (name.clone(), Table::new(columns.clone())))
        .collect();
    write_workbook(path, &sheets, &TableStyle::default())
}

fn validate(table: &Table) -> SheetResult<()> {
    let columns = table.column_count();
    for (row, cells) in table.rows.iter().enumerate() {
        if cells.len() > columns {
            return Err(SheetError::RowTooWide {
                row,
                cells: cells.len(),
                columns,
            });
        }
    }
    Ok(())
}

/// Longest content in the column, padded by two characters and clamped.
fn column_width(table: &Table, column: usize, style: &TableStyle) -> f64 {
    let mut longest = table.headers.get(column).map_or(0, String::len);
    for row in &table.rows {
        if let Some(cell) = row.get(column) {
            longest = longest.max(cell.chars().count());
        }
    }
    ((longest + 2) as f64).clamp(style.min_col_width, style.max_col_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_column_width_clamping() {
        let style = TableStyle::default();
        let narrow = Table::new(vec!["Id"]);
        assert!((column_width(&narrow, 0, &style) - 10.0).abs() < f64::EPSILON);

        let wide = Table::new(vec!["Descrição"]).with_row(vec!["x".repeat(100)]);
        assert!((column_width(&wide, 0, &style) - 50.0).abs() < f64::EPSILON);

        let mid = Table::new(vec!["Coluna"]).with_row(vec!["vinte caracteres aqui"]);
        assert!((column_width(&mid, 0, &style) - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_row_wider_than_headers_rejected() {
        let table = Table::new(vec!["A"]).with_row(vec!["1", "2"]);
        let err = validate(&table).expect_err("row too wide");
        assert!(matches!(
            err,
            SheetError::RowTooWide {
                row: 0,
                cells: 2,
                columns: 1
            }
        ));
    }

    #[test]
    fn test_write_workbook_creates_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("saida.xlsx");
        let table = Table::new(vec!["Nota", "Valor"]).with_row(vec!["123", "45.90"]);

        write_workbook(
            &path,
            &[("Notas".to_string(), table)],
            &TableStyle::default(),
        )
        .expect("write workbook");
        assert!(path.is_file());
    }

    #[test]
    fn test_create_with_tabs() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("modelo.xlsx");
        create_with_tabs(
            &path,
            &[
                ("Entrada".to_string(), vec!["CNPJ".to_string(), "Nota".to_string()]),
                ("Saida".to_string(), vec!["Status".to_string()]),
            ],
        )
        .expect("create workbook");
        assert!(path.is_file());
    }
}
