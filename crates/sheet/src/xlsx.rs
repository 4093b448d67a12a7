use crate::book::Book;
use crate::cell::CellValue;
use crate::error::Result;
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Padding added on top of the widest cell when sizing a column.
pub const COLUMN_WIDTH_PADDING: usize = 2;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as day serials since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

impl Sheet {
    /// Column widths for display: the widest cell per column, header
    /// included, plus [`COLUMN_WIDTH_PADDING`].
    ///
    /// Rows shorter than the header contribute nothing for their missing
    /// cells, as does `Null` (it has no string value).
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0usize; self.col_count()];
        for row in self.rows() {
            for (col, width) in widths.iter_mut().enumerate() {
                if let Some(cell) = row.get(col) {
                    *width = usize::max(*width, cell.display_width());
                }
            }
        }

        for width in &mut widths {
            *width += COLUMN_WIDTH_PADDING;
        }
        widths
    }

    /// Write sheet data to a worksheet, then size its columns
    fn write_to_worksheet(&self, worksheet: &mut Worksheet) -> Result<()> {
        worksheet.set_name(self.name())?;

        for (row_idx, row) in self.data().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let row_num = row_idx as u32;
                let col_num = col_idx as u16;

                match cell {
                    CellValue::Null => {} // Leave empty
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(row_num, col_num, *b)?;
                    }
                    CellValue::Int(i) => {
                        // Excel stores all numbers as f64; integers beyond
                        // 2^53 may lose precision
                        worksheet.write_number(row_num, col_num, *i as f64)?;
                    }
                    CellValue::Float(f) => {
                        worksheet.write_number(row_num, col_num, *f)?;
                    }
                    CellValue::String(s) => {
                        worksheet.write_string(row_num, col_num, s)?;
                    }
                }
            }
        }

        for (col_idx, width) in self.column_widths().into_iter().enumerate() {
            worksheet.set_column_width(col_idx as u16, width as f64)?;
        }

        Ok(())
    }
}

impl Book {
    /// Load a book from an Excel file (all sheets, in file order)
    ///
    /// Row 0 of each sheet is treated as its header row and used to name
    /// the sheet's columns.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or read; nothing is
    /// written anywhere on failure.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())?;

        let sheet_names: Vec<String> = workbook
            .sheet_names()
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut book = Book::new();

        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;

            let mut data: Vec<Vec<CellValue>> = Vec::new();
            for row in range.rows() {
                let row_data: Vec<CellValue> = row.iter().map(data_to_cell_value).collect();
                data.push(row_data);
            }

            let mut sheet = Sheet::with_name(&sheet_name);
            *sheet.data_mut() = data;

            if sheet.row_count() > 0 {
                // Ignore duplicate column name errors when loading
                if let Err(err) = sheet.name_columns_by_row(0) {
                    debug!(sheet = %sheet_name, %err, "columns left unnamed");
                }
            }

            book.add_sheet(&sheet_name, sheet)?;
        }

        Ok(book)
    }

    /// Save the book to an Excel file
    ///
    /// One worksheet per sheet, in insertion order, with columns sized to
    /// their widest cell plus padding. The workbook only exists on disk
    /// once the whole write session has completed.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();

        for (_, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            sheet.write_to_worksheet(worksheet)?;
        }

        workbook.save(path.as_ref())?;
        Ok(())
    }
}
