//! Per-row inclusion markers.
//!
//! The exporter appends one marker column per original column, directly
//! after it, holding the constant `"Y"`. A person curating the exported
//! workbook changes individual cells away from `"Y"` to exclude rows; the
//! filter stage then keeps only rows whose marker cells all still read
//! `"Y"`, and drops the marker columns.

use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;

/// Suffix that turns an original column name into its marker column name.
pub const MARKER_SUFFIX: &str = "_Y";

/// Value a marker cell must hold, exactly, for its row to survive filtering.
pub const MARKER_VALUE: &str = "Y";

impl Sheet {
    /// Append one marker column per original column.
    ///
    /// Each marker is inserted directly after its original, so a sheet with
    /// `N` columns ends up with `2N` columns alternating original/marker.
    /// Every data row gets `"Y"` in every marker cell. Row 0 must be the
    /// header row.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::MissingHeaderRow` for an empty sheet, or
    /// `SheetError::DuplicateColumnName` if a marker name collides with an
    /// existing column.
    pub fn append_marker_columns(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(SheetError::MissingHeaderRow);
        }

        let originals: Vec<String> = self
            .row(0)?
            .iter()
            .map(CellValue::as_str)
            .collect();
        let data_rows = self.row_count() - 1;

        // Insert right-to-left so earlier indices stay valid
        for (index, name) in originals.iter().enumerate().rev() {
            let mut column = Vec::with_capacity(data_rows + 1);
            column.push(CellValue::String(format!("{name}{MARKER_SUFFIX}")));
            column.extend(
                std::iter::repeat(CellValue::String(MARKER_VALUE.to_string())).take(data_rows),
            );
            self.column_insert(index + 1, column)?;
        }

        self.name_columns_by_row(0)?;
        self.verify_marker_layout()?;
        Ok(())
    }

    /// Check the export-time marker invariant: `2N` columns where each odd
    /// index holds the marker for the original directly before it.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::MarkerMismatch` if the layout does not hold.
    pub fn verify_marker_layout(&self) -> Result<()> {
        let header = self.row(0)?;
        let mismatch = || SheetError::MarkerMismatch {
            sheet: self.name().to_string(),
            originals: header.len().div_ceil(2),
            markers: header.len() / 2,
        };

        if header.len() % 2 != 0 {
            return Err(mismatch());
        }

        for pair in header.chunks_exact(2) {
            let expected = format!("{}{MARKER_SUFFIX}", pair[0].as_str());
            if pair[1].as_str() != expected {
                return Err(mismatch());
            }
        }

        Ok(())
    }

    /// Indices of marker columns: those whose header name ends with `_Y`.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::MissingHeaderRow` for an empty sheet.
    pub fn marker_columns(&self) -> Result<Vec<usize>> {
        let header = self.row(0)?;
        Ok(header
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.as_str().ends_with(MARKER_SUFFIX))
            .map(|(index, _)| index)
            .collect())
    }

    /// Keep only rows whose marker cells are all exactly `"Y"`, then drop
    /// the marker columns.
    ///
    /// Filtering is applied one marker column at a time; each pass narrows
    /// the surviving set further, so survival is the conjunction over all
    /// marker columns. A missing marker cell (short row) does not survive.
    /// An empty sheet passes through unchanged.
    pub fn filter_marked_rows(&mut self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        let markers = self.marker_columns()?;
        for &col in &markers {
            self.filter_rows(|index, row| {
                if index == 0 {
                    return true;
                }
                matches!(row.get(col), Some(CellValue::String(s)) if s == MARKER_VALUE)
            });
        }

        self.remove_columns_at(&markers)?;
        self.name_columns_by_row(0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory_sheet() -> Sheet {
        Sheet::from_data(vec![
            vec!["Name", "Cores"],
            vec!["host-01", "8"],
            vec!["host-02", "16"],
            vec!["host-03", "4"],
        ])
    }

    // ===== Export side =====

    #[test]
    fn append_doubles_columns_alternating() {
        let mut sheet = inventory_sheet();
        sheet.append_marker_columns().unwrap();

        assert_eq!(sheet.col_count(), 4);
        let header: Vec<String> = sheet.row(0).unwrap().iter().map(CellValue::as_str).collect();
        assert_eq!(header, vec!["Name", "Name_Y", "Cores", "Cores_Y"]);
    }

    #[test]
    fn append_fills_every_marker_cell_with_y() {
        let mut sheet = inventory_sheet();
        sheet.append_marker_columns().unwrap();

        for row in sheet.rows().skip(1) {
            assert_eq!(row[1], CellValue::String("Y".to_string()));
            assert_eq!(row[3], CellValue::String("Y".to_string()));
        }
    }

    #[test]
    fn append_on_header_only_sheet() {
        let mut sheet = Sheet::from_data(vec![vec!["Name"]]);
        sheet.append_marker_columns().unwrap();

        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.col_count(), 2);
    }

    #[test]
    fn append_on_empty_sheet_fails() {
        let mut sheet = Sheet::new();
        assert!(matches!(
            sheet.append_marker_columns(),
            Err(SheetError::MissingHeaderRow)
        ));
    }

    #[test]
    fn verify_layout_rejects_trailing_markers() {
        // Markers bunched at the end instead of interleaved
        let sheet = Sheet::from_data(vec![vec!["Name", "Cores", "Name_Y", "Cores_Y"]]);
        assert!(matches!(
            sheet.verify_marker_layout(),
            Err(SheetError::MarkerMismatch { .. })
        ));
    }

    #[test]
    fn verify_layout_rejects_odd_column_count() {
        let sheet = Sheet::from_data(vec![vec!["Name", "Name_Y", "Cores"]]);
        assert!(matches!(
            sheet.verify_marker_layout(),
            Err(SheetError::MarkerMismatch { .. })
        ));
    }

    // ===== Filter side =====

    #[test]
    fn single_marker_drops_unmarked_rows() {
        let mut sheet = Sheet::from_data(vec![
            vec!["Name", "Name_Y"],
            vec!["A", "Y"],
            vec!["B", "N"],
        ]);
        sheet.filter_marked_rows().unwrap();

        assert_eq!(sheet.col_count(), 1);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.get(0, 0).unwrap(), &CellValue::String("Name".to_string()));
        assert_eq!(sheet.get(1, 0).unwrap(), &CellValue::String("A".to_string()));
    }

    #[test]
    fn untouched_markers_keep_every_row() {
        let mut sheet = inventory_sheet();
        sheet.append_marker_columns().unwrap();
        sheet.filter_marked_rows().unwrap();

        assert_eq!(sheet.row_count(), 4);
        assert_eq!(sheet.col_count(), 2);
    }

    #[test]
    fn filters_are_conjunctive_not_short_circuit_or() {
        // Row 1 passes the first marker but fails the second; a row
        // surviving one marker must not survive overall.
        let mut sheet = Sheet::from_data(vec![
            vec!["Name", "Name_Y", "Cores", "Cores_Y"],
            vec!["host-01", "Y", "8", "N"],
            vec!["host-02", "N", "16", "Y"],
            vec!["host-03", "Y", "4", "Y"],
        ]);
        sheet.filter_marked_rows().unwrap();

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(
            sheet.get(1, 0).unwrap(),
            &CellValue::String("host-03".to_string())
        );
    }

    #[test]
    fn marker_order_does_not_change_result() {
        let build = |swap: bool| {
            let mut header = vec!["A", "A_Y", "B", "B_Y"];
            let mut row = vec!["1", "Y", "2", "N"];
            if swap {
                header.swap(1, 3);
                row.swap(1, 3);
            }
            let mut sheet = Sheet::from_data(vec![header, row]);
            sheet.filter_marked_rows().unwrap();
            sheet.row_count()
        };

        assert_eq!(build(false), build(true));
    }

    #[test]
    fn non_string_marker_values_drop_the_row() {
        let mut sheet = Sheet::from_data(vec![
            vec![
                CellValue::String("Name".to_string()),
                CellValue::String("Name_Y".to_string()),
            ],
            vec![
                CellValue::String("host-01".to_string()),
                CellValue::Bool(true),
            ],
            vec![CellValue::String("host-02".to_string()), CellValue::Int(1)],
            vec![CellValue::String("host-03".to_string()), CellValue::Null],
        ]);
        sheet.filter_marked_rows().unwrap();

        assert_eq!(sheet.row_count(), 1);
    }

    #[test]
    fn sheet_without_markers_is_untouched() {
        let mut sheet = inventory_sheet();
        sheet.filter_marked_rows().unwrap();

        assert_eq!(sheet.row_count(), 4);
        assert_eq!(sheet.col_count(), 2);
    }

    #[test]
    fn empty_sheet_passes_through() {
        let mut sheet = Sheet::new();
        sheet.filter_marked_rows().unwrap();
        assert!(sheet.is_empty());
    }

    // ===== Round trip =====

    #[test]
    fn unedited_round_trip_is_identity() {
        let original = inventory_sheet();
        let mut exported = original.clone();
        exported.append_marker_columns().unwrap();
        exported.filter_marked_rows().unwrap();

        assert_eq!(exported.data(), original.data());
    }

    #[test]
    fn edited_marker_excludes_row() {
        let mut sheet = inventory_sheet();
        sheet.append_marker_columns().unwrap();

        // Curate host-02 out via its Name_Y marker
        sheet.set(2, 1, "N").unwrap();
        sheet.filter_marked_rows().unwrap();

        assert_eq!(sheet.row_count(), 3);
        let names = sheet.column_by_name("Name").unwrap();
        assert!(!names.contains(&CellValue::String("host-02".to_string())));
    }
}
