use crate::error::Result;
use sccmkit_sheet::Book;
use std::path::Path;
use tracing::{debug, info};

/// Run the filter stage.
///
/// Reads the whole input workbook (aborting before any output exists if it
/// is unreadable), keeps per sheet only the rows whose marker columns all
/// read `"Y"`, drops the markers, and writes the surviving originals to a
/// like-named sheet in the output workbook. Sheet order follows the input
/// file; column widths are recomputed the same way the exporter computes
/// them.
pub fn filter_workbook<P, Q>(input: P, output: Q) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let book = Book::from_xlsx(input.as_ref())?;

    let mut filtered = Book::new();
    for (name, sheet) in book.sheets() {
        let mut sheet = sheet.clone();
        sheet.filter_marked_rows()?;
        debug!(
            sheet = %name,
            rows = sheet.row_count().saturating_sub(1),
            "sheet filtered"
        );
        filtered.add_sheet(name, sheet)?;
    }

    filtered.save_as_xlsx(output.as_ref())?;
    info!(path = %output.as_ref().display(), "filtered data saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sccmkit_sheet::{CellValue, Sheet};
    use tempfile::tempdir;

    fn write_input(path: &Path, sheets: Vec<(&str, Sheet)>) {
        let mut book = Book::new();
        for (name, sheet) in sheets {
            book.add_sheet(name, sheet).unwrap();
        }
        book.save_as_xlsx(path).unwrap();
    }

    #[test]
    fn hosts_sheet_keeps_only_marked_rows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sccm_data.xlsx");
        let output = dir.path().join("filtered_sccm_data.xlsx");

        write_input(
            &input,
            vec![(
                "Hosts",
                Sheet::from_data(vec![
                    vec!["Name", "Name_Y"],
                    vec!["A", "Y"],
                    vec!["B", "N"],
                ]),
            )],
        );

        filter_workbook(&input, &output).unwrap();

        let book = Book::from_xlsx(&output).unwrap();
        let sheet = book.get_sheet("Hosts").unwrap();
        assert_eq!(sheet.col_count(), 1);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.get(0, 0).unwrap(), &CellValue::String("Name".to_string()));
        assert_eq!(sheet.get(1, 0).unwrap(), &CellValue::String("A".to_string()));
    }

    #[test]
    fn sheet_order_is_preserved() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.xlsx");
        let output = dir.path().join("out.xlsx");

        let table = || Sheet::from_data(vec![vec!["A", "A_Y"], vec!["1", "Y"]]);
        write_input(
            &input,
            vec![("Zeta", table()), ("Alpha", table()), ("Mid", table())],
        );

        filter_workbook(&input, &output).unwrap();

        let book = Book::from_xlsx(&output).unwrap();
        assert_eq!(book.sheet_names(), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn unreadable_input_aborts_before_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.xlsx");
        let output = dir.path().join("out.xlsx");

        assert!(filter_workbook(&input, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn corrupt_input_aborts_before_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("garbage.xlsx");
        let output = dir.path().join("out.xlsx");
        std::fs::write(&input, b"this is not a workbook").unwrap();

        assert!(filter_workbook(&input, &output).is_err());
        assert!(!output.exists());
    }
}
