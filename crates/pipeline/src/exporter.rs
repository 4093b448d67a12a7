use crate::error::Result;
use indexmap::IndexMap;
use sccmkit_db::DataSource;
use sccmkit_sheet::Book;
use std::path::Path;
use tracing::info;

/// Run the export stage.
///
/// For each entry of `queries` (in insertion order): execute the query,
/// append one `"Y"` marker column per original column, and add the result
/// as a sheet named after the map key. The whole book is then written to
/// `output` with auto-sized columns.
///
/// Any credentials, query, or write failure aborts the run; a partial
/// output file is not guaranteed consistent on failure.
pub fn export_inventory<P: AsRef<Path>>(
    source: &mut impl DataSource,
    queries: &IndexMap<String, String>,
    output: P,
) -> Result<()> {
    let mut book = Book::new();

    for (sheet_name, query) in queries {
        let mut sheet = source.run_query(query)?;
        sheet.append_marker_columns()?;
        book.add_sheet(sheet_name, sheet)?;
    }

    book.save_as_xlsx(output.as_ref())?;
    info!(path = %output.as_ref().display(), "data saved");
    Ok(())
}
