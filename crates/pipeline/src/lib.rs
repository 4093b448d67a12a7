//! Export and filter stages for sccmkit
//!
//! Two sequential stages with no shared process state:
//!
//! - [`export_inventory`] pulls one result table per named query from a
//!   [`sccmkit_db::DataSource`], appends `"Y"` inclusion markers, and
//!   writes everything to one workbook.
//! - [`filter_workbook`] reads such a workbook back after manual curation
//!   and keeps only the rows whose markers all still read `"Y"`.

mod error;
mod exporter;
mod filter;

/// Re-export pipeline error types.
pub use error::{PipelineError, Result};
/// Re-export the export stage.
pub use exporter::export_inventory;
/// Re-export the filter stage.
pub use filter::filter_workbook;
