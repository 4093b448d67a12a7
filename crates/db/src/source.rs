use crate::error::Result;
use sccmkit_sheet::Sheet;

/// An external collaborator that turns query text into a tabular result.
///
/// Implementations return a header-first [`Sheet`]: row 0 holds the column
/// names reported by the source, the remaining rows hold data. The schema
/// behind the queries is the source's business, not this crate's.
pub trait DataSource {
    /// Execute one query and return its result table.
    fn run_query(&mut self, query: &str) -> Result<Sheet>;
}
