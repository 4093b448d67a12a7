use crate::error::{DbError, Result};
use crate::source::DataSource;
use odbc_api::buffers::TextRowSet;
use odbc_api::{ConnectionOptions, Cursor, Environment, ResultSetMetadata};
use sccmkit_sheet::{CellValue, Sheet};
use tracing::info;

/// Rows fetched per ODBC round trip.
const BATCH_SIZE: usize = 5000;

/// Upper bound on bytes per fetched text cell.
const MAX_TEXT_LEN: usize = 4096;

/// ODBC-backed [`DataSource`].
///
/// Holds one connection, opened once and used for every query in sequence.
/// The connection is released when the value goes out of scope, on success
/// and abort paths alike.
pub struct OdbcDataSource<'env> {
    connection: odbc_api::Connection<'env>,
}

impl<'env> OdbcDataSource<'env> {
    /// Open a connection using a connection string built by
    /// [`crate::Credentials::connection_string`].
    ///
    /// The `Environment` outlives the connection and is constructed once
    /// per process by the caller.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Odbc` if the connection cannot be established.
    pub fn connect(environment: &'env Environment, connection_string: &str) -> Result<Self> {
        let connection = environment
            .connect_with_connection_string(connection_string, ConnectionOptions::default())?;
        info!("connected to the database");
        Ok(Self { connection })
    }
}

impl DataSource for OdbcDataSource<'_> {
    fn run_query(&mut self, query: &str) -> Result<Sheet> {
        let Some(mut cursor) = self.connection.execute(query, ())? else {
            return Err(DbError::NoResultSet);
        };

        let headers: Vec<String> = cursor
            .column_names()?
            .collect::<std::result::Result<_, _>>()?;

        let mut sheet = Sheet::new();
        sheet.row_append(headers)?;

        // Fetch everything as text and re-type with the cell parser; the
        // driver has already rendered values for us.
        let mut buffers = TextRowSet::for_cursor(BATCH_SIZE, &mut cursor, Some(MAX_TEXT_LEN))?;
        let mut row_set_cursor = cursor.bind_buffer(&mut buffers)?;

        while let Some(batch) = row_set_cursor.fetch()? {
            for row_index in 0..batch.num_rows() {
                let row: Vec<CellValue> = (0..batch.num_cols())
                    .map(|col_index| match batch.at(col_index, row_index) {
                        Some(bytes) => CellValue::parse(&String::from_utf8_lossy(bytes)),
                        None => CellValue::Null,
                    })
                    .collect();
                sheet.row_append(row)?;
            }
        }

        sheet.name_columns_by_row(0)?;
        info!(rows = sheet.row_count() - 1, "executed query and fetched data");
        Ok(sheet)
    }
}
