//! Database access for sccmkit
//!
//! Credentials live in a plain `key=value` file and become an ODBC
//! connection string; the [`DataSource`] trait is the seam between the
//! export pipeline and whatever actually answers queries.
//!
//! ```no_run
//! use odbc_api::Environment;
//! use sccmkit_db::{Credentials, DataSource, OdbcDataSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::from_file("credentials.txt")?;
//! let environment = Environment::new()?;
//! let mut source = OdbcDataSource::connect(&environment, &credentials.connection_string())?;
//! let _hosts = source.run_query("SELECT Name0 FROM v_GS_COMPUTER_SYSTEM")?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod odbc;
mod source;

/// Re-export credentials type.
pub use credentials::Credentials;
/// Re-export database error types.
pub use error::{DbError, Result};
/// Re-export the ODBC-backed source.
pub use odbc::OdbcDataSource;
/// Re-export the data source seam.
pub use source::DataSource;
