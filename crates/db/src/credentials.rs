use crate::error::{DbError, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// Database credentials read from a `key=value` file.
///
/// All five fields are required; a missing key is a configuration error
/// raised before any connection attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub driver: String,
    pub server: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("driver", &self.driver)
            .field("server", &self.server)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Read credentials from a file of `key=value` lines.
    ///
    /// Whitespace around keys and values is trimmed; blank lines are
    /// skipped. No quoting, one `=` per line.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Io` if the file cannot be read,
    /// `DbError::MalformedCredentials` for a line without `=`, or
    /// `DbError::MissingCredential` when a required key is absent.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let credentials = Self::parse(&contents)?;
        info!(path = %path.as_ref().display(), "read credentials from file");
        Ok(credentials)
    }

    /// Parse credentials from `key=value` text.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut fields: HashMap<&str, &str> = HashMap::new();

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or(DbError::MalformedCredentials { line: index + 1 })?;
            fields.insert(key.trim(), value.trim());
        }

        let take = |key: &'static str| -> Result<String> {
            fields
                .get(key)
                .map(ToString::to_string)
                .ok_or(DbError::MissingCredential { key })
        };

        Ok(Credentials {
            driver: take("driver")?,
            server: take("server")?,
            database: take("database")?,
            username: take("username")?,
            password: take("password")?,
        })
    }

    /// Build the ODBC connection string from the five credential fields.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!(
            "DRIVER={};SERVER={};DATABASE={};UID={};PWD={}",
            self.driver, self.server, self.database, self.username, self.password
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = "driver={ODBC Driver 18 for SQL Server}\n\
                         server=sccm.example.com\n\
                         database=CM_P01\n\
                         username=svc_export\n\
                         password=hunter2\n";

    #[test]
    fn test_parse_valid_file() {
        let credentials = Credentials::parse(VALID).unwrap();
        assert_eq!(credentials.server, "sccm.example.com");
        assert_eq!(credentials.password, "hunter2");
    }

    #[test]
    fn test_parse_trims_whitespace_and_blank_lines() {
        let credentials = Credentials::parse(
            "driver = d \n\n server = s\ndatabase=db\nusername=u\npassword= p \n",
        )
        .unwrap();
        assert_eq!(credentials.driver, "d");
        assert_eq!(credentials.server, "s");
        assert_eq!(credentials.password, "p");
    }

    #[test]
    fn test_missing_password_is_config_error() {
        let contents = "driver=d\nserver=s\ndatabase=db\nusername=u\n";
        assert!(matches!(
            Credentials::parse(contents),
            Err(DbError::MissingCredential { key: "password" })
        ));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let contents = "driver=d\nthis is not a pair\n";
        assert!(matches!(
            Credentials::parse(contents),
            Err(DbError::MalformedCredentials { line: 2 })
        ));
    }

    #[test]
    fn test_connection_string_template() {
        let credentials = Credentials::parse(VALID).unwrap();
        assert_eq!(
            credentials.connection_string(),
            "DRIVER={ODBC Driver 18 for SQL Server};SERVER=sccm.example.com;\
             DATABASE=CM_P01;UID=svc_export;PWD=hunter2"
        );
    }

    #[test]
    fn test_from_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let credentials = Credentials::from_file(file.path()).unwrap();
        assert_eq!(credentials.database, "CM_P01");
    }

    #[test]
    fn test_from_file_missing_file_is_io_error() {
        let result = Credentials::from_file("no-such-credentials.txt");
        assert!(matches!(result, Err(DbError::Io(_))));
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::parse(VALID).unwrap();
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
