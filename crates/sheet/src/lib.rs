//! Sheet/Book module for sccmkit
//!
//! Tabular model for the inventory export/filter round trip: header-first
//! sheets, insertion-ordered books, xlsx read/write with auto-sized
//! columns, and the `_Y` marker-column convention.
//!
//! # Examples
//!
//! ## Creating a sheet from data
//!
//! ```
//! use sccmkit_sheet::{CellValue, Sheet};
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Name", "Cores"],
//!     vec!["host-01", "8"],
//!     vec!["host-02", "16"],
//! ]);
//!
//! assert_eq!(sheet.row_count(), 3);
//! assert_eq!(sheet.col_count(), 2);
//! ```
//!
//! ## Marker round trip
//!
//! ```
//! use sccmkit_sheet::Sheet;
//!
//! let mut sheet = Sheet::from_data(vec![
//!     vec!["Name"],
//!     vec!["host-01"],
//!     vec!["host-02"],
//! ]);
//!
//! // Export side: one marker column per original column
//! sheet.append_marker_columns().unwrap();
//! assert_eq!(sheet.row(0).unwrap()[1].as_str(), "Name_Y");
//!
//! // Curation: exclude host-02
//! sheet.set(2, 1, "N").unwrap();
//!
//! // Filter side: drop unmarked rows, then the markers
//! sheet.filter_marked_rows().unwrap();
//! assert_eq!(sheet.row_count(), 2);
//! assert_eq!(sheet.col_count(), 1);
//! ```
//!
//! ## Working with books
//!
//! ```no_run
//! use sccmkit_sheet::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Hardware Inventory", Sheet::new()).unwrap();
//! book.add_sheet("Software Inventory", Sheet::new()).unwrap();
//! book.save_as_xlsx("sccm_data.xlsx").unwrap();
//! ```

mod book;
mod cell;
mod error;
mod marker;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export marker constants.
pub use marker::{MARKER_SUFFIX, MARKER_VALUE};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export column width padding.
pub use xlsx::COLUMN_WIDTH_PADDING;
