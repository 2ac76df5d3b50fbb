//! Port interface for spreadsheet emission.

use std::path::PathBuf;

use rosterline_domain::{MonthToken, Result};

use super::ExportTables;

/// Pure sink turning projected tables into a two-sheet spreadsheet file.
///
/// Never consulted for any decision; emission failures surface as errors but
/// mutate no state.
pub trait SpreadsheetSink: Send + Sync {
    /// Write the tables and return the path of the produced file.
    fn emit(&self, month: MonthToken, tables: &ExportTables) -> Result<PathBuf>;
}
