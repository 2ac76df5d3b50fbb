//! Two-sheet workbook emission for projected roster tables.

use std::path::{Path, PathBuf};

use rosterline_core::{DetailRow, ExportTables, SpreadsheetSink};
use rosterline_domain::{MonthToken, Result, RosterError};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use crate::errors::InfraError;

/// Matrix sheet tab name.
const MATRIX_SHEET: &str = "排班表";
/// Detail sheet tab name.
const DETAIL_SHEET: &str = "明細";

const DETAIL_HEADERS: [&str; 10] = [
    "日期",
    "星期",
    "是否假日",
    "員工",
    "班別代碼",
    "班別名稱",
    "起",
    "迄",
    "備註",
    "員工特殊需求",
];

/// Writes `schedule-{month}.xlsx` workbooks into a fixed directory.
#[derive(Debug, Clone)]
pub struct XlsxSink {
    output_dir: PathBuf,
}

impl XlsxSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    fn output_path(&self, month: MonthToken) -> PathBuf {
        self.output_dir.join(format!("schedule-{month}.xlsx"))
    }
}

impl SpreadsheetSink for XlsxSink {
    fn emit(&self, month: MonthToken, tables: &ExportTables) -> Result<PathBuf> {
        let path = self.output_path(month);
        write_workbook(&path, tables)?;
        info!(path = %path.display(), rows = tables.details.len(), "workbook written");
        Ok(path)
    }
}

fn write_workbook(path: &Path, tables: &ExportTables) -> std::result::Result<(), RosterError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let matrix = workbook.add_worksheet();
    matrix.set_name(MATRIX_SHEET).map_err(xlsx_err)?;
    write_matrix(matrix, tables, &header_format).map_err(xlsx_err)?;

    let detail = workbook.add_worksheet();
    detail.set_name(DETAIL_SHEET).map_err(xlsx_err)?;
    write_details(detail, tables, &header_format).map_err(xlsx_err)?;

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

fn write_matrix(
    sheet: &mut Worksheet,
    tables: &ExportTables,
    header_format: &Format,
) -> std::result::Result<(), rust_xlsxwriter::XlsxError> {
    // Two header rows: dates, then weekday labels with the holiday marker.
    sheet.write_with_format(0, 0, "員工", header_format)?;
    for (col, day) in tables.matrix.header_days.iter().enumerate() {
        sheet.write_with_format(0, col as u16 + 1, day, header_format)?;
    }
    for (col, label) in tables.matrix.header_labels.iter().enumerate() {
        sheet.write_with_format(1, col as u16 + 1, label, header_format)?;
    }
    for (row, (name, cells)) in tables.matrix.rows.iter().enumerate() {
        let row = row as u32 + 2;
        sheet.write(row, 0, name)?;
        for (col, cell) in cells.iter().enumerate() {
            if !cell.is_empty() {
                sheet.write(row, col as u16 + 1, cell)?;
            }
        }
    }
    sheet.set_column_width(0, 16.0)?;
    Ok(())
}

fn write_details(
    sheet: &mut Worksheet,
    tables: &ExportTables,
    header_format: &Format,
) -> std::result::Result<(), rust_xlsxwriter::XlsxError> {
    for (col, header) in DETAIL_HEADERS.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, header_format)?;
    }
    for (row, detail) in tables.details.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in detail_cells(detail).into_iter().enumerate() {
            sheet.write(row, col as u16, cell)?;
        }
    }
    Ok(())
}

/// One detail row in sheet column order.
fn detail_cells(detail: &DetailRow) -> [String; 10] {
    [
        detail.day.clone(),
        detail.weekday.clone(),
        if detail.holiday { "Y" } else { "N" }.to_string(),
        detail.employee.clone(),
        detail.shift_code.clone(),
        detail.shift_name.clone(),
        detail.start.clone(),
        detail.end.clone(),
        detail.note.clone(),
        detail.special_requirements.clone(),
    ]
}

fn xlsx_err(err: rust_xlsxwriter::XlsxError) -> RosterError {
    InfraError::from(err).into()
}
