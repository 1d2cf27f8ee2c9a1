//! Spreadsheet export
//!
//! Renders a result set into an in-memory `.xlsx` workbook: one header row,
//! then one row per record.

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::db::{ItemListing, Room};

/// MIME type for `.xlsx` downloads
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Export error
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("too many rows for one sheet: {0}")]
    TooManyRows(usize),
}

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

/// A record that can be written as one spreadsheet row
pub trait SheetRow {
    fn cells(&self) -> Vec<Cell>;
}

/// Sheet title, header row and download name for one export
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub file_name: &'static str,
}

pub const ROOMS_LAYOUT: SheetLayout = SheetLayout {
    title: "Кабинеты",
    headers: &["ID", "Название", "Номер", "Этаж", "Учитель", "Вместимость"],
    file_name: "rooms.xlsx",
};

pub const ITEMS_LAYOUT: SheetLayout = SheetLayout {
    title: "Инвентарь",
    headers: &[
        "ID",
        "Название",
        "Инв. номер",
        "Статус",
        "Кабинет",
        "Номер кабинета",
    ],
    file_name: "items.xlsx",
};

impl SheetRow for Room {
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.id.into(),
            self.name.as_str().into(),
            self.number.as_str().into(),
            self.floor.as_str().into(),
            self.teacher.as_str().into(),
            self.capacity.into(),
        ]
    }
}

impl SheetRow for ItemListing {
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.id.into(),
            self.name.as_str().into(),
            self.inventory_number.as_str().into(),
            self.status.as_str().into(),
            self.room_name.as_str().into(),
            self.room_number.as_str().into(),
        ]
    }
}

/// Excel's row limit, header included.
const MAX_ROWS: usize = 1_048_576;

/// Build the workbook and return its bytes.
pub fn render<R: SheetRow>(layout: &SheetLayout, rows: &[R]) -> Result<Vec<u8>, ExportError> {
    if rows.len() >= MAX_ROWS {
        return Err(ExportError::TooManyRows(rows.len()));
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(layout.title)?;

    for (col, header) in layout.headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, record) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, cell) in record.cells().into_iter().enumerate() {
            match cell {
                Cell::Text(s) => sheet.write_string(row, col as u16, s)?,
                Cell::Number(n) => sheet.write_number(row, col as u16, n)?,
            };
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(
        sheet = layout.title,
        rows = rows.len(),
        bytes = bytes.len(),
        "Rendered workbook"
    );
    Ok(bytes)
}

pub fn rooms_workbook(rooms: &[Room]) -> Result<Vec<u8>, ExportError> {
    render(&ROOMS_LAYOUT, rooms)
}

pub fn items_workbook(items: &[ItemListing]) -> Result<Vec<u8>, ExportError> {
    render(&ITEMS_LAYOUT, items)
}
