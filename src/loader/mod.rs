//! 賽程資料載入
//!
//! 從Excel活頁簿讀入賽程表：第一列為標題列，其餘為資料列。
//! 欄位順序照原檔保留；缺少備註欄時自動補上。
//! 載入失敗屬致命錯誤，伺服器不會以不完整的資料啟動。

pub mod columns;

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{MatchQueryError, Result};
use crate::table::{CellValue, Row, Table};

/// 載入賽程表。`sheet`未指定時讀第一張工作表。
pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    if !path.exists() {
        return Err(MatchQueryError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(MatchQueryError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| MatchQueryError::MissingHeader(path.display().to_string()))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut source_rows = range.rows();

    let header = source_rows
        .next()
        .ok_or_else(|| MatchQueryError::MissingHeader(path.display().to_string()))?;
    let columns: Vec<String> = header.iter().map(|cell| convert_cell(cell).display()).collect();
    if columns.iter().all(|name| name.trim().is_empty()) {
        return Err(MatchQueryError::MissingHeader(path.display().to_string()));
    }

    // 資料列補齊到標題列寬度，過長的尾端截掉
    let width = columns.len();
    let rows: Vec<Row> = source_rows
        .map(|cells| {
            let mut converted: Vec<CellValue> = cells.iter().map(convert_cell).collect();
            converted.resize(width, CellValue::Empty);
            Row::new(converted)
        })
        .collect();

    let mut table = Table::new(columns, rows);
    table.ensure_notes_column();
    Ok(table)
}

/// Excel儲存格轉成內部值。日期時間轉成顯示文字，錯誤儲存格視為空白。
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(t) => {
                // 序號小於1代表純時間值，整點午夜代表純日期
                let text = if dt.as_f64() < 1.0 {
                    t.format("%H:%M").to_string()
                } else if t.time() == chrono::NaiveTime::MIN {
                    t.format("%Y-%m-%d").to_string()
                } else {
                    t.format("%Y-%m-%d %H:%M").to_string()
                };
                CellValue::Text(text)
            }
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
