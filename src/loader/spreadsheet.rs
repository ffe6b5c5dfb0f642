//! スプレッドシート（先頭シート）の読み込み

use super::Table;
use crate::error::{MatcherError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

pub fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| MatcherError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MatcherError::Spreadsheet(format!("{}: シートがありません", path.display())))?
        .map_err(|e| MatcherError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_to_string).collect())
        .unwrap_or_default();

    let rows: Vec<(usize, Vec<String>)> = rows
        .enumerate()
        .filter(|(_, cells)| cells.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|(idx, cells)| (idx + 2, cells.iter().map(cell_to_string).collect()))
        .collect();

    Ok(Table {
        source: path.display().to_string(),
        headers,
        rows,
    })
}

/// セル値を文字列化（整数値の浮動小数は "12.0" ではなく "12"）
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        other => other.to_string(),
    }
}
