//! カタログファイルの読み込み
//!
//! 拡張子が .xlsx / .xls / .ods ならスプレッドシート、それ以外はCSVとして読む。
//! どちらも1行目をヘッダーとして扱う。

mod spreadsheet;

use crate::catalog::{ReferenceItem, VendorProduct, REFERENCE_COLUMNS, VENDOR_COLUMNS};
use crate::error::{MatcherError, Result};
use std::path::Path;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "ods"];

/// ヘッダー付きの表
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub source: String,
    pub headers: Vec<String>,
    /// (行番号, セル値)
    pub rows: Vec<(usize, Vec<String>)>,
}

impl Table {
    /// 列名から列番号を取得（前後の空白は無視）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// 指定列を指定順で取り出す。列が欠けていればエラー
    pub fn select(&self, columns: &[&str]) -> Result<Vec<(usize, Vec<String>)>> {
        let indices = columns
            .iter()
            .map(|column| {
                self.column_index(column).ok_or_else(|| MatcherError::MissingColumn {
                    file: self.source.clone(),
                    column: column.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(self
            .rows
            .iter()
            .map(|(line, cells)| {
                let fields = indices
                    .iter()
                    .map(|&i| cells.get(i).cloned().unwrap_or_default())
                    .collect();
                (*line, fields)
            })
            .collect())
    }
}

pub fn load_vendor_catalog(path: &Path) -> Result<Vec<VendorProduct>> {
    let table = load_table(path)?;
    let rows = table.select(&VENDOR_COLUMNS)?;
    Ok(rows
        .into_iter()
        .map(|(line, fields)| VendorProduct::from_fields(line, fields))
        .collect())
}

pub fn load_reference_catalog(path: &Path) -> Result<Vec<ReferenceItem>> {
    let table = load_table(path)?;
    let rows = table.select(&REFERENCE_COLUMNS)?;
    Ok(rows
        .into_iter()
        .map(|(line, fields)| ReferenceItem::from_fields(line, fields))
        .collect())
}

/// ファイルを表として読み込む
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(MatcherError::MissingInput(path.display().to_string()));
    }

    if is_spreadsheet(path) {
        spreadsheet::read_first_sheet(path)
    } else {
        read_csv(path)
    }
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SPREADSHEET_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                let line = record.position().map(|p| p.line() as usize).unwrap_or(idx + 2);
                rows.push((line, record.iter().map(str::to_string).collect()));
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "読み込めない行をスキップ");
            }
        }
    }

    Ok(Table {
        source: path.display().to_string(),
        headers,
        rows,
    })
}
