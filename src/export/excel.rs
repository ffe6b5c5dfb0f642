//! Excel出力
//!
//! 1シート、1行目ヘッダー（太字・固定）。価格とスコアは数値セルで書く。

use super::ensure_parent;
use crate::catalog::{MatchRecord, OUTPUT_COLUMNS};
use crate::error::{MatcherError, Result};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::Path;

const SHEET_NAME: &str = "matches";

/// 列幅（文字数）
const COLUMN_WIDTHS: [f64; 12] = [
    12.0, 20.0, 32.0, 48.0, 14.0, 12.0, 12.0, 32.0, 48.0, 10.0, 12.0, 10.0,
];

pub fn write_excel(records: &[MatchRecord], output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;

    let mut workbook = Workbook::new();
    fill_workbook(&mut workbook, records).map_err(excel_error)?;
    workbook.save(output_path).map_err(excel_error)?;

    tracing::debug!(path = %output_path.display(), rows = records.len(), "Excelを書き出し");
    Ok(())
}

fn excel_error(e: XlsxError) -> MatcherError {
    MatcherError::ExcelGeneration(e.to_string())
}

fn fill_workbook(workbook: &mut Workbook, records: &[MatchRecord]) -> std::result::Result<(), XlsxError> {
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));
    let price_format = Format::new().set_num_format("0.00");
    let score_format = Format::new().set_num_format("0.000");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (name, width)) in OUTPUT_COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *name, &header_format)?;
        worksheet.set_column_width(col, width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        write_texts(
            worksheet,
            row,
            0,
            &[
                record.vendor_code.as_str(),
                record.vendor_name.as_str(),
                record.product_title.as_str(),
                record.product_description.as_str(),
                record.product_variation_id.as_str(),
            ],
        )?;
        worksheet.write_number_with_format(row, 5, record.product_variation_price_local, &price_format)?;
        write_texts(
            worksheet,
            row,
            6,
            &[record.vendor_id.as_str(), record.item_name.as_str(), record.description.as_str()],
        )?;
        worksheet.write_number_with_format(row, 9, record.price, &price_format)?;
        worksheet.write_number_with_format(row, 10, record.description_score, &score_format)?;
        worksheet.write_number(row, 11, record.title_score as f64)?;
    }

    Ok(())
}

fn write_texts(
    worksheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    values: &[&str],
) -> std::result::Result<(), XlsxError> {
    for (offset, value) in values.iter().enumerate() {
        worksheet.write_string(row, first_col + offset as u16, *value)?;
    }
    Ok(())
}
