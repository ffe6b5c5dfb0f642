//! セットメニュー・コンボ表記の検出
//!
//! "Combo Meal 2" や "set-menu-3" のようにフレーズと番号が揃っている場合だけ検出する。

use crate::types::ComboInfo;
use regex::Regex;

/// 検出対象フレーズ（同じ位置で複数一致する場合は先頭が優先）
pub const COMBO_PHRASES: [&str; 13] = [
    "set menu",
    "set meal",
    "combo menu",
    "combo meal",
    "combo",
    "set-menu",
    "set-meal",
    "combo-meal",
    "combo-menu",
    "set - menu",
    "set - meal",
    " combo - meal",
    "combo - menu",
];

/// 商品名からコンボ表記を検出する
pub fn detect_combo(title: &str) -> ComboInfo {
    lazy_static::lazy_static! {
        static ref COMBO_RE: Regex = {
            let phrases = COMBO_PHRASES
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            // フレーズと番号の間は空白と高々1つのハイフン
            Regex::new(&format!(r"({})\s*-?\s*(\d+)", phrases)).unwrap()
        };
    }

    let lower = title.to_lowercase();

    match COMBO_RE.captures(&lower) {
        Some(cap) => ComboInfo::Present {
            phrase: cap[1].to_string(),
            number: cap[2].to_string(),
        },
        None => ComboInfo::Absent,
    }
}
