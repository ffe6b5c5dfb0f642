//! 商品名からの数量・単位抽出
//!
//! 個数表記（pcs / pieces / piece）は商品名全体から探し、見つかればそれを最優先とする。
//! それ以外の単位は末尾に書かれることが多いため、単語数の後半部分だけを対象にする。
//!
//! ## 抽出順序
//! 1. 個数表記（全体）
//! 2. 数値+単位（後半）
//! 3. サイズ語（後半）
//! 4. 末尾の比率表記 `a:b`（後半）
//! 5. 数値+単位（全体、後半で何も見つからない場合のみ）

use crate::types::QuantityUnit;
use regex::Regex;

/// 個数表記キーワード（判定順）
const PIECE_KEYWORDS: [&str; 3] = ["pcs", "pieces", "piece"];

/// サイズ語（判定順）
pub const SIZE_WORDS: [&str; 5] = ["small", "medium", "large", "full", "half"];

const GRAMS_PER_KG: f64 = 1000.0;
const KG_PER_POUND: f64 = 0.453592;
const ML_PER_LITER: f64 = 1000.0;

/// 単位表記 → (正規化後の単位, 換算係数)
const UNIT_TABLE: &[(&str, &str, f64)] = &[
    ("kg", "kg", 1.0),
    ("kilogram", "kg", 1.0),
    ("kilograms", "kg", 1.0),
    ("g", "kg", 1.0 / GRAMS_PER_KG),
    ("gram", "kg", 1.0 / GRAMS_PER_KG),
    ("grams", "kg", 1.0 / GRAMS_PER_KG),
    ("lbs", "kg", KG_PER_POUND),
    ("pound", "kg", KG_PER_POUND),
    ("pounds", "kg", KG_PER_POUND),
    ("ml", "L", 1.0 / ML_PER_LITER),
    ("milliliter", "L", 1.0 / ML_PER_LITER),
    ("milliliters", "L", 1.0 / ML_PER_LITER),
    ("l", "L", 1.0),
    ("liter", "L", 1.0),
    ("liters", "L", 1.0),
    ("litre", "L", 1.0),
    ("litres", "L", 1.0),
    ("inch", "inch", 1.0),
    ("inches", "inch", 1.0),
    ("pcs", "pcs", 1.0),
    ("pieces", "pieces", 1.0),
    ("oz", "oz", 1.0),
    ("ounce", "ounce", 1.0),
    ("ounces", "ounce", 1.0),
];

/// 商品名から数量と単位を抽出する
///
/// # Examples
/// ```
/// use product_matcher_common::{extract_quantity_unit, QuantityUnit};
///
/// let water = extract_quantity_unit("Mineral Water 250ml");
/// assert_eq!(water.unit(), Some("L"));
/// assert!((water.quantity().unwrap() - 0.25).abs() < 1e-9);
///
/// assert_eq!(extract_quantity_unit("Chicken Burger"), QuantityUnit::Absent);
/// ```
pub fn extract_quantity_unit(title: &str) -> QuantityUnit {
    let lower = title.to_lowercase();

    if let Some(pieces) = find_pieces(&lower) {
        return pieces;
    }

    let tail = tail_half(&lower);

    find_measure(&tail)
        .or_else(|| find_size_word(&tail))
        .or_else(|| find_ratio(&tail))
        .or_else(|| find_measure(&lower))
        .unwrap_or(QuantityUnit::Absent)
}

/// 個数表記（例: "12 pcs"）を文字列全体から探す
pub fn find_pieces(text: &str) -> Option<QuantityUnit> {
    lazy_static::lazy_static! {
        static ref PIECE_RES: Vec<(&'static str, Regex)> = PIECE_KEYWORDS
            .iter()
            .map(|kw| (*kw, Regex::new(&format!(r"(\d*\.?\d+)\s*{}", kw)).unwrap()))
            .collect();
    }

    let lower = text.to_lowercase();

    PIECE_RES
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .find_map(|(keyword, re)| {
            let cap = re.captures(&lower)?;
            let quantity = cap[1].parse::<f64>().ok()?;
            Some(QuantityUnit::new(quantity, *keyword))
        })
}

/// 単語列の後半を取り出す
///
/// 分割位置は単語数の半分（切り捨て）。奇数の場合は後半が1語多くなる。
pub fn tail_half(text: &str) -> String {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let halfway = parts.len() / 2;
    parts[halfway..].join(" ")
}

/// 単位表記を正規化する（例: "grams" → ("kg", 0.001)）
///
/// 正規化済みの単位を再度渡すと同じ単位を返す。
pub fn normalize_unit(unit: &str) -> Option<(&'static str, f64)> {
    let lower = unit.to_lowercase();
    UNIT_TABLE
        .iter()
        .find(|(alias, _, _)| *alias == lower)
        .map(|(_, canonical, factor)| (*canonical, *factor))
}

/// 数値+単位（例: "500g", "2 lbs"）を探して正規化する
fn find_measure(text: &str) -> Option<QuantityUnit> {
    lazy_static::lazy_static! {
        // 単位の後ろは語境界を要求しない（"1ltr" は 1 L、"500gm" は 500 g）。
        // 短い表記に吸われないよう長い表記を先に並べる
        static ref MEASURE_RE: Regex = Regex::new(
            r"(?i)(\d*\.?\d+)\s*(kilograms?|kg|grams?|g|milliliters?|ml|liters?|litres?|lbs|pounds?|l|inch(?:es)?|pieces|pcs|ounces?|oz)"
        ).unwrap();
    }

    let cap = MEASURE_RE.captures(text)?;
    let value: f64 = cap[1].parse().ok()?;
    let (unit, factor) = normalize_unit(&cap[2])?;
    Some(QuantityUnit::new(value * factor, unit))
}

/// サイズ語（1人前のサイズ）を探す
fn find_size_word(text: &str) -> Option<QuantityUnit> {
    SIZE_WORDS
        .iter()
        .find(|word| text.contains(*word))
        .map(|word| QuantityUnit::new(1.0, *word))
}

/// 末尾の比率表記（例: "1:1"）を探す
fn find_ratio(text: &str) -> Option<QuantityUnit> {
    lazy_static::lazy_static! {
        static ref RATIO_RE: Regex = Regex::new(r"(\d*\.?\d+:\d*\.?\d+)\s*$").unwrap();
    }

    RATIO_RE
        .captures(text)
        .map(|cap| QuantityUnit::new(1.0, &cap[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_measure(title: &str, quantity: f64, unit: &str) {
        match extract_quantity_unit(title) {
            QuantityUnit::Present { quantity: q, unit: u } => {
                assert!((q - quantity).abs() < 1e-6, "{}: quantity {} != {}", title, q, quantity);
                assert_eq!(u, unit, "{}", title);
            }
            QuantityUnit::Absent => panic!("{}: 単位が抽出されない", title),
        }
    }

    #[test]
    fn test_grams_to_kilograms() {
        assert_measure("500g widget", 0.5, "kg");
        assert_measure("Basmati Rice 500 gram", 0.5, "kg");
    }

    #[test]
    fn test_pounds_to_kilograms() {
        assert_measure("2 lbs widget", 0.907184, "kg");
        assert_measure("Beef Mince 2 pounds", 0.907184, "kg");
    }

    #[test]
    fn test_milliliters_to_liters() {
        assert_measure("250ml bottle", 0.25, "L");
        assert_measure("Coca Cola 330 ml", 0.33, "L");
    }

    #[test]
    fn test_liter_spellings_share_one_unit() {
        assert_measure("Orange Juice 1.5 liter", 1.5, "L");
        assert_measure("Orange Juice 2 litres", 2.0, "L");
        assert_measure("Mineral Water 1L", 1.0, "L");
        assert_measure("Orange Juice 1000ml", 1.0, "L");
    }

    #[test]
    fn test_kilogram_spelling() {
        assert_measure("Basmati Rice 2 kilograms", 2.0, "kg");
        assert_measure("Basmati Rice 1 kilogram", 1.0, "kg");
    }

    #[test]
    fn test_pass_through_units() {
        assert_measure("Chicken Biryani 1kg", 1.0, "kg");
        assert_measure("Pizza Margherita 12 inch", 12.0, "inch");
        assert_measure("Cheddar Slices 8 oz", 8.0, "oz");
    }

    #[test]
    fn test_pieces_short_circuit() {
        // 後半の250gより個数表記が優先される
        assert_measure("Box of 12 pcs candy 250g", 12.0, "pcs");
        assert_measure("6 pieces Chicken Wings", 6.0, "pieces");
        assert_measure("Samosa 1 piece", 1.0, "piece");
    }

    #[test]
    fn test_size_word() {
        assert_measure("Pizza Margherita Large", 1.0, "large");
        assert_measure("Chicken Karahi Half", 1.0, "half");
    }

    #[test]
    fn test_size_word_beats_leading_measure() {
        // 後半にサイズ語があれば前半の数値+単位は見ない
        assert_measure("500g Large Fries", 1.0, "large");
    }

    #[test]
    fn test_ratio() {
        assert_measure("Mint Lassi 1:1", 1.0, "1:1");
        assert_measure("Tea Milk Mix 2:1", 1.0, "2:1");
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_quantity_unit("Chicken Burger"), QuantityUnit::Absent);
        assert_eq!(extract_quantity_unit(""), QuantityUnit::Absent);
        assert_eq!(extract_quantity_unit("Combo 2 Deal"), QuantityUnit::Absent);
    }

    #[test]
    fn test_unit_abbreviation_followed_by_letters() {
        // "ltr" は l、"gm" は g として読む
        assert_measure("Pepsi 1ltr", 1.0, "L");
        assert_measure("Basmati Rice 500gm", 0.5, "kg");
        assert_measure("Basmati Rice 1000gm", 1.0, "kg");
    }

    #[test]
    fn test_long_unit_names_win_over_prefixes() {
        assert_measure("Beef Mince 2lbs", 0.907184, "kg");
        assert_measure("Flour 250grams", 0.25, "kg");
        assert_measure("Milk 500milliliters", 0.5, "L");
    }

    #[test]
    fn test_tail_half() {
        assert_eq!(tail_half("a b c d"), "c d");
        assert_eq!(tail_half("a b c"), "b c");
        assert_eq!(tail_half("single"), "single");
        assert_eq!(tail_half(""), "");
    }

    #[test]
    fn test_find_pieces_none() {
        assert_eq!(find_pieces("pieces of cake"), None);
        assert_eq!(find_pieces("rice 5kg"), None);
    }

    #[test]
    fn test_normalize_unit_idempotent() {
        for (alias, _, _) in UNIT_TABLE {
            let (canonical, _) = normalize_unit(alias).unwrap();
            let (again, factor) = normalize_unit(canonical).unwrap();
            assert!(again.eq_ignore_ascii_case(canonical), "{} -> {} -> {}", alias, canonical, again);
            assert_eq!(factor, 1.0, "{}", canonical);
        }
        assert_eq!(normalize_unit("kg"), Some(("kg", 1.0)));
        assert_eq!(normalize_unit("bushel"), None);
    }
}
