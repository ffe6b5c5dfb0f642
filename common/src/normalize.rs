//! 商品名から数量・単位・サイズ語を取り除く
//!
//! 単位が一致したペアは残りの名前部分だけで比較する。

use regex::Regex;

/// 数量・単位・サイズ語を除いた商品名を返す
///
/// 数値は単位の有無に関わらず除去する。
pub fn residual_name(title: &str) -> String {
    lazy_static::lazy_static! {
        static ref QUANTITY_RE: Regex = Regex::new(
            r"(\d+(\.\d+)?)\s*(kg|kilogram|gram|ml|milliliter|liter|litre|lbs|pound|inch|oz|ounce|pcs|full|half|small|medium|large)?"
        ).unwrap();
        static ref SIZE_RE: Regex = Regex::new(r"(?i)\b(small|medium|large|full|half)\b").unwrap();
    }

    let lower = title.to_lowercase();
    let without_quantity = QUANTITY_RE.replace_all(&lower, "");
    let cleaned = without_quantity.trim();
    SIZE_RE.replace_all(cleaned, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_quantity_and_unit() {
        assert_eq!(residual_name("Basmati Rice 5kg"), "basmati rice");
        assert_eq!(residual_name("Coca Cola 1.5 liter"), "coca cola");
        assert_eq!(residual_name("12pcs Chicken Nuggets"), "chicken nuggets");
    }

    #[test]
    fn test_strips_bare_numbers() {
        assert_eq!(residual_name("Burger 2"), "burger");
    }

    #[test]
    fn test_strips_size_words() {
        assert_eq!(residual_name("Large Pepperoni Pizza"), "pepperoni pizza");
        assert_eq!(residual_name("Chicken Karahi Half"), "chicken karahi");
    }

    #[test]
    fn test_size_word_inside_other_word_kept() {
        assert_eq!(residual_name("Smallville Fries"), "smallville fries");
    }

    #[test]
    fn test_gram_prefix_leaves_suffix() {
        // "g"単体は除去対象外のため数値だけが消える
        assert_eq!(residual_name("Widget 500g"), "widget g");
    }

    #[test]
    fn test_no_quantity() {
        assert_eq!(residual_name("  Chicken Burger "), "chicken burger");
        assert_eq!(residual_name(""), "");
    }
}
