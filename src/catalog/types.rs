use serde::Serialize;

/// ベンダーカタログの必須列（この順でレコードを取り出す）
pub const VENDOR_COLUMNS: [&str; 6] = [
    "vendor_code",
    "vendor_name",
    "product_title",
    "product_description",
    "product_variation_id",
    "product_variation_price_local",
];

/// 参照カタログの必須列
pub const REFERENCE_COLUMNS: [&str; 4] = ["vendor_id", "item_name", "description", "price"];

/// 出力ファイルの列（MatchRecord のフィールド順と一致）
pub const OUTPUT_COLUMNS: [&str; 12] = [
    "vendor_code",
    "vendor_name",
    "product_title",
    "product_description",
    "product_variation_id",
    "product_variation_price_local",
    "vendor_id",
    "item_name",
    "description",
    "price",
    "description_score",
    "title_score",
];

/// ベンダーカタログの1行
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorProduct {
    /// 元ファイルの行番号（ヘッダー=1）
    pub line: usize,
    pub vendor_code: String,
    pub vendor_name: String,
    pub product_title: String,
    pub product_description: String,
    pub product_variation_id: String,
    pub product_variation_price_local: String,
}

impl VendorProduct {
    pub fn from_fields(line: usize, fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        Self {
            line,
            vendor_code: next(),
            vendor_name: next(),
            product_title: next(),
            product_description: next(),
            product_variation_id: next(),
            product_variation_price_local: next(),
        }
    }
}

/// 参照カタログの1行
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceItem {
    pub line: usize,
    pub vendor_id: String,
    pub item_name: String,
    pub description: String,
    pub price: String,
}

impl ReferenceItem {
    pub fn from_fields(line: usize, fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        Self {
            line,
            vendor_id: next(),
            item_name: next(),
            description: next(),
            price: next(),
        }
    }
}

/// 出力1行（フィールド名がそのまま列名になる）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub vendor_code: String,
    pub vendor_name: String,
    pub product_title: String,
    pub product_description: String,
    pub product_variation_id: String,
    pub product_variation_price_local: f64,
    pub vendor_id: String,
    pub item_name: String,
    pub description: String,
    pub price: f64,
    /// 説明文の類似度（閾値未満・比較不能は0）
    pub description_score: f64,
    /// 商品名スコア（0〜100）
    pub title_score: u8,
}

impl MatchRecord {
    /// 両スコアが閾値以上か
    pub fn is_confident(&self, description_threshold: f64, title_threshold: u8) -> bool {
        self.description_score >= description_threshold && self.title_score >= title_threshold
    }
}
