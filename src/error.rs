use thiserror::Error;

/// 実行全体を中断するエラー
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力ファイルが見つかりません: {0}")]
    MissingInput(String),

    #[error("必須列がありません: {file} に列 '{column}' が存在しません")]
    MissingColumn { file: String, column: String },

    #[error("CSVエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] product_matcher_common::Error),
}

pub type Result<T> = std::result::Result<T, MatcherError>;

/// 1ペアの採点失敗（そのペアだけスキップして続行）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("必須項目が空です: {column}")]
    MissingField { column: &'static str },

    #[error("価格が不正です: {column}='{value}'")]
    InvalidPrice { column: &'static str, value: String },

    #[error("説明文の比較に失敗: {0}")]
    Description(#[from] product_matcher_common::Error),
}
