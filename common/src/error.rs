//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// TF-IDFの語彙が空（2文字以上のトークンが両方の説明文に存在しない）
    #[error("Empty vocabulary: descriptions contain no tokens of two or more characters")]
    EmptyVocabulary,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
