//! ベンダー商品カタログと参照カタログの照合
//!
//! 読み込み → ベンダーキーで結合 → 商品名・説明文の採点 → 閾値フィルタ → 出力。
//! 商品名・説明文の採点ロジックは `product_matcher_common` にある。

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod pipeline;
