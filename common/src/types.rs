//! 照合処理で共有される値型
//!
//! いずれも1ペアの採点中だけ存在する派生値で、入力文字列を変更しない。

use serde::{Deserialize, Serialize};

/// 数量と単位（両方あるか、両方ないか）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QuantityUnit {
    Present { quantity: f64, unit: String },
    #[default]
    Absent,
}

impl QuantityUnit {
    pub fn new(quantity: f64, unit: impl Into<String>) -> Self {
        QuantityUnit::Present {
            quantity,
            unit: unit.into(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, QuantityUnit::Absent)
    }

    pub fn unit(&self) -> Option<&str> {
        match self {
            QuantityUnit::Present { unit, .. } => Some(unit),
            QuantityUnit::Absent => None,
        }
    }

    pub fn quantity(&self) -> Option<f64> {
        match self {
            QuantityUnit::Present { quantity, .. } => Some(*quantity),
            QuantityUnit::Absent => None,
        }
    }
}

impl std::fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityUnit::Present { quantity, unit } => write!(f, "{} {}", quantity, unit),
            QuantityUnit::Absent => write!(f, "-"),
        }
    }
}

/// セットメニュー・コンボ表記（フレーズと番号の組）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ComboInfo {
    Present { phrase: String, number: String },
    #[default]
    Absent,
}

impl ComboInfo {
    pub fn is_present(&self) -> bool {
        matches!(self, ComboInfo::Present { .. })
    }
}

impl std::fmt::Display for ComboInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComboInfo::Present { phrase, number } => write!(f, "{} #{}", phrase, number),
            ComboInfo::Absent => write!(f, "-"),
        }
    }
}

/// 説明文の類似判定結果（コサイン類似度スケール）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionMatch {
    pub is_match: bool,
    pub similarity: f64,
}

impl DescriptionMatch {
    /// 比較不能（短すぎる説明文など）
    pub fn none() -> Self {
        Self::default()
    }

    /// 出力用スコア（閾値未満は0）
    pub fn score(&self) -> f64 {
        if self.is_match {
            self.similarity
        } else {
            0.0
        }
    }
}
