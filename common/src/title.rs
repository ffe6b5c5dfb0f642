//! 商品名の照合
//!
//! 判定は以下のルールを順に適用し、最初に確定したスコアを採用する。
//!
//! 1. コンボ判定: 両方コンボなら同一フレーズ・同一番号のみ一致、片方だけなら不一致
//! 2. 単位判定: 単位ゲート → 単位一致 → 数量一致 → 残りの名前で比較

use crate::combo::detect_combo;
use crate::normalize::residual_name;
use crate::similarity::{FuzzyRatio, LevenshteinRatio};
use crate::types::{ComboInfo, QuantityUnit};
use crate::units::extract_quantity_unit;
use serde::Serialize;

/// 単位が不明な相手とも比較を許可する比率表記
const UNIVERSAL_RATIO: &str = "1:1";

/// スコアを確定させたルール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// 同一コンボ（全体比較）
    ComboIdentical,
    /// フレーズまたは番号が異なるコンボ
    ComboMismatch,
    /// コンボと非コンボ
    ComboAgainstPlain,
    /// 両方とも単位なし（全体比較）
    NoUnits,
    /// 片方だけ単位あり
    UnitGateClosed,
    /// 単位が異なる
    UnitMismatch,
    /// 単位は同じだが数量が異なる
    QuantityMismatch,
    /// 単位・数量一致（名前部分で比較）
    ResidualName,
    /// 比率表記 1:1 と単位なし（全体比較）
    RatioFallback,
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchRule::ComboIdentical => "combo_identical",
            MatchRule::ComboMismatch => "combo_mismatch",
            MatchRule::ComboAgainstPlain => "combo_against_plain",
            MatchRule::NoUnits => "no_units",
            MatchRule::UnitGateClosed => "unit_gate_closed",
            MatchRule::UnitMismatch => "unit_mismatch",
            MatchRule::QuantityMismatch => "quantity_mismatch",
            MatchRule::ResidualName => "residual_name",
            MatchRule::RatioFallback => "ratio_fallback",
        };
        write!(f, "{}", name)
    }
}

/// 照合結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleMatch {
    pub score: u8,
    pub rule: MatchRule,
}

/// ルールの判定
enum Verdict {
    Decided(TitleMatch),
    Next,
}

type Rule<R> = fn(&TitleMatcher<R>, &str, &str) -> Verdict;

/// 商品名照合器
///
/// 状態を持たないため、1つのインスタンスを全ペアで共有できる。
#[derive(Debug, Clone, Default)]
pub struct TitleMatcher<R = LevenshteinRatio> {
    ratio: R,
}

impl TitleMatcher<LevenshteinRatio> {
    pub fn new() -> Self {
        Self::with_ratio(LevenshteinRatio)
    }
}

impl<R: FuzzyRatio> TitleMatcher<R> {
    pub fn with_ratio(ratio: R) -> Self {
        Self { ratio }
    }

    /// 2つの商品名の類似スコア（0〜100）
    pub fn score(&self, title_a: &str, title_b: &str) -> u8 {
        self.explain(title_a, title_b).score
    }

    /// スコアと確定ルールを返す
    pub fn explain(&self, title_a: &str, title_b: &str) -> TitleMatch {
        let rules: [Rule<R>; 2] = [Self::combo_rule, Self::unit_rule];

        for rule in rules {
            if let Verdict::Decided(result) = rule(self, title_a, title_b) {
                return result;
            }
        }

        self.whole(title_a, title_b, MatchRule::NoUnits)
    }

    fn combo_rule(&self, title_a: &str, title_b: &str) -> Verdict {
        match (detect_combo(title_a), detect_combo(title_b)) {
            (ComboInfo::Absent, ComboInfo::Absent) => Verdict::Next,
            (
                ComboInfo::Present { phrase: phrase_a, number: number_a },
                ComboInfo::Present { phrase: phrase_b, number: number_b },
            ) => {
                if phrase_a.to_lowercase() == phrase_b.to_lowercase() && number_a == number_b {
                    Verdict::Decided(self.whole(title_a, title_b, MatchRule::ComboIdentical))
                } else {
                    Verdict::Decided(zero(MatchRule::ComboMismatch))
                }
            }
            _ => Verdict::Decided(zero(MatchRule::ComboAgainstPlain)),
        }
    }

    fn unit_rule(&self, title_a: &str, title_b: &str) -> Verdict {
        let first = extract_quantity_unit(title_a);
        let second = extract_quantity_unit(title_b);

        let decided = match (&first, &second) {
            (QuantityUnit::Absent, QuantityUnit::Absent) => {
                self.whole(title_a, title_b, MatchRule::NoUnits)
            }
            (
                QuantityUnit::Present { quantity: quantity_a, unit: unit_a },
                QuantityUnit::Present { quantity: quantity_b, unit: unit_b },
            ) => {
                if unit_a.to_lowercase() != unit_b.to_lowercase() {
                    zero(MatchRule::UnitMismatch)
                } else if *quantity_a != 0.0 && *quantity_b != 0.0 {
                    if round2(*quantity_a) == round2(*quantity_b) {
                        self.residual(title_a, title_b)
                    } else {
                        zero(MatchRule::QuantityMismatch)
                    }
                } else {
                    // 数量0は比較対象外（単位一致のみで名前比較へ）
                    self.residual(title_a, title_b)
                }
            }
            _ if is_universal(&first) || is_universal(&second) => {
                self.whole(title_a, title_b, MatchRule::RatioFallback)
            }
            _ => zero(MatchRule::UnitGateClosed),
        };

        Verdict::Decided(decided)
    }

    fn whole(&self, title_a: &str, title_b: &str, rule: MatchRule) -> TitleMatch {
        TitleMatch {
            score: self.ratio.ratio(&title_a.to_lowercase(), &title_b.to_lowercase()),
            rule,
        }
    }

    fn residual(&self, title_a: &str, title_b: &str) -> TitleMatch {
        TitleMatch {
            score: self.ratio.ratio(&residual_name(title_a), &residual_name(title_b)),
            rule: MatchRule::ResidualName,
        }
    }
}

fn zero(rule: MatchRule) -> TitleMatch {
    TitleMatch { score: 0, rule }
}

fn is_universal(quantity_unit: &QuantityUnit) -> bool {
    quantity_unit.unit() == Some(UNIVERSAL_RATIO)
}

/// 小数第2位に丸める（ちょうど半分は偶数側）
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
