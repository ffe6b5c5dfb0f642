//! 照合パイプライン
//!
//! 結合 → ペアごとの採点（並列） → 閾値フィルタ。
//! 1ペアの失敗は記録してスキップし、他のペアの処理は続ける。

use crate::catalog::{join_on_vendor, CandidatePair, MatchRecord, ReferenceItem, VendorProduct};
use crate::config::{Config, DEFAULT_TITLE_THRESHOLD};
use crate::error::RowError;
use indicatif::{ProgressBar, ProgressStyle};
use product_matcher_common::{
    DescriptionComparator, FuzzyRatio, LevenshteinRatio, TitleMatcher, DEFAULT_DESCRIPTION_THRESHOLD,
};
use rayon::prelude::*;

/// スキップしたペア
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    pub vendor_line: usize,
    pub reference_line: usize,
    pub error: RowError,
}

/// 実行結果
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// 結合で得られた候補ペア数
    pub candidate_pairs: usize,
    /// 採点できたペア数
    pub scored: usize,
    /// 閾値を満たしたペア
    pub matches: Vec<MatchRecord>,
    pub failures: Vec<RowFailure>,
}

/// 採点エンジン
///
/// 照合器・比較器は状態を持たないので、全ペアで共有する。
#[derive(Debug, Clone)]
pub struct MatchEngine<R = LevenshteinRatio> {
    titles: TitleMatcher<R>,
    descriptions: DescriptionComparator,
    title_threshold: u8,
    show_progress: bool,
}

impl Default for MatchEngine<LevenshteinRatio> {
    fn default() -> Self {
        Self::new(DEFAULT_DESCRIPTION_THRESHOLD, DEFAULT_TITLE_THRESHOLD)
    }
}

impl MatchEngine<LevenshteinRatio> {
    pub fn new(description_threshold: f64, title_threshold: u8) -> Self {
        Self::with_matcher(TitleMatcher::new(), description_threshold, title_threshold)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.description_threshold, config.title_threshold)
    }
}

impl<R: FuzzyRatio> MatchEngine<R> {
    pub fn with_matcher(titles: TitleMatcher<R>, description_threshold: f64, title_threshold: u8) -> Self {
        Self {
            titles,
            descriptions: DescriptionComparator::new(description_threshold),
            title_threshold,
            show_progress: false,
        }
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn description_threshold(&self) -> f64 {
        self.descriptions.threshold()
    }

    pub fn title_threshold(&self) -> u8 {
        self.title_threshold
    }

    /// 結合・採点・フィルタを実行
    pub fn run(&self, vendors: &[VendorProduct], references: &[ReferenceItem]) -> PipelineReport {
        let pairs = join_on_vendor(vendors, references);
        tracing::info!(
            vendors = vendors.len(),
            references = references.len(),
            pairs = pairs.len(),
            "ベンダーキーで結合"
        );
        self.score_candidates(&pairs)
    }

    /// 候補ペアを採点し、閾値を満たすものだけ残す
    pub fn score_candidates(&self, pairs: &[CandidatePair<'_>]) -> PipelineReport {
        let progress = progress_bar(pairs.len(), self.show_progress);

        let outcomes: Vec<Result<MatchRecord, RowError>> = pairs
            .par_iter()
            .map(|pair| {
                let outcome = self.score_pair(pair);
                progress.inc(1);
                outcome
            })
            .collect();

        progress.finish_and_clear();

        let mut report = PipelineReport {
            candidate_pairs: pairs.len(),
            ..Default::default()
        };

        for (pair, outcome) in pairs.iter().zip(outcomes) {
            match outcome {
                Ok(record) => {
                    report.scored += 1;
                    if record.is_confident(self.description_threshold(), self.title_threshold) {
                        report.matches.push(record);
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        vendor_line = pair.vendor.line,
                        reference_line = pair.reference.line,
                        error = %error,
                        "ペアの採点に失敗したためスキップ"
                    );
                    report.failures.push(RowFailure {
                        vendor_line: pair.vendor.line,
                        reference_line: pair.reference.line,
                        error,
                    });
                }
            }
        }

        report
    }

    /// 1ペアを採点する
    pub fn score_pair(&self, pair: &CandidatePair<'_>) -> Result<MatchRecord, RowError> {
        let vendor = pair.vendor;
        let reference = pair.reference;

        require("product_title", &vendor.product_title)?;
        require("item_name", &reference.item_name)?;

        let vendor_price = parse_price(
            "product_variation_price_local",
            &vendor.product_variation_price_local,
        )?;
        let price = parse_price("price", &reference.price)?;

        let description = self
            .descriptions
            .compare(&vendor.product_description, &reference.description)?;
        let title = self.titles.explain(&vendor.product_title, &reference.item_name);

        tracing::trace!(
            vendor_title = %vendor.product_title,
            reference_title = %reference.item_name,
            title_score = title.score,
            rule = %title.rule,
            similarity = description.similarity,
            "採点"
        );

        Ok(MatchRecord {
            vendor_code: vendor.vendor_code.clone(),
            vendor_name: vendor.vendor_name.clone(),
            product_title: vendor.product_title.clone(),
            product_description: vendor.product_description.clone(),
            product_variation_id: vendor.product_variation_id.clone(),
            product_variation_price_local: vendor_price,
            vendor_id: reference.vendor_id.clone(),
            item_name: reference.item_name.clone(),
            description: reference.description.clone(),
            price,
            description_score: description.score(),
            title_score: title.score,
        })
    }
}

fn require(column: &'static str, value: &str) -> Result<(), RowError> {
    if value.trim().is_empty() {
        Err(RowError::MissingField { column })
    } else {
        Ok(())
    }
}

fn parse_price(column: &'static str, value: &str) -> Result<f64, RowError> {
    let trimmed = value.trim();
    require(column, trimmed)?;

    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(RowError::InvalidPrice {
            column,
            value: value.to_string(),
        }),
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        progress.set_style(style.progress_chars("#>-"));
    }
    progress
}
