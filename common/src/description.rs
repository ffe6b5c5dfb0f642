//! 商品説明文の類似判定（TF-IDF + コサイン類似度）
//!
//! 語彙は比較する2文書だけから作る（全体の語彙は使わない）。

use crate::error::{Error, Result};
use crate::types::DescriptionMatch;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// 一致とみなすコサイン類似度のデフォルト閾値
pub const DEFAULT_DESCRIPTION_THRESHOLD: f64 = 0.7;

/// 比較に必要な最小文字数（正規化後）
const MIN_DESCRIPTION_CHARS: usize = 3;

/// 説明文比較器
#[derive(Debug, Clone, Copy)]
pub struct DescriptionComparator {
    threshold: f64,
}

impl Default for DescriptionComparator {
    fn default() -> Self {
        Self::new(DEFAULT_DESCRIPTION_THRESHOLD)
    }
}

impl DescriptionComparator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// 2つの説明文を比較する
    ///
    /// どちらかが正規化後3文字未満なら比較せず `(false, 0)` を返す。
    pub fn compare(&self, description_a: &str, description_b: &str) -> Result<DescriptionMatch> {
        let doc_a = preprocess_text(description_a);
        let doc_b = preprocess_text(description_b);

        if doc_a.chars().count() < MIN_DESCRIPTION_CHARS
            || doc_b.chars().count() < MIN_DESCRIPTION_CHARS
        {
            return Ok(DescriptionMatch::none());
        }

        let similarity = tfidf_cosine(&doc_a, &doc_b)?;

        Ok(DescriptionMatch {
            is_match: similarity > self.threshold,
            similarity,
        })
    }
}

/// 小文字化し、英数字と空白以外を除去する（空白のみの入力は空文字）
pub fn preprocess_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// 2文字以上の単語に分割する
fn tokenize(text: &str) -> Vec<&str> {
    lazy_static::lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(r"\b\w\w+\b").unwrap();
    }

    TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect()
}

fn term_counts<'a>(tokens: &[&'a str]) -> BTreeMap<&'a str, f64> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(*token).or_insert(0.0) += 1.0;
    }
    counts
}

/// 2文書でTF-IDFを学習し、コサイン類似度を返す
///
/// idf = ln((1 + n) / (1 + df)) + 1、各ベクトルはL2正規化。
pub fn tfidf_cosine(doc_a: &str, doc_b: &str) -> Result<f64> {
    let tokens_a = tokenize(doc_a);
    let tokens_b = tokenize(doc_b);

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    let vocabulary: BTreeSet<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();
    if vocabulary.is_empty() {
        return Err(Error::EmptyVocabulary);
    }

    let n_docs = 2.0_f64;
    let weights = |counts: &BTreeMap<&str, f64>| -> Vec<f64> {
        vocabulary
            .iter()
            .map(|term| {
                let df = [&counts_a, &counts_b]
                    .iter()
                    .filter(|c| c.contains_key(term))
                    .count() as f64;
                let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
                counts.get(term).copied().unwrap_or(0.0) * idf
            })
            .collect()
    };

    let vec_a = l2_normalize(weights(&counts_a));
    let vec_b = l2_normalize(weights(&counts_b));

    let dot: f64 = vec_a.iter().zip(&vec_b).map(|(a, b)| a * b).sum();
    Ok(dot.clamp(0.0, 1.0))
}

fn l2_normalize(vector: Vec<f64>) -> Vec<f64> {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 {
        return vector;
    }
    vector.into_iter().map(|v| v / norm).collect()
}
