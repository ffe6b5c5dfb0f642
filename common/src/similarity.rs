//! 文字列類似度（0〜100のファジー比率）

/// ファジー比率を返す類似度エンジン
///
/// 実装は対称で、同一文字列に100、共通部分のない文字列に0を返すこと。
pub trait FuzzyRatio: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> u8;
}

/// 正規化レーベンシュタイン距離による比率
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl FuzzyRatio for LevenshteinRatio {
    fn ratio(&self, a: &str, b: &str) -> u8 {
        let similarity = strsim::normalized_levenshtein(a, b);
        (similarity * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
