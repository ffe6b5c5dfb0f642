//! Product Matcher Common Library
//!
//! 商品名・説明文の照合ロジック（I/Oを持たない純粋関数のみ）

pub mod types;
pub mod error;
pub mod units;
pub mod combo;
pub mod normalize;
pub mod similarity;
pub mod title;
pub mod description;

pub use types::{ComboInfo, DescriptionMatch, QuantityUnit};
pub use error::{Error, Result};
pub use units::{extract_quantity_unit, normalize_unit};
pub use combo::detect_combo;
pub use normalize::residual_name;
pub use similarity::{FuzzyRatio, LevenshteinRatio};
pub use title::{MatchRule, TitleMatch, TitleMatcher};
pub use description::{DescriptionComparator, DEFAULT_DESCRIPTION_THRESHOLD};
