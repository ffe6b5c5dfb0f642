//! ベンダーキー（vendor_code ↔ vendor_id）の完全一致結合

use super::types::{ReferenceItem, VendorProduct};
use std::collections::HashMap;

/// 採点対象のペア
#[derive(Debug, Clone, Copy)]
pub struct CandidatePair<'a> {
    pub vendor: &'a VendorProduct,
    pub reference: &'a ReferenceItem,
}

/// vendor_code と vendor_id が一致する全ペアを返す
///
/// 順序はベンダーカタログ順、同一ベンダー内は参照カタログ順。
/// キーは前後の空白を除いて比較し、空のキーは結合しない。
pub fn join_on_vendor<'a>(
    vendors: &'a [VendorProduct],
    references: &'a [ReferenceItem],
) -> Vec<CandidatePair<'a>> {
    let mut by_vendor: HashMap<&str, Vec<&ReferenceItem>> = HashMap::new();
    for item in references {
        let key = item.vendor_id.trim();
        if !key.is_empty() {
            by_vendor.entry(key).or_default().push(item);
        }
    }

    vendors
        .iter()
        .filter_map(|vendor| {
            by_vendor
                .get(vendor.vendor_code.trim())
                .map(|items| (vendor, items))
        })
        .flat_map(|(vendor, items)| {
            items
                .iter()
                .copied()
                .map(move |reference| CandidatePair { vendor, reference })
        })
        .collect()
}
