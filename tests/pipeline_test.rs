//! 読み込みから出力までの統合テスト

use product_matcher::catalog::{join_on_vendor, OUTPUT_COLUMNS};
use product_matcher::cli::ExportFormat;
use product_matcher::error::RowError;
use product_matcher::export::export_results;
use product_matcher::loader;
use product_matcher::pipeline::MatchEngine;
use std::path::Path;
use tempfile::tempdir;

const VENDOR_CSV: &str = "\
vendor_code,vendor_name,product_title,product_description,product_variation_id,product_variation_price_local
V1,Burger House,Zinger Burger 2 pcs,Crispy spicy chicken fillet burger with mayo,101,9.5
V2,Meal Point,Combo Meal 1 Burger,Beef burger with fries and a soft drink,201,7
V3,Lassi Corner,Mint Lassi 500ml,Sweet yogurt drink with fresh mint,301,3
V9,Nobody,Plain Naan,Soft tandoor bread,901,1
";

const REFERENCE_CSV: &str = "\
vendor_id,item_name,description,price
V1,zinger burger 2 pcs,crispy spicy chicken fillet burger with mayo!,9.0
V2,Combo Meal 2 Burger,Beef burger with fries and a soft drink,7.5
V3,Mint Lassi 500 ml,Sweet yogurt drink with fresh mint,abc
";

fn write_catalogs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let vendor_path = dir.join("comp1.csv");
    let reference_path = dir.join("comp21.csv");
    std::fs::write(&vendor_path, VENDOR_CSV).unwrap();
    std::fs::write(&reference_path, REFERENCE_CSV).unwrap();
    (vendor_path, reference_path)
}

#[test]
fn test_end_to_end_filters_and_skips() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (vendor_path, reference_path) = write_catalogs(dir.path());

    let vendors = loader::load_vendor_catalog(&vendor_path).unwrap();
    let references = loader::load_reference_catalog(&reference_path).unwrap();

    let engine = MatchEngine::default();
    let report = engine.run(&vendors, &references);

    // V9 は参照側に無いので候補にならない
    assert_eq!(report.candidate_pairs, 3);
    // V3 は価格が不正なのでスキップ
    assert_eq!(report.scored, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].vendor_line, 4);
    assert!(matches!(
        report.failures[0].error,
        RowError::InvalidPrice { column: "price", .. }
    ));

    // コンボ番号違いの V2 は落ち、V1 だけ残る
    assert_eq!(report.matches.len(), 1);
    let record = &report.matches[0];
    assert_eq!(record.vendor_code, "V1");
    assert_eq!(record.item_name, "zinger burger 2 pcs");
    assert_eq!(record.title_score, 100);
    assert!(record.description_score >= 0.7);
    assert_eq!(record.product_variation_price_local, 9.5);
    assert_eq!(record.price, 9.0);

    let output = dir.path().join("price_comparison_result_filtered.csv");
    let written = export_results(&report.matches, &ExportFormat::Csv, &output).unwrap();
    assert_eq!(written, vec![output.clone()]);

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, OUTPUT_COLUMNS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "V1");
    assert_eq!(&rows[0][11], "100");
}

#[test]
fn test_strict_thresholds() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (vendor_path, reference_path) = write_catalogs(dir.path());

    let vendors = loader::load_vendor_catalog(&vendor_path).unwrap();
    let references = loader::load_reference_catalog(&reference_path).unwrap();

    // 説明文は "!" 以外同一、商品名は完全一致なので厳しい閾値でも残る
    let engine = MatchEngine::new(0.99, 100);
    let report = engine.run(&vendors, &references);
    assert_eq!(report.matches.len(), 1);

    // 数量が違えば商品名スコアは0
    let references: Vec<_> = references
        .into_iter()
        .map(|mut item| {
            item.item_name = item.item_name.replace("2 pcs", "3 pcs");
            item
        })
        .collect();
    let report = engine.run(&vendors, &references);
    assert!(report.matches.is_empty());
}

#[test]
fn test_join_pairs_every_reference_of_vendor() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (vendor_path, _) = write_catalogs(dir.path());
    let reference_path = dir.path().join("many.csv");
    std::fs::write(
        &reference_path,
        "vendor_id,item_name,description,price\nV1,a,x,1\nV1,b,y,2\nV2,c,z,3\n",
    )
    .unwrap();

    let vendors = loader::load_vendor_catalog(&vendor_path).unwrap();
    let references = loader::load_reference_catalog(&reference_path).unwrap();

    let pairs = join_on_vendor(&vendors, &references);
    let names: Vec<&str> = pairs.iter().map(|p| p.reference.item_name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
