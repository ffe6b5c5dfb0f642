use clap::Parser;
use product_matcher::{catalog, cli, config, error, export, loader, logging, pipeline};
use product_matcher_common::{
    detect_combo, extract_quantity_unit, residual_name, DescriptionComparator, TitleMatcher,
};
use cli::{Cli, Commands, RunArgs};
use config::Config;
use error::Result;
use pipeline::MatchEngine;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run(config, args),

        Commands::Compare { a, b, description } => {
            if description {
                compare_descriptions(&config, &a, &b)
            } else {
                compare_titles(&a, &b);
                Ok(())
            }
        }

        Commands::Config {
            show,
            set_description_threshold,
            set_title_threshold,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(threshold) = set_description_threshold {
                config.set_description_threshold(threshold)?;
                changed = true;
            }
            if let Some(threshold) = set_title_threshold {
                config.set_title_threshold(threshold)?;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  ベンダーカタログ: {}", config.vendor_catalog.display());
                println!("  参照カタログ: {}", config.reference_catalog.display());
                println!("  出力: {}", config.output.display());
                println!("  説明文の閾値: {}", config.description_threshold);
                println!("  商品名の閾値: {}", config.title_threshold);
            }
            Ok(())
        }
    }
}

fn run(mut config: Config, args: RunArgs) -> Result<()> {
    if let Some(path) = args.vendor {
        config.vendor_catalog = path;
    }
    if let Some(path) = args.reference {
        config.reference_catalog = path;
    }
    if let Some(path) = args.output {
        config.output = path;
    }
    if let Some(threshold) = args.description_threshold {
        config.set_description_threshold(threshold)?;
    }
    if let Some(threshold) = args.title_threshold {
        config.set_title_threshold(threshold)?;
    }

    println!("🔎 product-matcher - カタログ照合\n");

    // 1. 読み込み
    println!("[1/4] カタログを読み込み中...");
    let vendors = loader::load_vendor_catalog(&config.vendor_catalog)?;
    let references = loader::load_reference_catalog(&config.reference_catalog)?;
    println!(
        "✔ ベンダー {}件 / 参照 {}件\n",
        vendors.len(),
        references.len()
    );

    // 2. 結合
    println!("[2/4] ベンダーキーで結合中...");
    let pairs = catalog::join_on_vendor(&vendors, &references);
    println!("✔ 候補ペア {}件\n", pairs.len());

    // 3. 採点
    let engine = MatchEngine::from_config(&config).show_progress(!args.no_progress);
    println!(
        "[3/4] 採点中... (説明文 ≥ {}, 商品名 ≥ {})",
        engine.description_threshold(),
        engine.title_threshold()
    );
    let report = engine.score_candidates(&pairs);
    println!("✔ 採点 {}件 / 一致 {}件", report.scored, report.matches.len());
    if !report.failures.is_empty() {
        println!("⚠ {}件のペアをスキップ（詳細は --verbose）", report.failures.len());
    }
    println!();

    // 4. 出力
    println!("[4/4] 結果を保存中...");
    export::export_results(&report.matches, &args.format, &config.output)?;

    println!("\n✅ 完了");
    Ok(())
}

fn compare_titles(a: &str, b: &str) {
    let matcher = TitleMatcher::new();
    let result = matcher.explain(a, b);

    for title in [a, b] {
        println!("「{}」", title);
        println!("  数量・単位: {}", extract_quantity_unit(title));
        println!("  コンボ: {}", detect_combo(title));
        println!("  正規化名: {}", residual_name(title));
    }
    println!();
    println!("スコア: {}", result.score);
    println!("判定ルール: {}", result.rule);
}

fn compare_descriptions(config: &Config, a: &str, b: &str) -> Result<()> {
    let comparator = DescriptionComparator::new(config.description_threshold);
    let result = comparator.compare(a, b)?;

    println!("類似度: {:.4}", result.similarity);
    println!(
        "判定: {} (閾値 {})",
        if result.is_match { "一致" } else { "不一致" },
        comparator.threshold()
    );
    Ok(())
}
