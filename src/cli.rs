use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "product-matcher")]
#[command(about = "ベンダー商品カタログと参照カタログの照合ツール", long_about = None)]
pub struct Cli {
    /// 省略時は run（デフォルト設定で照合）
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 2つのカタログを照合して結果を出力
    Run(RunArgs),

    /// 2つの商品名（または説明文）を採点して判定ルールを表示
    Compare {
        /// 1つ目の商品名
        #[arg(required = true)]
        a: String,

        /// 2つ目の商品名
        #[arg(required = true)]
        b: String,

        /// 商品名ではなく説明文として比較
        #[arg(short, long)]
        description: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 説明文類似度の閾値を設定（0.0-1.0）
        #[arg(long)]
        set_description_threshold: Option<f64>,

        /// 商品名スコアの閾値を設定（0-100）
        #[arg(long)]
        set_title_threshold: Option<u8>,
    },
}

#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// ベンダーカタログ（CSV/XLSX、省略時は設定値）
    #[arg(long)]
    pub vendor: Option<PathBuf>,

    /// 参照カタログ（CSV/XLSX、省略時は設定値）
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// 出力ファイル
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 出力形式 (csv/excel/both)
    #[arg(short, long, default_value = "csv")]
    pub format: ExportFormat,

    /// 説明文類似度の閾値（0.0-1.0）
    #[arg(long)]
    pub description_threshold: Option<f64>,

    /// 商品名スコアの閾値（0-100）
    #[arg(long)]
    pub title_threshold: Option<u8>,

    /// プログレスバーを表示しない
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("XLSX".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert_eq!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["product-matcher"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_run_args() {
        let cli = Cli::try_parse_from([
            "product-matcher",
            "run",
            "--vendor",
            "a.xlsx",
            "--title-threshold",
            "80",
            "-f",
            "both",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.vendor, Some(PathBuf::from("a.xlsx")));
                assert_eq!(args.title_threshold, Some(80));
                assert_eq!(args.format, ExportFormat::Both);
                assert!(args.reference.is_none());
            }
            _ => panic!("run サブコマンドとして解釈されるべき"),
        }
    }

    #[test]
    fn test_compare_args() {
        let cli = Cli::try_parse_from(["product-matcher", "compare", "Zinger 2 pcs", "Zinger", "-d"])
            .unwrap();
        match cli.command {
            Some(Commands::Compare { a, b, description }) => {
                assert_eq!(a, "Zinger 2 pcs");
                assert_eq!(b, "Zinger");
                assert!(description);
            }
            _ => panic!("compare サブコマンドとして解釈されるべき"),
        }
    }
}
