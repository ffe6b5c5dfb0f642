pub mod csv;
pub mod excel;

use crate::catalog::MatchRecord;
use crate::cli::ExportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};

const DEFAULT_STEM: &str = "price_comparison_result_filtered";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.with_extension(extension)
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    (
        output_path_for_format(output, "csv"),
        output_path_for_format(output, "xlsx"),
    )
}

/// 照合結果を指定形式で書き出し、書き出したパスを返す
pub fn export_results(
    records: &[MatchRecord],
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match format {
        ExportFormat::Csv => {
            let output_path = output_path_for_format(output, "csv");
            csv::write_csv(records, &output_path)?;
            println!("✔ CSV出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, "xlsx");
            println!("- Excelを生成中...");
            excel::write_excel(records, &output_path)?;
            println!("✔ Excel出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Both => {
            let (csv_path, excel_path) = output_paths_for_both(output);

            csv::write_csv(records, &csv_path)?;
            println!("✔ CSV出力: {}", csv_path.display());

            println!("- Excelを生成中...");
            excel::write_excel(records, &excel_path)?;
            println!("✔ Excel出力: {}", excel_path.display());

            written.push(csv_path);
            written.push(excel_path);
        }
    }

    Ok(written)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_keeps_file_name() {
        let path = output_path_for_format(Path::new("out/result.csv"), "csv");
        assert_eq!(path, PathBuf::from("out/result.csv"));

        let path = output_path_for_format(Path::new("out/result.csv"), "xlsx");
        assert_eq!(path, PathBuf::from("out/result.xlsx"));
    }

    #[test]
    fn test_output_path_for_directory() {
        let path = output_path_for_format(Path::new("reports"), "csv");
        assert_eq!(
            path,
            PathBuf::from("reports/price_comparison_result_filtered.csv")
        );
    }

    #[test]
    fn test_output_paths_for_both() {
        let (csv_path, excel_path) = output_paths_for_both(Path::new("result.csv"));
        assert_eq!(csv_path, PathBuf::from("result.csv"));
        assert_eq!(excel_path, PathBuf::from("result.xlsx"));
    }
}
