//! カタログ出力（PDF/Excel）
//!
//! 照合結果`MatchedItem`列がここへの唯一の入力。価格・在庫の
//! 不明値はプレースホルダで描画する。

pub mod excel;
pub mod layout;
pub mod pdf;

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::matcher::MatchedItem;
use std::path::{Path, PathBuf};

/// 出力先を拡張子付きのファイルパスに解決する
///
/// ディレクトリや拡張子なしの指定ならタイトル名のファイルを作り、
/// ファイル指定なら拡張子だけ差し替える。
fn resolve_output_path(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        parent.join(format!("{}.{}", stem, extension))
    }
}

/// 指定フォーマットでカタログを出力する
pub fn export_catalogue(
    items: &[MatchedItem],
    format: &ExportFormat,
    output: &Path,
    title: &str,
    currency: &str,
) -> Result<()> {
    if matches!(format, ExportFormat::Pdf | ExportFormat::Both) {
        let pdf_path = resolve_output_path(output, title, "pdf");
        println!("- PDFを生成中...");
        pdf::generate_pdf(items, &pdf_path, title, currency)?;
        println!("✔ PDF出力: {}", pdf_path.display());
    }

    if matches!(format, ExportFormat::Excel | ExportFormat::Both) {
        let excel_path = resolve_output_path(output, title, "xlsx");
        println!("- Excelを生成中...");
        excel::generate_excel(items, &excel_path, currency)?;
        println!("✔ Excel出力: {}", excel_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path_from_file() {
        let path = resolve_output_path(Path::new("/tmp/out.pdf"), "Catalogue", "xlsx");
        assert_eq!(path, PathBuf::from("/tmp/out.xlsx"));
    }

    #[test]
    fn test_resolve_output_path_without_extension() {
        let path = resolve_output_path(Path::new("/tmp/nodir_noext"), "Catalogue", "pdf");
        assert_eq!(path, PathBuf::from("/tmp/nodir_noext/Catalogue.pdf"));
    }
}
