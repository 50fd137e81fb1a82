use crate::filter::MissingStockPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-catalogue")]
#[command(about = "価格リスト・商品写真照合カタログ生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 価格リストと写真フォルダを照合してカタログを生成
    Generate {
        /// 価格リストファイル（CSV/Excel）
        #[arg(required = true)]
        price_file: PathBuf,

        /// 写真フォルダのパス
        #[arg(required = true)]
        photo_folder: PathBuf,

        /// 出力ファイル/ディレクトリ（デフォルト: カレントディレクトリ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (pdf/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// ドキュメントタイトル（省略時は設定の既定値）
        #[arg(short, long)]
        title: Option<String>,

        /// 最低在庫数（この値以上の行を残す）
        #[arg(short, long)]
        min_stock: Option<f64>,

        /// 負在庫の許容幅（0で負在庫をすべて許容）
        #[arg(long)]
        negative_band: Option<f64>,

        /// 在庫セルが空の行の扱い (zero/include)
        #[arg(long, default_value = "zero")]
        missing_stock: MissingStockPolicy,

        /// 写真のない行も出力に残す
        #[arg(long)]
        keep_unmatched: bool,

        /// 数字コアで照合する（コード体系がリストと写真で揃っていない場合）
        #[arg(long)]
        numeric_core: bool,

        /// 列エイリアス定義JSONファイル
        #[arg(long)]
        columns: Option<PathBuf>,
    },

    /// 写真のみのカタログPDFを生成（価格照合なし）
    Photos {
        /// 写真フォルダのパス
        #[arg(required = true)]
        photo_folder: PathBuf,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ドキュメントタイトル
        #[arg(short, long)]
        title: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 通貨記号を設定
        #[arg(long)]
        set_currency: Option<String>,

        /// 既定のドキュメントタイトルを設定
        #[arg(long)]
        set_title: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    Pdf,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use pdf, excel, or both", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert!(matches!("pdf".parse::<ExportFormat>(), Ok(ExportFormat::Pdf)));
        assert!(matches!("XLSX".parse::<ExportFormat>(), Ok(ExportFormat::Excel)));
        assert!(matches!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both)));
        assert!("word".parse::<ExportFormat>().is_err());
    }
}
