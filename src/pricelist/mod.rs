//! 価格リストパーサ
//!
//! CSV/スプレッドシートの価格リストを`PriceRecord`列に変換する。
//! 入力は仕入先ごとに形式が揺れる前提:
//! - ヘッダ行の上に表題や空行が挟まる
//! - 列名の表記が揺れる（`ColumnAliases`で吸収）
//! - 価格・在庫セルに通貨記号や桁区切りが混ざる
//!
//! 構造的な問題（コード列なし・空ファイル）だけが失敗になり、
//! 行単位の数値化失敗は既定値に落として行を残す。

pub mod columns;
mod delimited;
mod spreadsheet;

pub use columns::ColumnAliases;
pub use delimited::detect_delimiter;

use crate::error::{CatalogueError, Result};
use crate::normalizer::normalize_code;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 価格リストの1行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRecord {
    pub code: String,
    #[serde(default)]
    pub description: String,
    /// 価格。セルが空・数値化不能なら`None`（不明として描画側で扱う）
    #[serde(default)]
    pub price: Option<f64>,
    /// 在庫数。`None`の扱いは在庫フィルタのポリシーに従う
    #[serde(default)]
    pub stock: Option<f64>,
}

/// パース統計（診断用カウント）
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// ヘッダ行より下の行数
    pub total_rows: usize,
    /// 空行・コード空でスキップした行数
    pub skipped_rows: usize,
    /// 数値化できず既定値にした価格セル数
    pub defaulted_price: usize,
    /// 数値化できず既定値にした在庫セル数
    pub defaulted_stock: usize,
}

/// パース結果
#[derive(Debug, Clone, Default)]
pub struct PriceList {
    pub records: Vec<PriceRecord>,
    pub stats: ParseStats,
}

/// ヘッダ行を探す走査上限
const HEADER_SCAN_ROWS: usize = 20;

/// 価格リストファイルを読み込む
pub fn load_price_file(path: &Path, aliases: &ColumnAliases) -> Result<PriceList> {
    if !path.exists() {
        return Err(CatalogueError::FileNotFound(path.display().to_string()));
    }
    let data = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    parse_price_data(&data, &file_name, aliases)
}

/// バイト列をパースする
///
/// 拡張子`.csv`なら区切りテキスト、それ以外はスプレッドシート
/// バイナリとして読む。
pub fn parse_price_data(data: &[u8], file_name: &str, aliases: &ColumnAliases) -> Result<PriceList> {
    let rows = if is_csv(file_name) {
        let content = String::from_utf8_lossy(data);
        delimited::parse_delimited(&content)
    } else {
        spreadsheet::parse_spreadsheet(data)?
    };

    if rows.len() < 2 {
        return Err(CatalogueError::EmptyPriceFile(file_name.to_string()));
    }

    extract_records(&rows, aliases)
}

fn is_csv(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// ヘッダ行を探す
///
/// 先頭20行を走査し、各行のセルを正規化して連結した文字列に
/// コード系トークンとデスクリプション系トークンの両方を含む行を
/// 採用する。見つからなければコード系のみの行、それも無ければ
/// 先頭行。
fn find_header_row(rows: &[Vec<String>], aliases: &ColumnAliases) -> usize {
    let limit = rows.len().min(HEADER_SCAN_ROWS);
    let mut code_only: Option<usize> = None;

    for (i, row) in rows.iter().take(limit).enumerate() {
        let concat: String = row.iter().map(|cell| normalize_code(cell)).collect();
        let has_code = aliases.code.iter().any(|t| concat.contains(t.as_str()));
        let has_desc = aliases.description.iter().any(|t| concat.contains(t.as_str()));

        if has_code && has_desc {
            return i;
        }
        if has_code && code_only.is_none() {
            code_only = Some(i);
        }
    }

    code_only.unwrap_or(0)
}

/// エイリアスリストの順に正規化済みヘッダと突き合わせる
fn resolve_column(normalized_headers: &[String], aliases: &[String]) -> Option<usize> {
    for alias in aliases {
        if let Some(idx) = normalized_headers.iter().position(|h| h == alias) {
            return Some(idx);
        }
    }
    None
}

fn extract_records(rows: &[Vec<String>], aliases: &ColumnAliases) -> Result<PriceList> {
    let header_idx = find_header_row(rows, aliases);
    let normalized_headers: Vec<String> = rows[header_idx]
        .iter()
        .map(|h| normalize_code(h))
        .collect();

    // コード列だけは必須。見つからなければ実際のヘッダを添えて失敗させる
    let code_col = resolve_column(&normalized_headers, &aliases.code).ok_or_else(|| {
        CatalogueError::MissingCodeColumn {
            found: normalized_headers
                .iter()
                .filter(|h| !h.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        }
    })?;
    let desc_col = resolve_column(&normalized_headers, &aliases.description);
    let price_col = resolve_column(&normalized_headers, &aliases.price);
    let stock_col = resolve_column(&normalized_headers, &aliases.stock);

    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for row in rows.iter().skip(header_idx + 1) {
        stats.total_rows += 1;

        if row.iter().all(|cell| cell.trim().is_empty()) {
            stats.skipped_rows += 1;
            continue;
        }

        let code = cell_at(row, Some(code_col)).trim().to_string();
        if code.is_empty() {
            stats.skipped_rows += 1;
            continue;
        }

        let description = cell_at(row, desc_col).trim().to_string();

        let price_cell = cell_at(row, price_col);
        let price = parse_numeric_cell(price_cell);
        if price.is_none() && !price_cell.trim().is_empty() {
            stats.defaulted_price += 1;
        }

        let stock_cell = cell_at(row, stock_col);
        let stock = parse_numeric_cell(stock_cell);
        if stock.is_none() && !stock_cell.trim().is_empty() {
            stats.defaulted_stock += 1;
        }

        records.push(PriceRecord {
            code,
            description,
            price,
            stock,
        });
    }

    Ok(PriceList { records, stats })
}

fn cell_at(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).map(|s| s.as_str()).unwrap_or("")
}

/// 価格・在庫セルの数値化
///
/// 通貨記号の英字・空白・桁区切りカンマを除いてからパースする。
/// 数値にならないセルは`None`になり、行そのものは捨てない。
fn parse_numeric_cell(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| !c.is_ascii_alphabetic() && !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
