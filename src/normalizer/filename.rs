//! 写真ファイル名からのコード抽出
//!
//! ファイル名の規約:
//! - 拡張子を除いた先頭部分が商品コード
//! - `-` 以降は撮影メタ情報（例: `8610401992-front.jpg`）
//! - `_` 区切りで複数コードを併記できる（例: `861040_861041.jpg`、
//!   1枚に複数商品が写っているケース）

use super::normalize_code;
use regex::Regex;

/// ファイル名から商品コード候補を抽出する
///
/// 複数商品を写した写真では候補が複数返る。正規化して空になった
/// 候補は捨てる。
pub fn extract_code_candidates(file_name: &str) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref EXTENSION_RE: Regex = Regex::new(r"\.[^./\\]+$").unwrap();
    }

    let stem = EXTENSION_RE.replace(file_name, "");
    let code_segment = stem.split('-').next().unwrap_or("");

    code_segment
        .split('_')
        .map(normalize_code)
        .filter(|c| !c.is_empty())
        .collect()
}
