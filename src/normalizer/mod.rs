//! 商品コード正規化モジュール
//!
//! 価格リストのコードも写真ファイル名のコードも人手入力のため
//! 表記が揺れる（大文字小文字・記号・末尾の改訂記号など）。
//! 照合の前にここで統一形へ落とす。
//!
//! いずれの関数も冪等（2回適用しても結果は変わらない）。

pub mod filename;

/// コードを正規化する（大文字化し、英数字以外を除去）
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// 数字コアを取り出す
///
/// 数字以外を除去し、先頭のゼロを落とす。数字が残らない場合は
/// `"0"` を返す（最低1桁を保証）。
pub fn numeric_core(code: &str) -> String {
    let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// 末尾の英字サフィックスを除去する
///
/// `8610100024N` のような改訂記号付きコードを素のコードに戻す。
pub fn strip_trailing_letters(code: &str) -> String {
    code.trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .to_string()
}
