//! コード照合ストラテジ
//!
//! 各ストラテジは (候補コード, 索引) -> 当選キー の純関数。
//! 優先順に並べたチェーンとして適用し、候補ごとに最初に当たった
//! ものが勝ってチェーンを打ち切る。

use super::types::CodeMatchMode;
use crate::normalizer::{normalize_code, numeric_core, strip_trailing_letters};
use crate::pricelist::PriceRecord;
use std::collections::HashMap;

/// 照合キーで引ける価格リストの索引
///
/// キーはモードに応じて正規化コードまたは数字コア。同じキーを
/// 持つ行が複数あれば最初の行が勝ち、以降は畳まれる。
#[derive(Debug, Default)]
pub struct ListingIndex {
    /// 照合キー → レコード位置（先勝ち）
    by_key: HashMap<String, usize>,
    /// 末尾英字を除いたキー → 元のキー（先勝ち、Strictのみ）
    by_base: HashMap<String, String>,
    /// レコード位置の昇順で照合キーを保持（出力順を安定させる）
    ordered_keys: Vec<String>,
    /// キーが重複して畳まれた行数
    duplicates: usize,
}

impl ListingIndex {
    pub fn build(records: &[PriceRecord], mode: CodeMatchMode) -> Self {
        let mut index = Self::default();

        for (i, record) in records.iter().enumerate() {
            let normalized = normalize_code(&record.code);
            if normalized.is_empty() {
                // 照合キーになれない行は索引から外す
                continue;
            }

            let key = match mode {
                CodeMatchMode::Strict => normalized,
                CodeMatchMode::NumericCore => numeric_core(&record.code),
            };

            if index.by_key.contains_key(&key) {
                index.duplicates += 1;
                continue;
            }

            if mode == CodeMatchMode::Strict {
                let base = strip_trailing_letters(&key);
                if !base.is_empty() && base != key {
                    index.by_base.entry(base).or_insert_with(|| key.clone());
                }
            }

            index.by_key.insert(key.clone(), i);
            index.ordered_keys.push(key);
        }

        index
    }

    /// キーに対応するレコード位置
    pub fn record_position(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    /// 出力順（リスト順）の照合キー
    pub fn ordered_keys(&self) -> &[String] {
        &self.ordered_keys
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }
}

/// ストラテジ: 候補コードと索引から当選キーを返す純関数
pub type MatchStrategy = fn(&str, &ListingIndex) -> Option<String>;

/// 完全一致
pub fn exact_match(candidate: &str, index: &ListingIndex) -> Option<String> {
    index.contains(candidate).then(|| candidate.to_string())
}

/// ベースコード一致
///
/// 候補は素のコード、リスト側に末尾英字が付いているケース
/// （候補`8610100024`、リスト`8610100024N`）。
pub fn base_code_match(candidate: &str, index: &ListingIndex) -> Option<String> {
    index.by_base.get(candidate).cloned()
}

/// サフィックス除去一致
///
/// 候補側に末尾英字が付いているケース。除去して変化がなければ
/// 完全一致と同じなので試さない。
pub fn suffix_stripped_match(candidate: &str, index: &ListingIndex) -> Option<String> {
    let stripped = strip_trailing_letters(candidate);
    if stripped.is_empty() || stripped == candidate {
        return None;
    }
    index.contains(&stripped).then_some(stripped)
}

/// 優先順のストラテジチェーン
pub const STRATEGY_CHAIN: &[MatchStrategy] = &[exact_match, base_code_match, suffix_stripped_match];

/// チェーンを順に適用し、最初の当たりを返す
pub fn resolve(candidate: &str, index: &ListingIndex) -> Option<String> {
    STRATEGY_CHAIN
        .iter()
        .find_map(|strategy| strategy(candidate, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(codes: &[&str]) -> Vec<PriceRecord> {
        codes
            .iter()
            .map(|c| PriceRecord {
                code: c.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let index = ListingIndex::build(&records(&["8610401992"]), CodeMatchMode::Strict);
        assert_eq!(
            resolve("8610401992", &index),
            Some("8610401992".to_string())
        );
        assert_eq!(resolve("9999", &index), None);
    }

    #[test]
    fn test_base_code_match() {
        // リスト側だけに末尾英字が付いている
        let index = ListingIndex::build(&records(&["8610100024N"]), CodeMatchMode::Strict);
        assert_eq!(
            resolve("8610100024", &index),
            Some("8610100024N".to_string())
        );
    }

    #[test]
    fn test_suffix_stripped_match() {
        // 候補側だけに末尾英字が付いている
        let index = ListingIndex::build(&records(&["8610100024"]), CodeMatchMode::Strict);
        assert_eq!(
            resolve("8610100024X", &index),
            Some("8610100024".to_string())
        );
    }

    #[test]
    fn test_exact_wins_over_base() {
        // 素のコードと英字付きコードが両方ある場合、完全一致が勝つ
        let index =
            ListingIndex::build(&records(&["8610100024N", "8610100024"]), CodeMatchMode::Strict);
        assert_eq!(
            resolve("8610100024", &index),
            Some("8610100024".to_string())
        );
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        let index = ListingIndex::build(&records(&["A1", "a-1", "A1"]), CodeMatchMode::Strict);
        assert_eq!(index.duplicates(), 2);
        assert_eq!(index.record_position("A1"), Some(0));
        assert_eq!(index.ordered_keys().len(), 1);
    }

    #[test]
    fn test_empty_code_excluded() {
        let index = ListingIndex::build(&records(&["---", "A1"]), CodeMatchMode::Strict);
        assert_eq!(index.ordered_keys().len(), 1);
        assert_eq!(resolve("A1", &index), Some("A1".to_string()));
    }

    #[test]
    fn test_numeric_core_index() {
        let index = ListingIndex::build(&records(&["AB-0012"]), CodeMatchMode::NumericCore);
        assert_eq!(index.record_position("12"), Some(0));
    }
}
