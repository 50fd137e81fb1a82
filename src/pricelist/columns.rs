//! 列エイリアス定義
//!
//! 仕入先ごとにヘッダ表記が異なるため、論理フィールドごとに
//! 正規化済みエイリアスの優先順リストを持つ。JSONファイルで
//! コード変更なしに差し替え・追加できる。

use crate::error::Result;
use crate::normalizer::normalize_code;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 論理フィールドごとの列エイリアス（優先順）
///
/// 各エントリは正規化済みヘッダ（大文字英数字のみ）と完全一致で
/// 突き合わせる。リストの先頭ほど優先される。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub code: Vec<String>,
    pub description: Vec<String>,
    pub price: Vec<String>,
    pub stock: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            code: list(&["CODE", "ITEMCODE", "PRODUCTCODE", "STOCKCODE"]),
            description: list(&["DESCRIPTION", "DESC", "PRODUCTNAME", "ITEMDESCRIPTION"]),
            price: list(&[
                "PRICEAINCL",
                "PRICEAINCLINC",
                "PRICEAINCLINCL",
                "PRICEINCL",
                "PRICE",
                "SELLINGPRICE",
            ]),
            stock: list(&["ONHANDSTOCK", "ONHAND", "STOCK", "ONHANDSTOCKQTY", "QTYONHAND"]),
        }
    }
}

impl ColumnAliases {
    /// JSONファイルから読み込み（既定リストに優先してマージ済みの状態で返す）
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    ///
    /// 指定のなかったフィールドは既定リストのまま。指定のあった
    /// フィールドは既定リストの前に挿入される。
    pub fn from_json(json: &str) -> Result<Self> {
        let custom: ColumnAliasesPartial = serde_json::from_str(json)?;
        let mut config = Self::default();
        config.prepend(&custom);
        Ok(config)
    }

    /// カスタムエイリアスを既定リストの前に挿入する
    fn prepend(&mut self, custom: &ColumnAliasesPartial) {
        fn merge(base: &mut Vec<String>, custom: &[String]) {
            let mut merged: Vec<String> =
                custom.iter().map(|s| normalize_code(s)).filter(|s| !s.is_empty()).collect();
            for existing in base.drain(..) {
                if !merged.contains(&existing) {
                    merged.push(existing);
                }
            }
            *base = merged;
        }

        merge(&mut self.code, &custom.code);
        merge(&mut self.description, &custom.description);
        merge(&mut self.price, &custom.price);
        merge(&mut self.stock, &custom.stock);
    }
}

/// JSONで一部フィールドだけ指定するための入力形
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ColumnAliasesPartial {
    code: Vec<String>,
    description: Vec<String>,
    price: Vec<String>,
    stock: Vec<String>,
}
