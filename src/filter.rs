//! 在庫数による絞り込み
//!
//! 照合の前段で実行する。除外された行は写真を引き寄せることも
//! 照合を塞ぐこともない。

use crate::pricelist::PriceRecord;
use serde::{Deserialize, Serialize};

/// 在庫セルが空だった行の扱い
///
/// 在庫列が必須のリストと任意のリストが混在するため、どちらの
/// 既定値にするかは呼び出し側が選ぶ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingStockPolicy {
    /// 在庫0として扱う
    #[default]
    Zero,
    /// 常に含める
    AlwaysInclude,
}

impl std::str::FromStr for MissingStockPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" | "0" => Ok(MissingStockPolicy::Zero),
            "include" | "always" => Ok(MissingStockPolicy::AlwaysInclude),
            _ => Err(format!("Unknown policy: {}. Use zero or include", s)),
        }
    }
}

/// 絞り込みオプション
#[derive(Debug, Clone, Default)]
pub struct StockFilterOptions {
    /// 最低在庫数（この値以上の行を残す）
    pub min_stock: f64,
    /// 負在庫の許容幅。`Some(0.0)`で負在庫をすべて許容、
    /// `Some(n)`で`-n`以上の負在庫を許容、`None`で許容しない。
    pub negative_band: Option<f64>,
    pub missing_stock: MissingStockPolicy,
}

/// 在庫条件を満たす行だけを返す
pub fn filter_by_stock(records: &[PriceRecord], options: &StockFilterOptions) -> Vec<PriceRecord> {
    records
        .iter()
        .filter(|r| includes(r, options))
        .cloned()
        .collect()
}

fn includes(record: &PriceRecord, options: &StockFilterOptions) -> bool {
    let stock = match record.stock {
        Some(s) => s,
        None => match options.missing_stock {
            MissingStockPolicy::Zero => 0.0,
            MissingStockPolicy::AlwaysInclude => return true,
        },
    };

    if stock >= options.min_stock {
        return true;
    }

    match options.negative_band {
        Some(band) if stock < 0.0 => band == 0.0 || stock >= -band,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stock: Option<f64>) -> PriceRecord {
        PriceRecord {
            code: "A1".to_string(),
            stock,
            ..Default::default()
        }
    }

    fn count(records: &[PriceRecord], options: &StockFilterOptions) -> usize {
        filter_by_stock(records, options).len()
    }

    #[test]
    fn test_min_stock_boundary_inclusive() {
        let options = StockFilterOptions {
            min_stock: 10.0,
            ..Default::default()
        };
        assert_eq!(count(&[record(Some(10.0))], &options), 1);
        assert_eq!(count(&[record(Some(9.0))], &options), 0);
    }

    #[test]
    fn test_negative_band_width() {
        let mut options = StockFilterOptions {
            min_stock: 10.0,
            negative_band: Some(5.0),
            ..Default::default()
        };
        // -3 >= -5 なので含まれる
        assert_eq!(count(&[record(Some(-3.0))], &options), 1);

        options.negative_band = Some(2.0);
        assert_eq!(count(&[record(Some(-3.0))], &options), 0);
    }

    #[test]
    fn test_negative_band_zero_allows_all_negatives() {
        let options = StockFilterOptions {
            min_stock: 10.0,
            negative_band: Some(0.0),
            ..Default::default()
        };
        assert_eq!(count(&[record(Some(-9999.0))], &options), 1);
        // 0以上min_stock未満は負在庫ではないので除外のまま
        assert_eq!(count(&[record(Some(3.0))], &options), 0);
    }

    #[test]
    fn test_negative_band_disabled() {
        let options = StockFilterOptions {
            min_stock: 0.0,
            ..Default::default()
        };
        assert_eq!(count(&[record(Some(-1.0))], &options), 0);
        assert_eq!(count(&[record(Some(0.0))], &options), 1);
    }

    #[test]
    fn test_missing_stock_zero_policy() {
        let options = StockFilterOptions {
            min_stock: 1.0,
            ..Default::default()
        };
        assert_eq!(count(&[record(None)], &options), 0);

        let options = StockFilterOptions {
            min_stock: 0.0,
            ..Default::default()
        };
        assert_eq!(count(&[record(None)], &options), 1);
    }

    #[test]
    fn test_missing_stock_always_include() {
        let options = StockFilterOptions {
            min_stock: 1000.0,
            missing_stock: MissingStockPolicy::AlwaysInclude,
            ..Default::default()
        };
        assert_eq!(count(&[record(None)], &options), 1);
        // 在庫値のある行は通常の判定
        assert_eq!(count(&[record(Some(5.0))], &options), 0);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("zero".parse::<MissingStockPolicy>(), Ok(MissingStockPolicy::Zero));
        assert_eq!(
            "include".parse::<MissingStockPolicy>(),
            Ok(MissingStockPolicy::AlwaysInclude)
        );
        assert!("none".parse::<MissingStockPolicy>().is_err());
    }
}
