//! 写真と価格リストの照合エンジン
//!
//! ファイル名から抽出したコード候補を、価格リストの照合キー索引に
//! ストラテジチェーンで突き合わせる。同じ行に対応した写真は投入順
//! のまま1つの`MatchedItem`に集約される。
//!
//! 入力順が同じなら出力も同じ（決定的）。診断はカウントとして
//! `MatchStats`で返し、エンジン自身はログを書かない。

pub mod strategy;
pub mod types;

pub use types::{CodeMatchMode, MatchOptions, MatchOutcome, MatchStats, MatchedItem};

use crate::normalizer::{filename::extract_code_candidates, numeric_core};
use crate::pricelist::PriceRecord;
use crate::scanner::PhotoAsset;
use std::collections::{HashMap, HashSet};
use strategy::ListingIndex;

/// 写真集合を価格リストに照合する
pub fn match_photos(
    photos: &[PhotoAsset],
    records: &[PriceRecord],
    options: &MatchOptions,
) -> MatchOutcome {
    let index = ListingIndex::build(records, options.mode);

    let mut stats = MatchStats {
        listing_total: records.len(),
        photos_total: photos.len(),
        duplicate_codes: index.duplicates(),
        ..Default::default()
    };

    // 当選キー → 写真（投入順）
    let mut photos_by_key: HashMap<String, Vec<PhotoAsset>> = HashMap::new();
    let mut attached: HashSet<(usize, String)> = HashSet::new();

    for (photo_idx, photo) in photos.iter().enumerate() {
        let mut matched_any = false;

        // 候補ごとに独立に解決する。複数コードを併記した写真は
        // 複数の行に付きうる
        for candidate in extract_code_candidates(&photo.file_name) {
            let key = match options.mode {
                CodeMatchMode::Strict => strategy::resolve(&candidate, &index),
                CodeMatchMode::NumericCore => {
                    let core = numeric_core(&candidate);
                    index.record_position(&core).map(|_| core)
                }
            };

            let Some(key) = key else { continue };
            matched_any = true;

            // 同じ写真を同じ行に二重登録しない
            if attached.insert((photo_idx, key.clone())) {
                photos_by_key.entry(key).or_default().push(photo.clone());
            }
        }

        if !matched_any {
            stats.photos_unmatched += 1;
        }
    }

    // リスト順に出力を組み立てる
    let mut items = Vec::new();
    for key in index.ordered_keys() {
        let Some(position) = index.record_position(key) else {
            continue;
        };
        let record = &records[position];
        let item_photos = photos_by_key.remove(key).unwrap_or_default();

        if item_photos.is_empty() {
            stats.items_without_photos += 1;
            if !options.keep_unmatched {
                continue;
            }
        } else {
            stats.items_with_photos += 1;
        }

        items.push(MatchedItem {
            code: record.code.clone(),
            description: record.description.clone(),
            price: record.price,
            stock: record.stock,
            photos: item_photos,
        });
    }

    MatchOutcome { items, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn photo(name: &str) -> PhotoAsset {
        PhotoAsset {
            path: PathBuf::from(name),
            file_name: name.to_string(),
        }
    }

    fn record(code: &str) -> PriceRecord {
        PriceRecord {
            code: code.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_photo_required_mode_drops_photoless_rows() {
        let photos = vec![photo("A1.jpg")];
        let records = vec![record("A1"), record("B2")];

        let outcome = match_photos(&photos, &records, &MatchOptions::default());

        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].code, "A1");
        assert_eq!(outcome.stats.items_with_photos, 1);
        assert_eq!(outcome.stats.items_without_photos, 1);
    }

    #[test]
    fn test_keep_unmatched_mode_emits_all_rows() {
        let photos = vec![photo("A1.jpg")];
        let records = vec![record("A1"), record("B2")];
        let options = MatchOptions {
            keep_unmatched: true,
            ..Default::default()
        };

        let outcome = match_photos(&photos, &records, &options);

        assert_eq!(outcome.items.len(), 2);
        assert_eq!(outcome.items[1].code, "B2");
        assert!(outcome.items[1].photos.is_empty());
    }

    #[test]
    fn test_photo_order_preserved() {
        let photos = vec![
            photo("A1-back.jpg"),
            photo("B2.jpg"),
            photo("A1-front.jpg"),
        ];
        let records = vec![record("A1")];

        let outcome = match_photos(&photos, &records, &MatchOptions::default());

        let names: Vec<&str> = outcome.items[0]
            .photos
            .iter()
            .map(|p| p.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["A1-back.jpg", "A1-front.jpg"]);
    }

    #[test]
    fn test_unmatched_photo_counted() {
        let photos = vec![photo("ZZZZ.jpg")];
        let records = vec![record("A1")];

        let outcome = match_photos(&photos, &records, &MatchOptions::default());

        assert!(outcome.items.is_empty());
        assert_eq!(outcome.stats.photos_unmatched, 1);
    }

    #[test]
    fn test_empty_listing_code_never_joins() {
        let photos = vec![photo("0.jpg")];
        let records = vec![record("---")];

        let outcome = match_photos(&photos, &records, &MatchOptions::default());

        assert!(outcome.items.is_empty());
    }

    #[test]
    fn test_numeric_core_mode() {
        let photos = vec![photo("12.jpg")];
        let records = vec![record("AB-0012")];
        let options = MatchOptions {
            mode: CodeMatchMode::NumericCore,
            ..Default::default()
        };

        let outcome = match_photos(&photos, &records, &options);

        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].code, "AB-0012");
    }

    #[test]
    fn test_numeric_core_not_used_in_strict_mode() {
        let photos = vec![photo("12.jpg")];
        let records = vec![record("AB-0012")];

        let outcome = match_photos(&photos, &records, &MatchOptions::default());

        assert!(outcome.items.is_empty());
    }

    #[test]
    fn test_same_photo_not_attached_twice() {
        // 候補2つが同じ行に解決しても写真は1回だけ付く
        let photos = vec![photo("A1_A1.jpg")];
        let records = vec![record("A1")];

        let outcome = match_photos(&photos, &records, &MatchOptions::default());

        assert_eq!(outcome.items[0].photos.len(), 1);
    }
}
