//! Photo Catalogue Library
//!
//! 価格リスト（CSV/Excel）と商品写真をコードで照合し、
//! PDF/Excelカタログを生成するツールの共通ロジック。
//!
//! パイプライン:
//! 価格リスト → [`pricelist`] → [`filter`] → [`matcher`]（写真は
//! [`scanner`]から） → [`export`]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod matcher;
pub mod normalizer;
pub mod pricelist;
pub mod scanner;

pub use error::{CatalogueError, Result};
pub use filter::{filter_by_stock, MissingStockPolicy, StockFilterOptions};
pub use matcher::{match_photos, CodeMatchMode, MatchOptions, MatchOutcome, MatchedItem};
pub use pricelist::{load_price_file, parse_price_data, ColumnAliases, PriceList, PriceRecord};
pub use scanner::{scan_folder, PhotoAsset};
