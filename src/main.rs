use chrono::Local;
use clap::Parser;
use photo_catalogue_rust::cli::{Cli, Commands};
use photo_catalogue_rust::config::Config;
use photo_catalogue_rust::error::{CatalogueError, Result};
use photo_catalogue_rust::matcher::{CodeMatchMode, MatchOptions};
use photo_catalogue_rust::filter::StockFilterOptions;
use photo_catalogue_rust::{export, filter, matcher, pricelist, scanner};
use photo_catalogue_rust::pricelist::ColumnAliases;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Generate {
            price_file,
            photo_folder,
            output,
            format,
            title,
            min_stock,
            negative_band,
            missing_stock,
            keep_unmatched,
            numeric_core,
            columns,
        } => {
            println!("📦 photo-catalogue - カタログ生成\n");

            let title = title.unwrap_or_else(|| config.default_title.clone());
            let min_stock = min_stock.unwrap_or(config.default_min_stock);

            // 1. 価格リスト読み込み
            println!("[1/4] 価格リストを読み込み中...");
            let aliases = match columns {
                Some(path) => ColumnAliases::from_file(&path)?,
                None => ColumnAliases::default(),
            };
            let price_list = pricelist::load_price_file(&price_file, &aliases)?;
            println!("✔ {}件の商品行を検出\n", price_list.records.len());

            if cli.verbose {
                let stats = &price_list.stats;
                println!(
                    "  スキップ行: {} / 価格既定値: {} / 在庫既定値: {}",
                    stats.skipped_rows, stats.defaulted_price, stats.defaulted_stock
                );
            }

            // 2. 在庫フィルタ
            println!("[2/4] 在庫フィルタを適用中... (最低在庫: {})", min_stock);
            let filter_options = StockFilterOptions {
                min_stock,
                negative_band,
                missing_stock,
            };
            let filtered = filter::filter_by_stock(&price_list.records, &filter_options);
            println!("✔ {}件 → {}件\n", price_list.records.len(), filtered.len());

            // 3. 写真照合
            println!("[3/4] 写真を照合中...");
            let photos = scanner::scan_folder(&photo_folder)?;
            if photos.is_empty() {
                return Err(CatalogueError::NoPhotosFound(
                    photo_folder.display().to_string(),
                ));
            }

            let match_options = MatchOptions {
                mode: if numeric_core {
                    CodeMatchMode::NumericCore
                } else {
                    CodeMatchMode::Strict
                },
                keep_unmatched,
            };
            let outcome = matcher::match_photos(&photos, &filtered, &match_options);
            println!(
                "✔ 写真あり{}件 / 写真なし{}件 / 未対応写真{}枚\n",
                outcome.stats.items_with_photos,
                outcome.stats.items_without_photos,
                outcome.stats.photos_unmatched
            );

            if cli.verbose && outcome.stats.duplicate_codes > 0 {
                println!(
                    "  注意: 照合キーの重複 {}件（先の行に畳みました）",
                    outcome.stats.duplicate_codes
                );
            }

            // 4. 出力
            println!("[4/4] カタログを生成中...");
            let output = output.unwrap_or_else(default_output_path);
            export::export_catalogue(
                &outcome.items,
                &format,
                &output,
                &title,
                &config.currency_symbol,
            )?;

            println!("\n✅ 完了 ({}アイテム)", outcome.items.len());
        }

        Commands::Photos {
            photo_folder,
            output,
            title,
        } => {
            println!("📷 photo-catalogue - 写真のみカタログ\n");

            let title = title.unwrap_or_else(|| config.default_title.clone());

            println!("[1/2] 写真をスキャン中...");
            let photos = scanner::scan_folder(&photo_folder)?;
            if photos.is_empty() {
                return Err(CatalogueError::NoPhotosFound(
                    photo_folder.display().to_string(),
                ));
            }
            println!("✔ {}枚の写真を検出\n", photos.len());

            println!("[2/2] PDFを生成中...");
            let output = output.unwrap_or_else(default_output_path);
            let pdf_path = if output.is_dir() || output.extension().is_none() {
                output.join(format!("{}.pdf", title))
            } else {
                output
            };
            export::pdf::generate_photo_only_pdf(&photos, &pdf_path, &title)?;
            println!("✔ PDF出力: {}", pdf_path.display());

            println!("\n✅ 完了 ({}枚)", photos.len());
        }

        Commands::Config {
            set_currency,
            set_title,
            show,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(currency) = set_currency {
                config.currency_symbol = currency;
                changed = true;
            }
            if let Some(title) = set_title {
                config.default_title = title;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("通貨記号: {}", config.currency_symbol);
                println!("既定タイトル: {}", config.default_title);
                println!("既定最低在庫: {}", config.default_min_stock);
            }
        }
    }

    Ok(())
}

/// 出力先省略時はカレントディレクトリに日付入りファイル名で出す
fn default_output_path() -> PathBuf {
    PathBuf::from(format!("catalogue_{}.pdf", Local::now().format("%Y%m%d")))
}
