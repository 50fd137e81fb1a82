//! Excelカタログ生成
//!
//! 1行1商品の台帳形式。先頭の写真をサムネイルとして埋め込む。
//! 価格・在庫が不明の行は`-`で描画する。

use crate::error::{CatalogueError, Result};
use crate::matcher::MatchedItem;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Image, ObjectMovement, Workbook};
use std::path::Path;

const PHOTO_COL_WIDTH: f64 = 16.0;
const CODE_COL_WIDTH: f64 = 16.0;
const DESC_COL_WIDTH: f64 = 40.0;
const NUMBER_COL_WIDTH: f64 = 12.0;

/// アイテム行の高さ（pt）
const ROW_HEIGHT_PT: f64 = 80.0;
/// サムネイルの目標高さ（px）。行高さ80pt ≈ 107px に収める
const THUMB_HEIGHT_PX: f64 = 100.0;

pub fn generate_excel(items: &[MatchedItem], output_path: &Path, currency: &str) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Catalogue")
        .map_err(|e| CatalogueError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let price_format = Format::new()
        .set_num_format("0.00")
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let stock_format = Format::new()
        .set_num_format("0")
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // 列幅
    let widths = [
        (0u16, PHOTO_COL_WIDTH),
        (1, CODE_COL_WIDTH),
        (2, DESC_COL_WIDTH),
        (3, NUMBER_COL_WIDTH),
        (4, NUMBER_COL_WIDTH),
    ];
    for (col, width) in widths {
        worksheet
            .set_column_width(col, width)
            .map_err(|e| CatalogueError::ExcelGeneration(format!("列幅設定エラー: {}", e)))?;
    }

    // ヘッダ行
    let headers = [
        "Photo".to_string(),
        "Code".to_string(),
        "Description".to_string(),
        format!("Price ({})", currency),
        "Stock".to_string(),
    ];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| CatalogueError::ExcelGeneration(format!("ヘッダ書き込みエラー: {}", e)))?;
    }

    for (i, item) in items.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .set_row_height(row, ROW_HEIGHT_PT)
            .map_err(|e| CatalogueError::ExcelGeneration(format!("行高さ設定エラー: {}", e)))?;

        write_cell(worksheet, row, 1, &item.code, &value_format)?;
        write_cell(worksheet, row, 2, &item.description, &value_format)?;

        match item.price {
            Some(price) => {
                worksheet
                    .write_number_with_format(row, 3, price, &price_format)
                    .map_err(|e| {
                        CatalogueError::ExcelGeneration(format!("価格書き込みエラー: {}", e))
                    })?;
            }
            None => write_cell(worksheet, row, 3, "-", &value_format)?,
        }

        match item.stock {
            Some(stock) => {
                worksheet
                    .write_number_with_format(row, 4, stock, &stock_format)
                    .map_err(|e| {
                        CatalogueError::ExcelGeneration(format!("在庫書き込みエラー: {}", e))
                    })?;
            }
            None => write_cell(worksheet, row, 4, "-", &value_format)?,
        }

        // 写真セル: 先頭の1枚だけサムネイル埋め込み
        if let Some(photo) = item.photos.first() {
            match embed_thumbnail(photo.path.as_path()) {
                Ok(image) => {
                    worksheet.insert_image(row, 0, &image).map_err(|e| {
                        CatalogueError::ExcelGeneration(format!("画像埋め込みエラー: {}", e))
                    })?;
                }
                Err(e) => {
                    eprintln!("警告: サムネイルを埋め込めません ({}): {}", photo.file_name, e);
                }
            }
        }
    }

    workbook
        .save(output_path)
        .map_err(|e| CatalogueError::ExcelGeneration(format!("Excel保存エラー: {}", e)))?;

    Ok(())
}

fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: &str,
    format: &Format,
) -> Result<()> {
    worksheet
        .write_string_with_format(row, col, value, format)
        .map_err(|e| CatalogueError::ExcelGeneration(format!("セル書き込みエラー: {}", e)))?;
    Ok(())
}

/// 写真を読み込み、行高さに収まるサムネイルにする
fn embed_thumbnail(path: &Path) -> std::result::Result<Image, String> {
    let data = std::fs::read(path).map_err(|e| e.to_string())?;
    let image = Image::new_from_buffer(&data).map_err(|e| e.to_string())?;

    let height = image.height();
    if height <= 0.0 {
        return Err("画像サイズが不正".to_string());
    }
    let scale = THUMB_HEIGHT_PX / height;

    Ok(image
        .set_scale_width(scale)
        .set_scale_height(scale)
        .set_object_movement(ObjectMovement::DontMoveOrSizeWithCells))
}
