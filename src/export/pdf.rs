//! PDFカタログ生成
//!
//! A4縦・2カラムで写真ブロックを並べる。各ブロックは写真と
//! コード・品名・価格のキャプション3行。読めない画像は警告して
//! スキップし、出力全体は失敗させない。

use crate::error::{CatalogueError, Result};
use crate::export::layout::*;
use crate::matcher::MatchedItem;
use crate::scanner::PhotoAsset;
use indicatif::ProgressBar;
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// 照合済みアイテムからカタログPDFを生成する
pub fn generate_pdf(
    items: &[MatchedItem],
    output_path: &Path,
    title: &str,
    currency: &str,
) -> Result<()> {
    let (doc, page1, layer1) =
        PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CatalogueError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CatalogueError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

    let mut layer = doc.get_page(page1).get_layer(layer1);
    draw_title(&layer, &font_bold, title);

    let block_count: usize = items.iter().map(|i| i.photos.len().max(1)).sum();
    let progress = ProgressBar::new(block_count as u64);

    let mut current_y = CONTENT_TOP_MM;
    let mut current_column = 0usize;

    for item in items {
        // 写真のないアイテムはキャプションのみのブロックを1つ出す
        let blocks: Vec<Option<&PhotoAsset>> = if item.photos.is_empty() {
            vec![None]
        } else {
            item.photos.iter().map(Some).collect()
        };

        for photo in blocks {
            if current_y + BLOCK_HEIGHT_MM > A4_HEIGHT_MM - BOTTOM_MARGIN_MM {
                let (page, new_layer) = doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
                layer = doc.get_page(page).get_layer(new_layer);
                current_y = PAGE_TOP_MM;
                current_column = 0;
            }

            let x = column_x(current_column);

            if let Some(photo) = photo {
                if let Err(e) = embed_photo(&layer, photo, x, current_y) {
                    eprintln!("警告: 画像を埋め込めません ({}): {}", photo.file_name, e);
                }
            }

            draw_captions(&layer, &font, &font_bold, item, x, current_y, currency);

            if current_column == 0 {
                current_column = 1;
            } else {
                current_column = 0;
                current_y += BLOCK_HEIGHT_MM;
            }
            progress.inc(1);
        }
    }
    progress.finish_and_clear();

    save_document(doc, output_path)
}

/// 写真のみのカタログPDFを生成する（価格リストなし）
pub fn generate_photo_only_pdf(
    photos: &[PhotoAsset],
    output_path: &Path,
    title: &str,
) -> Result<()> {
    let (doc, page1, layer1) =
        PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");

    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CatalogueError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

    let mut layer = doc.get_page(page1).get_layer(layer1);
    draw_title(&layer, &font_bold, title);

    let progress = ProgressBar::new(photos.len() as u64);

    let mut current_y = CONTENT_TOP_MM;
    let mut current_column = 0usize;

    for photo in photos {
        if current_y + PHOTO_BLOCK_HEIGHT_MM > A4_HEIGHT_MM - BOTTOM_MARGIN_MM {
            let (page, new_layer) = doc.add_page(Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(new_layer);
            current_y = PAGE_TOP_MM;
            current_column = 0;
        }

        let x = column_x(current_column);
        if let Err(e) = embed_photo(&layer, photo, x, current_y) {
            eprintln!("警告: 画像を埋め込めません ({}): {}", photo.file_name, e);
        }

        if current_column == 0 {
            current_column = 1;
        } else {
            current_column = 0;
            current_y += PHOTO_BLOCK_HEIGHT_MM;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    save_document(doc, output_path)
}

fn draw_title(layer: &PdfLayerReference, font_bold: &IndirectFontRef, title: &str) {
    layer.use_text(
        title,
        TITLE_FONT_SIZE,
        Mm(centered_x(title, TITLE_FONT_SIZE)),
        Mm(A4_HEIGHT_MM - TITLE_Y_MM),
        font_bold,
    );
}

fn draw_captions(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    font_bold: &IndirectFontRef,
    item: &MatchedItem,
    x: f32,
    block_top: f32,
    currency: &str,
) {
    let text_top = block_top + PHOTO_HEIGHT_MM + 3.0;

    layer.use_text(
        format!("Code: {}", item.code),
        CAPTION_FONT_SIZE,
        Mm(x),
        Mm(A4_HEIGHT_MM - text_top),
        font_bold,
    );

    let description = if item.description.is_empty() {
        "No description".to_string()
    } else {
        truncate_caption(&item.description, 40)
    };
    layer.use_text(
        description,
        CAPTION_FONT_SIZE,
        Mm(x),
        Mm(A4_HEIGHT_MM - text_top - TEXT_LINE_MM),
        font,
    );

    let price_text = match item.price {
        Some(price) => format!("Price: {} {:.2}", currency, price),
        None => "Price: -".to_string(),
    };
    layer.use_text(
        price_text,
        CAPTION_FONT_SIZE,
        Mm(x),
        Mm(A4_HEIGHT_MM - text_top - TEXT_LINE_MM * 2.0),
        font,
    );
}

/// 写真をブロック枠内に縦横比を保って配置する
fn embed_photo(
    layer: &PdfLayerReference,
    photo: &PhotoAsset,
    x: f32,
    block_top: f32,
) -> std::result::Result<(), String> {
    let data = std::fs::read(&photo.path).map_err(|e| e.to_string())?;
    let image = decode_image(&photo.file_name, &data)?;

    let dpi = 300.0_f32;
    let natural_width_mm = image.image.width.0 as f32 * 25.4 / dpi;
    let natural_height_mm = image.image.height.0 as f32 * 25.4 / dpi;
    if natural_width_mm <= 0.0 || natural_height_mm <= 0.0 {
        return Err("画像サイズが不正".to_string());
    }

    let scale = (PHOTO_WIDTH_MM / natural_width_mm).min(PHOTO_HEIGHT_MM / natural_height_mm);
    let y = A4_HEIGHT_MM - block_top - natural_height_mm * scale;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            scale_x: Some(scale as f64),
            scale_y: Some(scale as f64),
            dpi: Some(dpi as f64),
            ..Default::default()
        },
    );

    Ok(())
}

fn decode_image(file_name: &str, data: &[u8]) -> std::result::Result<Image, String> {
    let cursor = std::io::Cursor::new(data);
    if file_name.to_ascii_lowercase().ends_with(".png") {
        let decoder =
            image_crate::codecs::png::PngDecoder::new(cursor).map_err(|e| e.to_string())?;
        Image::try_from(decoder).map_err(|e| e.to_string())
    } else {
        let decoder =
            image_crate::codecs::jpeg::JpegDecoder::new(cursor).map_err(|e| e.to_string())?;
        Image::try_from(decoder).map_err(|e| e.to_string())
    }
}

fn truncate_caption(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

fn save_document(doc: PdfDocumentReference, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| CatalogueError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_caption() {
        assert_eq!(truncate_caption("short", 10), "short");
        assert_eq!(truncate_caption("abcdefghij", 5), "abcde");
    }

    #[test]
    fn test_decode_image_rejects_garbage() {
        assert!(decode_image("x.jpg", b"not an image").is_err());
        assert!(decode_image("x.png", b"not an image").is_err());
    }
}
