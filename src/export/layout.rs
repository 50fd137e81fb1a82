//! カタログレイアウト定数
//!
//! A4縦・2カラムの写真ブロック構成。寸法はmm単位。

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// 左右マージン
pub const MARGIN_MM: f32 = 10.0;
/// 下端の余白（これを割り込むブロックは次ページへ送る）
pub const BOTTOM_MARGIN_MM: f32 = 15.0;

/// タイトルのベースライン位置（上端から）
pub const TITLE_Y_MM: f32 = 15.0;
/// 本文開始位置（上端から）
pub const CONTENT_TOP_MM: f32 = 25.0;
/// 改ページ後の本文開始位置
pub const PAGE_TOP_MM: f32 = 15.0;

pub const PHOTO_WIDTH_MM: f32 = 60.0;
pub const PHOTO_HEIGHT_MM: f32 = 60.0;

/// キャプション1行の高さ
pub const TEXT_LINE_MM: f32 = 5.0;
/// 写真 + キャプション3行 + ブロック間余白
pub const BLOCK_HEIGHT_MM: f32 = PHOTO_HEIGHT_MM + TEXT_LINE_MM * 3.0 + 8.0;
/// 写真のみブロック（キャプションなし）
pub const PHOTO_BLOCK_HEIGHT_MM: f32 = PHOTO_HEIGHT_MM + 10.0;

pub const COLUMN_GAP_MM: f32 = 10.0;

pub const TITLE_FONT_SIZE: f32 = 18.0;
pub const CAPTION_FONT_SIZE: f32 = 9.0;

/// カラムのX座標（左端）
pub fn column_x(column: usize) -> f32 {
    let usable = A4_WIDTH_MM - 2.0 * MARGIN_MM;
    let column_width = (usable - COLUMN_GAP_MM) / 2.0;
    if column == 0 {
        MARGIN_MM
    } else {
        MARGIN_MM + column_width + COLUMN_GAP_MM
    }
}

/// Helveticaの概算文字幅からセンタリング位置を求める
pub fn centered_x(text: &str, font_size_pt: f32) -> f32 {
    // 平均文字幅 ≈ 0.5em、1pt = 0.3528mm
    let width_mm = text.chars().count() as f32 * font_size_pt * 0.5 * 0.3528;
    ((A4_WIDTH_MM - width_mm) / 2.0).max(MARGIN_MM)
}
