//! 照合結果の型定義

use crate::scanner::PhotoAsset;

/// コード照合モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeMatchMode {
    /// 完全一致 → ベースコード一致 → サフィックス除去一致の順に試す
    #[default]
    Strict,
    /// 数字コアだけで突き合わせる粗いモード。コード体系がリストと
    /// ファイル名で揃っていない場合に使う。無関係なコードが同じ
    /// 数字コアを持つと誤対応しうる。
    NumericCore,
}

/// 照合オプション
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    pub mode: CodeMatchMode,
    /// trueなら写真のない行も結果に残す（写真欄は空になる）
    pub keep_unmatched: bool,
}

/// 照合済みアイテム（1商品 + 0枚以上の写真）
#[derive(Debug, Clone)]
pub struct MatchedItem {
    pub code: String,
    pub description: String,
    pub price: Option<f64>,
    pub stock: Option<f64>,
    /// 写真は投入順を保つ
    pub photos: Vec<PhotoAsset>,
}

/// 照合統計（診断用カウント）
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    /// 照合にかけた行数
    pub listing_total: usize,
    /// 写真が1枚以上付いた行数
    pub items_with_photos: usize,
    /// 写真が付かなかった行数
    pub items_without_photos: usize,
    /// 投入された写真枚数
    pub photos_total: usize,
    /// どの行にも対応しなかった写真枚数
    pub photos_unmatched: usize,
    /// 照合キーが重複し先勝ちで畳まれた行数
    pub duplicate_codes: usize,
}

/// 照合結果
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub items: Vec<MatchedItem>,
    pub stats: MatchStats,
}
