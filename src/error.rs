use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("価格リストが空、またはデータ行がありません: {0}")]
    EmptyPriceFile(String),

    #[error("コード列が見つかりません。検出した列: {found}")]
    MissingCodeColumn { found: String },

    #[error("スプレッドシート読み込みエラー: {0}")]
    SpreadsheetRead(String),

    #[error("写真が見つかりません: {0}")]
    NoPhotosFound(String),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
