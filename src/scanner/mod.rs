//! 写真フォルダのスキャン
//!
//! フォルダ直下の画像ファイルを集める。バイナリ本体はここでは
//! 読まず、パスとファイル名だけを持ち回る。

use crate::error::{CatalogueError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 写真1枚への参照
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoAsset {
    pub path: PathBuf,
    pub file_name: String,
}

const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

pub fn scan_folder(folder: &Path) -> Result<Vec<PhotoAsset>> {
    if !folder.exists() {
        return Err(CatalogueError::FolderNotFound(folder.display().to_string()));
    }

    let mut photos = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if PHOTO_EXTENSIONS.iter().any(|&e| e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                photos.push(PhotoAsset {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // ファイル名でソート（処理順を安定させる）
    photos.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(photos)
}
