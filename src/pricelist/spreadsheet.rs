//! スプレッドシート（xlsx/xls/ods）のパース
//!
//! calamineで先頭シートを読み、セルを文字列グリッドに落とす。
//! 数値セルは後段の数値化で元に戻るため、整数値は小数点なしで
//! 文字列化する（コード列が`8610401992.0`にならないように）。

use crate::error::{CatalogueError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// バイト列からワークブックを開き、先頭シートをグリッド化する
pub fn parse_spreadsheet(data: &[u8]) -> Result<Vec<Vec<String>>> {
    let cursor = Cursor::new(data.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| CatalogueError::SpreadsheetRead(format!("ワークブックを開けません: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CatalogueError::SpreadsheetRead("シートがありません".to_string()))?
        .map_err(|e| CatalogueError::SpreadsheetRead(format!("シート読み込みエラー: {}", e)))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format_number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(8610401992.0), "8610401992");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String(" A1 ".into())), "A1");
        assert_eq!(cell_to_string(&Data::Float(12.5)), "12.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
    }

    #[test]
    fn test_parse_invalid_bytes() {
        assert!(parse_spreadsheet(b"not a workbook").is_err());
    }
}
