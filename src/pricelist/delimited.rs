//! 区切りテキスト（CSV/TSV等）のパース
//!
//! 区切り文字は自動判定する。候補はタブ・カンマ・セミコロン・
//! パイプの順。先頭数行のうち最長の行を各候補で分割し、最も
//! 列数が多くなる候補を採用する（同数なら先の候補が勝つ）。

const DELIMITER_CANDIDATES: &[char] = &['\t', ',', ';', '|'];

/// 区切り判定に使うサンプル行数
const DETECTION_SAMPLE_LINES: usize = 10;

/// テキスト全体を行×列のグリッドに展開する
pub fn parse_delimited(content: &str) -> Vec<Vec<String>> {
    let delimiter = detect_delimiter(content);
    content
        .lines()
        .map(|line| split_line(line, delimiter))
        .collect()
}

/// 区切り文字を自動判定する
pub fn detect_delimiter(content: &str) -> char {
    let sample = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(DETECTION_SAMPLE_LINES)
        .max_by_key(|l| l.len())
        .unwrap_or("");

    let mut best = DELIMITER_CANDIDATES[0];
    let mut best_count = 0usize;
    for &candidate in DELIMITER_CANDIDATES {
        let count = split_line(sample, candidate).len();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// 1行を区切り文字で分割する（ダブルクォート対応）
///
/// `"` は引用状態をトグルし、引用中の区切り文字はリテラル扱い。
/// フィールドは前後の空白を落として返す。
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == delimiter && !in_quotes {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
    }
    fields.push(field.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_comma() {
        assert_eq!(detect_delimiter("a,b,c\nd,e,f"), ',');
    }

    #[test]
    fn test_detect_tab_wins_with_more_fields() {
        // 最長行がタブ区切りで列数も多い場合、タブが選ばれる
        let content = "a,b\nCODE\tDESCRIPTION\tPRICE\tSTOCK\n";
        assert_eq!(detect_delimiter(content), '\t');
    }

    #[test]
    fn test_detect_semicolon_and_pipe() {
        assert_eq!(detect_delimiter("a;b;c;d\n"), ';');
        assert_eq!(detect_delimiter("a|b|c|d\n"), '|');
    }

    #[test]
    fn test_detect_tie_prefers_candidate_order() {
        // どの候補でも1列にしかならない場合はタブ（先頭候補）
        assert_eq!(detect_delimiter("abc\ndef"), '\t');
    }

    #[test]
    fn test_split_quoted_delimiter_literal() {
        let rows = parse_delimited("code,description\nA1,\"Widget, large\"\n");
        assert_eq!(rows[1], vec!["A1", "Widget, large"]);
    }

    #[test]
    fn test_split_trims_fields() {
        let rows = parse_delimited("a , b ,c\n");
        assert_eq!(rows[0], vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_delimited("").is_empty());
    }
}
