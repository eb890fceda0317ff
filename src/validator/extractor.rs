//! Stream URL extraction from generated markdown tables

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Index of the stream column once a row is split on `|`; index 0 is the
/// empty cell before the leading delimiter
pub const STREAM_CELL_INDEX: usize = 2;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://[^\s)]+").expect("URL pattern is valid"))
}

/// Extract every HTTP(S) URL found in the stream column of table rows
///
/// Lines that do not start with `|` after trimming, and rows with fewer
/// than three cells, are ignored. Header and separator rows yield nothing
/// because they hold no URLs. Order is preserved and duplicates are kept.
pub fn extract_stream_urls(text: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if !line.starts_with('|') {
            continue;
        }
        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        let Some(stream_cell) = cells.get(STREAM_CELL_INDEX) else {
            continue;
        };
        urls.extend(
            url_regex()
                .find_iter(stream_cell)
                .map(|m| m.as_str().to_string()),
        );
    }
    urls
}

/// Extract stream URLs from every document in order
///
/// A missing document is fatal unless `skip_missing` is set, in which case
/// it is skipped with a warning.
pub async fn collect_urls(paths: &[PathBuf], skip_missing: bool) -> AppResult<Vec<String>> {
    let mut urls = Vec::new();
    for path in paths {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if skip_missing && e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Skipping missing document {}", path.display());
                continue;
            }
            Err(e) => return Err(AppError::io(path, e)),
        };
        let found = extract_stream_urls(&text);
        debug!("Found {} stream URLs in {}", found.len(), path.display());
        urls.extend(found);
    }
    Ok(urls)
}

/// Keep only the first `limit` URLs when a limit is given
pub fn apply_limit(mut urls: Vec<String>, limit: Option<usize>) -> Vec<String> {
    if let Some(limit) = limit {
        urls.truncate(limit);
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        assert_eq!(
            extract_stream_urls("| Name | https://example.com/stream.m3u8 | ... |"),
            vec!["https://example.com/stream.m3u8"]
        );
    }

    #[test]
    fn test_non_table_lines_ignored() {
        let text = "# Canales\nhttps://example.com/a.m3u8\n  Name | https://example.com/b.m3u8 |";
        assert!(extract_stream_urls(text).is_empty());
    }

    #[test]
    fn test_short_rows_ignored() {
        // "|https://..." splits into only two cells
        assert!(extract_stream_urls("|https://example.com/a.m3u8").is_empty());
        assert!(extract_stream_urls("|").is_empty());
    }

    #[test]
    fn test_only_stream_column_is_read() {
        let row = "| https://name.example.com | https://example.com/live.m3u8 | https://web.example.com | https://logo.example.com/x.png |";
        assert_eq!(
            extract_stream_urls(row),
            vec!["https://example.com/live.m3u8"]
        );
    }

    #[test]
    fn test_header_separator_and_placeholder_rows() {
        let table = "| Canal | M3U8 | Web |\n| - | - | - |\n| La 2 | - | https://web.example.com |\n";
        assert!(extract_stream_urls(table).is_empty());
    }

    #[test]
    fn test_multiple_urls_in_cell_and_markdown_links() {
        let row = "  | Canal | [m3u8](https://a.example.com/1.m3u8) - [alt](http://b.example.com/2.m3u8) | - |";
        assert_eq!(
            extract_stream_urls(row),
            vec!["https://a.example.com/1.m3u8", "http://b.example.com/2.m3u8"]
        );
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let text = "| A | https://x.example.com/1 | - |\n\
                    | B | https://x.example.com/2 | - |\n\
                    | C | https://x.example.com/1 | - |\n";
        assert_eq!(
            extract_stream_urls(text),
            vec![
                "https://x.example.com/1",
                "https://x.example.com/2",
                "https://x.example.com/1"
            ]
        );
    }

    #[test]
    fn test_apply_limit() {
        let urls: Vec<String> = (0..10).map(|i| format!("https://example.com/{i}")).collect();
        let limited = apply_limit(urls.clone(), Some(3));
        assert_eq!(limited, urls[..3].to_vec());
        assert_eq!(apply_limit(urls.clone(), None), urls);
        assert_eq!(apply_limit(urls.clone(), Some(50)), urls);
        assert!(apply_limit(urls, Some(0)).is_empty());
    }
}
