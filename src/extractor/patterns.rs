// file: src/extractor/patterns.rs
// description: compiled regex patterns for path cleanup and html metadata extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Directory segment written by the upstream ingestion job
    pub static ref DATE_PREFIX: Regex = Regex::new(
        r"search_results_[0-9]{8}_[0-9]{6}/"
    ).expect("DATE_PREFIX regex is valid");

    // Document metadata, first occurrence only
    pub static ref TITLE: Regex = Regex::new(
        r"<title[^>]*>(.*?)</title>"
    ).expect("TITLE regex is valid");

    pub static ref META_DESCRIPTION: Regex = Regex::new(
        r#"<meta[^>]*name="description"[^>]*content="([^"]*)"[^>]*>"#
    ).expect("META_DESCRIPTION regex is valid");

    pub static ref HEAD: Regex = Regex::new(
        r"(?s)<head(?:\s[^>]*)?>(.*?)</head>"
    ).expect("HEAD regex is valid");

    pub static ref PARAGRAPH: Regex = Regex::new(
        r"(?s)<p(?:\s[^>]*)?>(.*?)</p>"
    ).expect("PARAGRAPH regex is valid");

    // Cleanup
    pub static ref TAG: Regex = Regex::new(
        r"<[^>]*>"
    ).expect("TAG regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");
}

pub fn strip_date_prefix(path: &str) -> String {
    DATE_PREFIX.replace_all(path, "").into_owned()
}

/// Removes markup and folds whitespace runs into single spaces.
pub fn strip_tags(fragment: &str) -> String {
    let text = TAG.replace_all(fragment, "");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_prefix_pattern() {
        assert!(DATE_PREFIX.is_match("search_results_20241022_214351/report"));
        assert!(!DATE_PREFIX.is_match("search_results_2024102_214351/report"));
        assert!(!DATE_PREFIX.is_match("search_results_20241022_214351"));
    }

    #[test]
    fn test_strip_date_prefix_anywhere() {
        assert_eq!(
            strip_date_prefix("archive/search_results_20241022_214351/report"),
            "archive/report"
        );
        assert_eq!(strip_date_prefix("plain/report"), "plain/report");
    }

    #[test]
    fn test_title_pattern_first_match() {
        let html = "<title lang=\"en\">First</title><title>Second</title>";
        let captures = TITLE.captures(html).unwrap();
        assert_eq!(&captures[1], "First");
    }

    #[test]
    fn test_meta_description_pattern() {
        let html = r#"<meta name="description" content="A summary">"#;
        let captures = META_DESCRIPTION.captures(html).unwrap();
        assert_eq!(&captures[1], "A summary");
        assert!(!META_DESCRIPTION.is_match(r#"<meta name="keywords" content="a, b">"#));
    }

    #[test]
    fn test_paragraph_pattern_skips_similar_tags() {
        let html = "<pre>code</pre><p class=\"lead\">Body</p>";
        let captures = PARAGRAPH.captures(html).unwrap();
        assert_eq!(&captures[1], "Body");
    }

    #[test]
    fn test_head_pattern_spans_lines() {
        let html = "<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<header>x</header>";
        let captures = HEAD.captures(html).unwrap();
        assert!(captures[1].contains("charset"));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("Some <b>bold</b>\n   and <a href=\"#\">linked</a> text"),
            "Some bold and linked text"
        );
    }
}
