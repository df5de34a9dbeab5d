// src/tokenize.rs

//! Line tokenization for delimiter-separated text.
//!
//! One line in, an ordered list of cells out. There is no quoting and no
//! escaping: every occurrence of the delimiter separates two cells, even
//! inside what a human would read as a quoted field.

/// Split one line (no trailing newline) into its delimiter-separated cells.
///
/// Adjacent delimiters produce empty cells, so `"a,,b"` has three. A
/// trailing delimiter does not produce a trailing empty cell, and an empty
/// line produces no cells at all rather than a single empty one — both fall
/// out of reading token-by-token until the buffer runs dry, and row width
/// validation depends on the empty-line case staying zero.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<String> = line.split(delimiter).map(String::from).collect();
    if line.ends_with(delimiter) {
        tokens.pop();
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas() {
        assert_eq!(split_line("a,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn splits_on_custom_delimiter() {
        assert_eq!(split_line("a;b;c", ';'), vec!["a", "b", "c"]);
        // commas are ordinary characters under another delimiter
        assert_eq!(split_line("a,b;c", ';'), vec!["a,b", "c"]);
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert_eq!(split_line("", ','), Vec::<String>::new());
    }

    #[test]
    fn adjacent_delimiters_yield_empty_tokens() {
        assert_eq!(split_line("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_line(",x", ','), vec!["", "x"]);
    }

    #[test]
    fn trailing_delimiter_yields_no_trailing_token() {
        assert_eq!(split_line("a,b,", ','), vec!["a", "b"]);
        assert_eq!(split_line(",", ','), vec![""]);
        assert_eq!(split_line("a,,", ','), vec!["a", ""]);
    }

    #[test]
    fn single_token_line() {
        assert_eq!(split_line("alone", ','), vec!["alone"]);
    }

    #[test]
    fn quotes_are_not_special() {
        assert_eq!(
            split_line(r#""a,b",c"#, ','),
            vec![r#""a"#, r#"b""#, "c"]
        );
    }
}
