/// Concatenates page text in document order and lower-cases the result.
/// Pages are newline-separated so a page boundary never fuses two words.
/// An empty document normalizes to an empty string.
pub fn normalize_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let joined: Vec<&str> = pages.iter().map(AsRef::as_ref).collect();
    joined.join("\n").to_lowercase()
}

/// Whitespace-delimited word count of normalized text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_joined_in_order_and_lowercased() {
        let pages = ["Senior PYTHON Engineer", "Projects: Git"];
        assert_eq!(
            normalize_pages(&pages),
            "senior python engineer\nprojects: git"
        );
    }

    #[test]
    fn test_page_boundary_never_merges_words() {
        let pages = ["Skills: alpha", "beta\u{c}gamma", "delta"];
        let raw_words: usize = pages.iter().copied().map(word_count).sum();

        let text = normalize_pages(&pages);
        assert_eq!(word_count(&text), raw_words);
        assert!(!text.contains("alphabeta"));
        assert!(!text.contains("gammadelta"));
    }

    #[test]
    fn test_empty_document_is_empty_string() {
        let none: [&str; 0] = [];
        assert_eq!(normalize_pages(&none), "");
        assert_eq!(normalize_pages(&[""]), "");
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("python  java\n\tgit\r\nsql "), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n"), 0);
    }
}
