use std::collections::HashSet;

/// True if `text` ends with any entry of `formats`. Case-sensitive.
pub fn ends_with<S: AsRef<str>>(text: &str, formats: &[S]) -> bool {
    formats.iter().any(|format| text.ends_with(format.as_ref()))
}

/// Lowercase and collapse every whitespace run into a single space.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop whitespace-separated words whose lowercased form is in `stopwords`.
///
/// Stopwords are matched as given, so they are expected to be lowercase
/// already. Punctuation is kept, so `"the,"` does not match `"the"`.
pub fn remove_stopwords<S: AsRef<str>>(text: &str, stopwords: &[S]) -> String {
    let stopwords: HashSet<&str> = stopwords.iter().map(|s| s.as_ref()).collect();

    text.split_whitespace()
        .filter(|word| !stopwords.contains(word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}
