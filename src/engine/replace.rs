use regex::{Captures, Regex};

/// Replace every match of `pattern` with `replacement`, capitalizing the
/// replacement when the matched word starts with an uppercase letter.
///
/// Only the first character of a match is inspected, so `HE` becomes `They`
/// rather than `THEY`.
pub fn safe_replace(text: &str, pattern: &Regex, replacement: &str) -> String {
    safe_replacen(text, pattern, 0, replacement)
}

/// Like [`safe_replace`] but stops after `limit` matches. A limit of 0
/// replaces all of them.
pub fn safe_replacen(text: &str, pattern: &Regex, limit: usize, replacement: &str) -> String {
    pattern
        .replacen(text, limit, |caps: &Captures| match_case(&caps[0], replacement))
        .into_owned()
}

fn match_case(matched: &str, replacement: &str) -> String {
    if matched.chars().next().is_some_and(|c| c.is_uppercase()) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_regex::regex;

    #[test]
    fn test_lowercase_match_keeps_replacement() {
        let re = regex!(r"\b(he|she)\b"i);
        assert_eq!(safe_replace("then she left", re, "they"), "then they left");
    }

    #[test]
    fn test_capitalized_match_capitalizes_replacement() {
        let re = regex!(r"\b(he|she)\b"i);
        assert_eq!(safe_replace("She left. He stayed.", re, "xe"), "Xe left. Xe stayed.");
    }

    #[test]
    fn test_all_caps_match_only_capitalizes_first_letter() {
        let re = regex!(r"\b(he|she)\b"i);
        assert_eq!(safe_replace("HE SAID NO", re, "they"), "They SAID NO");
    }

    #[test]
    fn test_replaces_globally() {
        let re = regex!(r"\b(him|her)\b"i);
        assert_eq!(
            safe_replace("him, her, Him and her", re, "them"),
            "them, them, Them and them"
        );
    }

    #[test]
    fn test_limit_stops_early() {
        let re = regex!(r"\b(him|her)\b"i);
        assert_eq!(safe_replacen("him and him", re, 1, "them"), "them and him");
    }

    #[test]
    fn test_empty_and_unmatched_input() {
        let re = regex!(r"\b(he|she)\b"i);
        assert_eq!(safe_replace("", re, "they"), "");
        assert_eq!(safe_replace("Nothing to see.", re, "they"), "Nothing to see.");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("they were"), "They were");
        assert_eq!(capitalize(""), "");
    }
}
