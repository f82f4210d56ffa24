use lazy_regex::{Lazy, Regex, lazy_regex};

static SEPARATORS: Lazy<Regex> = lazy_regex!(r"[^a-z0-9]+");

/// Lowercase ASCII words joined by `-`. Non-ASCII letters are dropped.
pub(crate) fn slugify(value: &str) -> String {
    let ascii = value
        .to_lowercase()
        .chars()
        .filter(|char| char.is_ascii() || !char.is_alphanumeric())
        .collect::<String>();

    SEPARATORS.replace_all(&ascii, "-").trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn join_words_with_hyphens() {
        assert_eq!(slugify("Henrique Bastos"), "henrique-bastos");
        assert_eq!(slugify("  Python/Django developer! "), "python-django-developer");
    }

    #[test]
    fn drop_non_ascii_letters() {
        assert_eq!(slugify("Vinícius Faria"), "vincius-faria");
    }

    #[test]
    fn nothing_left() {
        assert_eq!(slugify("!!!"), "");
    }
}
