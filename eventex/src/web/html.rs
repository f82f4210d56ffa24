pub(crate) fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for char in value.chars() {
        match char {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(char),
        }
    }
    escaped
}

/// Wraps `content` in the site layout. `title` is escaped, `content` is inserted as is.
pub(crate) fn page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Eventex</title>
</head>
<body>
<nav>
<a href="/">Eventex</a>
<a href="/talks">Talks</a>
<a href="/subscribe">Subscribe</a>
</nav>
<main>
{content}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::{escape, page};

    #[test]
    fn escape_markup() {
        assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;");
    }

    #[test]
    fn keep_plain_text() {
        assert_eq!(escape("Henrique Bastos"), "Henrique Bastos");
    }

    #[test]
    fn escape_page_title_only() {
        let page = page("<Talks>", "<h1>Talks</h1>");

        assert!(page.contains("<title>&lt;Talks&gt; | Eventex</title>"));
        assert!(page.contains("<h1>Talks</h1>"));
    }
}
