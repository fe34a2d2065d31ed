//! Plain-data views of the URL list for frontends.

use std::fmt::Write;

/// `"1 URL"`, `"3 URLs"`, `"0 URLs"`.
pub fn count_label(n: usize) -> String {
    format!("{n} URL{}", if n == 1 { "" } else { "s" })
}

/// Escapes `&`, `<`, `>` and `"` for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// One line per URL, numbered from 1 in list order, followed by the count.
pub fn render_text(urls: &[String]) -> String {
    if urls.is_empty() {
        return "No URLs collected yet.\n".to_string();
    }
    let width = urls.len().to_string().len();
    let mut out = String::new();
    for (i, url) in urls.iter().enumerate() {
        let _ = writeln!(out, "{:>width$}  {url}", i + 1);
    }
    let _ = writeln!(out, "{}", count_label(urls.len()));
    out
}

/// HTML fragment listing the URLs with their 1-based position. Every URL is
/// escaped both as text and in the `title` attribute.
pub fn render_html(urls: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<div class=\"url-count\">{}</div>",
        count_label(urls.len())
    );
    if urls.is_empty() {
        out.push_str("<div class=\"empty-state\">No URLs collected yet.</div>\n");
        return out;
    }
    out.push_str("<div class=\"url-list\">\n");
    for (i, url) in urls.iter().enumerate() {
        let url = escape_html(url);
        let _ = writeln!(
            out,
            "  <div class=\"url-item\"><span class=\"url-index\">{}</span><span class=\"url-text\" title=\"{url}\">{url}</span></div>",
            i + 1
        );
    }
    out.push_str("</div>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 URLs");
        assert_eq!(count_label(1), "1 URL");
        assert_eq!(count_label(12), "12 URLs");
    }

    #[test]
    fn escape_html_covers_markup_chars() {
        assert_eq!(
            escape_html(r#"https://x.example/?q=<b>"a"&c='d'"#),
            "https://x.example/?q=&lt;b&gt;&quot;a&quot;&amp;c='d'"
        );
    }

    #[test]
    fn text_view_numbers_from_one() {
        let out = render_text(&urls(&["https://a.example/", "https://b.example/"]));
        assert_eq!(out, "1  https://a.example/\n2  https://b.example/\n2 URLs\n");
    }

    #[test]
    fn text_view_aligns_indexes() {
        let list: Vec<String> = (0..10).map(|i| format!("https://e.example/{i}")).collect();
        let out = render_text(&list);
        assert!(out.starts_with(" 1  https://e.example/0\n"));
        assert!(out.contains("\n10  https://e.example/9\n"));
    }

    #[test]
    fn text_view_empty_state() {
        assert_eq!(render_text(&[]), "No URLs collected yet.\n");
    }

    #[test]
    fn html_view_escapes_urls() {
        let out = render_html(&urls(&["not a url <script>alert(1)</script>"]));
        assert!(out.contains("1 URL</div>"));
        assert!(!out.contains("<script>"));
        assert!(out.contains(
            "title=\"not a url &lt;script&gt;alert(1)&lt;/script&gt;\""
        ));
        assert!(out.contains("<span class=\"url-index\">1</span>"));
    }

    #[test]
    fn html_view_empty_state() {
        let out = render_html(&[]);
        assert!(out.contains("0 URLs"));
        assert!(out.contains("empty-state"));
        assert!(!out.contains("url-item"));
    }
}
