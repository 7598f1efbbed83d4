//! Shared page chrome.

use crate::flash::{FlashLevel, FlashMessage};

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the site layout, with an optional flash banner.
pub fn page(title: &str, flash: Option<&FlashMessage>, body: &str) -> String {
    let banner = flash
        .map(|f| {
            let class = match f.level {
                FlashLevel::Success => "flash flash-success",
                FlashLevel::Error => "flash flash-error",
            };
            format!(
                "<div class=\"{class}\" role=\"status\">{}</div>",
                escape_html(&f.text)
            )
        })
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} · Wanderstay</title>\n</head>\n<body>\n\
         <nav><a href=\"/listings\">Wanderstay</a> <a href=\"/listings/new\">Add a listing</a></nav>\n\
         {banner}\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape_html(r#"<b a="1">&'x'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;x&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn page_renders_flash_banner() {
        let flash = FlashMessage {
            level: FlashLevel::Success,
            text: "Listing updated!".to_string(),
        };
        let html = page("Listings", Some(&flash), "<p>body</p>");
        assert!(html.contains("flash-success"));
        assert!(html.contains("Listing updated!"));
    }

    #[test]
    fn page_title_is_escaped() {
        let html = page("<script>", None, "");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
