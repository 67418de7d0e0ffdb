//! Server-side rendering of the quote board page.
//!
//! [`render_index`] is a pure function of the quote list: no store access,
//! no I/O.

use quotes_db::models::quote::Quote;

/// Render the full list page for `quotes`, in the order given.
pub fn render_index(quotes: &[Quote]) -> String {
    let items: String = quotes
        .iter()
        .map(|quote| {
            format!(
                "      <li data-id=\"{}\"><span>{}</span>: <span>{}</span></li>\n",
                quote.id,
                escape_html(&quote.name),
                escape_html(&quote.quote),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>Star Wars Quote App</title>
    <link rel="stylesheet" href="/styles.css">
  </head>
  <body>
    <h1>May the Force be with you.</h1>

    <form action="/quotes" method="POST">
      <input type="text" placeholder="name" name="name">
      <input type="text" placeholder="quote" name="quote">
      <button type="submit">Submit</button>
    </form>

    <div>
      <h2>Replace last Yoda's quote with a quote written by Darth Vadar</h2>
      <button id="update">Darth Vadar invades!</button>
    </div>

    <div>
      <h2>Delete Elmer's quote</h2>
      <button id="delete">Delete first Elmer's quote</button>
    </div>

    <ul class="quotes">
{items}    </ul>

    <script src="/main.js"></script>
  </body>
</html>
"#
    )
}

/// Escape the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: i64, name: &str, text: &str) -> Quote {
        Quote {
            id,
            name: name.into(),
            quote: text.into(),
        }
    }

    #[test]
    fn empty_list_renders_no_items() {
        let html = render_index(&[]);
        assert!(html.contains(r#"<ul class="quotes">"#));
        assert!(!html.contains("<li data-id"));
    }

    #[test]
    fn quotes_render_in_given_order() {
        let html = render_index(&[quote(1, "Leia", "Help me"), quote(2, "Han", "I know")]);
        let leia = html.find("Leia").unwrap();
        let han = html.find("Han").unwrap();
        assert!(leia < han);
        assert!(html.contains(r#"<li data-id="1"><span>Leia</span>: <span>Help me</span></li>"#));
    }

    #[test]
    fn record_text_is_escaped() {
        let html = render_index(&[quote(1, "<b>Vader</b>", "\"Fear\" & 'anger'")]);
        assert!(html.contains("&lt;b&gt;Vader&lt;/b&gt;"));
        assert!(html.contains("&quot;Fear&quot; &amp; &#39;anger&#39;"));
        assert!(!html.contains("<b>Vader"));
    }

    #[test]
    fn page_wires_form_buttons_and_script() {
        let html = render_index(&[]);
        assert!(html.contains(r#"<form action="/quotes" method="POST">"#));
        assert!(html.contains(r#"id="update""#));
        assert!(html.contains(r#"id="delete""#));
        assert!(html.contains(r#"<script src="/main.js"></script>"#));
    }
}
