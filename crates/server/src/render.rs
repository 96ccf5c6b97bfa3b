//! Shared page layout and formatting helpers.
//!
//! Templates are maud markup built at compile time; dynamic content is
//! HTML-escaped automatically. CSS is inlined so pages work even when no
//! static directory is configured.

use chrono::{DateTime, FixedOffset};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Wrap page content in the common layout (header, nav, footer).
pub fn base(page_title: &str, inner: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) " — snipbin" }
                link rel="stylesheet" href="/static/main.css";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="site-header" {
                    h1 { a href="/" { "snipbin" } }
                    nav {
                        a href="/" { "Home" }
                        a href="/snippet/create" { "New snippet" }
                    }
                }
                main { (inner) }
                footer class="site-footer" {
                    "Snippets expire automatically."
                }
            }
        }
    }
}

/// Standalone error page.
pub fn error_page(title: &str, message: &str) -> Markup {
    base(
        title,
        html! {
            section class="error-page" {
                h2 { (title) }
                p { (message) }
                a href="/" { "Back to snipbin" }
            }
        },
    )
}

/// Format a snippet timestamp for display, e.g. "23 Aug 2026 at 14:05".
///
/// The offset baked into the value is the store's configured display
/// timezone, so no further conversion happens here.
pub fn human_ts(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%d %b %Y at %H:%M").to_string()
}

const PAGE_CSS: &str = r#"
:root{--bg:#fafafa;--fg:#1a1a1a;--fg2:#555;--accent:#0a7d4f;--border:#ddd;--mono:ui-monospace,SFMono-Regular,Menlo,monospace}
*{box-sizing:border-box;margin:0}
body{background:var(--bg);color:var(--fg);font:16px/1.5 system-ui,sans-serif;max-width:760px;margin:0 auto;padding:0 1rem}
.site-header{display:flex;align-items:baseline;justify-content:space-between;padding:1.25rem 0;border-bottom:1px solid var(--border)}
.site-header h1 a{color:var(--accent);text-decoration:none;font-size:1.4rem}
.site-header nav a{margin-left:1rem;color:var(--fg2);text-decoration:none}
.site-header nav a:hover{color:var(--accent)}
main{padding:1.5rem 0;min-height:60vh}
table{width:100%;border-collapse:collapse;margin-top:1rem}
th,td{text-align:left;padding:.5rem .6rem;border-bottom:1px solid var(--border)}
td a{color:var(--accent);text-decoration:none}
td a:hover{text-decoration:underline}
.snippet{border:1px solid var(--border);border-radius:6px;margin-top:1rem;background:#fff}
.snippet-meta{display:flex;justify-content:space-between;padding:.6rem .8rem;border-bottom:1px solid var(--border);color:var(--fg2);font-size:.85rem}
.snippet pre{padding:.8rem;overflow-x:auto;font-family:var(--mono);font-size:.9rem;white-space:pre-wrap}
.snippet-footer{display:flex;justify-content:space-between;padding:.6rem .8rem;border-top:1px solid var(--border);color:var(--fg2);font-size:.8rem}
form div{margin-bottom:1rem}
label{display:block;font-weight:600;margin-bottom:.25rem}
input[type=text],textarea{width:100%;padding:.5rem;border:1px solid var(--border);border-radius:4px;font:inherit}
textarea{min-height:10rem;font-family:var(--mono)}
.field-error{color:#b00020;font-size:.85rem;margin-top:.25rem}
button{background:var(--accent);color:#fff;border:0;border-radius:4px;padding:.5rem 1.2rem;font:inherit;cursor:pointer}
.empty{color:var(--fg2);margin-top:1rem}
.error-page{text-align:center;padding:3rem 0}
.error-page a{color:var(--accent)}
.site-footer{padding:1rem 0;border-top:1px solid var(--border);color:var(--fg2);font-size:.85rem}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn base_escapes_dynamic_content() {
        let markup = base("<script>", html! { p { "hi" } });
        let rendered = markup.into_string();
        assert!(rendered.contains("&lt;script&gt;"));
        assert!(!rendered.contains("<script>"));
    }

    #[test]
    fn human_ts_uses_embedded_offset() {
        let tz = FixedOffset::east_opt(6 * 3600).unwrap();
        let ts = tz.with_ymd_and_hms(2026, 8, 23, 14, 5, 0).unwrap();
        assert_eq!(human_ts(&ts), "23 Aug 2026 at 14:05");
    }
}
