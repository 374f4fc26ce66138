//! HTML rendering for the link reports.
//!
//! Converts a [`Grouping`] into nested collapsible lists and wraps the result
//! in a fixed HTML5 page. File names, domains and URLs are inserted verbatim:
//! nothing is HTML-escaped, so a name containing `<`, `&` or `'` ends up in
//! the markup exactly as it appears on disk or in the PDF.

use crate::grouping::{GroupOrder, Grouping};

/// Title of the report grouped by file.
pub const BY_FILE_TITLE: &str = "PDFs";
/// Title of the report grouped by domain.
pub const BY_DOMAIN_TITLE: &str = "Domains";
/// Title of the landing page.
pub const INDEX_TITLE: &str = "Home";

/// Stylesheet shared by every page.
const PAGE_STYLE: &str = r#"    <style>
        li.collapsible {
            list-style: none;
        }
        li.collapsible > .toggle {
            cursor: pointer;
            display: inline-block;
            width: 1em;
        }
    </style>
"#;

/// Every `li.collapsible` starts with its nested lists hidden and gains a
/// leading `+`/`-` toggle that shows or hides its direct child list.
const PAGE_SCRIPT: &str = r#"    <script>
        document.querySelectorAll('li.collapsible').forEach(function (el) {
            var toggle = document.createElement('span');
            toggle.className = 'toggle';
            toggle.textContent = '+';
            el.insertBefore(toggle, el.firstChild);
            el.querySelectorAll('ul').forEach(function (ul) {
                ul.style.display = 'none';
            });
            toggle.addEventListener('click', function () {
                var expanded = toggle.textContent === '-';
                Array.prototype.forEach.call(el.children, function (child) {
                    if (child.tagName === 'UL') {
                        child.style.display = expanded ? 'none' : '';
                    }
                });
                toggle.textContent = expanded ? '+' : '-';
            });
        });
    </script>
"#;

/// `<a href='target'>target</a>`
pub fn make_link(target: &str) -> String {
    format!("<a href='{target}'>{target}</a>")
}

/// A list item holding a link to `target`.
pub fn make_list_link(target: &str) -> String {
    format!("<li>{}</li>", make_link(target))
}

/// A collapsible section rendered as `title (count)` over a nested list.
pub fn make_section(title: &str, content: &str, count: usize) -> String {
    format!(
        r#"
    <li class="collapsible">
        <b>{title} ({count})</b><br />
        <ul>
            {content}
        </ul>
    </li>
    "#
    )
}

/// Wrap body markup in the page shared by all reports.
///
/// `title` is used both for `<title>` and for the `<h2>` heading.
pub fn render_page(title: &str, body: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str(&format!("    <title>{title}</title>\n\n"));
    html.push_str(PAGE_STYLE);
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("    <h2>{title}</h2>\n\n"));
    html.push_str(&format!("    <ul>\n        {body}\n    </ul>\n\n"));
    html.push_str(PAGE_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

/// Render the nested list body for a grouping (without the page wrapper).
///
/// The level that holds file names is rendered as links to the files;
/// domains are plain text. Outer sections count their inner keys, inner
/// sections count their URLs.
pub fn render_grouping_body(grouping: &Grouping) -> String {
    let (outer_is_file, inner_is_file) = match grouping.order() {
        GroupOrder::ByFile => (true, false),
        GroupOrder::ByDomain => (false, true),
    };

    grouping
        .iter()
        .map(|(outer, inner)| {
            let content: String = inner
                .iter()
                .map(|(key, urls)| {
                    let links: String = urls.iter().map(|u| make_list_link(u)).collect();
                    make_section(&key_title(key, inner_is_file), &links, urls.len())
                })
                .collect();
            make_section(&key_title(outer, outer_is_file), &content, inner.len())
        })
        .collect()
}

/// Render a complete report page for a grouping.
///
/// The title follows the grouping order: [`BY_FILE_TITLE`] or
/// [`BY_DOMAIN_TITLE`].
pub fn render_grouping(grouping: &Grouping) -> String {
    let title = match grouping.order() {
        GroupOrder::ByFile => BY_FILE_TITLE,
        GroupOrder::ByDomain => BY_DOMAIN_TITLE,
    };
    render_page(title, &render_grouping_body(grouping))
}

/// Render the landing page: a flat list of links to `pages`, in order.
pub fn render_index(pages: &[&str]) -> String {
    let body: String = pages.iter().map(|p| make_list_link(p)).collect();
    render_page(INDEX_TITLE, &body)
}

fn key_title(key: &str, is_file: bool) -> String {
    if is_file {
        make_link(key)
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LinkRecord;

    fn records() -> Vec<LinkRecord> {
        vec![
            LinkRecord::new("b.pdf", "https://a.com/x"),
            LinkRecord::new("b.pdf", "https://b.com/y"),
            LinkRecord::new("a.pdf", "https://b.com/z"),
            LinkRecord::new("b.pdf", "https://a.com/w"),
        ]
    }

    #[test]
    fn make_link_uses_single_quotes() {
        assert_eq!(
            make_link("https://x.org/"),
            "<a href='https://x.org/'>https://x.org/</a>"
        );
    }

    #[test]
    fn make_list_link_wraps_in_li() {
        assert_eq!(make_list_link("a.pdf"), "<li><a href='a.pdf'>a.pdf</a></li>");
    }

    #[test]
    fn make_section_title_and_count() {
        let s = make_section("x.org", "<li>1</li>", 1);
        assert!(s.contains(r#"<li class="collapsible">"#));
        assert!(s.contains("<b>x.org (1)</b><br />"));
        assert!(s.contains("<ul>\n            <li>1</li>\n        </ul>"));
    }

    #[test]
    fn render_page_uses_title_twice() {
        let page = render_page("PDFs", "<li>x</li>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert_eq!(page.matches("PDFs").count(), 2);
        assert!(page.contains("<title>PDFs</title>"));
        assert!(page.contains("<h2>PDFs</h2>"));
        assert!(page.contains("<ul>\n        <li>x</li>\n    </ul>"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn render_page_keeps_style_and_script() {
        let page = render_page("T", "");
        assert!(page.contains(PAGE_STYLE));
        assert!(page.contains(PAGE_SCRIPT));
        assert!(page.contains("list-style: none;"));
        assert!(page.contains("toggle.textContent = '+';"));
        assert!(page.contains("expanded ? '+' : '-'"));
        assert!(page.find("</style>").unwrap() < page.find("<body>").unwrap());
        assert!(page.find("<script>").unwrap() > page.find("</ul>").unwrap());
    }

    #[test]
    fn braces_in_body_are_kept_literally() {
        let page = render_page("T", "<li>{body} {title}</li>");
        assert!(page.contains("<li>{body} {title}</li>"));
        assert!(page.contains("<title>T</title>"));
    }

    #[test]
    fn empty_grouping_renders_empty_body() {
        let g = Grouping::by_file(&[]);
        assert_eq!(render_grouping_body(&g), "");
        let page = render_grouping(&g);
        assert!(page.contains("<title>PDFs</title>"));
        assert!(!page.contains("collapsible\">"));
    }

    #[test]
    fn by_file_sections_sorted_and_counted() {
        let g = Grouping::by_file(&records());
        let body = render_grouping_body(&g);

        let a = body.find("<b><a href='a.pdf'>a.pdf</a> (1)</b>").unwrap();
        let b = body.find("<b><a href='b.pdf'>b.pdf</a> (2)</b>").unwrap();
        assert!(a < b);

        assert!(body.contains("<b>a.com (2)</b>"));
        assert_eq!(body.matches("<b>b.com (1)</b>").count(), 2);
    }

    #[test]
    fn by_file_inner_urls_in_first_seen_order() {
        let g = Grouping::by_file(&records());
        let body = render_grouping_body(&g);
        let x = body.find("https://a.com/x").unwrap();
        let w = body.find("https://a.com/w").unwrap();
        assert!(x < w);
    }

    #[test]
    fn by_domain_links_files_not_domains() {
        let g = Grouping::by_domain(&records());
        let page = render_grouping(&g);
        assert!(page.contains("<title>Domains</title>"));
        assert!(page.contains("<b>a.com (1)</b>"));
        assert!(page.contains("<b>b.com (2)</b>"));
        assert!(page.contains("<b><a href='b.pdf'>b.pdf</a> (2)</b>"));
        assert!(!page.contains("href='a.com'"));
    }

    #[test]
    fn empty_domain_section_sorts_first() {
        let recs = vec![
            LinkRecord::new("a.pdf", "https://a.com/"),
            LinkRecord::new("a.pdf", "mailto:test@example.com"),
        ];
        let body = render_grouping_body(&Grouping::by_domain(&recs));
        let empty = body.find("<b> (1)</b>").unwrap();
        let a = body.find("<b>a.com (1)</b>").unwrap();
        assert!(empty < a);
    }

    #[test]
    fn render_index_lists_pages_in_order() {
        let page = render_index(&["pdfs.html", "domains.html"]);
        assert!(page.contains("<h2>Home</h2>"));
        let pdfs = page.find("<li><a href='pdfs.html'>pdfs.html</a></li>").unwrap();
        let domains = page
            .find("<li><a href='domains.html'>domains.html</a></li>")
            .unwrap();
        assert!(pdfs < domains);
    }

    #[test]
    fn html_significant_characters_are_not_escaped() {
        let recs = vec![LinkRecord::new("a&b<1>.pdf", "https://x.org/?q=1&r=\"2\"")];
        let body = render_grouping_body(&Grouping::by_file(&recs));
        assert!(body.contains("<a href='a&b<1>.pdf'>a&b<1>.pdf</a>"));
        assert!(body.contains("https://x.org/?q=1&r=\"2\""));
        assert!(!body.contains("&amp;"));
    }
}
