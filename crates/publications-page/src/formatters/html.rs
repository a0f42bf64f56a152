//! HTML page rendering.
//!
//! Math in abstracts (`$...$`, `$$...$$`) is left as literal text for MathJax
//! to typeset in the browser.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{Catalog, SectionGroup};
use crate::config::PageOptions;
use crate::models::{Entry, Section};

const STYLESHEET: &str = include_str!("../../assets/page.css");
const SCRIPT: &str = include_str!("../../assets/page.js");

const ICON_STATUS: &str = r#"<svg class="i" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M12 20l9-5-9-5-9 5 9 5z"/><path d="M12 12l9-5-9-5-9 5 9 5z"/></svg>"#;
const ICON_YEAR: &str = r#"<svg class="i" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/></svg>"#;
const ICON_COMMENT: &str = r#"<svg class="i" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M21 15a2 2 0 0 1-2 2H8l-4 4v-4H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/></svg>"#;
const ICON_CITE: &str = r#"<svg class="i" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M14 2H6a2 2 0 0 0-2 2v16l4-4h6a2 2 0 0 0 2-2V4a2 2 0 0 0-2-2z"/></svg>"#;
const ICON_MEDIA: &str = r#"<svg class="i" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M19 21H5a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h10l6 6v8a2 2 0 0 1-2 2z"/></svg>"#;
const ICON_CHEVRON: &str = r#"<svg class="chev" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M9 18l6-6-6-6"/></svg>"#;
const ICON_CARET: &str = r#"<svg class="caret" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M6 9l6 6 6-6"/></svg>"#;

const MATHJAX_CONFIG: &str = r"window.MathJax = {
      tex: { inlineMath: [['$','$'], ['\\(','\\)']], displayMath: [['$$','$$'], ['\\[','\\]']], processEscapes: true },
      options: { skipHtmlTags: ['script','noscript','style','textarea','pre','code'] }
    };";

const NAV_LINKS: &[(&str, &str)] = &[
    ("./index.html", "Home"),
    ("./publications.html", "Publications"),
    ("./teaching.html", "Teaching"),
    ("./cv.html", "CV"),
];

static STRONG_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static STRONG_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b__(.+?)__\b").expect("valid regex"));
static EM_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+?)\*").expect("valid regex"));
static EM_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b_([^_\n]+?)_\b").expect("valid regex"));

/// Tags that may be typed as raw HTML in the CSV, mapped to what they render as.
const ALLOWED_TAGS: &[(&str, &str)] = &[
    ("&lt;em&gt;", "<em>"),
    ("&lt;/em&gt;", "</em>"),
    ("&lt;i&gt;", "<em>"),
    ("&lt;/i&gt;", "</em>"),
    ("&lt;strong&gt;", "<strong>"),
    ("&lt;/strong&gt;", "</strong>"),
    ("&lt;b&gt;", "<strong>"),
    ("&lt;/b&gt;", "</strong>"),
];

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full publications page.
#[must_use]
pub fn render_page(catalog: &Catalog, page: &PageOptions) -> String {
    let mut html = String::with_capacity(16 * 1024);

    let doc_title = if page.owner.is_empty() {
        escape_html(&page.title)
    } else {
        format!("{} | {}", escape_html(&page.title), escape_html(&page.owner))
    };

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str(&format!("  <title>{doc_title}</title>\n"));
    html.push_str(&format!("  <style>\n{STYLESHEET}  </style>\n"));
    html.push_str(&format!("  <script>\n    {MATHJAX_CONFIG}\n  </script>\n"));
    html.push_str(&format!(
        "  <script async src=\"{}\"></script>\n",
        escape_html(&page.mathjax_url)
    ));
    html.push_str("</head>\n<body>\n  <div class=\"wrap\">\n");

    // Header
    html.push_str("    <header>\n");
    html.push_str(&format!(
        "      <div class=\"site-title\">{}</div>\n",
        escape_html(&page.owner)
    ));
    html.push_str("      <nav>\n");
    for (href, label) in NAV_LINKS {
        let current = if *label == "Publications" { " aria-current=\"page\"" } else { "" };
        html.push_str(&format!("        <a href=\"{href}\"{current}>{label}</a>\n"));
    }
    html.push_str("      </nav>\n    </header>\n\n");

    // Masthead
    html.push_str("    <section class=\"masthead\" role=\"region\" aria-label=\"Page header\">\n");
    html.push_str(&format!(
        "      <div class=\"avatar\" style=\"--avatar:url('{}')\" aria-hidden=\"true\"></div>\n",
        escape_html(&page.avatar_url)
    ));
    html.push_str("      <div>\n");
    html.push_str(&format!("        <h1 class=\"page-title\">{}</h1>\n", escape_html(&page.title)));
    html.push_str(&format!(
        "        <p class=\"page-subtle\">{}</p>\n",
        escape_html(&page.subtitle)
    ));
    html.push_str("      </div>\n    </section>\n");

    // Sections
    if !catalog.is_empty() {
        html.push_str(&render_subnav(catalog));
        for group in catalog.groups() {
            html.push_str(&render_section(group));
        }
    }

    html.push_str("  </div>\n\n");
    html.push_str(&format!("  <script>\n{SCRIPT}  </script>\n"));
    html.push_str("</body>\n</html>\n");

    html
}

/// Render the sticky section navigation for the non-empty sections.
#[must_use]
pub fn render_subnav(catalog: &Catalog) -> String {
    let mut html = String::from(
        "\n    <nav class=\"subnav\" aria-label=\"Publications sections\">\n      <div class=\"subnav-links\">\n",
    );
    for group in catalog.groups() {
        html.push_str(&format!(
            "        <a href=\"#{}\">{}</a>\n",
            group.section.anchor(),
            group.section.heading()
        ));
    }
    html.push_str("      </div>\n    </nav>\n");
    html
}

/// Render one section with its heading and entry cards.
#[must_use]
pub fn render_section(group: &SectionGroup) -> String {
    let section: Section = group.section;
    let mut html = String::new();

    html.push_str(&format!(
        "\n    <section class=\"pub-sec\" data-sec=\"{}\">\n",
        section.as_str()
    ));
    html.push_str(&format!("      <h2 id=\"{}\">\n", section.anchor()));
    html.push_str(&format!(
        "        <button class=\"toggle\" aria-expanded=\"true\" aria-controls=\"{}\">\n",
        section.list_id()
    ));
    html.push_str(&format!("          {ICON_CARET}\n          {}\n", section.heading()));
    html.push_str("        </button>\n      </h2>\n");
    html.push_str(&format!("      <div class=\"paper-list\" id=\"{}\">\n", section.list_id()));
    for entry in &group.entries {
        html.push_str(&render_entry(entry));
    }
    html.push_str("      </div>\n    </section>\n");

    html
}

/// Render one entry card.
#[must_use]
pub fn render_entry(entry: &Entry) -> String {
    let mut html = String::new();

    html.push_str(
        "        <article class=\"paper\" itemscope itemtype=\"https://schema.org/ScholarlyArticle\">\n",
    );
    html.push_str("          <div class=\"title-row\">\n");
    html.push_str(&format!(
        "            <h3 class=\"title\" itemprop=\"headline\">{}</h3>\n",
        escape_html(&entry.title)
    ));
    if entry.has_links() {
        html.push_str(&render_links(entry));
    }
    html.push_str("          </div>\n");

    let pills = render_pills(entry);
    if !pills.is_empty() {
        html.push_str(&format!("          <div class=\"meta\">{pills}</div>\n"));
    }

    if let Some(authors) = entry.authors_line() {
        html.push_str(&format!("          <div class=\"authors\">{}</div>\n", escape_html(&authors)));
    }

    if !entry.comment.is_empty() {
        html.push_str(&format!(
            "          <div class=\"comment\">{ICON_COMMENT} {}</div>\n",
            escape_html(&entry.comment)
        ));
    }

    if !entry.r#abstract.is_empty() {
        html.push_str("          <details class=\"abstract\">\n");
        html.push_str(&format!("            <summary>{ICON_CHEVRON} Show abstract</summary>\n"));
        html.push_str(&format!(
            "            <div class=\"abs-body\" itemprop=\"description\">{}</div>\n",
            format_abstract(&entry.r#abstract)
        ));
        html.push_str("          </details>\n");
    }

    html.push_str("        </article>\n");
    html
}

/// Status, year and venue pills; empty fields are omitted.
fn render_pills(entry: &Entry) -> String {
    let mut pills = Vec::new();
    if !entry.status.is_empty() {
        pills.push(format!(
            "<span class=\"pill\" title=\"Status\">{ICON_STATUS} {}</span>",
            escape_html(&entry.status)
        ));
    }
    if !entry.year.is_empty() {
        pills.push(format!(
            "<span class=\"pill\" title=\"Year\">{ICON_YEAR} {}</span>",
            escape_html(&entry.year)
        ));
    }
    if !entry.venue.is_empty() {
        pills.push(format!(
            "<span class=\"pill\" title=\"Venue\">{}</span>",
            escape_html(&entry.venue)
        ));
    }
    pills.join(" ")
}

/// Paper/Slides/DOI buttons plus the Cite and Media controls.
fn render_links(entry: &Entry) -> String {
    let mut html = String::from("            <div class=\"links\">\n");

    let buttons = [
        (&entry.paper_url, entry.paper_label_or_default(), " itemprop=\"url\""),
        (&entry.slides_url, "Slides", ""),
        (&entry.doi_url, "DOI", ""),
    ];
    for (url, label, attrs) in buttons {
        if !url.is_empty() {
            html.push_str(&format!(
                "              <a class=\"btn\" href=\"{}\"{attrs}>{}</a>\n",
                escape_html(url),
                escape_html(label)
            ));
        }
    }

    if !entry.bibtex.is_empty() {
        // A literal `&#10;` in the CSV stands for a line break in the BibTeX.
        let cite = escape_html(&entry.bibtex).replace("&amp;#10;", "&#10;");
        html.push_str("              <details class=\"tool cite\">");
        html.push_str(&format!(
            "<summary class=\"btn\" aria-label=\"Cite this paper\">{ICON_CITE}<span>Cite</span></summary>"
        ));
        html.push_str(&format!(
            "<div class=\"dropdown cite-body\"><pre><code>{cite}</code></pre></div></details>\n"
        ));
    }

    if !entry.media.is_empty() {
        let items: String = entry
            .media
            .iter()
            .map(|item| match &item.url {
                Some(url) => format!(
                    "<a class=\"media-pill\" href=\"{}\" rel=\"noopener\">{}</a>",
                    escape_html(url),
                    escape_html(&item.label)
                ),
                None => format!("<span class=\"media-pill\">{}</span>", escape_html(&item.label)),
            })
            .collect();
        html.push_str("              <details class=\"tool media\">");
        html.push_str(&format!(
            "<summary class=\"btn\" aria-label=\"Media coverage\">{ICON_MEDIA}<span>Media ({})</span></summary>",
            entry.media_count()
        ));
        html.push_str(&format!(
            "<div class=\"dropdown\"><div class=\"media-list\">{items}</div></div></details>\n"
        ));
    }

    html.push_str("            </div>\n");
    html
}

/// Format abstract text as HTML.
///
/// Text is escaped, then `**bold**`/`__bold__` and `*italic*`/`_italic_` become
/// `<strong>`/`<em>`, and literal `<em>`, `<i>`, `<strong>` and `<b>` tags are
/// let through. Math spans are escaped but otherwise left untouched.
#[must_use]
pub fn format_abstract(s: &str) -> String {
    split_math(s)
        .into_iter()
        .map(|segment| match segment {
            Segment::Math(math) => escape_html(math),
            Segment::Text(text) => format_emphasis(text),
        })
        .collect()
}

fn format_emphasis(text: &str) -> String {
    let t = escape_html(text);
    let t = STRONG_STARS.replace_all(&t, "<strong>${1}</strong>");
    let t = STRONG_UNDERSCORES.replace_all(&t, "<strong>${1}</strong>");
    let t = EM_STARS.replace_all(&t, "<em>${1}</em>");
    let t = EM_UNDERSCORES.replace_all(&t, "<em>${1}</em>");

    ALLOWED_TAGS.iter().fold(t.into_owned(), |acc, (escaped, tag)| acc.replace(escaped, tag))
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Math(&'a str),
}

/// Split text into prose and `$`/`$$`-delimited math, delimiters included.
///
/// A `$` preceded by a backslash is literal. An opening delimiter without a
/// closing one is treated as prose.
fn split_math(s: &str) -> Vec<Segment<'_>> {
    let bytes = s.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && !is_escaped(bytes, i) {
            let delim = if bytes.get(i + 1) == Some(&b'$') { "$$" } else { "$" };
            if let Some(close) = find_closing(s, i + delim.len(), delim) {
                if text_start < i {
                    segments.push(Segment::Text(&s[text_start..i]));
                }
                let end = close + delim.len();
                segments.push(Segment::Math(&s[i..end]));
                i = end;
                text_start = end;
                continue;
            }
        }
        i += 1;
    }

    if text_start < s.len() {
        segments.push(Segment::Text(&s[text_start..]));
    }
    segments
}

fn is_escaped(bytes: &[u8], i: usize) -> bool {
    i > 0 && bytes[i - 1] == b'\\'
}

/// Position of the first unescaped `delim` after a non-empty body starting at `from`.
fn find_closing(s: &str, from: usize, delim: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = from;
    while let Some(offset) = s.get(pos..)?.find(delim) {
        let at = pos + offset;
        if at > from && !is_escaped(bytes, at) {
            return Some(at);
        }
        pos = at + 1;
    }
    None
}
