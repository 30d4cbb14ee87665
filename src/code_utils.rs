use egui_code_editor::Syntax;
use regex::Regex;
use std::sync::LazyLock;

// Tag-pair containment: opening tag, anything (newlines included), matching closing tag.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = (1..=6)
        .map(|n| format!(r"<h{n}(?:\s[^>]*)?>.*</h{n}>"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?is){alternatives}")).expect("heading pattern")
});

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>.*</p>").expect("paragraph pattern"));

static HIDDEN_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:head|style|script)\b[^>]*>.*?</(?:head|style|script)>")
        .expect("hidden block pattern")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"));

pub fn has_heading(code: &str) -> bool {
    HEADING.is_match(code)
}

pub fn has_paragraph(code: &str) -> bool {
    PARAGRAPH.is_match(code)
}

/// Correctness predicate of the fix-code challenge. Deliberately shallow: it
/// only looks for a closed heading and a closed paragraph anywhere in the text.
pub fn is_fixed_markup(code: &str) -> bool {
    has_heading(code) && has_paragraph(code)
}

/// Plain-text rendering of the playground markup: hidden blocks and tags are
/// dropped, a few common entities decoded, blank lines collapsed.
pub fn strip_tags(code: &str) -> String {
    let visible = HIDDEN_BLOCK.replace_all(code, "");
    let text = ANY_TAG.replace_all(&visible, "\n");
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn html_syntax() -> Syntax {
    Syntax::new("html")
        .with_comment_multiline(["<!--", "-->"])
        .with_keywords([
            "html", "head", "body", "title", "style", "h1", "h2", "h3", "p", "div", "span", "img",
            "a", "ul", "ol", "li", "section", "header", "footer", "button",
        ])
        .with_types([
            "color", "background-color", "font-size", "margin", "padding", "border", "display",
            "width", "height",
        ])
}
