//! Markdown rendering of assistant replies.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::models::{ContentBlock, MessageContent};

/// URL schemes allowed in link and image destinations.
const SAFE_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Renders markdown to HTML. Raw HTML in the source is escaped, not passed
/// through, and link or image destinations with an unsafe scheme are blanked.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Keeps relative URLs and those with a safe scheme; anything else becomes
/// empty.
fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed("") }
}

fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme.
    let compact: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    let Some(colon) = compact.find(':') else {
        return true;
    };
    // A ':' after a path, query or fragment delimiter is not a scheme separator.
    if compact[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = &compact[..colon];
    SAFE_SCHEMES.iter().any(|safe| scheme.eq_ignore_ascii_case(safe))
}

/// How one piece of an assistant reply is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    /// Rendered markdown, safe to inject as HTML.
    Html(String),
    /// Text shown verbatim with preserved whitespace.
    Plain(String),
    /// Reasoning shown collapsed; holds rendered HTML.
    Thinking(String),
}

/// Renders an assistant reply in block order. Payloads larger than
/// `fallback_bytes` skip markdown.
pub fn render_reply(content: &MessageContent, fallback_bytes: usize) -> Vec<RenderedBlock> {
    if content.text_len() > fallback_bytes {
        return vec![RenderedBlock::Plain(content.plain_text())];
    }

    match content {
        MessageContent::PlainText(text) => vec![RenderedBlock::Html(render_markdown(text))],
        MessageContent::Blocks(blocks) => blocks.iter().map(render_block).collect(),
    }
}

fn render_block(block: &ContentBlock) -> RenderedBlock {
    let html = render_markdown(&block.text);
    if block.is_thinking() {
        RenderedBlock::Thinking(html)
    } else {
        RenderedBlock::Html(html)
    }
}
