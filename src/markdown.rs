//! Markdown Rendering
//!
//! Renders static page copy with pulldown-cmark, attaching the site's
//! typography classes. Raw HTML in the source is escaped, not passed through.

use pulldown_cmark::{html::push_html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn heading_tag(level: HeadingLevel) -> (&'static str, &'static str) {
    match level {
        HeadingLevel::H1 => ("h1", "text-4xl font-bold text-gray-900 mb-8"),
        HeadingLevel::H2 => ("h2", "text-2xl font-semibold mb-4"),
        HeadingLevel::H3 => ("h3", "text-xl font-semibold mb-2"),
        HeadingLevel::H4 => ("h4", "font-semibold mb-2"),
        HeadingLevel::H5 => ("h5", "font-semibold"),
        HeadingLevel::H6 => ("h6", "font-semibold"),
    }
}

fn styled<'a>(event: Event<'a>) -> Event<'a> {
    let html = match event {
        Event::Start(Tag::Heading { level, .. }) => {
            let (tag, class) = heading_tag(level);
            format!(r#"<{tag} class="{class}">"#)
        }
        Event::End(TagEnd::Heading(level)) => format!("</{}>\n", heading_tag(level).0),
        Event::Start(Tag::Paragraph) => r#"<p class="text-gray-700 mb-4">"#.to_string(),
        Event::Start(Tag::List(None)) => r#"<ul class="list-disc list-inside space-y-2 text-gray-700 mb-4">"#.to_string(),
        Event::Start(Tag::List(Some(_))) => {
            r#"<ol class="list-decimal list-inside space-y-2 text-gray-700 mb-4">"#.to_string()
        }
        Event::Html(raw) | Event::InlineHtml(raw) => return Event::Text(raw),
        other => return other,
    };
    Event::Html(CowStr::from(html))
}

/// Render markdown to HTML with site styling
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(styled);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}
