//! Markdown rendering for article bodies

use anyhow::Result;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::helpers::html_escape;

/// Markdown renderer for blog article bodies
pub struct MarkdownRenderer {
    /// Open links to other hosts in a new tab
    external_links_new_tab: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            external_links_new_tab: true,
        }
    }

    /// Create with custom settings
    pub fn with_options(external_links_new_tab: bool) -> Self {
        Self {
            external_links_new_tab,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // One flag per open link: whether it was rewritten as raw HTML
        let mut link_stack: Vec<bool> = Vec::new();

        for event in parser {
            match event {
                Event::Start(Tag::Link {
                    dest_url, title, ..
                }) if self.external_links_new_tab && is_external(&dest_url) => {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, html_escape(&title))
                    };
                    events.push(Event::Html(CowStr::from(format!(
                        r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                        html_escape(&dest_url),
                        title_attr
                    ))));
                    link_stack.push(true);
                }
                Event::Start(Tag::Link { .. }) => {
                    events.push(event);
                    link_stack.push(false);
                }
                Event::End(TagEnd::Link) => {
                    if link_stack.pop().unwrap_or(false) {
                        events.push(Event::Html(CowStr::from("</a>")));
                    } else {
                        events.push(event);
                    }
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}
