//! Long-Form Text Rendering
//!
//! Catalog long-form fields are plain text with blank-line paragraphs and
//! `•` bullet lines. Bullets are rewritten to Markdown list items and the
//! result rendered with pulldown-cmark.

use pulldown_cmark::{html::push_html, Options, Parser};

const BULLET: char = '•';

/// Render a long-form catalog field to HTML
pub fn render_long_form(text: &str) -> String {
    let prepared = bullets_to_list(text);
    let parser = Parser::new_ext(&prepared, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION
}

/// `• The Wire: ...` -> `- The Wire: ...`, with a blank line before a list
/// that follows a paragraph line
fn bullets_to_list(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut prev_was_text = false;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(BULLET) {
            if prev_was_text {
                out.push('\n');
            }
            out.push_str("- ");
            out.push_str(rest.trim_start());
            prev_was_text = false;
        } else {
            out.push_str(line);
            prev_was_text = !trimmed.is_empty();
        }
        out.push('\n');
    }
    out
}
