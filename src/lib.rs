mod config;
mod document;
mod error;
pub mod files;
mod html;
mod markdown;
mod outline;
mod render;
mod style;
pub mod view;

pub use config::{ColorsConfig, Config, FontsConfig, LabelsConfig, RenderConfig};
pub use document::{MarkdownDocument, WELCOME};
pub use error::{ConfigError, FileError, FileOp, RenderError};
pub use html::{Element, HtmlNode, parse_fragment};
pub use outline::to_outline;
pub use render::{Renderer, render, render_markdown};
pub use style::{ElementKind, InlineKind, StyleSheet, TAG_TABLE, classify};
pub use view::ViewNode;

/// Convert markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown::to_html(markdown)
}

/// Render markdown into a view tree with custom config.
pub fn render_markdown_with_config(markdown: &str, config: &Config) -> ViewNode {
    Renderer::new(config.clone()).render_markdown(markdown)
}

/// Render markdown into a text outline using default config.
pub fn markdown_to_outline(markdown: &str) -> String {
    to_outline(&render_markdown(markdown))
}

/// Render markdown into pretty-printed JSON with custom config.
pub fn markdown_to_json(markdown: &str, config: &Config) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&render_markdown_with_config(markdown, config))
}
