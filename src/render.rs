use crate::config::Config;
use crate::error::RenderError;
use crate::html::{self, Element, HtmlNode};
use crate::markdown;
use crate::style::{ElementKind, InlineKind, StyleSheet, classify};
use crate::view::{
    Bordered, BoxStyle, Divider, Grid, GridCell, Orientation, Panel, Run, TextBlock, TextStyle,
    Thickness, ViewNode,
};

const ROOT_MARGIN: Thickness = Thickness::uniform(10.0);
const TEXT_MARGIN: Thickness = Thickness::symmetric(0.0, 2.0);
const PARAGRAPH_MARGIN: Thickness = Thickness::new(0.0, 0.0, 0.0, 10.0);
const LIST_MARGIN: Thickness = Thickness::new(0.0, 5.0, 0.0, 10.0);
const LIST_PREFIX_MARGIN: Thickness = Thickness::new(20.0, 2.0, 5.0, 2.0);
const TABLE_MARGIN: Thickness = Thickness::symmetric(0.0, 10.0);

/// Maps HTML into a [`ViewNode`] tree using one [`StyleSheet`].
#[derive(Debug, Clone)]
pub struct Renderer {
    styles: StyleSheet,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Config::compiled_default())
    }
}

impl Renderer {
    pub fn new(config: Config) -> Self {
        Self {
            styles: StyleSheet::new(config),
        }
    }

    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Render an HTML fragment. Never fails: on error the fragment is shown
    /// as plain text.
    pub fn render(&self, html: &str) -> ViewNode {
        self.try_render(html).unwrap_or_else(|e| {
            tracing::debug!("Falling back to plain text: {}", e);
            self.fallback(html)
        })
    }

    /// Convert markdown and render it. On error the markdown source itself
    /// is shown as plain text.
    pub fn render_markdown(&self, source: &str) -> ViewNode {
        let html = markdown::to_html(source);
        self.try_render(&html).unwrap_or_else(|e| {
            tracing::debug!("Falling back to markdown source: {}", e);
            self.fallback(source)
        })
    }

    pub fn try_render(&self, html: &str) -> Result<ViewNode, RenderError> {
        let options = &self.styles.config().render;
        let nodes = html::parse_fragment(html, options.max_depth, options.strict)?;
        let children = nodes.iter().filter_map(|node| self.map_node(node)).collect();
        Ok(ViewNode::Panel(Panel {
            orientation: Orientation::Vertical,
            margin: ROOT_MARGIN,
            children,
        }))
    }

    /// A single wrapped block showing `source` unchanged.
    pub fn fallback(&self, source: &str) -> ViewNode {
        text_block(source, self.styles.body(), ROOT_MARGIN)
    }

    /// Map one node. Whitespace-only text maps to nothing.
    pub fn map_node(&self, node: &HtmlNode) -> Option<ViewNode> {
        match node {
            HtmlNode::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(text_block(text, self.styles.body(), TEXT_MARGIN))
                }
            }
            HtmlNode::Element(element) => self.map_element(element),
        }
    }

    fn map_element(&self, element: &Element) -> Option<ViewNode> {
        let styles = &self.styles;
        let node = match classify(&element.tag) {
            ElementKind::Heading(level) => {
                let (style, margin) = styles.heading(level);
                text_block(element.inner_text(), style, margin)
            }
            ElementKind::Paragraph => return self.paragraph(element),
            ElementKind::Inline(kind) => {
                let text = element.inner_text();
                if text.trim().is_empty() {
                    return None;
                }
                match kind {
                    InlineKind::Code => {
                        bordered(styles.code_box(), text_block(text, styles.code(), Thickness::ZERO))
                    }
                    _ => text_block(text, styles.inline(kind, styles.body()), Thickness::ZERO),
                }
            }
            ElementKind::Preformatted => bordered(
                styles.pre_box(),
                text_block(element.inner_text(), styles.code(), Thickness::ZERO),
            ),
            ElementKind::Blockquote => bordered(
                styles.quote_box(),
                text_block(element.inner_text().trim(), styles.quote(), Thickness::ZERO),
            ),
            ElementKind::List { ordered } => self.list(element, ordered),
            ElementKind::Table => self.table(element),
            ElementKind::Rule => {
                let (thickness, color, margin) = styles.rule();
                ViewNode::Divider(Divider {
                    thickness,
                    color,
                    margin,
                })
            }
            ElementKind::Link => {
                text_block(element.inner_text(), styles.link(styles.body()), Thickness::ZERO)
            }
            ElementKind::Image => text_block(
                styles.image_label(alt_text(element)),
                styles.image(styles.body()),
                Thickness::ZERO,
            ),
            ElementKind::LineBreak => return None,
            ElementKind::Unknown => {
                tracing::trace!("No style for <{}>, using plain text", element.tag);
                let text = element.inner_text();
                if text.trim().is_empty() {
                    return None;
                }
                text_block(text, styles.body(), Thickness::ZERO)
            }
        };
        Some(node)
    }

    /// One run per direct child, in document order.
    fn paragraph(&self, element: &Element) -> Option<ViewNode> {
        let base = self.styles.paragraph();
        let mut runs: Vec<Run> = Vec::new();
        let mut after_break = false;

        for child in &element.children {
            match child {
                HtmlNode::Text(text) => {
                    // markdown writes `<br />\n`; the break run already ends the line
                    let text = if after_break {
                        text.strip_prefix('\n').unwrap_or(text)
                    } else {
                        text.as_str()
                    };
                    if !text.trim().is_empty() {
                        runs.push(Run::new(text, base.clone()));
                    }
                    after_break = false;
                }
                HtmlNode::Element(inline) => {
                    after_break = classify(&inline.tag) == ElementKind::LineBreak;
                    if let Some(run) = self.inline_run(inline, &base) {
                        runs.push(run);
                    }
                }
            }
        }

        if runs.is_empty() {
            return None;
        }
        Some(ViewNode::Text(TextBlock {
            runs,
            margin: PARAGRAPH_MARGIN,
            wrap: true,
        }))
    }

    fn inline_run(&self, element: &Element, base: &TextStyle) -> Option<Run> {
        let styles = &self.styles;
        let kind = classify(&element.tag);
        match kind {
            ElementKind::LineBreak => return Some(Run::new("\n", base.clone())),
            ElementKind::Image => {
                let label = styles.image_label(alt_text(element));
                return Some(Run::new(label, styles.image(base.clone())));
            }
            _ => {}
        }

        let text = element.inner_text();
        if text.trim().is_empty() {
            return None;
        }
        let style = match kind {
            ElementKind::Inline(inline) => styles.inline(inline, base.clone()),
            ElementKind::Link => styles.link(base.clone()),
            _ => base.clone(),
        };
        Some(Run::new(text, style))
    }

    /// Every `li` below the list becomes a prefix + text row. Item content
    /// is flattened to text.
    fn list(&self, element: &Element, ordered: bool) -> ViewNode {
        let body = self.styles.body();
        let children = element
            .descendants(&["li"])
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let prefix = self.styles.list_prefix(ordered, index + 1);
                ViewNode::Panel(Panel {
                    orientation: Orientation::Horizontal,
                    margin: Thickness::ZERO,
                    children: vec![
                        text_block(prefix, body.clone(), LIST_PREFIX_MARGIN),
                        text_block(item.inner_text().trim(), body.clone(), TEXT_MARGIN),
                    ],
                })
            })
            .collect();

        ViewNode::Panel(Panel {
            orientation: Orientation::Vertical,
            margin: LIST_MARGIN,
            children,
        })
    }

    /// Cells fill each row from column 0. The first row is always styled as
    /// a header row, whatever its cell tags.
    fn table(&self, element: &Element) -> ViewNode {
        let rows: Vec<Vec<&Element>> = element
            .descendants(&["tr"])
            .into_iter()
            .map(|row| row.descendants(&["td", "th"]))
            .collect();
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Vec::new();
        for (row_index, row) in rows.iter().enumerate() {
            for (column, cell) in row.iter().enumerate().take(columns) {
                let header = cell.tag == "th" || row_index == 0;
                let (text, cell_box) = self.styles.table_cell(header);
                cells.push(GridCell {
                    row: row_index,
                    column,
                    node: bordered(
                        cell_box,
                        text_block(cell.inner_text().trim(), text, Thickness::ZERO),
                    ),
                });
            }
        }

        ViewNode::Grid(Grid {
            columns,
            rows: rows.len(),
            margin: TABLE_MARGIN,
            background: Some(self.styles.table_background()),
            cells,
        })
    }
}

/// Render an HTML fragment with the built-in theme.
pub fn render(html: &str) -> ViewNode {
    Renderer::default().render(html)
}

/// Render markdown with the built-in theme.
pub fn render_markdown(source: &str) -> ViewNode {
    Renderer::default().render_markdown(source)
}

// Markdown writes alt="" for images without a description.
fn alt_text(element: &Element) -> Option<&str> {
    element.attribute("alt").filter(|alt| !alt.trim().is_empty())
}

fn text_block(text: impl Into<String>, style: TextStyle, margin: Thickness) -> ViewNode {
    ViewNode::Text(TextBlock {
        runs: vec![Run::new(text, style)],
        margin,
        wrap: true,
    })
}

fn bordered(style: BoxStyle, child: ViewNode) -> ViewNode {
    ViewNode::Border(Bordered {
        style,
        child: Box::new(child),
    })
}
