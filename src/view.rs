use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An RGB colour, written as `#rrggbb` in config files and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor {
            value: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Per-side spacing, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    pub const ZERO: Thickness = Thickness::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

/// Font family request. Named families hold a comma-separated fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "families", rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Default,
    Serif(String),
    Monospace(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub decoration: Decoration,
    pub family: FontFamily,
    pub foreground: Color,
    pub background: Option<Color>,
}

impl TextStyle {
    pub fn new(size: f32, foreground: Color) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
            decoration: Decoration::None,
            family: FontFamily::Default,
            foreground,
            background: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn decorated(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    pub fn sized(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn colored(mut self, foreground: Color) -> Self {
        self.foreground = foreground;
        self
    }
}

/// A span of text with one style, nested inside a [`TextBlock`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub style: TextStyle,
}

impl Run {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A paragraph-level block of wrapped text made of one or more runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub runs: Vec<Run>,
    pub margin: Thickness,
    pub wrap: bool,
}

impl TextBlock {
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub orientation: Orientation,
    pub margin: Thickness,
    pub children: Vec<ViewNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BoxStyle {
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border: Thickness,
    pub corner_radius: f32,
    pub padding: Thickness,
    pub margin: Thickness,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bordered {
    pub style: BoxStyle,
    pub child: Box<ViewNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub node: ViewNode,
}

/// Equal-width columns, auto-height rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    pub margin: Thickness,
    pub background: Option<Color>,
    pub cells: Vec<GridCell>,
}

impl Grid {
    pub fn cell(&self, row: usize, column: usize) -> Option<&ViewNode> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.column == column)
            .map(|cell| &cell.node)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Divider {
    pub thickness: f32,
    pub color: Color,
    pub margin: Thickness,
}

/// Toolkit-agnostic presentational tree handed to the host UI for painting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewNode {
    Text(TextBlock),
    Panel(Panel),
    Border(Bordered),
    Grid(Grid),
    Divider(Divider),
}

impl ViewNode {
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Panel(panel) => &panel.children,
            ViewNode::Border(bordered) => std::slice::from_ref(bordered.child.as_ref()),
            _ => &[],
        }
    }

    /// Visible text of the tree: panel children on separate lines, grid
    /// cells tab-separated within a row.
    pub fn plain_text(&self) -> String {
        match self {
            ViewNode::Text(block) => block.text(),
            ViewNode::Panel(panel) => {
                let sep = match panel.orientation {
                    Orientation::Vertical => "\n",
                    Orientation::Horizontal => "",
                };
                panel
                    .children
                    .iter()
                    .map(ViewNode::plain_text)
                    .collect::<Vec<_>>()
                    .join(sep)
            }
            ViewNode::Border(bordered) => bordered.child.plain_text(),
            ViewNode::Grid(grid) => {
                let mut lines = Vec::with_capacity(grid.rows);
                for row in 0..grid.rows {
                    let cells: Vec<String> = (0..grid.columns)
                        .filter_map(|column| grid.cell(row, column))
                        .map(ViewNode::plain_text)
                        .collect();
                    lines.push(cells.join("\t"));
                }
                lines.join("\n")
            }
            ViewNode::Divider(_) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_hex() {
        assert_eq!("#1a4f8b".parse::<Color>().unwrap(), Color::rgb(0x1a, 0x4f, 0x8b));
        assert_eq!(Color::rgb(0xf8, 0xf8, 0xf8).to_string(), "#f8f8f8");
    }

    #[test]
    fn color_rejects_malformed() {
        assert!("1a4f8b".parse::<Color>().is_err());
        assert!("#1a4f8".parse::<Color>().is_err());
        assert!("#zz0000".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn plain_text_of_grid_is_row_major() {
        let style = TextStyle::new(13.0, Color::BLACK);
        let text = |s: &str| {
            ViewNode::Text(TextBlock {
                runs: vec![Run::new(s, style.clone())],
                margin: Thickness::ZERO,
                wrap: true,
            })
        };
        let grid = ViewNode::Grid(Grid {
            columns: 2,
            rows: 2,
            margin: Thickness::ZERO,
            background: None,
            cells: vec![
                GridCell { row: 1, column: 0, node: text("1") },
                GridCell { row: 0, column: 0, node: text("a") },
                GridCell { row: 0, column: 1, node: text("b") },
                GridCell { row: 1, column: 1, node: text("2") },
            ],
        });
        assert_eq!(grid.plain_text(), "a\tb\n1\t2");
    }
}
