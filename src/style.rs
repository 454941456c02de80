//! Per-tag style table.
//!
//! Tags are classified once through [`TAG_TABLE`]; every kind maps to a pure
//! style function on [`StyleSheet`]. Anything not in the table is
//! [`ElementKind::Unknown`] and renders as plain body text.

use crate::config::Config;
use crate::view::{BoxStyle, Color, Decoration, FontFamily, TextStyle, Thickness};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Bold,
    Italic,
    Strikethrough,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading(u8),
    Paragraph,
    Inline(InlineKind),
    Preformatted,
    Blockquote,
    List { ordered: bool },
    Table,
    Rule,
    Link,
    Image,
    LineBreak,
    Unknown,
}

pub const TAG_TABLE: &[(&str, ElementKind)] = &[
    ("h1", ElementKind::Heading(1)),
    ("h2", ElementKind::Heading(2)),
    ("h3", ElementKind::Heading(3)),
    ("h4", ElementKind::Heading(4)),
    ("h5", ElementKind::Heading(5)),
    ("h6", ElementKind::Heading(6)),
    ("p", ElementKind::Paragraph),
    ("strong", ElementKind::Inline(InlineKind::Bold)),
    ("b", ElementKind::Inline(InlineKind::Bold)),
    ("em", ElementKind::Inline(InlineKind::Italic)),
    ("i", ElementKind::Inline(InlineKind::Italic)),
    ("del", ElementKind::Inline(InlineKind::Strikethrough)),
    ("s", ElementKind::Inline(InlineKind::Strikethrough)),
    ("code", ElementKind::Inline(InlineKind::Code)),
    ("pre", ElementKind::Preformatted),
    ("blockquote", ElementKind::Blockquote),
    ("ul", ElementKind::List { ordered: false }),
    ("ol", ElementKind::List { ordered: true }),
    ("table", ElementKind::Table),
    ("hr", ElementKind::Rule),
    ("a", ElementKind::Link),
    ("img", ElementKind::Image),
    ("br", ElementKind::LineBreak),
];

/// Look up a tag name, case-insensitively.
pub fn classify(tag: &str) -> ElementKind {
    TAG_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tag))
        .map(|(_, kind)| *kind)
        .unwrap_or(ElementKind::Unknown)
}

/// Heading font size and vertical margins (above, below), h1 first.
const HEADINGS: [(f32, f32, f32); 6] = [
    (24.0, 15.0, 8.0),
    (20.0, 12.0, 6.0),
    (18.0, 10.0, 5.0),
    (16.0, 8.0, 4.0),
    (15.0, 6.0, 3.0),
    (14.0, 5.0, 2.0),
];

/// Text and box styles derived from a [`Config`] theme.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    config: Config,
}

impl StyleSheet {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn body(&self) -> TextStyle {
        TextStyle::new(self.config.fonts.body_size, self.config.colors.text)
    }

    pub fn monospace(&self) -> FontFamily {
        FontFamily::Monospace(self.config.fonts.monospace_family.clone())
    }

    /// Levels outside 1..=6 are clamped.
    pub fn heading(&self, level: u8) -> (TextStyle, Thickness) {
        let index = usize::from(level.clamp(1, 6)) - 1;
        let (size, above, below) = HEADINGS[index];
        let style = self.body().sized(size).bold();
        (style, Thickness::new(0.0, above, 0.0, below))
    }

    pub fn paragraph(&self) -> TextStyle {
        self.body()
            .family(FontFamily::Serif(self.config.fonts.paragraph_family.clone()))
    }

    /// Style of an inline run with `base` as the surrounding style.
    pub fn inline(&self, kind: InlineKind, base: TextStyle) -> TextStyle {
        match kind {
            InlineKind::Bold => base.bold(),
            InlineKind::Italic => base.italic(),
            InlineKind::Strikethrough => base.decorated(Decoration::Strikethrough),
            InlineKind::Code => base.family(self.monospace()),
        }
    }

    pub fn code(&self) -> TextStyle {
        self.body()
            .sized(self.config.fonts.code_size)
            .family(self.monospace())
    }

    pub fn code_box(&self) -> BoxStyle {
        BoxStyle {
            background: Some(self.config.colors.code_background),
            corner_radius: 3.0,
            padding: Thickness::symmetric(4.0, 2.0),
            ..BoxStyle::default()
        }
    }

    pub fn pre_box(&self) -> BoxStyle {
        BoxStyle {
            background: Some(self.config.colors.code_background),
            corner_radius: 5.0,
            padding: Thickness::uniform(10.0),
            margin: Thickness::symmetric(0.0, 10.0),
            ..BoxStyle::default()
        }
    }

    pub fn quote(&self) -> TextStyle {
        self.body().italic().colored(self.config.colors.quote_text)
    }

    pub fn quote_box(&self) -> BoxStyle {
        BoxStyle {
            background: Some(self.config.colors.quote_background),
            border_color: Some(self.config.colors.quote_border),
            border: Thickness::new(4.0, 0.0, 0.0, 0.0),
            corner_radius: 0.0,
            padding: Thickness::symmetric(15.0, 10.0),
            margin: Thickness::symmetric(0.0, 10.0),
        }
    }

    pub fn link(&self, base: TextStyle) -> TextStyle {
        base.decorated(Decoration::Underline)
            .colored(self.config.colors.accent)
    }

    pub fn image(&self, base: TextStyle) -> TextStyle {
        base.italic().colored(self.config.colors.muted)
    }

    /// `[Image: alt]`, with the configured placeholder for missing alt text.
    pub fn image_label(&self, alt: Option<&str>) -> String {
        let labels = &self.config.labels;
        let alt = alt.unwrap_or(&labels.image_placeholder);
        format!("[{}: {}]", labels.image_prefix, alt)
    }

    pub fn list_prefix(&self, ordered: bool, number: usize) -> String {
        if ordered {
            format!("{}. ", number)
        } else {
            self.config.labels.bullet.clone()
        }
    }

    pub fn table_cell(&self, header: bool) -> (TextStyle, BoxStyle) {
        let colors = &self.config.colors;
        let mut text = self.body().sized(self.config.fonts.table_size);
        if header {
            text = text.bold();
        }
        let background = if header {
            colors.header_background
        } else {
            colors.cell_background
        };
        let cell = BoxStyle {
            background: Some(background),
            border_color: Some(colors.table_border),
            border: Thickness::uniform(1.0),
            corner_radius: 0.0,
            padding: Thickness::symmetric(8.0, 4.0),
            margin: Thickness::ZERO,
        };
        (text, cell)
    }

    pub fn table_background(&self) -> Color {
        self.config.colors.cell_background
    }

    pub fn rule(&self) -> (f32, Color, Thickness) {
        (1.0, self.config.colors.rule, Thickness::symmetric(0.0, 15.0))
    }
}
