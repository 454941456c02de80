use pulldown_cmark::{Options, Parser, html};

/// Extensions enabled on top of CommonMark.
fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Convert markdown text to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            to_html("# Title\n\nSome **bold** text."),
            "<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>\n"
        );
    }

    #[test]
    fn strikethrough() {
        assert_eq!(to_html("~~gone~~"), "<p><del>gone</del></p>\n");
    }

    #[test]
    fn table() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.starts_with("<table><thead><tr><th>a</th><th>b</th></tr></thead>"));
        assert!(html.contains("<tr><td>1</td><td>2</td></tr>"));
    }

    #[test]
    fn leading_rule_is_a_thematic_break() {
        assert_eq!(to_html("---\nno end"), "<hr />\n<p>no end</p>\n");
    }

    #[test]
    fn content_between_rules_is_kept() {
        assert_eq!(
            to_html("---\n# Intro\n\nbody\n\n---\n\nTail"),
            "<hr />\n<h1>Intro</h1>\n<p>body</p>\n<hr />\n<p>Tail</p>\n"
        );
    }
}
