use crate::view::{Decoration, FontFamily, FontStyle, FontWeight, Orientation, Run, ViewNode};

/// Convert a view tree to an indented text outline, one node per line.
pub fn to_outline(node: &ViewNode) -> String {
    let mut out = String::new();
    emit_node(node, 0, &mut out);
    out
}

fn emit_node(node: &ViewNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);

    match node {
        ViewNode::Text(block) => {
            out.push_str("text ");
            for (i, run) in block.runs.iter().enumerate() {
                if i > 0 {
                    out.push_str(" + ");
                }
                emit_run(run, out);
            }
            out.push('\n');
        }
        ViewNode::Panel(panel) => {
            let orientation = match panel.orientation {
                Orientation::Vertical => "vertical",
                Orientation::Horizontal => "horizontal",
            };
            out.push_str("panel ");
            out.push_str(orientation);
            out.push('\n');
            for child in &panel.children {
                emit_node(child, depth + 1, out);
            }
        }
        ViewNode::Border(bordered) => {
            out.push_str("border\n");
            emit_node(&bordered.child, depth + 1, out);
        }
        ViewNode::Grid(grid) => {
            out.push_str(&format!("grid {}x{}\n", grid.rows, grid.columns));
            for cell in &grid.cells {
                out.push_str(&format!("{}  cell {},{}\n", indent, cell.row, cell.column));
                emit_node(&cell.node, depth + 2, out);
            }
        }
        ViewNode::Divider(_) => {
            out.push_str("divider\n");
        }
    }
}

fn emit_run(run: &Run, out: &mut String) {
    let style = &run.style;
    out.push_str(&format!("@{}", style.size));
    if style.weight == FontWeight::Bold {
        out.push_str(" b");
    }
    if style.style == FontStyle::Italic {
        out.push_str(" i");
    }
    match style.decoration {
        Decoration::Underline => out.push_str(" u"),
        Decoration::Strikethrough => out.push_str(" s"),
        Decoration::None => {}
    }
    if let FontFamily::Monospace(_) = style.family {
        out.push_str(" mono");
    }
    out.push_str(&format!(" {:?}", run.text));
}

#[cfg(test)]
mod tests {
    use crate::render::render_markdown;

    use super::to_outline;

    fn outline(markdown: &str) -> String {
        to_outline(&render_markdown(markdown))
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            outline("# Title\n\nSome **bold** text."),
            "panel vertical\n  text @24 b \"Title\"\n  text @14 \"Some \" + @14 b \"bold\" + @14 \" text.\"\n"
        );
    }

    #[test]
    fn inline_code_and_strikethrough() {
        assert_eq!(
            outline("`x` and ~~y~~"),
            "panel vertical\n  text @14 mono \"x\" + @14 \" and \" + @14 s \"y\"\n"
        );
    }

    #[test]
    fn code_block() {
        assert_eq!(
            outline("```rust\nlet x = 1;\n```"),
            "panel vertical\n  border\n    text @13 mono \"let x = 1;\\n\"\n"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            outline("- one\n- two"),
            concat!(
                "panel vertical\n",
                "  panel vertical\n",
                "    panel horizontal\n",
                "      text @14 \"• \"\n",
                "      text @14 \"one\"\n",
                "    panel horizontal\n",
                "      text @14 \"• \"\n",
                "      text @14 \"two\"\n",
            )
        );
    }

    #[test]
    fn table() {
        assert_eq!(
            outline("| A | B |\n|---|---|\n| 1 | 2 |"),
            concat!(
                "panel vertical\n",
                "  grid 2x2\n",
                "    cell 0,0\n",
                "      border\n",
                "        text @13 b \"A\"\n",
                "    cell 0,1\n",
                "      border\n",
                "        text @13 b \"B\"\n",
                "    cell 1,0\n",
                "      border\n",
                "        text @13 \"1\"\n",
                "    cell 1,1\n",
                "      border\n",
                "        text @13 \"2\"\n",
            )
        );
    }

    #[test]
    fn horizontal_rule_and_link() {
        assert_eq!(
            outline("---\n\n[home](https://example.com)"),
            "panel vertical\n  divider\n  text @14 u \"home\"\n"
        );
    }

    #[test]
    fn fallback_is_one_text_line() {
        let source = "text </span>";
        assert_eq!(outline(source), "text @14 \"text </span>\"\n");
    }
}
