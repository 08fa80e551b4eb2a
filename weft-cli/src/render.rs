//! Inspect views over component trees
//!
//! Each view renders the parsed component tree in a different shape:
//!
//! - `tree`: indented tree visualization, one node per line
//! - `json`: the structured wire representation (always pretty-printed,
//!   since inspect output is for humans)

use weft_text::{json, Component, Decoration};

/// All available inspect views
pub const AVAILABLE_VIEWS: &[&str] = &["tree", "json"];

/// Render `component` with the named view.
pub fn render(component: &Component, view: &str) -> Result<String, String> {
    match view {
        "tree" => Ok(tree(component)),
        "json" => json::to_json_pretty(component).map_err(|e| e.to_string()),
        other => Err(format!("Unknown view '{other}'")),
    }
}

/// Render an indented tree, one node per line.
pub fn tree(component: &Component) -> String {
    let mut out = String::new();
    render_node(component, 0, &mut out);
    out
}

fn render_node(component: &Component, indent_level: usize, out: &mut String) {
    let indent = "  ".repeat(indent_level);
    match component {
        Component::Text(text) => {
            out.push_str(&format!("{indent}text {:?}\n", text.content));
        }
        Component::Styled(styled) => {
            out.push_str(&format!(
                "{indent}styled {}\n",
                decoration_name(styled.decoration)
            ));
            for child in &styled.children {
                render_node(child, indent_level + 1, out);
            }
        }
        Component::Translatable(tr) => {
            match &tr.fallback {
                Some(fallback) => out.push_str(&format!(
                    "{indent}translatable {} or {:?}\n",
                    tr.key, fallback
                )),
                None => out.push_str(&format!("{indent}translatable {}\n", tr.key)),
            }
            for arg in &tr.args {
                render_node(arg, indent_level + 1, out);
            }
        }
        Component::Group(group) => {
            out.push_str(&format!("{indent}group\n"));
            for child in &group.children {
                render_node(child, indent_level + 1, out);
            }
        }
    }
}

fn decoration_name(decoration: Decoration) -> &'static str {
    match decoration {
        Decoration::Bold => "bold",
        Decoration::Italic => "italic",
        Decoration::Underlined => "underlined",
        Decoration::Strikethrough => "strikethrough",
    }
}
