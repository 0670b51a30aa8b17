//! JSX function component emitter.

use std::fmt::Write;

use builder_core::element::{Element, ElementKind};

use crate::css::{camel_case, element_declarations, grid_item_declarations, Declaration};
use crate::html;

/// Render the element list as the source of a default-exported component.
#[must_use]
pub fn to_component(elements: &[Element], language: &str, component_name: &str) -> String {
    let mut out = String::from("import React from 'react';\n\n");
    let _ = writeln!(out, "export default function {component_name}() {{");
    out.push_str("  return (\n");
    out.push_str(
        "    <div className=\"relative\" style={{ width: '100%', height: '100%', position: 'relative' }}>\n",
    );

    for element in elements.iter().filter(|e| !e.is_grid_item()) {
        let style = style_object(&element_declarations(element));
        let text = jsx_text(element.text(language));

        match &element.kind {
            ElementKind::Input { input_type } => {
                let _ = writeln!(
                    out,
                    "      <input type=\"{}\" placeholder=\"{}\" style={{{style}}} />",
                    html::escape(input_type),
                    html::escape(element.text(language))
                );
            }
            ElementKind::Grid { .. } => {
                let _ = writeln!(out, "      <div style={{{style}}}>");
                for item in elements.iter().filter(|e| e.parent() == Some(element.id)) {
                    let item_style = style_object(&grid_item_declarations(item));
                    let _ = writeln!(
                        out,
                        "        <div key=\"{}\" style={{{item_style}}}>",
                        item.id
                    );
                    let _ = writeln!(out, "          {}", jsx_text(item.text(language)));
                    out.push_str("        </div>\n");
                }
                out.push_str("      </div>\n");
            }
            kind => {
                let tag = match kind {
                    ElementKind::Button => "button",
                    ElementKind::Heading => "h2",
                    ElementKind::Paragraph => "p",
                    _ => "div",
                };
                let _ = writeln!(out, "      <{tag} style={{{style}}}>");
                let _ = writeln!(out, "        {text}");
                let _ = writeln!(out, "      </{tag}>");
            }
        }
    }

    out.push_str("    </div>\n");
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}

/// `{ key: "value", ... }` with camelCase keys and string values.
fn style_object(declarations: &[Declaration]) -> String {
    let body = declarations
        .iter()
        .map(|(property, value)| format!("{}: {}", camel_case(property), js_string(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{ {body} }}")
}

fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape characters JSX treats as markup or expressions in text children.
fn jsx_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' => out.push_str("{'{'}"),
            '}' => out.push_str("{'}'}"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use builder_core::element::ElementType;

    fn kind(element_type: ElementType) -> ElementKind {
        ElementKind::with_defaults(element_type).expect("kind")
    }

    #[test]
    fn test_component_frame() {
        let source = to_component(&[], "en", "GeneratedTemplate");
        assert!(source.starts_with(
            "import React from 'react';\n\nexport default function GeneratedTemplate() {\n"
        ));
        assert!(source.trim_end().ends_with("  );\n}"));
    }

    #[test]
    fn test_button_style_object() {
        let button = Element::new(kind(ElementType::Button), 0).with_text("en", "Go");
        let source = to_component(&[button], "en", "GeneratedTemplate");
        assert!(source.contains(
            "<button style={{ position: \"absolute\", left: \"50px\", top: \"50px\", width: \"200px\""
        ));
        assert!(source.contains("backgroundColor: \"#3b82f6\""));
        assert!(source.contains("justifyContent: \"center\""));
        assert!(source.contains("        Go\n      </button>"));
    }

    #[test]
    fn test_grid_items_keyed() {
        let grid = Element::new(kind(ElementType::Grid), 0);
        let item = Element::grid_item(grid.id, 0, 1);
        let source = to_component(&[grid, item.clone()], "en", "Page");
        let item_node = format!(
            "<div key=\"{}\" style={{{{ position: \"relative\", gridColumn: \"1 / 2\"",
            item.id
        );
        assert!(source.contains(&item_node));
        assert!(source.contains("display: \"grid\""));
        assert!(source.contains("gridTemplateColumns: \"repeat(3, 1fr)\""));
    }

    #[test]
    fn test_input_is_self_closing() {
        let input = Element::new(kind(ElementType::Input), 0);
        let source = to_component(&[input], "en", "Page");
        assert!(source.contains("<input type=\"text\" placeholder=\"Placeholder text\" style={{"));
        assert!(source.contains("}} />"));
    }

    #[test]
    fn test_jsx_text_escaped() {
        assert_eq!(jsx_text("{a} <b>"), "{'{'}a{'}'} &lt;b&gt;");
    }
}
