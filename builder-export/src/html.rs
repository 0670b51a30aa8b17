//! Standalone HTML document emitter.
//!
//! Styles live in one `<style>` block with a rule per element, keyed by the
//! element's `id` attribute. Grid items are nested inside their grid's node.

use std::fmt::Write;

use builder_core::element::{Element, ElementKind};

use crate::css::{element_declarations, grid_item_declarations, Declaration};

/// Render the element list as a complete HTML document.
#[must_use]
pub fn to_html(elements: &[Element], language: &str, title: &str) -> String {
    let mut rules = String::new();
    let mut body = String::new();

    for element in elements.iter().filter(|e| !e.is_grid_item()) {
        write_rule(&mut rules, element, &element_declarations(element));
        let text = escape(element.text(language));
        let id = dom_id(element);

        match &element.kind {
            ElementKind::Input { input_type } => {
                let _ = writeln!(
                    body,
                    "    <input id=\"{id}\" type=\"{}\" placeholder=\"{text}\" />",
                    escape(input_type)
                );
            }
            ElementKind::Button => {
                let _ = writeln!(body, "    <button id=\"{id}\">{text}</button>");
            }
            ElementKind::Heading => {
                let _ = writeln!(body, "    <h2 id=\"{id}\">{text}</h2>");
            }
            ElementKind::Paragraph => {
                let _ = writeln!(body, "    <p id=\"{id}\">{text}</p>");
            }
            ElementKind::Grid { .. } => {
                let _ = writeln!(body, "    <div id=\"{id}\">");
                for item in elements.iter().filter(|e| e.parent() == Some(element.id)) {
                    write_rule(&mut rules, item, &grid_item_declarations(item));
                    let _ = writeln!(
                        body,
                        "      <div id=\"{}\">{}</div>",
                        dom_id(item),
                        escape(item.text(language))
                    );
                }
                let _ = writeln!(body, "    </div>");
            }
            ElementKind::Div | ElementKind::GridItem { .. } => {
                let _ = writeln!(body, "    <div id=\"{id}\">{text}</div>");
            }
        }
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20 <title>{title}</title>\n\
         \x20 <style>\n\
         \x20   body {{ margin: 0; }}\n\
         \x20   .template {{ position: relative; width: 100%; height: 100%; }}\n\
         {rules}\
         \x20 </style>\n\
         </head>\n\
         <body>\n\
         \x20 <div class=\"template\">\n\
         {body}\
         \x20 </div>\n\
         </body>\n\
         </html>\n",
        lang = escape(language),
        title = escape(title),
    )
}

fn dom_id(element: &Element) -> String {
    format!("el-{}", element.id)
}

fn write_rule(out: &mut String, element: &Element, declarations: &[Declaration]) {
    let _ = write!(out, "    #{} {{", dom_id(element));
    for (property, value) in declarations {
        let _ = write!(out, " {property}: {};", css_value(value));
    }
    out.push_str(" }\n");
}

/// Keep user-supplied values from closing the `<style>` element.
fn css_value(value: &str) -> String {
    value.replace('<', "\\3c ")
}

/// Escape text for HTML content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
