//! YAML template format.
//!
//! This is not general YAML. The emitter writes a fixed layout and the parser
//! reads exactly that layout back:
//!
//! ```text
//! - element_1:
//!     name: "element_a1b2c3"
//!     editable: true
//!     text:
//!       en:
//!         text: "Submit"
//!         style:
//!           fontSize: "16px"
//!           color: "#ffffff"
//!     style:
//!       display: flex
//!       backgroundColor: rgba(59, 130, 246, 1)
//!     inputType: "text"
//!     children:
//!       - child_1:
//!           name: "grid_item_d4e5f6"
//!           ...
//! ```
//!
//! Fields of a record share one indentation; a field's block is every
//! following line indented deeper. Lines the parser does not recognize are
//! skipped.

use std::collections::BTreeMap;
use std::fmt::Write;

use builder_core::language::is_valid_language_code;
use builder_core::Element;

use crate::error::{ImportError, ImportResult};
use crate::record::{records, StyleMap, TemplateRecord, TextEntry};

const ELEMENT_INDENT: usize = 4;
const STEP: usize = 2;

/// Serialize the element list in the YAML template layout.
#[must_use]
pub fn to_yaml(elements: &[Element]) -> String {
    let mut out = String::new();
    for (index, record) in records(elements).iter().enumerate() {
        let _ = writeln!(out, "- element_{}:", index + 1);
        write_record(&mut out, record, ELEMENT_INDENT);
        out.push('\n');
    }
    out
}

fn write_record(out: &mut String, record: &TemplateRecord, indent: usize) {
    let pad = " ".repeat(indent);
    let _ = writeln!(out, "{pad}name: {}", quote(&record.name));
    let _ = writeln!(out, "{pad}editable: {}", record.editable);

    let _ = writeln!(out, "{pad}text:");
    let lang_pad = " ".repeat(indent + STEP);
    let entry_pad = " ".repeat(indent + 2 * STEP);
    let style_pad = " ".repeat(indent + 3 * STEP);
    for (language, entry) in &record.text {
        let _ = writeln!(out, "{lang_pad}{language}:");
        let _ = writeln!(out, "{entry_pad}text: {}", quote(&entry.text));
        let _ = writeln!(out, "{entry_pad}style:");
        let _ = writeln!(out, "{style_pad}fontSize: {}", quote(&entry.style.font_size));
        let _ = writeln!(out, "{style_pad}color: {}", quote(&entry.style.color));
    }

    let _ = writeln!(out, "{pad}style:");
    for (key, value) in record.style.iter() {
        let _ = writeln!(out, "{lang_pad}{key}: {value}");
    }

    if let Some(input_type) = &record.input_type {
        let _ = writeln!(out, "{pad}inputType: {}", quote(input_type));
    }

    if let Some(children) = &record.children {
        let _ = writeln!(out, "{pad}children:");
        for (index, child) in children.iter().enumerate() {
            let _ = writeln!(out, "{lang_pad}- child_{}:", index + 1);
            write_record(out, child, indent + 3 * STEP);
        }
    }
}

fn quote(value: &str) -> String {
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

fn unquote(value: &str) -> String {
    let value = value.trim();
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return value.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    indent: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let text = raw.trim_end();
        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            indent: text.len() - trimmed.len(),
            text: trimmed,
        })
    }

    /// Split `key: value` on the first `": "`; `key:` yields an empty value.
    fn field(&self) -> (&'a str, &'a str) {
        if let Some((key, value)) = self.text.split_once(": ") {
            (key, value)
        } else if let Some(key) = self.text.strip_suffix(':') {
            (key, "")
        } else {
            (self.text, "")
        }
    }

    fn is_marker(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix) && self.text.ends_with(':')
    }
}

/// Lines following `*pos` indented deeper than `owner`; advances `pos` past them.
fn take_block<'l, 'a>(lines: &'l [Line<'a>], pos: &mut usize, owner: usize) -> &'l [Line<'a>] {
    let start = *pos;
    while lines.get(*pos).is_some_and(|line| line.indent > owner) {
        *pos += 1;
    }
    &lines[start..*pos]
}

/// Parse YAML template text into records.
///
/// # Errors
///
/// Returns [`ImportError::InvalidFormat`] if no `- element_N:` record is found.
pub fn parse_yaml(text: &str) -> ImportResult<Vec<TemplateRecord>> {
    let lines: Vec<Line<'_>> = text.lines().filter_map(Line::parse).collect();
    let mut parsed = Vec::new();
    let mut pos = 0;
    while let Some(line) = lines.get(pos) {
        pos += 1;
        if line.is_marker("- element_") {
            let block = take_block(&lines, &mut pos, line.indent);
            parsed.push(parse_record(block));
        } else {
            tracing::trace!("Skipping unrecognized template line: {}", line.text);
        }
    }
    if parsed.is_empty() {
        return Err(ImportError::InvalidFormat);
    }
    Ok(parsed)
}

fn parse_record(block: &[Line<'_>]) -> TemplateRecord {
    let mut record = TemplateRecord::default();
    let Some(field_indent) = block.first().map(|line| line.indent) else {
        return record;
    };

    let mut pos = 0;
    while let Some(line) = block.get(pos) {
        pos += 1;
        if line.indent != field_indent {
            continue;
        }
        let (key, value) = line.field();
        match key {
            "name" => record.name = unquote(value),
            "editable" => record.editable = value.trim() == "true",
            "inputType" => record.input_type = Some(unquote(value)),
            "text" => record.text = parse_text(take_block(block, &mut pos, field_indent)),
            "style" => record.style = parse_style(take_block(block, &mut pos, field_indent)),
            "children" => {
                record.children = Some(parse_children(take_block(block, &mut pos, field_indent)));
            }
            _ => {}
        }
    }
    record
}

fn parse_text(block: &[Line<'_>]) -> BTreeMap<String, TextEntry> {
    let mut text = BTreeMap::new();
    let Some(lang_indent) = block.first().map(|line| line.indent) else {
        return text;
    };

    let mut pos = 0;
    while let Some(line) = block.get(pos) {
        pos += 1;
        if line.indent != lang_indent {
            continue;
        }
        let (language, rest) = line.field();
        let body = take_block(block, &mut pos, lang_indent);
        if !rest.is_empty() || !is_valid_language_code(language) {
            continue;
        }
        text.insert(language.to_string(), parse_text_entry(body));
    }
    text
}

fn parse_text_entry(block: &[Line<'_>]) -> TextEntry {
    let mut entry = TextEntry::default();
    let Some(entry_indent) = block.first().map(|line| line.indent) else {
        return entry;
    };

    let mut pos = 0;
    while let Some(line) = block.get(pos) {
        pos += 1;
        if line.indent != entry_indent {
            continue;
        }
        match line.field() {
            ("text", value) => entry.text = unquote(value),
            ("style", _) => {
                for style_line in take_block(block, &mut pos, entry_indent) {
                    match style_line.field() {
                        ("fontSize", value) => entry.style.font_size = unquote(value),
                        ("color", value) => entry.style.color = unquote(value),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    entry
}

fn parse_style(block: &[Line<'_>]) -> StyleMap {
    let mut style = StyleMap::new();
    let Some(indent) = block.first().map(|line| line.indent) else {
        return style;
    };
    for line in block.iter().filter(|line| line.indent == indent) {
        let (key, value) = line.field();
        if !value.is_empty() {
            style.insert(key, value);
        }
    }
    style
}

fn parse_children(block: &[Line<'_>]) -> Vec<TemplateRecord> {
    let mut children = Vec::new();
    let mut pos = 0;
    while let Some(line) = block.get(pos) {
        pos += 1;
        if line.is_marker("- child_") {
            children.push(parse_record(take_block(block, &mut pos, line.indent)));
        }
    }
    children
}
