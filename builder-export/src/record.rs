//! Template records: the logical structure behind the JSON and YAML formats.
//!
//! One [`TemplateRecord`] per top-level element; grid items appear only as
//! `children` of their grid's record. Style declarations keep their insertion
//! order when written and accept strings, numbers or booleans when read.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use builder_core::element::{Element, ElementKind};

use crate::css::hex_to_rgba;

/// Text style of one language entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Font size with unit, e.g. `16px`.
    #[serde(deserialize_with = "lenient_string")]
    pub font_size: String,
    /// Text color as authored.
    #[serde(deserialize_with = "lenient_string")]
    pub color: String,
}

/// Text of one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextEntry {
    /// Display text.
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    /// Text style.
    pub style: TextStyle,
}

/// Ordered CSS-like style declarations keyed by camelCase property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap(Vec<(String, String)>);

impl StyleMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Value of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut map = Self::new();
        for (key, value) in raw {
            if let Some(value) = scalar_to_string(&value) {
                map.insert(key, value);
            }
        }
        Ok(map)
    }
}

/// One exported element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Element name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Editable flag.
    #[serde(default = "default_editable")]
    pub editable: bool,
    /// Text per language.
    #[serde(default)]
    pub text: BTreeMap<String, TextEntry>,
    /// Box style.
    #[serde(default)]
    pub style: StyleMap,
    /// Input type, for input elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Grid items, for grids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TemplateRecord>>,
}

impl Default for TemplateRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            editable: true,
            text: BTreeMap::new(),
            style: StyleMap::new(),
            input_type: None,
            children: None,
        }
    }
}

impl TemplateRecord {
    /// Record for a top-level element; `elements` supplies a grid's items.
    #[must_use]
    pub fn from_element(element: &Element, elements: &[Element]) -> Self {
        let geometry = &element.geometry;
        let appearance = &element.appearance;
        let typography = &element.typography;
        let position_unit = geometry.position_unit();

        let mut style = StyleMap::new();
        style.insert("display", if element.is_grid() { "grid" } else { "flex" });
        style.insert("justifyContent", typography.text_align.justify_content());
        style.insert("alignItems", typography.vertical_align.align_items());
        style.insert("position", "absolute");
        style.insert("top", format!("{}{position_unit}", geometry.y));
        style.insert("left", format!("{}{position_unit}", geometry.x));
        style.insert("width", format!("{}{}", geometry.width, geometry.width_unit));
        style.insert("height", format!("{}{}", geometry.height, geometry.height_unit));
        style.insert("backgroundColor", hex_to_rgba(&appearance.background_color));
        if let Some(image) = &appearance.background_image {
            style.insert("backgroundImage", format!("url({})", image.url));
            style.insert("backgroundSize", image.size.clone());
            style.insert("backgroundPosition", image.position.clone());
            style.insert("backgroundRepeat", image.repeat.clone());
        }
        if appearance.border_width > 0.0 {
            style.insert("borderWidth", format!("{}px", appearance.border_width));
            style.insert("borderStyle", appearance.border_style.clone());
            style.insert("borderColor", hex_to_rgba(&appearance.border_color));
        }
        if appearance.border_width > 0.0 || appearance.border_radius > 0.0 {
            style.insert("borderRadius", format!("{}px", appearance.border_radius));
        }

        let mut input_type = None;
        let mut children = None;
        match &element.kind {
            ElementKind::Grid { columns, rows, gap } => {
                style.insert("gridTemplateColumns", format!("repeat({columns}, 1fr)"));
                style.insert("gridTemplateRows", format!("repeat({rows}, 1fr)"));
                style.insert("gap", format!("{gap}px"));
                children = Some(
                    elements
                        .iter()
                        .filter(|item| item.parent() == Some(element.id))
                        .map(Self::from_grid_item)
                        .collect(),
                );
            }
            ElementKind::Input { input_type: kind } => input_type = Some(kind.clone()),
            _ => {}
        }

        Self {
            name: element.name.clone(),
            editable: element.editable,
            text: text_entries(element),
            style,
            input_type,
            children,
        }
    }

    fn from_grid_item(item: &Element) -> Self {
        let appearance = &item.appearance;
        let typography = &item.typography;

        let mut style = StyleMap::new();
        style.insert("display", "flex");
        style.insert("justifyContent", typography.text_align.justify_content());
        style.insert("alignItems", typography.vertical_align.align_items());
        if let ElementKind::GridItem { placement, .. } = item.kind {
            style.insert(
                "gridColumn",
                format!("{} / {}", placement.column_start, placement.column_end),
            );
            style.insert(
                "gridRow",
                format!("{} / {}", placement.row_start, placement.row_end),
            );
        }
        style.insert("backgroundColor", hex_to_rgba(&appearance.background_color));
        style.insert("borderRadius", format!("{}px", appearance.border_radius));
        style.insert(
            "border",
            format!(
                "{}px {} {}",
                appearance.border_width, appearance.border_style, appearance.border_color
            ),
        );

        Self {
            name: item.name.clone(),
            editable: item.editable,
            text: text_entries(item),
            style,
            input_type: None,
            children: None,
        }
    }
}

/// Records for every top-level element, in list order.
#[must_use]
pub fn records(elements: &[Element]) -> Vec<TemplateRecord> {
    elements
        .iter()
        .filter(|element| !element.is_grid_item())
        .map(|element| TemplateRecord::from_element(element, elements))
        .collect()
}

fn text_entries(element: &Element) -> BTreeMap<String, TextEntry> {
    let style = TextStyle {
        font_size: format!("{}px", element.typography.font_size),
        color: element.typography.text_color.clone(),
    };
    element
        .content
        .iter()
        .map(|(language, text)| {
            (
                language.to_string(),
                TextEntry {
                    text: text.to_string(),
                    style: style.clone(),
                },
            )
        })
        .collect()
}

fn default_editable() -> bool {
    true
}

fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use builder_core::element::ElementType;

    fn kind(element_type: ElementType) -> ElementKind {
        ElementKind::with_defaults(element_type).expect("kind")
    }

    #[test]
    fn test_button_record() {
        let button = Element::new(kind(ElementType::Button), 0).with_text("en", "Submit");
        let record = TemplateRecord::from_element(&button, std::slice::from_ref(&button));

        assert_eq!(record.text["en"].text, "Submit");
        assert_eq!(record.text["en"].style.font_size, "16px");
        assert_eq!(record.style.get("backgroundColor"), Some("rgba(59, 130, 246, 1)"));
        assert_eq!(record.style.get("left"), Some("50px"));
        assert_eq!(record.style.get("borderRadius"), Some("4px"));
        assert!(record.style.get("borderWidth").is_none());
        assert!(record.children.is_none());
        assert!(record.input_type.is_none());
    }

    #[test]
    fn test_grid_record_nests_children() {
        let grid = Element::new(kind(ElementType::Grid), 0);
        let items: Vec<Element> = (0..3).map(|i| Element::grid_item(grid.id, i, 1)).collect();
        let mut elements = vec![grid];
        elements.extend(items);

        let all = records(&elements);
        assert_eq!(all.len(), 1);
        let grid_record = &all[0];
        assert_eq!(grid_record.style.get("display"), Some("grid"));
        assert_eq!(grid_record.style.get("gap"), Some("10px"));
        let children = grid_record.children.as_ref().expect("children");
        assert_eq!(children.len(), 3);
        assert_eq!(children[2].style.get("gridColumn"), Some("3 / 4"));
        assert_eq!(children[0].style.get("border"), Some("1px solid #d1d5db"));
    }

    #[test]
    fn test_input_record_carries_type() {
        let input = Element::new(kind(ElementType::Input), 0);
        let record = TemplateRecord::from_element(&input, &[]);
        assert_eq!(record.input_type.as_deref(), Some("text"));
    }

    #[test]
    fn test_style_order_preserved_in_json() {
        let element = Element::new(ElementKind::Div, 0);
        let json = serde_json::to_string(&TemplateRecord::from_element(&element, &[]))
            .expect("serialize");
        let display = json.find("\"display\"").expect("display");
        let background = json.find("\"backgroundColor\"").expect("background");
        assert!(display < background);
    }

    #[test]
    fn test_lenient_record_parsing() {
        let record: TemplateRecord = serde_json::from_str(
            r#"{"name": 7, "style": {"left": 120, "top": "30px", "nested": {}}, "text": {"en": {"text": "Hi"}}}"#,
        )
        .expect("record");
        assert_eq!(record.name, "7");
        assert!(record.editable);
        assert_eq!(record.style.get("left"), Some("120"));
        assert!(record.style.get("nested").is_none());
        assert_eq!(record.text["en"].text, "Hi");
        assert_eq!(record.text["en"].style.font_size, "");
    }
}
