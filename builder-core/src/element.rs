//! Page elements - the building blocks of a template.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::device::CanvasSize;
use crate::language::DEFAULT_LANGUAGE;

/// Default X/Y offset for newly created elements.
pub const DEFAULT_OFFSET: f32 = 50.0;
/// Default width of a plain element.
pub const DEFAULT_WIDTH: f32 = 200.0;
/// Default height of a plain element.
pub const DEFAULT_HEIGHT: f32 = 100.0;
/// Number of grid items generated for a new grid.
pub const DEFAULT_GRID_ITEMS: usize = 3;

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an element ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }

    /// Short token derived from the ID, used for generated names.
    #[must_use]
    pub fn short(&self) -> String {
        self.0.simple().to_string().chars().take(6).collect()
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The plain type tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    /// Generic container.
    Div,
    /// Clickable button.
    Button,
    /// Form input.
    Input,
    /// Heading text.
    Heading,
    /// Paragraph text.
    Paragraph,
    /// Grid container.
    Grid,
    /// Child cell of a grid.
    GridItem,
}

impl ElementType {
    /// All element types, in toolbar order.
    pub const ALL: [Self; 7] = [
        Self::Div,
        Self::Button,
        Self::Input,
        Self::Heading,
        Self::Paragraph,
        Self::Grid,
        Self::GridItem,
    ];

    /// The type name as used in exported templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Button => "button",
            Self::Input => "input",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Grid => "grid",
            Self::GridItem => "grid-item",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown element type: {s}"))
    }
}

/// Grid-line placement of a grid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPlacement {
    /// First column line.
    pub column_start: i32,
    /// Last column line (exclusive).
    pub column_end: i32,
    /// First row line.
    pub row_start: i32,
    /// Last row line (exclusive).
    pub row_end: i32,
}

impl GridPlacement {
    /// Row-major placement of the `index`-th cell in a grid with `columns` columns.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn row_major(index: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        let column = (index % columns) as i32 + 1;
        let row = (index / columns) as i32 + 1;
        Self {
            column_start: column,
            column_end: column + 1,
            row_start: row,
            row_end: row + 1,
        }
    }
}

/// Type-specific payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    /// Generic container.
    Div,
    /// Clickable button.
    Button,
    /// Form input.
    Input {
        /// HTML input type (`text`, `email`, ...).
        input_type: String,
    },
    /// Heading text.
    Heading,
    /// Paragraph text.
    Paragraph,
    /// Grid container laying out its grid items.
    Grid {
        /// Number of columns.
        columns: u32,
        /// Number of rows.
        rows: u32,
        /// Gap between cells in pixels.
        gap: f32,
    },
    /// A cell of a grid, positioned by grid lines.
    GridItem {
        /// The owning grid element.
        parent: ElementId,
        /// Placement within the parent grid.
        placement: GridPlacement,
    },
}

impl ElementKind {
    /// Default payload for a freshly added element of the given type.
    ///
    /// Returns `None` for [`ElementType::GridItem`], which can only be created
    /// together with its parent grid.
    #[must_use]
    pub fn with_defaults(element_type: ElementType) -> Option<Self> {
        Some(match element_type {
            ElementType::Div => Self::Div,
            ElementType::Button => Self::Button,
            ElementType::Input => Self::Input {
                input_type: "text".to_string(),
            },
            ElementType::Heading => Self::Heading,
            ElementType::Paragraph => Self::Paragraph,
            ElementType::Grid => Self::Grid {
                columns: 3,
                rows: 3,
                gap: 10.0,
            },
            ElementType::GridItem => return None,
        })
    }

    /// The plain type tag.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Div => ElementType::Div,
            Self::Button => ElementType::Button,
            Self::Input { .. } => ElementType::Input,
            Self::Heading => ElementType::Heading,
            Self::Paragraph => ElementType::Paragraph,
            Self::Grid { .. } => ElementType::Grid,
            Self::GridItem { .. } => ElementType::GridItem,
        }
    }
}

/// Length unit of a geometry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    /// CSS pixels.
    #[default]
    #[serde(rename = "px")]
    Px,
    /// Percentage of the canvas.
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    /// CSS suffix for this unit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
        }
    }

    /// Resolve a value in this unit to pixels against `extent`.
    #[must_use]
    pub fn to_px(self, value: f32, extent: f32) -> f32 {
        match self {
            Self::Px => value,
            Self::Percent => value / 100.0 * extent,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center horizontally.
    Center,
    /// Align to the right edge.
    Right,
    /// Spread across the line.
    Justify,
}

impl TextAlign {
    /// CSS `text-align` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }

    /// Flexbox `justify-content` value producing this alignment.
    #[must_use]
    pub const fn justify_content(self) -> &'static str {
        match self {
            Self::Left => "flex-start",
            Self::Right => "flex-end",
            Self::Center => "center",
            Self::Justify => "space-between",
        }
    }
}

/// Vertical content alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Align to the top edge.
    #[default]
    Top,
    /// Center vertically.
    Middle,
    /// Align to the bottom edge.
    Bottom,
}

impl VerticalAlign {
    /// Keyword name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }

    /// Flexbox `align-items` value producing this alignment.
    #[must_use]
    pub const fn align_items(self) -> &'static str {
        match self {
            Self::Top => "flex-start",
            Self::Bottom => "flex-end",
            Self::Middle => "center",
        }
    }
}

/// Position and size of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Left offset.
    pub x: f32,
    /// Top offset.
    pub y: f32,
    /// Width, in `width_unit`.
    pub width: f32,
    /// Height, in `height_unit`.
    pub height: f32,
    /// Unit of `width`.
    pub width_unit: Unit,
    /// Unit of `height`.
    pub height_unit: Unit,
}

impl Geometry {
    /// Pixel geometry at the default offset.
    #[must_use]
    pub const fn px(width: f32, height: f32) -> Self {
        Self {
            x: DEFAULT_OFFSET,
            y: DEFAULT_OFFSET,
            width,
            height,
            width_unit: Unit::Px,
            height_unit: Unit::Px,
        }
    }

    /// Unit of the `x`/`y` position.
    ///
    /// Positions are percentages only when both size axes are percentages.
    #[must_use]
    pub fn position_unit(&self) -> Unit {
        if self.width_unit == Unit::Percent && self.height_unit == Unit::Percent {
            Unit::Percent
        } else {
            Unit::Px
        }
    }

    /// Resolve the box against a canvas, in pixels.
    #[must_use]
    pub fn resolve(&self, canvas: CanvasSize) -> Rect {
        let position_unit = self.position_unit();
        Rect {
            x: position_unit.to_px(self.x, canvas.width),
            y: position_unit.to_px(self.y, canvas.height),
            width: self.width_unit.to_px(self.width, canvas.width),
            height: self.height_unit.to_px(self.height, canvas.height),
        }
    }
}

/// A resolved pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Check if a point is within this rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A background image with its CSS placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundImage {
    /// Data URL or external URL.
    pub url: String,
    /// CSS `background-size`.
    pub size: String,
    /// CSS `background-position`.
    pub position: String,
    /// CSS `background-repeat`.
    pub repeat: String,
}

impl BackgroundImage {
    /// Background covering the element, centered, not repeated.
    #[must_use]
    pub fn cover(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: "cover".to_string(),
            position: "center".to_string(),
            repeat: "no-repeat".to_string(),
        }
    }
}

/// Box appearance of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Background color, hex or `rgba(...)`.
    pub background_color: String,
    /// Optional background image.
    pub background_image: Option<BackgroundImage>,
    /// Corner radius in pixels.
    pub border_radius: f32,
    /// Border width in pixels.
    pub border_width: f32,
    /// Border color.
    pub border_color: String,
    /// CSS border style.
    pub border_style: String,
}

/// Text styling of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// CSS font family list.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// CSS font weight.
    pub font_weight: String,
    /// Text color.
    pub text_color: String,
    /// Horizontal alignment.
    pub text_align: TextAlign,
    /// Vertical alignment.
    pub vertical_align: VerticalAlign,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Inter, sans-serif".to_string(),
            font_size: 16.0,
            font_weight: "normal".to_string(),
            text_color: "#000000".to_string(),
            text_align: TextAlign::Center,
            vertical_align: VerticalAlign::Middle,
        }
    }
}

/// Display text keyed by language code.
///
/// Always carries an `en` entry; lookups for a missing language fall back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(BTreeMap<String, String>);

impl Content {
    /// Content with only the default-language text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(DEFAULT_LANGUAGE.to_string(), text.into());
        Self(map)
    }

    /// Text for exactly `language`, if present.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Text for `language`, falling back to `en`, then to the empty string.
    #[must_use]
    pub fn resolve(&self, language: &str) -> &str {
        self.get(language)
            .filter(|text| !text.is_empty())
            .or_else(|| self.get(DEFAULT_LANGUAGE))
            .unwrap_or_default()
    }

    /// Set the text for a language.
    pub fn set(&mut self, language: impl Into<String>, text: impl Into<String>) {
        self.0.insert(language.into(), text.into());
    }

    /// Add `language` with the `en` text if it is missing.
    pub fn ensure_language(&mut self, language: &str) {
        if !self.0.contains_key(language) {
            let fallback = self.get(DEFAULT_LANGUAGE).unwrap_or_default().to_string();
            self.0.insert(language.to_string(), fallback);
        }
    }

    /// Iterate `(language, text)` pairs in language order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(lang, text)| (lang.as_str(), text.as_str()))
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no text is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A page element with geometry, style and content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Type-specific payload.
    pub kind: ElementKind,
    /// Human label used by exporters.
    pub name: String,
    /// Whether exported templates mark this element as editable.
    pub editable: bool,
    /// Position and size.
    pub geometry: Geometry,
    /// Background and border.
    pub appearance: Appearance,
    /// Text styling.
    pub typography: Typography,
    /// Display text per language.
    pub content: Content,
    /// Paint order.
    pub z_index: i32,
}

impl Element {
    /// Create a new element of the given kind with its type defaults.
    #[must_use]
    pub fn new(kind: ElementKind, z_index: i32) -> Self {
        let id = ElementId::new();
        let mut typography = Typography::default();
        let (geometry, appearance, text, name) = match &kind {
            ElementKind::Grid { .. } => (
                Geometry::px(400.0, 300.0),
                Appearance::plain("#e2e8f0", 0.0),
                "New Element",
                format!("element_{}", id.short()),
            ),
            ElementKind::GridItem { .. } => {
                typography.font_size = 14.0;
                (
                    Geometry {
                        x: 0.0,
                        y: 0.0,
                        width: 0.0,
                        height: 0.0,
                        width_unit: Unit::Px,
                        height_unit: Unit::Px,
                    },
                    Appearance {
                        background_color: "#f3f4f6".to_string(),
                        background_image: None,
                        border_radius: 0.0,
                        border_width: 1.0,
                        border_color: "#d1d5db".to_string(),
                        border_style: "solid".to_string(),
                    },
                    "Grid Item",
                    format!("grid_item_{}", id.short()),
                )
            }
            ElementKind::Button => (
                Geometry::px(DEFAULT_WIDTH, DEFAULT_HEIGHT),
                Appearance::plain("#3b82f6", 4.0),
                "New Element",
                format!("element_{}", id.short()),
            ),
            ElementKind::Input { .. } => (
                Geometry::px(DEFAULT_WIDTH, DEFAULT_HEIGHT),
                Appearance::plain("#e2e8f0", 0.0),
                "Placeholder text",
                format!("element_{}", id.short()),
            ),
            ElementKind::Div | ElementKind::Heading | ElementKind::Paragraph => (
                Geometry::px(DEFAULT_WIDTH, DEFAULT_HEIGHT),
                Appearance::plain("#e2e8f0", 0.0),
                "New Element",
                format!("element_{}", id.short()),
            ),
        };

        Self {
            id,
            kind,
            name,
            editable: true,
            geometry,
            appearance,
            typography,
            content: Content::new(text),
            z_index,
        }
    }

    /// Create the `index`-th default cell of a grid.
    #[must_use]
    pub fn grid_item(parent: ElementId, index: usize, z_index: i32) -> Self {
        let mut item = Self::new(
            ElementKind::GridItem {
                parent,
                placement: GridPlacement::row_major(index, DEFAULT_GRID_ITEMS),
            },
            z_index,
        );
        item.content = Content::new(format!("Grid Item {}", index + 1));
        item
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self
    }

    /// Set the text for a language.
    #[must_use]
    pub fn with_text(mut self, language: &str, text: impl Into<String>) -> Self {
        self.content.set(language, text);
        self
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The plain type tag.
    #[must_use]
    pub const fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Whether this is a grid container.
    #[must_use]
    pub const fn is_grid(&self) -> bool {
        matches!(self.kind, ElementKind::Grid { .. })
    }

    /// Whether this is a grid cell.
    #[must_use]
    pub const fn is_grid_item(&self) -> bool {
        matches!(self.kind, ElementKind::GridItem { .. })
    }

    /// The owning grid, for grid items.
    #[must_use]
    pub const fn parent(&self) -> Option<ElementId> {
        match self.kind {
            ElementKind::GridItem { parent, .. } => Some(parent),
            _ => None,
        }
    }

    /// Display text for `language` with `en` fallback.
    #[must_use]
    pub fn text(&self, language: &str) -> &str {
        self.content.resolve(language)
    }

    /// Resolved pixel box on a canvas.
    #[must_use]
    pub fn bounds(&self, canvas: CanvasSize) -> Rect {
        self.geometry.resolve(canvas)
    }
}

impl Appearance {
    fn plain(background_color: &str, border_radius: f32) -> Self {
        Self {
            background_color: background_color.to_string(),
            background_image: None,
            border_radius,
            border_width: 0.0,
            border_color: "#000000".to_string(),
            border_style: "solid".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_defaults() {
        let button = Element::new(ElementKind::Button, 0);
        assert_eq!(button.element_type(), ElementType::Button);
        assert_eq!(button.appearance.background_color, "#3b82f6");
        assert!((button.appearance.border_radius - 4.0).abs() < f32::EPSILON);
        assert!((button.geometry.x - 50.0).abs() < f32::EPSILON);
        assert!((button.geometry.width - 200.0).abs() < f32::EPSILON);
        assert_eq!(button.text("en"), "New Element");
        assert!(button.name.starts_with("element_"));
        assert!(button.editable);
    }

    #[test]
    fn test_input_defaults() {
        let kind = ElementKind::with_defaults(ElementType::Input).expect("input kind");
        let input = Element::new(kind, 2);
        assert_eq!(input.text("en"), "Placeholder text");
        assert_eq!(
            input.kind,
            ElementKind::Input {
                input_type: "text".to_string()
            }
        );
        assert_eq!(input.z_index, 2);
    }

    #[test]
    fn test_grid_item_has_no_standalone_defaults() {
        assert!(ElementKind::with_defaults(ElementType::GridItem).is_none());
    }

    #[test]
    fn test_grid_item_placement_is_row_major() {
        let parent = ElementId::new();
        let starts: Vec<i32> = (0..3)
            .map(|i| match Element::grid_item(parent, i, 1).kind {
                ElementKind::GridItem { placement, .. } => placement.column_start,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(starts, vec![1, 2, 3]);

        let fourth = GridPlacement::row_major(3, 3);
        assert_eq!(fourth.column_start, 1);
        assert_eq!(fourth.row_start, 2);
        assert_eq!(fourth.row_end, 3);
    }

    #[test]
    fn test_grid_item_defaults() {
        let parent = ElementId::new();
        let item = Element::grid_item(parent, 1, 5);
        assert_eq!(item.parent(), Some(parent));
        assert_eq!(item.text("en"), "Grid Item 2");
        assert!(item.name.starts_with("grid_item_"));
        assert!((item.typography.font_size - 14.0).abs() < f32::EPSILON);
        assert_eq!(item.appearance.border_color, "#d1d5db");
    }

    #[test]
    fn test_content_fallback() {
        let mut content = Content::new("Hello");
        assert_eq!(content.resolve("fr"), "Hello");
        content.set("fr", "Bonjour");
        assert_eq!(content.resolve("fr"), "Bonjour");
        content.set("de", "");
        assert_eq!(content.resolve("de"), "Hello");
    }

    #[test]
    fn test_content_ensure_language_copies_english() {
        let mut content = Content::new("Hello");
        content.ensure_language("es");
        assert_eq!(content.get("es"), Some("Hello"));
        content.set("es", "Hola");
        content.ensure_language("es");
        assert_eq!(content.get("es"), Some("Hola"));
    }

    #[test]
    fn test_alignment_mapping() {
        assert_eq!(TextAlign::Left.justify_content(), "flex-start");
        assert_eq!(TextAlign::Right.justify_content(), "flex-end");
        assert_eq!(TextAlign::Center.justify_content(), "center");
        assert_eq!(TextAlign::Justify.justify_content(), "space-between");
        assert_eq!(VerticalAlign::Top.align_items(), "flex-start");
        assert_eq!(VerticalAlign::Bottom.align_items(), "flex-end");
        assert_eq!(VerticalAlign::Middle.align_items(), "center");
    }

    #[test]
    fn test_percent_geometry_resolves_against_canvas() {
        let geometry = Geometry {
            x: 10.0,
            y: 50.0,
            width: 50.0,
            height: 25.0,
            width_unit: Unit::Percent,
            height_unit: Unit::Percent,
        };
        let rect = geometry.resolve(CanvasSize::new(1000.0, 800.0));
        assert!((rect.x - 100.0).abs() < f32::EPSILON);
        assert!((rect.y - 400.0).abs() < f32::EPSILON);
        assert!((rect.width - 500.0).abs() < f32::EPSILON);
        assert!((rect.height - 200.0).abs() < f32::EPSILON);
        assert!(rect.contains(150.0, 450.0));
        assert!(!rect.contains(50.0, 450.0));
    }

    #[test]
    fn test_mixed_units_position_in_pixels() {
        let mut geometry = Geometry::px(50.0, 100.0);
        geometry.width_unit = Unit::Percent;
        assert_eq!(geometry.position_unit(), Unit::Px);
    }

    #[test]
    fn test_element_type_parse() {
        assert_eq!("grid-item".parse::<ElementType>(), Ok(ElementType::GridItem));
        assert!("span".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_element_serde_roundtrip() {
        let grid = ElementKind::Grid {
            columns: 3,
            rows: 3,
            gap: 10.0,
        };
        let element = Element::new(grid, 0).with_text("fr", "Nouveau");
        let json = serde_json::to_string(&element).expect("serialize");
        let back: Element = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, element);
    }
}
