//! Partial element updates.
//!
//! An [`ElementPatch`] lists only the fields to change. Applying it is a
//! shallow merge: every `Some` field overwrites the element's value, every
//! `None` field is left alone. Kind-specific fields (`input_type`, `grid`,
//! `placement`) only apply to elements of the matching kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::{BackgroundImage, Element, ElementKind, TextAlign, Unit, VerticalAlign};
use crate::language::is_valid_language_code;

/// Changes to a grid container's template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridPatch {
    /// New column count.
    pub columns: Option<u32>,
    /// New row count.
    pub rows: Option<u32>,
    /// New gap in pixels.
    pub gap: Option<f32>,
}

/// Changes to a grid item's placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPatch {
    /// New first column line.
    pub column_start: Option<i32>,
    /// New last column line.
    pub column_end: Option<i32>,
    /// New first row line.
    pub row_start: Option<i32>,
    /// New last row line.
    pub row_end: Option<i32>,
}

/// A partial update merged into an existing element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    /// New left offset.
    pub x: Option<f32>,
    /// New top offset.
    pub y: Option<f32>,
    /// New width.
    pub width: Option<f32>,
    /// New height.
    pub height: Option<f32>,
    /// New width unit.
    pub width_unit: Option<Unit>,
    /// New height unit.
    pub height_unit: Option<Unit>,
    /// New background color.
    pub background_color: Option<String>,
    /// Replaces the background image.
    pub background_image: Option<BackgroundImage>,
    /// Removes the background image; wins over `background_image`.
    pub clear_background_image: bool,
    /// New corner radius.
    pub border_radius: Option<f32>,
    /// New border width.
    pub border_width: Option<f32>,
    /// New border color.
    pub border_color: Option<String>,
    /// New border style.
    pub border_style: Option<String>,
    /// New font family.
    pub font_family: Option<String>,
    /// New font size.
    pub font_size: Option<f32>,
    /// New font weight.
    pub font_weight: Option<String>,
    /// New text color.
    pub text_color: Option<String>,
    /// New horizontal alignment.
    pub text_align: Option<TextAlign>,
    /// New vertical alignment.
    pub vertical_align: Option<VerticalAlign>,
    /// Per-language text entries to set.
    pub text: BTreeMap<String, String>,
    /// New name.
    pub name: Option<String>,
    /// New editable flag.
    pub editable: Option<bool>,
    /// New paint order.
    pub z_index: Option<i32>,
    /// Input elements only.
    pub input_type: Option<String>,
    /// Grid elements only.
    pub grid: Option<GridPatch>,
    /// Grid items only.
    pub placement: Option<PlacementPatch>,
}

impl ElementPatch {
    /// Patch moving an element.
    #[must_use]
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch setting the text of one language.
    #[must_use]
    pub fn text(language: impl Into<String>, text: impl Into<String>) -> Self {
        let mut patch = Self::default();
        patch.text.insert(language.into(), text.into());
        patch
    }

    /// Patch replacing the background image.
    #[must_use]
    pub fn background(image: BackgroundImage) -> Self {
        Self {
            background_image: Some(image),
            ..Self::default()
        }
    }

    /// Merge this patch into `element`.
    pub fn apply_to(&self, element: &mut Element) {
        let geometry = &mut element.geometry;
        set(&mut geometry.x, self.x);
        set(&mut geometry.y, self.y);
        set(&mut geometry.width, self.width);
        set(&mut geometry.height, self.height);
        set(&mut geometry.width_unit, self.width_unit);
        set(&mut geometry.height_unit, self.height_unit);

        let appearance = &mut element.appearance;
        set(&mut appearance.background_color, self.background_color.clone());
        if self.clear_background_image {
            appearance.background_image = None;
        } else if let Some(image) = &self.background_image {
            appearance.background_image = Some(image.clone());
        }
        set(&mut appearance.border_radius, self.border_radius);
        set(&mut appearance.border_width, self.border_width);
        set(&mut appearance.border_color, self.border_color.clone());
        set(&mut appearance.border_style, self.border_style.clone());

        let typography = &mut element.typography;
        set(&mut typography.font_family, self.font_family.clone());
        set(&mut typography.font_size, self.font_size);
        set(&mut typography.font_weight, self.font_weight.clone());
        set(&mut typography.text_color, self.text_color.clone());
        set(&mut typography.text_align, self.text_align);
        set(&mut typography.vertical_align, self.vertical_align);

        for (language, text) in &self.text {
            if is_valid_language_code(language) {
                element.content.set(language.clone(), text.clone());
            } else {
                tracing::warn!("Ignoring text for invalid language code {language}");
            }
        }
        set(&mut element.name, self.name.clone());
        set(&mut element.editable, self.editable);
        set(&mut element.z_index, self.z_index);

        match &mut element.kind {
            ElementKind::Input { input_type } => set(input_type, self.input_type.clone()),
            ElementKind::Grid { columns, rows, gap } => {
                if let Some(grid) = &self.grid {
                    set(columns, grid.columns);
                    set(rows, grid.rows);
                    set(gap, grid.gap);
                }
            }
            ElementKind::GridItem { placement, .. } => {
                if let Some(patch) = &self.placement {
                    set(&mut placement.column_start, patch.column_start);
                    set(&mut placement.column_end, patch.column_end);
                    set(&mut placement.row_start, patch.row_start);
                    set(&mut placement.row_end, patch.row_end);
                }
            }
            ElementKind::Div
            | ElementKind::Button
            | ElementKind::Heading
            | ElementKind::Paragraph => {}
        }
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
