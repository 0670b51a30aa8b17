//! CSS declarations shared by the HTML and component emitters.

use builder_core::element::{Appearance, Element, ElementKind, Typography};

/// One `property: value` pair, property in kebab-case.
pub(crate) type Declaration = (&'static str, String);

/// Declarations for a top-level (absolutely positioned) element.
pub(crate) fn element_declarations(element: &Element) -> Vec<Declaration> {
    let geometry = &element.geometry;
    let position_unit = geometry.position_unit();
    let mut out = vec![
        ("position", "absolute".to_string()),
        ("left", format!("{}{position_unit}", geometry.x)),
        ("top", format!("{}{position_unit}", geometry.y)),
        ("width", format!("{}{}", geometry.width, geometry.width_unit)),
        ("height", format!("{}{}", geometry.height, geometry.height_unit)),
    ];
    push_background(&mut out, &element.appearance);
    push_border(&mut out, &element.appearance);
    out.push(("z-index", element.z_index.to_string()));
    push_typography(&mut out, &element.typography);
    out.push(("text-align", element.typography.text_align.as_str().to_string()));

    if let ElementKind::Grid { columns, rows, gap } = element.kind {
        out.push(("display", "grid".to_string()));
        out.push(("grid-template-columns", format!("repeat({columns}, 1fr)")));
        out.push(("grid-template-rows", format!("repeat({rows}, 1fr)")));
        out.push(("gap", format!("{gap}px")));
    } else {
        push_flex(&mut out, &element.typography);
    }
    out
}

/// Declarations for a grid item placed inside its grid.
pub(crate) fn grid_item_declarations(item: &Element) -> Vec<Declaration> {
    let mut out = vec![("position", "relative".to_string())];
    if let ElementKind::GridItem { placement, .. } = item.kind {
        out.push((
            "grid-column",
            format!("{} / {}", placement.column_start, placement.column_end),
        ));
        out.push((
            "grid-row",
            format!("{} / {}", placement.row_start, placement.row_end),
        ));
    }
    push_background(&mut out, &item.appearance);
    push_border(&mut out, &item.appearance);
    push_typography(&mut out, &item.typography);
    push_flex(&mut out, &item.typography);
    out
}

fn push_background(out: &mut Vec<Declaration>, appearance: &Appearance) {
    out.push(("background-color", appearance.background_color.clone()));
    if let Some(image) = &appearance.background_image {
        out.push(("background-image", format!("url({})", image.url)));
        out.push(("background-size", image.size.clone()));
        out.push(("background-position", image.position.clone()));
        out.push(("background-repeat", image.repeat.clone()));
    }
}

fn push_border(out: &mut Vec<Declaration>, appearance: &Appearance) {
    out.push(("border-radius", format!("{}px", appearance.border_radius)));
    out.push((
        "border",
        format!(
            "{}px {} {}",
            appearance.border_width, appearance.border_style, appearance.border_color
        ),
    ));
}

fn push_typography(out: &mut Vec<Declaration>, typography: &Typography) {
    out.push(("font-family", typography.font_family.clone()));
    out.push(("font-size", format!("{}px", typography.font_size)));
    out.push(("font-weight", typography.font_weight.clone()));
    out.push(("color", typography.text_color.clone()));
}

fn push_flex(out: &mut Vec<Declaration>, typography: &Typography) {
    out.push(("display", "flex".to_string()));
    out.push(("align-items", typography.vertical_align.align_items().to_string()));
    out.push((
        "justify-content",
        typography.text_align.justify_content().to_string(),
    ));
}

/// Convert a kebab-case CSS property to its camelCase style-object key.
pub(crate) fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for c in property.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Expand `#rrggbb` or `#rgb` to `rgba(r, g, b, 1)`.
///
/// Anything else (named colors, `rgba(...)`, malformed hex) is returned as-is.
pub(crate) fn hex_to_rgba(color: &str) -> String {
    let Some(hex) = color.strip_prefix('#') else {
        return color.to_string();
    };
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return color.to_string(),
    };
    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => format!("rgba({r}, {g}, {b}, 1)"),
        _ => color.to_string(),
    }
}
