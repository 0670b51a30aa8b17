//! Editor Integration Tests
//!
//! Drives the editor through its action reducer the way a canvas front end
//! would:
//! - Building a small page
//! - Grid creation and item placement
//! - Undo/redo across mixed edits
//! - Language management

use builder_core::{
    Action, DevicePreset, EditorConfig, EditorState, ElementKind, ElementPatch, ElementType,
    GridPlacement, MediaLibrary, Orientation, Point,
};
use proptest::prelude::*;

fn placements(state: &EditorState, grid: builder_core::ElementId) -> Vec<GridPlacement> {
    state
        .children_of(grid)
        .filter_map(|item| match item.kind {
            ElementKind::GridItem { placement, .. } => Some(placement),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Page Building
// ============================================================================

#[test]
fn test_build_button_with_label() {
    let mut state = EditorState::default();
    let id = state.add_element(ElementType::Button).expect("button");
    state.update_element(id, ElementPatch::text("en", "Submit"));

    let button = state.element(id).expect("button exists");
    assert_eq!(button.text("en"), "Submit");
    assert_eq!(button.appearance.background_color, "#3b82f6");
    assert!((button.appearance.border_radius - 4.0).abs() < f32::EPSILON);
    assert!(button.name.starts_with("element_"));
    assert_eq!(button.name.len(), "element_".len() + 6);
}

#[test]
fn test_grid_items_fill_first_row() {
    let mut state = EditorState::default();
    let grid = state.add_element(ElementType::Grid).expect("grid");

    let cells = placements(&state, grid);
    let columns: Vec<(i32, i32)> = cells.iter().map(|p| (p.column_start, p.column_end)).collect();
    assert_eq!(columns, vec![(1, 2), (2, 3), (3, 4)]);
    assert!(cells.iter().all(|p| p.row_start == 1 && p.row_end == 2));

    let texts: Vec<&str> = state.children_of(grid).map(|item| item.text("en")).collect();
    assert_eq!(texts, vec!["Grid Item 1", "Grid Item 2", "Grid Item 3"]);
}

#[test]
fn test_grid_items_are_not_hit_targets() {
    let mut state = EditorState::default();
    let grid = state.add_element(ElementType::Grid).expect("grid");
    assert_eq!(state.element_at(60.0, 60.0), Some(grid));
}

#[test]
fn test_media_background_applied_through_patch() {
    let mut state = EditorState::default();
    let id = state.add_element(ElementType::Div).expect("div");
    let mut library = MediaLibrary::new();
    let patch = library
        .add_external("https://example.com/hero.webp")
        .expect("media")
        .background_patch();
    state.update_element(id, patch);

    let image = state
        .element(id)
        .and_then(|e| e.appearance.background_image.as_ref())
        .expect("background image");
    assert_eq!(image.url, "https://example.com/hero.webp");
}

#[test]
fn test_configured_device_drives_canvas_size() {
    let config = EditorConfig::from_json(r#"{"device": "tablet", "orientation": "landscape"}"#)
        .expect("config");
    let mut state = EditorState::new(config);
    let size = state.canvas_size();
    assert!((size.width - 1024.0).abs() < f32::EPSILON);
    assert!((size.height - 768.0).abs() < f32::EPSILON);

    state.dispatch(Action::SetDevice {
        device: DevicePreset::Tv,
    });
    state.dispatch(Action::SetOrientation {
        orientation: Orientation::Landscape,
    });
    let size = state.canvas_size();
    assert!((size.width - 1920.0).abs() < f32::EPSILON);
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_undo_restores_previous_state() {
    let mut state = EditorState::default();
    let id = state.add_element(ElementType::Div).expect("div");
    state.update_element(id, ElementPatch::position(300.0, 300.0));
    state.remove_element(id);
    assert!(state.elements().is_empty());

    state.undo();
    let element = state.element(id).expect("restored");
    assert!((element.geometry.x - 300.0).abs() < f32::EPSILON);

    state.undo();
    let element = state.element(id).expect("restored");
    assert!((element.geometry.x - 50.0).abs() < f32::EPSILON);
}

#[test]
fn test_new_edit_after_undo_drops_redo() {
    let mut state = EditorState::default();
    state.add_element(ElementType::Div).expect("div");
    state.add_element(ElementType::Button).expect("button");
    state.undo();
    assert!(state.can_redo());

    state.add_element(ElementType::Heading).expect("heading");
    assert!(!state.can_redo());
    let types: Vec<ElementType> = state.elements().iter().map(|e| e.element_type()).collect();
    assert_eq!(types, vec![ElementType::Div, ElementType::Heading]);
}

#[test]
fn test_drag_gesture_is_undoable_step_by_step() {
    let mut state = EditorState::default();
    let id = state.add_element(ElementType::Div).expect("div");
    state.dispatch(Action::PointerDown {
        id,
        pointer: Point::new(50.0, 50.0),
    });
    for step in 1..=3u8 {
        let offset = f32::from(step) * 10.0;
        state.dispatch(Action::PointerMove {
            pointer: Point::new(50.0 + offset, 50.0),
        });
    }
    state.dispatch(Action::PointerUp);

    state.undo();
    let x = state.element(id).map(|e| e.geometry.x).expect("element");
    assert!((x - 70.0).abs() < f32::EPSILON);
}

// ============================================================================
// Languages
// ============================================================================

#[test]
fn test_translated_text_with_fallback() {
    let mut state = EditorState::default();
    let id = state.add_element(ElementType::Heading).expect("heading");
    state.update_element(id, ElementPatch::text("en", "Welcome"));
    state.add_language("es").expect("es");
    state.update_element(id, ElementPatch::text("es", "Bienvenido"));
    state.set_language("es").expect("switch");

    let heading = state.element(id).expect("heading");
    assert_eq!(heading.text(state.active_language()), "Bienvenido");
    assert_eq!(heading.text("de"), "Welcome");
}

// ============================================================================
// Properties
// ============================================================================

fn edit_strategy() -> impl Strategy<Value = ElementType> {
    prop_oneof![
        Just(ElementType::Div),
        Just(ElementType::Button),
        Just(ElementType::Input),
        Just(ElementType::Heading),
        Just(ElementType::Paragraph),
        Just(ElementType::Grid),
    ]
}

proptest! {
    #[test]
    fn prop_undo_all_then_redo_all_round_trips(
        types in prop::collection::vec(edit_strategy(), 1..12),
    ) {
        let mut state = EditorState::default();
        for element_type in &types {
            state.add_element(*element_type).expect("add");
        }
        let final_elements = state.elements().to_vec();

        for _ in 0..types.len() {
            state.undo();
        }
        prop_assert!(state.elements().is_empty());
        prop_assert!(!state.can_undo());

        for _ in 0..types.len() {
            state.redo();
        }
        prop_assert_eq!(state.elements(), final_elements.as_slice());
        prop_assert!(!state.can_redo());
    }

    #[test]
    fn prop_undo_n_matches_snapshot(
        types in prop::collection::vec(edit_strategy(), 1..10),
        back in 0usize..10,
    ) {
        let mut state = EditorState::default();
        let mut snapshots = vec![Vec::new()];
        for element_type in &types {
            state.add_element(*element_type).expect("add");
            snapshots.push(state.elements().to_vec());
        }
        let back = back.min(types.len());
        for _ in 0..back {
            state.undo();
        }
        prop_assert_eq!(state.elements(), snapshots[types.len() - back].as_slice());
    }

    #[test]
    fn prop_dragged_pixel_boxes_stay_on_canvas(x in -2000.0f32..4000.0, y in -2000.0f32..4000.0) {
        let mut state = EditorState::default();
        let id = state.add_element(ElementType::Div).expect("div");
        state.dispatch(Action::PointerDown { id, pointer: Point::new(60.0, 60.0) });
        state.dispatch(Action::PointerMove { pointer: Point::new(x, y) });

        let canvas = state.canvas_size();
        let element = state.element(id).expect("element");
        prop_assert!(element.geometry.x >= 0.0);
        prop_assert!(element.geometry.y >= 0.0);
        prop_assert!(element.geometry.x + element.geometry.width <= canvas.width);
        prop_assert!(element.geometry.y + element.geometry.height <= canvas.height);
    }
}
