//! Export/Import Integration Tests
//!
//! Exercises the full template path through an editor:
//! - Button and grid scenarios through JSON
//! - JSON and YAML re-import
//! - Writing export files to disk
//! - Import failures leaving the editor untouched

use builder_core::{EditorState, ElementPatch, ElementType};
use builder_export::{
    import_file, import_into, parse_records, ExportFormat, ImportError, ImportFormat,
    TemplateExporter,
};
use proptest::prelude::*;

fn export(state: &EditorState, format: ExportFormat) -> String {
    TemplateExporter::with_defaults()
        .export(state.elements(), format)
        .expect("export")
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_button_scenario_json() {
    let mut state = EditorState::default();
    let id = state.add_element(ElementType::Button).expect("button");
    state.update_element(id, ElementPatch::text("en", "Submit"));

    let json: serde_json::Value =
        serde_json::from_str(&export(&state, ExportFormat::Json)).expect("valid json");
    let record = &json[0];
    assert_eq!(record["text"]["en"]["text"], "Submit");
    assert_eq!(record["style"]["backgroundColor"], "rgba(59, 130, 246, 1)");
    assert_eq!(record["style"]["left"], "50px");
    assert_eq!(record["style"]["top"], "50px");
    assert_eq!(record["editable"], true);
}

#[test]
fn test_grid_scenario_json() {
    let mut state = EditorState::default();
    let grid = state.add_element(ElementType::Grid).expect("grid");
    assert_eq!(state.children_of(grid).count(), 3);

    let json: serde_json::Value =
        serde_json::from_str(&export(&state, ExportFormat::Json)).expect("valid json");
    let records = json.as_array().expect("array");
    assert_eq!(records.len(), 1);
    let columns: Vec<&str> = records[0]["children"]
        .as_array()
        .expect("children")
        .iter()
        .filter_map(|child| child["style"]["gridColumn"].as_str())
        .collect();
    assert_eq!(columns, vec!["1 / 2", "2 / 3", "3 / 4"]);
}

#[test]
fn test_json_reimport_adds_one_element_per_record() {
    let mut state = EditorState::default();
    state.add_element(ElementType::Heading).expect("heading");
    state.add_element(ElementType::Grid).expect("grid");
    state.add_element(ElementType::Input).expect("input");
    let before = state.elements().len();
    let json = export(&state, ExportFormat::Json);

    let added = import_into(&mut state, ImportFormat::Json, &json).expect("import");
    assert_eq!(added, 3);
    assert_eq!(state.elements().len(), before + 3);
    assert!(state.elements()[before..]
        .iter()
        .all(|e| e.element_type() == ElementType::Div));
}

#[test]
fn test_yaml_reimport_keeps_names_and_text() {
    let mut state = EditorState::default();
    let id = state.add_element(ElementType::Paragraph).expect("paragraph");
    state.add_language("fr").expect("fr");
    state.update_element(id, ElementPatch::text("fr", "Bonjour"));
    state.update_element(
        id,
        ElementPatch {
            name: Some("intro".to_string()),
            editable: Some(false),
            ..ElementPatch::default()
        },
    );
    let yaml = export(&state, ExportFormat::Yaml);

    let mut target = EditorState::default();
    import_into(&mut target, ImportFormat::Yaml, &yaml).expect("import");
    let imported = &target.elements()[0];
    assert_eq!(imported.name, "intro");
    assert!(!imported.editable);
    assert_eq!(imported.text("en"), "New Element");
    assert_eq!(imported.content.get("fr"), Some("Bonjour"));
}

#[test]
fn test_malformed_json_leaves_list_unchanged() {
    let mut state = EditorState::default();
    state.add_element(ElementType::Div).expect("div");
    let before = state.elements().to_vec();

    let err = import_into(&mut state, ImportFormat::Json, "{not valid").expect_err("error");
    assert!(matches!(err, ImportError::InvalidJson(_)));
    assert_eq!(state.elements(), before.as_slice());
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_write_all_formats_to_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = EditorState::default();
    state.add_element(ElementType::Button).expect("button");
    let exporter = TemplateExporter::with_defaults();

    for format in ExportFormat::ALL {
        let path = exporter
            .write_to_dir(dir.path(), state.elements(), format)
            .expect("write");
        assert_eq!(path, dir.path().join(format.filename()));
        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(!contents.is_empty());
    }
}

#[test]
fn test_import_written_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = EditorState::default();
    state.add_element(ElementType::Div).expect("div");
    let exporter = TemplateExporter::with_defaults();

    let json_path = exporter
        .write_to_dir(dir.path(), state.elements(), ExportFormat::Json)
        .expect("json");
    let yaml_path = exporter
        .write_to_dir(dir.path(), state.elements(), ExportFormat::Yaml)
        .expect("yaml");

    let mut target = EditorState::default();
    assert_eq!(import_file(&mut target, &json_path).expect("json import"), 1);
    assert_eq!(import_file(&mut target, &yaml_path).expect("yaml import"), 1);
    assert_eq!(target.elements().len(), 2);

    let html_path = exporter
        .write_to_dir(dir.path(), state.elements(), ExportFormat::Html)
        .expect("html");
    assert!(matches!(
        import_file(&mut target, &html_path),
        Err(ImportError::UnsupportedFile(_))
    ));
    assert!(matches!(
        import_file(&mut target, &dir.path().join("missing.json")),
        Err(ImportError::Io(_))
    ));
}

// ============================================================================
// Properties
// ============================================================================

fn element_type() -> impl Strategy<Value = ElementType> {
    prop_oneof![
        Just(ElementType::Div),
        Just(ElementType::Button),
        Just(ElementType::Input),
        Just(ElementType::Heading),
        Just(ElementType::Paragraph),
        Just(ElementType::Grid),
    ]
}

fn build(types: &[ElementType], positions: &[(u16, u16)]) -> EditorState {
    let mut state = EditorState::default();
    for (element_type, (x, y)) in types.iter().zip(positions) {
        let id = state.add_element(*element_type).expect("add");
        state.update_element(id, ElementPatch::position(f32::from(*x), f32::from(*y)));
    }
    state
}

proptest! {
    #[test]
    fn prop_json_left_top_match_geometry(
        types in prop::collection::vec(element_type(), 1..8),
        positions in prop::collection::vec((0u16..1000, 0u16..700), 8),
    ) {
        let state = build(&types, &positions);
        let json: serde_json::Value =
            serde_json::from_str(&export(&state, ExportFormat::Json)).expect("json");
        let records = json.as_array().expect("array");
        let top_level: Vec<_> = state.top_level_elements().collect();
        prop_assert_eq!(records.len(), top_level.len());
        for (record, element) in records.iter().zip(top_level) {
            let left = format!("{}px", element.geometry.x);
            let top = format!("{}px", element.geometry.y);
            prop_assert_eq!(record["style"]["left"].as_str(), Some(left.as_str()));
            prop_assert_eq!(record["style"]["top"].as_str(), Some(top.as_str()));
        }
    }

    #[test]
    fn prop_json_import_restores_positions(
        types in prop::collection::vec(element_type(), 1..8),
        positions in prop::collection::vec((0u16..1000, 0u16..700), 8),
    ) {
        let state = build(&types, &positions);
        let json = export(&state, ExportFormat::Json);
        let mut target = EditorState::default();
        let added = import_into(&mut target, ImportFormat::Json, &json).expect("import");
        prop_assert_eq!(added, types.len());
        for (imported, original) in target.elements().iter().zip(state.top_level_elements()) {
            prop_assert!((imported.geometry.x - original.geometry.x).abs() < f32::EPSILON);
            prop_assert!((imported.geometry.y - original.geometry.y).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn prop_yaml_round_trips_names_and_text(
        entries in prop::collection::vec(("[ -~\n]{0,24}", "[ -~\n]{0,24}"), 1..6),
    ) {
        let mut state = EditorState::default();
        for (name, text) in &entries {
            let id = state.add_element(ElementType::Div).expect("div");
            let mut patch = ElementPatch::text("en", text.clone());
            patch.name = Some(name.clone());
            state.update_element(id, patch);
        }
        let yaml = export(&state, ExportFormat::Yaml);
        let records = parse_records(ImportFormat::Yaml, &yaml).expect("parse");
        prop_assert_eq!(records.len(), entries.len());
        for (record, (name, text)) in records.iter().zip(&entries) {
            prop_assert_eq!(&record.name, name);
            prop_assert_eq!(&record.text["en"].text, text);
        }
    }
}
