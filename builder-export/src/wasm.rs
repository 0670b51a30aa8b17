//! WebAssembly bindings for the page builder.
//!
//! This module provides JavaScript-callable functions when compiled to WASM.

use wasm_bindgen::prelude::*;

use builder_core::{
    Action, EditorConfig, EditorState, ElementId, ElementPatch, ElementType, Point,
};

use crate::export::{ExportFormat, TemplateExporter};
use crate::import::{import_into, ImportFormat};

/// Initialize the builder WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Editor instance for WASM.
#[wasm_bindgen]
pub struct WasmEditor {
    state: EditorState,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Create a new editor with the default configuration.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: EditorState::default(),
        }
    }

    /// Create an editor from a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error string if the configuration is invalid.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<WasmEditor, String> {
        let config = EditorConfig::from_json(json).map_err(|e| e.to_string())?;
        Ok(Self {
            state: EditorState::new(config),
        })
    }

    /// Get all elements as JSON.
    #[wasm_bindgen(js_name = getElementsJson)]
    #[must_use]
    pub fn get_elements_json(&self) -> String {
        serde_json::to_string(self.state.elements()).unwrap_or_default()
    }

    /// ID of the selected element, if any.
    #[wasm_bindgen(js_name = selectedId)]
    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.state.selected().map(|id| id.to_string())
    }

    /// Add an element of the given type (`div`, `button`, `grid`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error string for unknown or non-addable types.
    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&mut self, element_type: &str) -> Result<String, String> {
        let element_type: ElementType = element_type.parse()?;
        let id = self.state.add_element(element_type).map_err(|e| e.to_string())?;
        Ok(id.to_string())
    }

    /// Merge a JSON patch into an element.
    ///
    /// # Errors
    ///
    /// Returns an error string if the ID or patch is malformed.
    #[wasm_bindgen(js_name = updateElement)]
    pub fn update_element(&mut self, id: &str, patch_json: &str) -> Result<(), String> {
        let id = parse_id(id)?;
        let patch: ElementPatch = serde_json::from_str(patch_json).map_err(|e| e.to_string())?;
        self.state.update_element(id, patch);
        Ok(())
    }

    /// Remove an element.
    ///
    /// # Errors
    ///
    /// Returns an error string if the ID is malformed.
    #[wasm_bindgen(js_name = removeElement)]
    pub fn remove_element(&mut self, id: &str) -> Result<(), String> {
        self.state.remove_element(parse_id(id)?);
        Ok(())
    }

    /// Duplicate an element, returning the clone's ID.
    ///
    /// # Errors
    ///
    /// Returns an error string if the element does not exist.
    #[wasm_bindgen(js_name = duplicateElement)]
    pub fn duplicate_element(&mut self, id: &str) -> Result<String, String> {
        let copy = self
            .state
            .duplicate_element(parse_id(id)?)
            .map_err(|e| e.to_string())?;
        Ok(copy.to_string())
    }

    /// Apply a JSON-encoded [`Action`].
    ///
    /// # Errors
    ///
    /// Returns an error string if the action is malformed.
    pub fn dispatch(&mut self, action_json: &str) -> Result<(), String> {
        let action: Action = serde_json::from_str(action_json).map_err(|e| e.to_string())?;
        self.state.dispatch(action);
        Ok(())
    }

    /// Pointer pressed on an element.
    ///
    /// # Errors
    ///
    /// Returns an error string if the ID is malformed.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, id: &str, x: f32, y: f32) -> Result<(), String> {
        let id = parse_id(id)?;
        self.state.dispatch(Action::PointerDown {
            id,
            pointer: Point::new(x, y),
        });
        Ok(())
    }

    /// Pointer moved over the canvas.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.state.dispatch(Action::PointerMove {
            pointer: Point::new(x, y),
        });
    }

    /// Pointer released.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.state.dispatch(Action::PointerUp);
    }

    /// Undo the last change.
    pub fn undo(&mut self) {
        self.state.undo();
    }

    /// Redo the last undone change.
    pub fn redo(&mut self) {
        self.state.redo();
    }

    /// Whether undo is available.
    #[wasm_bindgen(js_name = canUndo)]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// Whether redo is available.
    #[wasm_bindgen(js_name = canRedo)]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// Export the elements in the active language.
    ///
    /// # Errors
    ///
    /// Returns an error string for unknown formats or encoding failures.
    #[wasm_bindgen(js_name = exportTemplate)]
    pub fn export_template(&self, format: &str) -> Result<String, String> {
        let format: ExportFormat = format.parse()?;
        TemplateExporter::for_language(self.state.active_language())
            .export(self.state.elements(), format)
            .map_err(|e| e.to_string())
    }

    /// Import `json` or `yaml` template text, returning the number of elements added.
    ///
    /// # Errors
    ///
    /// Returns the user-facing error message if the text cannot be imported.
    #[wasm_bindgen(js_name = importTemplate)]
    pub fn import_template(&mut self, format: &str, text: &str) -> Result<usize, String> {
        let format = match format.to_ascii_lowercase().as_str() {
            "json" => ImportFormat::Json,
            "yaml" | "yml" => ImportFormat::Yaml,
            other => return Err(format!("Unsupported import format: {other}")),
        };
        import_into(&mut self.state, format, text).map_err(|e| e.to_string())
    }
}

impl Default for WasmEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_id(id: &str) -> Result<ElementId, String> {
    ElementId::parse(id).map_err(|e| e.to_string())
}
