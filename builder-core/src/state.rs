//! Editor state and its reducer.
//!
//! All mutation goes through [`EditorState::apply`], which consumes the state
//! and returns the next one. Every action that changes the element list
//! records exactly one history snapshot; undo and redo move through those
//! snapshots without recording.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::device::{CanvasSize, DevicePreset, Orientation};
use crate::element::{Element, ElementId, ElementKind, ElementType, DEFAULT_GRID_ITEMS};
use crate::history::History;
use crate::interaction::{DragState, Point};
use crate::language::{is_valid_language_code, validate_language_code, DEFAULT_LANGUAGE};
use crate::patch::ElementPatch;
use crate::{BuilderError, BuilderResult};

/// Offset applied to duplicated elements.
pub const DUPLICATE_OFFSET: f32 = 20.0;

/// An editor action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Append a new element (grids also get their default items) and select it.
    AddElement {
        /// Type of the new element.
        element_type: ElementType,
    },
    /// Merge a patch into an element. No-op for unknown IDs.
    UpdateElement {
        /// Target element.
        id: ElementId,
        /// Fields to change.
        patch: ElementPatch,
    },
    /// Remove an element. Grid items of a removed grid are kept.
    RemoveElement {
        /// Target element.
        id: ElementId,
    },
    /// Clone an element with a fresh ID, offset position and top paint order.
    DuplicateElement {
        /// Element to clone.
        id: ElementId,
    },
    /// Append already-built elements, e.g. from an import.
    ///
    /// Elements whose id is already in use get a fresh one.
    AppendElements {
        /// Elements to append.
        elements: Vec<Element>,
    },
    /// Change the selection.
    Select {
        /// Element to select, or `None` to clear.
        id: Option<ElementId>,
    },
    /// Pointer pressed on an element.
    PointerDown {
        /// Element under the pointer.
        id: ElementId,
        /// Pointer position in canvas pixels.
        pointer: Point,
    },
    /// Pointer moved over the canvas.
    PointerMove {
        /// Pointer position in canvas pixels.
        pointer: Point,
    },
    /// Pointer released or left the canvas.
    PointerUp,
    /// Restore the previous snapshot.
    Undo,
    /// Restore the next snapshot.
    Redo,
    /// Add a display language, copying `en` text into every element.
    AddLanguage {
        /// Language code.
        code: String,
    },
    /// Switch the display language.
    SetLanguage {
        /// Language code; must already be added.
        code: String,
    },
    /// Switch the simulated device.
    SetDevice {
        /// New preset.
        device: DevicePreset,
    },
    /// Switch the device orientation.
    SetOrientation {
        /// New orientation.
        orientation: Orientation,
    },
    /// Change the canvas zoom, clamped to the configured bounds.
    SetZoom {
        /// Requested zoom factor.
        zoom: f32,
    },
    /// Enter or leave preview mode. Dragging is disabled while previewing.
    SetPreview {
        /// Whether to preview.
        preview: bool,
    },
}

/// The complete editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    history: History,
    languages: Vec<String>,
    active_language: String,
    device: DevicePreset,
    orientation: Orientation,
    zoom: f32,
    preview: bool,
    drag: Option<DragState>,
    config: EditorConfig,
}

impl EditorState {
    /// Create an empty editor from a configuration.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let mut languages = vec![DEFAULT_LANGUAGE.to_string()];
        let active_language = if is_valid_language_code(&config.language) {
            config.language.clone()
        } else {
            tracing::warn!("Ignoring invalid configured language {}", config.language);
            DEFAULT_LANGUAGE.to_string()
        };
        if active_language != DEFAULT_LANGUAGE {
            languages.push(active_language.clone());
        }

        Self {
            elements: Vec::new(),
            selected: None,
            history: History::new(Vec::new(), config.history_capacity),
            languages,
            active_language,
            device: config.device,
            orientation: config.orientation,
            zoom: config.clamp_zoom(1.0),
            preview: false,
            drag: None,
            config,
        }
    }

    /// Reduce an action into the next state.
    #[must_use]
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::AddElement { element_type } => self.add(element_type),
            Action::UpdateElement { id, patch } => self.update(id, &patch),
            Action::RemoveElement { id } => self.remove(id),
            Action::DuplicateElement { id } => self.duplicate(id),
            Action::AppendElements { elements } => self.append(elements),
            Action::Select { id } => {
                self.selected = id.filter(|id| self.element(*id).is_some());
            }
            Action::PointerDown { id, pointer } => self.pointer_down(id, pointer),
            Action::PointerMove { pointer } => self.pointer_move(pointer),
            Action::PointerUp => self.drag = None,
            Action::Undo => {
                if let Some(snapshot) = self.history.undo() {
                    self.elements = snapshot.to_vec();
                    self.after_restore();
                }
            }
            Action::Redo => {
                if let Some(snapshot) = self.history.redo() {
                    self.elements = snapshot.to_vec();
                    self.after_restore();
                }
            }
            Action::AddLanguage { code } => self.add_language_code(code),
            Action::SetLanguage { code } => {
                if self.languages.contains(&code) {
                    self.active_language = code;
                } else {
                    tracing::warn!("Ignoring switch to unknown language {code}");
                }
            }
            Action::SetDevice { device } => self.device = device,
            Action::SetOrientation { orientation } => self.orientation = orientation,
            Action::SetZoom { zoom } => self.zoom = self.config.clamp_zoom(zoom),
            Action::SetPreview { preview } => {
                self.preview = preview;
                if preview {
                    self.drag = None;
                }
            }
        }
        self
    }

    /// Apply an action in place.
    pub fn dispatch(&mut self, action: Action) {
        *self = std::mem::take(self).apply(action);
    }

    // ------------------------------------------------------------------
    // Checked convenience operations
    // ------------------------------------------------------------------

    /// Add an element and return its ID.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidOperation`] for grid items, which only
    /// exist as children of a grid.
    pub fn add_element(&mut self, element_type: ElementType) -> BuilderResult<ElementId> {
        if ElementKind::with_defaults(element_type).is_none() {
            return Err(BuilderError::InvalidOperation(format!(
                "{element_type} elements are created with their grid"
            )));
        }
        self.dispatch(Action::AddElement { element_type });
        self.selected
            .ok_or_else(|| BuilderError::InvalidOperation("element was not added".to_string()))
    }

    /// Merge a patch into an element.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) {
        self.dispatch(Action::UpdateElement { id, patch });
    }

    /// Remove an element.
    pub fn remove_element(&mut self, id: ElementId) {
        self.dispatch(Action::RemoveElement { id });
    }

    /// Duplicate an element and return the clone's ID.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ElementNotFound`] if `id` is unknown.
    pub fn duplicate_element(&mut self, id: ElementId) -> BuilderResult<ElementId> {
        if self.element(id).is_none() {
            return Err(BuilderError::ElementNotFound(id.to_string()));
        }
        self.dispatch(Action::DuplicateElement { id });
        self.selected
            .ok_or_else(|| BuilderError::ElementNotFound(id.to_string()))
    }

    /// Add a display language.
    ///
    /// Returns `false` if the language was already present.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidLanguage`] for malformed codes.
    pub fn add_language(&mut self, code: &str) -> BuilderResult<bool> {
        validate_language_code(code)?;
        if self.languages.iter().any(|lang| lang == code) {
            return Ok(false);
        }
        self.dispatch(Action::AddLanguage {
            code: code.to_string(),
        });
        Ok(true)
    }

    /// Switch the display language.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownLanguage`] if the language was not added.
    pub fn set_language(&mut self, code: &str) -> BuilderResult<()> {
        if !self.languages.iter().any(|lang| lang == code) {
            return Err(BuilderError::UnknownLanguage(code.to_string()));
        }
        self.dispatch(Action::SetLanguage {
            code: code.to_string(),
        });
        Ok(())
    }

    /// Undo the last change.
    pub fn undo(&mut self) {
        self.dispatch(Action::Undo);
    }

    /// Redo the last undone change.
    pub fn redo(&mut self) {
        self.dispatch(Action::Redo);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All elements in list order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get an element by ID.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Elements that are not grid items, in list order.
    pub fn top_level_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.is_grid_item())
    }

    /// Grid items belonging to `grid`, in list order.
    pub fn children_of(&self, grid: ElementId) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |e| e.parent() == Some(grid))
    }

    /// Grid items whose parent grid no longer exists.
    #[must_use]
    pub fn orphaned_grid_items(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| {
                e.parent().is_some_and(|parent| {
                    !self.elements.iter().any(|g| g.id == parent && g.is_grid())
                })
            })
            .map(|e| e.id)
            .collect()
    }

    /// Topmost draggable element under a canvas point.
    ///
    /// Higher `z_index` wins; ties go to the later element in the list.
    #[must_use]
    pub fn element_at(&self, x: f32, y: f32) -> Option<ElementId> {
        let canvas = self.canvas_size();
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_grid_item() && e.bounds(canvas).contains(x, y))
            .max_by_key(|(index, e)| (e.z_index, *index))
            .map(|(_, e)| e.id)
    }

    /// ID of the selected element.
    #[must_use]
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// The selected element.
    #[must_use]
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.element(id))
    }

    /// Display languages in the order they were added.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Current display language.
    #[must_use]
    pub fn active_language(&self) -> &str {
        &self.active_language
    }

    /// Current device preset.
    #[must_use]
    pub fn device(&self) -> DevicePreset {
        self.device
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Canvas size for the current device and orientation.
    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.device.canvas_size(self.orientation)
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Whether preview mode is on.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The undo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether undo would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Configuration the editor was created with.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Reducer arms
    // ------------------------------------------------------------------

    fn commit(&mut self) {
        self.history.record(self.elements.clone());
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn next_z_index(&self) -> i32 {
        self.elements.len() as i32
    }

    fn add(&mut self, element_type: ElementType) {
        let Some(kind) = ElementKind::with_defaults(element_type) else {
            tracing::warn!("Ignoring request to add a standalone {element_type}");
            return;
        };
        let z_index = self.next_z_index();
        let element = Element::new(kind, z_index);
        let id = element.id;
        let is_grid = element.is_grid();
        self.elements.push(element);

        if is_grid {
            for index in 0..DEFAULT_GRID_ITEMS {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let item_z = z_index + index as i32 + 1;
                self.elements.push(Element::grid_item(id, index, item_z));
            }
        }
        for language in &self.languages {
            for element in self
                .elements
                .iter_mut()
                .filter(|e| e.id == id || e.parent() == Some(id))
            {
                element.content.ensure_language(language);
            }
        }

        tracing::debug!("Added {element_type} element {id}");
        self.selected = Some(id);
        self.commit();
    }

    fn update(&mut self, id: ElementId, patch: &ElementPatch) {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else {
            return;
        };
        patch.apply_to(element);
        self.commit();
    }

    fn remove(&mut self, id: ElementId) {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        if self.elements.len() == before {
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.drag.is_some_and(|drag| drag.element == id) {
            self.drag = None;
        }
        self.commit();
    }

    fn duplicate(&mut self, id: ElementId) {
        let Some(source) = self.element(id) else {
            return;
        };
        let mut clone = source.clone();
        clone.id = ElementId::new();
        clone.geometry.x += DUPLICATE_OFFSET;
        clone.geometry.y += DUPLICATE_OFFSET;
        clone.z_index = self.next_z_index();

        self.selected = Some(clone.id);
        self.elements.push(clone);
        self.commit();
    }

    fn append(&mut self, mut elements: Vec<Element>) {
        if elements.is_empty() {
            return;
        }
        let mut taken: HashSet<ElementId> = self.elements.iter().map(|e| e.id).collect();
        let mut reassigned: HashMap<ElementId, ElementId> = HashMap::new();
        for element in &mut elements {
            if !taken.insert(element.id) {
                let fresh = ElementId::new();
                tracing::warn!("Reassigning clashing element id {} to {fresh}", element.id);
                reassigned.insert(element.id, fresh);
                element.id = fresh;
                taken.insert(fresh);
            }
            for language in &self.languages {
                element.content.ensure_language(language);
            }
        }
        for element in &mut elements {
            if let ElementKind::GridItem { parent, .. } = &mut element.kind {
                if let Some(fresh) = reassigned.get(parent) {
                    *parent = *fresh;
                }
            }
        }
        tracing::info!("Appending {} elements", elements.len());
        self.elements.extend(elements);
        self.commit();
    }

    fn pointer_down(&mut self, id: ElementId, pointer: Point) {
        if self.preview {
            return;
        }
        let canvas = self.canvas_size();
        let Some(element) = self.element(id) else {
            return;
        };
        self.drag = DragState::begin(element, pointer, canvas);
        self.selected = Some(id);
    }

    fn pointer_move(&mut self, pointer: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let canvas = self.canvas_size();
        let Some(element) = self.element(drag.element) else {
            self.drag = None;
            return;
        };
        let (x, y) = drag.position_for(element, pointer, canvas);
        #[allow(clippy::float_cmp)]
        let unchanged = element.geometry.x == x && element.geometry.y == y;
        if !unchanged {
            self.update(drag.element, &ElementPatch::position(x, y));
        }
    }

    fn add_language_code(&mut self, code: String) {
        if !is_valid_language_code(&code) {
            tracing::warn!("Ignoring invalid language code {code}");
            return;
        }
        if self.languages.contains(&code) {
            return;
        }
        for element in &mut self.elements {
            element.content.ensure_language(&code);
        }
        self.languages.push(code);
        if !self.elements.is_empty() {
            self.commit();
        }
    }

    fn after_restore(&mut self) {
        self.drag = None;
        for element in &mut self.elements {
            for language in &self.languages {
                element.content.ensure_language(language);
            }
        }
        if self.selected.is_some_and(|id| self.element(id).is_none()) {
            self.selected = None;
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
