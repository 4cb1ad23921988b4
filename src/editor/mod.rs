//! The box editor: a create/edit state machine over a single bounding box.
//!
//! The host feeds pointer and key events in widget coordinates and receives
//! change notifications through an [`EditorObserver`]. All geometry inside the
//! editor is in image coordinates; the [`CoordinateMapper`] for the current
//! zoom and viewport converts at the boundary.
//!
//! ```rust
//! use labeltrack::config::EditorConfig;
//! use labeltrack::editor::{Buttons, Editor, Mode};
//! use labeltrack::model::{Point, Size};
//!
//! let mut editor = Editor::new(EditorConfig::default());
//! editor.set_viewport(Size::new(640.0, 480.0));
//! editor.set_image(Size::new(640.0, 480.0));
//!
//! editor.begin_create().unwrap();
//! editor.pointer_pressed(Point::new(10.0, 10.0));
//! editor.pointer_moved(Point::new(60.0, 50.0), Buttons::PRIMARY);
//! editor.pointer_released(Point::new(110.0, 90.0)).unwrap();
//!
//! assert_eq!(editor.mode(), Mode::Edit);
//! assert_eq!(editor.bbox().map(|b| (b.width, b.height)), Some((100.0, 80.0)));
//! ```

mod error;
mod hit;
mod host;
mod input;

#[cfg(test)]
mod tests;

pub use error::EditorError;
pub use hit::hit_test;
pub use host::{CursorController, CursorKind, EditorObserver, NoCursor, Orientation};
pub use input::{Buttons, Highlight, Key, Mode};

use host::CursorState;
use input::Drag;

use crate::config::EditorConfig;
use crate::model::{BoundingBox, Corner, Point, Size};
use crate::view::{CoordinateMapper, Zoom};

/// Status text while hovering or idle.
fn position_text(pos: Point) -> String {
    format!("X: {:.2}; Y: {:.2}", pos.x, pos.y)
}

/// Status text while a box is being drawn, resized, moved or hovered.
fn size_text(bbox: &BoundingBox, pos: Point) -> String {
    format!(
        "W: {:.2}, H: {:.2} / {}",
        bbox.width,
        bbox.height,
        position_text(pos)
    )
}

/// Interactive editor for the single box of the current image.
pub struct Editor {
    config: EditorConfig,
    zoom: Zoom,
    viewport: Size,
    /// Size of the loaded image; `None` until the host sets one.
    image: Option<Size>,
    bbox: Option<BoundingBox>,
    mode: Mode,
    /// Last pointer position in image coordinates.
    pointer: Option<Point>,
    /// Start of the create drag.
    drag_anchor: Option<Point>,
    drag: Option<Drag>,
    highlight: Highlight,
    cursor: CursorState,
    observer: Option<Box<dyn EditorObserver>>,
}

impl Editor {
    /// Create an editor in edit mode with no image, no box and no cursor
    /// control.
    pub fn new(config: EditorConfig) -> Self {
        let zoom = Zoom::new(i64::from(config.default_zoom_percent));
        Self {
            config,
            zoom,
            viewport: Size::new(0.0, 0.0),
            image: None,
            bbox: None,
            mode: Mode::Edit,
            pointer: None,
            drag_anchor: None,
            drag: None,
            highlight: Highlight::None,
            cursor: CursorState::new(Box::new(NoCursor)),
            observer: None,
        }
    }

    /// Use `controller` for cursor feedback.
    pub fn with_cursor(mut self, controller: impl CursorController + 'static) -> Self {
        self.cursor = CursorState::new(Box::new(controller));
        self
    }

    /// Register the observer that receives change notifications, replacing
    /// any previous one.
    pub fn set_observer(&mut self, observer: impl EditorObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The current box, if any.
    pub fn bbox(&self) -> Option<BoundingBox> {
        self.bbox
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Last pointer position in image coordinates.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Start point of the create drag, once the pointer was pressed in create
    /// mode.
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// The corner under the pointer, if any.
    pub fn highlighted_corner(&self) -> Option<Corner> {
        match self.highlight {
            Highlight::Corner(corner) => Some(corner),
            _ => None,
        }
    }

    /// Check if the pointer is over the box interior (away from the corners).
    pub fn is_box_hovered(&self) -> bool {
        self.highlight == Highlight::Box
    }

    /// Check if a resize, move or pan drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The cursor the editor currently has pushed, if any.
    pub fn cursor(&self) -> Option<CursorKind> {
        self.cursor.current()
    }

    /// Mapper for the current image, zoom and viewport.
    pub fn mapper(&self) -> Option<CoordinateMapper> {
        self.image.map(|image| self.mapper_for(image))
    }

    /// The rectangle being drawn in create mode, from the anchor to the
    /// pointer (clamped to the image).
    pub fn rubber_band(&self) -> Option<BoundingBox> {
        if self.mode != Mode::Create {
            return None;
        }
        let anchor = self.drag_anchor?;
        let pointer = self.pointer?;
        let image = self.image?;
        Some(BoundingBox::from_corners(anchor, image.clamp(pointer)))
    }

    /// Where to draw the guide lines in create mode before the press: the
    /// pointer, while it is over the image.
    pub fn crosshair(&self) -> Option<Point> {
        if self.mode != Mode::Create || self.drag_anchor.is_some() {
            return None;
        }
        let pointer = self.pointer?;
        self.image?.contains(&pointer).then_some(pointer)
    }

    // ========================================================================
    // Host state
    // ========================================================================

    /// Load an image of the given size. Any drag, highlight or half-drawn box
    /// is dropped; the current box is kept.
    pub fn set_image(&mut self, size: Size) {
        self.reset_interaction();
        self.image = Some(size);
        log::debug!("Editor image set to {}x{}", size.width, size.height);
    }

    /// Unload the image. Create mode is left, since it needs an image.
    pub fn clear_image(&mut self) {
        self.reset_interaction();
        self.image = None;
        if self.mode == Mode::Create {
            self.leave_create();
        }
        log::debug!("Editor image cleared");
    }

    /// Replace the box, e.g. after switching images. No change notification
    /// is sent.
    pub fn set_box(&mut self, bbox: Option<BoundingBox>) {
        self.cancel_drag();
        self.highlight = Highlight::None;
        self.bbox = bbox;
    }

    /// Set the size of the widget the image is shown in.
    pub fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Set the zoom level in percent (clamped to the supported range).
    pub fn set_scale(&mut self, percent: u32) {
        self.set_zoom(Zoom::new(i64::from(percent)));
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        if zoom != self.zoom {
            log::debug!("Zoom {}% -> {}%", self.zoom.percent(), zoom.percent());
            self.zoom = zoom;
        }
    }

    /// Zoom in by the configured step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.zoom_in(self.config.zoom_step_percent));
    }

    /// Zoom out by the configured step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.zoom_out(self.config.zoom_step_percent));
    }

    /// Apply a mouse wheel angle delta, one configured step per notch.
    pub fn zoom_wheel(&mut self, angle_delta: i32) {
        self.set_zoom(self.zoom.wheel(angle_delta, self.config.zoom_step_percent));
    }

    /// Largest zoom that shows the whole image. No-op without an image.
    pub fn fit_to_window(&mut self) {
        if let Some(zoom) = self.image.and_then(|image| Zoom::fit_window(image, self.viewport)) {
            self.set_zoom(zoom);
        }
    }

    // ========================================================================
    // Pointer events
    // ========================================================================

    /// Pointer moved to `widget`. With only the primary button held in edit
    /// mode this continues the drag captured at press; otherwise it updates
    /// the hover state.
    pub fn pointer_moved(&mut self, widget: Point, buttons: Buttons) {
        let Some(image) = self.image else {
            return;
        };
        let mapper = self.mapper_for(image);
        let pos = mapper.to_image(widget);
        self.pointer = Some(pos);

        match self.mode {
            Mode::Create => {
                self.cursor.set(CursorKind::Draw);
                let text = match self.rubber_band() {
                    Some(band) => size_text(&band, pos),
                    None => position_text(pos),
                };
                self.emit_status(&text);
            }
            Mode::Edit if buttons.is_primary_only() => self.drag_to(image, pos),
            Mode::Edit => self.hover(pos, mapper.to_image_len(self.config.hit_epsilon)),
        }
    }

    /// Primary button pressed at `widget`.
    ///
    /// In create mode this anchors the new box. In edit mode the gesture is
    /// picked from what is under the pointer: a corner starts a resize, the
    /// interior a move, anything else a pan.
    pub fn pointer_pressed(&mut self, widget: Point) {
        let Some(image) = self.image else {
            return;
        };
        let mapper = self.mapper_for(image);
        let pos = mapper.to_image(widget);
        self.pointer = Some(pos);

        match self.mode {
            Mode::Create => {
                let anchor = image.clamp(pos);
                self.drag_anchor = Some(anchor);
                log::debug!("Create drag anchored at ({:.2}, {:.2})", anchor.x, anchor.y);
            }
            Mode::Edit => {
                self.cancel_drag();
                self.hover(pos, mapper.to_image_len(self.config.hit_epsilon));
                let drag = match self.highlight {
                    Highlight::Corner(corner) => Drag::Resize(corner),
                    Highlight::Box => {
                        self.cursor.set(CursorKind::Move);
                        Drag::Move { last: pos }
                    }
                    Highlight::None => {
                        self.cursor.push(CursorKind::Grab);
                        Drag::Pan { origin: pos }
                    }
                };
                log::debug!("Drag started: {:?}", drag);
                self.drag = Some(drag);
            }
        }
    }

    /// Primary button released at `widget`.
    ///
    /// Finishes a create drag (committing the box and returning to edit mode)
    /// or ends the current edit drag. Fails without changing anything when no
    /// press preceded it.
    pub fn pointer_released(&mut self, widget: Point) -> Result<(), EditorError> {
        let Some(image) = self.image else {
            return Ok(());
        };
        let mapper = self.mapper_for(image);
        let pos = mapper.to_image(widget);
        let radius = mapper.to_image_len(self.config.hit_epsilon);

        match self.mode {
            Mode::Create => {
                let Some(anchor) = self.drag_anchor.take() else {
                    return Err(self.reject("finish a box", "no create drag in progress"));
                };
                self.pointer = Some(pos);
                self.finish_create(anchor, image.clamp(pos));
                self.hover(pos, radius);
            }
            Mode::Edit => {
                let Some(drag) = self.drag.take() else {
                    return Err(self.reject("end a drag", "no drag in progress"));
                };
                self.pointer = Some(pos);
                if let Drag::Pan { .. } = drag {
                    self.cursor.pop();
                }
                log::debug!("Drag finished: {:?}", drag);
                self.hover(pos, radius);
            }
        }
        Ok(())
    }

    /// Pointer entered the widget: re-apply the last cursor.
    pub fn pointer_entered(&mut self) {
        self.cursor.reapply();
    }

    /// Pointer left the widget: give the cursor back to the host.
    pub fn pointer_left(&mut self) {
        self.cursor.restore();
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Arrow keys nudge the box in edit mode; Escape cancels create mode.
    pub fn key_pressed(&mut self, key: Key) {
        match (self.mode, key.direction()) {
            (Mode::Create, None) => self.leave_create(),
            (Mode::Edit, Some((dx, dy))) => {
                let step = self.config.nudge_step;
                self.nudge(dx * step, dy * step);
            }
            _ => {}
        }
    }

    /// Enter create mode: the next press-drag-release draws a new box.
    pub fn begin_create(&mut self) -> Result<(), EditorError> {
        if self.mode == Mode::Create {
            return Err(self.reject("begin a box", "already creating one"));
        }
        if self.image.is_none() {
            return Err(self.reject("begin a box", "no image loaded"));
        }

        self.cancel_drag();
        self.highlight = Highlight::None;
        self.drag_anchor = None;
        self.set_mode(Mode::Create);
        self.cursor.set(CursorKind::Draw);
        Ok(())
    }

    /// Leave create mode without committing anything.
    pub fn cancel_create(&mut self) -> Result<(), EditorError> {
        if self.mode != Mode::Create {
            return Err(self.reject("cancel a box", "not creating one"));
        }
        self.leave_create();
        Ok(())
    }

    /// Remove the box.
    pub fn delete_current_box(&mut self) -> Result<(), EditorError> {
        if self.mode == Mode::Create {
            return Err(self.reject("delete the box", "a box is being drawn"));
        }
        self.cancel_drag();
        self.highlight = Highlight::None;
        self.commit(None);
        log::debug!("Box deleted");
        Ok(())
    }

    /// Replace the box with a copy of the previous image's box.
    pub fn copy_from_previous(&mut self, previous: Option<BoundingBox>) -> Result<(), EditorError> {
        if self.mode == Mode::Create {
            return Err(self.reject("copy the previous box", "a box is being drawn"));
        }
        self.cancel_drag();
        self.highlight = Highlight::None;
        self.commit(previous);
        log::debug!("Box copied from previous image: {:?}", previous);
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn mapper_for(&self, image: Size) -> CoordinateMapper {
        CoordinateMapper::new(self.zoom.scale(), image, self.viewport)
    }

    fn hover(&mut self, pos: Point, radius: f32) {
        self.highlight = match &self.bbox {
            Some(bbox) => hit_test(bbox, &pos, radius),
            None => Highlight::None,
        };

        let (kind, text) = match (self.highlight, self.bbox) {
            (Highlight::Corner(_), _) => (CursorKind::Point, position_text(pos)),
            (Highlight::Box, Some(bbox)) => (CursorKind::Grab, size_text(&bbox, pos)),
            _ => (CursorKind::Default, position_text(pos)),
        };
        self.cursor.set(kind);
        self.emit_status(&text);
    }

    fn drag_to(&mut self, image: Size, pos: Point) {
        match (self.drag, self.bbox) {
            (Some(Drag::Resize(corner)), Some(mut bbox)) => {
                let corner = bbox.set_corner(corner, image.clamp(pos));
                self.drag = Some(Drag::Resize(corner));
                self.highlight = Highlight::Corner(corner);
                self.commit(Some(bbox));
                self.emit_status(&size_text(&bbox, pos));
            }
            (Some(Drag::Move { last }), Some(bbox)) => {
                self.cursor.set(CursorKind::Move);
                let (dx, dy) = pos.delta_from(&last);
                let moved = bbox.translated(dx, dy);
                let shown = if moved != bbox && moved.is_within(image) {
                    self.drag = Some(Drag::Move { last: pos });
                    self.commit(Some(moved));
                    moved
                } else {
                    bbox
                };
                self.emit_status(&size_text(&shown, pos));
            }
            (Some(Drag::Pan { origin }), _) => {
                let (dx, dy) = pos.delta_from(&origin);
                self.emit_scroll(dx, Orientation::Horizontal);
                self.emit_scroll(dy, Orientation::Vertical);
                self.emit_status(&position_text(pos));
            }
            _ => self.emit_status(&position_text(pos)),
        }
    }

    fn nudge(&mut self, dx: f32, dy: f32) {
        let (Some(image), Some(bbox)) = (self.image, self.bbox) else {
            return;
        };
        let moved = bbox.translated(dx, dy);
        if !moved.is_within(image) {
            log::debug!("Nudge by ({dx}, {dy}) rejected: box would leave the image");
            return;
        }
        self.commit(Some(moved));
        if let Some(pos) = self.pointer {
            self.emit_status(&size_text(&moved, pos));
        }
    }

    fn finish_create(&mut self, anchor: Point, end: Point) {
        let bbox = BoundingBox::from_corners(anchor, end);
        let min = self.config.min_box_size;
        if bbox.width < min || bbox.height < min {
            log::debug!(
                "Discarded {:.2}x{:.2} box, smaller than {:.2}",
                bbox.width,
                bbox.height,
                min
            );
        } else {
            log::debug!("Created box {bbox}");
            self.commit(Some(bbox));
        }
        self.set_mode(Mode::Edit);
    }

    fn leave_create(&mut self) {
        if self.drag_anchor.take().is_some() {
            log::debug!("Discarded box in progress");
        }
        self.set_mode(Mode::Edit);
        self.cursor.set(CursorKind::Default);
    }

    fn cancel_drag(&mut self) {
        if let Some(Drag::Pan { .. }) = self.drag.take() {
            self.cursor.pop();
        }
    }

    fn reset_interaction(&mut self) {
        self.cancel_drag();
        self.highlight = Highlight::None;
        self.drag_anchor = None;
        self.pointer = None;
    }

    fn reject(&self, operation: &'static str, reason: &'static str) -> EditorError {
        let err = EditorError::invalid(operation, self.mode, reason);
        log::warn!("{err}");
        err
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        log::debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_mode_changed(mode);
        }
    }

    fn commit(&mut self, bbox: Option<BoundingBox>) {
        self.bbox = bbox;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_box_changed(bbox);
        }
    }

    fn emit_status(&mut self, text: &str) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_status_text(text);
        }
    }

    fn emit_scroll(&mut self, delta: f32, orientation: Orientation) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_scroll_request(delta, orientation);
        }
    }
}
