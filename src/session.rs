//! Per-image boxes of an opened image set.
//!
//! A session holds one `Option<BoundingBox>` per image in image-list order,
//! the current position, and whether anything changed since the label file
//! was last written. Image decoding and directory scanning stay with the
//! host; the session only needs the image count.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::format::{self, FormatError};
use crate::model::BoundingBox;

/// Errors from session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Index past the end of the image list
    #[error("Image index {index} out of range (session has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Reading or writing the label file failed
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Boxes for every image of the set, plus navigation and save state.
#[derive(Debug, Clone, Default)]
pub struct LabelSession {
    entries: Vec<Option<BoundingBox>>,
    current_index: usize,
    /// Label file to save to, once one was opened.
    label_path: Option<PathBuf>,
    dirty: bool,
    /// Save before every navigation step.
    auto_save: bool,
}

impl LabelSession {
    /// Create a session of `image_count` images, none of them labeled yet.
    pub fn new(image_count: usize) -> Self {
        Self {
            entries: vec![None; image_count],
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// All entries in image order.
    pub fn entries(&self) -> &[Option<BoundingBox>] {
        &self.entries
    }

    /// Box of the current image.
    pub fn current_box(&self) -> Option<BoundingBox> {
        self.entries.get(self.current_index).copied().flatten()
    }

    /// Box of the image before the current one.
    pub fn previous_box(&self) -> Option<BoundingBox> {
        let index = self.current_index.checked_sub(1)?;
        self.entries.get(index).copied().flatten()
    }

    /// Box of image `index`.
    pub fn get(&self, index: usize) -> Result<Option<BoundingBox>, SessionError> {
        self.entries
            .get(index)
            .copied()
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Replace the box of image `index`.
    pub fn set(&mut self, index: usize, bbox: Option<BoundingBox>) -> Result<(), SessionError> {
        let len = self.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange { index, len })?;
        *slot = bbox;
        self.dirty = true;
        Ok(())
    }

    /// Store the editor's box for the current image.
    pub fn store_current(&mut self, bbox: Option<BoundingBox>) {
        if let Some(slot) = self.entries.get_mut(self.current_index) {
            *slot = bbox;
            self.dirty = true;
        }
    }

    /// Get progress string like "[3 / 15]", or "[0 / 0]" when empty.
    pub fn progress(&self) -> String {
        if self.is_empty() {
            return "[0 / 0]".to_string();
        }
        format!("[{} / {}]", self.current_index + 1, self.len())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Jump to image `index`.
    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Move to the next image. Stops at the last image; returns whether the
    /// position changed. With auto-save on, the label file is written first.
    pub fn next_image(&mut self) -> Result<bool, SessionError> {
        self.save_if_auto()?;
        if self.current_index + 1 >= self.len() {
            return Ok(false);
        }
        self.current_index += 1;
        log::debug!("Moved to image {}", self.progress());
        Ok(true)
    }

    /// Move to the previous image. Stops at the first image; returns whether
    /// the position changed. With auto-save on, the label file is written
    /// first.
    pub fn prev_image(&mut self) -> Result<bool, SessionError> {
        self.save_if_auto()?;
        if self.current_index == 0 {
            return Ok(false);
        }
        self.current_index -= 1;
        log::debug!("Moved to image {}", self.progress());
        Ok(true)
    }

    /// Copy the previous image's box onto the current image. Returns `false`
    /// on the first image, where there is nothing to copy.
    pub fn copy_from_previous(&mut self) -> bool {
        let Some(previous) = self.current_index.checked_sub(1) else {
            return false;
        };
        let bbox = self.entries.get(previous).copied().flatten();
        self.store_current(bbox);
        true
    }

    /// Move to the next image and copy the box it came from. Nothing is
    /// copied when already on the last image.
    pub fn next_and_copy(&mut self) -> Result<bool, SessionError> {
        if !self.next_image()? {
            return Ok(false);
        }
        Ok(self.copy_from_previous())
    }

    // ========================================================================
    // Label file
    // ========================================================================

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn auto_save(&self) -> bool {
        self.auto_save
    }

    pub fn set_auto_save(&mut self, enabled: bool) {
        self.auto_save = enabled;
    }

    pub fn label_path(&self) -> Option<&Path> {
        self.label_path.as_deref()
    }

    /// Replace all boxes with the content of a label file.
    ///
    /// Malformed lines leave their image empty and are returned. Lines past
    /// the last image are ignored; images past the last line stay empty.
    pub fn load_labels(&mut self, content: &str) -> Vec<FormatError> {
        let parsed = format::parse_labels_lenient(content);
        self.apply(parsed)
    }

    /// Serialize all boxes in label file format.
    pub fn to_label_text(&self) -> String {
        format::format_labels(&self.entries)
    }

    /// Open the label file at `path` and make it the save target.
    ///
    /// A missing file is not an error: the session starts out empty and the
    /// file is created on the first save.
    pub fn open_label_file(&mut self, path: &Path) -> Result<Vec<FormatError>, SessionError> {
        let errors = match format::read_label_file(path) {
            Ok(parsed) => self.apply(parsed),
            Err(FormatError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Label file {:?} does not exist yet, starting empty", path);
                self.entries.fill(None);
                self.dirty = false;
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        self.label_path = Some(path.to_path_buf());
        Ok(errors)
    }

    /// Write the label file if there are unsaved changes. Returns whether a
    /// file was written.
    pub fn save(&mut self) -> Result<bool, SessionError> {
        let Some(path) = self.label_path.as_deref() else {
            log::debug!("No label file opened, nothing saved");
            return Ok(false);
        };
        if !self.dirty {
            return Ok(false);
        }
        format::write_label_file(path, &self.entries)?;
        self.dirty = false;
        Ok(true)
    }

    fn save_if_auto(&mut self) -> Result<(), SessionError> {
        if self.auto_save {
            self.save()?;
        }
        Ok(())
    }

    fn apply(&mut self, parsed: format::LenientParse) -> Vec<FormatError> {
        let line_count = parsed.entries.len();
        if line_count > self.len() {
            log::warn!(
                "Label file has {} lines for {} images, ignoring the rest",
                line_count,
                self.len()
            );
        }

        self.entries.fill(None);
        for (slot, entry) in self.entries.iter_mut().zip(parsed.entries) {
            *slot = entry;
        }
        self.dirty = false;
        parsed.errors
    }
}
