//! Paint interaction state machine.
//!
//! A [`PaintSession`] owns one [`DotMatrix`] and turns the pointer events
//! reported by the presentation layer into dot mutations. The presentation
//! layer stays on the other side of the [`PaintSink`] boundary: it feeds
//! events in and gets per-dot change notifications plus the refreshed
//! encoded text back. It never mutates the matrix directly.
//!
//! Pointer tracking is deliberately global: the engaged flag follows the
//! primary button across the whole surface, so a drag that enters a dot
//! paints it without needing a fresh press on every dot.

use crate::{DotMatrix, Position, Result, codec};

/// What a paint gesture does to the dots it touches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    #[default]
    Draw,
    Erase,
}

impl DrawMode {
    /// The dot value this mode paints.
    pub fn dot_value(self) -> bool {
        self == DrawMode::Draw
    }
}

/// Receives change notifications from a [`PaintSession`].
///
/// All methods default to no-ops so collaborators only implement what they
/// display. `encoded_changed` fires after every mutating operation with the
/// current base64 text. `dot_changed` fires only for single-dot paints;
/// whole-buffer operations (clear, load) are reported through
/// `encoded_changed` alone and the collaborator re-reads the matrix.
pub trait PaintSink {
    fn dot_changed(&mut self, _pos: Position, _value: bool) {}
    fn encoded_changed(&mut self, _encoded: &str) {}
}

/// Sink for collaborators that only poll [`PaintSession::encoded`].
#[derive(Default)]
pub struct NullSink {}

impl PaintSink for NullSink {}

pub struct PaintSession {
    matrix: DotMatrix,
    draw_mode: DrawMode,
    pointer_engaged: bool,
}

impl PaintSession {
    pub fn new(matrix: DotMatrix) -> Self {
        Self {
            matrix,
            draw_mode: DrawMode::default(),
            pointer_engaged: false,
        }
    }

    pub fn matrix(&self) -> &DotMatrix {
        &self.matrix
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// Takes effect on the next paint; already painted dots keep their value.
    pub fn set_draw_mode(&mut self, draw_mode: DrawMode) {
        self.draw_mode = draw_mode;
    }

    pub fn is_pointer_engaged(&self) -> bool {
        self.pointer_engaged
    }

    /// Global primary-button press, not scoped to any dot.
    pub fn pointer_pressed(&mut self) {
        self.pointer_engaged = true;
    }

    /// Global primary-button release: ends the current drag.
    pub fn pointer_released(&mut self) {
        self.pointer_engaged = false;
    }

    /// Press on a dot: always paints, and starts a drag.
    pub fn dot_pressed(&mut self, pos: impl Into<Position>, sink: &mut dyn PaintSink) {
        self.pointer_engaged = true;
        self.paint(pos.into(), sink);
    }

    /// Pointer entering a dot mid-drag: paints only while engaged.
    pub fn dot_entered(&mut self, pos: impl Into<Position>, sink: &mut dyn PaintSink) {
        if !self.pointer_engaged {
            return;
        }
        self.paint(pos.into(), sink);
    }

    /// Clears the whole canvas, independent of draw mode and pointer state.
    pub fn clear_all(&mut self, sink: &mut dyn PaintSink) {
        self.matrix.clear();
        sink.encoded_changed(&codec::encode(&self.matrix));
    }

    /// Restores a previously encoded canvas.
    ///
    /// # Errors
    ///
    /// Propagates the codec errors; the canvas is unchanged and no
    /// notification fires unless the whole payload applied.
    pub fn load_encoded(&mut self, text: &str, sink: &mut dyn PaintSink) -> Result<()> {
        codec::decode(&mut self.matrix, text)?;
        sink.encoded_changed(&codec::encode(&self.matrix));
        Ok(())
    }

    /// The current base64 view of the canvas.
    pub fn encoded(&self) -> String {
        codec::encode(&self.matrix)
    }

    fn paint(&mut self, pos: Position, sink: &mut dyn PaintSink) {
        let value = self.draw_mode.dot_value();
        match self.matrix.set_dot(pos, value) {
            Ok(()) => {
                sink.dot_changed(pos, value);
                sink.encoded_changed(&codec::encode(&self.matrix));
            }
            Err(err) => {
                // malformed event from the collaborator, drop it
                log::warn!("paint event ignored: {err}");
            }
        }
    }
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new(DotMatrix::default())
    }
}
