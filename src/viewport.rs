//! Viewport adapter.
//!
//! Owns the logical drawing-surface pixel dimensions and the derived
//! center point. The host forwards resize notifications here; nothing
//! else may mutate these values. The render step reads them at the start
//! of each frame, so a resize arriving mid-frame simply applies to the
//! next one.

use glam::Vec2;

/// Logical pixel dimensions of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Resynchronize to the current display area.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Projection origin: half of each dimension.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}
