//! Drawing surface abstraction and the CPU rasterizer.
//!
//! The render step paints through the [`Surface`] trait so it never knows
//! whether it is talking to a window or a test stub. [`FrameBuffer`] is
//! the real implementation: a plain RGBA8 buffer with alpha-blended
//! circle fills, presented by the windowed host through the `pixels`
//! crate.

use glam::Vec2;

use crate::particle::Rgb;

/// Frame clear color (near-black, slightly blue).
pub const CLEAR_COLOR: Rgb = Rgb::new(5, 5, 13);

/// Something the render step can paint on.
///
/// `fill_circle` takes the opacity explicitly, so no draw state leaks
/// from one particle to the next.
pub trait Surface {
    /// Erase the whole frame to the background color.
    fn clear(&mut self);

    /// Paint a filled circle, blending `color` over the existing frame
    /// at `alpha` (0..=1).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32);

    /// Remove the surface from view. Called once, at deactivation;
    /// no painting happens afterwards.
    fn hide(&mut self);
}

/// CPU-side RGBA8 framebuffer.
#[derive(Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut fb = Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        };
        fb.clear();
        fb
    }

    /// Match a new pixel size, discarding the old frame contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data = vec![0; (width * height * 4) as usize];
        self.clear();
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGB at a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = ((y * self.width + x) * 4) as usize;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    #[inline]
    fn blend(&mut self, index: usize, color: Rgb, alpha: f32) {
        for (offset, channel) in [color.r, color.g, color.b].into_iter().enumerate() {
            let dst = self.data[index + offset] as f32;
            self.data[index + offset] = (dst + (channel as f32 - dst) * alpha) as u8;
        }
        self.data[index + 3] = 255;
    }
}

impl Surface for FrameBuffer {
    fn clear(&mut self) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = CLEAR_COLOR.r;
            px[1] = CLEAR_COLOR.g;
            px[2] = CLEAR_COLOR.b;
            px[3] = 255;
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        if radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        // Scan the bounding box, clipped to the frame. Saturating float
        // casts handle centers far off screen.
        let x0 = ((center.x - radius).floor() as i64).max(0);
        let x1 = ((center.x + radius).ceil() as i64).min(self.width as i64 - 1);
        let y0 = ((center.y - radius).floor() as i64).max(0);
        let y1 = ((center.y + radius).ceil() as i64).min(self.height as i64 - 1);
        if x1 < x0 || y1 < y0 {
            return;
        }
        let r2 = radius * radius;
        for y in y0 as u32..=y1 as u32 {
            for x in x0 as u32..=x1 as u32 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend(((y * self.width + x) * 4) as usize, color, alpha);
                }
            }
        }
    }

    /// Offscreen buffers have nothing to hide.
    fn hide(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_fills_background() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_circle(Vec2::new(2.0, 2.0), 2.0, Rgb::new(255, 0, 0), 1.0);
        fb.clear();
        assert_eq!(fb.pixel(2, 2), CLEAR_COLOR);
    }

    #[test]
    fn test_opaque_circle_paints_center() {
        let mut fb = FrameBuffer::new(16, 16);
        let red = Rgb::new(255, 0, 0);
        fb.fill_circle(Vec2::new(8.0, 8.0), 3.0, red, 1.0);
        assert_eq!(fb.pixel(8, 8), red);
        // Well outside the radius stays background.
        assert_eq!(fb.pixel(1, 1), CLEAR_COLOR);
    }

    #[test]
    fn test_alpha_blends_toward_color() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill_circle(Vec2::new(4.0, 4.0), 2.0, Rgb::new(255, 255, 255), 0.5);
        let px = fb.pixel(4, 4);
        assert!(px.r > CLEAR_COLOR.r && px.r < 255);
        assert!((px.r as i32 - 130).abs() <= 2);
    }

    #[test]
    fn test_offscreen_circles_are_clipped() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill_circle(Vec2::new(-1000.0, 4.0), 5.0, Rgb::new(255, 0, 0), 1.0);
        fb.fill_circle(Vec2::new(4.0, 1e9), 5.0, Rgb::new(255, 0, 0), 1.0);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fb.pixel(x, y), CLEAR_COLOR);
            }
        }
    }

    #[test]
    fn test_edge_circle_paints_partially() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill_circle(Vec2::new(0.0, 0.0), 2.0, Rgb::new(0, 255, 0), 1.0);
        assert_eq!(fb.pixel(0, 0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_resize_discards_frame() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_circle(Vec2::new(2.0, 2.0), 2.0, Rgb::new(255, 0, 0), 1.0);
        fb.resize(6, 6);
        assert_eq!(fb.width(), 6);
        assert_eq!(fb.data().len(), 6 * 6 * 4);
        assert_eq!(fb.pixel(2, 2), CLEAR_COLOR);
    }
}
