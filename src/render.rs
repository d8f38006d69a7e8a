//! Projection and render step.
//!
//! Executed once per frame: depth-sort the whole particle set far to
//! near, rotate around the Y axis, perspective-divide against a fixed
//! camera distance, and paint each surviving particle as a filled circle
//! with depth-based size and opacity falloff. The full per-frame re-sort
//! is an accepted cost at a couple thousand particles.
//!
//! The step keeps no state of its own; it is a function of the particle
//! slice, the rotation angle and the viewport.

use glam::Vec2;

use crate::particle::Particle;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Simulated camera distance; also the numerator of the projection scale.
pub const PERSPECTIVE: f32 = 800.0;

/// Circles at or below this projected radius are skipped.
pub const MIN_RADIUS: f32 = 0.1;

/// Fog-by-depth opacity floor; distant particles fade but never vanish.
pub const MIN_ALPHA: f32 = 0.2;

/// Paint one frame.
///
/// Sorts `particles` in place by depth (the store's order carries no
/// meaning). While `exploding`, the rendered radius is additionally
/// multiplied by the decaying base size so shrink-to-vanish compounds
/// with perspective shrink.
pub fn draw_frame<S: Surface>(
    particles: &mut [Particle],
    angle_y: f32,
    exploding: bool,
    viewport: &Viewport,
    surface: &mut S,
) {
    surface.clear();

    // Far-to-near, so closer particles paint last and occlude.
    particles.sort_unstable_by(|a, b| b.position.z.total_cmp(&a.position.z));

    let (sin_y, cos_y) = angle_y.sin_cos();
    let center = viewport.center();

    for p in particles.iter() {
        // Y-axis rotation in the x-z plane; y is unaffected.
        let rot_x = p.position.x * cos_y - p.position.z * sin_y;
        let rot_z = p.position.z * cos_y + p.position.x * sin_y;

        let camera_z = rot_z + PERSPECTIVE;
        if camera_z <= 0.0 {
            // Behind the camera this frame; not removed, just not drawn.
            continue;
        }
        let scale = PERSPECTIVE / camera_z;

        let screen = center + Vec2::new(rot_x, p.position.y) * scale;
        let radius = p.size * scale * if exploding { p.base_size } else { 1.0 };
        if radius <= MIN_RADIUS {
            continue;
        }

        let alpha = scale.clamp(MIN_ALPHA, 1.0);
        surface.fill_circle(screen, radius, p.color, alpha);
    }
}
