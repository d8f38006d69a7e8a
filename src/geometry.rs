//! Target geometry generation.
//!
//! Computes, once, the 3D target position and visual class for every
//! particle: a hollow cuboid cabinet shell plus two driver rings on the
//! front face. Each target is paired with a random starting position far
//! outside the visible volume, so the assembly phase reads as the swarm
//! flying in from everywhere.
//!
//! Generation is driven by a caller-supplied RNG; seed it for
//! reproducible point clouds:
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let particles = geometry::generate(&GeometryConfig::default(), &mut rng);
//! ```

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::particle::{Particle, ParticleKind, Rgb, DARK_GOLD, GOLD};

/// Dimensions and counts for the target point cloud.
///
/// All lengths are world units centered on the origin. Defaults reproduce
/// the stock cabinet silhouette.
#[derive(Debug, Clone)]
pub struct GeometryConfig {
    /// Virtual cabinet extents (width, height, depth).
    pub box_size: Vec3,
    /// Particles in the hollow shell cluster.
    pub shell_count: usize,
    /// Particles in the woofer ring.
    pub woofer_count: usize,
    /// Particles in the tweeter ring.
    pub tweeter_count: usize,
    /// Woofer disk radius.
    pub woofer_radius: f32,
    /// Vertical woofer center offset (screen-down positive).
    pub woofer_offset: f32,
    /// Tweeter disk radius.
    pub tweeter_radius: f32,
    /// Vertical tweeter center offset.
    pub tweeter_offset: f32,
    /// How far driver rings sit in front of the shell's front face,
    /// to avoid z-fighting with it.
    pub face_lift: f32,
    /// Half-extent of the far-spawn cube particles start in.
    pub spawn_extent: f32,
    /// Per-particle base size range.
    pub min_base_size: f32,
    pub max_base_size: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            box_size: Vec3::new(220.0, 360.0, 180.0),
            shell_count: 1200,
            woofer_count: 500,
            tweeter_count: 200,
            woofer_radius: 85.0,
            woofer_offset: 60.0,
            tweeter_radius: 30.0,
            tweeter_offset: -100.0,
            face_lift: 2.0,
            spawn_extent: 1000.0,
            min_base_size: 1.0,
            max_base_size: 3.0,
        }
    }
}

impl GeometryConfig {
    /// Total particle count across all three clusters.
    pub fn particle_count(&self) -> usize {
        self.shell_count + self.woofer_count + self.tweeter_count
    }
}

/// Generate the full particle set: targets, far-spawn starts and base sizes.
pub fn generate(config: &GeometryConfig, rng: &mut impl Rng) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(config.particle_count());
    let half = config.box_size / 2.0;

    // Hollow shell: pick one of six faces, two in-face coordinates uniform
    // over the face, the third pinned at the half-dimension.
    for _ in 0..config.shell_count {
        let r1 = rng.gen_range(-half.x..half.x);
        let r2 = rng.gen_range(-half.y..half.y);
        let r3 = rng.gen_range(-half.z..half.z);
        let target = match rng.gen_range(0..6u8) {
            0 => Vec3::new(r1, r2, half.z),
            1 => Vec3::new(r1, r2, -half.z),
            2 => Vec3::new(half.x, r2, r3),
            3 => Vec3::new(-half.x, r2, r3),
            4 => Vec3::new(r1, half.y, r3),
            _ => Vec3::new(r1, -half.y, r3),
        };
        particles.push(spawn(target, GOLD, ParticleKind::Shell, config, rng));
    }

    let front = half.z + config.face_lift;
    for _ in 0..config.woofer_count {
        let target = disk_target(config.woofer_radius, config.woofer_offset, front, rng);
        particles.push(spawn(target, GOLD, ParticleKind::PrimaryDriver, config, rng));
    }
    for _ in 0..config.tweeter_count {
        let target = disk_target(config.tweeter_radius, config.tweeter_offset, front, rng);
        particles.push(spawn(target, DARK_GOLD, ParticleKind::SecondaryDriver, config, rng));
    }

    particles
}

/// Random angle x random radius on the front-face plane, shifted
/// vertically. Center-dense on purpose - driver cones read denser at the
/// dust cap.
fn disk_target(radius: f32, offset_y: f32, z: f32, rng: &mut impl Rng) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let r = rng.gen::<f32>() * radius;
    Vec3::new(angle.cos() * r, offset_y + angle.sin() * r, z)
}

fn spawn(
    target: Vec3,
    color: Rgb,
    kind: ParticleKind,
    config: &GeometryConfig,
    rng: &mut impl Rng,
) -> Particle {
    let e = config.spawn_extent;
    let position = Vec3::new(
        rng.gen_range(-e..e),
        rng.gen_range(-e..e),
        rng.gen_range(-e..e),
    );
    let base_size = rng.gen_range(config.min_base_size..config.max_base_size);
    Particle::new(position, target, base_size, color, kind)
}
