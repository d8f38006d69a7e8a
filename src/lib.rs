//! # boxburst - speaker-cabinet particle intro
//!
//! A CPU particle engine that assembles a swarm of ~1900 points into the
//! silhouette of a loudspeaker enclosure (hollow cabinet shell, woofer
//! ring, tweeter ring), idles with a slow rotation, and on command
//! detonates into a radial explosion before tearing itself down.
//!
//! Everything runs on the CPU: the 3D-to-2D pipeline (Y-axis rotation,
//! perspective divide, per-frame depth sort, fog-by-depth shading) paints
//! filled circles into an RGBA framebuffer that the windowed host
//! presents through `pixels`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boxburst::prelude::*;
//! use winit::event_loop::{ControlFlow, EventLoop};
//!
//! fn main() {
//!     let event_loop = EventLoop::new().unwrap();
//!     event_loop.set_control_flow(ControlFlow::Poll);
//!
//!     let mut app = IntroApp::new(EngineConfig::default());
//!     event_loop.run_app(&mut app).unwrap();
//! }
//! ```
//!
//! Click or press space to detonate. Two seconds later the engine
//! deactivates, hides the window and the loop exits.
//!
//! ## Headless use
//!
//! The simulation never schedules itself; hosts call
//! [`Intro::advance`](intro::Intro::advance) once per frame with the
//! elapsed clock and keep going while it returns `true`. Any
//! [`Surface`](surface::Surface) implementation works, so tests drive
//! the full lifecycle against a recording stub:
//!
//! ```ignore
//! let engine = Engine::seeded(EngineConfig::default(), 7);
//! let mut intro = Intro::new(engine, StubSurface::default(), 1280, 720);
//! intro.detonate();
//! while intro.advance(clock.next_tick()) {}
//! ```
//!
//! ## Lifecycle
//!
//! | Phase | Behavior |
//! |-------|----------|
//! | Assembling | exponential smoothing toward targets, idle rotation |
//! | Exploding | radial drift with compounding accelerant, shrinking sizes |
//! | Deactivated | terminal; surface hidden, all calls inert |

pub mod engine;
pub mod error;
pub mod geometry;
pub mod intro;
pub mod particle;
pub mod physics;
pub mod render;
pub mod surface;
pub mod time;
pub mod viewport;
pub mod window;

pub use engine::{Engine, EngineConfig, Phase};
pub use error::IntroError;
pub use geometry::GeometryConfig;
pub use glam::{Vec2, Vec3};
pub use intro::Intro;
pub use particle::{Particle, ParticleKind, Rgb};
pub use physics::{CabinetSpec, DriverConfig, Topology};
pub use surface::{FrameBuffer, Surface};
pub use viewport::Viewport;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use boxburst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{Engine, EngineConfig, Phase};
    pub use crate::error::IntroError;
    pub use crate::geometry::GeometryConfig;
    pub use crate::intro::Intro;
    pub use crate::particle::{Particle, ParticleKind, Rgb};
    pub use crate::physics::{CabinetSpec, DriverConfig, Topology};
    pub use crate::surface::{FrameBuffer, Surface};
    pub use crate::time::Time;
    pub use crate::viewport::Viewport;
    pub use crate::window::IntroApp;
    pub use crate::{Vec2, Vec3};
}
