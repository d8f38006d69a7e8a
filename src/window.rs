//! Windowed host for the intro.
//!
//! Owns the winit event loop side: creates the window and its `pixels`
//! framebuffer on resume, drives one engine tick plus one painted frame
//! per `RedrawRequested`, forwards resizes to the viewport adapter, and
//! maps a click or the space bar to the explosion trigger. When the
//! intro deactivates, the window is hidden and the loop exits.

use std::sync::Arc;

use glam::Vec2;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::engine::{Engine, EngineConfig};
use crate::error::IntroError;
use crate::intro::Intro;
use crate::particle::Rgb;
use crate::surface::{FrameBuffer, Surface};
use crate::time::Time;

/// A window-backed drawing surface: CPU framebuffer presented through
/// `pixels`, hidden by hiding the window itself.
pub struct WindowSurface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    frame: FrameBuffer,
}

impl WindowSurface {
    fn new(window: Arc<Window>) -> Result<Self, IntroError> {
        let size = window.inner_size();
        let texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(size.width, size.height, texture)?;
        Ok(Self {
            frame: FrameBuffer::new(size.width, size.height),
            window,
            pixels,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Err(e) = self.pixels.resize_surface(width, height) {
            eprintln!("Surface resize error: {e}");
            return;
        }
        if let Err(e) = self.pixels.resize_buffer(width, height) {
            eprintln!("Buffer resize error: {e}");
            return;
        }
        self.frame.resize(width, height);
    }

    /// Copy the rasterized frame to the GPU texture and present it.
    fn present(&mut self) {
        self.pixels.frame_mut().copy_from_slice(self.frame.data());
        if let Err(e) = self.pixels.render() {
            eprintln!("Render error: {e}");
        }
    }
}

impl Surface for WindowSurface {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.frame.fill_circle(center, radius, color, alpha);
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
    }
}

/// The winit application driving the intro.
pub struct IntroApp {
    config: EngineConfig,
    window: Option<Arc<Window>>,
    intro: Option<Intro<WindowSurface>>,
    time: Time,
}

impl IntroApp {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            window: None,
            intro: None,
            time: Time::new(),
        }
    }
}

impl ApplicationHandler for IntroApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window_attrs = Window::default_attributes()
            .with_title("boxburst")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("{}", IntroError::from(e));
                event_loop.exit();
                return;
            }
        };

        match WindowSurface::new(window.clone()) {
            Ok(surface) => {
                let size = window.inner_size();
                let engine = Engine::new(self.config.clone());
                self.intro = Some(Intro::new(engine, surface, size.width, size.height));
                self.window = Some(window);
                self.time = Time::new();
            }
            Err(e) => {
                // Fatal by contract: no partial engine without a surface.
                eprintln!("{e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(intro) = &mut self.intro {
                    intro.handle_resize(size.width, size.height);
                    intro.surface_mut().resize(size.width, size.height);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(intro) = &mut self.intro {
                    intro.detonate();
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(intro) = &mut self.intro {
                    intro.detonate();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(intro) = &mut self.intro else {
                    return;
                };
                let (elapsed, _) = self.time.update();
                if intro.advance(elapsed) {
                    intro.surface_mut().present();
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                } else {
                    // Deactivated: the surface is already hidden, stop
                    // scheduling frames.
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}
