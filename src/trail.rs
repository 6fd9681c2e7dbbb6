//! Trail builder and windowed runner.
//!
//! [`Trail`] is the crate's front door: configure with method chaining,
//! then call [`Trail::run`] to open a window and drive the effect until it
//! is closed. The engine's render tick is a re-arming callback: each
//! `RedrawRequested` steps the simulation, draws, and requests the next
//! redraw as its final action, so exiting the event loop is all it takes
//! to stop every callback.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId, WindowLevel},
};

use crate::engine::{Engine, TrailConfig};
use crate::error::RunError;
use crate::gpu::{tessellate::tessellate, GpuState};
use crate::time::Time;
use crate::visuals::{Palette, VisualConfig};

/// A pointer-trail effect, ready to configure and run.
///
/// # Example
///
/// ```no_run
/// use sparktrail::prelude::*;
///
/// Trail::new()
///     .with_palette(Palette::Fire)
///     .with_max_particles(512)
///     .run()
///     .unwrap();
/// ```
pub struct Trail {
    config: TrailConfig,
    visuals: VisualConfig,
    seed: Option<u64>,
    overlay: bool,
}

impl Trail {
    /// Create a trail with default settings (fire sparks, additive glow).
    pub fn new() -> Self {
        Self {
            config: TrailConfig::default(),
            visuals: VisualConfig::default(),
            seed: None,
            overlay: false,
        }
    }

    /// Set the spawn palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Set the maximum number of concurrent particles. When the store is
    /// full the oldest particle is evicted first.
    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.config.max_particles = max;
        self
    }

    /// Set the minimum per-event pointer travel (pixels) for a guaranteed
    /// spawn.
    pub fn with_spawn_threshold(mut self, pixels: f32) -> Self {
        self.config.spawn_threshold = pixels;
        self
    }

    /// Set the probability of spawning below the travel threshold.
    /// Zero disables idle sparks entirely.
    pub fn with_idle_trickle(mut self, probability: f32) -> Self {
        self.config.idle_trickle = probability.clamp(0.0, 1.0);
        self
    }

    /// Set the per-event burst: at most `max_burst` particles, scaled by
    /// `burst_scale` particles per pixel of travel.
    pub fn with_burst(mut self, max_burst: u32, burst_scale: f32) -> Self {
        self.config.max_burst = max_burst;
        self.config.burst_scale = burst_scale;
        self
    }

    /// Set the fraction of pointer displacement each spark inherits.
    pub fn with_inertia(mut self, inertia: f32) -> Self {
        self.config.inertia = inertia;
        self
    }

    /// Set the initial radial speed range, pixels per tick.
    pub fn with_speed(mut self, speed: std::ops::Range<f32>) -> Self {
        self.config.speed = speed;
        self
    }

    /// Set the per-tick life decay range.
    pub fn with_decay(mut self, decay: std::ops::Range<f32>) -> Self {
        self.config.decay = decay;
        self
    }

    /// Set the base size range.
    pub fn with_size(mut self, size: std::ops::Range<f32>) -> Self {
        self.config.size = size;
        self
    }

    /// Seed the spawn RNG for a reproducible particle sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run as a pass-through overlay: transparent, undecorated,
    /// always-on-top, sized to the full monitor, and invisible to pointer
    /// hit-testing, so the sparks float above whatever is underneath.
    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    /// Configure rendering through a closure.
    ///
    /// ```no_run
    /// # use sparktrail::prelude::*;
    /// Trail::new()
    ///     .with_visuals(|v| {
    ///         v.blend_mode(BlendMode::Additive);
    ///         v.tail_scale(6.0);
    ///     })
    ///     .run()
    ///     .unwrap();
    /// ```
    pub fn with_visuals<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut VisualConfig),
    {
        f(&mut self.visuals);
        self
    }

    /// Open the window and run until it is closed (or Escape is pressed).
    /// This blocks the calling thread.
    pub fn run(self) -> Result<(), RunError> {
        let engine = match self.seed {
            Some(seed) => Engine::with_seed(self.config, seed),
            None => Engine::new(self.config),
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(engine, self.visuals, self.overlay);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    engine: Engine,
    visuals: VisualConfig,
    overlay: bool,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    time: Time,
}

impl App {
    fn new(engine: Engine, visuals: VisualConfig, overlay: bool) -> Self {
        Self {
            engine,
            visuals,
            overlay,
            window: None,
            gpu_state: None,
            time: Time::new(),
        }
    }

    fn window_attributes(&self) -> winit::window::WindowAttributes {
        let attrs = Window::default_attributes().with_title("Sparktrail");
        if self.overlay {
            attrs
                .with_transparent(true)
                .with_decorations(false)
                .with_window_level(WindowLevel::AlwaysOnTop)
                .with_fullscreen(Some(Fullscreen::Borderless(None)))
        } else {
            attrs.with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.window_attributes()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("sparktrail: {}", RunError::Window(e));
                event_loop.exit();
                return;
            }
        };

        if self.overlay {
            // Hit-test opt-out is best-effort; not every platform has it.
            let _ = window.set_cursor_hittest(false);
        }

        // A dead renderer must not take the host down with it: keep
        // stepping without output.
        let max_particles = self.engine.config().max_particles;
        match pollster::block_on(GpuState::new(
            window.clone(),
            &self.visuals,
            max_particles,
            self.overlay,
        )) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => eprintln!("sparktrail: {e}; running without a renderer"),
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state.is_pressed()
                {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.engine
                    .pointer_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.engine.pointer_left();
            }
            WindowEvent::RedrawRequested => {
                self.time.update();
                self.engine.step();

                if let Some(gpu_state) = &mut self.gpu_state {
                    let geometry =
                        tessellate(self.engine.particles(), self.visuals.tail_scale);
                    match gpu_state.render(&geometry) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if let Some(window) = &self.window {
                    if self.time.frame() % 30 == 0 {
                        window.set_title(&format!(
                            "Sparktrail - {:.0} fps - {} sparks",
                            self.time.fps(),
                            self.engine.particle_count(),
                        ));
                    }
                    // Re-arm the render tick; without this the loop stops.
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
