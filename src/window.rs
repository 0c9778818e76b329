//! Window lifecycle and the frame-driven render loop.
//!
//! One redraw callback per display refresh does everything: tick the
//! clock, step the progress trackers, rebuild the ornament batches, draw.
//! All mutable scene state is owned here on a single thread; the toggle
//! input is a fire-and-forget flip observed by the next frame.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::CardConfig;
use crate::gpu::GpuState;
use crate::morph::MorphController;
use crate::ornaments::OrnamentField;
use crate::particles::ParticleField;
use crate::sampler::ShapeSampler;
use crate::time::FrameClock;

/// Mouse travel below this many pixels counts as a click, not an orbit drag.
const CLICK_SLOP: f64 = 5.0;

/// The application: scene state plus window/GPU handles.
pub struct CardApp {
    config: CardConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    morph: MorphController,
    particles: ParticleField,
    ornaments: OrnamentField,
    clock: FrameClock,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    drag_travel: f64,
}

impl CardApp {
    /// Build the scene. One sampler feeds both fields, so a seeded sampler
    /// would reproduce the whole layout; the default seeds from entropy and
    /// every launch scatters fresh.
    pub fn new(config: CardConfig) -> Self {
        let mut sampler = ShapeSampler::new();
        let particles = ParticleField::generate(&config, &mut sampler);
        let ornaments = OrnamentField::generate(&config, &mut sampler);

        Self {
            config,
            window: None,
            gpu: None,
            morph: MorphController::new(),
            particles,
            ornaments,
            clock: FrameClock::new(),
            mouse_pressed: false,
            last_mouse_pos: None,
            drag_travel: 0.0,
        }
    }

    fn toggle(&mut self) {
        self.morph.toggle();
        log::info!("morph state: {:?}", self.morph.state());
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (elapsed, delta) = self.clock.tick();

        self.particles.update(self.morph.target_progress(), delta);
        self.ornaments.update(elapsed, self.morph.is_tree(), delta);

        let progress = self.particles.progress();
        let model = ambient_sway(elapsed, progress);

        if let Some(gpu) = &mut self.gpu {
            gpu.camera.auto_rotate(delta);
            match gpu.render(
                elapsed,
                delta,
                progress,
                model,
                self.ornaments.box_instances(),
                self.ornaments.sphere_instances(),
            ) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory, exiting");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for CardApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Sporeling")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let instance_data = self.particles.instance_data();
        match pollster::block_on(GpuState::new(window, &self.config, &instance_data)) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                log::error!("GPU initialization failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Space) => self.toggle(),
                        PhysicalKey::Code(KeyCode::KeyP) => self.clock.toggle_pause(),
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        _ => {}
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            self.mouse_pressed = true;
                            self.drag_travel = 0.0;
                        }
                        ElementState::Released => {
                            // A still click toggles; a drag was an orbit.
                            if self.mouse_pressed && self.drag_travel < CLICK_SLOP {
                                self.toggle();
                            }
                            self.mouse_pressed = false;
                            self.last_mouse_pos = None;
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;
                        self.drag_travel += dx.abs() + dy.abs();

                        if let Some(gpu) = &mut self.gpu {
                            gpu.camera.orbit(dx as f32, dy as f32);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu) = &mut self.gpu {
                    gpu.camera.zoom(scroll);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}

/// Whole-scene drift: a gentle bob and tilt, livelier while the cloud is
/// dispersed, settling as the tree forms. This is the composer's only read
/// of morph progress.
pub fn ambient_sway(elapsed: f32, progress: f32) -> Mat4 {
    let loose = 1.0 - progress;
    let speed = 1.5 + loose * 1.5;
    let bob = (elapsed * speed * 0.6).sin() * (0.25 + loose * 0.5);
    let tilt = (elapsed * speed * 0.4).sin() * (0.02 + loose * 0.06);
    let turn = (elapsed * speed * 0.25).cos() * (0.02 + loose * 0.06);

    Mat4::from_translation(Vec3::new(0.0, -2.0 + bob, 0.0))
        * Mat4::from_rotation_x(tilt)
        * Mat4::from_rotation_z(turn)
}
