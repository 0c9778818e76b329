//! # Sporeling
//!
//! An interactive particle greeting card: fifteen thousand points and a
//! few hundred ornaments drift through a scattered cloud until a toggle
//! gathers them into a glowing mushroom tree, and back again.
//!
//! The morphing engine is the heart of the crate. Each point stores two
//! fixed endpoints - a home in the scatter sphere and a home on the
//! mushroom solid - and a single smoothed progress scalar blends every
//! point between them on the GPU, with breathing, wave and scatter-drift
//! motion layered on top. Ornaments carry real per-frame state instead,
//! easing toward their active endpoint each frame.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sporeling::config::CardConfig;
//! use sporeling::window::CardApp;
//! use winit::event_loop::{ControlFlow, EventLoop};
//!
//! let event_loop = EventLoop::new()?;
//! event_loop.set_control_flow(ControlFlow::Poll);
//! let mut app = CardApp::new(CardConfig::default());
//! event_loop.run_app(&mut app)?;
//! ```
//!
//! ## Controls
//!
//! | Input | Effect |
//! |-------|--------|
//! | Space or click | Toggle scattered / tree |
//! | Drag | Orbit the camera |
//! | Scroll | Zoom |
//! | P | Pause the animation clock |
//! | Escape | Quit |
//!
//! ## Layout
//!
//! - [`sampler`] - random points on the scatter sphere and mushroom solid
//! - [`particles`] - the foliage field and its CPU mirror of the shader math
//! - [`ornaments`] - instanced boxes and spheres with eased motion state
//! - [`morph`] - the binary scattered/tree state and its toggle
//! - [`gpu`] - device setup, pipelines, shaders, finishing pass
//! - [`window`] - event handling and the render loop

pub mod config;
pub mod error;
pub mod gpu;
pub mod morph;
pub mod ornaments;
pub mod particles;
pub mod sampler;
pub mod time;
pub mod window;

pub use glam::{Vec2, Vec3, Vec4};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::{CardConfig, MushroomParams};
    pub use crate::error::{CardError, GpuError};
    pub use crate::morph::{AppState, MorphController};
    pub use crate::ornaments::{OrnamentField, ShapeClass};
    pub use crate::particles::ParticleField;
    pub use crate::sampler::ShapeSampler;
    pub use crate::time::FrameClock;
    pub use crate::window::CardApp;
    pub use crate::{Vec2, Vec3, Vec4};
}
