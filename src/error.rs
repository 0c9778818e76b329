//! Error types for scene startup.
//!
//! The running card has no recoverable-error surface - it is a generative
//! animation with no I/O - so errors only exist on the construction path:
//! window creation, GPU acquisition, pipeline setup.

use std::fmt;

/// Errors that can occur while acquiring the GPU.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(
                f,
                "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when launching the card.
#[derive(Debug)]
pub enum CardError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            CardError::Window(e) => write!(f, "Failed to create window: {}", e),
            CardError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for CardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CardError::EventLoop(e) => Some(e),
            CardError::Window(e) => Some(e),
            CardError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for CardError {
    fn from(e: winit::error::EventLoopError) -> Self {
        CardError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for CardError {
    fn from(e: winit::error::OsError) -> Self {
        CardError::Window(e)
    }
}

impl From<GpuError> for CardError {
    fn from(e: GpuError) -> Self {
        CardError::Gpu(e)
    }
}
