//! Error types for the noise grid application.
//!
//! Generation itself cannot fail; these cover window/GPU setup and the
//! settings file.

use std::fmt;
use std::io;

/// Errors that can occur while starting or running the application.
#[derive(Debug)]
pub enum AppError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// Failed to create a surface for rendering.
    Surface(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    Device(wgpu::RequestDeviceError),
    /// Settings file or recording output could not be read or written.
    Io(io::Error),
    /// Settings file is not valid JSON for the expected shape.
    SettingsFormat(serde_json::Error),
    /// Frame capture failed.
    Capture(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            AppError::Window(e) => write!(f, "Failed to create window: {}", e),
            AppError::Surface(e) => write!(f, "Failed to create GPU surface: {}", e),
            AppError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12/GL support."),
            AppError::Device(e) => write!(f, "Failed to create GPU device: {}", e),
            AppError::Io(e) => write!(f, "File access failed: {}", e),
            AppError::SettingsFormat(e) => write!(f, "Invalid settings file: {}", e),
            AppError::Capture(msg) => write!(f, "Failed to capture frame: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::Surface(e) => Some(e),
            AppError::Device(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::SettingsFormat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for AppError {
    fn from(e: winit::error::OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for AppError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        AppError::Surface(e)
    }
}

impl From<wgpu::RequestDeviceError> for AppError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        AppError::Device(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SettingsFormat(e)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
