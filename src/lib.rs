//! Noise grid library - lattice of noise-driven streaks

pub mod camera;
pub mod cli;
pub mod error;
pub mod fps;
pub mod grid;
pub mod gui;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod settings;
