//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const CENTER_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    pub const SCORE: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    pub const HIGH_CONTRAST_FG: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// The set of colors one frame is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub center_line: [f32; 4],
    pub score: [f32; 4],
    pub paddle: [f32; 4],
    pub ball: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            center_line: colors::CENTER_LINE,
            score: colors::SCORE,
            paddle: colors::PADDLE,
            ball: colors::BALL,
        }
    }
}

impl Palette {
    /// Everything fully opaque white on black
    pub fn high_contrast() -> Self {
        Self {
            background: colors::BACKGROUND,
            center_line: colors::HIGH_CONTRAST_FG,
            score: colors::HIGH_CONTRAST_FG,
            paddle: colors::HIGH_CONTRAST_FG,
            ball: colors::HIGH_CONTRAST_FG,
        }
    }

    pub fn from_settings(settings: &crate::Settings) -> Self {
        if settings.high_contrast {
            Self::high_contrast()
        } else {
            Self::default()
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
