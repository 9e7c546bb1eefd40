use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};

use crate::canvas::{PlaneMapper, Uniforms};

/// What the pointer is currently doing. `Drawing` paints a point on every
/// cursor move; `Adjusting` drags a matrix-cell slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    Idle,
    Drawing,
    Adjusting { row: usize, col: usize },
}

pub struct GpuContext<'a> {
    pub surface: Surface<'a>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub scene_pipeline: RenderPipeline,
    pub panel_pipeline: RenderPipeline,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniforms {
    pub screen_size: [f32; 2],
    pub _padding: [f32; 2], // Padding to make it 16-byte aligned
}

pub struct ScreenBuffers {
    pub uniform: Buffer,
    pub bind_group: BindGroup,
}

pub struct Scene {
    pub mapper: PlaneMapper,
    pub uniform: Uniforms,
    pub uniform_buffer: Buffer,
    pub uniform_bind_group: BindGroup,
}

pub struct GeometryBuffers {
    pub vertex: Option<Buffer>,
    pub index: Option<Buffer>,
    pub count: u32,
}

pub struct InputState {
    pub cursor_pos: [f32; 2],
    pub mode: PointerMode,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            cursor_pos: [0.0; 2],
            mode: PointerMode::Idle,
        }
    }
}
