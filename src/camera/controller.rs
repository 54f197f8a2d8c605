use glam::Vec2;
use wgpu::util::DeviceExt;

use crate::camera::core::{CameraUniform, OrthoCamera};
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Owns the camera and its GPU uniform, applying view commands and
/// re-uploading when they change.
pub struct CameraController {
    /// The orthographic camera.
    pub camera: OrthoCamera,
    /// CPU copy of the uniform.
    pub uniform: CameraUniform,
    /// Uniform buffer bound at group 0.
    pub buffer: wgpu::Buffer,
    /// Layout shared by every pipeline that reads the camera.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over `buffer`.
    pub bind_group: wgpu::BindGroup,
    angle_step: f32,
    zoom_step: f32,
    rotate_speed: f32,
    dirty: bool,
}

impl CameraController {
    /// Camera and GPU resources sized to the current surface.
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let mut camera = OrthoCamera::new(options, 1.0);
        camera.resize(context.config.width, context.config.height);

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer =
            context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Camera Buffer"),
                    contents: bytemuck::cast_slice(&[uniform]),
                    usage: wgpu::BufferUsages::UNIFORM
                        | wgpu::BufferUsages::COPY_DST,
                });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            angle_step: options.angle_step,
            zoom_step: options.zoom_step,
            rotate_speed: options.rotate_speed,
            dirty: false,
        }
    }

    /// Reset the camera and step sizes from new options, keeping the
    /// current aspect ratio.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera = OrthoCamera::new(options, self.camera.aspect);
        self.angle_step = options.angle_step;
        self.zoom_step = options.zoom_step;
        self.rotate_speed = options.rotate_speed;
        self.dirty = true;
    }

    /// Rotate by a number of angle steps (arrow keys).
    pub fn rotate_steps(&mut self, azimuth: f32, elevation: f32) {
        self.camera
            .rotate(azimuth * self.angle_step, elevation * self.angle_step);
        self.dirty = true;
    }

    /// Rotate by a mouse drag delta in pixels.
    pub fn drag(&mut self, delta: Vec2) {
        self.camera.drag(delta, self.rotate_speed);
        self.dirty = true;
    }

    /// Zoom by a number of zoom steps (positive = closer).
    pub fn zoom(&mut self, steps: f32) {
        self.camera.zoom(steps * self.zoom_step);
        self.dirty = true;
    }

    /// Home orientation.
    pub fn reset(&mut self) {
        self.camera.reset();
        self.dirty = true;
    }

    /// Track a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.dirty = true;
    }

    /// Upload the uniform if anything changed since the last call.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        if !self.dirty {
            return;
        }
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
        self.dirty = false;
    }
}
