//! Colored line-list renderer for the trajectory and the axes.
//!
//! Everything the viewer draws is a list of independent segments with a
//! color per vertex. The trajectory is expanded from a
//! point prefix into consecutive segments so that one pipeline serves both
//! the strip-like attractor and the disjoint axis lines.

use glam::DVec3;

use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::renderer::pipeline_util;
use crate::util::color::{self, ColorMode};

/// Initial vertex capacity; two vertices per segment of a default-size
/// trajectory.
const INITIAL_VERTEX_CAPACITY: usize = 2 * 50_000;

/// One endpoint of a line segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl LineVertex {
    /// Vertex at a trajectory point.
    #[must_use]
    pub fn at(point: DVec3, color: [f32; 3]) -> Self {
        Self {
            position: point.as_vec3().to_array(),
            color,
        }
    }
}

/// Vertex buffer layout for [`LineVertex`].
pub fn line_vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0, // position
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1, // color
            },
        ],
    }
}

/// Expand a visible trajectory prefix into segment vertices.
///
/// Segment `i` joins points `i` and `i + 1` and is drawn in the single
/// color `color_for(i, total, mode)`, where `total` is the full trajectory
/// length so colors stay put while the prefix grows. Fewer than two points
/// draw nothing.
#[must_use]
pub fn trajectory_vertices(
    points: &[DVec3],
    total: usize,
    mode: ColorMode,
) -> Vec<LineVertex> {
    let segments = points.len().saturating_sub(1);
    let mut vertices = Vec::with_capacity(segments * 2);
    for (i, pair) in points.windows(2).enumerate() {
        let color = color::color_for(i, total, mode);
        vertices.push(LineVertex::at(pair[0], color));
        vertices.push(LineVertex::at(pair[1], color));
    }
    vertices
}

/// Pipeline plus a growable vertex buffer for one batch of lines.
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: TypedBuffer<LineVertex>,
}

impl LineRenderer {
    /// Build the line pipeline against the camera bind group layout.
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        label: &str,
    ) -> Self {
        let vertex_buffer = TypedBuffer::with_capacity(
            &context.device,
            &format!("{label} Vertex Buffer"),
            INITIAL_VERTEX_CAPACITY,
            wgpu::BufferUsages::VERTEX,
        );
        let pipeline = Self::create_pipeline(context, camera_layout, label);
        Self {
            pipeline,
            vertex_buffer,
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        label: &str,
    ) -> wgpu::RenderPipeline {
        let shader = context
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Line Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/line.wgsl").into(),
                ),
            });

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("{label} Pipeline Layout")),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            },
        );

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&format!("{label} Pipeline")),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[line_vertex_buffer_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::surface_fragment_targets(
                        context.format(),
                    ),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Replace the vertex data.
    pub fn upload(&mut self, context: &RenderContext, vertices: &[LineVertex]) {
        let _ = self
            .vertex_buffer
            .write(&context.device, &context.queue, vertices);
    }

    /// Record the draw into an open render pass.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        if self.vertex_buffer.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_vertex_buffer(
            0,
            self.vertex_buffer
                .buffer()
                .slice(..self.vertex_buffer.byte_len()),
        );
        pass.draw(0..self.vertex_buffer.count() as u32, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<DVec3> {
        (0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn prefix_becomes_consecutive_segments() {
        let pts = points(4);
        let verts = trajectory_vertices(&pts, 10, ColorMode::Rainbow);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[2].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[5].position, [3.0, 0.0, 0.0]);
    }

    #[test]
    fn fewer_than_two_points_draws_nothing() {
        assert!(trajectory_vertices(&[], 0, ColorMode::Fade).is_empty());
        assert!(trajectory_vertices(&points(1), 5, ColorMode::Fade).is_empty());
    }

    #[test]
    fn single_mode_is_constant_cyan() {
        let verts = trajectory_vertices(&points(5), 5, ColorMode::Single);
        assert!(verts.iter().all(|v| v.color == color::SINGLE_COLOR));
    }

    #[test]
    fn colors_are_relative_to_the_full_length() {
        let pts = points(3);
        let verts = trajectory_vertices(&pts, 100, ColorMode::Fade);
        assert_eq!(verts[2].color, color::color_for(1, 100, ColorMode::Fade));
        assert_ne!(verts[2].color, color::color_for(1, 3, ColorMode::Fade));
    }

    #[test]
    fn each_segment_is_one_solid_color() {
        let verts = trajectory_vertices(&points(4), 4, ColorMode::Fade);
        for (i, segment) in verts.chunks(2).enumerate() {
            let expected = color::color_for(i, 4, ColorMode::Fade);
            assert_eq!(segment[0].color, expected);
            assert_eq!(segment[1].color, expected);
        }
        assert_eq!(verts[1].color, [0.0, 0.2, 1.0]);
    }

    #[test]
    fn vertex_layout_matches_struct() {
        assert_eq!(size_of::<LineVertex>(), 24);
        assert_eq!(line_vertex_buffer_layout().array_stride, 24);
    }
}
