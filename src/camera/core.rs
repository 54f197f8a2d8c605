use glam::{Mat4, Vec2};

use crate::options::CameraOptions;

/// Orthographic camera rotated by azimuth (about Y) and elevation
/// (about X), both in degrees and wrapped into (-360, 360).
#[derive(Debug, Clone, PartialEq)]
pub struct OrthoCamera {
    /// Rotation about the vertical axis.
    pub azimuth: f32,
    /// Rotation about the horizontal axis.
    pub elevation: f32,
    /// Half-height of the view box.
    pub dim: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Half-depth of the view box.
    pub depth: f32,
    home: (f32, f32),
    min_dim: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl OrthoCamera {
    /// Camera in the configured home orientation.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            azimuth: options.azimuth,
            elevation: options.elevation,
            dim: options.dim,
            aspect,
            depth: options.depth,
            home: (options.azimuth, options.elevation),
            min_dim: options.min_dim,
        }
    }

    /// Rotate by whole-degree deltas, wrapping at ±360.
    pub fn rotate(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth = (self.azimuth + d_azimuth) % 360.0;
        self.elevation = (self.elevation + d_elevation) % 360.0;
    }

    /// Rotate by a mouse drag, `speed` degrees per pixel.
    pub fn drag(&mut self, delta: Vec2, speed: f32) {
        self.rotate(delta.x * speed, delta.y * speed);
    }

    /// Back to the configured home angles.
    pub fn reset(&mut self) {
        (self.azimuth, self.elevation) = self.home;
    }

    /// Shrink the view box by `amount` world units (negative grows it).
    pub fn zoom(&mut self, amount: f32) {
        self.dim = (self.dim - amount).max(self.min_dim);
    }

    /// Update the aspect ratio; zero-height windows keep aspect 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
    }

    /// Rotation part of the view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.elevation.to_radians())
            * Mat4::from_rotation_y(self.azimuth.to_radians())
    }

    /// Orthographic box `[-aspect·dim, aspect·dim] × [-dim, dim]`, depth
    /// `[-depth, depth]`, mapped to wgpu's [0, 1] depth range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let half_width = self.aspect * self.dim;
        Mat4::orthographic_rh(
            -half_width,
            half_width,
            -self.dim,
            self.dim,
            -self.depth,
            self.depth,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Update from the camera's current state.
    pub fn update_view_proj(&mut self, camera: &OrthoCamera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
    }
}
